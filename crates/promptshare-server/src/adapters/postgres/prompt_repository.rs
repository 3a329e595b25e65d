//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use promptshare::{DomainError, NewPrompt, Prompt, PromptRepository, User};

/// Columns of a prompt joined with its creator (`p` = prompts, `u` = users)
const PROMPT_COLUMNS: &str = r#"
    p.id, p.prompt, p.tag, p.created_at, p.updated_at,
    u.id AS creator_id, u.username AS creator_username,
    u.email AS creator_email, u.image AS creator_image
"#;

/// PostgreSQL implementation of PromptRepository
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PromptRow {
    id: Uuid,
    prompt: String,
    tag: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    creator_id: Uuid,
    creator_username: String,
    creator_email: Option<String>,
    creator_image: Option<String>,
}

impl From<PromptRow> for Prompt {
    fn from(row: PromptRow) -> Self {
        Self {
            id: row.id,
            creator: User {
                id: row.creator_id,
                username: row.creator_username,
                email: row.creator_email,
                image: row.creator_image,
            },
            prompt: row.prompt,
            tag: row.tag,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: Option<String>,
    image: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            image: row.image,
        }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        let sql = format!(
            "SELECT {PROMPT_COLUMNS} FROM prompts p JOIN users u ON u.id = p.creator_id WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, PromptRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError> {
        let sql = format!(
            "SELECT {PROMPT_COLUMNS} FROM prompts p JOIN users u ON u.id = p.creator_id ORDER BY p.created_at ASC"
        );
        let rows = sqlx::query_as::<_, PromptRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_creator(&self, creator_id: Uuid) -> Result<Vec<Prompt>, DomainError> {
        let sql = format!(
            "SELECT {PROMPT_COLUMNS} FROM prompts p JOIN users u ON u.id = p.creator_id WHERE p.creator_id = $1 ORDER BY p.created_at ASC"
        );
        let rows = sqlx::query_as::<_, PromptRow>(&sql)
            .bind(creator_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_creator(&self, user_id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, image FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, new_prompt: &NewPrompt) -> Result<Prompt, DomainError> {
        let sql = format!(
            r#"
            WITH p AS (
                INSERT INTO prompts (creator_id, prompt, tag)
                VALUES ($1, $2, $3)
                RETURNING *
            )
            SELECT {PROMPT_COLUMNS} FROM p JOIN users u ON u.id = p.creator_id
            "#
        );
        let row = sqlx::query_as::<_, PromptRow>(&sql)
            .bind(new_prompt.creator_id)
            .bind(new_prompt.content.prompt())
            .bind(new_prompt.content.tag().as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn save(&self, prompt: &Prompt) -> Result<Option<Prompt>, DomainError> {
        let sql = format!(
            r#"
            WITH p AS (
                UPDATE prompts
                SET prompt = $2, tag = $3, updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            SELECT {PROMPT_COLUMNS} FROM p JOIN users u ON u.id = p.creator_id
            "#
        );
        let row = sqlx::query_as::<_, PromptRow>(&sql)
            .bind(prompt.id)
            .bind(&prompt.prompt)
            .bind(&prompt.tag)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM prompts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
