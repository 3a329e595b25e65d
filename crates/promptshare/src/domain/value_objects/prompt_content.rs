//! PromptContent - The editable part of a prompt (body + tag)

use crate::domain::{DomainError, Tag};

/// Validated body and tag, always supplied together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContent {
    prompt: String,
    tag: Tag,
}

impl PromptContent {
    /// Validate raw request fields.
    ///
    /// The body is kept verbatim but must not be blank.
    pub fn parse(prompt: Option<&str>, tag: Option<&str>) -> Result<Self, DomainError> {
        let prompt = prompt
            .ok_or_else(|| DomainError::Validation("prompt is required".to_string()))?;
        if prompt.trim().is_empty() {
            return Err(DomainError::Validation(
                "prompt must not be blank".to_string(),
            ));
        }

        let tag = tag.ok_or_else(|| DomainError::Validation("tag is required".to_string()))?;

        Ok(Self {
            prompt: prompt.to_string(),
            tag: Tag::parse(tag)?,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn into_parts(self) -> (String, Tag) {
        (self.prompt, self.tag)
    }
}
