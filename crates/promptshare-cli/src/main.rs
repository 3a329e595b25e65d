//! PromptShare CLI - Browse, search and manage shared prompts
//!
//! Terminal client for the PromptShare API: a searchable feed and a
//! profile view of your own prompts.

mod api;
mod config;
mod debounce;
mod feed;
mod profile;
mod route;
mod session;
#[cfg(test)]
mod testing;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use api::{ApiError, PromptApi, PromptClient};
use config::Config;
use feed::FeedController;
use profile::{Confirm, DeleteOutcome, ProfileController};
use promptshare::Prompt;
use route::Route;
use session::Session;

#[derive(Parser)]
#[command(name = "promptshare")]
#[command(about = "PromptShare CLI - Browse, search and manage shared prompts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store API key and identity
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
        /// Your user id
        #[arg(long)]
        user_id: Option<Uuid>,
        /// Display name
        #[arg(long)]
        username: Option<String>,
    },

    /// Forget stored credentials
    Logout,

    /// Show all prompts, optionally filtered
    Feed {
        /// Filter by tag, as if opened from a tag link
        #[arg(short, long)]
        tag: Option<String>,
        /// Search creator, prompt text and tag
        #[arg(short, long)]
        search: Option<String>,
        /// Click a tag after searching; filters right away and drops
        /// any search still waiting
        #[arg(long)]
        tag_click: Option<String>,
    },

    /// Open a client path such as "/?tag=rust" or "/profile"
    Open { path: String },

    /// Show a single prompt
    Show { id: Uuid },

    /// Manage your own prompts
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List your prompts
    List,
    /// Edit one of your prompts
    Edit {
        id: Uuid,
        /// New prompt text (will prompt if not provided)
        #[arg(long)]
        prompt: Option<String>,
        /// New tag (will prompt if not provided)
        #[arg(long)]
        tag: Option<String>,
    },
    /// Delete one of your prompts
    Delete {
        id: Uuid,
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login {
            key,
            user_id,
            username,
        } => cmd_login(key, user_id, username).await,
        Commands::Logout => cmd_logout(),
        Commands::Feed {
            tag,
            search,
            tag_click,
        } => cmd_feed(tag, search, tag_click).await,
        Commands::Open { path } => cmd_open(&path).await,
        Commands::Show { id } => cmd_show(id).await,
        Commands::Profile { action } => cmd_profile(action).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

fn client(config: &Config) -> Arc<PromptClient> {
    Arc::new(PromptClient::new(
        &config.base_url,
        config.api_key.as_deref(),
    ))
}

async fn cmd_login(
    key: Option<String>,
    user_id: Option<Uuid>,
    username: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    let user_id = match user_id {
        Some(id) => id,
        None => {
            let raw: String = Input::new()
                .with_prompt("User ID")
                .interact_text()
                .context("Failed to read user id")?;
            Uuid::parse_str(raw.trim()).context("User ID must be a UUID")?
        }
    };

    // Test connection
    let client = PromptClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to PromptShare API at {}", config.base_url);
        }
    }

    config.set_login(api_key, user_id, username);
    config.save()?;

    println!("{} Login saved to {:?}", "✓".green(), Config::config_path()?);
    Ok(())
}

fn cmd_logout() -> Result<()> {
    let mut config = Config::load()?;
    config.clear_login();
    config.save()?;
    println!("{} Logged out", "✓".green());
    Ok(())
}

async fn cmd_feed(
    tag: Option<String>,
    search: Option<String>,
    tag_click: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let mut feed = FeedController::new(client(&config));

    feed.mount(tag).await;

    if let Some(search) = search {
        feed.on_search_change(search);
    }
    match tag_click {
        Some(tag) => feed.on_tag_click(&tag),
        None => feed.settle().await,
    }

    if !feed.search_text().is_empty() {
        println!("{} {}", "Search:".dimmed(), feed.search_text().cyan());
    }

    let posts = feed.rendered();
    if posts.is_empty() {
        println!("No prompts yet.");
        return Ok(());
    }
    if feed.filtered_posts().is_empty() {
        println!("{}", "No matches, showing all prompts".yellow());
    } else {
        println!(
            "{}",
            format!("{} of {} prompts", posts.len(), feed.all_posts().len()).dimmed()
        );
    }

    for prompt in &posts {
        print_card(prompt);
    }

    Ok(())
}

async fn cmd_open(path: &str) -> Result<()> {
    match Route::parse(path) {
        Some(Route::Feed { tag }) => cmd_feed(tag, None, None).await,
        Some(Route::Profile) => cmd_profile(ProfileAction::List).await,
        Some(Route::UpdatePrompt { id }) => {
            cmd_profile(ProfileAction::Edit {
                id,
                prompt: None,
                tag: None,
            })
            .await
        }
        None => bail!("Unknown path '{}'", path),
    }
}

async fn cmd_show(id: Uuid) -> Result<()> {
    let config = Config::load()?;

    match client(&config).get_prompt(id).await {
        Ok(prompt) => {
            print_card(&prompt);
            Ok(())
        }
        Err(ApiError::NotFound) => bail!("Prompt {} not found", id),
        Err(e) => Err(e.into()),
    }
}

/// Asks on the terminal unless `--yes` was given
struct TerminalConfirm {
    assume_yes: bool,
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

async fn cmd_profile(action: ProfileAction) -> Result<()> {
    let config = Config::load()?;

    // Nothing is fetched until the stored identity has been resolved
    let mut profile = ProfileController::new(client(&config), Session::loading());
    let session = Session::from_config(&config);
    let Some(user) = session.user().cloned() else {
        bail!("Not logged in. Run 'promptshare login' first.");
    };
    profile.set_session(session).await;

    match action {
        ProfileAction::List => {
            println!("{}", "My Profile".bold());
            println!("{}", "Welcome to your personalized profile page".dimmed());
            println!(
                "{}\n",
                format!(
                    "Signed in as {}",
                    user.username.unwrap_or_else(|| user.id.to_string())
                )
                .dimmed()
            );

            if profile.posts().is_empty() {
                println!("No prompts yet.");
                return Ok(());
            }

            for prompt in profile.posts() {
                print_card(prompt);
                if let Some(route) = profile.handle_tag_click(&prompt.tag, &Route::Profile) {
                    println!("    {} {}", "more like this:".dimmed(), route);
                }
            }
        }

        ProfileAction::Edit { id, prompt, tag } => {
            let current = profile
                .find(id)
                .cloned()
                .with_context(|| format!("Prompt {} is not one of yours", id))?;
            tracing::debug!("Editing via {}", profile.handle_edit(&current));

            let prompt = match prompt {
                Some(p) => p,
                None => Input::new()
                    .with_prompt("Prompt")
                    .with_initial_text(current.prompt.clone())
                    .interact_text()
                    .context("Failed to read prompt")?,
            };
            let tag = match tag {
                Some(t) => t,
                None => Input::new()
                    .with_prompt("Tag")
                    .with_initial_text(current.tag.clone())
                    .interact_text()
                    .context("Failed to read tag")?,
            };

            match profile.submit_update(id, &prompt, &tag).await {
                Some(updated) => {
                    println!("{} Prompt updated", "✓".green());
                    print_card(&updated);
                }
                None => bail!("Failed to update prompt {}", id),
            }
        }

        ProfileAction::Delete { id, yes } => {
            let confirm = TerminalConfirm { assume_yes: yes };
            match profile.handle_delete(id, &confirm).await {
                DeleteOutcome::Deleted => println!("{} Prompt deleted", "✓".green()),
                DeleteOutcome::Declined => println!("Cancelled."),
                DeleteOutcome::Failed => bail!("Failed to delete prompt {}", id),
            }
        }
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!(
        "  User: {}",
        match (&config.username, config.user_id) {
            (Some(name), Some(id)) => format!("{} ({})", name, id).cyan(),
            (None, Some(id)) => id.to_string().cyan(),
            _ => "Not signed in".red(),
        }
    );

    Ok(())
}

fn print_card(prompt: &Prompt) {
    println!(
        "{} {}",
        prompt.creator.username.cyan().bold(),
        prompt.id.to_string().dimmed()
    );
    println!("  {}", prompt.prompt);
    println!("  {}", format!("#{}", prompt.tag).blue());
    println!();
}
