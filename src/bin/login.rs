//! Terminal front-end for the login form.
//!
//! Prompts for the identifier and password, runs the same validation and
//! submit strategy as the web page, and prints inline errors or the alert
//! notice until the login succeeds or the attempts run out.
//!
//! # Usage
//!
//! ```bash
//! # Log in against the default endpoint
//! cargo run --bin login
//!
//! # Ask for a username and only validate locally
//! cargo run --bin login -- --identifier username --local
//!
//! # Use another endpoint
//! cargo run --bin login -- --endpoint https://auth.example.com/api/auth/login
//! ```

use login_page::application::services::{LoginService, SubmissionOutcome, SubmissionResult};
use login_page::domain::SubmitStrategy;
use login_page::domain::entities::{Field, IdentifierKind, LoginForm};
use login_page::infrastructure::submit::{DEFAULT_AUTH_ENDPOINT, LocalSubmit, RemoteAuthClient};
use login_page::telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Input, Password};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Log in from the terminal.
#[derive(Parser)]
#[command(name = "login")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Authentication endpoint receiving `{ email, password }`
    #[arg(long, default_value = DEFAULT_AUTH_ENDPOINT)]
    endpoint: Url,

    /// Only validate the form, do not contact the endpoint
    #[arg(long)]
    local: bool,

    /// Identifier to ask for: `username` or `email`
    #[arg(long, default_value = "email")]
    identifier: IdentifierKind,

    /// Number of attempts before giving up
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    attempts: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    telemetry::init_tracing(&log_filter, "text");

    let strategy: Arc<dyn SubmitStrategy> = if cli.local {
        Arc::new(LocalSubmit::new())
    } else {
        Arc::new(
            RemoteAuthClient::with_timeout(cli.endpoint.clone(), Duration::from_secs(cli.timeout))
                .context("Failed to build HTTP client")?,
        )
    };
    let service = LoginService::new(strategy, cli.identifier);

    println!("{}", "🔐 Login".bright_blue().bold());
    if !cli.local {
        println!("   {}", cli.endpoint.as_str().dimmed());
    }
    println!();

    let mut form = LoginForm::new();

    for attempt in 1..=cli.attempts {
        form = prompt(form, cli.identifier)?;

        let SubmissionResult { form: next, outcome } = service.submit(form).await;
        form = next;

        match outcome {
            SubmissionOutcome::Accepted(receipt) => {
                println!();
                println!("{}", "✅ Logged in".green().bold());
                println!("   {}", receipt.summary().dimmed());
                return Ok(());
            }
            SubmissionOutcome::Invalid => {
                for (_, message) in form.errors().iter() {
                    println!("  {} {}", "⚠".yellow(), message.yellow());
                }
            }
            SubmissionOutcome::Failed(notice) => {
                println!();
                println!("{}", format!("❌ {}", notice).as_str().red().bold());
            }
        }

        if attempt < cli.attempts {
            println!();
        }
    }

    anyhow::bail!("Login failed after {} attempts", cli.attempts)
}

/// Asks for both fields and applies the answers as edits.
///
/// The identifier prompt starts from the previous value so a failed attempt
/// only needs the wrong part retyped.
fn prompt(form: LoginForm, kind: IdentifierKind) -> Result<LoginForm> {
    let identifier: String = Input::new()
        .with_prompt(kind.label())
        .with_initial_text(form.identifier())
        .allow_empty(true)
        .interact_text()?;

    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    Ok(form
        .edit(Field::Identifier, identifier)
        .edit(Field::Password, password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempts_must_be_positive() {
        assert!(Cli::try_parse_from(["login", "--attempts", "0"]).is_err());

        let cli = Cli::try_parse_from(["login", "--attempts", "1"]).unwrap();
        assert_eq!(cli.attempts, 1);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["login"]).unwrap();

        assert_eq!(cli.attempts, 3);
        assert_eq!(cli.identifier, IdentifierKind::Email);
        assert_eq!(cli.endpoint.as_str(), DEFAULT_AUTH_ENDPOINT);
        assert!(!cli.local);
    }
}
