//! # Aurum Storefront
//!
//! Hosts the cart/wishlist store: owns it, hydrates it from SQLite, runs
//! commands against it and writes it back.
//!
//! ## Module Organization
//! ```text
//! aurum_storefront/
//! ├── lib.rs          ◄─── You are here (startup, CLI dispatch)
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── API error type for commands
//! ├── state/
//! │   ├── store.rs    ◄─── StoreState: the one RootState + subscribers
//! │   └── db.rs       ◄─── DbState: database bound to a session
//! └── commands/
//!     ├── cart.rs     ◄─── Cart commands
//!     ├── wishlist.rs ◄─── Wishlist commands
//!     ├── session.rs  ◄─── Hydrate / persist
//!     └── theme.rs    ◄─── Design tokens
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aurum_core::{Action, CartAction, WishlistAction};
use aurum_db::{Database, DbConfig};
use commands::session::{hydrate_session, persist_session};
use config::{ConfigError, StorefrontConfig};
use error::ApiError;
use state::{DbState, StoreState};

/// A parsed CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the saved session.
    Show,
    /// Apply one action (JSON) to the saved session and save it.
    Dispatch(Action),
    /// Empty the cart and the wishlist.
    Clear,
    /// Print design tokens for the configured screen.
    Theme,
    /// Print usage.
    Help,
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse<I>(args: I) -> Result<Command, ApiError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let command = match args.next().as_deref() {
            None | Some("help") | Some("--help") | Some("-h") => Command::Help,
            Some("show") => Command::Show,
            Some("clear") => Command::Clear,
            Some("theme") => Command::Theme,
            Some("dispatch") => {
                let raw = args
                    .next()
                    .ok_or_else(|| ApiError::validation("dispatch needs an action as JSON"))?;
                Command::Dispatch(raw.parse::<Action>()?)
            }
            Some(other) => {
                return Err(ApiError::validation(format!("Unknown command: {}", other)));
            }
        };

        if let Some(extra) = args.next() {
            return Err(ApiError::validation(format!("Unexpected argument: {}", extra)));
        }

        Ok(command)
    }
}

/// Runs the CLI against the process arguments and environment.
///
/// ## Startup Sequence
/// ```text
/// 1. Initialize logging (stderr; stdout carries the JSON result)
/// 2. Parse the command
/// 3. Load configuration from AURUM_* variables
/// 4. Open the database and run migrations
/// 5. Hydrate the session, execute, print pretty JSON
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let command = Command::parse(std::env::args().skip(1))?;
    if command == Command::Help {
        print_usage();
        return Ok(());
    }

    let config = StorefrontConfig::from_env()?;
    let db_path = resolve_database_path(&config)?;
    info!(?db_path, store = %config.store_name, "Starting Aurum storefront");

    let db = Database::new(
        DbConfig::new(db_path).max_connections(config.db_max_connections),
    )
    .await?;
    let (known, applied) = db.migration_status().await?;
    info!(known, applied, "Database ready");

    let store = StoreState::new();
    let db_state = DbState::new(db.clone(), config.session_id.clone());

    let output = execute(command, &store, &db_state, &config).await;
    db.close().await;

    println!("{}", serde_json::to_string_pretty(&output?)?);
    Ok(())
}

/// Executes `command` and returns its JSON result.
///
/// Session commands hydrate first, so they always act on what was saved.
pub async fn execute(
    command: Command,
    store: &StoreState,
    db: &DbState,
    config: &StorefrontConfig,
) -> Result<Value, ApiError> {
    let response = match command {
        Command::Help => Value::Null,
        Command::Theme => serde_json::to_value(commands::theme::get_theme(config))?,
        Command::Show => serde_json::to_value(hydrate_session(store, db).await?)?,
        Command::Dispatch(action) => {
            hydrate_session(store, db).await?;
            store.dispatch(action);
            serde_json::to_value(persist_session(store, db).await?)?
        }
        Command::Clear => {
            hydrate_session(store, db).await?;
            store.dispatch(CartAction::ClearCart);
            store.dispatch(WishlistAction::ClearWishlist);
            serde_json::to_value(persist_session(store, db).await?)?
        }
    };

    Ok(response)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=aurum=trace` - Show trace for aurum crates only
/// - Default: INFO, DEBUG for aurum crates
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` when set, otherwise the default directives.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

const DEFAULT_LOG_FILTER: &str = "info,aurum=debug,sqlx=warn";

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.aurum.storefront/aurum.db`
/// - **Windows**: `%APPDATA%\aurum\storefront\data\aurum.db`
/// - **Linux**: `~/.local/share/storefront/aurum.db`
///
/// `AURUM_DB_PATH` overrides all of these.
pub fn resolve_database_path(config: &StorefrontConfig) -> Result<PathBuf, ConfigError> {
    if let Some(path) = &config.database_path {
        return Ok(path.clone());
    }

    let proj_dirs =
        ProjectDirs::from("com", "aurum", "storefront").ok_or(ConfigError::NoDataDirectory)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("aurum.db"))
}

fn print_usage() {
    println!("Aurum Storefront");
    println!();
    println!("Usage: aurum-storefront <COMMAND>");
    println!();
    println!("Commands:");
    println!("  show                 Print the saved cart and wishlist");
    println!("  dispatch '<json>'    Apply one action, e.g.");
    println!("                       '{{\"slice\":\"cart\",\"action\":{{\"type\":\"clearCart\"}}}}'");
    println!("  clear                Empty the cart and the wishlist");
    println!("  theme                Print design tokens for the configured screen");
    println!();
    println!("Environment:");
    println!("  AURUM_DB_PATH, AURUM_SESSION_ID, AURUM_STORE_NAME,");
    println!("  AURUM_DB_MAX_CONNECTIONS, AURUM_SCREEN_WIDTH, AURUM_SCREEN_HEIGHT");
}
