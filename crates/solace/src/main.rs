// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Solace - terminal client for the admin settings panel and the
//! counselor sessions dashboard.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod notify;
mod sessions_cmd;
mod settings_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use solace_sessions::FilterTab;
use solace_settings::SettingCategory;

/// Solace - admin and counselor terminal client.
#[derive(Parser, Debug)]
#[command(name = "solace", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect and change system settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Browse counselor sessions.
    Sessions {
        #[command(subcommand)]
        action: SessionsAction,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Fetch and print the full settings panel.
    Show,
    /// Set a single field, e.g. `solace settings set security sessionTimeout 45`.
    Set {
        /// Setting category: notifications, security, or system.
        category: SettingCategory,
        /// Field name within the category, e.g. sessionTimeout.
        setting: String,
        /// New value: on/off for toggles, a number for bounded fields,
        /// one of the listed options for enumerated fields.
        value: String,
    },
}

#[derive(Subcommand, Debug)]
enum SessionsAction {
    /// List sessions under a filter tab.
    List {
        /// Filter tab: all, chats, or mood.
        #[arg(long, default_value = "all")]
        tab: FilterTab,
        /// JSON file of session records; overrides client.sessions_file.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "solace={log_level},solace_core={log_level},solace_config={log_level},\
             solace_settings={log_level},solace_sessions={log_level},warn"
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match solace_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            solace_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.client.log_level);
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");

    let outcome = match cli.command {
        Some(Commands::Settings { action }) => match action {
            SettingsAction::Show => settings_cmd::show(&config).await,
            SettingsAction::Set {
                category,
                setting,
                value,
            } => settings_cmd::set(&config, category, &setting, &value).await,
        },
        Some(Commands::Sessions { action }) => match action {
            SessionsAction::List { tab, file } => {
                sessions_cmd::list(&config, tab, file).map(|()| true)
            }
        },
        None => {
            println!("solace: use --help for available commands");
            Ok(true)
        }
    };

    match outcome {
        Ok(true) => {}
        // A rejected write already printed its notice; mark the failure.
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{} {err}", "✗".red().bold());
            std::process::exit(1);
        }
    }
}
