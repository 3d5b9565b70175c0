use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use showreel_core::logging::{self, LogTarget};
use showreel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "showreel")]
#[command(author, version, about = "Responsive autoplaying carousels and a contact form in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print the page table for a carousel configuration
    Layout {
        /// Number of slides
        #[arg(short = 'n', long)]
        items: usize,
        /// Viewport width used to pick the breakpoint
        #[arg(short = 'w', long)]
        width: f64,
        /// Track container width (defaults to the viewport width)
        #[arg(short = 'c', long)]
        container: Option<f64>,
        /// Gap between slides (defaults to the guests carousel's gap)
        #[arg(short = 'g', long)]
        gap: Option<f64>,
        /// Use looping paging instead of bounded
        #[arg(long)]
        looping: bool,
    },
    /// Send a contact message through the configured collaborator
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(short = 'm', long)]
        message: String,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// `config path` and `config init` must work even when the file on disk is broken
    fn needs_config(&self) -> bool {
        !matches!(
            self.command,
            Some(Commands::Config {
                action: ConfigAction::Path | ConfigAction::Init { .. }
            })
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if cli.needs_config() {
        Arc::new(AppConfig::load()?)
    } else {
        Arc::new(AppConfig::default())
    };

    // The TUI owns the terminal, so its logs go to a file
    let log_path = config.log_path();
    let target = match cli.command {
        Some(Commands::Run) | None => LogTarget::File(&log_path),
        _ => LogTarget::Stderr,
    };
    logging::init(&config.general.log_level, target)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Layout {
            items,
            width,
            container,
            gap,
            looping,
        }) => commands::layout::run(&config, items, width, container, gap, looping),
        Some(Commands::Contact {
            name,
            email,
            phone,
            message,
        }) => commands::contact::run(&config, &name, &email, phone.as_deref(), &message).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}
