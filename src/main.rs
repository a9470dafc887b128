mod chart;
mod config;
mod consts;
mod error;
mod events;
mod logging;
mod pretty;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::headless::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::logging::{LogLevel, LogTarget, init_logging};
use crate::pretty::{print_cmd_error, print_cmd_info};
use crate::session::{run_headless_mode, run_tui_mode};
use crate::ui::UIConfig;
use crate::ui::store::{Timeframe, ViewStore};
use crate::ui::theme::Theme;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard shell for the LYRA trading platform
struct Args {
    /// Configuration file. Defaults to ~/.lyra/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log verbosity. RUST_LOG takes precedence when set.
    #[arg(long, global = true, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Write logs to this file while the dashboard is open.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Command to execute. Defaults to `start`.
    #[command(subcommand)]
    command: Option<Command>,
}

/// View selections that override the configuration file.
#[derive(clap::Args, Debug, Default, Clone)]
struct SelectionArgs {
    /// Dashboard to open: trading, risk, executive or compliance
    #[arg(long, value_name = "ID")]
    dashboard: Option<String>,

    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Exchange shown in the header
    #[arg(long)]
    exchange: Option<String>,

    /// Trading pair shown in the header
    #[arg(long)]
    pair: Option<String>,

    /// Candle interval of the price chart
    #[arg(long, value_enum)]
    timeframe: Option<Timeframe>,

    /// Leave the terminal background unpainted
    #[arg(long)]
    no_background: bool,
}

impl SelectionArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(dashboard) = &self.dashboard {
            config.dashboard = dashboard.clone();
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(exchange) = &self.exchange {
            config.exchange = exchange.clone();
        }
        if let Some(pair) = &self.pair {
            config.pair = pair.clone();
        }
        if let Some(timeframe) = self.timeframe {
            config.timeframe = timeframe;
        }
        if self.no_background {
            config.with_background_color = false;
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Skip the splash screen
        #[arg(long)]
        no_splash: bool,
    },
    /// Print one rendered frame of the dashboard to stdout
    Render {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Frame width in columns
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u16,

        /// Frame height in rows
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u16,
    },
    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_path()?,
    };

    let command = args.command.unwrap_or(Command::Start {
        selection: SelectionArgs::default(),
        no_splash: false,
    });
    match command {
        Command::Start {
            selection,
            no_splash,
        } => {
            let mut config = Config::load_or_default(&config_path)?;
            selection.apply(&mut config);
            if no_splash {
                config.show_splash = false;
            }

            // The terminal is busy, so logs only go to a file when one is configured.
            let log_file = args.log_file.or_else(|| config.log_file.clone());
            if let Some(path) = &log_file {
                init_logging(args.log_level, LogTarget::File(path.clone()))?;
            }

            let store = ViewStore::new(config.initial_view_state());
            let ui_config = UIConfig::new(config.with_background_color, config.show_splash);
            run_tui_mode(store, ui_config, log_file.as_deref()).await
        }
        Command::Render {
            selection,
            width,
            height,
        } => {
            init_logging(args.log_level, LogTarget::Stderr)?;
            let mut config = Config::load_or_default(&config_path)?;
            selection.apply(&mut config);
            run_headless_mode(
                config.initial_view_state(),
                width,
                height,
                config.with_background_color,
            )
        }
        Command::InitConfig { force } => {
            init_logging(args.log_level, LogTarget::Stderr)?;
            if config_path.exists() && !force {
                print_cmd_error!(
                    "Configuration already exists",
                    "{} (use --force to overwrite)",
                    config_path.display()
                );
                return Err(Box::from(format!(
                    "Configuration already exists at {}",
                    config_path.display()
                )));
            }
            Config::default().save(&config_path)?;
            print_cmd_info!("Configuration written", "{}", config_path.display());
            Ok(())
        }
    }
}
