use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::fetch::{FetchController, StalePolicy};
use crate::provider::{AnnouncementProvider, HttpProvider, SampleProvider};
use crate::ui::{self, RenderOptions};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Options shared by the `fetch` and `interactive` subcommands.
fn source_args() -> Vec<Arg> {
    vec![
        Arg::new("endpoint")
            .long("endpoint")
            .help("JSON endpoint returning the announcement list")
            .action(ArgAction::Set),
        Arg::new("demo")
            .long("demo")
            .help("Use the built-in sample announcements instead of the endpoint")
            .action(ArgAction::SetTrue),
        Arg::new("critical_below")
            .long("critical-below")
            .help("Hours remaining below which an announcement is red")
            .value_parser(clap::value_parser!(f64))
            .action(ArgAction::Set),
        Arg::new("warning_below")
            .long("warning-below")
            .help("Hours remaining below which an announcement is yellow")
            .value_parser(clap::value_parser!(f64))
            .action(ArgAction::Set),
        Arg::new("discard_stale")
            .long("discard-stale")
            .help("Ignore results of a refresh superseded by a newer one")
            .action(ArgAction::SetTrue),
        Arg::new("no_color")
            .long("no-color")
            .help("Disable coloured output")
            .action(ArgAction::SetTrue),
    ]
}

/// Builds the command-line definition.
pub fn build_command() -> Command {
    Command::new("seace-dashboard")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("fetch")
                .about("Fetch the announcements once and print them by urgency")
                .args(source_args()),
        )
        .subcommand(
            Command::new("interactive")
                .about("Keep the dashboard open; press Enter to refresh, 'q' to quit")
                .args(source_args()),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("interactive")
                        .short('i')
                        .long("interactive")
                        .help("Keep the dashboard open after the first refresh")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Applies command-line overrides on top of the default configuration.
///
/// # Errors
///
/// Returns an error if the resulting configuration does not validate.
pub fn resolve_config(sub: &ArgMatches) -> AppResult<ResolvedConfig> {
    let mut config = ResolvedConfig::default();
    if let Some(endpoint) = sub.get_one::<String>("endpoint") {
        config.endpoint = endpoint.clone();
    }
    if sub.get_flag("demo") {
        config.demo = true;
    }
    if let Some(&hours) = sub.get_one::<f64>("critical_below") {
        config.critical_hours_below = hours;
    }
    if let Some(&hours) = sub.get_one::<f64>("warning_below") {
        config.warning_hours_below = hours;
    }
    if sub.get_flag("discard_stale") {
        config.stale_policy = StalePolicy::DiscardSuperseded;
    }
    if sub.get_flag("no_color") {
        config.color = false;
    }
    config.validate()?;
    Ok(config)
}

/// Parses command-line arguments and runs the dashboard.
///
/// Subcommands:
/// - `fetch`: one refresh, print, exit
/// - `interactive`: refresh on every Enter until `q`
/// - `toml`: same as above with options read from a TOML file
///
/// A failed fetch is not an error here; it is rendered as the error banner.
/// Errors are returned only for invalid configuration or terminal I/O failures.
pub async fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("fetch", sub)) => run_dashboard(&resolve_config(sub)?, false).await?,
        Some(("interactive", sub)) => run_dashboard(&resolve_config(sub)?, true).await?,
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");
            let config = ResolvedConfig::from_toml_file(config_path)?;
            run_dashboard(&config, sub.get_flag("interactive")).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

fn build_provider(config: &ResolvedConfig) -> AppResult<Box<dyn AnnouncementProvider>> {
    if config.demo {
        Ok(Box::new(SampleProvider::new()))
    } else {
        Ok(Box::new(HttpProvider::new(&config.endpoint)?))
    }
}

async fn run_dashboard(config: &ResolvedConfig, interactive: bool) -> AppResult<()> {
    let provider = build_provider(config)?;
    info!(
        provider = provider.name(),
        endpoint = %config.endpoint,
        interactive,
        "Starting dashboard"
    );

    let controller = FetchController::with_policy(provider, config.stale_policy);
    let options =
        RenderOptions::from_config(config, interactive, std::io::stdout().is_terminal());

    refresh_and_print(&controller, &options).await?;
    if !interactive {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if is_quit_command(&line) {
            break;
        }
        refresh_and_print(&controller, &options).await?;
    }

    Ok(())
}

async fn refresh_and_print<P: AnnouncementProvider>(
    controller: &FetchController<P>,
    options: &RenderOptions,
) -> AppResult<()> {
    let spinner = ui::create_spinner(ui::LOADING_MESSAGE)?;
    controller.refresh().await;
    spinner.finish_and_clear();

    print!("{}", ui::render_state(&controller.state(), options));
    Ok(())
}

fn is_quit_command(line: &str) -> bool {
    matches!(
        line.trim().to_lowercase().as_str(),
        "q" | "quit" | "exit" | "salir"
    )
}
