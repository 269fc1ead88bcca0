//! check-venv CLI entry point.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use venv_checker::cli::{CheckCommand, Cli, Command};
use venv_checker::config::Settings;
use venv_checker::shell::is_ci;
use venv_checker::ui::{create_ui, OutputMode};

/// Exit code for configuration errors.
const CONFIG_ERROR_EXIT_CODE: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Console log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is off; the UI already reports every check
///
/// When a log file is given, every run is also appended to it at INFO.
fn init_tracing(debug: bool, log_file: Option<File>) -> Option<WorkerGuard> {
    let console_filter = if debug {
        EnvFilter::new("venv_checker=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };
    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file_layer, guard) = match log_file {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .with_filter(LevelFilter::INFO);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    guard
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet, cli.silent);
    let mut ui = create_ui(!is_ci(), output_mode);

    // Determine project root
    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let settings = match Settings::load(&project_root, &cli.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(cli.debug, None);
            tracing::error!("{}", e);
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(CONFIG_ERROR_EXIT_CODE);
        }
    };

    let log_file = settings
        .log_file
        .as_deref()
        .and_then(|path| match open_log_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                ui.warning(&format!(
                    "Cannot write log file {}: {}",
                    path.display(),
                    e
                ));
                None
            }
        });
    // Flushes the log file on drop
    let _guard = init_tracing(cli.debug, log_file);

    tracing::debug!("check-venv starting with args: {:?}", cli);

    match CheckCommand::new(settings).execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
