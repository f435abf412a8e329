//! kks CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use console::style;
use kks::cli::{normalize_legacy_flags, Cli, CommandDispatcher};
use kks::context::EnvConfig;
use kks::kak::KakProcess;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr, stdout carries command output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("kks=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kks=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn report_error(err: &kks::KksError) {
    eprintln!("{} {}", style("Error:").red().bold().for_stderr(), err);
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));
    init_tracing(cli.debug);

    tracing::debug!("kks starting with args: {:?}", cli);

    let Some(command) = cli.command.as_ref() else {
        let mut stdout = std::io::stdout();
        Cli::command().write_long_help(&mut stdout).ok();
        writeln!(stdout).ok();
        return ExitCode::SUCCESS;
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            report_error(&e.into());
            return ExitCode::from(1);
        }
    };

    let env = EnvConfig::from_env();
    let kak = KakProcess::new(env.kak_binary.clone());
    let dispatcher = CommandDispatcher::new(env, cwd);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match dispatcher.dispatch(command, &kak, &mut out) {
        Ok(result) => {
            out.flush().ok();
            ExitCode::from(result.exit_code as u8)
        }
        Err(e) => {
            out.flush().ok();
            report_error(&e);
            ExitCode::from(1)
        }
    }
}
