//! Paint holder entry point: builds a holder and prints it as OpenSCAD.

use std::process::ExitCode;

use paint_holder::cli::{self, Command, USAGE};
use paint_holder::HolderError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // stdout carries the model, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paint_holder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ (HolderError::Usage(_) | HolderError::UnknownPreset(_))) => {
            eprintln!("{err}\n\n{USAGE}");
            ExitCode::from(2)
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> paint_holder::Result<()> {
    let options = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::Build(options) => options,
    };

    let text = cli::run(&options)?;
    match &options.output {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!(path = %path.display(), "wrote model");
        }
        None => print!("{text}"),
    }
    Ok(())
}
