use std::process::ExitCode;

use clap::Parser;
use log::debug;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = pixelhush_core::Result<T>;

fn main() -> ExitCode {
    env_logger::init();

    match run(CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> CliResult<()> {
    let options = args.codec_options();
    debug!("running {:?} with {options:?}", args.command);

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Inspect(inspect) => inspect.run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fail_with_a_readable_message_for_a_missing_carrier() {
        let args =
            CliArgs::try_parse_from(["pixelhush", "unveil", "-i", "no-such-carrier.png"]).unwrap();

        let error = run(args).unwrap_err();

        assert_eq!(error.to_string(), "Image media is invalid");
    }

    #[test]
    fn should_report_the_capacity_error_with_its_dimensions() {
        let out_dir = tempfile::TempDir::new().unwrap();
        let carrier = out_dir.path().join("tiny.png");
        image::RgbaImage::new(10, 10).save(&carrier).unwrap();
        let secret = out_dir.path().join("secret.png");
        let args = CliArgs::try_parse_from([
            "pixelhush",
            "hide",
            "-i",
            carrier.to_str().unwrap(),
            "-o",
            secret.to_str().unwrap(),
            "-m",
            "does not fit",
        ])
        .unwrap();

        let message = run(args).unwrap_err().to_string();

        assert!(message.starts_with("Capacity Error"), "{message}");
        assert!(message.contains("10x10"), "{message}");
    }
}
