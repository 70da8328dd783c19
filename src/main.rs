use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use unblock_rs::image_pipeline::{BlockAlignment, DeblockConfig, DeblockPipeline, PlaneSelection};
use unblock_rs::logger;

use tracing::{error, info};

/// Attenuate 8x8 JPEG block artifacts in a PNG or BMP image
#[derive(Parser)]
#[command(name = "unblock", version)]
struct Cli {
    /// Input image (.png, anything else is read as BMP)
    input: PathBuf,

    /// Output image (.png, anything else is written as BMP)
    output: PathBuf,

    /// Handling of widths that are not a multiple of the engine block size
    #[arg(long, value_enum, default_value_t = AlignmentArg::Reject)]
    alignment: AlignmentArg,

    /// Only deblock luma; chroma passes through unchanged
    #[arg(long)]
    luma_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlignmentArg {
    Reject,
    Pad,
    Permissive,
}

impl From<AlignmentArg> for BlockAlignment {
    fn from(value: AlignmentArg) -> Self {
        match value {
            AlignmentArg::Reject => BlockAlignment::Reject,
            AlignmentArg::Pad => BlockAlignment::Pad,
            AlignmentArg::Permissive => BlockAlignment::Permissive,
        }
    }
}

const EXIT_SUCCESS: u8 = 0;
/// Usage errors and fatal conversion errors
const EXIT_FAILURE: u8 = 1;
/// Output was written but the engine reported failure
const EXIT_ENGINE_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::from(EXIT_FAILURE);
        }
        Err(e) => e.exit(),
    };

    logger::init();

    let outcome = run(&cli);
    if let Err(e) = &outcome {
        error!("{:#}", e);
    }
    ExitCode::from(exit_status(&outcome))
}

fn exit_status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_ENGINE_FAILURE,
        Err(_) => EXIT_FAILURE,
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = DeblockConfig::builder()
        .alignment(cli.alignment.into())
        .planes(if cli.luma_only {
            PlaneSelection::LumaOnly
        } else {
            PlaneSelection::Color
        })
        .build();

    #[cfg(costella_unblock)]
    let mut pipeline = DeblockPipeline::native(config);
    #[cfg(not(costella_unblock))]
    let mut pipeline = {
        tracing::warn!("Native unblock engine not linked, only the color round-trip is applied");
        DeblockPipeline::new(config)
    };

    info!("Deblocking pipeline initialized");
    info!("Block alignment: {:?}", pipeline.config().alignment);
    info!("Planes: {:?}", pipeline.config().planes);

    let report = pipeline
        .convert_file(&cli.input, &cli.output)
        .with_context(|| format!("cannot convert {}", cli.input.display()))?;

    if report.is_deartifacted() {
        info!("Conversion successful!");
    } else {
        error!(
            "Problem during artifact removal, {} written without deblocking guarantee",
            cli.output.display()
        );
    }

    Ok(report.is_deartifacted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_argument_is_usage_error() {
        let err = Cli::try_parse_from(["unblock", "a.png"])
            .err()
            .expect("missing output must be rejected");
        assert!(err.use_stderr());
    }

    #[test]
    fn test_extra_argument_is_usage_error() {
        let err = Cli::try_parse_from(["unblock", "a", "b", "c"])
            .err()
            .expect("extra positional must be rejected");
        assert!(err.use_stderr());
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = Cli::try_parse_from(["unblock", "--help"])
            .err()
            .expect("help short-circuits parsing");
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["unblock", "in.bmp", "out.png"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.bmp"));
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(BlockAlignment::from(cli.alignment), BlockAlignment::Reject);
        assert!(!cli.luma_only);

        let cli = Cli::try_parse_from([
            "unblock", "in.bmp", "out.png", "--alignment", "pad", "--luma-only",
        ])
        .unwrap();
        assert_eq!(BlockAlignment::from(cli.alignment), BlockAlignment::Pad);
        assert!(cli.luma_only);
    }

    #[test]
    fn test_exit_status_mapping() {
        assert_eq!(exit_status(&Ok(true)), 0);
        assert_eq!(exit_status(&Ok(false)), 2);
        assert_eq!(exit_status(&Err(anyhow::anyhow!("cannot read input"))), 1);
    }

    #[test]
    fn test_missing_input_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let cli = Cli::try_parse_from([
            std::ffi::OsStr::new("unblock"),
            dir.path().join("missing.png").as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();

        assert_eq!(exit_status(&run(&cli)), 1);
        assert!(!output.exists());
    }
}
