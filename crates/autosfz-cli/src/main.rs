//! autosfz CLI - The `autosfz` command.
//!
//! Generates an SFZ sampled instrument from samples created by the Auto
//! Sampler plugin. All of the work happens in `autosfz-core`; this binary
//! parses the arguments, sets up logging and maps errors to exit codes.

mod logger;

use anyhow::Result;
use autosfz_core::{ConvertOptions, Progress, DEFAULT_SAMPLE_EXTENSION};
use clap::Parser;
use std::path::PathBuf;

/// autosfz - Auto Sampler to SFZ
#[derive(Parser, Debug)]
#[command(name = "autosfz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Generates an SFZ sampled instrument from samples created by the Auto Sampler plugin",
    long_about = None
)]
struct Args {
    /// Directory with the Auto Sampler recordings
    #[arg(value_name = "SAMPLES_DIR")]
    samples_dir: PathBuf,

    /// The name of the SFZ instrument. If not specified, the name of <SAMPLES_DIR> is used
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    name: Option<String>,

    /// The output directory. If not specified, the files are saved to the current directory
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
    output: Option<PathBuf>,

    /// Extension of the recordings
    #[arg(short = 'e', long = "extension", value_name = "EXT", default_value = DEFAULT_SAMPLE_EXTENSION)]
    extension: String,
}

impl Args {
    fn to_options(&self) -> ConvertOptions {
        let mut options =
            ConvertOptions::new(&self.samples_dir).with_extension(self.extension.trim_start_matches('.'));
        if let Some(name) = &self.name {
            options = options.with_name(name);
        }
        if let Some(output) = &self.output {
            options = options.with_output_dir(output);
        }
        options
    }
}

fn main() {
    // Help, version and usage errors exit here (0 for help/version, 2 otherwise)
    let args = Args::parse();

    logger::init_logger();

    if let Err(err) = run(&args) {
        eprintln!("<Error> {err}");
        std::process::exit(exit_code(&err));
    }
}

fn run(args: &Args) -> Result<()> {
    let report = autosfz_core::convert_with_progress(&args.to_options(), &mut |p: Progress<'_>| {
        println!("{}", progress_line(p));
    })?;

    log::debug!(
        "{} regions, {} samples in {}",
        report.instrument.num_regions(),
        report.copied.len(),
        report.samples_dir.display()
    );
    println!("Done.");
    Ok(())
}

/// The stdout line announcing a pipeline stage.
fn progress_line(progress: Progress<'_>) -> String {
    match progress {
        Progress::Copying { .. } => "Copying samples to the output directory...".to_string(),
        Progress::Writing { file_name } => format!("Writing to {file_name}..."),
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<autosfz_core::Error>()
        .map(autosfz_core::Error::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from(["autosfz", "-n", "Grand", "-o", "out", "-e", ".wav", "MyPiano"]).unwrap();
        assert_eq!(args.samples_dir, PathBuf::from("MyPiano"));

        let options = args.to_options();
        assert_eq!(options.name.as_deref(), Some("Grand"));
        assert_eq!(options.output_dir, Some(PathBuf::from("out")));
        assert_eq!(options.extension, "wav");
    }

    #[test]
    fn test_defaults() {
        let options = Args::try_parse_from(["autosfz", "MyPiano"]).unwrap().to_options();
        assert_eq!(options.name, None);
        assert_eq!(options.output_dir, None);
        assert_eq!(options.extension, "aif");
    }

    #[test]
    fn test_help_and_usage_errors() {
        let help = Args::try_parse_from(["autosfz", "-h"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert_eq!(help.exit_code(), 0);

        let missing = Args::try_parse_from(["autosfz"]).unwrap_err();
        assert_eq!(missing.exit_code(), 2);

        let unknown = Args::try_parse_from(["autosfz", "-x", "MyPiano"]).unwrap_err();
        assert_eq!(unknown.kind(), ErrorKind::UnknownArgument);
        assert_eq!(unknown.exit_code(), 2);
    }

    #[test]
    fn test_progress_lines() {
        let dest = PathBuf::from("out/MyPiano");
        assert_eq!(
            progress_line(Progress::Copying { count: 3, dest: &dest }),
            "Copying samples to the output directory..."
        );
        assert_eq!(
            progress_line(Progress::Writing { file_name: "MyPiano.sfz" }),
            "Writing to MyPiano.sfz..."
        );
    }

    #[test]
    fn test_exit_codes() {
        let err = anyhow::Error::new(autosfz_core::Error::OutputConflict("x".into()));
        assert_eq!(exit_code(&err), 2);
        let err = anyhow::Error::new(autosfz_core::Error::io(
            "x",
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        ));
        assert_eq!(exit_code(&err), 1);
        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }
}
