use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "dnahelix CLI - Procedurally generate DNA double-helix scene geometry for the A, B and Z forms.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a double helix into an in-memory scene and print a summary.
    Build(BuildArgs),
    /// List the supported DNA forms and their geometry constants.
    Forms,
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// DNA form to generate: A, B or Z.
    #[arg(short, long, value_name = "FORM")]
    pub form: Option<String>,

    /// Base sequence for strand A (e.g., ATGCGTACGCTAAGCT).
    #[arg(short, long, value_name = "BASES")]
    pub sequence: Option<String>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one line per generated object.
    #[arg(long)]
    pub list: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S geometry.backbone-radius=0.08
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_arguments_parse_with_global_flags() {
        let cli = Cli::parse_from([
            "dnahelix", "-vv", "build", "-f", "z", "-s", "ATGC", "--list", "-S",
            "geometry.joint-rings=12",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Build(args) = cli.command else {
            panic!("Expected 'build' subcommand");
        };
        assert_eq!(args.form.as_deref(), Some("z"));
        assert_eq!(args.sequence.as_deref(), Some("ATGC"));
        assert!(args.list);
        assert_eq!(args.set_values, vec!["geometry.joint-rings=12"]);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["dnahelix", "-q", "-v", "forms"]);
        assert!(result.is_err());
    }
}
