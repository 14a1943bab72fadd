//! CLI argument parsing for hostfacts.
//!
//! Mirrors the plugin invocation surface: two positional directories are
//! accepted for host-framework compatibility but unused by the report, and
//! the print-and-exit flags bypass the report entirely.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hostfacts")]
#[command(version)]
#[command(about = "Print host system facts (architecture, CPUs, load, memory, uptime)")]
pub struct Cli {
    /// Input directory (accepted for framework compatibility; unused)
    #[arg(required_unless_present_any = ["man", "meta", "json", "savejson"])]
    pub input_dir: Option<PathBuf>,

    /// Output directory (accepted for framework compatibility; unused)
    #[arg(required_unless_present_any = ["man", "meta", "json", "savejson"])]
    pub output_dir: Option<PathBuf>,

    /// Verbosity level (repeat for more detail); affects logging only
    #[arg(short = 'v', long = "verbosity", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Print the man page and exit
    #[arg(long)]
    pub man: bool,

    /// Print plugin metadata and exit
    #[arg(long)]
    pub meta: bool,

    /// Print the JSON plugin representation and exit
    #[arg(long)]
    pub json: bool,

    /// Save the JSON plugin representation into DIR and exit
    #[arg(long, value_name = "DIR")]
    pub savejson: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn directories_required_for_a_report_run() {
        assert!(Cli::try_parse_from(["hostfacts"]).is_err());
        assert!(Cli::try_parse_from(["hostfacts", "/in"]).is_err());

        let cli = Cli::try_parse_from(["hostfacts", "/in", "/out"]).unwrap();
        assert_eq!(cli.input_dir.unwrap(), PathBuf::from("/in"));
        assert_eq!(cli.output_dir.unwrap(), PathBuf::from("/out"));
    }

    #[test]
    fn print_and_exit_flags_need_no_directories() {
        assert!(Cli::try_parse_from(["hostfacts", "--json"]).unwrap().json);
        assert!(Cli::try_parse_from(["hostfacts", "--man"]).unwrap().man);
        assert!(Cli::try_parse_from(["hostfacts", "--meta"]).unwrap().meta);
        assert!(Cli::try_parse_from(["hostfacts", "--savejson", "/tmp"])
            .unwrap()
            .savejson
            .is_some());
    }

    #[test]
    fn verbosity_counts_repeats() {
        let cli = Cli::try_parse_from(["hostfacts", "-vv", "/in", "/out"]).unwrap();
        assert_eq!(cli.verbosity, 2);
    }
}
