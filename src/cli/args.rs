//! Command-line interface for variantdoc, built with clap derive macros.
//!
//! The directory argument is declared optional so that a missing argument
//! reaches `main` instead of clap's own error path: the tool reports its own
//! usage message on stderr and exits with status 1, and stdout stays empty.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "variantdoc")]
#[command(author, version)]
#[command(about = "Generate Markdown variant tables from enum-to-string conversion impls")]
pub struct Cli {
    /// Directory tree to scan for types.rs files
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose progress output on stderr (stdout stays pure Markdown)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_directory_argument() {
        let cli = Cli::try_parse_from(["variantdoc", "src/"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("src/")));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_directory_parses_as_none() {
        // The usage error is raised by the binary, not by clap.
        let cli = Cli::try_parse_from(["variantdoc"]).unwrap();
        assert!(cli.dir.is_none());
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["variantdoc", "-v", "src/"]).unwrap();
        assert!(cli.verbose);
        let cli = Cli::try_parse_from(["variantdoc", "--verbose", "src/"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_error_cases() {
        assert!(Cli::try_parse_from(["variantdoc", "--unknown"]).is_err());
        assert!(Cli::try_parse_from(["variantdoc", "a", "b"]).is_err()); // One positional only
    }

    #[test]
    fn test_help_output() {
        let mut cmd = Cli::command();
        let help = format!("{}", cmd.render_help());
        assert!(help.contains("DIR"));
        assert!(help.contains("variant tables"));
    }
}
