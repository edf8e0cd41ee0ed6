//! CLI entry point for variantdoc. Parses arguments with clap and dispatches
//! to the docgen command. Errors go to stderr and exit with status 1; the
//! generated Markdown is the only thing written to stdout.

use clap::Parser;
use variantdoc::cli::Cli;
use variantdoc::commands::run_docgen;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(dir) = cli.dir else {
        anyhow::bail!("please provide a directory path as an argument (usage: variantdoc <DIR>)");
    };

    run_docgen(&dir, cli.verbose)
}
