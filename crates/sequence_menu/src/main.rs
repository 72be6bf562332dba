use std::io;

use clap::Parser;
use sequence_menu::Session;

/// Build and edit integer, floating-point and string sequences from an interactive menu.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Don't print the action list before each prompt.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(stdin, stdout).quiet(cli.quiet).run()?;
    Ok(())
}
