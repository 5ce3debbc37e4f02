use anyhow::Result;
use clap::Parser;
use dirdiff::areas::comparison::Comparison;
use dirdiff::artifacts::core::{LogLevel, OutputTarget};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "dirdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two directory trees",
    long_about = "Lists every path that was added, changed or removed between two directory trees. \
    Files are compared by size and, when sizes match, by content digest. \
    Directories are compared by presence only.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The new directory")]
    new_path: PathBuf,
    #[arg(index = 2, help = "The old directory")]
    old_path: PathBuf,
    #[arg(
        long,
        default_value = "",
        hide_default_value = true,
        help = "Comma-separated glob patterns of relative paths to leave out"
    )]
    ignore: String,
    #[arg(
        long = "onlyFile",
        visible_alias = "only-file",
        help = "Only compare regular files"
    )]
    only_file: bool,
    #[arg(long, short, default_value = "warn", value_enum, help = "Log verbosity")]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.log_level);
    debug!("Parsed CLI arguments: {cli:?}");

    let stdout_is_terminal = std::io::stdout().is_terminal();
    if !stdout_is_terminal {
        colored::control::set_override(false);
    }

    let output = OutputTarget::select(stdout_is_terminal, std::env::var_os("NO_PAGER").is_some());
    let comparison = Comparison::new(
        &cli.new_path,
        &cli.old_path,
        &cli.ignore,
        cli.only_file,
        output.writer(),
    )?;

    comparison.diff().await?;
    output.finish()?;

    Ok(())
}

fn setup_tracing(log_level: LogLevel) {
    if let Some(level) = log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
