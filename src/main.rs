use anyhow::Context;
use clap::Parser;
use keep_top::{
    render_json, render_text, run_filter, BlankLinePolicy, Disposition, FilterConfig,
    FilterReport,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Keep-Top - filter ROM files against a list of game names
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The directory containing the ROM files
    directory: PathBuf,

    /// Path to the keep file, one game name per line
    keep_file: PathBuf,

    /// Report what would happen without changing the disk
    #[arg(long, env = "KEEP_TOP_DRY_RUN")]
    dry_run: bool,

    /// What to do with classified files: "delete" removes non-matching
    /// files, "move" moves matching files into kept_files/
    #[arg(long, env = "KEEP_TOP_MODE", default_value_t = Disposition::Delete)]
    mode: Disposition,

    /// Comma-separated list of file extensions to process.
    /// Defaults to .sms in delete mode and every file in move mode.
    #[arg(long, env = "KEEP_TOP_EXTENSIONS")]
    extensions: Option<String>,

    /// Treat blank keep-file lines as terms that match every file
    #[arg(long)]
    keep_blank_lines: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let blank_lines = if args.keep_blank_lines {
        BlankLinePolicy::MatchAll
    } else {
        BlankLinePolicy::Skip
    };

    let config = FilterConfig::new(
        args.directory,
        args.keep_file,
        args.mode,
        args.extensions.as_deref(),
    )?
    .with_dry_run(args.dry_run)
    .with_blank_lines(blank_lines);

    info!(
        directory = %config.directory.display(),
        mode = %config.disposition,
        dry_run = config.dry_run,
        "starting filter run"
    );

    let result = run_filter(&config)
        .await
        .with_context(|| format!("Failed to filter {}", config.directory.display()))?;

    let report = FilterReport::from_result(&result);
    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
