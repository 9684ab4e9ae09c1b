//! CLI for finding which CIDR networks in a reference file contain an IP
//! address
//!
//! Every matching entry is printed to stdout exactly as it appears in the
//! reference file (trimmed), one per line, in file order. Logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! r-cidrcli --help
//!
//! # look up an address in ./example.db
//! r-cidrcli 192.168.1.55
//!
//! # use another reference file and print range details as json
//! r-cidrcli --file networks.db --json 2001:db8::1
//! ```
use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use log::*;
use r_cidrlib::{
    classify,
    matcher::{EntryPolicy, Matcher, ScanSummary},
    reference::{DEFAULT_REFERENCE_FILE, ReferenceFile},
    report::{JsonReporter, PlainReporter},
};
use std::{
    io::{self, Write},
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// CLI for finding which CIDR networks in a reference file contain an IP
/// address
struct Args {
    /// IPv4 or IPv6 address to look up
    address: String,

    /// Reference file listing one CIDR network per line
    #[arg(short, long, default_value = DEFAULT_REFERENCE_FILE)]
    file: PathBuf,

    /// Skip reference entries that are not valid networks instead of failing
    #[arg(long, default_value_t = false)]
    skip_invalid: bool,

    /// Print matches as json lines including range details
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log the special-purpose classes the address belongs to
    #[arg(long, default_value_t = false)]
    classify: bool,

    /// Only print matches and errors nothing else
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Prints debug logs including those from r-cidrlib
    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.quiet {
        simplelog::LevelFilter::Error
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    // stdout is reserved for matches
    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn print_args(args: &Args) {
    info!("configuration:");
    info!("address:      {}", args.address);
    info!("file:         {}", args.file.display());
    info!("skip_invalid: {}", args.skip_invalid);
    info!("json:         {}", args.json);
    info!("classify:     {}", args.classify);
    info!("quiet:        {}", args.quiet);
}

#[doc(hidden)]
fn entry_policy(args: &Args) -> EntryPolicy {
    if args.skip_invalid {
        EntryPolicy::Skip
    } else {
        EntryPolicy::Abort
    }
}

#[doc(hidden)]
fn process<W: Write>(args: &Args, out: W) -> Result<ScanSummary> {
    // the candidate must be valid before the reference file is touched
    let matcher = Matcher::parse(&args.address)
        .map_err(|e| eyre!("Invalid address: {}", e))?
        .with_policy(entry_policy(args));

    if args.classify {
        let classes = classify::classify(matcher.candidate());
        info!("{} is {}", matcher.candidate(), classify::describe(&classes));
    }

    let lines = ReferenceFile::open(&args.file)?;

    let summary = if args.json {
        matcher.scan(lines, &mut JsonReporter::new(out))?
    } else {
        matcher.scan(lines, &mut PlainReporter::new(out))?
    };

    Ok(summary)
}

#[doc(hidden)]
fn print_summary(args: &Args, summary: &ScanSummary) {
    info!(
        "matched {} of {} lines in {}",
        summary.matched,
        summary.lines,
        args.file.display()
    );

    if summary.skipped > 0 {
        warn!("skipped {} invalid entries", summary.skipped);
    }
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    print_args(&args);

    let summary = process(&args, io::stdout().lock())?;

    print_summary(&args, &summary);

    Ok(())
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
