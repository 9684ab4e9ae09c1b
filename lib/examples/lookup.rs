use color_eyre::eyre::{Result, eyre};
use std::{env, io};

use r_cidrlib::{
    classify,
    matcher::Matcher,
    reference::{DEFAULT_REFERENCE_FILE, ReferenceFile},
    report::PlainReporter,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    let candidate = env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: lookup <ip-address>"))?;
    let matcher = Matcher::parse(&candidate)?;

    eprintln!(
        "{} is {}",
        matcher.candidate(),
        classify::describe(&classify::classify(matcher.candidate()))
    );

    let lines = ReferenceFile::open(DEFAULT_REFERENCE_FILE)?;
    let mut reporter = PlainReporter::new(io::stdout().lock());
    let summary = matcher.scan(lines, &mut reporter)?;

    eprintln!("matched {} of {} lines", summary.matched, summary.lines);

    Ok(())
}
