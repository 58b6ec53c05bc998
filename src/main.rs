// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line front end: list the bracelets of one fixed content.
//!
//! ```text
//! $ bracelets 4 2 2 2
//! 0 1 0 1
//! 0 0 1 1
//! Total = 2
//! ```
//!
//! When `N`, `K` or the counts are left out they are read from stdin.

use std::collections::HashSet;
use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use bracelet_search::symmetry::{check_symmetry, is_aperiodic, SymmetryType};
use bracelet_search::{generate, Content, Counters, Generator, SearchConfig};

#[derive(Debug, Parser)]
#[command(name = "bracelets", about = "List bracelets with fixed content")]
struct Cli {
    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity level (-v = INFO, -vv = DEBUG, -vvv = TRACE)"
    )]
    verbose: u8,

    #[arg(long, help = "Only list bracelets that are not a repetition of a shorter word")]
    aperiodic: bool,

    #[arg(long, conflicts_with = "count_only", help = "Write the result as JSON")]
    json: bool,

    #[arg(long, help = "Print the total only")]
    count_only: bool,

    #[arg(long, help = "Check every bracelet against a brute-force canonical form")]
    verify: bool,

    #[arg(help = "Bracelet length")]
    n: Option<usize>,

    #[arg(help = "Number of colors")]
    k: Option<usize>,

    #[arg(help = "Number of occurrences of each color, in color order")]
    counts: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    n: usize,
    k: usize,
    counts: &'a [usize],
    aperiodic_only: bool,
    total: usize,
    bracelets: &'a [Vec<usize>],
}

/// Whitespace separated integers read from stdin with the original prompts.
struct Prompter<R> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Prompter<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    fn next_number(&mut self, prompt: &str) -> Result<usize> {
        if self.pending.is_empty() {
            eprint!("{}", prompt);
            io::stderr().flush()?;
        }
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Unexpected end of input");
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
        let token = self.pending.pop().unwrap_or_default();
        token
            .parse()
            .with_context(|| format!("Expected a non-negative integer, got {:?}", token))
    }
}

/// Bracelet length and number of colors, prompting for whatever is missing.
fn read_size<R: BufRead>(
    n: Option<usize>,
    k: Option<usize>,
    prompter: &mut Prompter<R>,
) -> Result<(usize, usize)> {
    match (n, k) {
        (Some(n), Some(k)) => Ok((n, k)),
        (None, _) => {
            let prompt = "Enter n (bracelet length) k (number of colors): ";
            let n = prompter.next_number(prompt)?;
            let k = prompter.next_number(prompt)?;
            Ok((n, k))
        }
        (Some(_), None) => bail!("The number of colors must follow the bracelet length"),
    }
}

fn read_content<R: BufRead>(cli: &Cli, prompter: &mut Prompter<R>) -> Result<Content> {
    let (n, k) = read_size(cli.n, cli.k, prompter)?;

    let counts = if cli.counts.is_empty() {
        (0..k)
            .map(|color| prompter.next_number(&format!(" enter # of {}'s: ", color)))
            .collect::<Result<Vec<_>>>()?
    } else {
        cli.counts.clone()
    };

    Content::new(n, k, &counts).context("Invalid bracelet content")
}

/// Brute-force check of one emitted bracelet.
struct Verifier<'a> {
    content: &'a Content,
    aperiodic_only: bool,
    seen: HashSet<Vec<usize>>,
    failures: usize,
}

impl<'a> Verifier<'a> {
    fn new(content: &'a Content, aperiodic_only: bool) -> Self {
        Self {
            content,
            aperiodic_only,
            seen: HashSet::new(),
            failures: 0,
        }
    }

    fn check(&mut self, bracelet: &[usize]) {
        let valid = self.content.matches(bracelet)
            && check_symmetry(bracelet) != SymmetryType::NonCanonical
            && (!self.aperiodic_only || is_aperiodic(bracelet))
            && self.seen.insert(bracelet.to_vec());
        if !valid {
            warn!("Bracelet {:?} failed verification", bracelet);
            self.failures += 1;
        }
    }
}

fn write_bracelet<W: Write>(out: &mut W, bracelet: &[usize]) -> io::Result<()> {
    let mut colors = bracelet.iter();
    if let Some(first) = colors.next() {
        write!(out, "{}", first)?;
    }
    for color in colors {
        write!(out, " {}", color)?;
    }
    writeln!(out)
}

/// Generate the bracelets of `content` and write them in the requested form.
fn write_bracelets<W: Write>(cli: &Cli, content: &Content, out: &mut W) -> Result<()> {
    let config = SearchConfig::default().with_aperiodic_only(cli.aperiodic);
    info!(
        "Generating bracelets of length {} over {} colors with counts {:?}",
        content.len(),
        content.colors(),
        content.counts()
    );

    let mut verifier = Verifier::new(content, cli.aperiodic);

    let total = if cli.json {
        let collector = generate(content, config);
        if cli.verify {
            for bracelet in collector.bracelets() {
                verifier.check(bracelet);
            }
        }
        let report = Report {
            n: content.len(),
            k: content.colors(),
            counts: content.counts(),
            aperiodic_only: cli.aperiodic,
            total: collector.len(),
            bracelets: collector.bracelets(),
        };
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write JSON")?;
        writeln!(out)?;
        collector.len() as u64
    } else {
        let mut failure: Option<io::Error> = None;
        let stats = Generator::new(content, config).run(&mut |bracelet: &[usize]| {
            if cli.verify {
                verifier.check(bracelet);
            }
            if cli.count_only || failure.is_some() {
                return;
            }
            if let Err(err) = write_bracelet(&mut *out, bracelet) {
                failure = Some(err);
            }
        });
        if let Some(err) = failure {
            return Err(err).context("Failed to write bracelets");
        }
        info!("Search statistics: {}", stats);
        let total = stats.get(Counters::Bracelets);
        writeln!(out, "Total = {}", total)?;
        total
    };
    out.flush()?;

    if verifier.failures > 0 {
        bail!(
            "{} of {} bracelets failed verification",
            verifier.failures,
            total
        );
    }
    if cli.verify {
        info!("All {} bracelets verified", total);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(level)
        .init();

    let stdin = io::stdin();
    let content = read_content(&cli, &mut Prompter::new(stdin.lock()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_bracelets(&cli, &content, &mut out)
}
