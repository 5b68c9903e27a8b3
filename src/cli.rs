// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::consts::{DEFAULT_THRESHOLD, STORE_DIR},
    config::options::{AggregationMode, DistrictId, RunOptions, check_threshold},
    core::net::HttpFetcher,
    error::Error,
    progress::Progress,
    scrape::{self, DistrictReport},
    store::{CountyTally, TallyEntry},
};

#[derive(Parser, Debug, Default)]
#[command(
    name = "lunch_scrape",
    version,
    about = "Share of a district's schools where most students qualify for free/reduced lunch"
)]
pub struct Cli {
    /// Report for a whole county (tally across runs) or a single district.
    #[arg(long, value_enum)]
    pub mode: Option<AggregationMode>,

    /// Start a new county tally (county mode only). Asked when omitted.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub fresh: Option<bool>,

    /// NCES district id. Asked when omitted.
    #[arg(long)]
    pub district: Option<String>,

    /// Eligible/enrolled ratio at which a school qualifies.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    #[arg(long, default_value = STORE_DIR)]
    pub store_dir: PathBuf,

    /// Keep a copy of the concatenated school list in the store directory.
    #[arg(long, default_value_t = false)]
    pub save_document: bool,
}

/// How the run ended, for the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    /// Data missing; no percentage was produced.
    Incomplete,
    InvalidInput,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Reported => 0,
            Outcome::Incomplete => 2,
            Outcome::InvalidInput => 64,
        }
    }
}

/// Line-based question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until `parse` accepts the answer. EOF is an error.
    fn ask<T>(&mut self, question: &str, parse: impl Fn(&str) -> Option<T>) -> crate::Result<T> {
        loop {
            write!(self.output, "{question} ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::NoAnswer(s!(question)));
            }
            if let Some(v) = parse(line.trim()) {
                return Ok(v);
            }
            writeln!(self.output, "Unrecognized answer {:?}.", line.trim())?;
        }
    }

    pub fn ask_mode(&mut self) -> crate::Result<AggregationMode> {
        self.ask(
            "Are you planning to report for a whole county (option 1) or a single district (option 2)? Choose option 1 or 2:",
            parse_mode,
        )
    }

    pub fn ask_fresh(&mut self) -> crate::Result<bool> {
        self.ask("Is this a new county entry? Y or N:", parse_yes_no)
    }

    pub fn ask_district(&mut self) -> crate::Result<DistrictId> {
        self.ask("What is the NCES District ID?", |a| DistrictId::parse(a).ok())
    }
}

fn parse_mode(answer: &str) -> Option<AggregationMode> {
    match answer.to_ascii_lowercase().as_str() {
        "1" | "county" | "c" => Some(AggregationMode::County),
        "2" | "single" | "district" | "s" => Some(AggregationMode::Single),
        _ => None,
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Merge flags with interactive answers: mode, then fresh (county only), then district.
pub fn resolve_options<R: BufRead, W: Write>(
    cli: Cli,
    prompter: &mut Prompter<R, W>,
) -> crate::Result<RunOptions> {
    let threshold = check_threshold(cli.threshold)?;

    let mode = match cli.mode {
        Some(m) => m,
        None => prompter.ask_mode()?,
    };
    let fresh = match (mode, cli.fresh) {
        (AggregationMode::Single, Some(_)) => return Err(Error::CountyOnly("fresh")),
        (AggregationMode::Single, None) => false,
        (AggregationMode::County, Some(f)) => f,
        (AggregationMode::County, None) => prompter.ask_fresh()?,
    };
    let district = match cli.district.as_deref() {
        Some(raw) => DistrictId::parse(raw)?,
        None => prompter.ask_district()?,
    };

    let mut options = RunOptions::new(mode, district);
    options.fresh = fresh;
    options.threshold = threshold;
    options.store_dir = cli.store_dir;
    options.save_document = cli.save_document;
    Ok(options)
}

/// Prints progress to stdout.
#[derive(Default)]
pub struct ConsolePrinter {
    total: usize,
    done: usize,
    skipped: usize,
}

impl Progress for ConsolePrinter {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Found {total} school(s).");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, _index: usize, _link: &str) {
        self.done += 1;
        let seen = self.done + self.skipped;
        if seen % 10 == 0 {
            println!("Working... ({seen}/{})", self.total);
        }
    }
    fn item_skipped(&mut self, index: usize, _link: &str, reason: &str) {
        self.skipped += 1;
        println!("School {}/{}: {reason}. Skipping...", index + 1, self.total);
    }
    fn finish(&mut self) {
        println!("Read {} of {} school(s).", self.done, self.total);
    }
}

/// Add a district's `(qualifying, paired)` counts to the county tally.
///
/// Only county runs with a computed percentage contribute; anything else leaves
/// the tally untouched and returns `None`.
pub fn record_county(
    tally: &CountyTally,
    report: &DistrictReport,
    mode: AggregationMode,
) -> crate::Result<Option<TallyEntry>> {
    let Ok(stats) = &report.stats else {
        return Ok(None);
    };
    if mode != AggregationMode::County {
        return Ok(None);
    }
    let entry = TallyEntry { qualifying: stats.qualifying, total: stats.paired };
    tally.append(entry)?;
    Ok(Some(entry))
}

pub fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let options = match resolve_options(cli, &mut prompter) {
        Ok(o) => o,
        Err(e) if e.is_input() => {
            eprintln!("{e}");
            return Ok(Outcome::InvalidInput);
        }
        Err(e) => return Err(e.into()),
    };

    crate::log::init(&options.store_dir);

    let tally = CountyTally::open(&options.store_dir);
    if options.mode == AggregationMode::County && options.fresh {
        tally.reset().wrap_err("could not reset county tally")?;
    }

    let fetcher = HttpFetcher::new()?;
    let mut printer = ConsolePrinter::default();
    let report = scrape::run_district(&fetcher, &options, Some(&mut printer))
        .wrap_err_with(|| format!("could not process district {}", options.district))?;

    let stats = match &report.stats {
        Ok(stats) => stats,
        Err(e) => {
            println!("{e}");
            return Ok(Outcome::Incomplete);
        }
    };

    println!("{stats}");
    if stats.skipped() > 0 {
        println!("{} school(s) skipped due to missing data.", stats.skipped());
    }

    if record_county(&tally, &report, options.mode)
        .wrap_err("could not update county tally")?
        .is_some()
    {
        let county = tally.totals()?;
        if let Some(pct) = county.percent() {
            println!(
                "County so far: {pct:.2}% ({} of {} schools across {} district run(s)).",
                county.qualifying,
                county.total,
                tally.load()?.len()
            );
        }
    }

    Ok(Outcome::Reported)
}
