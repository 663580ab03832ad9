mod commands;
mod terminal;

use std::io;

use colored::*;
use commands::CommandLine;
use shout_common::config::Config;
use shout_common::file::Filename;
use shout_core::driver::{self, Outcome};
use terminal::reporter::TerminalReporter;
use terminal::{colors, logging, print};

const SUMMARY_KEY_WIDTH: usize = 6;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;
    print::initialize();

    let cfg: Config = commands.into_config();
    if cfg.banner {
        print::banner();
    }

    let filename: Filename = driver::prompt_filename(&mut io::stdin().lock(), &mut io::stdout())?;
    let reporter = TerminalReporter::new(cfg.quiet);
    let outcome: Outcome = driver::run(&filename, &cfg, &reporter)?;

    if cfg.summary {
        summarize(&filename, &outcome);
    }
    Ok(())
}

fn summarize(filename: &Filename, outcome: &Outcome) {
    let Outcome::Written { target, bytes } = outcome else {
        return;
    };

    mprint!();
    print::titled_rule("summary");
    print::field("Source", filename.as_str().color(colors::TEXT_DEFAULT), SUMMARY_KEY_WIDTH);
    print::field(
        "Target",
        target.display().to_string().color(colors::ACCENT),
        SUMMARY_KEY_WIDTH,
    );
    print::field("Bytes", bytes.to_string().color(colors::TEXT_DEFAULT), SUMMARY_KEY_WIDTH);
}
