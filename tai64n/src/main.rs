mod cli;
mod filter;
mod log_setup;
mod report;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tai64n_compat::Tai64N;
use tai64n_proto::Timestamp;

use cli::{Args, Command};
use report::Report;

fn main() -> Result<()> {
    let args = Args::parse();
    log_setup::configure_logging(args.verbose)?;

    main_entry(args.command)
}

fn main_entry(command: Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Command::Now { tai } => {
            writeln!(out, "@{}", clock(tai)())?;
        }
        Command::Parse { labels, json } => {
            let mut failed = 0;
            for label in &labels {
                match label.parse::<Timestamp>() {
                    Ok(timestamp) => {
                        let report = Report::from(timestamp);
                        if json {
                            serde_json::to_writer(&mut out, &report)?;
                            writeln!(out)?;
                        } else {
                            writeln!(out, "{}", report)?;
                        }
                    }
                    Err(err) => {
                        log::error!("{:?}: {}", label, err);
                        failed += 1;
                    }
                }
            }
            out.flush()?;
            if failed > 0 {
                anyhow::bail!("{} of {} labels failed to parse", failed, labels.len());
            }
        }
        Command::Encode { seconds, nanos } => {
            let timestamp = Timestamp::from_unix(seconds, nanos);
            log::debug!("Encoding {:?}", timestamp);
            writeln!(out, "@{}", timestamp)?;
        }
        Command::Stamp { tai } => {
            let count = filter::stamp(io::stdin().lock(), &mut out, clock(tai))
                .context("Failed to stamp standard input")?;
            log::debug!("Stamped {} lines", count);
        }
        Command::Local => {
            let count = filter::local(io::stdin().lock(), &mut out)
                .context("Failed to convert standard input")?;
            log::debug!("Replaced {} labels", count);
        }
    }

    out.flush()?;
    Ok(())
}

fn clock(tai: bool) -> fn() -> Timestamp {
    if tai {
        tai_now
    } else {
        Timestamp::now
    }
}

fn tai_now() -> Timestamp {
    Timestamp::from(Tai64N::now())
}
