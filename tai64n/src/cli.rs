use clap::{Parser, Subcommand};

/// Read, write and convert TAI64N timestamps
#[derive(Parser, Debug)]
#[command(name = "tai64n")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current time as a TAI64N label
    Now {
        /// Use the TAI clock of the tai64 crate (Unix epoch at 2^62 + 37)
        #[arg(long)]
        tai: bool,
    },

    /// Decode TAI64N labels, with or without the leading '@'
    Parse {
        #[arg(required = true)]
        labels: Vec<String>,

        /// Print one JSON object per label
        #[arg(long)]
        json: bool,
    },

    /// Print the TAI64N label of a Unix time
    Encode {
        /// Seconds since the Unix epoch
        #[arg(long, allow_hyphen_values = true)]
        seconds: i64,

        /// Nanoseconds, stored as given
        #[arg(long, default_value_t = 0)]
        nanos: u32,
    },

    /// Prefix every line of standard input with the current label
    Stamp {
        /// Use the TAI clock of the tai64 crate (Unix epoch at 2^62 + 37)
        #[arg(long)]
        tai: bool,
    },

    /// Replace labels at the start of standard input lines with UTC times
    Local,
}
