use anyhow::{Context, Result};
use log::LevelFilter;

/// Install the global logger on stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between `debug` and `warn`.
pub fn configure_logging(verbose: bool) -> Result<()> {
    let mut builder = pretty_env_logger::formatted_builder();

    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            });
        }
    }

    builder.try_init().context("Failed to install logger")
}
