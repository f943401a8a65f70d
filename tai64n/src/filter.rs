//! Line filters in the manner of daemontools `tai64n` and `tai64nlocal`.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use tai64n_proto::consts::PREFIXED_LABEL_SIZE;
use tai64n_proto::Timestamp;

const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f";

/// Prefix each input line with `@label ` taken from `clock` at read time.
///
/// A final line without a newline gets one. Returns the number of lines written.
pub fn stamp<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    mut clock: impl FnMut() -> Timestamp,
) -> io::Result<u64> {
    let mut line = Vec::new();
    let mut count = 0;

    while input.read_until(b'\n', &mut line)? > 0 {
        write!(output, "@{} ", clock())?;
        output.write_all(&line)?;
        if line.last() != Some(&b'\n') {
            output.write_all(b"\n")?;
        }
        // Keep pipelines live.
        output.flush()?;
        line.clear();
        count += 1;
    }

    Ok(count)
}

/// Replace a leading `@label` on each line with its UTC time.
///
/// Lines that do not start with a valid label are copied unchanged.
/// Returns the number of labels replaced.
pub fn local<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<u64> {
    let mut line = Vec::new();
    let mut count = 0;

    while input.read_until(b'\n', &mut line)? > 0 {
        match localize(&line) {
            Some(time) => {
                write!(output, "{}", time.format(LOCAL_FORMAT))?;
                output.write_all(&line[PREFIXED_LABEL_SIZE..])?;
                count += 1;
            }
            None => output.write_all(&line)?,
        }
        output.flush()?;
        line.clear();
    }

    Ok(count)
}

fn localize(line: &[u8]) -> Option<DateTime<Utc>> {
    let label = line.get(..PREFIXED_LABEL_SIZE)?;
    let timestamp = match Timestamp::parse_label(label) {
        Ok(timestamp) => timestamp,
        Err(err) => {
            log::trace!("No label at start of line: {}", err);
            return None;
        }
    };
    let time = timestamp.to_datetime();
    if time.is_none() {
        log::debug!("Label @{} is out of calendar range", timestamp);
    }
    time
}
