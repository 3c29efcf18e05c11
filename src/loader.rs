use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::errors::TrackerError;
use crate::frequency_table::FrequencyTable;

const TRAILING_BLANKS: &[char] = &[' ', '\t', '\r', '\n'];

/// Strips trailing spaces, tabs, `\r` and `\n` from a raw line.
///
/// Leading whitespace is kept on purpose: ` Apples` and `Apples` are
/// different items, the same as the input file spells them.
pub fn normalize_line(line: &str) -> &str {
    line.trim_end_matches(TRAILING_BLANKS)
}

/// Reads one raw line, newline included. Bytes that are not UTF-8 are
/// replaced with U+FFFD instead of failing the read. `None` at end of input.
pub fn read_line_lossy<R: BufRead>(source: &mut R) -> io::Result<Option<String>> {
    let mut raw = Vec::new();
    if source.read_until(b'\n', &mut raw)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
}

/// Builds a frequency table from a line-oriented source.
/// Lines that are empty after trimming are skipped.
pub fn load<R: BufRead>(mut source: R) -> io::Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut skipped = 0usize;

    while let Some(line) = read_line_lossy(&mut source)? {
        let item = normalize_line(&line);
        if item.is_empty() {
            skipped += 1;
            continue;
        }
        table.insert(item, 1);
    }

    log::debug!("Skipped {} blank lines", skipped);
    Ok(table)
}

pub fn load_items(file_path: &Path) -> Result<FrequencyTable, TrackerError> {
    let unavailable = |source| TrackerError::SourceUnavailable {
        path: file_path.to_path_buf(),
        source,
    };

    let file = File::open(file_path).map_err(unavailable)?;
    let table = load(BufReader::new(file)).map_err(unavailable)?;

    log::info!(
        "Loaded {} purchases of {} distinct items from {}",
        table.total(),
        table.len(),
        file_path.display()
    );
    Ok(table)
}
