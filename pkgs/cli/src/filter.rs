use log::{debug, warn};
use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};
use tristate_core::TriState;

/// A labelled record carrying one tristate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub label: String,
    pub value: TriState,
}

/// Which records to keep.
#[derive(Debug, Default, Clone, Copy)]
pub struct Selection {
    /// `True`/`False` keep only records with that value, `None` keeps all.
    pub want: TriState,
    /// Also keep records whose own value is `None` when `want` is set.
    pub include_unset: bool,
}

impl Selection {
    pub fn keeps(&self, value: TriState) -> bool {
        match value.as_bool() {
            Some(b) => self.want.matches(b, true),
            None => self.include_unset || !self.want.is_set(),
        }
    }
}

/// Parses `<label> <value>`. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_record(line: &str) -> Result<Option<Record>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let (Some(label), Some(raw), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(format!("Expected '<label> <value>', got {:?}", line));
    };
    let value = raw
        .parse::<TriState>()
        .map_err(|e| format!("{} for {:?}: {:?}", e, label, raw))?;

    Ok(Some(Record {
        label: label.to_owned(),
        value,
    }))
}

/// Reads records from `reader` and returns those the selection keeps.
/// Malformed lines are skipped with a warning.
pub fn filter_records<R: BufRead>(reader: R, selection: &Selection) -> io::Result<Vec<Record>> {
    let mut kept = Vec::new();
    let mut seen = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_record(&line) {
            Ok(Some(record)) => {
                seen += 1;
                if selection.keeps(record.value) {
                    kept.push(record);
                }
            }
            Ok(None) => {}
            Err(msg) => warn!("Skipping line {}: {}", idx + 1, msg),
        }
    }

    debug!(
        "Kept {} of {} record(s) for want={} include_unset={}",
        kept.len(),
        seen,
        selection.want,
        selection.include_unset
    );
    Ok(kept)
}

/// Filters records from `input` (stdin when absent) and prints the kept labels,
/// or only their count.
pub fn run(input: Option<&Path>, selection: &Selection, count_only: bool) -> Result<(), Box<dyn Error>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            debug!("Reading records from {:?}", path);
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(io::stdin().lock()),
    };

    let kept = filter_records(reader, selection)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if count_only {
        writeln!(writer, "{}", kept.len())?;
    } else {
        for record in &kept {
            writeln!(writer, "{}", record.label)?;
        }
    }
    writer.flush()?;
    Ok(())
}
