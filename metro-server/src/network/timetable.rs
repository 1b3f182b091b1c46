//! Line-timetable text ingestion.
//!
//! The timetable lists each line as a header followed by one row per pair of
//! adjacent stations:
//!
//! ```text
//! 1号线站点间距
//! 站点名称	间距（KM）
//! 汉口北---滠口新城	1.76
//! 滠口新城---滕子岗	1.01
//! ```
//!
//! A header is any row containing `站点间距`; the line name is the text in
//! front of it. Rows that cannot be understood are logged and skipped, so a
//! damaged row never leaves a half-registered connection behind.

use std::path::Path;

use tracing::{debug, warn};

use super::{Network, NetworkError};

const HEADER_MARKER: &str = "站点间距";
const COLUMN_HEADER_MARKER: &str = "站点名称";
const PAIR_SEPARATOR: &str = "---";

/// Errors from loading a timetable.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Reading the file failed
    #[error("failed to read timetable: {0}")]
    Io(#[from] std::io::Error),

    /// A connection was rejected by the network
    #[error("invalid connection: {0}")]
    Network(#[from] NetworkError),
}

/// Summary of an ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimetableReport {
    /// Line headers seen
    pub lines: usize,
    /// Station pairs connected
    pub connections: usize,
    /// Rows skipped as malformed
    pub skipped: usize,
}

/// Why a row was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowProblem {
    NoCurrentLine,
    NoSeparator,
    MissingStation,
    BadDistance,
}

impl RowProblem {
    fn as_str(self) -> &'static str {
        match self {
            RowProblem::NoCurrentLine => "row appears before any line header",
            RowProblem::NoSeparator => "missing --- between station names",
            RowProblem::MissingStation => "missing station name",
            RowProblem::BadDistance => "distance is not a positive number",
        }
    }
}

/// A parsed connection row.
#[derive(Debug, PartialEq)]
struct Row<'a> {
    from: &'a str,
    to: &'a str,
    distance_km: f64,
}

/// Parse a `A---B<whitespace>distance` row.
fn parse_row(row: &str) -> Result<Row<'_>, RowProblem> {
    let (from, rest) = row.split_once(PAIR_SEPARATOR).ok_or(RowProblem::NoSeparator)?;
    let from = from.trim();

    let (to, distance) = rest
        .trim()
        .rsplit_once(char::is_whitespace)
        .ok_or(RowProblem::BadDistance)?;
    let to = to.trim();

    if from.is_empty() || to.is_empty() {
        return Err(RowProblem::MissingStation);
    }

    let distance_km: f64 = distance.parse().map_err(|_| RowProblem::BadDistance)?;
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(RowProblem::BadDistance);
    }

    Ok(Row {
        from,
        to,
        distance_km,
    })
}

/// Build a network from timetable text.
///
/// Malformed rows are skipped with a warning and counted in the report.
pub fn parse_timetable(text: &str) -> Result<(Network, TimetableReport), TimetableError> {
    let mut network = Network::new();
    let mut report = TimetableReport::default();
    let mut current_line = None;

    for (idx, raw) in text.lines().enumerate() {
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }

        if let Some((name, _)) = row.split_once(HEADER_MARKER) {
            let name = name.trim();
            current_line = Some(network.add_line(name));
            report.lines += 1;
            debug!(line = name, "Reading timetable line");
            continue;
        }

        if row.contains(COLUMN_HEADER_MARKER) {
            continue;
        }

        let parsed = current_line
            .ok_or(RowProblem::NoCurrentLine)
            .and_then(|line| parse_row(row).map(|r| (line, r)));

        match parsed {
            Ok((line, r)) => {
                let a = network.add_station(r.from);
                let b = network.add_station(r.to);
                network.connect(a, b, line, r.distance_km)?;
                report.connections += 1;
            }
            Err(problem) => {
                warn!(
                    row_number = idx + 1,
                    row,
                    reason = problem.as_str(),
                    "Skipping malformed timetable row"
                );
                report.skipped += 1;
            }
        }
    }

    Ok((network, report))
}

/// Read and parse a timetable file.
pub fn load_timetable(
    path: impl AsRef<Path>,
) -> Result<(Network, TimetableReport), TimetableError> {
    let text = std::fs::read_to_string(path)?;
    parse_timetable(&text)
}
