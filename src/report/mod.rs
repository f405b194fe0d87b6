//! Serializing ranked results: CSV / JSON files and a console preview.
//!
//! CSV columns depend on the strategy:
//!
//! | Strategy | Columns |
//! |----------|---------|
//! | lexical  | `resume,score,top_matches` (keywords joined by `;`) |
//! | semantic | `resume,score,top_sent_1,top_sent_2` |

pub mod error;


pub use error::ReportError;

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ranking::RankedResult;
use crate::scoring::{ScoreRecord, Strategy};

const LEXICAL_COLUMNS: &[&str] = &["resume", "score", "top_matches"];
const SEMANTIC_COLUMNS: &[&str] = &["resume", "score", "top_sent_1", "top_sent_2"];

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    /// JSON for `.json` paths, CSV otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Csv,
        }
    }
}

/// Default output file name for a strategy.
pub fn default_output_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Lexical => "results.csv",
        Strategy::Semantic => "results_embeddings.csv",
    }
}

/// Column headers for a strategy.
pub fn columns(strategy: Strategy) -> &'static [&'static str] {
    match strategy {
        Strategy::Lexical => LEXICAL_COLUMNS,
        Strategy::Semantic => SEMANTIC_COLUMNS,
    }
}

/// Cell values of one record, aligned with [`columns`].
pub fn row(strategy: Strategy, record: &ScoreRecord) -> Vec<String> {
    let mut cells = vec![record.candidate.clone(), record.score.to_string()];
    match strategy {
        Strategy::Lexical => cells.push(record.evidence.joined()),
        Strategy::Semantic => {
            cells.push(record.evidence.get_or_empty(0).to_string());
            cells.push(record.evidence.get_or_empty(1).to_string());
        }
    }
    cells
}

/// Writes `ranked` to `path` in `format`.
pub fn write_report(
    path: &Path,
    format: ReportFormat,
    strategy: Strategy,
    ranked: &RankedResult,
) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ReportFormat::Csv => write_csv(&mut writer, strategy, ranked)?,
        ReportFormat::Json => write_json(&mut writer, ranked)?,
    }

    writer.flush().map_err(|source| ReportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a header line and one line per record, RFC 4180 quoting.
pub fn write_csv<W: Write>(
    writer: &mut W,
    strategy: Strategy,
    ranked: &RankedResult,
) -> Result<(), ReportError> {
    write_csv_line(writer, columns(strategy).iter().copied())?;
    for record in ranked.records() {
        let cells = row(strategy, record);
        write_csv_line(writer, cells.iter().map(String::as_str))?;
    }
    Ok(())
}

/// Writes the records as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: &mut W, ranked: &RankedResult) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *writer, ranked)?;
    writeln!(writer)?;
    Ok(())
}

/// Renders records as a plain aligned table (header included).
pub fn render_preview(strategy: Strategy, records: &[ScoreRecord]) -> String {
    let header: Vec<String> = columns(strategy).iter().map(|c| c.to_string()).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            let mut cells = row(strategy, record);
            cells[1] = format!("{:.6}", record.score);
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for cells in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn write_csv_line<'a, W: Write>(
    writer: &mut W,
    cells: impl Iterator<Item = &'a str>,
) -> std::io::Result<()> {
    let line: Vec<Cow<'a, str>> = cells.map(escape_csv).collect();
    writeln!(writer, "{}", line.join(","))
}

fn escape_csv(cell: &str) -> Cow<'_, str> {
    if cell.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}
