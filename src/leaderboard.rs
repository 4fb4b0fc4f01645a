#![cfg(feature = "std")]

//! Append-only leaderboard file.
//!
//! Each record is one line. The default [`QuotedCsv`] format wraps string
//! fields in double quotes without escaping, so a quote or comma inside a
//! player name corrupts that line when read back.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::record::GameResult;

/// Default leaderboard location, relative to the working directory.
pub const LEADERBOARD_FILE: &str = "leaderboard.csv";
/// Rows shown by default when displaying the table.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Line encoding for leaderboard records.
pub trait RecordFormat {
    /// Encode a record as a single line, without the terminator.
    fn encode(&self, result: &GameResult) -> String;

    /// Decode a line, or `None` if it is malformed.
    fn decode(&self, line: &str) -> Option<GameResult>;
}

/// `"<timestamp>","<player>","<difficulty>",<attempts>,<seconds>,<secret>,<score>`
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedCsv;

fn unquote(field: &str) -> &str {
    if field.len() < 2 {
        return field;
    }
    match field.strip_prefix('"') {
        Some(rest) => {
            // drop the last character whatever it is
            let mut chars = rest.chars();
            chars.next_back();
            chars.as_str()
        }
        None => field,
    }
}

impl RecordFormat for QuotedCsv {
    fn encode(&self, r: &GameResult) -> String {
        format!(
            "\"{}\",\"{}\",\"{}\",{},{:.2},{},{:.2}",
            r.timestamp,
            r.player_name,
            r.difficulty,
            r.attempts,
            r.elapsed_seconds,
            r.secret_number,
            r.score
        )
    }

    fn decode(&self, line: &str) -> Option<GameResult> {
        let mut fields = line.split(',');
        let timestamp = unquote(fields.next()?).to_string();
        let player_name = unquote(fields.next()?).to_string();
        let difficulty = unquote(fields.next()?).to_string();
        let attempts = fields.next()?.trim().parse().ok()?;
        let elapsed_seconds = fields.next()?.trim().parse().ok()?;
        let secret_number = fields.next()?.trim().parse().ok()?;
        let score = fields.next()?.trim().parse().ok()?;
        Some(GameResult {
            player_name,
            difficulty,
            attempts,
            elapsed_seconds,
            secret_number,
            score,
            timestamp,
        })
    }
}

/// Leaderboard stored in a single file.
pub struct Leaderboard<F: RecordFormat = QuotedCsv> {
    path: PathBuf,
    format: F,
}

impl Leaderboard<QuotedCsv> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_format(path, QuotedCsv)
    }
}

impl<F: RecordFormat> Leaderboard<F> {
    pub fn with_format(path: impl Into<PathBuf>, format: F) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file if needed.
    pub fn append(&self, result: &GameResult) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", self.format.encode(result))?;
        log::debug!(
            "appended result for {} to {}",
            result.player_name,
            self.path.display()
        );
        Ok(())
    }

    /// Up to `limit` records in file order, starting at the top of the file.
    ///
    /// A missing or unreadable file reads as empty. Blank and malformed lines
    /// are skipped.
    pub fn read_recent(&self, limit: usize) -> Vec<GameResult> {
        let mut out = Vec::new();
        if limit == 0 {
            return out;
        }
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("leaderboard {} not readable: {}", self.path.display(), e);
                return out;
            }
        };
        for (lineno, chunk) in BufReader::new(file).split(b'\n').enumerate() {
            let mut bytes = match chunk {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::debug!("stopped reading leaderboard at line {}: {}", lineno + 1, e);
                    break;
                }
            };
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            if bytes.is_empty() {
                continue;
            }
            let Ok(line) = std::str::from_utf8(&bytes) else {
                log::debug!("skipping non-UTF-8 leaderboard line {}", lineno + 1);
                continue;
            };
            match self.format.decode(line) {
                Some(result) => {
                    out.push(result);
                    if out.len() >= limit {
                        break;
                    }
                }
                None => log::debug!("skipping malformed leaderboard line {}", lineno + 1),
            }
        }
        out
    }

    /// Render up to `limit` records as a fixed-width table.
    pub fn display<W: Write + ?Sized>(&self, limit: usize, out: &mut W) -> io::Result<()> {
        let entries = self.read_recent(limit);
        if entries.is_empty() {
            writeln!(out, "No leaderboard entries yet.")?;
            return Ok(());
        }
        writeln!(out, "\nTop {} recent games:", entries.len())?;
        writeln!(
            out,
            "{:<20}{:<15}{:<12}{:<10}{:<10}{:<10}",
            "Time", "Player", "Diff", "Att", "Sec", "Score"
        )?;
        writeln!(out, "{}", "-".repeat(80))?;
        for e in &entries {
            writeln!(
                out,
                "{:<20}{:<15}{:<12}{:<10}{:<10.1}{:<10.2}",
                e.timestamp, e.player_name, e.difficulty, e.attempts, e.elapsed_seconds, e.score
            )?;
        }
        writeln!(out)?;
        Ok(())
    }
}
