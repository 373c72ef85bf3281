//! Activity journal: what the session did, and what it had to skip.

use crate::errors::AppResult;
use ansi_term::Colour;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Entries are kept in memory and, when a path is set, appended to the log
/// file as JSON lines.
#[derive(Debug, Default)]
pub struct ActivityLog {
    path: Option<PathBuf>,
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn to_file(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Record one line. A failing log file never interrupts the caller.
    pub fn ttlog(&mut self, operation: &str, target: &str, message: &str) {
        let entry = LogEntry {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        };

        if let Some(path) = &self.path
            && let Err(e) = append(path, &entry)
        {
            eprintln!("⚠️ Failed to write internal log: {}", e);
            self.path = None;
        }

        self.entries.push(entry);
    }
}

fn append(path: &Path, entry: &LogEntry) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(entry)?)?;
    Ok(())
}

/// Read back a log file. Lines that do not parse are skipped.
pub fn read_entries(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}

fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "load" => Colour::Green,
        "load_failed" => Colour::Red,
        "tab" => Colour::Cyan,
        "countdown" => Colour::Yellow,
        "reminder" => Colour::Purple,
        "view" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_entries(path)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty ({})", path.display());
            return Ok(());
        }

        let rows: Vec<(usize, String, &LogEntry, String)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (i + 1, date, e, op_target)
            })
            .collect();

        // widths are measured without colour codes, capped at 60
        let op_w = rows
            .iter()
            .map(|(_, _, _, ot)| ot.chars().count())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _, _)| d.len()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for (id, date, entry, op_target) in rows {
            let visible: String = if op_target.chars().count() > 60 {
                let mut s: String = op_target.chars().take(57).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is coloured
            let color = color_for_operation(&entry.operation);
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
