// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace sessions` subcommands: list the counselor dashboard.

use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use solace_config::SolaceConfig;
use solace_core::SolaceError;
use solace_sessions::{
    filter_sessions, time_ago, unread_label, FilterTab, MoodReport, SessionRecord,
};

/// Reads session records from a JSON fixture or export file.
fn read_records(path: &Path) -> Result<Vec<SessionRecord>, SolaceError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SolaceError::Config(format!("cannot read sessions file {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        SolaceError::Config(format!(
            "cannot parse sessions file {}: {e}",
            path.display()
        ))
    })
}

/// Lists sessions under the given filter tab.
///
/// The records come from `--file` or, failing that, `client.sessions_file`
/// in the configuration.
pub fn list(
    config: &SolaceConfig,
    tab: FilterTab,
    file: Option<PathBuf>,
) -> Result<(), SolaceError> {
    let path = file
        .or_else(|| config.client.sessions_file.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            SolaceError::Config(
                "no sessions file: pass --file or set client.sessions_file".into(),
            )
        })?;

    let records = read_records(&path)?;
    let filtered = filter_sessions(&records, tab);
    let now = Utc::now();

    if filtered.is_empty() {
        println!("no sessions match the `{tab}` tab");
        return Ok(());
    }

    for record in filtered {
        let status = match record.status {
            solace_sessions::SessionStatus::Active => "active".green(),
            solace_sessions::SessionStatus::Closed => "closed".dimmed(),
        };
        println!(
            "{} {} {} {}",
            format!("#{}", record.id).cyan().bold(),
            status,
            record.kind,
            time_ago(record.last_activity, now).dimmed()
        );

        if record.has_chat() {
            if let Some(message) = &record.last_message {
                match unread_label(record.unread_count) {
                    Some(badge) => println!("    {message} ({})", badge.blue()),
                    None => println!("    {message}"),
                }
            }
        }

        if record.has_mood()
            && let Some(report) = &record.mood_report
        {
            println!("    {}", mood_summary(report));
        }
    }

    Ok(())
}

/// One-line mood summary: emoji, mood, intensity, notes, trigger chips.
fn mood_summary(report: &MoodReport) -> String {
    let mut line = format!(
        "{} {} level {}",
        report.mood.emoji(),
        report.mood,
        report.intensity
    );
    if let Some(notes) = &report.notes {
        line.push_str(&format!(" - {notes}"));
    }
    if !report.triggers.is_empty() {
        line.push_str(&format!(" [{}]", report.triggers.join(", ")));
    }
    line
}
