// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal notifier: renders transient notices as colored status lines.

use async_trait::async_trait;
use colored::Colorize;
use solace_core::{Notice, NoticeLevel, Notifier};

/// Prints notices to the terminal, success to stdout and errors to stderr.
#[derive(Debug, Default)]
pub struct TermNotifier;

#[async_trait]
impl Notifier for TermNotifier {
    async fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("{} {}", "✓".green().bold(), notice.message),
            NoticeLevel::Error => eprintln!("{} {}", "✗".red().bold(), notice.message),
        }
    }
}
