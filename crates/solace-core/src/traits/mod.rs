// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for seams between the Solace libraries and their hosts.

pub mod notify;

pub use notify::Notifier;
