// SPDX-License-Identifier: MPL-2.0
//! `policy_portal` is a two-step policy review and payment portal built with
//! the Iced GUI framework.
//!
//! Readers pick a policy tab, scroll it to the end to unlock the agreement
//! button, then browse payment methods and copy transfer details. Interface
//! text is available in English, French and Arabic; theme and language
//! choices persist between sessions.

pub mod app;
pub mod application;
pub mod content;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
