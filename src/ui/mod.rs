// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`policies`] - Policy tabs with the scroll-to-read agreement gate
//! - [`payment`] - Payment method cards, details modal and next steps
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Title badge, step indicator, language and theme controls
//! - [`state`] - Reusable state management (reading gate, consent, copy feedback, layout)
//! - [`widgets`] - Custom Iced widgets (scroll probe)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod header;
pub mod notifications;
pub mod payment;
pub mod policies;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;

use crate::i18n::Language;
use iced::alignment::Horizontal;

/// Horizontal alignment of running text in `language`.
#[must_use]
pub fn text_alignment(language: Language) -> Horizontal {
    if language.is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    }
}
