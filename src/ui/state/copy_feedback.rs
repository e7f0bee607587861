// SPDX-License-Identifier: MPL-2.0
//! Clipboard copy actions with a transient "copied" acknowledgment.
//!
//! Only one marker exists at a time. A new copy replaces the previous marker
//! and restarts its timer; a failed copy clears it. Time is passed in
//! explicitly so expiry can be driven by the application tick.

use crate::application::port::{ClipboardError, ClipboardWriter};
use crate::content::PaymentMethodContent;
use std::time::{Duration, Instant};

/// How long a copy acknowledgment stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// What was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyKey {
    /// One detail row, by position in the method's detail list.
    Field(usize),
    /// The composed summary of the whole method.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marker {
    key: CopyKey,
    copied_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    marker: Option<Marker>,
}

impl CopyFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` to the clipboard and marks `key` as copied.
    ///
    /// # Errors
    ///
    /// Returns the clipboard error unchanged. The marker is cleared so no
    /// success indication remains on screen.
    pub fn copy_field(
        &mut self,
        clipboard: &mut dyn ClipboardWriter,
        value: &str,
        key: CopyKey,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        match clipboard.write_text(value) {
            Ok(()) => {
                self.marker = Some(Marker {
                    key,
                    copied_at: now,
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                self.marker = None;
                Err(err)
            }
        }
    }

    /// Copies the method's plain-text summary and marks [`CopyKey::All`].
    ///
    /// # Errors
    ///
    /// Same as [`CopyFeedback::copy_field`].
    pub fn copy_all(
        &mut self,
        clipboard: &mut dyn ClipboardWriter,
        method: &PaymentMethodContent,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        self.copy_field(clipboard, &method.summary_text(), CopyKey::All, now)
    }

    /// Expires the marker once [`COPY_FEEDBACK_DURATION`] has elapsed.
    ///
    /// Returns `true` if a marker was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.marker {
            Some(marker) if now.saturating_duration_since(marker.copied_at) >= COPY_FEEDBACK_DURATION => {
                self.marker = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.marker = None;
    }

    #[must_use]
    pub fn is_copied(&self, key: CopyKey) -> bool {
        self.marker.is_some_and(|marker| marker.key == key)
    }

    #[must_use]
    pub fn active(&self) -> Option<CopyKey> {
        self.marker.map(|marker| marker.key)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.marker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PaymentMethodDetail;

    #[derive(Debug, Default)]
    struct RecordingClipboard {
        written: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::WriteRejected("denied".into()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    fn wise() -> PaymentMethodContent {
        PaymentMethodContent {
            id: "wise".into(),
            name: "Wise".into(),
            details: vec![PaymentMethodDetail {
                label: "Payment Link".into(),
                value: "https://wise.com/pay/business/adversolutionsllc".into(),
                copyable: true,
            }],
            instructions: Some("Click the link...".into()),
        }
    }

    #[test]
    fn copy_field_writes_value_and_marks_key() {
        let mut clipboard = RecordingClipboard::default();
        let mut feedback = CopyFeedback::new();
        let now = Instant::now();

        feedback
            .copy_field(&mut clipboard, "RIB-123", CopyKey::Field(1), now)
            .expect("copy should succeed");

        assert_eq!(clipboard.written, vec!["RIB-123".to_string()]);
        assert!(feedback.is_copied(CopyKey::Field(1)));
        assert!(!feedback.is_copied(CopyKey::All));
    }

    #[test]
    fn copy_all_writes_summary() {
        let mut clipboard = RecordingClipboard::default();
        let mut feedback = CopyFeedback::new();

        feedback
            .copy_all(&mut clipboard, &wise(), Instant::now())
            .expect("copy should succeed");

        assert_eq!(
            clipboard.written[0],
            "Wise\n----\nPayment Link: https://wise.com/pay/business/adversolutionsllc\n\nClick the link..."
        );
        assert_eq!(feedback.active(), Some(CopyKey::All));
    }

    #[test]
    fn marker_expires_after_duration() {
        let mut clipboard = RecordingClipboard::default();
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();
        feedback
            .copy_field(&mut clipboard, "x", CopyKey::Field(0), start)
            .expect("copy should succeed");

        assert!(!feedback.tick(start + Duration::from_millis(1999)));
        assert!(feedback.is_active());
        assert!(feedback.tick(start + COPY_FEEDBACK_DURATION));
        assert!(!feedback.is_active());
    }

    #[test]
    fn second_copy_replaces_marker_and_restarts_timer() {
        let mut clipboard = RecordingClipboard::default();
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();
        feedback
            .copy_field(&mut clipboard, "x", CopyKey::Field(0), start)
            .expect("copy should succeed");

        let later = start + Duration::from_millis(1500);
        feedback
            .copy_all(&mut clipboard, &wise(), later)
            .expect("copy should succeed");

        assert!(!feedback.is_copied(CopyKey::Field(0)));
        assert!(feedback.is_copied(CopyKey::All));

        // The first marker's deadline passes without clearing the second.
        assert!(!feedback.tick(start + COPY_FEEDBACK_DURATION));
        assert!(feedback.tick(later + COPY_FEEDBACK_DURATION));
    }

    #[test]
    fn failed_copy_clears_marker_and_reports_error() {
        let mut clipboard = RecordingClipboard::default();
        let mut feedback = CopyFeedback::new();
        let now = Instant::now();
        feedback
            .copy_field(&mut clipboard, "x", CopyKey::Field(0), now)
            .expect("copy should succeed");

        clipboard.fail = true;
        let result = feedback.copy_all(&mut clipboard, &wise(), now);

        assert!(matches!(result, Err(ClipboardError::WriteRejected(_))));
        assert!(!feedback.is_active());
    }

    #[test]
    fn tick_without_marker_is_noop() {
        let mut feedback = CopyFeedback::new();
        assert!(!feedback.tick(Instant::now()));
    }
}
