// SPDX-License-Identifier: MPL-2.0
//! Scroll-completion gate for the policy reader.
//!
//! The gate starts `Unread` when a tab is activated and flips to `Read` the
//! first time the observer reports the end-of-content sentinel as visible.
//! `Read` is terminal for that activation; only [`ReadingGate::activate`]
//! re-arms it.

use crate::application::port::{
    ObservationId, ObserveOptions, ScrollSample, VisibilityChange, VisibilityObserver,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Unread,
    Read,
}

/// Tracks whether the active policy has been read to the end.
#[derive(Debug, Clone, Default)]
pub struct ReadingGate {
    state: GateState,
    observation: Option<ObservationId>,
}

impl ReadingGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arms the gate and attaches a fresh observation.
    ///
    /// The state is reset before the observer is attached, so a report from
    /// the previous tab can never mark the new one as read.
    pub fn activate<O>(&mut self, observer: &mut O, options: ObserveOptions) -> ObservationId
    where
        O: VisibilityObserver + ?Sized,
    {
        observer.disconnect();
        self.state = GateState::Unread;
        self.observation = None;

        let id = observer.observe(options);
        self.observation = Some(id);
        id
    }

    /// Detaches the observer without touching the state.
    pub fn deactivate<O>(&mut self, observer: &mut O)
    where
        O: VisibilityObserver + ?Sized,
    {
        observer.disconnect();
        self.observation = None;
    }

    /// Applies one observer report. Returns `true` if the gate just opened.
    pub fn handle_change(&mut self, change: &VisibilityChange) -> bool {
        if self.observation != Some(change.observation) {
            tracing::debug!(
                observation = change.observation.value(),
                "ignoring visibility change from a detached observation"
            );
            return false;
        }

        if self.state == GateState::Read || !change.is_intersecting {
            return false;
        }

        tracing::debug!(ratio = change.ratio, "end of policy reached");
        self.state = GateState::Read;
        true
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub fn is_read(&self) -> bool {
        self.state == GateState::Read
    }

    #[must_use]
    pub fn observation(&self) -> Option<ObservationId> {
        self.observation
    }
}

/// Fraction of the content scrolled past, for the progress bar.
///
/// Informational only; the gate decides readiness.
#[must_use]
pub fn scroll_fraction(sample: &ScrollSample) -> f32 {
    let scrollable = sample.content_height - sample.viewport_height;
    if scrollable <= 0.0 {
        return 1.0;
    }
    (sample.offset_y / scrollable).clamp(0.0, 1.0)
}

/// Reading progress of the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadingProgress {
    fraction: f32,
}

impl ReadingProgress {
    pub fn record(&mut self, sample: &ScrollSample) {
        self.fraction = scroll_fraction(sample);
    }

    pub fn reset(&mut self) {
        self.fraction = 0.0;
    }

    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{RootMargin, SentinelGeometry, VisibilityRoot};
    use crate::test_utils::assert_abs_diff_eq;

    #[derive(Debug, Default)]
    struct ScriptedObserver {
        next: u64,
        observing: bool,
        disconnects: usize,
    }

    impl VisibilityObserver for ScriptedObserver {
        fn observe(&mut self, _options: ObserveOptions) -> ObservationId {
            self.next += 1;
            self.observing = true;
            ObservationId::new(self.next)
        }

        fn disconnect(&mut self) {
            self.observing = false;
            self.disconnects += 1;
        }

        fn process(&mut self, _sample: &ScrollSample) -> Option<VisibilityChange> {
            None
        }
    }

    fn options() -> ObserveOptions {
        ObserveOptions {
            root: VisibilityRoot::ContentPane,
            threshold: 0.05,
            margin: RootMargin::ZERO,
            sentinel: SentinelGeometry {
                height: 8.0,
                trailing: 0.0,
            },
        }
    }

    fn change(id: ObservationId, is_intersecting: bool) -> VisibilityChange {
        VisibilityChange {
            observation: id,
            ratio: if is_intersecting { 1.0 } else { 0.0 },
            is_intersecting,
        }
    }

    #[test]
    fn activation_starts_unread() {
        let mut observer = ScriptedObserver::default();
        let mut gate = ReadingGate::new();
        let id = gate.activate(&mut observer, options());

        assert_eq!(gate.state(), GateState::Unread);
        assert_eq!(gate.observation(), Some(id));
        assert!(observer.observing);
    }

    #[test]
    fn intersecting_change_opens_gate_once() {
        let mut observer = ScriptedObserver::default();
        let mut gate = ReadingGate::new();
        let id = gate.activate(&mut observer, options());

        assert!(!gate.handle_change(&change(id, false)));
        assert!(gate.handle_change(&change(id, true)));
        assert!(gate.is_read());
        assert!(!gate.handle_change(&change(id, true)));
    }

    #[test]
    fn read_never_reverts_on_leaving_sentinel() {
        let mut observer = ScriptedObserver::default();
        let mut gate = ReadingGate::new();
        let id = gate.activate(&mut observer, options());

        gate.handle_change(&change(id, true));
        gate.handle_change(&change(id, false));
        assert!(gate.is_read());
    }

    #[test]
    fn reactivation_rearms_gate() {
        let mut observer = ScriptedObserver::default();
        let mut gate = ReadingGate::new();
        let first = gate.activate(&mut observer, options());
        gate.handle_change(&change(first, true));

        let second = gate.activate(&mut observer, options());
        assert_ne!(first, second);
        assert_eq!(gate.state(), GateState::Unread);
        assert_eq!(observer.disconnects, 2);
    }

    #[test]
    fn stale_change_is_ignored() {
        let mut observer = ScriptedObserver::default();
        let mut gate = ReadingGate::new();
        let stale = gate.activate(&mut observer, options());
        gate.activate(&mut observer, options());

        assert!(!gate.handle_change(&change(stale, true)));
        assert!(!gate.is_read());
    }

    #[test]
    fn deactivated_gate_ignores_changes_but_keeps_state() {
        let mut observer = ScriptedObserver::default();
        let mut gate = ReadingGate::new();
        let id = gate.activate(&mut observer, options());
        gate.handle_change(&change(id, true));

        gate.deactivate(&mut observer);
        assert!(gate.is_read());
        assert!(gate.observation().is_none());
        assert!(!observer.observing);
    }

    fn sample(viewport_height: f32, content_height: f32, offset_y: f32) -> ScrollSample {
        ScrollSample {
            root: VisibilityRoot::ContentPane,
            viewport_height,
            content_height,
            offset_y,
        }
    }

    #[test]
    fn scroll_fraction_is_offset_over_scrollable_range() {
        assert_abs_diff_eq!(scroll_fraction(&sample(400.0, 1000.0, 300.0)), 0.5);
        assert_abs_diff_eq!(scroll_fraction(&sample(400.0, 1000.0, 600.0)), 1.0);
    }

    #[test]
    fn scroll_fraction_is_clamped() {
        assert_abs_diff_eq!(scroll_fraction(&sample(400.0, 1000.0, -20.0)), 0.0);
        assert_abs_diff_eq!(scroll_fraction(&sample(400.0, 1000.0, 900.0)), 1.0);
    }

    #[test]
    fn scroll_fraction_without_overflow_is_complete() {
        assert_abs_diff_eq!(scroll_fraction(&sample(400.0, 400.0, 0.0)), 1.0);
        assert_abs_diff_eq!(scroll_fraction(&sample(400.0, 120.0, 0.0)), 1.0);
    }

    #[test]
    fn progress_records_and_resets() {
        let mut progress = ReadingProgress::default();
        progress.record(&sample(400.0, 1000.0, 150.0));
        assert_abs_diff_eq!(progress.fraction(), 0.25);
        progress.reset();
        assert_abs_diff_eq!(progress.fraction(), 0.0);
    }
}
