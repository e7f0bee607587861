// SPDX-License-Identifier: MPL-2.0
//! Visibility observation port.
//!
//! A [`VisibilityObserver`] watches one sentinel marker at the end of a
//! scrollable region and reports when the marker's visible fraction crosses a
//! threshold. The reading gate consumes these reports; it never looks at
//! scroll offsets itself.
//!
//! # Design Notes
//!
//! - Observations are identified by [`ObservationId`]; a change carrying an old
//!   id belongs to a detached observation and must be ignored
//! - Geometry arrives as [`ScrollSample`]s pushed by the UI layer
//! - Implementations report once for the first sample after `observe()` and
//!   afterwards only when the threshold is crossed

/// Identifies one `observe()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(u64);

impl ObservationId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// The id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// The region whose bounds the sentinel is intersected with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityRoot {
    /// The whole window scrolls; the root is the page viewport.
    Viewport,
    /// Only the policy pane scrolls; the root is that pane.
    ContentPane,
}

/// Signed offsets applied to the root bounds before intersecting.
///
/// Negative values shrink the root, so a bottom margin of `-80.0` means the
/// sentinel has to rise 80 px above the bottom edge before it counts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f32,
    pub bottom: f32,
}

impl RootMargin {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    #[must_use]
    pub fn bottom(bottom: f32) -> Self {
        Self { top: 0.0, bottom }
    }
}

/// Placement of the sentinel inside the scrolled content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentinelGeometry {
    /// Height of the marker itself.
    pub height: f32,
    /// Distance from the marker's bottom edge to the end of the content.
    pub trailing: f32,
}

/// What to observe and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    pub root: VisibilityRoot,
    /// Minimum visible fraction of the sentinel, in `(0, 1]`.
    pub threshold: f32,
    pub margin: RootMargin,
    pub sentinel: SentinelGeometry,
}

/// Scroll geometry of one root, as reported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub root: VisibilityRoot,
    pub viewport_height: f32,
    pub content_height: f32,
    pub offset_y: f32,
}

impl ScrollSample {
    /// Whether there is anything to scroll.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.content_height > self.viewport_height
    }
}

/// Report emitted when the sentinel's visibility changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityChange {
    pub observation: ObservationId,
    pub ratio: f32,
    pub is_intersecting: bool,
}

/// Port for geometry-based visibility observation.
///
/// One observer tracks at most one sentinel. Calling `observe()` replaces any
/// previous observation, so callers reset their own state *before* observing.
///
/// # Example
///
/// ```ignore
/// use policy_portal::application::port::visibility::*;
///
/// fn watch(observer: &mut impl VisibilityObserver, options: ObserveOptions, sample: ScrollSample) {
///     let id = observer.observe(options);
///     if let Some(change) = observer.process(&sample) {
///         assert_eq!(change.observation, id);
///     }
/// }
/// ```
pub trait VisibilityObserver {
    /// Starts a new observation, detaching the previous one.
    fn observe(&mut self, options: ObserveOptions) -> ObservationId;

    /// Stops observing. Samples processed afterwards produce nothing.
    fn disconnect(&mut self);

    /// Feeds one geometry sample and returns a change if one is due.
    fn process(&mut self, sample: &ScrollSample) -> Option<VisibilityChange>;
}
