// SPDX-License-Identifier: MPL-2.0
//! Geometry-backed visibility observer.
//!
//! Iced has no intersection observer, but a scrollable reports its viewport on
//! every scroll and layout change. [`GeometryObserver`] turns those samples
//! into sentinel intersection ratios and only reports threshold crossings.

use crate::application::port::{
    ObservationId, ObserveOptions, ScrollSample, VisibilityChange, VisibilityObserver,
};

/// Visible fraction of the sentinel inside the (margin-adjusted) root.
///
/// Content that does not overflow its root is entirely on screen, so the
/// ratio is `1.0` whatever the margin says.
#[must_use]
pub fn intersection_ratio(options: &ObserveOptions, sample: &ScrollSample) -> f32 {
    if !sample.overflows() {
        return 1.0;
    }

    let max_offset = sample.content_height - sample.viewport_height;
    let offset = sample.offset_y.clamp(0.0, max_offset);

    let sentinel_bottom = sample.content_height - options.sentinel.trailing.max(0.0);
    let sentinel_top = sentinel_bottom - options.sentinel.height.max(0.0);

    let root_top = offset - options.margin.top;
    let root_bottom = offset + sample.viewport_height + options.margin.bottom;

    if options.sentinel.height <= 0.0 {
        let inside = sentinel_top >= root_top && sentinel_top <= root_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let visible = sentinel_bottom.min(root_bottom) - sentinel_top.max(root_top);
    (visible / options.sentinel.height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy)]
struct Observation {
    id: ObservationId,
    options: ObserveOptions,
    last_intersecting: Option<bool>,
}

/// Production [`VisibilityObserver`] fed with Iced scroll samples.
#[derive(Debug, Clone)]
pub struct GeometryObserver {
    next_id: ObservationId,
    current: Option<Observation>,
}

impl Default for GeometryObserver {
    fn default() -> Self {
        Self {
            next_id: ObservationId::new(1),
            current: None,
        }
    }
}

impl GeometryObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options of the live observation, if any.
    #[must_use]
    pub fn options(&self) -> Option<&ObserveOptions> {
        self.current.as_ref().map(|observation| &observation.options)
    }
}

impl VisibilityObserver for GeometryObserver {
    fn observe(&mut self, options: ObserveOptions) -> ObservationId {
        let id = self.next_id;
        self.next_id = id.next();
        self.current = Some(Observation {
            id,
            options,
            last_intersecting: None,
        });
        tracing::debug!(observation = id.value(), root = ?options.root, "observing sentinel");
        id
    }

    fn disconnect(&mut self) {
        if let Some(observation) = self.current.take() {
            tracing::debug!(observation = observation.id.value(), "sentinel observer detached");
        }
    }

    fn process(&mut self, sample: &ScrollSample) -> Option<VisibilityChange> {
        let observation = self.current.as_mut()?;
        if sample.root != observation.options.root {
            return None;
        }

        let ratio = intersection_ratio(&observation.options, sample);
        let is_intersecting = ratio >= observation.options.threshold;

        if observation.last_intersecting == Some(is_intersecting) {
            return None;
        }
        observation.last_intersecting = Some(is_intersecting);

        Some(VisibilityChange {
            observation: observation.id,
            ratio,
            is_intersecting,
        })
    }
}
