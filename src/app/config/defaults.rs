// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Reading gate**: Sentinel visibility threshold and narrow-layout margin
//! - **Layout**: Width breakpoint between split and single layouts
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Reading Gate Defaults
// ==========================================================================

/// Fraction of the end-of-policy sentinel that must be visible.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.05;

/// Smallest accepted threshold. Zero would fire before anything is visible.
pub const MIN_VISIBILITY_THRESHOLD: f32 = 0.01;

pub const MAX_VISIBILITY_THRESHOLD: f32 = 1.0;

/// How far above the window's bottom edge (px) the sentinel must rise in the
/// single-column layout.
pub const DEFAULT_NARROW_BOTTOM_MARGIN: f32 = 80.0;

pub const MIN_NARROW_BOTTOM_MARGIN: f32 = 0.0;

pub const MAX_NARROW_BOTTOM_MARGIN: f32 = 400.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width (px) at and above which the policy pane scrolls on its own.
pub const DEFAULT_SPLIT_BREAKPOINT: f32 = 640.0;

pub const MIN_SPLIT_BREAKPOINT: f32 = 320.0;

pub const MAX_SPLIT_BREAKPOINT: f32 = 1920.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_VISIBILITY_THRESHOLD > 0.0);
    assert!(DEFAULT_VISIBILITY_THRESHOLD >= MIN_VISIBILITY_THRESHOLD);
    assert!(DEFAULT_VISIBILITY_THRESHOLD <= MAX_VISIBILITY_THRESHOLD);
    assert!(MAX_VISIBILITY_THRESHOLD <= 1.0);

    assert!(DEFAULT_NARROW_BOTTOM_MARGIN >= MIN_NARROW_BOTTOM_MARGIN);
    assert!(DEFAULT_NARROW_BOTTOM_MARGIN <= MAX_NARROW_BOTTOM_MARGIN);

    assert!(DEFAULT_SPLIT_BREAKPOINT >= MIN_SPLIT_BREAKPOINT);
    assert!(DEFAULT_SPLIT_BREAKPOINT <= MAX_SPLIT_BREAKPOINT);

    // The window must be able to shrink into the single layout.
    assert!(MIN_WINDOW_WIDTH < DEFAULT_SPLIT_BREAKPOINT);
    assert!(WINDOW_DEFAULT_WIDTH >= DEFAULT_SPLIT_BREAKPOINT);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
