// SPDX-License-Identifier: MPL-2.0
//! Window-width driven layout of the policies screen.

/// How the policies screen scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Wide window: tab list beside an independently scrolling policy pane.
    #[default]
    Split,
    /// Narrow window: everything stacks and the whole page scrolls.
    Single,
}

impl LayoutMode {
    /// Picks the mode for a window width. The breakpoint itself is split.
    #[must_use]
    pub fn from_width(width: f32, breakpoint: f32) -> Self {
        if width >= breakpoint {
            LayoutMode::Split
        } else {
            LayoutMode::Single
        }
    }

    #[must_use]
    pub fn is_split(self) -> bool {
        self == LayoutMode::Split
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_for_split() {
        assert_eq!(LayoutMode::from_width(640.0, 640.0), LayoutMode::Split);
        assert_eq!(LayoutMode::from_width(639.9, 640.0), LayoutMode::Single);
        assert_eq!(LayoutMode::from_width(1280.0, 640.0), LayoutMode::Split);
    }
}
