// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// The two sequential steps of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Policies,
    Payment,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Policies, Screen::Payment];

    /// Source string naming the step, translated at render time.
    #[must_use]
    pub fn step_label(self) -> &'static str {
        match self {
            Screen::Policies => "Step 1 · Review Policies",
            Screen::Payment => "Step 2 · Payment",
        }
    }

    /// Fill level of the header progress bar.
    #[must_use]
    pub fn step_progress(self) -> f32 {
        match self {
            Screen::Policies => 0.5,
            Screen::Payment => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn progress_doubles_on_payment() {
        assert_abs_diff_eq!(Screen::Policies.step_progress(), 0.5);
        assert_abs_diff_eq!(Screen::Payment.step_progress(), 1.0);
    }

    #[test]
    fn policies_is_the_first_step() {
        assert_eq!(Screen::default(), Screen::Policies);
        assert_eq!(Screen::ALL[0], Screen::Policies);
    }
}
