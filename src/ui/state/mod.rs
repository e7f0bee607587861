// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State logic kept apart from the widgets that render it, so it can be
//! driven directly from tests.

pub mod consent;
pub mod copy_feedback;
pub mod layout;
pub mod reading_gate;

pub use consent::{ConsentRecord, ConsentScope};
pub use copy_feedback::{CopyFeedback, CopyKey, COPY_FEEDBACK_DURATION};
pub use layout::LayoutMode;
pub use reading_gate::{GateState, ReadingGate, ReadingProgress};
