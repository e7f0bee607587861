// SPDX-License-Identifier: MPL-2.0
pub mod scroll_probe;

pub use scroll_probe::scroll_probe;
