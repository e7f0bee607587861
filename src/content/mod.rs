// SPDX-License-Identifier: MPL-2.0
//! Static content: policy documents, payment-method data, logos.

pub mod assets;
pub mod payment;
pub mod policies;

pub use assets::LogoAsset;
pub use payment::{PaymentMethod, PaymentMethodContent, PaymentMethodDetail};
pub use policies::{PolicySection, PolicyTab, SectionBody, POLICY_TABS};
