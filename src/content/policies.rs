// SPDX-License-Identifier: MPL-2.0
//! Policy documents shown on the first screen.
//!
//! The documents are static, language-independent English text. Translation
//! happens at render time through [`Localizer::tr`], so every string here is
//! also a dictionary key.

use crate::i18n::Localizer;

/// Body of a policy section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody {
    /// A single paragraph.
    Paragraph(&'static str),
    /// Ordered lines; an empty line is a vertical gap, not content.
    Lines(&'static [&'static str]),
}

/// One rendered line of a [`SectionBody`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLine<'a> {
    Text(&'a str),
    Gap,
}

impl SectionBody {
    /// Lines in display order, with empty strings turned into gaps.
    pub fn lines(&self) -> impl Iterator<Item = BodyLine<'static>> + '_ {
        let lines: &[&'static str] = match self {
            SectionBody::Paragraph(text) => std::slice::from_ref(text),
            SectionBody::Lines(lines) => lines,
        };
        lines.iter().map(|&line| {
            if line.is_empty() {
                BodyLine::Gap
            } else {
                BodyLine::Text(line)
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySection {
    pub heading: &'static str,
    pub content: SectionBody,
}

impl PolicySection {
    /// Heading and lines translated for the active language.
    #[must_use]
    pub fn localized<'a>(&self, localizer: Localizer<'a>) -> LocalizedSection<'a> {
        LocalizedSection {
            heading: localizer.tr(self.heading),
            lines: self
                .content
                .lines()
                .map(|line| match line {
                    BodyLine::Text(text) => BodyLine::Text(localizer.tr(text)),
                    BodyLine::Gap => BodyLine::Gap,
                })
                .collect(),
        }
    }
}

/// A section ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedSection<'a> {
    pub heading: &'a str,
    pub lines: Vec<BodyLine<'a>>,
}

/// A selectable policy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyTab {
    /// Stable identifier, unique across tabs.
    pub id: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub sections: &'static [PolicySection],
}

/// Returns the tab with the given id.
#[must_use]
pub fn find_tab(id: &str) -> Option<&'static PolicyTab> {
    POLICY_TABS.iter().find(|tab| tab.id == id)
}

/// The tab selected when the policies screen first opens.
#[must_use]
pub fn first_tab() -> &'static PolicyTab {
    &POLICY_TABS[0]
}

pub static POLICY_TABS: &[PolicyTab] = &[
    PolicyTab {
        id: "agency-accounts",
        label: "Agency Accounts",
        title: "Agency Accounts Policy",
        sections: &[
            PolicySection {
                heading: "SERVICE DESCRIPTION",
                content: SectionBody::Paragraph(
                    "We do not deliver login credentials. Client provides their own account access. We activate their ad account, open spending, increase limits, assign access, or provide agency-level support.",
                ),
            },
            PolicySection {
                heading: "SERVICE COMPLETION",
                content: SectionBody::Paragraph(
                    "The service is considered delivered once access is successfully assigned or account is activated.",
                ),
            },
            PolicySection {
                heading: "POLICY VIOLATION CASES",
                content: SectionBody::Lines(&[
                    "If the client runs ads that violate platform rules and account gets restricted:",
                    "",
                    "For Facebook & Google:",
                    "– We either replace the access",
                    "– or Refund the remaining balance minus a 6% processing fee.",
                    "",
                    "For TikTok Agency:",
                    "– We provide Adversolutions chrome extension",
                    "– Client is fully responsible for their balance",
                    "– No balance transfer or refund applies",
                ]),
            },
            PolicySection {
                heading: "WARRANTY",
                content: SectionBody::Paragraph(
                    "Warranty remains valid as long as client uses account properly and without policy violations.",
                ),
            },
        ],
    },
    PolicyTab {
        id: "verified-accounts",
        label: "Verified Accounts",
        title: "Verified Accounts Policy",
        sections: &[
            PolicySection {
                heading: "WHAT IS DELIVERED",
                content: SectionBody::Lines(&[
                    "A zip folder containing:",
                    "",
                    "• login.txt (email – password – 2FA – recovery email)",
                    "• cookies.txt",
                    "",
                    "Account is transferred inside client's AdsPower workspace.",
                ]),
            },
            PolicySection {
                heading: "SERVICE COMPLETION",
                content: SectionBody::Paragraph(
                    "Service is considered completed after first successful login.",
                ),
            },
            PolicySection {
                heading: "WARRANTY RULES",
                content: SectionBody::Lines(&[
                    "• If login does not work on first attempt → replace immediately.",
                    "",
                    "• If account gets banned due to policy violation, fake documents, wrong business info, illegal ads, or changes made by client → warranty becomes void.",
                    "",
                    "• If account gets randomly suspended and not due to client misuse → replacement is provided.",
                ]),
            },
            PolicySection {
                heading: "VERIFICATION HANDLING",
                content: SectionBody::Paragraph(
                    "If platform requests verification: We handle the verification as long as the client does not attempt any verification themselves or use external service.",
                ),
            },
        ],
    },
    PolicyTab {
        id: "verification-service",
        label: "Verification Service",
        title: "Verification Service Policy",
        sections: &[
            PolicySection {
                heading: "WHAT WE DO",
                content: SectionBody::Lines(&[
                    "We perform verification on behalf of client, including:",
                    "",
                    "• KYC verification",
                    "• ID document submission",
                    "• Video selfie",
                    "• Business verification",
                    "• Document uploading",
                    "",
                    "Success rate varies between 70% and 90% depending on platform.",
                ]),
            },
            PolicySection {
                heading: "REFUND GUARANTEE",
                content: SectionBody::Paragraph(
                    "If verification fails using valid documents → client receives 100% refund.",
                ),
            },
            PolicySection {
                heading: "NO REFUND IF",
                content: SectionBody::Lines(&[
                    "• Client submits fake documents",
                    "• Uses invalid identity",
                    "• Sends modified papers",
                    "• Submits documents externally",
                ]),
            },
            PolicySection {
                heading: "REVIEW TIME",
                content: SectionBody::Paragraph(
                    "Verification can take 24h–7 days depending on platform decision.",
                ),
            },
        ],
    },
    PolicyTab {
        id: "other-services",
        label: "Other Services",
        title: "Other Services Policy",
        sections: &[
            PolicySection {
                heading: "SERVICES INCLUDED",
                content: SectionBody::Lines(&[
                    "This includes:",
                    "",
                    "• Facebook scripts/tools",
                    "• Cloaking service",
                    "• Verified bank accounts",
                    "• Payment gateways",
                    "• WhatsApp API",
                    "• Temporary accounts",
                    "• Miscellaneous services",
                ]),
            },
            PolicySection {
                heading: "SERVICE COMPLETION",
                content: SectionBody::Paragraph(
                    "Once access, files, credentials, or activation is delivered, service is completed.",
                ),
            },
            PolicySection {
                heading: "NO REFUND",
                content: SectionBody::Paragraph("After delivery, refunds are not applicable."),
            },
            PolicySection {
                heading: "REPLACEMENT ONLY IF",
                content: SectionBody::Lines(&[
                    "• Access provided is wrong",
                    "• File is corrupted",
                    "• Service was not delivered properly",
                ]),
            },
            PolicySection {
                heading: "CLIENT RESPONSIBILITY",
                content: SectionBody::Paragraph(
                    "Any ban, closure, policy restriction, or compliance failure caused by user usage is not covered by us.",
                ),
            },
        ],
    },
];
