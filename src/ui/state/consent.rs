// SPDX-License-Identifier: MPL-2.0
//! Which policy tabs must be read before the user may agree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How much reading the agreement button requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsentScope {
    /// Only the tab currently on screen.
    #[default]
    SelectedTab,
    /// Every tab, each read to the end at least once this session.
    AllTabs,
}

/// Session record of tabs whose gate has opened at least once.
///
/// Unlike a [`ReadingGate`](super::reading_gate::ReadingGate), entries here
/// are never cleared by switching tabs.
#[derive(Debug, Clone, Default)]
pub struct ConsentRecord {
    scope: ConsentScope,
    completed: BTreeSet<&'static str>,
}

impl ConsentRecord {
    #[must_use]
    pub fn new(scope: ConsentScope) -> Self {
        Self {
            scope,
            completed: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> ConsentScope {
        self.scope
    }

    pub fn mark_read(&mut self, tab_id: &'static str) {
        if self.completed.insert(tab_id) {
            tracing::debug!(tab = tab_id, "policy tab completed");
        }
    }

    #[must_use]
    pub fn has_read(&self, tab_id: &str) -> bool {
        self.completed.contains(tab_id)
    }

    /// Whether the agreement action is enabled.
    ///
    /// `selected_is_read` is the live gate state of the tab on screen.
    #[must_use]
    pub fn allows<'a>(
        &self,
        selected_is_read: bool,
        all_tab_ids: impl IntoIterator<Item = &'a str>,
    ) -> bool {
        match self.scope {
            ConsentScope::SelectedTab => selected_is_read,
            ConsentScope::AllTabs => {
                selected_is_read && all_tab_ids.into_iter().all(|id| self.has_read(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABS: [&str; 3] = ["a", "b", "c"];

    #[test]
    fn selected_tab_scope_follows_live_gate() {
        let record = ConsentRecord::new(ConsentScope::SelectedTab);
        assert!(record.allows(true, TABS));
        assert!(!record.allows(false, TABS));
    }

    #[test]
    fn all_tabs_scope_requires_every_tab() {
        let mut record = ConsentRecord::new(ConsentScope::AllTabs);
        record.mark_read("a");
        record.mark_read("b");
        assert!(!record.allows(true, TABS));

        record.mark_read("c");
        assert!(record.allows(true, TABS));
    }

    #[test]
    fn all_tabs_scope_still_needs_current_gate_open() {
        let mut record = ConsentRecord::new(ConsentScope::AllTabs);
        for id in TABS {
            record.mark_read(id);
        }
        assert!(!record.allows(false, TABS));
    }

    #[test]
    fn default_scope_is_selected_tab() {
        assert_eq!(ConsentRecord::default().scope(), ConsentScope::SelectedTab);
    }

    #[test]
    fn scope_serializes_kebab_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            scope: ConsentScope,
        }
        let parsed: Wrapper = toml::from_str("scope = \"all-tabs\"").expect("parse scope");
        assert_eq!(parsed.scope, ConsentScope::AllTabs);
    }
}
