// SPDX-License-Identifier: MPL-2.0
//! Theme and language preferences.
//!
//! Preferences are two string entries in a durable key-value store. Reading
//! never fails: a missing store, a missing key or a value outside the known
//! set all fall back to a computed default (the system color scheme for the
//! theme, English for the language).
//!
//! The on-disk store is `preferences.toml` next to `settings.toml`.

use super::paths;
use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::ui::theming::ThemeMode;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding `light` or `dark`.
pub const THEME_KEY: &str = "policy-portal-theme";

/// Key holding `en`, `fr` or `ar`.
pub const LANGUAGE_KEY: &str = "policy-portal-language";

const PREFERENCES_FILE: &str = "preferences.toml";

/// Toast shown when an existing preferences file cannot be used.
pub const LOAD_WARNING: &str = "Preferences could not be read. Defaults are in use.";

/// Toast shown when a changed preference cannot be written.
pub const SAVE_WARNING: &str = "Your preference could not be saved.";

/// Durable string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// `preferences.toml` backed store.
///
/// The whole file is rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl TomlPreferenceStore {
    /// Opens the store in the resolved config directory.
    ///
    /// Returns `None` for the store when no config directory can be
    /// determined; the optional string is a warning for an unreadable file.
    pub fn open(base_dir: Option<PathBuf>) -> (Option<Self>, Option<String>) {
        let Some(mut path) = paths::get_app_config_dir_with_override(base_dir) else {
            tracing::warn!("no config directory; preferences will not persist");
            return (None, None);
        };
        path.push(PREFERENCES_FILE);

        let (store, warning) = Self::open_at(path);
        (Some(store), warning)
    }

    /// Opens the store at an explicit file path.
    pub fn open_at(path: PathBuf) -> (Self, Option<String>) {
        if !path.exists() {
            return (Self::empty(path), None);
        }

        match read_entries(&path) {
            Ok(entries) => (Self { path, entries }, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable preferences");
                (Self::empty(path), Some(LOAD_WARNING.to_string()))
            }
        }
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.entries).map_err(Error::from)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Reads string entries; non-string values are dropped.
fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    let table: toml::Table =
        toml::from_str(&content).map_err(|e| Error::Preferences(e.to_string()))?;

    Ok(table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect())
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write()
    }
}

/// Volatile store for tests and sessions without a config directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
    /// When set, every write fails.
    pub read_only: bool,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Preferences("store is read-only".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The user's theme and language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub language: Language,
}

impl Preferences {
    /// Reads both preferences, falling back per key.
    ///
    /// `system_dark` is only called when the stored theme is missing or
    /// invalid.
    pub fn load<F>(store: Option<&dyn PreferenceStore>, system_dark: F) -> Self
    where
        F: FnOnce() -> bool,
    {
        let stored_theme = store
            .and_then(|store| store.get(THEME_KEY))
            .and_then(|value| ThemeMode::parse(&value));
        let stored_language = store
            .and_then(|store| store.get(LANGUAGE_KEY))
            .and_then(|value| Language::parse(&value));

        Self {
            theme: stored_theme.unwrap_or_else(|| ThemeMode::from_dark_flag(system_dark())),
            language: stored_language.unwrap_or_default(),
        }
    }

    /// Persists the theme, overwriting the stored value.
    ///
    /// # Errors
    ///
    /// Propagates the store's write error.
    pub fn save_theme(store: &mut dyn PreferenceStore, theme: ThemeMode) -> Result<()> {
        store.set(THEME_KEY, theme.code())
    }

    /// Persists the language, overwriting the stored value.
    ///
    /// # Errors
    ///
    /// Propagates the store's write error.
    pub fn save_language(store: &mut dyn PreferenceStore, language: Language) -> Result<()> {
        store.set(LANGUAGE_KEY, language.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_store_uses_computed_defaults() {
        let prefs = Preferences::load(None, || true);
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn stored_values_are_used() {
        let store = MemoryPreferenceStore::new()
            .with_entry(THEME_KEY, "light")
            .with_entry(LANGUAGE_KEY, "ar");
        let prefs = Preferences::load(Some(&store), || panic!("system theme not needed"));
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.language, Language::Ar);
    }

    #[test]
    fn invalid_values_fall_back_silently() {
        let store = MemoryPreferenceStore::new()
            .with_entry(THEME_KEY, "sepia")
            .with_entry(LANGUAGE_KEY, "de");
        let prefs = Preferences::load(Some(&store), || false);
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.language, Language::En);
    }

    #[test]
    fn theme_fallback_follows_system() {
        let store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "");
        assert_eq!(Preferences::load(Some(&store), || true).theme, ThemeMode::Dark);
        assert_eq!(Preferences::load(Some(&store), || false).theme, ThemeMode::Light);
    }

    #[test]
    fn save_overwrites_previous_value() {
        let mut store = MemoryPreferenceStore::new().with_entry(LANGUAGE_KEY, "fr");
        Preferences::save_language(&mut store, Language::Ar).expect("save should succeed");
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("ar"));
    }

    #[test]
    fn read_only_store_reports_write_failure() {
        let mut store = MemoryPreferenceStore {
            read_only: true,
            ..MemoryPreferenceStore::default()
        };
        assert!(Preferences::save_theme(&mut store, ThemeMode::Dark).is_err());
        assert!(store.get(THEME_KEY).is_none());
    }

    #[test]
    fn toml_store_persists_across_reopen() {
        let dir = tempdir().expect("failed to create temp dir");
        let (store, warning) = TomlPreferenceStore::open(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        let mut store = store.expect("store should open");

        Preferences::save_theme(&mut store, ThemeMode::Dark).expect("save theme");
        Preferences::save_language(&mut store, Language::Fr).expect("save language");

        let (reopened, _) = TomlPreferenceStore::open(Some(dir.path().to_path_buf()));
        let reopened = reopened.expect("store should reopen");
        let prefs = Preferences::load(Some(&reopened), || false);
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert_eq!(prefs.language, Language::Fr);
    }

    #[test]
    fn toml_store_ignores_non_string_values() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "policy-portal-theme = 3\npolicy-portal-language = \"fr\"\n")
            .expect("write preferences");

        let (store, warning) = TomlPreferenceStore::open_at(path);
        assert!(warning.is_none());
        assert!(store.get(THEME_KEY).is_none());
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn corrupt_file_yields_empty_store_and_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "this is = = not toml").expect("write preferences");

        let (store, warning) = TomlPreferenceStore::open_at(path);
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
        assert!(store.get(THEME_KEY).is_none());
    }

    #[test]
    fn writes_create_missing_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("a").join("b").join(PREFERENCES_FILE);
        let (mut store, _) = TomlPreferenceStore::open_at(path.clone());

        store.set(THEME_KEY, "light").expect("write should succeed");
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }
}
