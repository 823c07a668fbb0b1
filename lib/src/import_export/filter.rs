use crate::store::{PreferenceStore, Preferences};

/// A single reason for leaving a key out of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Key contains the pattern anywhere
    Contains(&'static str),
    /// Key starts with the pattern
    Prefix(&'static str),
    /// Key is exactly the pattern
    Exact(&'static str),
}

impl ExclusionRule {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            ExclusionRule::Contains(pattern) => key.contains(pattern),
            ExclusionRule::Prefix(pattern) => key.starts_with(pattern),
            ExclusionRule::Exact(pattern) => key == *pattern,
        }
    }
}

/// Keys written by the OS and system frameworks rather than by Browserino
pub const EXCLUSION_RULES: &[ExclusionRule] = &[
    ExclusionRule::Contains("NS"),
    ExclusionRule::Contains("com.apple."),
    ExclusionRule::Contains("Apple"),
    ExclusionRule::Contains("METAL"),
    ExclusionRule::Contains("KB_"),
    ExclusionRule::Contains("cloud."),
    ExclusionRule::Prefix("_"),
    ExclusionRule::Prefix("AK"),
    ExclusionRule::Exact("shouldShowRSVPDataDetectors"),
    ExclusionRule::Exact("MultipleSessionEnabled"),
    ExclusionRule::Exact("WebAutomaticSpellingCorrectionEnabled"),
    ExclusionRule::Exact("Country"),
];

/// First rule that excludes `key`, if any
pub fn matching_rule(key: &str) -> Option<&'static ExclusionRule> {
    EXCLUSION_RULES.iter().find(|rule| rule.matches(key))
}

/// Whether `key` is a user setting that belongs in an export
pub fn is_exportable(key: &str) -> bool {
    matching_rule(key).is_none()
}

/// Keep only the exportable entries of `preferences`
pub fn filter_preferences(preferences: Preferences) -> Preferences {
    preferences
        .into_iter()
        .filter(|(key, _)| is_exportable(key))
        .collect()
}

/// Read the store and keep the exportable entries
///
/// An unreadable store counts as empty.
pub fn exportable_preferences<S: PreferenceStore>(store: &S) -> Preferences {
    match store.all() {
        Ok(preferences) => filter_preferences(preferences),
        Err(e) => {
            log::warn!("Could not read preference store, exporting nothing: {}", e);
            Preferences::new()
        }
    }
}

/// Keys in the store that an export would leave out, sorted
pub fn excluded_keys<S: PreferenceStore>(store: &S) -> Vec<String> {
    match store.all() {
        Ok(preferences) => preferences
            .into_keys()
            .filter(|key| !is_exportable(key))
            .collect(),
        Err(e) => {
            log::warn!("Could not read preference store: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BrowserinoError, Result};
    use crate::models::PrefValue;
    use crate::store::MemoryStore;
    use rstest::rstest;

    #[rstest]
    #[case("NSWindowFrame Main")]
    #[case("WebKitNSFlag")]
    #[case("com.apple.trackpad.scaling")]
    #[case("AppleLanguages")]
    #[case("UseAppleColors")]
    #[case("METAL_DEBUG")]
    #[case("KB_layout")]
    #[case("icloud.sync")]
    #[case("_private")]
    #[case("AKLastIDMSEnvironment")]
    #[case("shouldShowRSVPDataDetectors")]
    #[case("MultipleSessionEnabled")]
    #[case("WebAutomaticSpellingCorrectionEnabled")]
    #[case("Country")]
    fn test_excluded_keys(#[case] key: &str) {
        assert!(!is_exportable(key), "{} should be excluded", key);
        assert!(matching_rule(key).is_some());
    }

    #[rstest]
    #[case("copy_closeAfterCopy")]
    #[case("copy_alternativeShortcut")]
    #[case("browsers")]
    #[case("theme")]
    #[case("CountryCode")]
    #[case("my_Country")]
    #[case("ns_lowercase")]
    #[case("cloud")]
    #[case("apple")]
    #[case("xAK")]
    #[case("x_private")]
    #[case("")]
    fn test_retained_keys(#[case] key: &str) {
        assert!(is_exportable(key), "{} should be exported", key);
    }

    #[test]
    fn test_rule_kinds() {
        assert!(ExclusionRule::Contains("NS").matches("xNSy"));
        assert!(ExclusionRule::Prefix("AK").matches("AKey"));
        assert!(!ExclusionRule::Prefix("AK").matches("MAKE"));
        assert!(ExclusionRule::Exact("Country").matches("Country"));
        assert!(!ExclusionRule::Exact("Country").matches("Country "));
    }

    #[test]
    fn test_scenario_from_mixed_store() {
        let store = MemoryStore::with_entries([
            ("NSWindowFrame", PrefValue::from("0 0 800 600")),
            ("copy_closeAfterCopy", PrefValue::Bool(true)),
            ("Country", PrefValue::from("US")),
            ("theme", PrefValue::from("dark")),
        ]);

        let exported = exportable_preferences(&store);

        let expected: Preferences = [
            ("copy_closeAfterCopy".to_string(), PrefValue::Bool(true)),
            ("theme".to_string(), PrefValue::from("dark")),
        ]
        .into_iter()
        .collect();
        assert_eq!(exported, expected);
        assert_eq!(
            excluded_keys(&store),
            vec!["Country".to_string(), "NSWindowFrame".to_string()]
        );
    }

    #[test]
    fn test_values_untouched() {
        let nested = PrefValue::Sequence(vec![PrefValue::Float(1.5), PrefValue::Int(2)]);
        let store = MemoryStore::with_entries([("nested", nested.clone())]);
        let exported = exportable_preferences(&store);
        assert_eq!(exported.get("nested"), Some(&nested));
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<PrefValue>> {
            Err(BrowserinoError::Other("unreadable".to_string()))
        }
        fn set(&self, _key: &str, _value: PrefValue) -> Result<()> {
            Err(BrowserinoError::Other("unreadable".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Err(BrowserinoError::Other("unreadable".to_string()))
        }
        fn all(&self) -> Result<Preferences> {
            Err(BrowserinoError::Other("unreadable".to_string()))
        }
    }

    #[test]
    fn test_unreadable_store_is_empty() {
        assert!(exportable_preferences(&BrokenStore).is_empty());
        assert!(excluded_keys(&BrokenStore).is_empty());
    }
}
