// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify the merge and override laws of the settings map over
//! arbitrary inputs.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;
use tagsync_config::domain::SettingsMap;

fn arb_map() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map("[a-z.]{1,12}", "\\PC{0,12}", 0..8)
}

// Merging two maps: keys from the later map always win, keys unique to
// either map survive.
proptest! {
    #[test]
    fn test_merge_later_wins_and_unions(first in arb_map(), second in arb_map()) {
        let mut settings = SettingsMap::new();
        settings.merge(first.clone());
        settings.merge(second.clone());

        for (key, value) in &second {
            prop_assert_eq!(settings.get(key), Some(value.as_str()));
        }
        for (key, value) in &first {
            if !second.contains_key(key) {
                prop_assert_eq!(settings.get(key), Some(value.as_str()));
            }
        }

        let expected: std::collections::HashSet<&String> =
            first.keys().chain(second.keys()).collect();
        prop_assert_eq!(settings.len(), expected.len());
    }
}

// The override pass never changes the key set, whatever the lookup answers.
proptest! {
    #[test]
    fn test_overrides_never_add_keys(base in arb_map(), injected in arb_map()) {
        let mut settings = SettingsMap::new();
        settings.merge(base.clone());

        settings.apply_overrides(|key| injected.get(key).cloned());

        prop_assert_eq!(settings.len(), base.len());
        for key in injected.keys() {
            if !base.contains_key(key) {
                prop_assert!(!settings.contains_key(key));
            }
        }
    }
}

// Overridden keys take the override value, untouched keys keep their own.
proptest! {
    #[test]
    fn test_overrides_replace_exactly_the_answered_keys(base in arb_map(), injected in arb_map()) {
        let mut settings = SettingsMap::new();
        settings.merge(base.clone());

        settings.apply_overrides(|key| injected.get(key).cloned());

        for (key, value) in &base {
            match injected.get(key) {
                Some(new_value) => prop_assert_eq!(settings.get(key), Some(new_value.as_str())),
                None => prop_assert_eq!(settings.get(key), Some(value.as_str())),
            }
        }
    }
}

// The boolean policy is total: any value produces a bool, and only a trimmed
// case-insensitive "true" produces true.
proptest! {
    #[test]
    fn test_flag_policy_total(value in "\\PC{0,16}") {
        let mut settings = SettingsMap::new();
        settings.merge(HashMap::from([("flag".to_string(), value.clone())]));

        let flag = settings.get_flag("flag", true);
        prop_assert_eq!(flag, value.trim().eq_ignore_ascii_case("true"));
    }
}

// The interval policy is total: digits parse as milliseconds, everything
// else falls back to the default.
proptest! {
    #[test]
    fn test_interval_policy_total(value in "\\PC{0,16}") {
        let default = Duration::from_millis(900);
        let mut settings = SettingsMap::new();
        settings.merge(HashMap::from([("interval".to_string(), value.clone())]));

        let interval = settings.get_millis_or("interval", default);
        match value.parse::<u64>() {
            Ok(millis) => prop_assert_eq!(interval, Duration::from_millis(millis)),
            Err(_) => prop_assert_eq!(interval, default),
        }
    }
}

proptest! {
    #[test]
    fn test_interval_parses_any_u64(millis in prop::num::u64::ANY) {
        let mut settings = SettingsMap::new();
        settings.merge(HashMap::from([("interval".to_string(), millis.to_string())]));

        let interval = settings.get_millis_or("interval", Duration::ZERO);
        prop_assert_eq!(interval, Duration::from_millis(millis));
    }
}
