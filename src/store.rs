//! Canonical translations shipped with the plugin.

use crate::tree;
use serde_yml::Mapping;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Locale files compiled into the binary.
const SHIPPED: &[(&str, &str)] = &[
    ("de", include_str!("../locales/de.yml")),
    ("en", include_str!("../locales/en.yml")),
    ("es", include_str!("../locales/es.yml")),
    ("hr", include_str!("../locales/hr.yml")),
    ("pt", include_str!("../locales/pt.yml")),
];

static STORE: OnceLock<HashMap<&'static str, Mapping>> = OnceLock::new();

fn shipped() -> &'static HashMap<&'static str, Mapping> {
    STORE.get_or_init(|| {
        SHIPPED
            .iter()
            .map(|(locale, raw)| {
                let translations = tree::parse_document(raw, locale)
                    .ok()
                    .flatten()
                    .unwrap_or_else(|| panic!("Failed to parse shipped locale file {locale}.yml"));
                (*locale, translations)
            })
            .collect()
    })
}

/// Canonical translation tree for `locale`, or `None` when the plugin
/// ships no translations for it. Absence is distinct from an empty tree.
pub fn lookup(locale: &str) -> Option<Mapping> {
    let found = shipped().get(locale).cloned();
    tracing::trace!(locale, found = found.is_some(), "Canonical translations lookup");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yml::Value;

    #[test]
    fn test_lookup_known_locale() {
        let translations = lookup("en").unwrap();
        assert_eq!(
            translations.get("logout_button"),
            Some(&Value::from("Logout"))
        );
        assert_eq!(translations.get("login_label"), Some(&Value::from("Login")));
    }

    #[test]
    fn test_lookup_unknown_locale() {
        assert!(lookup("xy").is_none());
    }

    #[test]
    fn test_shipped_locales_are_complete() {
        let en = lookup("en").unwrap();
        let en_keys: Vec<Value> = en.keys().cloned().collect();
        for (locale, _) in SHIPPED {
            let translations = lookup(locale).unwrap();
            assert!(
                !translations.is_empty(),
                "locale {locale} should ship translations"
            );
            for key in &en_keys {
                assert!(
                    translations.contains_key(key),
                    "locale {locale} is missing {key:?}"
                );
            }
        }
    }
}
