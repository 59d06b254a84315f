//! Static translation store: `language code -> (key -> localized string)`.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::session::Language;

static TRANSLATIONS_JSON: &str = include_str!("../assets/translations.json");

lazy_static! {
    static ref TRANSLATIONS: HashMap<String, HashMap<String, String>> =
        serde_json::from_str(TRANSLATIONS_JSON)
            .expect("embedded translation table is valid JSON");
}

/// Looks up `key` under the given language.
///
/// A missing key falls back to the key itself; a gap in the translation
/// table must never take a render down.
pub fn t(lang: Language, key: &str) -> String {
    TRANSLATIONS
        .get(lang.code())
        .and_then(|table| table.get(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}
