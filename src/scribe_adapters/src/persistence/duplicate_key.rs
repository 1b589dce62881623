use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

static DUP_KEY_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"dup key: \{([^}]*)\}").expect("valid dup key pattern"));

/// Best-effort extraction of `field: value` pairs from a duplicate-key
/// diagnostic such as
/// `E11000 duplicate key error collection: db.users index: email_1 dup key: { email: "a@x.com" }`.
///
/// Anything that does not look like that yields an empty map.
pub fn parse_duplicate_key_fields(message: &str) -> BTreeMap<String, String> {
    let Some(section) = DUP_KEY_SECTION
        .captures(message)
        .and_then(|captures| captures.get(1))
    else {
        return BTreeMap::new();
    };

    section
        .as_str()
        .split(',')
        .filter_map(|pair| pair.split_once(':'))
        .map(|(field, value)| {
            (
                field.trim().trim_matches('"').to_owned(),
                value.trim().trim_matches('"').to_owned(),
            )
        })
        .filter(|(field, value)| !field.is_empty() && !value.is_empty())
        .collect()
}
