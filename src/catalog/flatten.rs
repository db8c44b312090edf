use std::collections::{
    BTreeSet,
    HashMap,
};

use serde_json::Value;

use super::Catalog;

/// Flattened catalog: joined key path → leaf value.
pub type FlatCatalog = HashMap<String, Value>;

/// Flatten a nested catalog into a separator-joined key map.
///
/// Arrays are leaves, unlike object members. Empty objects contribute no keys.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_catalog_tools::catalog::flatten_catalog;
///
/// let catalog = json!({
///     "common": {
///         "hello": "Hello",
///         "goodbye": "Goodbye"
///     }
/// });
///
/// let flattened = flatten_catalog(catalog.as_object().unwrap(), ".");
/// assert_eq!(flattened.get("common.hello"), Some(&json!("Hello")));
/// assert_eq!(flattened.get("common.goodbye"), Some(&json!("Goodbye")));
/// ```
#[must_use]
pub fn flatten_catalog(catalog: &Catalog, separator: &str) -> FlatCatalog {
    let mut result = HashMap::new();
    flatten_object(catalog, separator, None, &mut result);
    result
}

/// `object` の葉を `prefix` 付きのキーで `result` に追加する
///
/// `Value` owns its children, so the recursion ends at the catalog depth.
fn flatten_object(
    object: &Catalog,
    separator: &str,
    prefix: Option<&str>,
    result: &mut FlatCatalog,
) {
    for (key, value) in object {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
        match value {
            Value::Object(child) => flatten_object(child, separator, Some(&full_key), result),
            leaf => {
                result.insert(full_key, leaf.clone());
            }
        }
    }
}

/// All flat keys of a catalog, sorted.
#[must_use]
pub fn key_set(catalog: &Catalog, separator: &str) -> BTreeSet<String> {
    flatten_catalog(catalog, separator).into_keys().collect()
}

/// Rebuild a nested catalog from flat keys.
///
/// Inverse of [`flatten_catalog`] as long as no original key contains the separator.
/// A key whose prefix is already a leaf cannot be nested and is skipped.
#[must_use]
pub fn unflatten(flat: &FlatCatalog, separator: &str) -> Catalog {
    let mut root = Catalog::new();

    'entries: for (key, value) in flat {
        let mut parts: Vec<&str> = key.split(separator).collect();
        let Some(leaf) = parts.pop() else {
            continue;
        };

        let mut current = &mut root;
        for part in parts {
            let entry = current.entry(part).or_insert_with(|| Value::Object(Catalog::new()));
            let Value::Object(child) = entry else {
                tracing::warn!(key = %key, "Key prefix '{}' is a leaf; skipping", part);
                continue 'entries;
            };
            current = child;
        }

        current.insert(leaf.to_string(), value.clone());
    }

    root
}
