use serde_json::Value;

use super::Catalog;

/// Remove one flat key from a catalog.
///
/// Descends every segment but the last; returns `false` without touching the
/// catalog when an intermediate segment is missing or not an object, or when
/// the last segment is absent. The removed entry may itself be an object.
/// Remaining entries keep their order.
pub fn remove_key(catalog: &mut Catalog, key: &str, separator: &str) -> bool {
    let mut parts: Vec<&str> = key.split(separator).collect();
    let Some(leaf) = parts.pop() else {
        return false;
    };

    let mut current = catalog;
    for part in parts {
        match current.get_mut(part) {
            Some(Value::Object(child)) => current = child,
            _ => return false,
        }
    }

    current.shift_remove(leaf).is_some()
}

/// Rebuild a catalog without nested objects that are empty once their own
/// children are cleaned.
///
/// Leaves are always kept, including `""`, `0`, `false`, `null` and `[]`.
/// The root itself is returned even when it ends up empty.
#[must_use]
pub fn clean_empty_objects(catalog: &Catalog) -> Catalog {
    catalog
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Object(child) => {
                let cleaned = clean_empty_objects(child);
                (!cleaned.is_empty()).then(|| (key.clone(), Value::Object(cleaned)))
            }
            leaf => Some((key.clone(), leaf.clone())),
        })
        .collect()
}
