//! Lexical forms a translation key may take in source code.

/// Variants searched for `key`, in order.
///
/// The last one is the final path segment alone (or the whole key when it has no separator).
#[must_use]
pub fn key_variants(key: &str, separator: &str) -> Vec<String> {
    let last_segment = key.rsplit(separator).next().unwrap_or(key);

    vec![
        format!("\"{key}\""),
        format!("'{key}'"),
        format!("`{key}`"),
        format!("t('{key}')"),
        format!("t(\"{key}\")"),
        format!("t(`{key}`)"),
        format!("i18n.t('{key}')"),
        format!("i18n.t(\"{key}\")"),
        last_segment.to_string(),
    ]
}

/// Returns true if `content` contains any variant and also the key itself.
///
/// The second check is only a weak guard against the bare last-segment variant:
/// a file mentioning both `name` and `profile.name` anywhere still matches.
#[must_use]
pub fn references_key(content: &str, key: &str, variants: &[String], separator: &str) -> bool {
    if !variants.iter().any(|variant| content.contains(variant.as_str())) {
        return false;
    }

    let escaped = key.replace(separator, &format!("\\{separator}"));
    content.contains(key) || content.contains(&escaped)
}
