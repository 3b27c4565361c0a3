use std::collections::BTreeMap;

/// Names the generic rule gets wrong on the source site, keyed by the
/// lowercased display name
pub const BUILTIN_SLUG_OVERRIDES: &[(&str, &str)] = &[
    // single-word stylized name
    ("her", "her"),
    // leading digit
    ("6lack", "6lack"),
    // connective symbol
    ("dan + shay", "danshay"),
];

/// Derives the generic site slug for an artist name
///
/// # Normalization Steps
///
/// 1. Lowercase the name
/// 2. Drop every character that is not alphanumeric (spaces included)
///
/// # Examples
///
/// ```
/// use lyric_harvest::naming::generic_slug;
///
/// assert_eq!(generic_slug("Kendrick Lamar"), "kendricklamar");
/// assert_eq!(generic_slug("A$AP Rocky"), "aaprocky");
/// ```
pub fn generic_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Derives the site slug for an artist, consulting overrides first
///
/// Lookup order is the caller-supplied overrides, then
/// [`BUILTIN_SLUG_OVERRIDES`], then [`generic_slug`]. Override keys match
/// the name ignoring case and surrounding whitespace.
pub fn artist_slug(name: &str, overrides: &BTreeMap<String, String>) -> String {
    let key = name.trim().to_lowercase();

    if let Some(slug) = overrides
        .iter()
        .find(|(n, _)| n.trim().to_lowercase() == key)
        .map(|(_, slug)| slug)
    {
        return slug.clone();
    }

    BUILTIN_SLUG_OVERRIDES
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, slug)| slug.to_string())
        .unwrap_or_else(|| generic_slug(&key))
}
