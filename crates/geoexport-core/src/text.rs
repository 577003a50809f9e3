// crates/geoexport-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Querétaro` -> `Queretaro`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use geoexport_core::text::fold_key;
///
/// assert_eq!(fold_key("Nuevo León"), "nuevo leon");
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// ```rust
/// use geoexport_core::text::equals_folded;
///
/// assert!(equals_folded("Yucatán", "yucatan"));
/// assert!(!equals_folded("Tokyo", "Osaka"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
