// crates/geoexport-core/src/traits.rs
use crate::model::{City, Country, Region};
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use geoexport_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Mérida").is_named("merida"));
/// assert!(Place("Nuremberg").name_contains("NUREM"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    ///
    /// An empty query never matches.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        let q = fold_key(q);
        !q.is_empty() && fold_key(self.name_str()).contains(&q)
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl NameMatch for Region {
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        self.name()
    }
}
