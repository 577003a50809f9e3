use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a dataset.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats). The export summary
/// printed by the CLI is built from these counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportStats {
    pub countries: usize,
    pub regions: usize,
    pub cities: usize,
}
