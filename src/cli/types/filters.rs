//! Filter types for player listing.

/// Filters applied when listing the draft pool.
///
/// Name filters are substring matches (case-insensitive, `LIKE` in SQL) and
/// are OR-ed together; the MMR bound is inclusive.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub names: Option<Vec<String>>,
    pub max_mmr: Option<i64>,
    pub include_inactive: bool,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(mut self, names: Option<Vec<String>>) -> Self {
        self.names = names;
        self
    }

    pub fn with_max_mmr(mut self, max_mmr: Option<i64>) -> Self {
        self.max_mmr = max_mmr;
        self
    }

    pub fn with_inactive(mut self, include_inactive: bool) -> Self {
        self.include_inactive = include_inactive;
        self
    }
}
