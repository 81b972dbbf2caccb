mod card;
pub use card::{classify_delta, GpuCard, PricePolarity, Trend};

mod chart;
pub use chart::PriceChart;

mod detail;
pub use detail::{GpuDetails, HistoryState};

mod engine;
pub use engine::{paginate, PageView, ParseSortKeyError, SortKey, PAGE_SIZE};

mod search;
pub use search::GpuSearch;

use crate::core::api::ApiError;
use crate::core::model::GpuRecord;

/// Outcome of the one-time record-list fetch at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Ready(Vec<GpuRecord>),
    Failed(String),
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::Loading
    }
}

impl CatalogState {
    /// A failed list fetch resolves the loading state into a visible error
    /// panel rather than an indistinguishable empty catalog.
    pub fn from_fetch(result: Result<Vec<GpuRecord>, ApiError>) -> Self {
        match result {
            Ok(records) => Self::Ready(records),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_outcomes_map_onto_catalog_states() {
        assert_eq!(
            CatalogState::from_fetch(Ok(Vec::new())),
            CatalogState::Ready(Vec::new())
        );
        assert!(matches!(
            CatalogState::from_fetch(Err(ApiError::Unsupported)),
            CatalogState::Failed(_)
        ));
    }
}
