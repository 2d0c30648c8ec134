// Engine module - relationship analysis over imported records
// This layer sits between the export importer and CLI presentation

pub mod compare;
pub mod history;
pub mod query;
pub mod stats;

pub use compare::{ComparisonKind, compare};
pub use history::{
    ExportSnapshot, HistoryAnalysis, HistoryPeriod, PeriodChange, SnapshotSummary, analyze_history,
    within_period,
};
pub use query::{DEFAULT_PAGE_SIZE, ListOrder, ListQuery, Page};
pub use stats::{AcquisitionDate, GrowthWindow, RelationshipStats, relationship_stats};
