// Error types
pub mod error;

// TikTok account data export
pub mod tiktok;

// Export file discovery
pub mod discovery;

pub use discovery::discover_exports;
pub use error::{Error, Result};
pub use tiktok::{
    EntryError, ImportReport, ImportedRelationships, SectionReport, export_date, import_file,
    import_str,
};
