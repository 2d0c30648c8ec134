pub mod io;
pub mod mapper;
pub(crate) mod schema;

pub use self::io::{export_date, import_file, import_str};
pub use self::mapper::{EntryError, ImportReport, ImportedRelationships, SectionReport};
