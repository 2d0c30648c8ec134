pub mod id;
pub mod record;

pub use id::*;
pub use record::*;
