mod context;

pub mod browse;
pub mod check;
pub mod compare;
pub mod config;
pub mod history;
pub mod relationships;
pub mod stats;

pub use context::HandlerContext;
