//! Command implementations for the folio CLI

pub mod browse;
pub mod pages;
pub mod serve;

pub use browse::run_browse;
pub use pages::{run_pages, run_show};
pub use serve::run_serve;
