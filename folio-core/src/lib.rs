//! folio-core: content model and page-view state for the folio site
//!
//! Pages and record lists are static data. The only per-view state is the
//! [`Navigator`] that backs accordion pages, and the [`LoadingGate`] shown
//! at mount.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod links;
pub mod loading;
pub mod navigator;
pub mod outline;
pub mod page;
pub mod records;

pub use catalogue::Site;
pub use config::FolioConfig;
pub use error::{FolioError, Result};
pub use links::Link;
pub use loading::LoadingGate;
pub use navigator::{
    Navigator, NavigatorState, NoScroll, PendingScroll, ScrollHost, ScrollRequest, SectionState,
};
pub use outline::{LineKind, Outline, OutlineLine};
pub use page::{Feature, Page, PageKind, Section};
