//! UI Components for the Chartscope application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with backend status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - PDF/image upload with drag & drop
//! - [`ProgressView`] - Processing progress and stage checklist
//! - [`ResultsSummary`] - Document summary and "new upload" action
//! - [`ResultsGrid`] - Filterable grid of extracted elements
//! - [`DetailPanel`] - Analysis of the selected element

mod header;
mod hero;
mod upload;
mod progress;
mod results;
mod detail;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use results::*;
pub use detail::*;
pub use footer::*;
