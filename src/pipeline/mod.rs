//! Pipeline entry points for tracker operations.
//!
//! - `load_list_file`: Read and normalize an affair list
//! - `compare_lists`: Intersect the primary list with a comparison list
//! - `run_check`: Fetch, classify and aggregate every affair
//! - `run_tracker`: The whole run, as driven by the CLI

pub mod check;
pub mod compare;
pub mod load;
pub mod report;
pub mod track;

pub use check::run_check;
pub use compare::compare_lists;
pub use load::{LoadOutcome, load_lines, load_list_file};
pub use report::{Placement, ReportAggregator};
pub use track::{TrackOutcome, run_tracker};
