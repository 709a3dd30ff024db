pub mod config;
mod orchestrator;
mod report;

pub use orchestrator::{analyze, run_analysis, Analysis};
pub use report::{write_report, StatsReport};
