pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod handoff;
pub mod report;
pub mod session;
pub mod types;

pub use catalog::{Catalog, Dimension, Disaster, Variant};
pub use error::{QuizError, Result};
pub use session::QuizSession;
pub use types::answer::Answer;
pub use types::config::Thresholds;
pub use types::result::{Pattern, QuizResult, RankedResult, ScoreSet, Severity};
