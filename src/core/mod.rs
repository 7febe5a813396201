pub mod fixer;
pub mod rules;

pub use crate::domain::model::{FileOutcome, RuleHit, RunReport};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
