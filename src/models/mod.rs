//! Core data models for fighter ratings.

mod combination;
mod fight;
mod fighter;
mod rating;
mod report;
mod weight_class;

pub use combination::*;
pub use fight::*;
pub use fighter::*;
pub use rating::*;
pub use report::*;
pub use weight_class::*;
