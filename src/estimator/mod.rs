//! Project cost estimator
//!
//! Unlike the table-driven [`crate::pricing`] calculator, the estimator prices
//! a whole project from a handful of form selections with fixed formulas and
//! multiplies the monthly figure by the project duration.

pub mod calculator;
pub mod form;
pub mod report;

use thiserror::Error;

pub use calculator::{estimate, CostBreakdown, ProjectEstimate};
pub use form::{
    BackendResources, Embeddings, EstimatorForm, FrameworkSelection, FrontendFramework,
    GenAiBackend, InstanceType, OpenAiService, ParsingData, VmType,
};

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: u32,
        value: u32,
    },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
    #[error("{field} must be a multiple of {step}, got {value}")]
    Step {
        field: &'static str,
        step: u32,
        value: u32,
    },
    #[error("{0} only applies when the Gen AI backend is \"Framework Used\"")]
    NotApplicable(&'static str),
    #[error("{flag} requires {requires}")]
    Requires {
        flag: &'static str,
        requires: &'static str,
    },
    #[error("failed to write estimate: {0}")]
    Io(#[from] std::io::Error),
}
