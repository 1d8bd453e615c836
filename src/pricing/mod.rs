pub mod calculator;
pub mod models;
pub mod table;

pub use calculator::{CostCalculator, ValidationError};
pub use models::{Category, CostEstimate, CostRequest, LineItem};
pub use table::{DatabaseSpec, DatabaseTier, PriceTable, StorageTier, TierPricing, VmSpec, VmTier};
