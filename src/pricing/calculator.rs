use crate::pricing::models::{Category, CostEstimate, CostRequest, LineItem};
use crate::pricing::table::{PriceTable, TierPricing};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Rejected request quantity
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be a whole number, got {value}")]
    Fractional { field: &'static str, value: f64 },
}

/// Calculator for infrastructure costs based on the static price table
#[derive(Debug, Clone)]
pub struct CostCalculator {
    table: Arc<PriceTable>,
}

impl CostCalculator {
    pub fn new(table: Arc<PriceTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Calculate the monthly cost of a request
    ///
    /// A category contributes only when its quantity is positive and its tier
    /// name resolves in the price table. Unknown tiers are skipped, not
    /// reported.
    pub fn calculate(&self, request: &CostRequest) -> Result<CostEstimate, ValidationError> {
        validate_request(request)?;

        let mut estimate = CostEstimate::default();

        if request.vm_count > 0.0 {
            if let Some(TierPricing::Vm(tier, spec)) =
                self.table.resolve_tier(Category::Vms, &request.vm_type)
            {
                estimate.push(
                    Category::Vms,
                    LineItem {
                        label: format!("VMs ({} x {})", request.vm_count, tier),
                        cost: spec.cost_per_month * request.vm_count,
                        details: format!("{} vCPU, {} GB RAM each", spec.cpu, spec.ram),
                    },
                );
            }
        }

        if request.db_count > 0.0 {
            if let Some(TierPricing::Database(tier, spec)) =
                self.table.resolve_tier(Category::Databases, &request.db_type)
            {
                estimate.push(
                    Category::Databases,
                    LineItem {
                        label: format!("Databases ({} x {})", request.db_count, tier),
                        cost: spec.cost_per_month * request.db_count,
                        details: format!("~{} GB Storage each", spec.storage_gb),
                    },
                );
            }
        }

        if request.storage_gb > 0.0 {
            if let Some(TierPricing::Storage(tier, rate)) =
                self.table.resolve_tier(Category::Storage, &request.storage_type)
            {
                estimate.push(
                    Category::Storage,
                    LineItem {
                        label: format!("Storage ({} GB {})", request.storage_gb, tier),
                        cost: rate * request.storage_gb,
                        details: format!("${:.2}/GB/Month", rate),
                    },
                );
            }
        }

        if request.bandwidth_gb > 0.0 {
            if let Some(TierPricing::Bandwidth(rate)) =
                self.table.resolve_tier(Category::Bandwidth, "")
            {
                estimate.push(
                    Category::Bandwidth,
                    LineItem {
                        label: format!("Bandwidth ({} GB Egress)", request.bandwidth_gb),
                        cost: rate * request.bandwidth_gb,
                        details: format!("${:.2}/GB/Month", rate),
                    },
                );
            }
        }

        debug!(
            categories = estimate.breakdown.len(),
            total_cost = estimate.total_cost,
            "Calculated cost estimate"
        );

        Ok(estimate)
    }
}

fn validate_request(request: &CostRequest) -> Result<(), ValidationError> {
    check_count("vmCount", request.vm_count)?;
    check_count("dbCount", request.db_count)?;
    check_quantity("storageGB", request.storage_gb)?;
    check_quantity("bandwidthGB", request.bandwidth_gb)?;
    Ok(())
}

fn check_quantity(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn check_count(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_quantity(field, value)?;
    if value.fract() != 0.0 {
        return Err(ValidationError::Fractional { field, value });
    }
    Ok(())
}
