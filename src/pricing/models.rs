use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Resource category priced by the calculator.
///
/// Serialized names are the keys of the `breakdown` object in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vms,
    Databases,
    Storage,
    Bandwidth,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vms => "vms",
            Self::Databases => "databases",
            Self::Storage => "storage",
            Self::Bandwidth => "bandwidth",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_vm_type() -> String {
    "medium".to_string()
}

fn default_db_type() -> String {
    "standard".to_string()
}

fn default_storage_type() -> String {
    "standard".to_string()
}

/// Body of `POST /api/calculate`
///
/// Every field is optional. Tier names are kept as raw strings so that an
/// unknown tier can be skipped instead of failing the whole request. Counts
/// are JSON numbers; `2.0` is a valid count, fractions are rejected by the
/// calculator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRequest {
    #[serde(default = "default_vm_type")]
    pub vm_type: String,
    #[serde(default)]
    pub vm_count: f64,
    #[serde(default = "default_db_type")]
    pub db_type: String,
    #[serde(default)]
    pub db_count: f64,
    #[serde(default = "default_storage_type")]
    pub storage_type: String,
    #[serde(default, rename = "storageGB")]
    pub storage_gb: f64,
    #[serde(default, rename = "bandwidthGB")]
    pub bandwidth_gb: f64,
}

impl Default for CostRequest {
    fn default() -> Self {
        Self {
            vm_type: default_vm_type(),
            vm_count: 0.0,
            db_type: default_db_type(),
            db_count: 0.0,
            storage_type: default_storage_type(),
            storage_gb: 0.0,
            bandwidth_gb: 0.0,
        }
    }
}

/// One itemized entry of a cost estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub cost: f64,
    pub details: String,
}

/// Result of a calculation: total plus per-category breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub total_cost: f64,
    pub breakdown: BTreeMap<Category, LineItem>,
}

impl CostEstimate {
    /// Add a line item and accumulate its cost into the total
    pub fn push(&mut self, category: Category, item: LineItem) {
        self.total_cost += item.cost;
        self.breakdown.insert(category, item);
    }
}
