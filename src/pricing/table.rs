//! Static price table
//!
//! The table is built once at startup and shared read-only between request
//! handlers. Tier names coming from clients are resolved through
//! [`PriceTable::resolve_tier`], which is the single place where an unknown
//! tier turns into "no price" instead of an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::models::Category;

/// Virtual machine size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmTier {
    Small,
    Medium,
    Large,
}

/// Managed database class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseTier {
    Standard,
    Performant,
}

/// Block storage class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageTier {
    Standard,
    Ssd,
}

macro_rules! tier_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ();

            /// Exact, case-sensitive match on the wire name
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tier_names!(VmTier { Small => "small", Medium => "medium", Large => "large" });
tier_names!(DatabaseTier { Standard => "standard", Performant => "performant" });
tier_names!(StorageTier { Standard => "standard", Ssd => "ssd" });

/// Capacity and monthly price of one VM
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmSpec {
    pub cpu: u32,
    pub ram: u32,
    pub cost_per_month: f64,
}

/// Included storage and monthly price of one database
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSpec {
    #[serde(rename = "storageGB")]
    pub storage_gb: u32,
    pub cost_per_month: f64,
}

/// Pricing resolved for a category and tier name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TierPricing {
    Vm(VmTier, VmSpec),
    Database(DatabaseTier, DatabaseSpec),
    Storage(StorageTier, f64),
    /// Bandwidth is untiered
    Bandwidth(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandwidthRate {
    #[serde(rename = "costPerGB")]
    pub cost_per_gb: f64,
}

/// Unit prices per category and tier, all amounts per month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub vm: BTreeMap<VmTier, VmSpec>,
    pub database: BTreeMap<DatabaseTier, DatabaseSpec>,
    /// Cost per GB per month
    pub storage: BTreeMap<StorageTier, f64>,
    pub bandwidth: BandwidthRate,
}

impl PriceTable {
    /// The compiled-in price list
    pub fn standard() -> Self {
        let vm = BTreeMap::from([
            (VmTier::Small, VmSpec { cpu: 2, ram: 4, cost_per_month: 50.0 }),
            (VmTier::Medium, VmSpec { cpu: 4, ram: 8, cost_per_month: 100.0 }),
            (VmTier::Large, VmSpec { cpu: 8, ram: 16, cost_per_month: 200.0 }),
        ]);

        let database = BTreeMap::from([
            (
                DatabaseTier::Standard,
                DatabaseSpec { storage_gb: 100, cost_per_month: 80.0 },
            ),
            (
                DatabaseTier::Performant,
                DatabaseSpec { storage_gb: 500, cost_per_month: 300.0 },
            ),
        ]);

        let storage = BTreeMap::from([(StorageTier::Standard, 0.02), (StorageTier::Ssd, 0.10)]);

        Self {
            vm,
            database,
            storage,
            bandwidth: BandwidthRate { cost_per_gb: 0.09 },
        }
    }

    /// Look up the pricing for `name` within `category`
    ///
    /// Returns `None` when the name is not a known tier of that category.
    /// The name is ignored for bandwidth.
    pub fn resolve_tier(&self, category: Category, name: &str) -> Option<TierPricing> {
        match category {
            Category::Vms => {
                let tier = name.parse::<VmTier>().ok()?;
                self.vm.get(&tier).map(|spec| TierPricing::Vm(tier, *spec))
            }
            Category::Databases => {
                let tier = name.parse::<DatabaseTier>().ok()?;
                self.database
                    .get(&tier)
                    .map(|spec| TierPricing::Database(tier, *spec))
            }
            Category::Storage => {
                let tier = name.parse::<StorageTier>().ok()?;
                self.storage
                    .get(&tier)
                    .map(|rate| TierPricing::Storage(tier, *rate))
            }
            Category::Bandwidth => Some(TierPricing::Bandwidth(self.bandwidth.cost_per_gb)),
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}
