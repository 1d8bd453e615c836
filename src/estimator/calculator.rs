use serde::Serialize;
use tracing::debug;

use super::form::{BackendResources, Embeddings, EstimatorForm, GenAiBackend};

/// Storage price per GB per month
pub const STORAGE_RATE_PER_GB: f64 = 0.10;
/// Monthly surcharge for a hosted Gen AI framework
pub const FRAMEWORK_GEN_AI_COST: f64 = 25.0;
/// Monthly surcharge for embeddings not served by OpenAI
pub const SELF_MANAGED_EMBEDDING_COST: f64 = 5.0;
/// Monthly cost of the standard FastAPI + NestJS backend
pub const STANDARD_BACKEND_COST: f64 = 20.0;

/// Monthly cost per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub vm: f64,
    pub storage: f64,
    pub frontend: f64,
    pub gen_ai: f64,
    pub parsing: f64,
    pub embedding: f64,
    pub backend: f64,
}

impl CostBreakdown {
    /// Categories in report order, with their display names
    pub fn categories(&self) -> [(&'static str, f64); 7] {
        [
            ("VM Infrastructure", self.vm),
            ("Storage", self.storage),
            ("Frontend Cost", self.frontend),
            ("Gen AI Cost", self.gen_ai),
            ("Parsing Cost", self.parsing),
            ("Embedding Cost", self.embedding),
            ("Backend Cost", self.backend),
        ]
    }

    pub fn monthly_total(&self) -> f64 {
        self.categories().iter().map(|(_, cost)| cost).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectEstimate {
    pub breakdown: CostBreakdown,
    pub monthly_cost: f64,
    pub total_project_cost: f64,
    pub duration_months: u32,
}

/// Price a form submission
pub fn estimate(form: &EstimatorForm) -> ProjectEstimate {
    let gen_ai = match &form.gen_ai {
        GenAiBackend::Opensource => 0.0,
        GenAiBackend::Framework(_) => FRAMEWORK_GEN_AI_COST,
    };

    // Only OpenAI embeddings are free; self-hosted ones (including the
    // open-source stack) carry the surcharge.
    let embedding = match &form.gen_ai {
        GenAiBackend::Framework(selection) if selection.embeddings == Embeddings::OpenAi => 0.0,
        _ => SELF_MANAGED_EMBEDDING_COST,
    };

    let backend = match form.backend {
        BackendResources::PythonTypescript => STANDARD_BACKEND_COST,
        BackendResources::Custom => 0.0,
    };

    let breakdown = CostBreakdown {
        vm: form.vm_instances as f64 * form.instance_type.monthly_rate(),
        storage: STORAGE_RATE_PER_GB * form.storage_gb as f64,
        frontend: 0.0,
        gen_ai,
        parsing: 0.0,
        embedding,
        backend,
    };

    let monthly_cost = breakdown.monthly_total();
    let total_project_cost = monthly_cost * form.duration_months as f64;

    debug!(
        monthly_cost,
        total_project_cost,
        duration_months = form.duration_months,
        "Estimated project cost"
    );

    ProjectEstimate {
        breakdown,
        monthly_cost,
        total_project_cost,
        duration_months: form.duration_months,
    }
}
