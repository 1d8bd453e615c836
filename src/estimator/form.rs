//! Estimator form model
//!
//! Selections that only exist for some branches of the form (the Gen AI
//! framework settings, custom parsing and embedding URLs) live inside the
//! variant that owns them.

use clap::ValueEnum;
use serde::Serialize;

use super::EstimatorError;

pub const MIN_VM_INSTANCES: u32 = 1;
pub const MIN_STORAGE_GB: u32 = 10;
pub const MAX_STORAGE_GB: u32 = 1000;
pub const STORAGE_STEP_GB: u32 = 10;
pub const MIN_DURATION_MONTHS: u32 = 1;
pub const MAX_DURATION_MONTHS: u32 = 36;

/// Virtual machine family
///
/// `Custom` is recorded in the summary but priced exactly like the docker
/// host; no custom multiplier exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VmType {
    #[value(name = "docker")]
    DockerHost,
    Custom,
}

impl VmType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DockerHost => "VM with docker support - 16v CPU's, 64 GB RAM (minimum)",
            Self::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InstanceType {
    Shared,
    Dedicated,
}

impl InstanceType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shared => "Shared",
            Self::Dedicated => "Dedicated",
        }
    }

    /// Monthly price of one VM instance
    pub fn monthly_rate(&self) -> f64 {
        match self {
            Self::Shared => 100.0,
            Self::Dedicated => 600.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FrontendFramework {
    None,
    #[value(name = "html")]
    HtmlCssJs,
    React,
    Angular,
    #[value(name = "vue")]
    VueJs,
    Custom,
}

impl FrontendFramework {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::HtmlCssJs => "HTML/CSS/JS",
            Self::React => "React",
            Self::Angular => "Angular",
            Self::VueJs => "Vue.js",
            Self::Custom => "Custom Framework",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum OpenAiService {
    #[value(name = "gpt-4o")]
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[value(name = "gpt-4o-mini")]
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    #[value(name = "o3-mini")]
    #[serde(rename = "o3-mini")]
    O3Mini,
    #[value(name = "o1")]
    #[serde(rename = "o1")]
    O1,
}

impl OpenAiService {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gpt4o => "gpt-4o",
            Self::Gpt4oMini => "gpt-4o-mini",
            Self::O3Mini => "o3-mini",
            Self::O1 => "o1",
        }
    }
}

/// Document parsing service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsingData {
    LlamaCloud,
    MinerU,
    MsMarkdown,
    Custom { url: Option<String> },
}

impl ParsingData {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LlamaCloud => "Llama Cloud",
            Self::MinerU => "MinerU",
            Self::MsMarkdown => "MS MarkDown",
            Self::Custom { .. } => "Custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Embeddings {
    OpenAi,
    Custom { pricing_url: Option<String> },
}

impl Embeddings {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI embeddings models",
            Self::Custom { .. } => "Custom embeddings",
        }
    }
}

/// Settings that only exist when a hosted framework backs the Gen AI layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkSelection {
    pub service: OpenAiService,
    pub parsing: ParsingData,
    pub embeddings: Embeddings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenAiBackend {
    /// Self-hosted models, parsing and embeddings
    Opensource,
    /// "Framework Used"
    Framework(FrameworkSelection),
}

impl GenAiBackend {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Opensource => "Opensource",
            Self::Framework(_) => "Framework Used",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BackendResources {
    /// Python (FastAPI) + Typescript (NestJS)
    #[value(name = "standard")]
    PythonTypescript,
    Custom,
}

impl BackendResources {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PythonTypescript => "Python (FastAPI) + Typescript (NestJS)",
            Self::Custom => "Custom",
        }
    }
}

/// One submission of the estimator form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorForm {
    pub vm_type: VmType,
    pub instance_type: InstanceType,
    pub vm_instances: u32,
    pub server_url: String,
    pub storage_gb: u32,
    pub frontend: FrontendFramework,
    pub duration_months: u32,
    pub gen_ai: GenAiBackend,
    pub backend: BackendResources,
}

impl Default for EstimatorForm {
    fn default() -> Self {
        Self {
            vm_type: VmType::DockerHost,
            instance_type: InstanceType::Shared,
            vm_instances: 2,
            server_url: "example.com".to_string(),
            storage_gb: 100,
            frontend: FrontendFramework::None,
            duration_months: 12,
            gen_ai: GenAiBackend::Opensource,
            backend: BackendResources::PythonTypescript,
        }
    }
}

impl EstimatorForm {
    /// Enforce the ranges the form inputs allow
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.vm_instances < MIN_VM_INSTANCES {
            return Err(EstimatorError::TooSmall {
                field: "vm_instances",
                min: MIN_VM_INSTANCES,
                value: self.vm_instances,
            });
        }

        if !(MIN_STORAGE_GB..=MAX_STORAGE_GB).contains(&self.storage_gb) {
            return Err(EstimatorError::OutOfRange {
                field: "storage_gb",
                min: MIN_STORAGE_GB,
                max: MAX_STORAGE_GB,
                value: self.storage_gb,
            });
        }
        if self.storage_gb % STORAGE_STEP_GB != 0 {
            return Err(EstimatorError::Step {
                field: "storage_gb",
                step: STORAGE_STEP_GB,
                value: self.storage_gb,
            });
        }

        if !(MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&self.duration_months) {
            return Err(EstimatorError::OutOfRange {
                field: "duration_months",
                min: MIN_DURATION_MONTHS,
                max: MAX_DURATION_MONTHS,
                value: self.duration_months,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_valid() {
        assert!(EstimatorForm::default().validate().is_ok());
    }

    #[test]
    fn test_zero_instances_rejected() {
        let form = EstimatorForm {
            vm_instances: 0,
            ..EstimatorForm::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "vm_instances must be at least 1, got 0");
    }

    #[test]
    fn test_storage_bounds_and_step() {
        for storage_gb in [10, 500, 1000] {
            let form = EstimatorForm {
                storage_gb,
                ..EstimatorForm::default()
            };
            assert!(form.validate().is_ok(), "{} GB should be accepted", storage_gb);
        }

        for storage_gb in [0, 5, 1010] {
            let form = EstimatorForm {
                storage_gb,
                ..EstimatorForm::default()
            };
            assert!(matches!(form.validate(), Err(EstimatorError::OutOfRange { .. })));
        }

        let form = EstimatorForm {
            storage_gb: 125,
            ..EstimatorForm::default()
        };
        assert!(matches!(form.validate(), Err(EstimatorError::Step { .. })));
    }

    #[test]
    fn test_duration_bounds() {
        let form = EstimatorForm {
            duration_months: 37,
            ..EstimatorForm::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "duration_months must be between 1 and 36, got 37"
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(FrontendFramework::VueJs.label(), "Vue.js");
        assert_eq!(ParsingData::MsMarkdown.label(), "MS MarkDown");
        assert_eq!(
            Embeddings::Custom { pricing_url: None }.label(),
            "Custom embeddings"
        );
        assert_eq!(GenAiBackend::Opensource.label(), "Opensource");
    }
}
