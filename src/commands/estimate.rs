//! Project estimate command
//!
//! The flags mirror the estimator form; value ranges are enforced while
//! parsing, like the form widgets do.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use infra_cost::estimator::{
    self,
    form::{MAX_DURATION_MONTHS, MAX_STORAGE_GB, MIN_DURATION_MONTHS, MIN_STORAGE_GB, STORAGE_STEP_GB},
    report, BackendResources, Embeddings, EstimatorError, EstimatorForm, FrameworkSelection,
    FrontendFramework, GenAiBackend, InstanceType, OpenAiService, ParsingData, VmType,
};
use std::path::PathBuf;
use tracing::info;

/// Widest bar chart the terminal output is drawn with
const MAX_CHART_WIDTH: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenAiChoice {
    Opensource,
    /// A hosted framework ("Framework Used")
    Framework,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParsingChoice {
    LlamaCloud,
    #[value(name = "mineru")]
    MinerU,
    MsMarkdown,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmbeddingsChoice {
    #[value(name = "openai")]
    OpenAi,
    Custom,
}

/// Estimate a project's cost
#[derive(Debug, Clone, Parser)]
pub struct EstimateArgs {
    /// Virtual machine type
    #[arg(long, value_enum, default_value = "docker")]
    pub vm_type: VmType,

    /// Instance type
    #[arg(long, value_enum, default_value = "shared")]
    pub instance_type: InstanceType,

    /// Number of VM instances
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u32).range(1..))]
    pub vm_instances: u32,

    /// Server URL (informational)
    #[arg(long, default_value = "example.com")]
    pub server_url: String,

    /// Storage in GB (10-1000, steps of 10)
    #[arg(long, default_value = "100", value_parser = parse_storage_gb)]
    pub storage_gb: u32,

    /// Frontend framework
    #[arg(long, value_enum, default_value = "none")]
    pub frontend: FrontendFramework,

    /// Project duration in months (1-36)
    #[arg(
        long,
        default_value = "12",
        value_parser = clap::value_parser!(u32).range(MIN_DURATION_MONTHS as i64..=MAX_DURATION_MONTHS as i64)
    )]
    pub duration_months: u32,

    /// Gen AI backend type
    #[arg(long, value_enum, default_value = "opensource")]
    pub gen_ai: GenAiChoice,

    /// OpenAI service (framework backend only, default gpt-4o)
    #[arg(long, value_enum)]
    pub openai_service: Option<OpenAiService>,

    /// Parsing data service (framework backend only, default llama-cloud)
    #[arg(long, value_enum)]
    pub parsing: Option<ParsingChoice>,

    /// URL of a custom parsing service
    #[arg(long)]
    pub parsing_url: Option<String>,

    /// Embeddings provider (framework backend only, default openai)
    #[arg(long, value_enum)]
    pub embeddings: Option<EmbeddingsChoice>,

    /// Costing URL of custom embeddings
    #[arg(long)]
    pub embedding_url: Option<String>,

    /// Backend resources
    #[arg(long, value_enum, default_value = "standard")]
    pub backend: BackendResources,

    /// Directory the CSV export is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Skip the CSV export
    #[arg(long)]
    pub no_export: bool,

    /// Width of the bar chart in characters (1-200)
    #[arg(
        long,
        default_value = "40",
        value_parser = clap::value_parser!(u16).range(1..=MAX_CHART_WIDTH)
    )]
    pub chart_width: u16,
}

fn parse_storage_gb(value: &str) -> Result<u32, String> {
    let gb: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a whole number of GB", value))?;

    if !(MIN_STORAGE_GB..=MAX_STORAGE_GB).contains(&gb) {
        return Err(format!(
            "storage must be between {} and {} GB",
            MIN_STORAGE_GB, MAX_STORAGE_GB
        ));
    }
    if gb % STORAGE_STEP_GB != 0 {
        return Err(format!("storage must be a multiple of {} GB", STORAGE_STEP_GB));
    }

    Ok(gb)
}

impl EstimateArgs {
    /// Build the form, rejecting flags that do not belong to the chosen branch
    pub fn to_form(&self) -> Result<EstimatorForm, EstimatorError> {
        let gen_ai = match self.gen_ai {
            GenAiChoice::Opensource => {
                if self.openai_service.is_some() {
                    return Err(EstimatorError::NotApplicable("--openai-service"));
                }
                if self.parsing.is_some() || self.parsing_url.is_some() {
                    return Err(EstimatorError::NotApplicable("--parsing"));
                }
                if self.embeddings.is_some() || self.embedding_url.is_some() {
                    return Err(EstimatorError::NotApplicable("--embeddings"));
                }
                GenAiBackend::Opensource
            }
            GenAiChoice::Framework => GenAiBackend::Framework(FrameworkSelection {
                service: self.openai_service.unwrap_or(OpenAiService::Gpt4o),
                parsing: self.parsing_data()?,
                embeddings: self.embeddings_choice()?,
            }),
        };

        let form = EstimatorForm {
            vm_type: self.vm_type,
            instance_type: self.instance_type,
            vm_instances: self.vm_instances,
            server_url: self.server_url.clone(),
            storage_gb: self.storage_gb,
            frontend: self.frontend,
            duration_months: self.duration_months,
            gen_ai,
            backend: self.backend,
        };
        form.validate()?;

        Ok(form)
    }

    fn parsing_data(&self) -> Result<ParsingData, EstimatorError> {
        let choice = self.parsing.unwrap_or(ParsingChoice::LlamaCloud);
        if choice != ParsingChoice::Custom && self.parsing_url.is_some() {
            return Err(EstimatorError::Requires {
                flag: "--parsing-url",
                requires: "--parsing custom",
            });
        }

        Ok(match choice {
            ParsingChoice::LlamaCloud => ParsingData::LlamaCloud,
            ParsingChoice::MinerU => ParsingData::MinerU,
            ParsingChoice::MsMarkdown => ParsingData::MsMarkdown,
            ParsingChoice::Custom => ParsingData::Custom {
                url: self.parsing_url.clone(),
            },
        })
    }

    fn embeddings_choice(&self) -> Result<Embeddings, EstimatorError> {
        let choice = self.embeddings.unwrap_or(EmbeddingsChoice::OpenAi);
        if choice != EmbeddingsChoice::Custom && self.embedding_url.is_some() {
            return Err(EstimatorError::Requires {
                flag: "--embedding-url",
                requires: "--embeddings custom",
            });
        }

        Ok(match choice {
            EmbeddingsChoice::OpenAi => Embeddings::OpenAi,
            EmbeddingsChoice::Custom => Embeddings::Custom {
                pricing_url: self.embedding_url.clone(),
            },
        })
    }
}

/// Execute the estimate command
pub fn execute(args: EstimateArgs) -> Result<()> {
    let form = args.to_form()?;
    info!("Estimating project cost for {} month(s)", form.duration_months);

    let result = estimator::estimate(&form);

    println!("{}", "Project Configuration Summary".green().bold());
    println!("{}", report::summary_table(&form));
    println!();

    println!("{}", "Cost Breakdown".green().bold());
    println!("  {}: ${:.2}", "Monthly Cost".cyan(), result.monthly_cost);
    println!(
        "  {}: ${:.2}",
        "Total Project Cost".cyan(),
        result.total_project_cost
    );
    println!();

    println!("{}", "Monthly Breakdown:".bold());
    for (category, cost) in result.breakdown.categories() {
        println!("  {}: ${:.2}", category, cost);
    }
    println!();

    println!("{}", "Cost Visualization".green().bold());
    print!("{}", report::bar_chart(&result.breakdown, usize::from(args.chart_width)));
    println!();

    if !args.no_export {
        let today = chrono::Local::now().date_naive();
        let path = report::export_csv(&result.breakdown, &args.output_dir, today)?;
        println!("{} {}", "✓ Estimate exported to".green(), path.display());
        println!();
    }

    println!("{}", report::DISCLAIMER.dimmed());

    Ok(())
}
