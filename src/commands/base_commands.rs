use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::scenario::PresetName;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InitKind {
    Model,
    Pl,
    Scenarios,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write default input files to start a new model
    Init {
        /// Which input file to write
        #[arg(short, long, value_enum, default_value_t = InitKind::Model)]
        kind: InitKind,
        /// Output YAML file
        #[arg(short, long, default_value = "model.yaml")]
        output: String,
    },
    /// Compute the cost model and emit the summary as YAML
    Compute {
        /// Model YAML file (model.yaml when omitted, falling back to defaults)
        #[arg(short, long)]
        input: Option<String>,
        /// Output YAML file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Apply a utilization preset before computing (inputs on disk are untouched)
        #[arg(short, long, value_enum)]
        scenario: Option<PresetName>,
    },
    /// Apply a utilization preset to a model file and save it back
    ApplyScenario {
        /// Model YAML file
        #[arg(short, long, default_value = "model.yaml")]
        input: String,
        /// Preset to apply
        #[arg(short, long, value_enum)]
        scenario: PresetName,
        /// Output YAML file (defaults to the input file)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compute the simplified three-scenario estimate
    Estimate {
        /// Scenario YAML file (scenarios.yaml when omitted, falling back to defaults)
        #[arg(short, long)]
        input: Option<String>,
        /// Output YAML file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Compute the two-phase P&L analysis and emit the summary as YAML
    Pl {
        /// P&L input YAML file (pl.yaml when omitted, falling back to defaults)
        #[arg(short, long)]
        input: Option<String>,
        /// Output YAML file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Export inputs and calculations as a single JSON document
    ExportJson {
        /// Model YAML file (model.yaml when omitted, falling back to defaults)
        #[arg(short, long)]
        input: Option<String>,
        /// Output JSON file (defaults to rfp-cost-model-<date>.json)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Rebuild a model YAML file from a JSON export
    ImportJson {
        /// JSON export file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long, default_value = "model.yaml")]
        output: String,
    },
    /// Export the cost model as a multi-sheet XLSX workbook
    ExportXlsx {
        /// Model YAML file (model.yaml when omitted, falling back to defaults)
        #[arg(short, long)]
        input: Option<String>,
        /// Output XLSX file (defaults to RFP-Cost-Model-<date>.xlsx)
        #[arg(short, long)]
        output: Option<String>,
        /// Leave out the executive summary sheet
        #[arg(long)]
        skip_summary: bool,
        /// Leave out the team rates sheet
        #[arg(long)]
        skip_rates: bool,
        /// Leave out the phase details sheet
        #[arg(long)]
        skip_phase_details: bool,
        /// Leave out the cost breakdown sheet
        #[arg(long)]
        skip_cost_breakdown: bool,
        /// Leave out the additional costs sheet
        #[arg(long)]
        skip_additional_costs: bool,
        /// Add the scenario comparison sheet
        #[arg(long)]
        scenarios: bool,
        /// Scenarios to compare (repeatable; defaults to all three)
        #[arg(short, long, value_enum)]
        scenario: Vec<PresetName>,
        /// Write computed values instead of spreadsheet formulas
        #[arg(long)]
        no_formulas: bool,
        /// Skip column widths and header styling
        #[arg(long)]
        no_formatting: bool,
    },
    /// Export the P&L statement as an XLSX workbook
    ExportPlXlsx {
        /// P&L input YAML file (pl.yaml when omitted, falling back to defaults)
        #[arg(short, long)]
        input: Option<String>,
        /// Output XLSX file (defaults to PL-Analysis-<date>.xlsx)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
