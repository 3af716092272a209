use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::phase::{AdditionalCostItem, CostModelInputs, Frequency, PHASE_COUNT, Phase};
use crate::domain::scenario::PresetName;
use crate::domain::team::PerRole;

pub const DEFAULT_MODEL_FILE: &str = "model.yaml";

#[derive(Error, Debug)]
pub enum ModelYamlError {
    #[error("failed to read model yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse model yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("expected {PHASE_COUNT} phases, found {0}")]
    WrongPhaseCount(usize),
}

/// The cost-model inputs as persisted on disk, plus the name of the last
/// applied preset. A missing name means "custom" utilization.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredModel {
    pub inputs: CostModelInputs,
    pub applied_preset: Option<PresetName>,
}

impl Default for StoredModel {
    fn default() -> Self {
        StoredModel {
            inputs: CostModelInputs::default(),
            applied_preset: None,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ModelRecord {
    rates: PerRole,
    phases: Vec<PhaseRecord>,
    #[serde(default)]
    additional_costs: Vec<AdditionalCostRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    applied_preset: Option<PresetName>,
}

#[derive(Serialize, Deserialize)]
struct PhaseRecord {
    utilization: PerRole,
    duration_months: f64,
}

#[derive(Serialize, Deserialize)]
struct AdditionalCostRecord {
    description: String,
    amount: f64,
    frequency: Frequency,
}

pub fn load_model_from_yaml_file(path: &str) -> Result<StoredModel, ModelYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_model_from_yaml_str(&contents)
}

/// Try/ignore load policy for the durable store: a missing or malformed
/// file is logged and replaced by the default model.
pub fn load_model_or_default(path: &str) -> StoredModel {
    match load_model_from_yaml_file(path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Using default model inputs ({e})");
            StoredModel::default()
        }
    }
}

pub fn deserialize_model_from_yaml_str(input: &str) -> Result<StoredModel, ModelYamlError> {
    let record: ModelRecord = serde_yaml::from_str(input)?;
    let phase_records: Vec<Phase> = record
        .phases
        .iter()
        .map(|p| Phase {
            utilization: p.utilization,
            duration_months: p.duration_months,
        })
        .collect();
    let phases: [Phase; PHASE_COUNT] = phase_records
        .try_into()
        .map_err(|v: Vec<Phase>| ModelYamlError::WrongPhaseCount(v.len()))?;

    Ok(StoredModel {
        inputs: CostModelInputs {
            rates: record.rates,
            phases,
            additional_costs: record
                .additional_costs
                .into_iter()
                .map(|item| AdditionalCostItem {
                    description: item.description,
                    amount: item.amount,
                    frequency: item.frequency,
                })
                .collect(),
        },
        applied_preset: record.applied_preset,
    })
}

pub fn serialize_model_to_yaml<W: Write>(writer: &mut W, model: &StoredModel) -> io::Result<()> {
    let record = ModelRecord {
        rates: model.inputs.rates,
        phases: model
            .inputs
            .phases
            .iter()
            .map(|p| PhaseRecord {
                utilization: p.utilization,
                duration_months: p.duration_months,
            })
            .collect(),
        additional_costs: model
            .inputs
            .additional_costs
            .iter()
            .map(|item| AdditionalCostRecord {
                description: item.description.clone(),
                amount: item.amount,
                frequency: item.frequency,
            })
            .collect(),
        applied_preset: model.applied_preset,
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

pub fn save_model_to_yaml_file(path: &str, model: &StoredModel) -> Result<(), ModelYamlError> {
    let mut buffer = Vec::new();
    serialize_model_to_yaml(&mut buffer, model)?;
    std::fs::write(path, buffer)?;
    Ok(())
}
