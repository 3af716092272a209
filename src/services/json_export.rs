use std::io;

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::phase::{AdditionalCostItem, PHASE_COUNT, Phase};
use crate::domain::team::PerRole;
use crate::services::cost_model::CostSummary;
use crate::services::model_yaml::StoredModel;

#[derive(Error, Debug)]
pub enum JsonExportError {
    #[error("failed to write json export: {0}")]
    Write(#[from] io::Error),
    #[error("failed to serialize json export: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The one-file snapshot offered for download: inputs, derived figures, and
/// the moment of export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub rates: PerRole,
    pub phases: [Phase; PHASE_COUNT],
    pub additional_costs: Vec<AdditionalCostItem>,
    pub calculations: CostSummary,
    pub export_date: String,
}

pub fn build_export_document(model: &StoredModel, calculations: &CostSummary) -> ExportDocument {
    ExportDocument {
        rates: model.inputs.rates,
        phases: model.inputs.phases,
        additional_costs: model.inputs.additional_costs.clone(),
        calculations: calculations.clone(),
        export_date: Local::now().to_rfc3339(),
    }
}

pub fn default_json_file_name() -> String {
    format!(
        "rfp-cost-model-{}.json",
        Local::now().date_naive().format("%Y-%m-%d")
    )
}

pub fn write_export_document(
    path: &str,
    document: &ExportDocument,
) -> Result<(), JsonExportError> {
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn parse_export_document(input: &str) -> Result<ExportDocument, JsonExportError> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::phase::Frequency;
    use crate::services::cost_model::compute_cost_model;

    #[test]
    fn export_document_round_trips_inputs_exactly() {
        let mut model = StoredModel::default();
        // A rate with a non-terminating binary fraction; the derived costs
        // (e.g. 112622.99999999999) must survive re-import bit for bit.
        model.inputs.rates.dba = 155.15;
        model.inputs.additional_costs.push(AdditionalCostItem {
            description: "Licenses".to_string(),
            amount: 350.5,
            frequency: Frequency::Annually,
        });
        let calculations = compute_cost_model(&model.inputs);
        let document = build_export_document(&model, &calculations);

        let json = serde_json::to_string_pretty(&document).unwrap();
        let restored = parse_export_document(&json).unwrap();

        assert_eq!(restored.rates, model.inputs.rates);
        assert_eq!(restored.phases, model.inputs.phases);
        assert_eq!(restored.additional_costs, model.inputs.additional_costs);
        assert_eq!(restored.calculations, calculations);
        assert_eq!(restored, document);
    }

    #[test]
    fn default_file_name_carries_the_date() {
        let name = default_json_file_name();
        assert!(name.starts_with("rfp-cost-model-"));
        assert!(name.ends_with(".json"));
    }
}
