use crate::commands::base_commands::Commands;
use crate::domain::phase::CostModelInputs;
use crate::services::json_export::parse_export_document;
use crate::services::model_yaml::{StoredModel, save_model_to_yaml_file};

pub fn import_json_command(cmd: Commands) {
    if let Commands::ImportJson { input, output } = cmd {
        let contents = match std::fs::read_to_string(&input) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read JSON export: {e:?}");
                return;
            }
        };
        let document = match parse_export_document(&contents) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("Failed to parse JSON export: {e:?}");
                return;
            }
        };

        // Calculations and export date are derived data; only the inputs
        // go back into the model file.
        let model = StoredModel {
            inputs: CostModelInputs {
                rates: document.rates,
                phases: document.phases,
                additional_costs: document.additional_costs,
            },
            applied_preset: None,
        };

        if let Err(e) = save_model_to_yaml_file(&output, &model) {
            eprintln!("Failed to write model: {e:?}");
        } else {
            println!("Model written to {output}");
        }
    }
}
