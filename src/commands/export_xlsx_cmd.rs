use crate::commands::base_commands::Commands;
use crate::domain::scenario::PresetName;
use crate::services::cost_model::compute_cost_model;
use crate::services::model_yaml::{
    DEFAULT_MODEL_FILE, load_model_from_yaml_file, load_model_or_default,
};
use crate::services::workbook::{ExportOptions, default_xlsx_file_name, export_workbook};

pub fn export_xlsx_command(cmd: Commands) {
    if let Commands::ExportXlsx {
        input,
        output,
        skip_summary,
        skip_rates,
        skip_phase_details,
        skip_cost_breakdown,
        skip_additional_costs,
        scenarios,
        scenario,
        no_formulas,
        no_formatting,
    } = cmd
    {
        let model = match input {
            Some(path) => match load_model_from_yaml_file(&path) {
                Ok(model) => model,
                Err(e) => {
                    eprintln!("Failed to load model: {e:?}");
                    return;
                }
            },
            None => load_model_or_default(DEFAULT_MODEL_FILE),
        };

        let selected_scenarios = if scenario.is_empty() {
            PresetName::ALL.to_vec()
        } else {
            scenario
        };
        let options = ExportOptions {
            include_executive_summary: !skip_summary,
            include_rates: !skip_rates,
            include_phase_details: !skip_phase_details,
            include_cost_breakdown: !skip_cost_breakdown,
            include_additional_costs: !skip_additional_costs,
            include_scenarios: scenarios,
            selected_scenarios,
            include_formulas: !no_formulas,
            add_formatting: !no_formatting,
        };

        let summary = compute_cost_model(&model.inputs);
        let path = output.unwrap_or_else(default_xlsx_file_name);

        if let Err(e) = export_workbook(&path, &model, &summary, &options) {
            eprintln!("Failed to export workbook: {e:?}");
        } else {
            println!("Workbook written to {path}");
        }
    }
}
