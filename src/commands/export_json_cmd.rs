use crate::commands::base_commands::Commands;
use crate::services::cost_model::compute_cost_model;
use crate::services::json_export::{
    build_export_document, default_json_file_name, write_export_document,
};
use crate::services::model_yaml::{
    DEFAULT_MODEL_FILE, load_model_from_yaml_file, load_model_or_default,
};

pub fn export_json_command(cmd: Commands) {
    if let Commands::ExportJson { input, output } = cmd {
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

        let summary = compute_cost_model(&model.inputs);
        let document = build_export_document(&model, &summary);
        let path = output.unwrap_or_else(default_json_file_name);

        if let Err(e) = write_export_document(&path, &document) {
            eprintln!("Failed to write JSON export: {e:?}");
        } else {
            println!("JSON export written to {path}");
        }
    }
}
