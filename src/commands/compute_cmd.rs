use crate::commands::base_commands::Commands;
use crate::domain::scenario::{apply_preset, preset};
use crate::services::cost_model::compute_cost_model;
use crate::services::model_yaml::{
    DEFAULT_MODEL_FILE, load_model_from_yaml_file, load_model_or_default,
};

pub fn compute_command(cmd: Commands) {
    if let Commands::Compute {
        input,
        output,
        scenario,
    } = cmd
    {
        // An explicit input file must load; the default store falls back.
        let mut model = match input {
            Some(path) => match load_model_from_yaml_file(&path) {
                Ok(model) => model,
                Err(e) => {
                    eprintln!("Failed to load model: {e:?}");
                    return;
                }
            },
            None => load_model_or_default(DEFAULT_MODEL_FILE),
        };
        if let Some(name) = scenario {
            apply_preset(&mut model.inputs.phases, &preset(name));
        }

        let summary = compute_cost_model(&model.inputs);
        let yaml = match serde_yaml::to_string(&summary) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize cost summary: {e:?}");
                return;
            }
        };

        match output {
            Some(path) => {
                if let Err(e) = std::fs::write(&path, yaml) {
                    eprintln!("Failed to write cost summary: {e:?}");
                } else {
                    println!("Cost summary written to {path}");
                }
            }
            None => print!("{yaml}"),
        }
    }
}
