use crate::commands::base_commands::Commands;
use crate::domain::scenario::{apply_preset, preset};
use crate::services::model_yaml::{load_model_from_yaml_file, save_model_to_yaml_file};

pub fn apply_scenario_command(cmd: Commands) {
    if let Commands::ApplyScenario {
        input,
        scenario,
        output,
    } = cmd
    {
        let mut model = match load_model_from_yaml_file(&input) {
            Ok(model) => model,
            Err(e) => {
                eprintln!("Failed to load model: {e:?}");
                return;
            }
        };

        apply_preset(&mut model.inputs.phases, &preset(scenario));
        model.applied_preset = Some(scenario);

        let target = output.unwrap_or(input);
        if let Err(e) = save_model_to_yaml_file(&target, &model) {
            eprintln!("Failed to save model: {e:?}");
        } else {
            println!(
                "Applied {} utilization preset, model written to {target}",
                scenario.label()
            );
        }
    }
}
