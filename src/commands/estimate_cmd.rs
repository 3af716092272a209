use crate::commands::base_commands::Commands;
use crate::services::pl_yaml::{
    DEFAULT_SCENARIOS_FILE, load_scenario_set_from_yaml_file, load_scenario_set_or_default,
};
use crate::services::scenario_estimate::estimate_all;

pub fn estimate_command(cmd: Commands) {
    if let Commands::Estimate { input, output } = cmd {
        let set = match input {
            Some(path) => match load_scenario_set_from_yaml_file(&path) {
                Ok(set) => set,
                Err(e) => {
                    eprintln!("Failed to load scenarios: {e:?}");
                    return;
                }
            },
            None => load_scenario_set_or_default(DEFAULT_SCENARIOS_FILE),
        };

        let report = estimate_all(&set);
        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize estimate report: {e:?}");
                return;
            }
        };

        match output {
            Some(path) => {
                if let Err(e) = std::fs::write(&path, yaml) {
                    eprintln!("Failed to write estimate report: {e:?}");
                } else {
                    println!("Estimate report written to {path}");
                }
            }
            None => print!("{yaml}"),
        }
    }
}
