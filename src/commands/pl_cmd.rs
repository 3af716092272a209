use crate::commands::base_commands::Commands;
use crate::services::pl_analysis::compute_pl;
use crate::services::pl_yaml::{
    DEFAULT_PL_FILE, load_pl_inputs_from_yaml_file, load_pl_inputs_or_default,
};

pub fn pl_command(cmd: Commands) {
    if let Commands::Pl { input, output } = cmd {
        let inputs = match input {
            Some(path) => match load_pl_inputs_from_yaml_file(&path) {
                Ok(inputs) => inputs,
                Err(e) => {
                    eprintln!("Failed to load P&L inputs: {e:?}");
                    return;
                }
            },
            None => load_pl_inputs_or_default(DEFAULT_PL_FILE),
        };

        let summary = compute_pl(&inputs);
        let yaml = match serde_yaml::to_string(&summary) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize P&L summary: {e:?}");
                return;
            }
        };

        match output {
            Some(path) => {
                if let Err(e) = std::fs::write(&path, yaml) {
                    eprintln!("Failed to write P&L summary: {e:?}");
                } else {
                    println!("P&L summary written to {path}");
                }
            }
            None => print!("{yaml}"),
        }
    }
}
