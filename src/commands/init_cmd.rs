use crate::commands::base_commands::{Commands, InitKind};
use crate::domain::pl::PlInputs;
use crate::domain::scenario::SimpleScenarioSet;
use crate::services::model_yaml::{StoredModel, serialize_model_to_yaml};
use crate::services::pl_yaml::{serialize_pl_inputs_to_yaml, serialize_scenario_set_to_yaml};

pub fn init_command(cmd: Commands) {
    if let Commands::Init { kind, output } = cmd {
        let mut buffer = Vec::new();
        let serialized = match kind {
            InitKind::Model => serialize_model_to_yaml(&mut buffer, &StoredModel::default()),
            InitKind::Pl => serialize_pl_inputs_to_yaml(&mut buffer, &PlInputs::default()),
            InitKind::Scenarios => {
                serialize_scenario_set_to_yaml(&mut buffer, &SimpleScenarioSet::default())
            }
        };
        let result = serialized.and_then(|()| std::fs::write(&output, buffer));
        match result {
            Ok(()) => println!("Default inputs written to {output}"),
            Err(e) => eprintln!("Failed to write default inputs: {e:?}"),
        }
    }
}
