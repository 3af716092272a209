use std::io::{self, Write};

use thiserror::Error;

use crate::domain::pl::PlInputs;
use crate::domain::scenario::SimpleScenarioSet;

pub const DEFAULT_PL_FILE: &str = "pl.yaml";
pub const DEFAULT_SCENARIOS_FILE: &str = "scenarios.yaml";

#[derive(Error, Debug)]
pub enum PlYamlError {
    #[error("failed to read yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn load_pl_inputs_from_yaml_file(path: &str) -> Result<PlInputs, PlYamlError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

pub fn load_pl_inputs_or_default(path: &str) -> PlInputs {
    match load_pl_inputs_from_yaml_file(path) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Using default P&L inputs ({e})");
            PlInputs::default()
        }
    }
}

pub fn serialize_pl_inputs_to_yaml<W: Write>(
    writer: &mut W,
    inputs: &PlInputs,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(inputs).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

pub fn serialize_scenario_set_to_yaml<W: Write>(
    writer: &mut W,
    set: &SimpleScenarioSet,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(set).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

pub fn load_scenario_set_from_yaml_file(path: &str) -> Result<SimpleScenarioSet, PlYamlError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

pub fn load_scenario_set_or_default(path: &str) -> SimpleScenarioSet {
    match load_scenario_set_from_yaml_file(path) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Using default scenarios ({e})");
            SimpleScenarioSet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pl_inputs_round_trip_through_yaml() {
        let mut inputs = PlInputs::default();
        inputs.revenue.training.quantity = 4.0;
        inputs.cogs.benefits_rate = 0.25;

        let mut buffer = Vec::new();
        serialize_pl_inputs_to_yaml(&mut buffer, &inputs).unwrap();
        let restored: PlInputs =
            serde_yaml::from_str(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(restored, inputs);
    }

    #[test]
    fn missing_pl_file_falls_back_to_defaults() {
        let inputs = load_pl_inputs_or_default("/nonexistent/pl.yaml");
        assert_eq!(inputs, PlInputs::default());
    }

    #[test]
    fn missing_scenario_file_falls_back_to_defaults() {
        let set = load_scenario_set_or_default("/nonexistent/scenarios.yaml");
        assert_eq!(set, SimpleScenarioSet::default());
    }
}
