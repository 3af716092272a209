use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::phase::{PHASE_COUNT, Phase};
use crate::domain::team::PerRole;

/// Named utilization presets for the full cost model. Applying one
/// overwrites only the utilization percentages of all three phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PresetName {
    Conservative,
    Moderate,
    Aggressive,
}

impl PresetName {
    pub const ALL: [PresetName; 3] = [
        PresetName::Conservative,
        PresetName::Moderate,
        PresetName::Aggressive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PresetName::Conservative => "Conservative",
            PresetName::Moderate => "Moderate",
            PresetName::Aggressive => "Aggressive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioPreset {
    pub name: PresetName,
    pub utilization: [PerRole; PHASE_COUNT],
}

pub fn preset(name: PresetName) -> ScenarioPreset {
    let utilization = match name {
        PresetName::Conservative => [
            PerRole {
                manager: 45.0,
                developer: 60.0,
                dba: 35.0,
                junior: 50.0,
                mobile: 65.0,
            },
            PerRole {
                manager: 35.0,
                developer: 70.0,
                dba: 45.0,
                junior: 55.0,
                mobile: 75.0,
            },
            PerRole {
                manager: 25.0,
                developer: 45.0,
                dba: 55.0,
                junior: 35.0,
                mobile: 45.0,
            },
        ],
        PresetName::Moderate => [
            PerRole {
                manager: 60.0,
                developer: 75.0,
                dba: 50.0,
                junior: 65.0,
                mobile: 80.0,
            },
            PerRole {
                manager: 50.0,
                developer: 85.0,
                dba: 60.0,
                junior: 70.0,
                mobile: 90.0,
            },
            PerRole {
                manager: 40.0,
                developer: 60.0,
                dba: 70.0,
                junior: 50.0,
                mobile: 60.0,
            },
        ],
        PresetName::Aggressive => [
            PerRole {
                manager: 75.0,
                developer: 90.0,
                dba: 65.0,
                junior: 80.0,
                mobile: 95.0,
            },
            PerRole {
                manager: 65.0,
                developer: 100.0,
                dba: 75.0,
                junior: 85.0,
                mobile: 100.0,
            },
            PerRole {
                manager: 55.0,
                developer: 75.0,
                dba: 85.0,
                junior: 65.0,
                mobile: 75.0,
            },
        ],
    };
    ScenarioPreset { name, utilization }
}

/// Overwrites only the utilization of each phase; rates, durations, and
/// additional costs stay untouched.
pub fn apply_preset(phases: &mut [Phase; PHASE_COUNT], preset: &ScenarioPreset) {
    for (phase, utilization) in phases.iter_mut().zip(preset.utilization.iter()) {
        phase.utilization = *utilization;
    }
}

/// The simplified estimator's scenario set (one flat team, one rate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateName {
    Conservative,
    Optimistic,
    Pessimistic,
}

impl EstimateName {
    pub const ALL: [EstimateName; 3] = [
        EstimateName::Conservative,
        EstimateName::Optimistic,
        EstimateName::Pessimistic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EstimateName::Conservative => "Conservative",
            EstimateName::Optimistic => "Optimistic",
            EstimateName::Pessimistic => "Pessimistic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleScenario {
    pub hourly_rate: f64,
    pub duration_months: f64,
    pub team_size: f64,
}

/// The three simple scenarios, independently editable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleScenarioSet {
    pub conservative: SimpleScenario,
    pub optimistic: SimpleScenario,
    pub pessimistic: SimpleScenario,
}

impl SimpleScenarioSet {
    pub fn get(&self, name: EstimateName) -> SimpleScenario {
        match name {
            EstimateName::Conservative => self.conservative,
            EstimateName::Optimistic => self.optimistic,
            EstimateName::Pessimistic => self.pessimistic,
        }
    }
}

impl Default for SimpleScenarioSet {
    fn default() -> Self {
        SimpleScenarioSet {
            conservative: SimpleScenario {
                hourly_rate: 150.0,
                duration_months: 8.0,
                team_size: 4.0,
            },
            optimistic: SimpleScenario {
                hourly_rate: 175.0,
                duration_months: 4.0,
                team_size: 6.0,
            },
            pessimistic: SimpleScenario {
                hourly_rate: 125.0,
                duration_months: 12.0,
                team_size: 3.0,
            },
        }
    }
}
