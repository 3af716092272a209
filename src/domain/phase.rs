use serde::{Deserialize, Serialize};

use crate::domain::team::{PerRole, default_rates};

pub const PHASE_COUNT: usize = 3;

/// A project stage: how much of a full-time month each role is billed,
/// and for how many months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub utilization: PerRole,
    pub duration_months: f64,
}

/// How an additional cost item recurs over the fixed 24-month horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Monthly,
    Annually,
    OneTime,
    Phase1,
    Phase2,
    Phase3,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Annually => "annually",
            Frequency::OneTime => "one-time",
            Frequency::Phase1 => "phase 1",
            Frequency::Phase2 => "phase 2",
            Frequency::Phase3 => "phase 3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCostItem {
    pub description: String,
    pub amount: f64,
    pub frequency: Frequency,
}

/// The full input state of the cost model. Engines never mutate this;
/// callers edit it and recompute wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModelInputs {
    pub rates: PerRole,
    pub phases: [Phase; PHASE_COUNT],
    pub additional_costs: Vec<AdditionalCostItem>,
}

impl Default for CostModelInputs {
    fn default() -> Self {
        CostModelInputs {
            rates: default_rates(),
            phases: default_phases(),
            additional_costs: Vec::new(),
        }
    }
}

pub fn default_phases() -> [Phase; PHASE_COUNT] {
    [
        Phase {
            utilization: PerRole {
                manager: 60.0,
                developer: 75.0,
                dba: 50.0,
                junior: 65.0,
                mobile: 80.0,
            },
            duration_months: 8.0,
        },
        Phase {
            utilization: PerRole {
                manager: 50.0,
                developer: 85.0,
                dba: 60.0,
                junior: 70.0,
                mobile: 90.0,
            },
            duration_months: 10.0,
        },
        Phase {
            utilization: PerRole {
                manager: 40.0,
                developer: 60.0,
                dba: 70.0,
                junior: 50.0,
                mobile: 60.0,
            },
            duration_months: 6.0,
        },
    ]
}

pub fn phase_name(index: usize) -> String {
    format!("Phase {}", index + 1)
}
