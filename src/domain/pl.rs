use serde::{Deserialize, Serialize};

/// A quantity priced at a per-unit rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityRate {
    pub quantity: f64,
    pub rate: f64,
}

impl QuantityRate {
    pub fn total(&self) -> f64 {
        self.quantity * self.rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueInputs {
    pub internal_licenses_phase1: QuantityRate,
    pub external_licenses_phase2: QuantityRate,
    pub implementation_services_phase1: QuantityRate,
    pub implementation_services_phase2: QuantityRate,
    pub training: QuantityRate,
    pub annual_maintenance: QuantityRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CogsInputs {
    pub external_users_phase1: QuantityRate,
    pub external_users_phase2: QuantityRate,
    pub cloud_infrastructure: QuantityRate,
    pub implementation_tools: f64,
    pub existing_staff_phase1: f64,
    pub front_end_developer: f64,
    pub mobile_developer: f64,
    /// Fraction of new-hire salary paid as benefits (0.30 = 30 %).
    pub benefits_rate: f64,
    pub equipment_tools: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpexInputs {
    pub sales_marketing: f64,
    pub general_admin: f64,
    pub research_dev: f64,
}

impl OpexInputs {
    pub fn total(&self) -> f64 {
        self.sales_marketing + self.general_admin + self.research_dev
    }
}

/// Full input state of the two-phase P&L analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlInputs {
    pub revenue: RevenueInputs,
    pub cogs: CogsInputs,
    pub opex: OpexInputs,
}

impl Default for PlInputs {
    fn default() -> Self {
        PlInputs {
            revenue: RevenueInputs {
                internal_licenses_phase1: QuantityRate {
                    quantity: 100.0,
                    rate: 400.0,
                },
                external_licenses_phase2: QuantityRate {
                    quantity: 15100.0,
                    rate: 210.0,
                },
                implementation_services_phase1: QuantityRate {
                    quantity: 220.0,
                    rate: 3000.0,
                },
                implementation_services_phase2: QuantityRate {
                    quantity: 220.0,
                    rate: 5000.0,
                },
                training: QuantityRate {
                    quantity: 2.0,
                    rate: 10000.0,
                },
                annual_maintenance: QuantityRate {
                    quantity: 12.0,
                    rate: 10000.0,
                },
            },
            cogs: CogsInputs {
                external_users_phase1: QuantityRate {
                    quantity: 100.0,
                    rate: 210.0,
                },
                external_users_phase2: QuantityRate {
                    quantity: 15100.0,
                    rate: 55.0,
                },
                cloud_infrastructure: QuantityRate {
                    quantity: 12.0,
                    rate: 2500.0,
                },
                implementation_tools: 5000.0,
                existing_staff_phase1: 360000.0,
                front_end_developer: 100000.0,
                mobile_developer: 100000.0,
                benefits_rate: 0.30,
                equipment_tools: 20000.0,
            },
            opex: OpexInputs {
                sales_marketing: 10000.0,
                general_admin: 10000.0,
                research_dev: 10000.0,
            },
        }
    }
}
