use serde::{Deserialize, Serialize};

use crate::domain::pl::PlInputs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub licenses: f64,
    pub implementation_services: f64,
    pub training: f64,
    pub annual_maintenance: f64,
}

impl RevenueBreakdown {
    pub fn total(&self) -> f64 {
        self.licenses + self.implementation_services + self.training + self.annual_maintenance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CogsBreakdown {
    pub external_users: f64,
    pub cloud_infrastructure: f64,
    pub implementation_tools: f64,
    pub existing_staff: f64,
    pub new_hires: f64,
    pub benefits: f64,
    pub equipment: f64,
}

impl CogsBreakdown {
    pub fn total(&self) -> f64 {
        self.external_users
            + self.cloud_infrastructure
            + self.implementation_tools
            + self.existing_staff
            + self.new_hires
            + self.benefits
            + self.equipment
    }
}

/// Aggregate figures for one phase (or the combined two-phase view).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseFigures {
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub gross_margin_pct: f64,
    pub opex: f64,
    pub net_income: f64,
    pub net_margin_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    PhaseOne,
    PhaseTwo,
    NotAchieved,
}

impl BreakEven {
    pub fn label(&self) -> &'static str {
        match self {
            BreakEven::PhaseOne => "Phase I",
            BreakEven::PhaseTwo => "Phase II",
            BreakEven::NotAchieved => "Not Achieved",
        }
    }
}

/// Derived ratios over the combined two-year period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlRatios {
    pub cogs_pct_of_revenue: f64,
    /// Phase I to Phase II revenue growth; `None` when Phase I revenue is 0.
    pub revenue_growth_pct: Option<f64>,
    pub monthly_average_revenue: f64,
    pub staffing_pct_of_revenue: f64,
    pub infrastructure_cost: f64,
    pub opex_pct_of_revenue: f64,
    pub break_even: BreakEven,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlSummary {
    pub revenue_phase1: RevenueBreakdown,
    pub revenue_phase2: RevenueBreakdown,
    pub cogs_phase1: CogsBreakdown,
    pub cogs_phase2: CogsBreakdown,
    pub phase1: PhaseFigures,
    pub phase2: PhaseFigures,
    pub combined: PhaseFigures,
    pub ratios: PlRatios,
}

/// Percentage of `metric` over `revenue`; 0 when revenue is not positive,
/// so zero-revenue inputs never produce a non-finite ratio.
fn pct_of_revenue(metric: f64, revenue: f64) -> f64 {
    if revenue > 0.0 {
        metric / revenue * 100.0
    } else {
        0.0
    }
}

fn phase_figures(revenue: f64, cogs: f64, opex: f64) -> PhaseFigures {
    let gross_profit = revenue - cogs;
    let net_income = gross_profit - opex;
    PhaseFigures {
        revenue,
        cogs,
        gross_profit,
        gross_margin_pct: pct_of_revenue(gross_profit, revenue),
        opex,
        net_income,
        net_margin_pct: pct_of_revenue(net_income, revenue),
    }
}

/// Computes the full two-phase P&L from an input snapshot. Pure.
pub fn compute_pl(inputs: &PlInputs) -> PlSummary {
    let revenue = &inputs.revenue;
    let cogs = &inputs.cogs;

    // Training revenue is split evenly across the phases; maintenance is
    // charged undivided in both.
    let revenue_phase1 = RevenueBreakdown {
        licenses: revenue.internal_licenses_phase1.total(),
        implementation_services: revenue.implementation_services_phase1.total(),
        training: revenue.training.total() / 2.0,
        annual_maintenance: revenue.annual_maintenance.total(),
    };
    let revenue_phase2 = RevenueBreakdown {
        licenses: revenue.external_licenses_phase2.total(),
        implementation_services: revenue.implementation_services_phase2.total(),
        training: revenue.training.total() / 2.0,
        annual_maintenance: revenue.annual_maintenance.total(),
    };

    // Infrastructure, tooling, and existing staff are charged identically in
    // both phases; new hires, benefits, and equipment start in Phase II.
    let cogs_phase1 = CogsBreakdown {
        external_users: cogs.external_users_phase1.total(),
        cloud_infrastructure: cogs.cloud_infrastructure.total(),
        implementation_tools: cogs.implementation_tools,
        existing_staff: cogs.existing_staff_phase1,
        new_hires: 0.0,
        benefits: 0.0,
        equipment: 0.0,
    };
    let new_hires = cogs.front_end_developer + cogs.mobile_developer;
    let cogs_phase2 = CogsBreakdown {
        external_users: cogs.external_users_phase2.total(),
        cloud_infrastructure: cogs.cloud_infrastructure.total(),
        implementation_tools: cogs.implementation_tools,
        existing_staff: cogs.existing_staff_phase1,
        new_hires,
        benefits: new_hires * cogs.benefits_rate,
        equipment: cogs.equipment_tools,
    };

    let opex_per_phase = inputs.opex.total();
    let phase1 = phase_figures(revenue_phase1.total(), cogs_phase1.total(), opex_per_phase);
    let phase2 = phase_figures(revenue_phase2.total(), cogs_phase2.total(), opex_per_phase);
    let combined = phase_figures(
        phase1.revenue + phase2.revenue,
        phase1.cogs + phase2.cogs,
        opex_per_phase * 2.0,
    );

    let revenue_growth_pct = if phase1.revenue > 0.0 {
        Some((phase2.revenue - phase1.revenue) / phase1.revenue * 100.0)
    } else {
        None
    };
    let staffing_cost = cogs_phase1.existing_staff
        + cogs_phase2.existing_staff
        + cogs_phase2.new_hires
        + cogs_phase2.benefits;
    let break_even = if phase1.net_income > 0.0 {
        BreakEven::PhaseOne
    } else if phase2.net_income > 0.0 {
        BreakEven::PhaseTwo
    } else {
        BreakEven::NotAchieved
    };

    let ratios = PlRatios {
        cogs_pct_of_revenue: pct_of_revenue(combined.cogs, combined.revenue),
        revenue_growth_pct,
        monthly_average_revenue: combined.revenue / 24.0,
        staffing_pct_of_revenue: pct_of_revenue(staffing_cost, combined.revenue),
        infrastructure_cost: cogs_phase1.cloud_infrastructure + cogs_phase2.cloud_infrastructure,
        opex_pct_of_revenue: pct_of_revenue(combined.opex, combined.revenue),
        break_even,
    };

    PlSummary {
        revenue_phase1,
        revenue_phase2,
        cogs_phase1,
        cogs_phase2,
        phase1,
        phase2,
        combined,
        ratios,
    }
}
