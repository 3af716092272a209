use serde::{Deserialize, Serialize};

use crate::domain::phase::{
    AdditionalCostItem, CostModelInputs, Frequency, PHASE_COUNT, phase_name,
};
use crate::domain::team::{PerRole, Role};

/// Billable hours in one full-time month.
pub const HOURS_PER_MONTH: f64 = 173.0;

/// Additional costs are normalized over a fixed two-year horizon.
pub const HORIZON_MONTHS: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseBreakdown {
    pub name: String,
    pub duration_months: f64,
    pub role_costs: PerRole,
    pub total: f64,
    pub hours: f64,
}

/// Derived output of the cost engine, recomputed wholesale on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub total_cost: f64,
    pub total_hours: f64,
    pub permanent_staff_cost: f64,
    pub contractor_cost: f64,
    pub additional_costs_total: f64,
    pub grand_total: f64,
    /// `None` when all phase durations are zero.
    pub average_monthly_cost: Option<f64>,
    pub phase_breakdown: Vec<PhaseBreakdown>,
    pub total_duration_months: f64,
}

/// Computes the full cost summary from an input snapshot. Pure: the inputs
/// are never mutated and no value is clamped here; range limits are a
/// caller concern.
pub fn compute_cost_model(inputs: &CostModelInputs) -> CostSummary {
    let mut total_cost = 0.0;
    let mut total_hours = 0.0;
    let mut permanent_staff_cost = 0.0;
    let mut contractor_cost = 0.0;
    let mut phase_breakdown = Vec::with_capacity(PHASE_COUNT);

    for (index, phase) in inputs.phases.iter().enumerate() {
        let mut role_costs = PerRole::default();
        let mut phase_total = 0.0;
        let mut phase_hours = 0.0;

        for role in Role::ALL {
            let monthly_hours = HOURS_PER_MONTH * (phase.utilization.get(role) / 100.0);
            let role_hours = monthly_hours * phase.duration_months;
            let role_cost = role_hours * inputs.rates.get(role);

            role_costs.set(role, role_cost);
            phase_total += role_cost;
            phase_hours += role_hours;
            if role.is_contractor() {
                contractor_cost += role_cost;
            } else {
                permanent_staff_cost += role_cost;
            }
        }

        total_cost += phase_total;
        total_hours += phase_hours;
        phase_breakdown.push(PhaseBreakdown {
            name: phase_name(index),
            duration_months: phase.duration_months,
            role_costs,
            total: phase_total,
            hours: phase_hours,
        });
    }

    let additional_costs_total = additional_costs_total(&inputs.additional_costs);
    let total_duration_months: f64 = inputs.phases.iter().map(|p| p.duration_months).sum();
    let average_monthly_cost = if total_duration_months == 0.0 {
        None
    } else {
        Some(total_cost / total_duration_months)
    };

    CostSummary {
        total_cost,
        total_hours,
        permanent_staff_cost,
        contractor_cost,
        additional_costs_total,
        grand_total: total_cost + additional_costs_total,
        average_monthly_cost,
        phase_breakdown,
        total_duration_months,
    }
}

/// Contribution of one item over the 24-month horizon: monthly items recur
/// every month, annual items twice, everything else is taken once.
pub fn normalized_item_total(item: &AdditionalCostItem) -> f64 {
    match item.frequency {
        Frequency::Monthly => item.amount * HORIZON_MONTHS,
        Frequency::Annually => item.amount * 2.0,
        Frequency::OneTime | Frequency::Phase1 | Frequency::Phase2 | Frequency::Phase3 => {
            item.amount
        }
    }
}

pub fn additional_costs_total(items: &[AdditionalCostItem]) -> f64 {
    items.iter().map(normalized_item_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::phase::{Phase, default_phases};
    use crate::domain::team::default_rates;

    fn default_inputs() -> CostModelInputs {
        CostModelInputs::default()
    }

    fn item(amount: f64, frequency: Frequency) -> AdditionalCostItem {
        AdditionalCostItem {
            description: "item".to_string(),
            amount,
            frequency,
        }
    }

    #[test]
    fn phase_one_role_costs_match_hand_calculation() {
        let summary = compute_cost_model(&default_inputs());
        let phase1 = &summary.phase_breakdown[0];

        // 173 h/month at 60 % utilization over 8 months at $165/h.
        assert_eq!(phase1.role_costs.manager, 173.0 * 0.60 * 8.0 * 165.0);
        assert_eq!(phase1.role_costs.manager, 137_016.0);
        assert_eq!(phase1.role_costs.developer, 173.0 * 0.75 * 8.0 * 160.0);
        assert_eq!(phase1.role_costs.developer, 166_080.0);
        assert_eq!(phase1.role_costs.mobile, 173.0 * 0.80 * 8.0 * 150.0);
        assert_eq!(phase1.role_costs.mobile, 166_080.0);
    }

    #[test]
    fn total_cost_is_sum_over_phases_and_roles() {
        let inputs = default_inputs();
        let summary = compute_cost_model(&inputs);

        let mut expected = 0.0;
        for phase in &inputs.phases {
            for role in Role::ALL {
                expected += HOURS_PER_MONTH
                    * (phase.utilization.get(role) / 100.0)
                    * phase.duration_months
                    * inputs.rates.get(role);
            }
        }
        assert_eq!(summary.total_cost, expected);

        let phase_sum: f64 = summary.phase_breakdown.iter().map(|p| p.total).sum();
        assert_eq!(summary.total_cost, phase_sum);
    }

    #[test]
    fn staff_split_assigns_mobile_to_contractors() {
        let summary = compute_cost_model(&default_inputs());
        let mobile_total: f64 = summary
            .phase_breakdown
            .iter()
            .map(|p| p.role_costs.mobile)
            .sum();
        assert_eq!(summary.contractor_cost, mobile_total);
        assert_eq!(
            summary.permanent_staff_cost + summary.contractor_cost,
            summary.total_cost
        );
    }

    #[test]
    fn grand_total_includes_normalized_additional_costs() {
        let mut inputs = default_inputs();
        inputs.additional_costs = vec![
            item(100.0, Frequency::Monthly),
            item(100.0, Frequency::Annually),
            item(100.0, Frequency::OneTime),
            item(100.0, Frequency::Phase2),
        ];
        let summary = compute_cost_model(&inputs);

        assert_eq!(summary.additional_costs_total, 2400.0 + 200.0 + 100.0 + 100.0);
        assert_eq!(
            summary.grand_total,
            summary.total_cost + summary.additional_costs_total
        );
    }

    #[test]
    fn average_monthly_cost_is_none_for_zero_duration() {
        let mut inputs = default_inputs();
        for phase in inputs.phases.iter_mut() {
            phase.duration_months = 0.0;
        }
        let summary = compute_cost_model(&inputs);
        assert_eq!(summary.total_duration_months, 0.0);
        assert_eq!(summary.average_monthly_cost, None);
    }

    #[test]
    fn average_monthly_cost_divides_staffing_cost_by_total_duration() {
        let summary = compute_cost_model(&default_inputs());
        assert_eq!(summary.total_duration_months, 24.0);
        assert_eq!(
            summary.average_monthly_cost,
            Some(summary.total_cost / 24.0)
        );
    }

    #[test]
    fn negative_inputs_pass_through_unclamped() {
        let mut inputs = default_inputs();
        inputs.rates.manager = -10.0;
        inputs.phases[0] = Phase {
            utilization: inputs.phases[0].utilization,
            duration_months: 1.0,
        };
        let summary = compute_cost_model(&inputs);
        assert!(summary.phase_breakdown[0].role_costs.manager < 0.0);
    }

    #[test]
    fn default_phases_total_two_years() {
        let total: f64 = default_phases().iter().map(|p| p.duration_months).sum();
        assert_eq!(total, HORIZON_MONTHS);
        assert_eq!(default_rates().manager, 165.0);
    }
}
