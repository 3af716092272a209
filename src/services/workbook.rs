use chrono::Local;
use rust_xlsxwriter::{Format, Formula, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::domain::scenario::{PresetName, apply_preset, preset};
use crate::domain::team::Role;
use crate::services::cost_model::{CostSummary, compute_cost_model, normalized_item_total};
use crate::services::model_yaml::StoredModel;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Which sheets and features go into the exported workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub include_executive_summary: bool,
    pub include_rates: bool,
    pub include_phase_details: bool,
    pub include_cost_breakdown: bool,
    pub include_additional_costs: bool,
    pub include_scenarios: bool,
    pub selected_scenarios: Vec<PresetName>,
    pub include_formulas: bool,
    pub add_formatting: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            include_executive_summary: true,
            include_rates: true,
            include_phase_details: true,
            include_cost_breakdown: true,
            include_additional_costs: true,
            include_scenarios: false,
            selected_scenarios: PresetName::ALL.to_vec(),
            include_formulas: true,
            add_formatting: true,
        }
    }
}

pub fn default_xlsx_file_name() -> String {
    format!(
        "RFP-Cost-Model-{}.xlsx",
        Local::now().date_naive().format("%Y-%m-%d")
    )
}

/// Builds the multi-sheet workbook and saves it to `path`. The write is
/// atomic from the caller's point of view; any failure surfaces as a single
/// error with no partial-file cleanup to do.
pub fn export_workbook(
    path: &str,
    model: &StoredModel,
    summary: &CostSummary,
    options: &ExportOptions,
) -> Result<(), WorkbookError> {
    let mut workbook = Workbook::new();

    if options.include_executive_summary {
        write_executive_summary(&mut workbook, summary, options)?;
    }
    if options.include_rates {
        write_team_rates(&mut workbook, model, options)?;
    }
    if options.include_phase_details {
        write_phase_details(&mut workbook, model, options)?;
    }
    if options.include_cost_breakdown {
        write_cost_breakdown(&mut workbook, summary, options)?;
    }
    if options.include_additional_costs && !model.inputs.additional_costs.is_empty() {
        write_additional_costs(&mut workbook, model, options)?;
    }
    if options.include_scenarios {
        write_scenario_comparison(&mut workbook, model, options)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// A1-style reference for a zero-based row/column pair. Formulas are always
/// generated from the indices rows were actually written at, never from
/// hard-coded cell literals.
fn cell_ref(row: u32, col: u16) -> String {
    // Only the first 26 columns occur in these sheets.
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

fn title_format() -> Format {
    Format::new().set_bold()
}

fn write_title(
    sheet: &mut Worksheet,
    row: u32,
    title: &str,
    options: &ExportOptions,
) -> Result<(), XlsxError> {
    if options.add_formatting {
        sheet.write_string_with_format(row, 0, title, &title_format())?;
    } else {
        sheet.write_string(row, 0, title)?;
    }
    Ok(())
}

fn write_optional_number(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<(), XlsxError> {
    match value {
        Some(value) => {
            sheet.write_number(row, col, value)?;
        }
        None => {
            sheet.write_string(row, col, "N/A")?;
        }
    }
    Ok(())
}

fn write_executive_summary(
    workbook: &mut Workbook,
    summary: &CostSummary,
    options: &ExportOptions,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Executive Summary")?;

    write_title(sheet, 0, "RFP PROJECT COST MODEL - EXECUTIVE SUMMARY", options)?;
    sheet.write_string(1, 0, "Generated:")?;
    sheet.write_string(1, 1, &Local::now().date_naive().to_string())?;

    write_title(sheet, 3, "KEY METRICS", options)?;
    sheet.write_string(4, 0, "Total Project Cost:")?;
    sheet.write_number(4, 1, summary.total_cost)?;
    sheet.write_string(5, 0, "Total Project Hours:")?;
    sheet.write_number(5, 1, summary.total_hours)?;
    sheet.write_string(6, 0, "Project Duration (months):")?;
    sheet.write_number(6, 1, summary.total_duration_months)?;
    sheet.write_string(7, 0, "Average Monthly Cost:")?;
    write_optional_number(sheet, 7, 1, summary.average_monthly_cost)?;

    write_title(sheet, 9, "COST BREAKDOWN", options)?;
    sheet.write_string(10, 0, "Permanent Staff Cost:")?;
    sheet.write_number(10, 1, summary.permanent_staff_cost)?;
    sheet.write_string(11, 0, "Contractor Cost:")?;
    sheet.write_number(11, 1, summary.contractor_cost)?;
    sheet.write_string(12, 0, "Additional Costs:")?;
    sheet.write_number(12, 1, summary.additional_costs_total)?;

    sheet.write_string(14, 0, "GRAND TOTAL:")?;
    if options.include_formulas {
        // Staffing total plus additional costs, referencing the rows above.
        let formula = format!("={}+{}", cell_ref(4, 1), cell_ref(12, 1));
        sheet.write_formula(14, 1, Formula::new(formula))?;
    } else {
        sheet.write_number(14, 1, summary.grand_total)?;
    }

    if options.add_formatting {
        sheet.set_column_width(0, 25)?;
        sheet.set_column_width(1, 20)?;
    }
    Ok(())
}

fn write_team_rates(
    workbook: &mut Workbook,
    model: &StoredModel,
    options: &ExportOptions,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Team Rates")?;

    write_title(sheet, 0, "TEAM HOURLY RATES", options)?;
    sheet.write_string(1, 0, "Role")?;
    sheet.write_string(1, 1, "Rate ($/hour)")?;
    for (index, role) in Role::ALL.iter().enumerate() {
        let row = 2 + index as u32;
        sheet.write_string(row, 0, role.label())?;
        sheet.write_number(row, 1, model.inputs.rates.get(*role))?;
    }

    if options.add_formatting {
        sheet.set_column_width(0, 25)?;
        sheet.set_column_width(1, 15)?;
    }
    Ok(())
}

fn write_phase_details(
    workbook: &mut Workbook,
    model: &StoredModel,
    options: &ExportOptions,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Phase Details")?;

    write_title(sheet, 0, "PHASE UTILIZATION DETAILS", options)?;
    sheet.write_string(1, 0, "Phase")?;
    sheet.write_string(1, 1, "Duration (months)")?;
    for (index, role) in Role::ALL.iter().enumerate() {
        sheet.write_string(1, 2 + index as u16, &format!("{} (%)", role.short_label()))?;
    }

    for (index, phase) in model.inputs.phases.iter().enumerate() {
        let row = 2 + index as u32;
        sheet.write_string(row, 0, &format!("Phase {}", index + 1))?;
        sheet.write_number(row, 1, phase.duration_months)?;
        for (role_index, role) in Role::ALL.iter().enumerate() {
            sheet.write_number(row, 2 + role_index as u16, phase.utilization.get(*role))?;
        }
    }

    if options.add_formatting {
        for col in 0..7 {
            sheet.set_column_width(col, 15)?;
        }
    }
    Ok(())
}

fn write_cost_breakdown(
    workbook: &mut Workbook,
    summary: &CostSummary,
    options: &ExportOptions,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Cost Breakdown")?;

    write_title(sheet, 0, "DETAILED COST BREAKDOWN", options)?;
    sheet.write_string(1, 0, "Phase")?;
    sheet.write_string(1, 1, "Duration")?;
    for (index, role) in Role::ALL.iter().enumerate() {
        sheet.write_string(1, 2 + index as u16, &format!("{} Cost", role.short_label()))?;
    }
    let total_col = 2 + Role::ALL.len() as u16;
    sheet.write_string(1, total_col, "Phase Total")?;

    let first_phase_row = 2;
    let mut row = first_phase_row;
    for phase in &summary.phase_breakdown {
        sheet.write_string(row, 0, &phase.name)?;
        sheet.write_string(row, 1, &format!("{} months", phase.duration_months))?;
        for (role_index, role) in Role::ALL.iter().enumerate() {
            sheet.write_number(row, 2 + role_index as u16, phase.role_costs.get(*role))?;
        }
        if options.include_formulas {
            let terms: Vec<String> = (0..Role::ALL.len())
                .map(|role_index| cell_ref(row, 2 + role_index as u16))
                .collect();
            sheet.write_formula(row, total_col, Formula::new(format!("={}", terms.join("+"))))?;
        } else {
            sheet.write_number(row, total_col, phase.total)?;
        }
        row += 1;
    }

    // Totals row.
    sheet.write_string(row, 0, "TOTALS")?;
    sheet.write_string(row, 1, &format!("{} months", summary.total_duration_months))?;
    for (role_index, role) in Role::ALL.iter().enumerate() {
        let role_total: f64 = summary
            .phase_breakdown
            .iter()
            .map(|phase| phase.role_costs.get(*role))
            .sum();
        sheet.write_number(row, 2 + role_index as u16, role_total)?;
    }
    if options.include_formulas {
        let formula = format!(
            "=SUM({}:{})",
            cell_ref(first_phase_row, total_col),
            cell_ref(row - 1, total_col)
        );
        sheet.write_formula(row, total_col, Formula::new(formula))?;
    } else {
        sheet.write_number(row, total_col, summary.total_cost)?;
    }

    if options.add_formatting {
        for col in 0..=total_col {
            sheet.set_column_width(col, 15)?;
        }
    }
    Ok(())
}

fn write_additional_costs(
    workbook: &mut Workbook,
    model: &StoredModel,
    options: &ExportOptions,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Additional Costs")?;

    write_title(sheet, 0, "ADDITIONAL COSTS & REVENUE STREAMS", options)?;
    sheet.write_string(1, 0, "Item")?;
    sheet.write_string(1, 1, "Amount")?;
    sheet.write_string(1, 2, "Frequency")?;
    sheet.write_string(1, 3, "Total (24 months)")?;

    let mut row = 2;
    let mut total = 0.0;
    for item in &model.inputs.additional_costs {
        let item_total = normalized_item_total(item);
        sheet.write_string(row, 0, &item.description)?;
        sheet.write_number(row, 1, item.amount)?;
        sheet.write_string(row, 2, item.frequency.label())?;
        sheet.write_number(row, 3, item_total)?;
        total += item_total;
        row += 1;
    }

    sheet.write_string(row, 0, "TOTAL ADDITIONAL COSTS")?;
    if options.include_formulas {
        let formula = format!("=SUM({}:{})", cell_ref(2, 3), cell_ref(row - 1, 3));
        sheet.write_formula(row, 3, Formula::new(formula))?;
    } else {
        sheet.write_number(row, 3, total)?;
    }

    if options.add_formatting {
        sheet.set_column_width(0, 30)?;
        sheet.set_column_width(1, 15)?;
        sheet.set_column_width(2, 15)?;
        sheet.set_column_width(3, 20)?;
    }
    Ok(())
}

/// Total staffing cost with a preset's utilization applied to a copy of the
/// model's phases; rates and durations come from the model itself.
fn scenario_total_cost(model: &StoredModel, name: PresetName) -> f64 {
    let mut inputs = model.inputs.clone();
    apply_preset(&mut inputs.phases, &preset(name));
    compute_cost_model(&inputs).total_cost
}

fn write_scenario_comparison(
    workbook: &mut Workbook,
    model: &StoredModel,
    options: &ExportOptions,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Scenario Comparison")?;

    write_title(sheet, 0, "SCENARIO COMPARISON", options)?;
    sheet.write_string(1, 0, "Metric")?;
    for (index, name) in options.selected_scenarios.iter().enumerate() {
        sheet.write_string(1, 1 + index as u16, name.label())?;
    }

    sheet.write_string(2, 0, "Total Cost")?;
    if options.selected_scenarios.is_empty() {
        sheet.write_string(2, 1, "N/A")?;
    } else {
        for (index, name) in options.selected_scenarios.iter().enumerate() {
            sheet.write_number(2, 1 + index as u16, scenario_total_cost(model, *name))?;
        }
    }

    if options.add_formatting {
        sheet.set_column_width(0, 20)?;
        for index in 0..options.selected_scenarios.len().max(1) {
            sheet.set_column_width(1 + index as u16, 15)?;
        }
    }
    Ok(())
}
