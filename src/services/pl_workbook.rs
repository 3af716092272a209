use chrono::Local;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::domain::pl::PlInputs;
use crate::services::pl_analysis::PlSummary;

#[derive(Error, Debug)]
pub enum PlWorkbookError {
    #[error("failed to write P&L workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

pub fn default_pl_xlsx_file_name() -> String {
    format!(
        "PL-Analysis-{}.xlsx",
        Local::now().date_naive().format("%Y-%m-%d")
    )
}

fn write_line(
    sheet: &mut Worksheet,
    row: u32,
    label: &str,
    phase1: f64,
    phase2: f64,
) -> Result<(), XlsxError> {
    sheet.write_string(row, 0, label)?;
    sheet.write_number(row, 1, phase1)?;
    sheet.write_number(row, 2, phase2)?;
    sheet.write_number(row, 3, phase1 + phase2)?;
    Ok(())
}

fn write_margin_line(
    sheet: &mut Worksheet,
    row: u32,
    label: &str,
    phase1_pct: f64,
    phase2_pct: f64,
    total_pct: f64,
) -> Result<(), XlsxError> {
    sheet.write_string(row, 0, label)?;
    sheet.write_string(row, 1, &format!("{phase1_pct:.1}%"))?;
    sheet.write_string(row, 2, &format!("{phase2_pct:.1}%"))?;
    sheet.write_string(row, 3, &format!("{total_pct:.1}%"))?;
    Ok(())
}

/// Writes the original two-phase P&L statement as a single-sheet workbook.
pub fn export_pl_workbook(
    path: &str,
    inputs: &PlInputs,
    summary: &PlSummary,
) -> Result<(), PlWorkbookError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("P&L Analysis")?;

    sheet.write_string(0, 0, "2 Year P&L Analysis")?;
    sheet.write_string(1, 0, "Generated:")?;
    sheet.write_string(1, 1, &Local::now().date_naive().to_string())?;

    sheet.write_string(3, 1, "Phase I")?;
    sheet.write_string(3, 2, "Phase II")?;
    sheet.write_string(3, 3, "Total")?;

    sheet.write_string(5, 0, "REVENUE")?;
    let r1 = &summary.revenue_phase1;
    let r2 = &summary.revenue_phase2;
    write_line(sheet, 6, "Internal User Licenses - Phase I", r1.licenses, 0.0)?;
    write_line(sheet, 7, "External User Licenses - Phase II", 0.0, r2.licenses)?;
    write_line(
        sheet,
        8,
        "Implementation Services Phase I",
        r1.implementation_services,
        0.0,
    )?;
    write_line(
        sheet,
        9,
        "Implementation Services Phase II",
        0.0,
        r2.implementation_services,
    )?;
    write_line(sheet, 10, "Training (split over phases)", r1.training, r2.training)?;
    write_line(
        sheet,
        11,
        "Annual Maintenance",
        r1.annual_maintenance,
        r2.annual_maintenance,
    )?;
    write_line(sheet, 12, "Total Revenue:", summary.phase1.revenue, summary.phase2.revenue)?;

    sheet.write_string(14, 0, "COST OF GOODS SOLD (COGS)")?;
    let c1 = &summary.cogs_phase1;
    let c2 = &summary.cogs_phase2;
    write_line(sheet, 15, "External Users Phase I", c1.external_users, 0.0)?;
    write_line(sheet, 16, "External Users Phase II", 0.0, c2.external_users)?;
    write_line(
        sheet,
        17,
        "Cloud Infrastructure (AWS)",
        c1.cloud_infrastructure,
        c2.cloud_infrastructure,
    )?;
    write_line(
        sheet,
        18,
        "Implementation Tools",
        c1.implementation_tools,
        c2.implementation_tools,
    )?;
    write_line(sheet, 19, "Existing Staff (Phase I)", c1.existing_staff, c2.existing_staff)?;
    write_line(sheet, 20, "New Hires (Phase II)", c1.new_hires, c2.new_hires)?;
    write_line(
        sheet,
        21,
        &format!("Benefits ({:.0}%)", inputs.cogs.benefits_rate * 100.0),
        c1.benefits,
        c2.benefits,
    )?;
    write_line(sheet, 22, "Equipment & Tools", c1.equipment, c2.equipment)?;
    write_line(sheet, 23, "Total COGS:", summary.phase1.cogs, summary.phase2.cogs)?;

    write_line(
        sheet,
        25,
        "GROSS PROFIT:",
        summary.phase1.gross_profit,
        summary.phase2.gross_profit,
    )?;
    write_margin_line(
        sheet,
        26,
        "Gross Margin:",
        summary.phase1.gross_margin_pct,
        summary.phase2.gross_margin_pct,
        summary.combined.gross_margin_pct,
    )?;

    sheet.write_string(28, 0, "OPERATING EXPENSES")?;
    let opex = &inputs.opex;
    write_line(sheet, 29, "Sales & Marketing", opex.sales_marketing, opex.sales_marketing)?;
    write_line(sheet, 30, "General & Administrative", opex.general_admin, opex.general_admin)?;
    write_line(sheet, 31, "Research & Development", opex.research_dev, opex.research_dev)?;
    write_line(
        sheet,
        32,
        "Total Operating Expenses:",
        summary.phase1.opex,
        summary.phase2.opex,
    )?;

    write_line(
        sheet,
        34,
        "NET OPERATING INCOME:",
        summary.phase1.net_income,
        summary.phase2.net_income,
    )?;
    write_margin_line(
        sheet,
        35,
        "Net Margin:",
        summary.phase1.net_margin_pct,
        summary.phase2.net_margin_pct,
        summary.combined.net_margin_pct,
    )?;

    sheet.write_string(37, 0, "Break-even:")?;
    sheet.write_string(37, 1, summary.ratios.break_even.label())?;

    sheet.set_column_width(0, 35)?;
    for col in 1..4 {
        sheet.set_column_width(col, 15)?;
    }

    workbook.save(path)?;
    Ok(())
}
