use crate::commands::base_commands::Commands;
use crate::services::pl_analysis::compute_pl;
use crate::services::pl_workbook::{default_pl_xlsx_file_name, export_pl_workbook};
use crate::services::pl_yaml::{
    DEFAULT_PL_FILE, load_pl_inputs_from_yaml_file, load_pl_inputs_or_default,
};

pub fn export_pl_xlsx_command(cmd: Commands) {
    if let Commands::ExportPlXlsx { input, output } = cmd {
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
        let path = output.unwrap_or_else(default_pl_xlsx_file_name);

        if let Err(e) = export_pl_workbook(&path, &inputs, &summary) {
            eprintln!("Failed to export P&L workbook: {e:?}");
        } else {
            println!("P&L workbook written to {path}");
        }
    }
}
