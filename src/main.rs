mod commands;
mod domain;
mod services;

use crate::commands::apply_scenario_cmd::apply_scenario_command;
use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::compute_cmd::compute_command;
use crate::commands::estimate_cmd::estimate_command;
use crate::commands::export_json_cmd::export_json_command;
use crate::commands::export_pl_xlsx_cmd::export_pl_xlsx_command;
use crate::commands::export_xlsx_cmd::export_xlsx_command;
use crate::commands::import_json_cmd::import_json_command;
use crate::commands::init_cmd::init_command;
use crate::commands::pl_cmd::pl_command;
use clap::{CommandFactory, Parser};

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Init { .. } => init_command(cmd),
        cmd @ Commands::Compute { .. } => compute_command(cmd),
        cmd @ Commands::ApplyScenario { .. } => apply_scenario_command(cmd),
        cmd @ Commands::Estimate { .. } => estimate_command(cmd),
        cmd @ Commands::Pl { .. } => pl_command(cmd),
        cmd @ Commands::ExportJson { .. } => export_json_command(cmd),
        cmd @ Commands::ImportJson { .. } => import_json_command(cmd),
        cmd @ Commands::ExportXlsx { .. } => export_xlsx_command(cmd),
        cmd @ Commands::ExportPlXlsx { .. } => export_pl_xlsx_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
    }
}
