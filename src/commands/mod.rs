pub mod apply_scenario_cmd;
pub mod base_commands;
pub mod compute_cmd;
pub mod estimate_cmd;
pub mod export_json_cmd;
pub mod export_pl_xlsx_cmd;
pub mod export_xlsx_cmd;
pub mod import_json_cmd;
pub mod init_cmd;
pub mod pl_cmd;
