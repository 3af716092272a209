pub mod cost_model;
pub mod json_export;
pub mod model_yaml;
pub mod pl_analysis;
pub mod pl_workbook;
pub mod pl_yaml;
pub mod scenario_estimate;
pub mod workbook;
