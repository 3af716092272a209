use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn apply_scenario_overwrites_utilization_but_not_durations() {
    let temp = assert_fs::TempDir::new().unwrap();
    let model_path = temp.child("model.yaml");
    let model_arg = model_path.path().to_str().unwrap().to_string();

    let mut init = assert_cmd::cargo_bin_cmd!("rfpcost");
    init.args(["init", "-o", &model_arg]);
    init.assert().success();

    let before = std::fs::read_to_string(&model_arg).unwrap();
    assert!(before.contains("duration_months: 8"));
    assert!(!before.contains("applied_preset"));

    let mut apply = assert_cmd::cargo_bin_cmd!("rfpcost");
    apply.args(["apply-scenario", "-i", &model_arg, "-s", "aggressive"]);
    apply
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied Aggressive utilization preset"));

    let after = std::fs::read_to_string(&model_arg).unwrap();
    // Durations and rates survive, the preset is recorded, utilization moved.
    assert!(after.contains("duration_months: 8"));
    assert!(after.contains("manager: 165"));
    assert!(after.contains("applied_preset: aggressive"));
    assert!(after.contains("manager: 75"));
}

#[test]
fn compute_with_scenario_flag_leaves_the_model_file_untouched() {
    let temp = assert_fs::TempDir::new().unwrap();
    let model_path = temp.child("model.yaml");
    let model_arg = model_path.path().to_str().unwrap().to_string();

    let mut init = assert_cmd::cargo_bin_cmd!("rfpcost");
    init.args(["init", "-o", &model_arg]);
    init.assert().success();
    let before = std::fs::read_to_string(&model_arg).unwrap();

    let mut compute = assert_cmd::cargo_bin_cmd!("rfpcost");
    compute.args(["compute", "-i", &model_arg, "-s", "conservative"]);
    compute
        .assert()
        .success()
        .stdout(predicate::str::contains("total_cost:"));

    let after = std::fs::read_to_string(&model_arg).unwrap();
    assert_eq!(before, after);
}
