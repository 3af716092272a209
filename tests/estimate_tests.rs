use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn estimate_with_built_in_defaults_lists_all_scenarios() {
    let temp = assert_fs::TempDir::new().unwrap();
    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.current_dir(temp.path()).arg("estimate");

    // conservative 150*173*8*4, optimistic 175*173*4*6, pessimistic 125*173*12*3
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("name: Conservative"))
        .stdout(predicate::str::contains("total_cost: 830400"))
        .stdout(predicate::str::contains("total_cost: 726600"))
        .stdout(predicate::str::contains("total_cost: 778500"));
}

#[test]
fn estimate_reads_scenarios_from_file() {
    let scenarios_yaml = "conservative: {hourly_rate: 100, duration_months: 10, team_size: 2}
optimistic: {hourly_rate: 200, duration_months: 2, team_size: 5}
pessimistic: {hourly_rate: 100, duration_months: 20, team_size: 2}
";
    let input_file = assert_fs::NamedTempFile::new("scenarios.yaml").unwrap();
    input_file.write_str(scenarios_yaml).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.args(["estimate", "-i", input_file.path().to_str().unwrap()]);

    // 100 * 173 * 10 * 2 = 346000
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("total_cost: 346000"));
}

#[test]
fn estimate_rejects_a_missing_explicit_input_file() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.args(["estimate", "-i", "/nonexistent/scenarios.yaml"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to load scenarios"))
        .stdout(predicate::str::contains("total_cost").not());
}
