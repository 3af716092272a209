use assert_fs::prelude::*;
use predicates::prelude::*;

fn write_default_model(temp: &assert_fs::TempDir) -> String {
    let model_path = temp.child("model.yaml");
    let model_arg = model_path.path().to_str().unwrap().to_string();
    let mut init = assert_cmd::cargo_bin_cmd!("rfpcost");
    init.args(["init", "-o", &model_arg]);
    init.assert().success();
    model_arg
}

#[test]
fn export_json_round_trips_model_inputs() {
    let temp = assert_fs::TempDir::new().unwrap();
    let model_arg = write_default_model(&temp);
    let json_path = temp.child("export.json");
    let json_arg = json_path.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.args(["export-json", "-i", &model_arg, "-o", &json_arg]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("JSON export written to"));

    let json = std::fs::read_to_string(&json_arg).unwrap();
    let document: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(document["rates"]["manager"], 165.0);
    assert_eq!(document["phases"][0]["duration_months"], 8.0);
    assert!(document["exportDate"].is_string());
    assert!(document["calculations"]["grand_total"].is_number());
}

#[test]
fn import_json_rebuilds_the_model_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let model_arg = write_default_model(&temp);
    let json_path = temp.child("export.json");
    let json_arg = json_path.path().to_str().unwrap().to_string();
    let imported_path = temp.child("imported.yaml");
    let imported_arg = imported_path.path().to_str().unwrap().to_string();

    let mut export = assert_cmd::cargo_bin_cmd!("rfpcost");
    export.args(["export-json", "-i", &model_arg, "-o", &json_arg]);
    export.assert().success();

    let mut import = assert_cmd::cargo_bin_cmd!("rfpcost");
    import.args(["import-json", "-i", &json_arg, "-o", &imported_arg]);
    import
        .assert()
        .success()
        .stdout(predicate::str::contains("Model written to"));

    // The rebuilt model matches the original byte for byte.
    let original = std::fs::read_to_string(&model_arg).unwrap();
    let imported = std::fs::read_to_string(&imported_arg).unwrap();
    assert_eq!(imported, original);
}

#[test]
fn import_json_rejects_a_malformed_export() {
    let temp = assert_fs::TempDir::new().unwrap();
    let json_path = temp.child("export.json");
    json_path.write_str("{\"rates\": 5}").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.current_dir(temp.path());
    cmd.args(["import-json", "-i", json_path.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to parse JSON export"));
}

#[test]
fn export_xlsx_writes_a_workbook() {
    let temp = assert_fs::TempDir::new().unwrap();
    let model_arg = write_default_model(&temp);
    let xlsx_path = temp.child("model.xlsx");
    let xlsx_arg = xlsx_path.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.args(["export-xlsx", "-i", &model_arg, "-o", &xlsx_arg, "--scenarios"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Workbook written to"));

    xlsx_path.assert(predicate::path::exists());
    assert!(std::fs::metadata(&xlsx_arg).unwrap().len() > 0);
}

#[test]
fn export_xlsx_succeeds_without_additional_cost_items() {
    let temp = assert_fs::TempDir::new().unwrap();
    let model_arg = write_default_model(&temp);
    let xlsx_path = temp.child("no-additional.xlsx");
    let xlsx_arg = xlsx_path.path().to_str().unwrap().to_string();

    // The default model has no additional cost items; the sheet is skipped.
    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.args(["export-xlsx", "-i", &model_arg, "-o", &xlsx_arg, "--no-formulas"]);
    cmd.assert().success();
    xlsx_path.assert(predicate::path::exists());
}

#[test]
fn export_pl_xlsx_writes_a_workbook() {
    let temp = assert_fs::TempDir::new().unwrap();
    let xlsx_path = temp.child("pl.xlsx");
    let xlsx_arg = xlsx_path.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.current_dir(temp.path());
    cmd.args(["export-pl-xlsx", "-o", &xlsx_arg]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("P&L workbook written to"));

    xlsx_path.assert(predicate::path::exists());
}

#[test]
fn export_pl_xlsx_rejects_a_malformed_explicit_input() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input_path = temp.child("pl.yaml");
    input_path.write_str("not: [valid").unwrap();
    let xlsx_path = temp.child("pl.xlsx");

    let mut cmd = assert_cmd::cargo_bin_cmd!("rfpcost");
    cmd.args([
        "export-pl-xlsx",
        "-i",
        input_path.path().to_str().unwrap(),
        "-o",
        xlsx_path.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to load P&L inputs"));
    xlsx_path.assert(predicate::path::missing());
}
