use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn two_spot_scenario_through_stdin() {
    let mut cmd = cargo_bin_cmd!("parkotron");
    cmd.args(["--batch", "-n", "2"]).write_stdin(
        "park ABC\n\
         park XYZ\n\
         park QQQ\n\
         release 1\n\
         park QQQ\n\
         find XYZ\n\
         find ZZZ\n\
         available\n",
    );

    cmd.assert().success().stdout(
        "Vehicle parked successfully at spot 1\n\
         Vehicle parked successfully at spot 2\n\
         error: No available spots. Parking lot is full.\n\
         Spot 1 released successfully.\n\
         Vehicle parked successfully at spot 1\n\
         Vehicle with license plate XYZ is parked at spot 2.\n\
         No vehicle with license plate ZZZ found in the parking lot.\n\
         No available spots.\n",
    );
}

#[test]
fn invalid_release_input_is_reported() {
    let mut cmd = cargo_bin_cmd!("parkotron");
    cmd.args(["--batch", "-n", "60"])
        .write_stdin("release abc\nrelease 0\nrelease 61\nrelease 60\n");

    cmd.assert().success().stdout(
        "error: Please enter a valid spot ID.\n\
         error: Please enter a spot ID between 1 and 60.\n\
         error: Please enter a spot ID between 1 and 60.\n\
         Spot 60 released successfully.\n",
    );
}

#[test]
fn config_file_sets_capacity() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("lot.toml");
    fs::write(&config, "capacity = 3\ntitle = \"Annex\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("parkotron");
    cmd.arg("--batch")
        .arg("--config")
        .arg(&config)
        .write_stdin("available\n");

    cmd.assert()
        .success()
        .stdout("Available spots: [1, 2, 3]\n");
}

#[test]
fn capacity_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("lot.toml");
    fs::write(&config, "capacity = 3\n").unwrap();

    let mut cmd = cargo_bin_cmd!("parkotron");
    cmd.args(["--batch", "-n", "1", "--config"])
        .arg(&config)
        .write_stdin("available\n");

    cmd.assert().success().stdout("Available spots: [1]\n");
}

#[test]
fn zero_capacity_is_rejected() {
    let mut cmd = cargo_bin_cmd!("parkotron");
    cmd.args(["--batch", "-n", "0"]).write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Capacity must be at least 1"));
}

#[test]
fn missing_config_file_is_an_error() {
    let mut cmd = cargo_bin_cmd!("parkotron");
    cmd.args(["--batch", "--config", "definitely-not-here.toml"])
        .write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn dump_prints_json_snapshot() {
    let mut cmd = cargo_bin_cmd!("parkotron");
    cmd.args(["--batch", "-n", "2", "--title", "Test Lot"])
        .write_stdin("park ABC\ndump\n");

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    let json = text
        .strip_prefix("Vehicle parked successfully at spot 1\n")
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["title"], "Test Lot");
    assert_eq!(value["available"], serde_json::json!([2]));
    assert_eq!(value["spots"][0]["occupant"], "ABC");
}

#[test]
fn help_mentions_batch_flag() {
    let mut cmd = cargo_bin_cmd!("parkotron");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--batch"))
        .stdout(predicate::str::contains("--capacity"));
}
