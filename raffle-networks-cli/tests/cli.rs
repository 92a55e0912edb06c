//! Black-box tests of the `raffle-networks` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Run the binary in an empty directory so no stray `networks.toml` is
/// picked up.
fn cli(dir: &TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("raffle-networks")?;
    cmd.current_dir(dir.path()).env("RUST_LOG", "warn");
    Ok(cmd)
}

#[test]
fn list_shows_builtin_networks() -> TestResult {
    let dir = tempfile::tempdir()?;
    cli(&dir)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("localhost"))
        .stdout(predicate::str::contains("sepolia"))
        .stdout(predicate::str::contains("0.010000000000000000"));
    Ok(())
}

#[test]
fn show_json_includes_oracle_fields() -> TestResult {
    let dir = tempfile::tempdir()?;
    let output = cli(&dir)?
        .args(["show", "--chain", "11155111", "--json"])
        .output()?;
    assert!(output.status.success(), "show failed: {output:?}");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["name"], "sepolia", "{json}");
    assert_eq!(json["kind"], "oracleBacked", "{json}");
    assert_eq!(json["subscriptionId"], 1060, "{json}");
    Ok(())
}

#[test]
fn show_unknown_chain_fails() -> TestResult {
    let dir = tempfile::tempdir()?;
    cli(&dir)?
        .args(["show", "--chain", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown network: chain ID 1"));
    Ok(())
}

#[test]
fn oracle_on_local_network_fails() -> TestResult {
    let dir = tempfile::tempdir()?;
    cli(&dir)?
        .args(["oracle", "--chain", "31337"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no VRF coordinator configured"));
    Ok(())
}

#[test]
fn oracle_on_sepolia_prints_pair() -> TestResult {
    let dir = tempfile::tempdir()?;
    cli(&dir)?
        .args(["oracle", "--chain", "11155111"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?i)^0x8103B0A8A00be2DDC778e6e7eaa21791Cd364625 1060\n$")?);
    Ok(())
}

#[test]
fn is_dev_classifies_names() -> TestResult {
    let dir = tempfile::tempdir()?;
    for (name, expected) in [("hardhat", "true\n"), ("localhost", "true\n"), ("sepolia", "false\n")] {
        cli(&dir)?.args(["is-dev", name]).assert().success().stdout(expected);
    }
    Ok(())
}

#[test]
fn default_table_file_is_used() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("networks.toml"),
        r#"
developmentChains = ["anvil"]

[networkConfig.31337]
name = "anvil"
entranceFee = "0.1 ether"
gasLane = "0x8af398995b04c28e9951adb9721ef74c74f93e6a478f39e7e0777be13527e7ef"
callbackGasLimit = 100000
interval = 10
"#,
    )?;
    cli(&dir)?.args(["is-dev", "anvil"]).assert().success().stdout("true\n");
    cli(&dir)?.args(["is-dev", "hardhat"]).assert().success().stdout("false\n");
    Ok(())
}

#[test]
fn check_rejects_zero_entrance_fee() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{
            "networkConfig": {
                "11155111": {
                    "name": "sepolia",
                    "vrfCoordinatorV2": "0x8103B0A8A00be2DDC778e6e7eaa21791Cd364625",
                    "entranceFee": "0",
                    "gasLane": "0x474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c",
                    "subscriptionId": "1060",
                    "callbackGasLimit": "500000",
                    "interval": "30"
                }
            },
            "developmentChains": ["hardhat", "localhost"]
        }"#,
    )?;
    cli(&dir)?
        .arg("--table")
        .arg(&path)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entranceFee must be positive"));
    Ok(())
}

#[test]
fn check_accepts_builtin_table() -> TestResult {
    let dir = tempfile::tempdir()?;
    cli(&dir)?
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 network(s), 1 with a live VRF coordinator"));
    Ok(())
}

#[test]
fn missing_table_file_fails() -> TestResult {
    let dir = tempfile::tempdir()?;
    cli(&dir)?
        .args(["--table", "missing.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}
