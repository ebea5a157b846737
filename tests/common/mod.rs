use assert_cmd::Command;
use tempfile::TempDir;

/// Script-mode command with its own config home.
pub fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cgpa_calc_cli").unwrap();
    cmd.env("CGPA_CALC_CLI_SCRIPT", "1")
        .env("CGPA_CALC_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}
