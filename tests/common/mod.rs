use assert_cmd::Command;
use tempfile::TempDir;

/// Builds a script-mode `spendchart` command isolated in its own home dir.
///
/// The returned `TempDir` must outlive the command run.
pub fn script_command() -> (Command, TempDir) {
    let home = TempDir::new().expect("create temp home");
    let mut cmd = Command::cargo_bin("spendchart").expect("binary built");
    cmd.env("SPENDCHART_CLI_SCRIPT", "1")
        .env("SPENDCHART_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("SPENDCHART_TEST_PROMPT_INPUTS");
    (cmd, home)
}
