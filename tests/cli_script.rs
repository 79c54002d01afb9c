mod common;

use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn script_mode_runs_complete_workflow() {
    let (mut cmd, _home) = common::script_command();
    let script = "\
budget add 5000
savings add 1500
set 1 1500
set utilities 200
set groceries 600
set transportation 150
set entertainment 100
show json
exit
";
    cmd.write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains(r#""budget": "$5000.00""#)
                .and(contains(r#""expenses": "$2550.00""#))
                .and(contains(r#""balance": "$2450.00""#))
                .and(contains(r#""savings": "$1500.00""#)),
        );
}

#[test]
fn scripted_prompt_answers_drive_add_buttons() {
    let (mut cmd, _home) = common::script_command();
    cmd.env("SPENDCHART_TEST_PROMPT_INPUTS", "3000|<CANCEL>")
        .write_stdin("budget add\nsavings add\nset rent 1200\nset groceries 500\nshow json\nexit\n")
        .assert()
        .success()
        .stdout(
            contains(r#""budget": "$3000.00""#)
                .and(contains(r#""balance": "$1300.00""#))
                .and(contains(r#""savings": "$0.00""#))
                .and(contains("No amount entered; savings unchanged.")),
        );
}

#[test]
fn every_edit_re_renders_the_display() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("set rent 1200\nset groceries 500\nset transportation 200\n")
        .assert()
        .success()
        .stdout(
            contains("Total Expenses")
                .and(contains("$1200.00"))
                .and(contains("$1700.00"))
                .and(contains("$1900.00")),
        );
}

#[test]
fn invalid_amounts_leave_totals_untouched() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget add lots\nbudget add -20\nshow json\n")
        .assert()
        .success()
        .stdout(
            contains("`lots` is not a valid amount; budget unchanged.")
                .and(contains(r#""budget": "$0.00""#)),
        );
}

#[test]
fn missing_prompt_in_script_mode_is_reported() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget add\nexit\n")
        .assert()
        .success()
        .stdout(contains("No prompt available in script mode"));
}

#[test]
fn unknown_commands_get_suggestions() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("shw\nset coffee 4\nexit\n")
        .assert()
        .success()
        .stdout(
            contains("Suggestion: `show`?").and(contains("Unknown expense item `coffee`")),
        );
}

#[test]
fn reset_discards_all_figures() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget add 100\nset rent 40\nreset\nshow json\n")
        .assert()
        .success()
        .stdout(
            contains("All figures reset.")
                .and(contains(r#""budget": "$0.00""#))
                .and(contains(r#""expenses": "$0.00""#)),
        );
}

#[test]
fn config_changes_are_persisted() {
    let (mut cmd, home) = common::script_command();
    cmd.write_stdin("config set confirm_exit off\nexit\n")
        .assert()
        .success()
        .stdout(contains("Setting `confirm_exit` updated."));

    let saved = std::fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(saved.contains(r#""confirm_exit": false"#));
}

#[test]
fn budget_adds_past_the_decimal_limit_keep_the_shell_alive() {
    let (mut cmd, _home) = common::script_command();
    cmd.write_stdin("budget add 79228162514264337593543950335\nbudget add 1\nset rent 1e29\nshow json\nexit\n")
        .assert()
        .success()
        .stdout(
            contains(r#""budget": "$79228162514264337593543950335.00""#)
                .and(contains(r#""expenses": "$79228162514264337593543950335.00""#))
                .and(contains(r#""balance": "$0.00""#)),
        );
}
