use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn tick_help_works() {
    Command::cargo_bin("tick")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("task list"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = ["add", "edit", "rm", "toggle", "show", "list", "theme"];

    for cmd in subcommands {
        Command::cargo_bin("tick")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}
