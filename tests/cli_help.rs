use std::process::Command;

#[test]
fn test_help_lists_patch_command() {
    let bin = env!("CARGO_BIN_EXE_airlift");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("patch"), "help should list the patch command; got:\n{}", stdout);
    assert!(
        stdout.contains("Patches can only target releases that already exist on the server."),
        "help should explain the release requirement; got:\n{}",
        stdout
    );
}

#[test]
fn test_patch_help_documents_flags() {
    let bin = env!("CARGO_BIN_EXE_airlift");

    let output = Command::new(bin).args(["patch", "--help"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--release-version", "--channel", "--force", "--dry-run", "--project"] {
        assert!(stdout.contains(flag), "patch help should mention {flag}; got:\n{stdout}");
    }
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let bin = env!("CARGO_BIN_EXE_airlift");

    let output = Command::new(bin).args(["patch", "--bogus"]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}
