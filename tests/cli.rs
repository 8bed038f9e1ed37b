use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_outline_palette_generator"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_default_output() {
    let output = run(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "<array name=\"add_edit_badge_dialog_outline_colors\">");
    assert_eq!(lines[1], "    <item>#ff0000</item>");
    assert_eq!(lines[6], "    <item>#feff00</item>");
    assert_eq!(lines[30], "    <item>#ff0032</item>");
    assert_eq!(lines[31], "</array>");
    assert!(stdout.ends_with("</array>\n"));
}

#[test]
fn test_output_is_idempotent() {
    assert_eq!(run(&[]).stdout, run(&[]).stdout);
}

#[test]
fn test_arguments_rejected() {
    for args in [vec!["--count", "3"], vec!["-c", "3"], vec!["3"]] {
        let output = run(&args);
        assert!(!output.status.success(), "{:?} was accepted", args);
        assert!(output.stdout.is_empty(), "{:?} produced output", args);
    }
}

#[test]
fn test_log_level_does_not_change_output() {
    let quiet = run(&[]);
    let verbose = Command::new(env!("CARGO_BIN_EXE_outline_palette_generator"))
        .env("RUST_LOG", "trace")
        .output()
        .unwrap();
    assert!(verbose.status.success());
    assert_eq!(quiet.stdout, verbose.stdout);
}
