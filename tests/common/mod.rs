use assert_cmd::Command;
use assert_cmd::assert::Assert;
use assert_cmd::cargo_bin;

/// Runs the binary with `lines` fed to stdin, one answer per line.
pub fn run_with_answers(args: &[&str], lines: &[&str]) -> Assert {
    let mut stdin = lines.join("\n");
    if !lines.is_empty() {
        stdin.push('\n');
    }

    Command::new(cargo_bin!("payfactory"))
        .args(args)
        .write_stdin(stdin)
        .assert()
}
