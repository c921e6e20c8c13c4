use assert_cmd::Command;

pub fn twoslashify_cmd() -> Command {
    let mut cmd = Command::cargo_bin("twoslashify").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
