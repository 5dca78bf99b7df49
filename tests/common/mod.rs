use assert_cmd::Command;
use std::path::Path;

/// Command for the worklane binary, isolated from the caller's environment
/// and running in `dir`.
pub fn worklane_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("worklane").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("WORKLANE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
