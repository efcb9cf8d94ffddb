use crate::config::Config;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// File the fake ralph scripts append their arguments to.
pub(crate) const INVOCATION_LOG: &str = "ralph-invocations.log";

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A repository with a single commit on `main`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = create_empty_repo();
    let path = temp_dir.path();

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// A freshly initialised repository whose `main` branch is still unborn.
pub(crate) fn create_empty_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    temp_dir
}

/// Install stand-ins for `ralph plan` and `ralph run` in `root`.
///
/// The returned config uses `sh` as the ralph command, so `sh plan ...` and
/// `sh run ...` execute the `plan` and `run` scripts from the project root.
/// Each script appends its name and arguments (one per line) to
/// [`INVOCATION_LOG`] and then exits with `exit_code`.
pub(crate) fn install_fake_ralph(root: &Path, exit_code: i32) -> Config {
    for name in ["plan", "run"] {
        let script = format!(
            "printf '%s\\n' \"$0\" \"$@\" >> {}\nexit {}\n",
            INVOCATION_LOG, exit_code
        );
        std::fs::write(root.join(name), script).unwrap();
    }

    Config {
        ralph_command: "sh".to_string(),
        ..Config::default()
    }
}

/// Lines recorded by the fake ralph scripts, or `None` if they never ran.
pub(crate) fn recorded_invocation(root: &Path) -> Option<Vec<String>> {
    std::fs::read_to_string(root.join(INVOCATION_LOG))
        .ok()
        .map(|log| log.lines().map(str::to_string).collect())
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
