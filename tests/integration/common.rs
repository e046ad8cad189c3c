use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use sevenza_shim::config::CONFIG_FILE_NAME;
#[cfg(unix)]
use sevenza_shim::dispatch::TARGET_FILE_NAME;

pub fn binary_path() -> PathBuf {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_7za"));
    if raw.is_absolute() {
        return raw;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(raw)
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);
static EXEC_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that write and then execute files, so no other test
/// thread forks while one of those files is still open for writing.
pub fn exec_lock() -> MutexGuard<'static, ()> {
    EXEC_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Copy the built wrapper into `dir` as `7za`, returning its path.
pub fn install_wrapper(dir: &Path) -> PathBuf {
    let wrapper = dir.join(format!("7za{}", std::env::consts::EXE_SUFFIX));
    fs::copy(binary_path(), &wrapper).expect("failed to copy wrapper binary");
    wrapper
}

/// Stub target that prints `$0` and each argument on its own line, then
/// exits with `code`.
#[cfg(unix)]
pub fn install_stub_target(dir: &Path, code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let target = dir.join(TARGET_FILE_NAME);
    let script = format!(
        "#!/bin/sh\nfor a in \"$0\" \"$@\"; do printf '%s\\n' \"$a\"; done\nexit {code}\n"
    );
    fs::write(&target, script).unwrap();
    fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();
    target
}

pub fn write_sidecar(dir: &Path, json: &str) {
    fs::write(dir.join(CONFIG_FILE_NAME), json).unwrap();
}

pub fn run_wrapper(wrapper: &Path, args: &[&str]) -> Output {
    Command::new(wrapper)
        .args(args)
        .output()
        .expect("failed to run wrapper")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
