use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Process creation seam. `argv[0]` is what the child should see as its
/// own name; `argv[1..]` are its arguments.
pub trait Spawner {
    /// Start `program`, block until it exits and return its exit code.
    fn spawn_and_wait(&self, program: &Path, argv: &[OsString]) -> io::Result<i32>;
}

impl<S: Spawner + ?Sized> Spawner for &S {
    fn spawn_and_wait(&self, program: &Path, argv: &[OsString]) -> io::Result<i32> {
        (**self).spawn_and_wait(program, argv)
    }
}

/// Spawns real OS processes, inheriting stdin/stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn_and_wait(&self, program: &Path, argv: &[OsString]) -> io::Result<i32> {
        let mut cmd = Command::new(program);
        if let Some((arg0, rest)) = argv.split_first() {
            set_arg0(&mut cmd, arg0);
            cmd.args(rest);
        }
        let status = cmd.status()?;
        Ok(exit_code(status))
    }
}

#[cfg(unix)]
fn set_arg0(cmd: &mut Command, arg0: &OsString) {
    use std::os::unix::process::CommandExt;
    cmd.arg0(arg0);
}

// Windows builds argv[0] from the program path, which is already the target.
#[cfg(not(unix))]
fn set_arg0(_cmd: &mut Command, _arg0: &OsString) {}

/// Child exit code; on Unix a signal death maps to the shell's `128 + signo`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
