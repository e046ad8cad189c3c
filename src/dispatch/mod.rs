//! The dispatcher: find the sibling target, forward the caller's arguments
//! plus the exclusion flags, wait for the child and hand back its exit code.

pub mod path;
pub mod spawner;

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::config::models::BareNameResolution;
use crate::dispatch::path::{build_argv, resolve_target_path};
use crate::dispatch::spawner::Spawner;
use crate::errors::{Error, Result};
use crate::logging::Logger;

/// File name of the real executable, expected beside the wrapper.
#[cfg(windows)]
pub const TARGET_FILE_NAME: &str = "7za-original.exe";
#[cfg(not(windows))]
pub const TARGET_FILE_NAME: &str = "7za-original";

/// Appended after every forwarded argument, in this order.
pub const EXCLUSION_FLAGS: [&str; 2] = ["-xr!darwin", "-xr!linux"];

/// Exit code used when the target could not be started at all.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// What will be launched: the program path and the argv it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub target: PathBuf,
    pub argv: Vec<OsString>,
}

#[derive(Debug)]
pub struct Dispatcher<S> {
    bare_name: BareNameResolution,
    spawner: S,
    logger: Logger,
}

impl<S: Spawner> Dispatcher<S> {
    pub fn new(bare_name: BareNameResolution, spawner: S) -> Self {
        Self {
            bare_name,
            spawner,
            logger: Logger::new(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Build the invocation from the wrapper's full argv (program name first).
    pub fn plan<I, A>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let invocation = args.next().unwrap_or_default();
        let target =
            resolve_target_path(OsStr::new(&invocation), TARGET_FILE_NAME, self.bare_name);
        let argv = build_argv(&target, args, &EXCLUSION_FLAGS);
        Invocation { target, argv }
    }

    /// Spawn the target and wait for it. The only error is a failed spawn.
    pub fn try_run<I, A>(&self, args: I) -> Result<i32>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        let Invocation { target, argv } = self.plan(args);
        self.logger
            .info(format!("spawning {} with {:?}", target.display(), &argv[1..]));

        let code = self
            .spawner
            .spawn_and_wait(&target, &argv)
            .map_err(|source| Error::spawn(&target, source))?;

        self.logger
            .info(format!("{} exited with {code}", target.display()));
        Ok(code)
    }

    /// Like [`Dispatcher::try_run`], but reports a failed spawn on stderr
    /// and maps it to [`FAILURE_EXIT_CODE`].
    pub fn run<I, A>(&self, args: I) -> i32
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        match self.try_run(args) {
            Ok(code) => code,
            Err(err) => {
                self.logger.error(err.to_string());
                FAILURE_EXIT_CODE
            }
        }
    }
}
