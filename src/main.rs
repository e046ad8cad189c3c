use std::ffi::OsString;

use sevenza_shim::config::ShimConfig;
use sevenza_shim::dispatch::spawner::ProcessSpawner;
use sevenza_shim::dispatch::{Dispatcher, FAILURE_EXIT_CODE};
use sevenza_shim::logging::Logger;

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();
    let logger = Logger::new();

    // The sidecar sits beside the real executable, wherever argv[0] points.
    let config = match std::env::current_exe() {
        Ok(exe) => ShimConfig::load_beside(&exe),
        Err(_) => Ok(ShimConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            logger.error(err.to_string());
            std::process::exit(FAILURE_EXIT_CODE);
        }
    };

    let code = Dispatcher::new(config.bare_name_resolution, ProcessSpawner)
        .with_logger(logger)
        .run(args);
    std::process::exit(code);
}
