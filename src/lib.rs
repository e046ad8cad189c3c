pub mod config;
pub mod dispatch;
pub mod errors;
pub mod extensions;
pub mod logging;
