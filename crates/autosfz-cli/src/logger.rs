//! Logger setup for the CLI.

use log::Level;
use std::io::Write;

/// Initialize the logger (logs to stderr)
///
/// Info records are printed as-is, everything else gets a `[LEVEL]`
/// prefix. The default level is Info, overridable via RUST_LOG. Progress
/// lines do not go through here; `main` prints them to stdout.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            if record.level() == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
        })
        .init();
}
