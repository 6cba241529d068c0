use env_logger::{Builder, Env, Target};
use log::SetLoggerError;
use std::io::Write;

/// Installs the process logger. Level comes from `RUST_LOG` (default `info`).
///
/// Output goes to stderr so it never interleaves with the widget frame drawn
/// on stdout.
pub fn init_logging() -> Result<(), SetLoggerError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stderr);
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            buf.timestamp(),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()
}
