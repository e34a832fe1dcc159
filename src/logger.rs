use log::LevelFilter;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Default diagnostic level for the given flags. `--quiet` wins over `--verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Sets up `env_logger` on stderr and records the quiet flag for [`report!`].
/// `RUST_LOG` still overrides the level picked from the flags.
pub fn init(verbose: bool, quiet: bool) {
    set_quiet_mode(quiet);

    let default_level = level_for(verbose, quiet).to_string().to_lowercase();
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .format_target(false)
    .try_init();
}

/// User-facing report line on stdout, suppressed by `--quiet`.
#[macro_export]
macro_rules! report {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            println!($($arg)*);
        }
    };
}
