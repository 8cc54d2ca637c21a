use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;

/// Install the stderr log subscriber. Stdout stays reserved for replies.
pub(crate) fn init(debug: bool, use_color: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(use_color && std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
