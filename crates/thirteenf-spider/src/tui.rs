use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner for the current step; hidden when not running as a tui.
pub(crate) fn spinner(tui: bool, msg: String) -> ProgressBar {
    match tui {
        true => {
            let pb = ProgressBar::new_spinner().with_message(msg).with_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.magenta} {msg} [{elapsed_precise:.magenta}]")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        }
        false => ProgressBar::hidden(),
    }
}
