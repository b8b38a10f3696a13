//! Progress display for tile export

use crate::io::configuration::{PROGRESS_CHARS, PROGRESS_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS)
});

/// Progress bar counting written tiles
///
/// A hidden bar still counts, so callers never branch on visibility.
pub struct SliceProgress {
    bar: ProgressBar,
}

impl SliceProgress {
    /// Create a bar for `total` tiles, drawn on stderr only when `visible`
    pub fn new(total: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(total)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(total);
        bar.set_style(TILE_STYLE.clone());

        Self { bar }
    }

    /// Create a bar that never draws
    pub fn hidden(total: u64) -> Self {
        Self::new(total, false)
    }

    /// Record one written tile
    pub fn tile_saved(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar.set_message(name);
        self.bar.inc(1);
    }

    /// Number of tiles recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of tiles expected
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
