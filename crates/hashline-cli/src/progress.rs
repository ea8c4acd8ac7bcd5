use anyhow::Result;
use hashline_core::Progress;
use indicatif::{ProgressBar, ProgressStyle};

/// Redraw at most this many times over a whole digest.
const REDRAWS: u64 = 256;

/// Block progress drawn as a bar on stderr.
pub struct BarProgress {
    bar: ProgressBar,
    step: u64,
}

impl BarProgress {
    pub fn new(total_blocks: u64) -> Result<Self> {
        Self::with_bar(ProgressBar::new(total_blocks), total_blocks)
    }

    fn with_bar(bar: ProgressBar, total_blocks: u64) -> Result<Self> {
        bar.set_style(
            ProgressStyle::with_template("[{bar:50}] {percent:>3}% {pos}/{len} blocks")?
                .progress_chars("=>-"),
        );
        Ok(Self {
            bar,
            step: (total_blocks / REDRAWS).max(1),
        })
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for BarProgress {
    fn block_done(&mut self, index: u64, total: u64) {
        let done = index + 1;
        if done % self.step == 0 || done == total {
            self.bar.set_position(done);
        }
    }
}
