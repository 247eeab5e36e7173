//! Streaming source of provider frames.
//!
//! Stands in for a live camera and recognizer: frames arrive as JSON
//! Lines (one [`HandFrame`] object per line) from a recording file or
//! standard input. The source is an explicit value, created where it is
//! used and torn down on drop.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::landmark::HandFrame;

pub struct FrameSource {
    reader: Box<dyn AsyncBufRead + Unpin + Send>,
    line_no: usize,
}

impl std::fmt::Debug for FrameSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSource")
            .field("line_no", &self.line_no)
            .finish_non_exhaustive()
    }
}

impl FrameSource {
    /// Open a frame recording file
    pub async fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .await
            .with_context(|| format!("failed to open frame recording {}", path.display()))?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Read frames from standard input
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }

    /// Read frames from any buffered byte stream
    pub fn from_reader(reader: impl AsyncBufRead + Unpin + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            line_no: 0,
        }
    }

    /// Next frame in the stream, or None at end of input
    ///
    /// Blank lines are skipped. A line that is not valid frame JSON is an
    /// error carrying its line number; the stream stays usable, so the
    /// caller chooses between skipping and aborting.
    pub async fn next_frame(&mut self) -> Result<Option<HandFrame>> {
        loop {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .await
                .context("failed to read from frame stream")?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let frame = serde_json::from_str(trimmed)
                .with_context(|| format!("malformed frame on line {}", self.line_no))?;
            return Ok(Some(frame));
        }
    }
}
