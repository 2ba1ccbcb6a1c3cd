//! Line-oriented prompter over an async reader/writer pair.
//!
//! The binary wires this to stdin/stdout; tests wire it to byte
//! slices and a `Vec<u8>` so whole menu sessions can be scripted.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Reads answers from `reader`, writes prompts and output to `writer`.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write `text` followed by a newline.
    pub async fn say(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .context("Failed to write to console")?;
        self.writer
            .write_all(b"\n")
            .await
            .context("Failed to write to console")?;
        self.writer.flush().await.context("Failed to flush console")
    }

    /// Write `text` verbatim (no newline added).
    pub async fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .context("Failed to write to console")?;
        self.writer.flush().await.context("Failed to flush console")
    }

    /// Show `prompt` and read one line.
    ///
    /// The line terminator is stripped; other whitespace is kept.
    /// Returns `None` at end of input.
    pub async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt).await?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .await
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Consume the prompter, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
