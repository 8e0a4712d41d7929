//! Buffered writing of result blocks to stdout or a file

use crate::io::error::{Result, WithContext};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination for enumeration output
pub struct BlockWriter {
    writer: BufWriter<Box<dyn Write>>,
    path: PathBuf,
    blocks: usize,
}

impl BlockWriter {
    /// Write to standard output
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(std::io::stdout().lock()), PathBuf::from("<stdout>"))
    }

    /// Create or truncate `path` and write to it
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error if the file cannot be created
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).with_path(path, "create")?;
        Ok(Self::from_writer(Box::new(file), path.to_path_buf()))
    }

    /// Write to stdout when `path` is `None`, otherwise to the file
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error if the file cannot be created
    pub fn open(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::stdout()), Self::create)
    }

    fn from_writer(writer: Box<dyn Write>, path: PathBuf) -> Self {
        Self {
            writer: BufWriter::new(writer),
            path,
            blocks: 0,
        }
    }

    /// Append one block as produced by the solver
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error if writing fails
    pub fn write_block(&mut self, block: &str) -> Result<()> {
        self.writer
            .write_all(block.as_bytes())
            .with_path(&self.path, "write")?;
        self.blocks += 1;
        Ok(())
    }

    /// Append every block in order
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error if writing fails
    pub fn write_blocks<'a>(&mut self, blocks: impl IntoIterator<Item = &'a String>) -> Result<()> {
        for block in blocks {
            self.write_block(block)?;
        }
        Ok(())
    }

    /// Blocks written so far
    pub const fn blocks(&self) -> usize {
        self.blocks
    }

    /// Flush buffered output, returning the number of blocks written
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error if flushing fails
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().with_path(&self.path, "flush")?;
        Ok(self.blocks)
    }
}
