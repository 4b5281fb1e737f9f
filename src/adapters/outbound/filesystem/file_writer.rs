use crate::ports::outbound::OutputPresenter;
use crate::shared::error::MdepError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output,
/// either replacing the file or appending to it.
pub struct FileSystemWriter {
    output_path: PathBuf,
    append: bool,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            append: false,
        }
    }

    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        MdepError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if self.output_path.symlink_metadata().is_ok() {
            validate_not_symlink(&self.output_path, "write")
                .map_err(|e| self.write_error(e.to_string()))?;
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(self.append)
            .truncate(!self.append)
            .open(&self.output_path)
            .map_err(|e| self.write_error(e.to_string()))?;

        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.write_error(e.to_string()))?;

        info!(path = %self.output_path.display(), append = self.append, "Wrote output file");
        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
