use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult, StatsError};

use super::record::MetricRecord;

/// Header line the CSV backend writes to a new or empty file.
pub const CSV_HEADER: &str = "date;metric;value";
/// Field delimiter used by the CSV backend.
pub const CSV_DELIMITER: char = ';';

/// Textual serialization variant a stats file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsFormat {
    /// `;`-delimited lines with a one-time header.
    Csv,
    /// Space-separated lines, no header.
    Txt,
}

impl StatsFormat {
    #[must_use]
    pub const fn required_extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Txt => "txt",
        }
    }
}

/// Append-only writer bound to one target file and one format.
///
/// The format is selected once at construction; the target path's
/// extension must match it. The file is created on first write and is
/// only ever appended to, never truncated.
#[derive(Debug, Clone)]
pub struct StatsWriter {
    format: StatsFormat,
    path: PathBuf,
}

impl StatsWriter {
    /// Creates a CSV writer for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::ExtensionMismatch`] when `path` does not end
    /// in `.csv`.
    pub fn csv(path: impl Into<PathBuf>) -> AppResult<Self> {
        Self::with_format(path.into(), StatsFormat::Csv)
    }

    /// Creates a plain-text writer for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::ExtensionMismatch`] when `path` does not end
    /// in `.txt`.
    pub fn txt(path: impl Into<PathBuf>) -> AppResult<Self> {
        Self::with_format(path.into(), StatsFormat::Txt)
    }

    /// Creates a writer whose format is selected by the path extension.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::UnsupportedExtension`] or
    /// [`StatsError::MissingExtension`] when the extension selects no
    /// backend.
    pub fn for_path(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Ok(Self {
                format: StatsFormat::Csv,
                path,
            }),
            Some("txt") => Ok(Self {
                format: StatsFormat::Txt,
                path,
            }),
            Some(ext) => Err(AppError::stats(StatsError::UnsupportedExtension {
                ext: ext.to_owned(),
            })),
            None => Err(AppError::stats(StatsError::MissingExtension)),
        }
    }

    fn with_format(path: PathBuf, format: StatsFormat) -> AppResult<Self> {
        let expected = format.required_extension();
        if path.extension().and_then(|ext| ext.to_str()) == Some(expected) {
            Ok(Self { format, path })
        } else {
            Err(AppError::stats(StatsError::ExtensionMismatch {
                expected,
                path,
            }))
        }
    }

    #[must_use]
    pub const fn format(&self) -> StatsFormat {
        self.format
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `records` to the target file, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Io`] when the target cannot be opened or
    /// written; the error propagates unchanged, with no retry.
    pub fn write_records(&self, records: &[MetricRecord]) -> AppResult<()> {
        let mut output = String::new();
        match self.format {
            StatsFormat::Csv => {
                // The emptiness check runs on every flush, not once. External
                // truncation of the file between flushes therefore yields a
                // second header; known limitation.
                if self.needs_header() {
                    write_line(&mut output, CSV_HEADER)?;
                }
                for record in records {
                    write_line(
                        &mut output,
                        &format!("{};{};{}", record.date, record.metric, record.value),
                    )?;
                }
            }
            StatsFormat::Txt => {
                for record in records {
                    write_line(
                        &mut output,
                        &format!("{} {} {}", record.date, record.metric, record.value),
                    )?;
                }
            }
        }
        self.append(&output)
    }

    fn needs_header(&self) -> bool {
        std::fs::metadata(&self.path)
            .map_or(true, |meta| meta.len() == 0)
    }

    fn append(&self, output: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| {
                AppError::stats(StatsError::Io {
                    context: "open stats file",
                    source: err,
                })
            })?;
        file.write_all(output.as_bytes()).map_err(|err| {
            AppError::stats(StatsError::Io {
                context: "append stats records",
                source: err,
            })
        })?;
        Ok(())
    }
}

fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line)
        .map_err(|err| AppError::stats(StatsError::FormatLine { source: err }))
}
