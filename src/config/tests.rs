use std::path::PathBuf;

use tempfile::TempDir;

use super::loader::load_config_file;
use super::*;
use crate::error::{AppError, AppResult, ConfigError, StatsError};
use crate::stats::StatsFormat;

fn tempdir() -> AppResult<TempDir> {
    Ok(tempfile::tempdir()?)
}

fn fail(message: &'static str) -> AppError {
    AppError::config(ConfigError::TestExpectation { message })
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> AppResult<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn loads_toml_stats_section() -> AppResult<()> {
    let dir = tempdir()?;
    let target = dir.path().join("metrics.csv");
    let content = format!(
        "[stats]\npath = {:?}\nformat = \"csv\"\nbuffer_limit = 5\n",
        target
    );
    let path = write_config(&dir, "statseq.toml", &content)?;

    let config = load_config_file(&path)?;
    let stats = config.stats.ok_or_else(|| fail("missing stats section"))?;
    if stats.format != Some(StatsFormat::Csv) {
        return Err(fail("unexpected format"));
    }
    let sink = stats.build()?;
    if sink.buffer_limit().get() != 5 {
        return Err(fail("unexpected buffer limit"));
    }
    if sink.writer().format() != StatsFormat::Csv {
        return Err(fail("unexpected backend"));
    }
    Ok(())
}

#[test]
fn loads_json_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = write_config(
        &dir,
        "statseq.json",
        r#"{ "stats": { "path": "metrics.txt" } }"#,
    )?;

    let config = load_config_file(&path)?;
    let stats = config.stats.ok_or_else(|| fail("missing stats section"))?;
    let sink = stats.build()?;
    if sink.writer().format() != StatsFormat::Txt {
        return Err(fail("extension dispatch must pick txt"));
    }
    if sink.buffer_limit().get() != 10 {
        return Err(fail("default buffer limit must be 10"));
    }
    Ok(())
}

#[test]
fn rejects_unknown_config_extension() -> AppResult<()> {
    let dir = tempdir()?;
    let path = write_config(&dir, "statseq.yaml", "stats: {}")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { .. })) => Ok(()),
        Err(err) => Err(err),
        Ok(_) => Err(fail(".yaml must be rejected")),
    }
}

#[test]
fn build_rejects_format_path_mismatch() -> AppResult<()> {
    let stats = StatsConfig {
        path: "metrics.txt".to_owned(),
        format: Some(StatsFormat::Csv),
        buffer_limit: None,
    };
    match stats.build() {
        Err(AppError::Stats(StatsError::ExtensionMismatch { .. })) => Ok(()),
        Err(err) => Err(err),
        Ok(_) => Err(fail("explicit csv format with a .txt path must fail")),
    }
}

#[test]
fn build_rejects_zero_buffer_limit() -> AppResult<()> {
    let stats = StatsConfig {
        path: "metrics.csv".to_owned(),
        format: None,
        buffer_limit: Some(0),
    };
    match stats.build() {
        Err(AppError::Validation(_)) => Ok(()),
        Err(err) => Err(err),
        Ok(_) => Err(fail("buffer_limit 0 must fail validation")),
    }
}

#[test]
fn build_sink_requires_a_stats_section() -> AppResult<()> {
    let dir = tempdir()?;
    let path = write_config(&dir, "empty.toml", "")?;
    let path_str = path.to_string_lossy().into_owned();
    match build_sink(Some(&path_str)) {
        Err(AppError::Config(ConfigError::MissingStatsSection)) => Ok(()),
        Err(err) => Err(err),
        Ok(_) => Err(fail("config without [stats] must be rejected")),
    }
}
