// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::InstallmentMode;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Mortcalc", "mortcalc"));

pub fn state_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.to_path_buf())
}

pub fn prepayments_path() -> Result<PathBuf> {
    Ok(state_dir()?.join("prepayments.json"))
}

pub fn settings_path() -> Result<PathBuf> {
    Ok(state_dir()?.join("settings.json"))
}

/// Read the ledger transport string. A file that does not exist yet is an
/// empty ledger, not an error.
pub fn load_from(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok("[]".to_string());
    }
    fs::read_to_string(path).with_context(|| format!("Read state at {}", path.display()))
}

pub fn save_to(path: &Path, serialized: &str) -> Result<()> {
    fs::write(path, serialized).with_context(|| format!("Write state at {}", path.display()))
}

pub fn load_prepayments() -> Result<String> {
    load_from(&prepayments_path()?)
}

pub fn save_prepayments(serialized: &str) -> Result<()> {
    save_to(&prepayments_path()?, serialized)
}

/// Missing or corrupt settings fall back to the default mode; the
/// calculator has to stay usable either way.
pub fn load_settings_from(path: &Path) -> InstallmentMode {
    match fs::read_to_string(path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
        Err(_) => InstallmentMode::default(),
    }
}

pub fn save_settings_to(path: &Path, mode: &InstallmentMode) -> Result<()> {
    let body = serde_json::to_string_pretty(mode)?;
    fs::write(path, body).with_context(|| format!("Write settings at {}", path.display()))
}

pub fn load_settings() -> Result<InstallmentMode> {
    Ok(load_settings_from(&settings_path()?))
}

pub fn save_settings(mode: &InstallmentMode) -> Result<()> {
    save_settings_to(&settings_path()?, mode)
}
