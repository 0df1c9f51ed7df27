// src/config.rs

//! Search profiles stored as pretty-printed JSON, one `<name>.json` per profile.

use crate::error::EngineResult;
use crate::game::search::SearchConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const PROFILES_DIR: &str = "profiles";

fn profile_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.json", name))
}

pub fn save_profile(dir: &Path, name: &str, config: &SearchConfig) -> EngineResult<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(config)?;
    fs::File::create(profile_path(dir, name))?.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_profile(dir: &Path, name: &str) -> EngineResult<SearchConfig> {
    load_profile_file(&profile_path(dir, name))
}

/// Reads a profile from an explicit file path.
pub fn load_profile_file(path: &Path) -> EngineResult<SearchConfig> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Names of all profiles in `dir`, sorted.
pub fn get_profiles(dir: &Path) -> EngineResult<Vec<String>> {
    let mut profiles = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            if let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) {
                profiles.push(name.to_string());
            }
        }
    }
    profiles.sort();
    Ok(profiles)
}
