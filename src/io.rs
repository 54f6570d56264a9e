use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::DewarpResult;
use crate::params::DewarpParams;

/// Serializes an object to a JSON file.
pub fn object_to_json<T: Serialize>(output_path: impl AsRef<Path>, object: &T) -> DewarpResult<()> {
    let j = serde_json::to_string_pretty(object)?;
    std::fs::write(output_path, j)?;
    Ok(())
}

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> DewarpResult<T> {
    let contents = std::fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Output file name `{dir}/{stem}_{projection}_{fov}_{pfov}{.ext}` with the
/// angles rounded to whole degrees. `out_dir` replaces the input's directory.
pub fn output_path(input: &Path, params: &DewarpParams, out_dir: Option<&Path>) -> PathBuf {
    let dir = out_dir
        .or_else(|| input.parent())
        .unwrap_or_else(|| Path::new(""));
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    dir.join(format!(
        "{}_{}_{:.0}_{:.0}{}",
        stem,
        params.projection(),
        params.fov(),
        params.pfov(),
        ext
    ))
}
