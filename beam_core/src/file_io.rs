//! # File I/O Module
//!
//! Reads beam input documents and writes analysis results as JSON.
//!
//! - **Atomic saves**: write to `.tmp`, sync, rename, so an interrupted save
//!   never leaves a truncated result behind
//! - **Version validation**: result files carry a schema version that is
//!   checked on load
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::analyze;
//! use beam_core::file_io::{load_input, save_result};
//! use std::path::Path;
//!
//! let input = load_input(Path::new("beam.json"))?;
//! let result = analyze(&input.to_beam()?, &input.settings)?;
//! save_result(&input.label, &result, Path::new("beam.result.json"))?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::AnalysisResult;
use crate::errors::{CalcError, CalcResult};
use crate::input::BeamInput;

/// Current schema version for result files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// On-disk wrapper around an [`AnalysisResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultFile {
    /// Schema version (for migration compatibility)
    pub version: String,
    /// Label of the analysed beam
    pub label: String,
    pub result: AnalysisResult,
}

fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Load a beam input document.
///
/// Only parses the document; call [`BeamInput::to_beam`] to validate it.
pub fn load_input(path: &Path) -> CalcResult<BeamInput> {
    let contents = read_to_string(path)?;
    let input: BeamInput =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
    debug!("Loaded input '{}' with {} loads", input.label, input.loads.len());
    Ok(input)
}

/// Save an analysis result with atomic write semantics.
///
/// 1. Serialize to JSON
/// 2. Write to `<path>.tmp`
/// 3. Sync to disk
/// 4. Rename over `path`
pub fn save_result(label: &str, result: &AnalysisResult, path: &Path) -> CalcResult<()> {
    let file = ResultFile {
        version: SCHEMA_VERSION.to_string(),
        label: label.to_string(),
        result: result.clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("Saved result to {}", path.display());
    Ok(())
}

/// Load a previously saved result file.
pub fn load_result(path: &Path) -> CalcResult<ResultFile> {
    let contents = read_to_string(path)?;
    let file: ResultFile =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;
    validate_version(&file.version)?;
    Ok(file)
}

/// Major must match; for 0.x the file's minor may not be newer than ours.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || {
        CalcError::invalid_input(
            "version",
            file_version,
            format!("Result file version is incompatible with {}", SCHEMA_VERSION),
        )
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.len() < 2 || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }
    if current_parts[0] == 0 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::Beam;
    use crate::calculations::analyze;
    use crate::loads::Load;
    use crate::settings::AnalysisSettings;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}_{}.json", name, std::process::id()))
    }

    fn sample_result() -> AnalysisResult {
        let beam = Beam::with_loads(5.0, 2.0e6, [Load::point(1000.0, 2.0)]).unwrap();
        analyze(&beam, &AnalysisSettings::default().with_segments(20)).unwrap()
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let result = sample_result();
        save_result("B-7", &result, &path).unwrap();

        let loaded = load_result(&path).unwrap();
        assert_eq!(loaded.label, "B-7");
        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.result.samples.len(), 21);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        save_result("B-1", &sample_result(), &path).unwrap();

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        assert!(!Path::new(&tmp_name).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_input_file() {
        let path = temp_path("input");
        fs::write(
            &path,
            r#"{
                "span": { "value": 4.0, "unit": "m" },
                "modulus": { "value": 200.0, "unit": "GPa" },
                "inertia": { "value": 5.0e6, "unit": "mm4" },
                "loads": [ { "type": "Uniform", "intensity": { "value": 3.0, "unit": "kN/m" } } ]
            }"#,
        )
        .unwrap();

        let input = load_input(&path).unwrap();
        assert_eq!(input.label, "");
        assert!(input.to_beam().is_ok());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let missing = temp_path("does_not_exist");
        assert_eq!(load_input(&missing).unwrap_err().error_code(), "FILE_ERROR");

        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(
            load_input(&path).unwrap_err().error_code(),
            "SERIALIZATION_ERROR"
        );
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
