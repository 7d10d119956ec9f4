//! Native crate manifest inspection.
//!
//! Xcode links the library statically, so the native crate must list
//! `staticlib` in `[lib] crate-type`. Nothing here edits the manifest.

use std::path::Path;

use serde::Deserialize;

use crate::pipeline::{Error, ErrorExt, Result};

/// Crate type the iOS runner links against
pub const REQUIRED_CRATE_TYPE: &str = "staticlib";

#[derive(Debug, Deserialize)]
struct Manifest {
    lib: Option<LibSection>,
}

#[derive(Debug, Deserialize)]
struct LibSection {
    #[serde(rename = "crate-type", default)]
    crate_type: Vec<String>,
}

/// Outcome of the crate-type check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrateTypeCheck {
    /// `staticlib` is listed
    Present,
    /// `[lib]` exists but does not list `staticlib`; holds the listed types
    Missing(Vec<String>),
    /// No `[lib]` section at all
    NoLibSection,
}

/// Parses manifest text and checks for `staticlib`.
pub fn check_crate_type_str(contents: &str, path: &Path) -> Result<CrateTypeCheck> {
    let manifest: Manifest = toml::from_str(contents).map_err(|error| Error::Manifest {
        path: path.to_path_buf(),
        error,
    })?;

    Ok(match manifest.lib {
        None => CrateTypeCheck::NoLibSection,
        Some(lib) if lib.crate_type.iter().any(|t| t == REQUIRED_CRATE_TYPE) => {
            CrateTypeCheck::Present
        }
        Some(lib) => CrateTypeCheck::Missing(lib.crate_type),
    })
}

/// Reads the manifest at `path` and checks for `staticlib`.
pub async fn check_crate_type(path: &Path) -> Result<CrateTypeCheck> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading native crate manifest", path)?;
    check_crate_type_str(&contents, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(contents: &str) -> CrateTypeCheck {
        check_crate_type_str(contents, Path::new("Cargo.toml")).unwrap()
    }

    #[test]
    fn staticlib_among_others_is_present() {
        let toml = r#"
            [package]
            name = "tuner-rs"
            version = "0.1.0"

            [lib]
            crate-type = ["cdylib", "staticlib"]
        "#;
        assert_eq!(check(toml), CrateTypeCheck::Present);
    }

    #[test]
    fn other_crate_types_are_reported() {
        let toml = "[lib]\ncrate-type = [\"cdylib\"]\n";
        assert_eq!(check(toml), CrateTypeCheck::Missing(vec!["cdylib".into()]));
        assert_eq!(check("[lib]\nname = \"tuner\"\n"), CrateTypeCheck::Missing(vec![]));
    }

    #[test]
    fn no_lib_section() {
        assert_eq!(check("[package]\nname = \"x\"\n"), CrateTypeCheck::NoLibSection);
    }

    #[test]
    fn invalid_toml_names_the_manifest() {
        let err = check_crate_type_str("[lib", Path::new("tuner-rs/Cargo.toml")).unwrap_err();
        assert!(err.to_string().contains("tuner-rs/Cargo.toml"));
    }
}
