//! Fixtures
//!
//! Pricing cases read from YAML files. JSON files are accepted as well, since
//! JSON is a subset of YAML.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_norway::Value;
use thiserror::Error;

use crate::cart::CartError;

pub mod cases;

pub use cases::{CaseOutcome, PricingCase, ProductFixture};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,

        /// Underlying IO error
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Cart creation error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// Loader for pricing case files.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a new fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Base path for fixture files
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load a named case set from `{base_path}/cases/{name}.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cases(&self, name: &str) -> Result<Vec<PricingCase>, FixtureError> {
        let file_path = self.base_path.join("cases").join(format!("{name}.yml"));

        Self::load_path(file_path)
    }

    /// Load cases from any file holding either a list of cases or a single case.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<PricingCase>, FixtureError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        parse_cases(&contents)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a list of cases, or a single case wrapped into a list.
///
/// # Errors
///
/// Returns an error if the contents are not valid YAML or do not describe cases.
pub fn parse_cases(contents: &str) -> Result<Vec<PricingCase>, FixtureError> {
    let value: Value = serde_norway::from_str(contents)?;

    let cases = if value.is_sequence() {
        serde_norway::from_value(value)?
    } else {
        vec![serde_norway::from_value(value)?]
    };

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;

    const SINGLE_CASE: &str = r#"{
  "test_name": "Single",
  "products": [
    {"product_name": "A", "cost": 100, "units": 2, "item_category": "X"}
  ],
  "promos": [{"type": "fixed_amount", "code": "F1", "amount": 20}],
  "final_expected_cost": 180
}"#;

    #[test]
    fn parse_cases_wraps_single_case() -> TestResult {
        let cases = parse_cases(SINGLE_CASE)?;

        assert_eq!(cases.len(), 1);
        assert_eq!(cases.first().map(PricingCase::name), Some("Single"));

        Ok(())
    }

    #[test]
    fn parse_cases_reads_lists() -> TestResult {
        let yaml = r"
- test_name: First
  products: []
- test_name: Second
  products: []
";
        let names: Vec<String> = parse_cases(yaml)?
            .iter()
            .map(|case| case.name().to_string())
            .collect();

        assert_eq!(names, vec!["First", "Second"]);

        Ok(())
    }

    #[test]
    fn parse_cases_rejects_invalid_yaml() {
        assert!(matches!(
            parse_cases("products: [unterminated"),
            Err(FixtureError::Yaml(_))
        ));
    }

    #[test]
    fn load_cases_reads_named_file() -> TestResult {
        let dir = tempfile::tempdir()?;

        fs::create_dir_all(dir.path().join("cases"))?;
        fs::write(dir.path().join("cases").join("single.yml"), SINGLE_CASE)?;

        let cases = Fixture::with_base_path(dir.path()).load_cases("single")?;

        assert_eq!(cases.len(), 1);

        Ok(())
    }

    #[test]
    fn load_cases_missing_file_returns_io_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = Fixture::with_base_path(dir.path()).load_cases("missing");

        assert!(matches!(result, Err(FixtureError::Io { .. })));

        Ok(())
    }

    #[test]
    fn default_fixture_uses_local_directory() {
        assert_eq!(Fixture::default().base_path(), Path::new("./fixtures"));
    }
}
