//! Test fixture loader for the golden completion sets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// One completion (or gold solution) and the answer expected from it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionCase {
    pub text: String,
    /// `None` when no answer should be found.
    pub expected: Option<String>,
}

/// A batch of extraction cases run through one evaluator.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionFixture {
    pub description: String,
    /// `math` or `qwen_math`; gold fixtures ignore it.
    pub evaluator: String,
    pub cases: Vec<ExtractionCase>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpectedSelection {
    pub answer: String,
    pub index: usize,
    pub confidence: f64,
}

/// A completion set with the expected outcome of each selection policy.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionFixture {
    pub description: String,
    pub evaluator: String,
    pub completions: Vec<String>,
    #[serde(default)]
    pub prior_weights: Option<Vec<f64>>,
    /// Deterministic policy outcome.
    #[serde(default)]
    pub expected: Option<ExpectedSelection>,
    /// Stochastic answer-level outcome under mean aggregation.
    #[serde(default)]
    pub expected_stochastic: Option<ExpectedSelection>,
    /// Error code every policy must fail with.
    #[serde(default)]
    pub expected_error: Option<String>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load every selection fixture under `golden/selection`.
pub fn selection_fixtures() -> Vec<(String, SelectionFixture)> {
    list_fixtures("golden/selection")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let relative = format!("golden/selection/{name}");
            (name, load_fixture(&relative))
        })
        .collect()
}
