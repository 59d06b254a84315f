use std::fs;
use std::path::Path;

use diascreen::{FeatureVector, LoadError, ModelEntry, ModelFormat, ModelRegistry};
use serde_json::json;
use tempfile::tempdir;

fn write_estimator(dir: &Path, name: &str, coefficients: Vec<f32>, intercept: f32) {
    let artifact = json!({
        "coefficients": coefficients,
        "intercept": intercept,
    });
    fs::write(dir.join(name), artifact.to_string()).unwrap();
}

#[test]
fn test_missing_directory_is_empty_not_an_error() {
    let registry = ModelRegistry::discover_and_load("no/such/directory/anywhere");
    assert!(registry.is_empty());
}

#[test]
fn test_mixed_directory_loads_exactly_the_valid_entries() {
    let dir = tempdir().unwrap();

    // Two valid estimators.
    write_estimator(dir.path(), "logreg.json", vec![0.0; 8], 2.0);
    write_estimator(dir.path(), "scaled.json", vec![0.1; 8], -1.0);
    // Corrupt artifacts of both recognized families.
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("broken.onnx"), b"\x00\x01garbage").unwrap();
    // Wrong shape: recognized extension, deserializes, fails validation.
    write_estimator(dir.path(), "two_features.json", vec![0.5, 0.5], 0.0);
    // Unrecognized extensions are ignored entirely.
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    fs::write(dir.path().join("weights.bin"), b"\x01\x02").unwrap();

    let registry = ModelRegistry::discover_and_load(dir.path());

    assert_eq!(registry.names(), vec!["logreg.json", "scaled.json"]);
    // Never more entries than recognized-extension files.
    assert!(registry.len() <= 5);

    let entry = registry.get("logreg.json").unwrap();
    assert_eq!(entry.format, ModelFormat::Tabular);
    assert_eq!(entry.name, "logreg.json");
    assert!(registry.get("broken.json").is_none());
    assert!(registry.get("two_features.json").is_none());
    assert!(registry.get("notes.txt").is_none());
}

#[test]
fn test_names_are_sorted_for_presentation() {
    let dir = tempdir().unwrap();
    write_estimator(dir.path(), "zeta.json", vec![0.0; 8], 0.0);
    write_estimator(dir.path(), "alpha.json", vec![0.0; 8], 0.0);
    write_estimator(dir.path(), "mid.json", vec![0.0; 8], 0.0);

    let registry = ModelRegistry::discover_and_load(dir.path());
    assert_eq!(registry.names(), vec!["alpha.json", "mid.json", "zeta.json"]);
}

#[test]
fn test_single_file_loader_errors_are_typed() {
    let dir = tempdir().unwrap();

    let unsupported = dir.path().join("model.pkl");
    fs::write(&unsupported, b"anything").unwrap();
    assert!(matches!(
        ModelEntry::load(&unsupported),
        Err(LoadError::UnsupportedExtension(ext)) if ext == "pkl"
    ));

    let corrupt = dir.path().join("corrupt.json");
    fs::write(&corrupt, "][").unwrap();
    assert!(matches!(ModelEntry::load(&corrupt), Err(LoadError::Parse(_))));

    let short = dir.path().join("short.json");
    write_estimator(dir.path(), "short.json", vec![1.0, 2.0, 3.0], 0.0);
    assert!(matches!(
        ModelEntry::load(&short),
        Err(LoadError::FeatureCount { expected: 8, found: 3 })
    ));
}

#[test]
fn test_loaded_estimator_predicts() {
    let dir = tempdir().unwrap();
    // Zero coefficients: the score is sigmoid(intercept) regardless of input.
    write_estimator(dir.path(), "bias_only.json", vec![0.0; 8], 0.0);

    let registry = ModelRegistry::discover_and_load(dir.path());
    let entry = registry.get("bias_only.json").unwrap();

    let input = FeatureVector::new([2.0, 130.0, 70.0, 20.0, 80.0, 28.5, 0.35, 33.0]);
    let score = diascreen::predict_score(entry, &input).unwrap();
    assert!((score - 0.5).abs() < 1e-6);
}
