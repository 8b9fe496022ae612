//! The ordered, read-only set of ECG records available for review.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::CatalogError;
use crate::sample;

/// A single ECG entry: an image reference and its draft interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Display name and lookup key, unique within a catalog.
    pub label: String,
    /// Opaque image path or URL. Not validated here.
    pub image: String,
    /// Interpretation body, markdown.
    pub interpretation: String,
}

impl Record {
    /// Creates a record, normalizing the interpretation body.
    pub fn new(
        label: impl Into<String>,
        image: impl Into<String>,
        interpretation: impl AsRef<str>,
    ) -> Self {
        Self {
            label: label.into(),
            image: image.into(),
            interpretation: normalize_interpretation(interpretation.as_ref()),
        }
    }
}

/// Ordered collection of records with unique labels.
///
/// A catalog is never empty, so there is always a first record to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Builds a catalog, preserving the given order.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.label.trim().is_empty() {
                return Err(CatalogError::BlankLabel);
            }
            if !seen.insert(record.label.as_str()) {
                return Err(CatalogError::DuplicateLabel(record.label.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Records in declaration order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// False for any catalog built through `new`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by label.
    pub fn get(&self, label: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.label == label)
    }

    /// Position of a label in declaration order.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.records.iter().position(|r| r.label == label)
    }

    /// Record at a position. Panics if out of range.
    pub fn at(&self, index: usize) -> &Record {
        &self.records[index]
    }

    /// The first record in declaration order.
    pub fn first(&self) -> &Record {
        &self.records[0]
    }
}

/// Strips the common leading indentation and surrounding blank lines.
///
/// Trailing whitespace on content lines is kept, since two trailing spaces
/// mark a markdown hard line break.
///
/// Interpretation bodies are often written as indented string literals;
/// left as-is, markdown would treat every line as a code block.
pub fn normalize_interpretation(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(start), Some(end)) = (start, end) else {
        return String::new();
    };
    let body = &lines[start..=end];

    let indent = body
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                l.get(indent..).unwrap_or_else(|| l.trim_start())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Source of the record catalog.
///
/// The review screen depends only on this capability, not on a concrete
/// dataset.
pub trait CatalogProvider: Send + Sync {
    /// Short human-readable description of the source, for logs.
    fn describe(&self) -> String;

    /// Loads and validates the catalog.
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// The built-in three-record demo dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl CatalogProvider for SampleCatalog {
    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(sample::sample_records())
    }
}

/// Catalog read from a JSON file holding an array of records.
///
/// Relative image paths are resolved against the file's directory.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve_image(&self, image: &str) -> String {
        if image.contains("://") || image.starts_with("data:") || Path::new(image).is_absolute() {
            return image.to_string();
        }
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(image).to_string_lossy().into_owned(),
            _ => image.to_string(),
        }
    }
}

impl CatalogProvider for JsonCatalogFile {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records: Vec<Record> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = records.len(), "Parsed catalog file");

        let records = records
            .into_iter()
            .map(|r| Record::new(r.label, self.resolve_image(&r.image), r.interpretation))
            .collect();

        Catalog::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str) -> Record {
        Record::new(label, format!("{label}.jpeg"), format!("Text for {label}"))
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![record("B"), record("A"), record("C")]).unwrap();
        let labels: Vec<_> = catalog.labels().collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
        assert_eq!(catalog.first().label, "B");
        assert_eq!(catalog.position("C"), Some(2));
    }

    #[test]
    fn test_catalog_rejects_empty() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_catalog_rejects_duplicate_labels() {
        let err = Catalog::new(vec![record("ECG 1"), record("ECG 1")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLabel(ref l) if l == "ECG 1"));
    }

    #[test]
    fn test_catalog_rejects_blank_label() {
        let err = Catalog::new(vec![record("  ")]).unwrap_err();
        assert!(matches!(err, CatalogError::BlankLabel));
    }

    #[test]
    fn test_normalize_strips_common_indent() {
        let text = "\n      Heading\n\n      Body line\n        - nested\n    ";
        assert_eq!(normalize_interpretation(text), "Heading\n\nBody line\n  - nested");
    }

    #[test]
    fn test_normalize_keeps_hard_line_breaks() {
        let record = Record::new("A", "a.png", "Rate 72  \nPR 160ms");
        assert_eq!(record.interpretation, "Rate 72  \nPR 160ms");

        let indented = "\n    **Rate** 72  \n    PR 160ms\n";
        assert_eq!(normalize_interpretation(indented), "**Rate** 72  \nPR 160ms");
    }

    #[test]
    fn test_normalize_blank_input() {
        assert_eq!(normalize_interpretation("   \n  \n"), "");
        assert_eq!(normalize_interpretation(""), "");
    }

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = SampleCatalog.load().unwrap();
        let labels: Vec<_> = catalog.labels().collect();
        assert_eq!(labels, vec!["ECG 1", "ECG 2", "ECG 3"]);
        for r in catalog.records() {
            assert!(!r.interpretation.starts_with(' '));
        }
    }

    #[test]
    fn test_json_catalog_resolves_relative_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[
                {"label": "A", "image": "a.png", "interpretation": "    # A\n    text"},
                {"label": "B", "image": "/abs/b.png", "interpretation": "B"},
                {"label": "C", "image": "https://example.org/c.png", "interpretation": "C"}
            ]"#,
        )
        .unwrap();

        let catalog = JsonCatalogFile::new(&path).load().unwrap();
        assert_eq!(
            catalog.get("A").unwrap().image,
            dir.path().join("a.png").to_string_lossy()
        );
        assert_eq!(catalog.get("A").unwrap().interpretation, "# A\ntext");
        assert_eq!(catalog.get("B").unwrap().image, "/abs/b.png");
        assert_eq!(catalog.get("C").unwrap().image, "https://example.org/c.png");
    }

    #[test]
    fn test_json_catalog_missing_file() {
        let err = JsonCatalogFile::new("/nonexistent/catalog.json").load().unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_json_catalog_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{ not json").unwrap();
        let err = JsonCatalogFile::new(file.path()).load().unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
