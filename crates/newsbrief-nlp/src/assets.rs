//! NLP asset installation and loading
//!
//! The pipeline needs three plain-text resources: an English stopword list,
//! a common-word lexicon (used by the tagger to tell sentence-initial common
//! words from proper nouns) and a list of abbreviations (used by the sentence
//! segmenter). Defaults are compiled into the binary. The setup phase writes
//! any missing file into the asset directory and never touches existing
//! ones, so running it repeatedly is harmless and local edits survive.

use crate::error::NlpError;
use crate::stopwords::english_stopwords;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const EMBEDDED_LEXICON: &str = include_str!("../data/lexicon-en.txt");
const EMBEDDED_ABBREVIATIONS: &str = include_str!("../data/abbreviations-en.txt");

/// One of the asset files the pipeline depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// English stopword list
    Stopwords,
    /// Common-word lexicon
    Lexicon,
    /// Sentence-internal abbreviations
    Abbreviations,
}

impl AssetKind {
    /// Every asset kind, in installation order
    pub const ALL: [AssetKind; 3] = [
        AssetKind::Stopwords,
        AssetKind::Lexicon,
        AssetKind::Abbreviations,
    ];

    /// File name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            AssetKind::Stopwords => "stopwords-en.txt",
            AssetKind::Lexicon => "lexicon-en.txt",
            AssetKind::Abbreviations => "abbreviations-en.txt",
        }
    }

    /// Default file contents
    pub fn default_contents(&self) -> String {
        match self {
            AssetKind::Stopwords => {
                let mut words = english_stopwords();
                words.sort();
                words.dedup();
                let mut out = String::from("# English stopwords, one per line, lowercase.\n");
                for word in words {
                    out.push_str(&word);
                    out.push('\n');
                }
                out
            }
            AssetKind::Lexicon => EMBEDDED_LEXICON.to_string(),
            AssetKind::Abbreviations => EMBEDDED_ABBREVIATIONS.to_string(),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Outcome of a setup run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Assets written during this run
    pub installed: Vec<AssetKind>,

    /// Assets that were already present and left untouched
    pub present: Vec<AssetKind>,
}

impl InstallReport {
    /// True if nothing had to be written
    pub fn is_noop(&self) -> bool {
        self.installed.is_empty()
    }
}

/// Install every missing asset into `dir`, creating it if needed
///
/// Existing files are never overwritten.
pub fn ensure_installed(dir: &Path) -> Result<InstallReport, NlpError> {
    fs::create_dir_all(dir).map_err(|e| NlpError::io(dir, e))?;

    let mut report = InstallReport::default();
    for kind in AssetKind::ALL {
        let path = dir.join(kind.file_name());
        if path.exists() {
            debug!("Asset {} already present", path.display());
            report.present.push(kind);
            continue;
        }
        fs::write(&path, kind.default_contents()).map_err(|e| NlpError::io(&path, e))?;
        info!("Installed NLP asset {}", path.display());
        report.installed.push(kind);
    }

    Ok(report)
}

/// Loaded asset contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NlpAssets {
    /// Stopwords (lowercase)
    pub stopwords: HashSet<String>,

    /// Common words (lowercase)
    pub lexicon: HashSet<String>,

    /// Abbreviations without their trailing period (lowercase)
    pub abbreviations: HashSet<String>,
}

impl NlpAssets {
    /// Assets built from the compiled-in defaults, without touching disk
    pub fn embedded() -> Self {
        Self {
            stopwords: parse_list(&AssetKind::Stopwords.default_contents()),
            lexicon: parse_list(EMBEDDED_LEXICON),
            abbreviations: parse_list(EMBEDDED_ABBREVIATIONS),
        }
    }

    /// Read all assets from `dir`
    ///
    /// Fails if a file is missing (run [`ensure_installed`] first) or holds
    /// no entries.
    pub fn load(dir: &Path) -> Result<Self, NlpError> {
        Ok(Self {
            stopwords: read_asset(dir, AssetKind::Stopwords)?,
            lexicon: read_asset(dir, AssetKind::Lexicon)?,
            abbreviations: read_asset(dir, AssetKind::Abbreviations)?,
        })
    }
}

fn read_asset(dir: &Path, kind: AssetKind) -> Result<HashSet<String>, NlpError> {
    let path = dir.join(kind.file_name());
    let contents = fs::read_to_string(&path).map_err(|e| NlpError::io(&path, e))?;
    let entries = parse_list(&contents);
    if entries.is_empty() {
        return Err(NlpError::EmptyAsset(kind.file_name().to_string()));
    }
    Ok(entries)
}

/// Parse a one-entry-per-line list; blank lines and `#` comments are skipped
fn parse_list(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_assets_are_populated() {
        let assets = NlpAssets::embedded();
        assert!(assets.stopwords.contains("the"));
        assert!(assets.lexicon.contains("click"));
        assert!(assets.abbreviations.contains("mr"));
        assert!(assets.abbreviations.contains("u.s"));
    }

    #[test]
    fn test_parse_list_skips_comments_and_blanks() {
        let parsed = parse_list("# header\n\nAlpha\n  beta  \n#gamma\n");
        assert_eq!(parsed.len(), 2);
        assert!(parsed.contains("alpha"));
        assert!(parsed.contains("beta"));
    }

    #[test]
    fn test_install_then_load() {
        let dir = TempDir::new().unwrap();
        let report = ensure_installed(dir.path()).unwrap();
        assert_eq!(report.installed, AssetKind::ALL.to_vec());
        assert!(report.present.is_empty());

        let loaded = NlpAssets::load(dir.path()).unwrap();
        assert_eq!(loaded, NlpAssets::embedded());
    }

    #[test]
    fn test_install_is_idempotent() {
        let dir = TempDir::new().unwrap();
        ensure_installed(dir.path()).unwrap();
        let second = ensure_installed(dir.path()).unwrap();
        assert!(second.is_noop());
        assert_eq!(second.present, AssetKind::ALL.to_vec());
    }

    #[test]
    fn test_install_keeps_local_edits() {
        let dir = TempDir::new().unwrap();
        let lexicon = dir.path().join(AssetKind::Lexicon.file_name());
        fs::write(&lexicon, "boston\n").unwrap();

        let report = ensure_installed(dir.path()).unwrap();
        assert_eq!(report.present, vec![AssetKind::Lexicon]);
        assert_eq!(fs::read_to_string(&lexicon).unwrap(), "boston\n");

        let loaded = NlpAssets::load(dir.path()).unwrap();
        assert_eq!(loaded.lexicon.len(), 1);
        assert!(loaded.lexicon.contains("boston"));
    }

    #[test]
    fn test_install_creates_nested_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_installed(&nested).unwrap();
        assert!(nested.join(AssetKind::Stopwords.file_name()).exists());
    }

    #[test]
    fn test_load_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let result = NlpAssets::load(&dir.path().join("missing"));
        assert!(matches!(result, Err(NlpError::Io { .. })));
    }

    #[test]
    fn test_load_empty_asset_fails() {
        let dir = TempDir::new().unwrap();
        ensure_installed(dir.path()).unwrap();
        fs::write(dir.path().join(AssetKind::Abbreviations.file_name()), "# nothing\n").unwrap();

        let result = NlpAssets::load(dir.path());
        assert!(matches!(result, Err(NlpError::EmptyAsset(_))));
    }
}
