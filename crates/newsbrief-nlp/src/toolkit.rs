//! Setup phase and component wiring
//!
//! [`NlpToolkit::initialize`] is the explicit, idempotent setup step that has
//! to run before the pipeline: it installs missing assets and loads them.
//! The toolkit then hands out ready-to-use pipeline components.

use crate::assets::{ensure_installed, InstallReport, NlpAssets};
use crate::classifier::HeuristicEntityClassifier;
use crate::error::NlpError;
use crate::filters::ExclusionFilter;
use crate::ranker::FrequencyRanker;
use crate::segmenter::SentenceSegmenter;
use crate::stopwords::StopwordFilter;
use crate::summarizer::BulletGenerator;
use crate::tokenizer::Tokenizer;
use newsbrief_domain::EntityClassifier;
use std::path::Path;
use tracing::info;

/// Loaded NLP resources
#[derive(Debug, Clone)]
pub struct NlpToolkit {
    assets: NlpAssets,
}

impl NlpToolkit {
    /// Install any missing assets into `data_dir`, then load them
    ///
    /// Safe to call on every run; existing files are left as they are.
    pub fn initialize(data_dir: &Path) -> Result<(Self, InstallReport), NlpError> {
        let report = ensure_installed(data_dir)?;
        let assets = NlpAssets::load(data_dir)?;
        info!(
            "NLP assets ready in {} ({} installed, {} present)",
            data_dir.display(),
            report.installed.len(),
            report.present.len()
        );
        Ok((Self { assets }, report))
    }

    /// Toolkit backed by the compiled-in assets
    pub fn embedded() -> Self {
        Self::from_assets(NlpAssets::embedded())
    }

    /// Toolkit backed by already-loaded assets
    pub fn from_assets(assets: NlpAssets) -> Self {
        Self { assets }
    }

    /// The loaded assets
    pub fn assets(&self) -> &NlpAssets {
        &self.assets
    }

    /// Tokenizer using the loaded stopwords
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(StopwordFilter::from_set(self.assets.stopwords.clone()))
    }

    /// Sentence segmenter using the loaded abbreviations
    pub fn segmenter(&self) -> SentenceSegmenter {
        SentenceSegmenter::new(self.assets.abbreviations.clone())
    }

    /// Heuristic entity classifier using the loaded lexicon
    pub fn classifier(&self) -> HeuristicEntityClassifier {
        HeuristicEntityClassifier::from_assets(&self.assets)
    }

    /// Bullet generator with the heuristic classifier
    pub fn bullet_generator(&self) -> Result<BulletGenerator<HeuristicEntityClassifier>, NlpError> {
        self.bullet_generator_with(self.classifier())
    }

    /// Bullet generator with a caller-supplied classifier
    pub fn bullet_generator_with<C>(&self, classifier: C) -> Result<BulletGenerator<C>, NlpError>
    where
        C: EntityClassifier,
    {
        Ok(BulletGenerator::new(
            self.segmenter(),
            FrequencyRanker::new(self.tokenizer()),
            ExclusionFilter::new()?,
            classifier,
        ))
    }
}
