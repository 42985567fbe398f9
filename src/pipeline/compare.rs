//! The comparison pipeline: two extractions feeding one diff.

use crate::core::{DiffResult, TextRecognizer};
use crate::domain::{ComparisonResult, ExtractedText, ImageInput, LanguageCode};
use crate::pipeline::config::OcrDiffConfig;
use crate::pipeline::extract::TextExtractor;
use crate::pipeline::scan::ScanState;
use crate::processors::compare_texts;
use std::sync::Arc;

/// Compares the text content of two images.
///
/// Each comparison is independent and stateless with respect to prior
/// comparisons: nothing is cached between runs. The only shared state is
/// the scanning counter, which presentation collaborators may poll while a
/// comparison is in flight.
///
/// Built via [`OcrDiff::builder`].
pub struct OcrDiff {
    extractor: TextExtractor,
    config: OcrDiffConfig,
    scan: Arc<ScanState>,
}

impl OcrDiff {
    /// Starts building a pipeline around the given recognition engine.
    pub fn builder(recognizer: impl TextRecognizer + 'static) -> OcrDiffBuilder {
        OcrDiffBuilder {
            recognizer: Arc::new(recognizer),
            config: OcrDiffConfig::default(),
        }
    }

    /// Extracts text from both images and compares them word by word.
    ///
    /// A missing image on either side is valid and contributes no words.
    /// When parallel extraction is enabled and both images are present, the
    /// two extractions run concurrently; they share no mutable state. The
    /// scanning flag covers the whole span of the comparison, so it cannot
    /// dip while the second extraction is still pending.
    ///
    /// # Errors
    ///
    /// The first decode or extraction failure propagates; the comparison is
    /// not produced from partial results, and the scanning flag is cleared.
    pub fn compare_images(
        &self,
        reference: Option<&ImageInput>,
        candidate: Option<&ImageInput>,
    ) -> DiffResult<ComparisonResult> {
        let _guard = self.scan.begin();

        let (reference_text, candidate_text) =
            if self.config.parallel_extraction && reference.is_some() && candidate.is_some() {
                let (reference_text, candidate_text) = rayon::join(
                    || self.extractor.extract(reference),
                    || self.extractor.extract(candidate),
                );
                (reference_text?, candidate_text?)
            } else {
                (
                    self.extractor.extract(reference)?,
                    self.extractor.extract(candidate)?,
                )
            };

        let result = compare_texts(reference_text.as_str(), candidate_text.as_str());
        tracing::info!(
            total = result.total_distinct_words,
            reference = result.reference_word_count,
            candidate = result.candidate_word_count,
            common = result.common_word_count(),
            "comparison complete"
        );
        Ok(result)
    }

    /// Extracts text from a single optional image.
    pub fn extract_text(&self, input: Option<&ImageInput>) -> DiffResult<ExtractedText> {
        self.extractor.extract(input)
    }

    /// True while any extraction or comparison is in flight.
    pub fn is_scanning(&self) -> bool {
        self.scan.is_scanning()
    }

    /// The shared scanning state, for presentation collaborators that poll
    /// from another thread.
    pub fn scan_state(&self) -> Arc<ScanState> {
        Arc::clone(&self.scan)
    }

    /// The active configuration.
    pub fn config(&self) -> &OcrDiffConfig {
        &self.config
    }
}

/// Builder for [`OcrDiff`].
pub struct OcrDiffBuilder {
    recognizer: Arc<dyn TextRecognizer>,
    config: OcrDiffConfig,
}

impl OcrDiffBuilder {
    /// Replaces the whole configuration.
    pub fn config(mut self, config: OcrDiffConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the recognition language.
    pub fn language(mut self, language: impl Into<LanguageCode>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Enables or disables concurrent extraction of the two images.
    pub fn parallel_extraction(mut self, parallel: bool) -> Self {
        self.config.parallel_extraction = parallel;
        self
    }

    /// Builds the pipeline.
    pub fn build(self) -> OcrDiff {
        let scan = Arc::new(ScanState::new());
        let extractor = TextExtractor::new(
            self.recognizer,
            self.config.language.clone(),
            Arc::clone(&scan),
        );
        OcrDiff {
            extractor,
            config: self.config,
            scan,
        }
    }
}
