//! Text extraction: preprocessing plus one recognition call per image.

use crate::core::{DiffResult, TextRecognizer};
use crate::domain::{ExtractedText, ImageInput, LanguageCode};
use crate::pipeline::scan::ScanState;
use crate::processors::preprocess;
use std::sync::Arc;

/// Runs the preprocess-then-recognize sequence for a single image.
///
/// Owns no image data; each call operates on the caller's input handle and
/// produces a fresh [`ExtractedText`]. The shared [`ScanState`] is raised
/// for the duration of each attempt and released on every exit path.
pub struct TextExtractor {
    recognizer: Arc<dyn TextRecognizer>,
    language: LanguageCode,
    scan: Arc<ScanState>,
}

impl TextExtractor {
    pub fn new(
        recognizer: Arc<dyn TextRecognizer>,
        language: LanguageCode,
        scan: Arc<ScanState>,
    ) -> Self {
        Self {
            recognizer,
            language,
            scan,
        }
    }

    /// Extracts trimmed text from one optional image.
    ///
    /// With no input this returns [`ExtractedText::NoInput`] immediately;
    /// neither preprocessing nor the recognition engine is invoked and the
    /// scanning state is untouched. Otherwise the image is preprocessed and
    /// handed to the engine once, and the output is trimmed and classified.
    ///
    /// # Errors
    ///
    /// Decode and engine failures propagate to the caller; retry policy, if
    /// any, belongs there. The scanning state is released even on failure.
    pub fn extract(&self, input: Option<&ImageInput>) -> DiffResult<ExtractedText> {
        let Some(input) = input else {
            return Ok(ExtractedText::NoInput);
        };

        let _guard = self.scan.begin();
        let preprocessed = preprocess(Some(input))?;
        tracing::debug!(
            engine = self.recognizer.name(),
            language = %self.language,
            "running text recognition"
        );
        let raw = self.recognizer.recognize(&preprocessed, &self.language)?;
        let text = ExtractedText::from_recognized(&raw);
        tracing::debug!(
            engine = self.recognizer.name(),
            chars = text.as_str().len(),
            "text recognition finished"
        );
        Ok(text)
    }

    /// The language forwarded to the recognition engine.
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OcrDiffError;
    use crate::domain::PreprocessedImage;
    use image::{DynamicImage, RgbImage};
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRecognizer {
        text: &'static str,
        calls: AtomicUsize,
    }

    impl CountingRecognizer {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TextRecognizer for CountingRecognizer {
        fn name(&self) -> &str {
            "counting-stub"
        }

        fn recognize(
            &self,
            _image: &PreprocessedImage,
            _language: &LanguageCode,
        ) -> DiffResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.to_string())
        }
    }

    struct FailingRecognizer;

    impl TextRecognizer for FailingRecognizer {
        fn name(&self) -> &str {
            "failing-stub"
        }

        fn recognize(
            &self,
            _image: &PreprocessedImage,
            _language: &LanguageCode,
        ) -> DiffResult<String> {
            Err(OcrDiffError::extraction(
                self.name(),
                "recognize",
                std::io::Error::new(std::io::ErrorKind::Other, "engine fault"),
            ))
        }
    }

    fn png_input() -> ImageInput {
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(RgbImage::new(2, 2))
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        ImageInput::from_bytes(bytes.into_inner())
    }

    fn extractor(recognizer: Arc<dyn TextRecognizer>) -> (TextExtractor, Arc<ScanState>) {
        let scan = Arc::new(ScanState::new());
        let extractor = TextExtractor::new(recognizer, LanguageCode::default(), Arc::clone(&scan));
        (extractor, scan)
    }

    #[test]
    fn test_none_input_skips_engine_entirely() {
        let recognizer = Arc::new(CountingRecognizer::new("unused"));
        let (extractor, scan) =
            extractor(Arc::clone(&recognizer) as Arc<dyn TextRecognizer>);

        let text = extractor.extract(None).unwrap();
        assert_eq!(text, ExtractedText::NoInput);
        assert_eq!(recognizer.calls.load(Ordering::SeqCst), 0);
        assert!(!scan.is_scanning());
    }

    #[test]
    fn test_extract_trims_engine_output() {
        let recognizer = Arc::new(CountingRecognizer::new("  hola mundo \n"));
        let (extractor, _) = extractor(recognizer);

        let text = extractor.extract(Some(&png_input())).unwrap();
        assert_eq!(text, ExtractedText::Text("hola mundo".to_string()));
    }

    #[test]
    fn test_blank_engine_output_is_empty_not_no_input() {
        let recognizer = Arc::new(CountingRecognizer::new("   "));
        let (extractor, _) = extractor(recognizer);

        let text = extractor.extract(Some(&png_input())).unwrap();
        assert_eq!(text, ExtractedText::Empty);
    }

    #[test]
    fn test_engine_failure_clears_scan_state() {
        let (extractor, scan) = extractor(Arc::new(FailingRecognizer));

        let result = extractor.extract(Some(&png_input()));
        assert!(matches!(result, Err(OcrDiffError::Extraction { .. })));
        assert!(!scan.is_scanning());
    }

    #[test]
    fn test_decode_failure_clears_scan_state() {
        let recognizer = Arc::new(CountingRecognizer::new("unused"));
        let (extractor, scan) =
            extractor(Arc::clone(&recognizer) as Arc<dyn TextRecognizer>);

        let bad = ImageInput::from_bytes(b"garbage".to_vec());
        let result = extractor.extract(Some(&bad));
        assert!(matches!(result, Err(OcrDiffError::Decode(_))));
        assert_eq!(recognizer.calls.load(Ordering::SeqCst), 0);
        assert!(!scan.is_scanning());
    }
}
