//! Recognition backend built on the pure-Rust `ocrs` engine.

use crate::core::{DiffResult, OcrDiffError, TextRecognizer};
use crate::domain::{LanguageCode, PreprocessedImage};
use ocrs::{DimOrder, ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use rten_tensor::{AsView, NdTensor};
use std::path::Path;
use std::sync::Mutex;

const ENGINE_NAME: &str = "ocrs";

/// [`TextRecognizer`] backed by `ocrs` detection and recognition models.
///
/// The `ocrs` models recognize Latin-script text and ignore the requested
/// language code. The engine is kept behind a mutex because its thread
/// safety is not part of its public contract; concurrent extractions
/// serialize on it.
pub struct OcrsRecognizer {
    engine: Mutex<OcrEngine>,
}

impl OcrsRecognizer {
    /// Loads detection and recognition models from `.rten` files.
    pub fn from_model_paths(detection: &Path, recognition: &Path) -> DiffResult<Self> {
        let detection_data = std::fs::read(detection)?;
        let recognition_data = std::fs::read(recognition)?;

        let detection_model = Model::load(detection_data)
            .map_err(|e| OcrDiffError::engine_init(ENGINE_NAME, e))?;
        let recognition_model = Model::load(recognition_data)
            .map_err(|e| OcrDiffError::engine_init(ENGINE_NAME, e))?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(|e| OcrDiffError::engine_init(ENGINE_NAME, e))?;

        Ok(Self {
            engine: Mutex::new(engine),
        })
    }
}

impl TextRecognizer for OcrsRecognizer {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn recognize(
        &self,
        image: &PreprocessedImage,
        _language: &LanguageCode,
    ) -> DiffResult<String> {
        let Some(img) = image.image() else {
            return Ok(String::new());
        };

        let gray = img.to_luma8();
        let (width, height) = gray.dimensions();
        let pixels: Vec<f32> = gray.pixels().map(|p| p.0[0] as f32 / 255.0).collect();
        let tensor = NdTensor::from_data([1, height as usize, width as usize], pixels);

        // A poisoned lock only means another extraction panicked; the
        // engine itself holds immutable model state, so recover the guard.
        let engine = self
            .engine
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let source = ImageSource::from_tensor(tensor.view(), DimOrder::Chw)
            .map_err(|e| OcrDiffError::extraction(ENGINE_NAME, "build image source", e))?;
        let input = engine
            .prepare_input(source)
            .map_err(|e| OcrDiffError::extraction(ENGINE_NAME, "prepare input", e))?;
        engine
            .get_text(&input)
            .map_err(|e| OcrDiffError::extraction(ENGINE_NAME, "recognize text", e))
    }
}
