//! Interfaces to the external recognition engine and image preprocessing.
//!
//! The pipeline never talks to a concrete OCR model. It consumes detections
//! through [`TextRecognizer`], a narrow object-safe trait implemented by the
//! surrounding application around whatever engine it loads. This keeps the
//! post-processing stages testable with synthetic detection lists and keeps
//! model loading, device selection, and inference entirely outside this
//! crate.

use crate::core::errors::OcrResult;
use crate::domain::Detection;
use image::RgbImage;

/// A long-lived handle to an external text recognition engine.
///
/// Implementations are expected to be initialized once by the caller before
/// first use and shared across invocations; the pipeline holds the handle
/// but never recreates it per call. Implementations must be safe to invoke
/// concurrently on independent images.
pub trait TextRecognizer: std::fmt::Debug + Send + Sync {
    /// Runs text recognition over an image.
    ///
    /// Returns one detection per recognized fragment, in no particular
    /// order. Confidence scores must lie in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine itself fails. An image in which the
    /// engine finds no text is an empty detection list, not an error.
    fn recognize(&self, image: &RgbImage) -> OcrResult<Vec<Detection>>;
}

/// An image preprocessing step applied before recognition.
///
/// Preprocessing (resizing, contrast enhancement, denoising, binarization)
/// is treated as a black box that maps an image to another image of the
/// same logical content.
pub trait ImagePreprocessor: std::fmt::Debug + Send + Sync {
    /// Transforms an image prior to recognition.
    fn preprocess(&self, image: RgbImage) -> OcrResult<RgbImage>;
}
