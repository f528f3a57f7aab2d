use moons_image::Image;

use crate::{
    convert::{laf_from_opencv_kpts_with_resp, SIFT_MR_SIZE},
    error::FeatureError,
    keypoint::KeyPoint,
    laf::Laf,
};

/// A detector producing OpenCV-style keypoints from an 8-bit grayscale image.
pub trait KeypointDetector {
    /// Detect keypoints, optionally restricted to the non-zero pixels of `mask`.
    fn detect(
        &self,
        image: &Image<u8, 1>,
        mask: Option<&Image<u8, 1>>,
    ) -> Result<Vec<KeyPoint>, FeatureError>;
}

/// A detector that also computes one descriptor per keypoint.
pub trait FeatureExtractor {
    /// The descriptor type, e.g. `[u8; 32]` for ORB or `[f32; 128]` for SIFT.
    type Descriptor;

    /// Detect keypoints and compute their descriptors.
    fn detect_and_compute(
        &self,
        image: &Image<u8, 1>,
        mask: Option<&Image<u8, 1>>,
    ) -> Result<(Vec<KeyPoint>, Vec<Self::Descriptor>), FeatureError>;
}

/// Wraps a [`KeypointDetector`] so that it outputs local affine frames.
pub struct LafDetector<D> {
    detector: D,
    mr_size: f64,
}

impl<D: KeypointDetector> LafDetector<D> {
    /// Create a new adapter.
    ///
    /// # Arguments
    ///
    /// * `detector` - The wrapped detector.
    /// * `mr_size` - The magnification factor between the keypoint size and the frame scale.
    pub fn new(detector: D, mr_size: f64) -> Self {
        Self { detector, mr_size }
    }

    /// Create an adapter with the SIFT magnification factor.
    pub fn with_sift_scale(detector: D) -> Self {
        Self::new(detector, SIFT_MR_SIZE)
    }

    /// Detect features in a float image.
    ///
    /// See [`Image::to_u8_autoscale`] for how the image is brought to 8 bits.
    ///
    /// # Returns
    ///
    /// The frames and the detector responses, one per keypoint.
    pub fn forward(
        &self,
        image: &Image<f32, 1>,
        mask: Option<&Image<u8, 1>>,
    ) -> Result<(Vec<Laf>, Vec<f32>), FeatureError> {
        let image_u8 = image.to_u8_autoscale()?;
        let kpts = self.detector.detect(&image_u8, mask)?;
        log::debug!("detected {} keypoints", kpts.len());
        Ok(laf_from_opencv_kpts_with_resp(&kpts, self.mr_size))
    }
}

/// Wraps a [`FeatureExtractor`] so that it outputs local affine frames and descriptors.
pub struct LafFeature<D> {
    extractor: D,
    mr_size: f64,
}

impl<D: FeatureExtractor> LafFeature<D> {
    /// Create a new adapter.
    pub fn new(extractor: D, mr_size: f64) -> Self {
        Self { extractor, mr_size }
    }

    /// Create an adapter with the SIFT magnification factor.
    pub fn with_sift_scale(extractor: D) -> Self {
        Self::new(extractor, SIFT_MR_SIZE)
    }

    /// Detect and describe features in a float image.
    ///
    /// # Returns
    ///
    /// The frames, the responses and the descriptors, one of each per keypoint.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::LengthMismatch`] if the extractor does not return one
    /// descriptor per keypoint.
    #[allow(clippy::type_complexity)]
    pub fn forward(
        &self,
        image: &Image<f32, 1>,
        mask: Option<&Image<u8, 1>>,
    ) -> Result<(Vec<Laf>, Vec<f32>, Vec<D::Descriptor>), FeatureError> {
        let image_u8 = image.to_u8_autoscale()?;
        let (kpts, descs) = self.extractor.detect_and_compute(&image_u8, mask)?;
        if kpts.len() != descs.len() {
            return Err(FeatureError::LengthMismatch(
                "descriptors",
                descs.len(),
                kpts.len(),
            ));
        }
        log::debug!("extracted {} features", kpts.len());

        let (lafs, resps) = laf_from_opencv_kpts_with_resp(&kpts, self.mr_size);
        Ok((lafs, resps, descs))
    }
}
