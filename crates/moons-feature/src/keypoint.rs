use serde::{Deserialize, Serialize};

/// A keypoint record laid out like OpenCV's `cv::KeyPoint`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    /// Coordinates of the keypoint as `[x, y]`.
    pub pt: [f32; 2],
    /// Diameter of the meaningful keypoint neighborhood.
    pub size: f32,
    /// Orientation in degrees, clockwise in image coordinates. `-1` when not applicable.
    pub angle: f32,
    /// Detector response, used to rank keypoints.
    pub response: f32,
    /// Pyramid octave the keypoint was extracted from.
    pub octave: i32,
    /// Object class the keypoint belongs to, `-1` when unused.
    pub class_id: i32,
}

impl KeyPoint {
    /// Create a new keypoint.
    ///
    /// # Arguments
    ///
    /// * `x` - The x coordinate of the keypoint.
    /// * `y` - The y coordinate of the keypoint.
    /// * `size` - The keypoint diameter.
    /// * `angle` - The keypoint orientation in degrees.
    /// * `response` - The detector response.
    pub fn new(x: f32, y: f32, size: f32, angle: f32, response: f32) -> Self {
        Self {
            pt: [x, y],
            size,
            angle,
            response,
            ..Default::default()
        }
    }
}

impl Default for KeyPoint {
    fn default() -> Self {
        Self {
            pt: [0.0, 0.0],
            size: 0.0,
            angle: -1.0,
            response: 0.0,
            octave: 0,
            class_id: -1,
        }
    }
}

/// A descriptor match laid out like OpenCV's `cv::DMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DMatch {
    /// Index of the query descriptor.
    pub query_idx: usize,
    /// Index of the train descriptor.
    pub train_idx: usize,
    /// Index of the train image.
    pub img_idx: i32,
    /// Distance between the descriptors.
    pub distance: f32,
}

impl DMatch {
    /// Create a new match between `query_idx` and `train_idx`.
    pub fn new(query_idx: usize, train_idx: usize, distance: f32) -> Self {
        Self {
            query_idx,
            train_idx,
            img_idx: -1,
            distance,
        }
    }
}
