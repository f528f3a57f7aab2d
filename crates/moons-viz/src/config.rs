use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VizError;

/// An RGB color.
pub type Rgb = [u8; 3];

/// Colors and layout used by the match drawing functions.
///
/// Every color is optional: a `None` color disables the corresponding layer.
/// Fields missing from a json document take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Color of the inlier correspondences.
    pub inlier_color: Option<Rgb>,
    /// Color of the tentative correspondences.
    pub tentative_color: Option<Rgb>,
    /// Color of the local features of both images.
    pub feature_color: Option<Rgb>,
    /// Color of the frames reprojected with a homography.
    pub reprojected_color: Option<Rgb>,
    /// Color of the epipolar lines.
    pub epipolar_color: Option<Rgb>,
    /// Color of the image border reprojected with a homography.
    pub homography_color: Option<Rgb>,
    /// Stack the images vertically instead of side by side.
    pub vertical: bool,
    /// Line thickness in pixels.
    pub thickness: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            inlier_color: Some([51, 255, 51]),
            tentative_color: Some([204, 204, 0]),
            feature_color: Some([51, 128, 255]),
            reprojected_color: Some([51, 128, 255]),
            epipolar_color: Some([128, 0, 128]),
            homography_color: Some([0, 0, 255]),
            vertical: false,
            thickness: 1,
        }
    }
}

impl DrawConfig {
    /// Parse a configuration from a json string.
    ///
    /// # Example
    ///
    /// ```
    /// use moons_viz::DrawConfig;
    ///
    /// let json = r#"{"vertical": true, "feature_color": null}"#;
    /// let config = DrawConfig::from_json_str(json).unwrap();
    /// assert!(config.vertical);
    /// assert_eq!(config.feature_color, None);
    /// assert_eq!(config.inlier_color, DrawConfig::default().inlier_color);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, VizError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a json file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VizError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = DrawConfig::default();
        assert_eq!(config.inlier_color, Some([51, 255, 51]));
        assert_eq!(config.tentative_color, Some([204, 204, 0]));
        assert_eq!(config.epipolar_color, Some([128, 0, 128]));
        assert_eq!(config.homography_color, Some([0, 0, 255]));
        assert!(!config.vertical);
        assert_eq!(config.thickness, 1);
    }

    #[test]
    fn config_from_empty_json() -> Result<(), VizError> {
        assert_eq!(DrawConfig::from_json_str("{}")?, DrawConfig::default());
        Ok(())
    }

    #[test]
    fn config_from_file() -> Result<(), VizError> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"thickness": 3, "tentative_color": null}}"#)?;

        let config = DrawConfig::from_json_file(file.path())?;
        assert_eq!(config.thickness, 3);
        assert_eq!(config.tentative_color, None);
        assert_eq!(config.inlier_color, Some([51, 255, 51]));
        Ok(())
    }

    #[test]
    fn config_invalid_json() {
        let res = DrawConfig::from_json_str(r#"{"thickness": "thick"}"#);
        assert!(matches!(res, Err(VizError::Json(_))));
    }
}
