use std::path::Path;

use serde::{Deserialize, Serialize};

use moons_feature::{get_laf_centers, perspective_transform_lafs, Laf};
use moons_geometry::{
    clip_lines, compute_correspond_epilines, compute_correspond_epilines_inverse,
    linalg::{inverse_mat33, perspective_transform_points},
    ExecutionStrategy, Line, Mat3, Point2, Segment, Viewport,
};
use moons_image::{Image, ImageSize};

use crate::{
    canvas::MatchCanvas,
    config::{DrawConfig, Rgb},
    draw::{draw_laf, draw_polyline, draw_segment},
    error::VizError,
    source::ImageSource,
};

/// Borrowed view of a set of tentative matches between two sets of frames.
#[derive(Debug, Clone, Copy)]
pub struct LafMatches<'a> {
    /// Frames of the first image.
    pub lafs1: &'a [Laf],
    /// Frames of the second image.
    pub lafs2: &'a [Laf],
    /// Tentative correspondences as `[index in lafs1, index in lafs2]`.
    pub tent_idxs: &'a [[usize; 2]],
    /// Which tentative correspondences are inliers, one flag per correspondence.
    pub inlier_mask: Option<&'a [bool]>,
}

impl<'a> LafMatches<'a> {
    /// Check that every index and the mask fit the frame lists.
    pub fn validate(&self) -> Result<(), VizError> {
        for idx in self.tent_idxs {
            for (which, index, len) in [
                ("lafs1", idx[0], self.lafs1.len()),
                ("lafs2", idx[1], self.lafs2.len()),
            ] {
                if index >= len {
                    return Err(VizError::IndexOutOfRange { which, index, len });
                }
            }
        }

        if let Some(mask) = self.inlier_mask {
            if mask.len() != self.tent_idxs.len() {
                return Err(VizError::MaskLengthMismatch(
                    mask.len(),
                    self.tent_idxs.len(),
                ));
            }
        }
        Ok(())
    }

    /// Iterate the frame pairs of the tentative correspondences.
    fn tentatives(&self) -> impl Iterator<Item = (&'a Laf, &'a Laf)> + '_ {
        let (lafs1, lafs2) = (self.lafs1, self.lafs2);
        self.tent_idxs
            .iter()
            .map(move |idx| (&lafs1[idx[0]], &lafs2[idx[1]]))
    }

    /// Iterate the frame pairs of the inliers. Without a mask every tentative is an inlier.
    fn inliers(&self) -> impl Iterator<Item = (&'a Laf, &'a Laf)> + '_ {
        let mask = self.inlier_mask;
        self.tentatives()
            .enumerate()
            .filter(move |(i, _)| mask.map_or(true, |m| m[*i]))
            .map(|(_, pair)| pair)
    }
}

/// A matching result as produced by a matcher and a robust estimator.
///
/// This is the owned, serializable counterpart of [`LafMatches`] together with the
/// estimated two view geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingResult {
    /// Frames of the first image.
    pub lafs1: Vec<Laf>,
    /// Frames of the second image.
    pub lafs2: Vec<Laf>,
    /// Tentative correspondences as `[index in lafs1, index in lafs2]`.
    pub tent_idxs: Vec<[usize; 2]>,
    /// Inlier flags, one per tentative correspondence.
    #[serde(default)]
    pub inlier_mask: Option<Vec<bool>>,
    /// The fundamental matrix from the first to the second image.
    #[serde(default)]
    pub f: Option<Mat3>,
    /// The homography from the first to the second image.
    #[serde(default)]
    pub h: Option<Mat3>,
}

impl MatchingResult {
    /// Borrow the matches.
    pub fn view(&self) -> LafMatches<'_> {
        LafMatches {
            lafs1: &self.lafs1,
            lafs2: &self.lafs2,
            tent_idxs: &self.tent_idxs,
            inlier_mask: self.inlier_mask.as_deref(),
        }
    }

    /// Parse a matching result from a json string.
    pub fn from_json_str(json: &str) -> Result<Self, VizError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a matching result from a json file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VizError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

fn viewport_of(size: ImageSize) -> Result<Viewport, VizError> {
    Ok(Viewport::new(size.height as f64, size.width as f64)?)
}

/// Clip the lines to the viewport and draw them shifted by `offset`.
fn draw_epilines(
    canvas: &mut Image<u8, 3>,
    lines: &[Line],
    viewport: &Viewport,
    offset: Point2,
    color: Rgb,
    thickness: usize,
) -> Result<(), VizError> {
    let segments = clip_lines(lines, viewport, ExecutionStrategy::default())?;

    let mut skipped = 0;
    for segment in segments {
        match segment {
            Ok(segment) => {
                draw_segment(canvas, &segment.translated(offset), color, thickness);
            }
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("skipped {} epipolar lines outside the image", skipped);
    }
    Ok(())
}

/// Draw a correspondence as both frames plus the segment joining their centers.
fn draw_correspondence(
    canvas: &mut MatchCanvas,
    laf1: &Laf,
    laf2: &Laf,
    color: Rgb,
    thickness: usize,
) {
    let laf2 = laf2.translated(canvas.offset());
    let segment = Segment::new(laf1.center(), laf2.center());
    let img = canvas.image_mut();
    draw_laf(img, laf1, color, thickness);
    draw_laf(img, &laf2, color, thickness);
    draw_segment(img, &segment, color, thickness);
}

/// Draw tentative matches, inliers, epipolar lines and the homography reprojection.
///
/// The two images are pasted side by side (or stacked when `config.vertical` is set)
/// and the layers are drawn from back to front:
///
/// * every frame of both images in `feature_color`,
/// * the epipolar lines of the inliers in both images in `epipolar_color` when the
///   fundamental matrix is given,
/// * the border of the first image and its reprojection into the second image in
///   `homography_color` when the homography is given,
/// * every tentative correspondence in `tentative_color`,
/// * the inliers in `inlier_color`.
///
/// Without an inlier mask the inlier layer is skipped and every tentative correspondence
/// gets its epipolar lines. Epipolar lines missing the image are skipped.
///
/// # Arguments
///
/// * `matches` - The frames and tentative correspondences.
/// * `img1` - The first image.
/// * `img2` - The second image.
/// * `config` - Colors and layout.
/// * `fundamental` - Fundamental matrix with `x2ᵀ F x1 = 0`.
/// * `homography` - Homography mapping the first image to the second.
///
/// # Errors
///
/// * [`VizError::IndexOutOfRange`] if a tentative index exceeds its frame list.
/// * [`VizError::MaskLengthMismatch`] if the mask does not cover the tentatives.
pub fn draw_laf_matches(
    matches: &LafMatches,
    img1: &ImageSource,
    img2: &ImageSource,
    config: &DrawConfig,
    fundamental: Option<&Mat3>,
    homography: Option<&Mat3>,
) -> Result<Image<u8, 3>, VizError> {
    matches.validate()?;

    let img1 = img1.to_rgb_image()?;
    let img2 = img2.to_rgb_image()?;
    let mut canvas = MatchCanvas::new(&img1, &img2, config.vertical)?;
    let offset = canvas.offset();
    let thickness = config.thickness;

    if let Some(color) = config.feature_color {
        for laf in matches.lafs1 {
            draw_laf(canvas.image_mut(), laf, color, thickness);
        }
        for laf in matches.lafs2 {
            draw_laf(canvas.image_mut(), &laf.translated(offset), color, thickness);
        }
    }

    if let (Some(fundamental), Some(color)) = (fundamental, config.epipolar_color) {
        let (inl1, inl2): (Vec<Laf>, Vec<Laf>) = matches.inliers().unzip();
        let pts1 = get_laf_centers(&inl1);
        let pts2 = get_laf_centers(&inl2);

        // lines in the first image come from the points of the second one
        let lines1 = compute_correspond_epilines_inverse(&pts2, fundamental);
        let lines2 = compute_correspond_epilines(&pts1, fundamental);

        let viewport1 = viewport_of(canvas.size1())?;
        let viewport2 = viewport_of(canvas.size2())?;
        let img = canvas.image_mut();
        draw_epilines(img, &lines1, &viewport1, [0.0, 0.0], color, thickness)?;
        draw_epilines(img, &lines2, &viewport2, offset, color, thickness)?;
    }

    if let (Some(homography), Some(color)) = (homography, config.homography_color) {
        let size1 = canvas.size1();
        let (w, h) = (size1.width as f64 - 1.0, size1.height as f64 - 1.0);
        let corners = [[0.0, 0.0], [0.0, h], [w, h], [w, 0.0], [0.0, 0.0]];
        let warped = perspective_transform_points(homography, &corners)
            .iter()
            .map(|p| canvas.to_canvas(p))
            .collect::<Vec<_>>();

        let img = canvas.image_mut();
        draw_polyline(img, &corners, color, thickness);
        draw_polyline(img, &warped, color, thickness);
    }

    if let Some(color) = config.tentative_color {
        for (laf1, laf2) in matches.tentatives() {
            draw_correspondence(&mut canvas, laf1, laf2, color, thickness);
        }
    }

    if let (Some(_), Some(color)) = (matches.inlier_mask, config.inlier_color) {
        for (laf1, laf2) in matches.inliers() {
            draw_correspondence(&mut canvas, laf1, laf2, color, thickness);
        }
    }

    log::debug!(
        "drew {} tentative matches between {} and {} frames",
        matches.tent_idxs.len(),
        matches.lafs1.len(),
        matches.lafs2.len()
    );

    Ok(canvas.into_image())
}

/// Same as [`draw_laf_matches`] with the matches and geometry taken from a [`MatchingResult`].
pub fn draw_laf_matches_from_result(
    result: &MatchingResult,
    img1: &ImageSource,
    img2: &ImageSource,
    config: &DrawConfig,
) -> Result<Image<u8, 3>, VizError> {
    draw_laf_matches(
        &result.view(),
        img1,
        img2,
        config,
        result.f.as_ref(),
        result.h.as_ref(),
    )
}

/// Draw the inliers and their reprojection with a homography in both images.
///
/// In the first image the inlier frames are drawn in `inlier_color` and the matching
/// frames of the second image, mapped back with `H⁻¹`, in `reprojected_color`. Each
/// inlier frame is joined to its reprojected match by a segment in `inlier_color`.
/// The second image gets the symmetric drawing with `H`. Without a mask every tentative
/// correspondence is drawn.
///
/// # Errors
///
/// Besides the validation errors of [`draw_laf_matches`], returns
/// [`VizError::Geometry`] if the homography cannot be inverted.
pub fn draw_laf_inliers_perspective_reprojected(
    matches: &LafMatches,
    img1: &ImageSource,
    img2: &ImageSource,
    config: &DrawConfig,
    homography: &Mat3,
) -> Result<Image<u8, 3>, VizError> {
    matches.validate()?;
    let homography_inv = inverse_mat33(homography)?;

    let img1 = img1.to_rgb_image()?;
    let img2 = img2.to_rgb_image()?;
    let mut canvas = MatchCanvas::new(&img1, &img2, config.vertical)?;
    let offset = canvas.offset();
    let thickness = config.thickness;

    let (inl1, inl2): (Vec<Laf>, Vec<Laf>) = matches.inliers().unzip();
    let to_image2 = |lafs: &[Laf]| {
        lafs.iter()
            .map(|laf| laf.translated(offset))
            .collect::<Vec<_>>()
    };

    // frames of one image mapped into the other, in canvas coordinates
    let reproj1 = perspective_transform_lafs(&homography_inv, &inl2);
    let reproj2 = to_image2(&perspective_transform_lafs(homography, &inl1));
    let inl2 = to_image2(&inl2);

    if let Some(color) = config.reprojected_color {
        let img = canvas.image_mut();
        for laf in reproj1.iter().chain(reproj2.iter()) {
            draw_laf(img, laf, color, thickness);
        }
    }

    if let Some(color) = config.inlier_color {
        let img = canvas.image_mut();
        for laf in inl1.iter().chain(inl2.iter()) {
            draw_laf(img, laf, color, thickness);
        }

        // each correspondence is drawn inside both images
        let corrs1 = inl1.iter().zip(reproj1.iter());
        let corrs2 = reproj2.iter().zip(inl2.iter());
        for (from, to) in corrs1.chain(corrs2) {
            let segment = Segment::new(from.center(), to.center());
            draw_segment(img, &segment, color, thickness);
        }
    }

    log::debug!("drew {} reprojected inliers", inl1.len());
    Ok(canvas.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moons_geometry::linalg::IDENTITY_MAT3;

    const BLACK: [u8; 3] = [0, 0, 0];

    fn black(width: usize, height: usize) -> ImageSource {
        let img = Image::<u8, 3>::from_size_val(ImageSize { width, height }, 0)
            .expect("valid size");
        ImageSource::from(img)
    }

    fn pixel(img: &Image<u8, 3>, x: usize, y: usize) -> [u8; 3] {
        let c = |ch| img.get_pixel(x, y, ch).expect("pixel in bounds");
        [c(0), c(1), c(2)]
    }

    fn nothing() -> DrawConfig {
        DrawConfig {
            inlier_color: None,
            tentative_color: None,
            feature_color: None,
            reprojected_color: None,
            epipolar_color: None,
            homography_color: None,
            ..Default::default()
        }
    }

    /// Draw without geometry, the first image being a 20x20 black square.
    fn draw_matches(
        result: &MatchingResult,
        img2: &ImageSource,
        config: &DrawConfig,
    ) -> Result<Image<u8, 3>, VizError> {
        draw_laf_matches(&result.view(), &black(20, 20), img2, config, None, None)
    }

    fn sample_result() -> MatchingResult {
        MatchingResult {
            lafs1: vec![
                Laf::from_center_scale_ori([5.0, 5.0], 2.0, 0.0),
                Laf::from_center_scale_ori([15.0, 12.0], 2.0, 0.0),
            ],
            lafs2: vec![
                Laf::from_center_scale_ori([5.0, 5.0], 2.0, 0.0),
                Laf::from_center_scale_ori([15.0, 12.0], 2.0, 0.0),
            ],
            tent_idxs: vec![[0, 0], [1, 1]],
            inlier_mask: Some(vec![true, false]),
            f: None,
            h: None,
        }
    }

    #[test]
    fn validate_indices_and_mask() {
        let mut result = sample_result();
        assert!(result.view().validate().is_ok());

        result.tent_idxs.push([0, 7]);
        result.inlier_mask = Some(vec![true, false, true]);
        assert!(matches!(
            result.view().validate(),
            Err(VizError::IndexOutOfRange {
                which: "lafs2",
                index: 7,
                len: 2
            })
        ));

        let mut result = sample_result();
        result.inlier_mask = Some(vec![true]);
        assert!(matches!(
            result.view().validate(),
            Err(VizError::MaskLengthMismatch(1, 2))
        ));
    }

    #[test]
    fn matches_canvas_layout() -> Result<(), VizError> {
        let result = sample_result();
        let out = draw_matches(&result, &black(30, 10), &nothing())?;
        assert_eq!(out.size(), ImageSize { width: 50, height: 20 });
        assert!(out.as_slice().iter().all(|&v| v == 0));

        let config = DrawConfig {
            vertical: true,
            ..nothing()
        };
        let out = draw_matches(&result, &black(30, 10), &config)?;
        assert_eq!(out.size(), ImageSize { width: 30, height: 30 });
        Ok(())
    }

    #[test]
    fn matches_tentatives_and_inliers() -> Result<(), VizError> {
        let result = sample_result();
        let config = DrawConfig {
            inlier_color: Some([0, 255, 0]),
            tentative_color: Some([255, 255, 0]),
            ..nothing()
        };
        let out = draw_matches(&result, &black(20, 20), &config)?;

        // the inlier is drawn over its tentative, the outlier keeps the tentative color
        assert_eq!(pixel(&out, 10, 5), [0, 255, 0]);
        assert_eq!(pixel(&out, 25, 5), [0, 255, 0]);
        assert_eq!(pixel(&out, 25, 12), [255, 255, 0]);
        assert_eq!(pixel(&out, 35, 12), [255, 255, 0]);
        assert_eq!(pixel(&out, 0, 19), BLACK);
        Ok(())
    }

    #[test]
    fn matches_without_mask_skip_inliers() -> Result<(), VizError> {
        let mut result = sample_result();
        result.inlier_mask = None;
        let config = DrawConfig {
            inlier_color: Some([0, 255, 0]),
            ..nothing()
        };
        let out = draw_matches(&result, &black(20, 20), &config)?;
        assert!(out.as_slice().iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn matches_features() -> Result<(), VizError> {
        let mut result = sample_result();
        result.tent_idxs.clear();
        result.inlier_mask = None;
        let config = DrawConfig {
            feature_color: Some([1, 2, 3]),
            ..nothing()
        };
        let out = draw_matches(&result, &black(20, 20), &config)?;
        // centers of the frames in both images
        assert_eq!(pixel(&out, 5, 5), [1, 2, 3]);
        assert_eq!(pixel(&out, 25, 5), [1, 2, 3]);
        assert_eq!(pixel(&out, 10, 10), BLACK);
        Ok(())
    }

    #[test]
    fn matches_epilines() -> Result<(), VizError> {
        // rectified pair: the epipolar line of (x, y) is the row y in the other image
        let fundamental = [[0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
        let mut result = sample_result();
        result.f = Some(fundamental);
        let config = DrawConfig {
            epipolar_color: Some([128, 0, 128]),
            ..nothing()
        };
        let out = draw_laf_matches_from_result(&result, &black(20, 20), &black(20, 20), &config)?;

        // only the inlier at row 5 gets lines, across both images
        assert_eq!(pixel(&out, 1, 5), [128, 0, 128]);
        assert_eq!(pixel(&out, 18, 5), [128, 0, 128]);
        assert_eq!(pixel(&out, 22, 5), [128, 0, 128]);
        assert_eq!(pixel(&out, 38, 5), [128, 0, 128]);
        assert_eq!(pixel(&out, 1, 12), BLACK);
        assert_eq!(pixel(&out, 22, 12), BLACK);

        // without a mask every tentative gets its lines
        result.inlier_mask = None;
        let out = draw_laf_matches_from_result(&result, &black(20, 20), &black(20, 20), &config)?;
        assert_eq!(pixel(&out, 1, 12), [128, 0, 128]);
        assert_eq!(pixel(&out, 22, 12), [128, 0, 128]);
        Ok(())
    }

    #[test]
    fn matches_homography_border() -> Result<(), VizError> {
        let mut result = sample_result();
        result.h = Some([[0.5, 0.0, 2.0], [0.0, 0.5, 3.0], [0.0, 0.0, 1.0]]);
        let config = DrawConfig {
            homography_color: Some([0, 0, 255]),
            ..nothing()
        };
        let out = draw_laf_matches_from_result(&result, &black(21, 21), &black(21, 21), &config)?;

        // border of the first image
        assert_eq!(pixel(&out, 0, 10), [0, 0, 255]);
        assert_eq!(pixel(&out, 20, 20), [0, 0, 255]);
        // border warped into the second image: corners (2, 3) and (12, 13)
        assert_eq!(pixel(&out, 21 + 2, 3), [0, 0, 255]);
        assert_eq!(pixel(&out, 21 + 12, 13), [0, 0, 255]);
        assert_eq!(pixel(&out, 21 + 7, 8), BLACK);
        assert_eq!(pixel(&out, 21 + 16, 16), BLACK);
        Ok(())
    }

    #[test]
    fn matches_invalid_index() {
        let mut result = sample_result();
        result.tent_idxs[0] = [5, 0];
        let config = DrawConfig::default();
        let res = draw_laf_matches_from_result(&result, &black(20, 20), &black(20, 20), &config);
        assert!(matches!(
            res,
            Err(VizError::IndexOutOfRange { which: "lafs1", .. })
        ));
    }

    #[test]
    fn matching_result_json() -> Result<(), VizError> {
        let json = r#"{
            "lafs1": [[[2.0, 0.0, 5.0], [0.0, 2.0, 5.0]]],
            "lafs2": [[[2.0, 0.0, 7.0], [0.0, 2.0, 6.0]]],
            "tent_idxs": [[0, 0]],
            "h": [[1.0, 0.0, 2.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]]
        }"#;
        let result = MatchingResult::from_json_str(json)?;
        assert_eq!(result.lafs2[0].center(), [7.0, 6.0]);
        assert_eq!(result.inlier_mask, None);
        assert_eq!(result.f, None);
        assert_eq!(result.h.map(|h| h[0][2]), Some(2.0));

        let back = MatchingResult::from_json_str(&serde_json::to_string(&result)?)?;
        assert_eq!(back, result);
        Ok(())
    }

    #[test]
    fn reprojected_identity() -> Result<(), VizError> {
        let result = sample_result();
        let config = DrawConfig {
            inlier_color: Some([0, 255, 0]),
            reprojected_color: Some([255, 0, 0]),
            ..nothing()
        };
        let out = draw_laf_inliers_perspective_reprojected(
            &result.view(),
            &black(20, 20),
            &black(20, 20),
            &config,
            &IDENTITY_MAT3,
        )?;
        // with the identity the reprojection lies under the inlier frames
        assert_eq!(pixel(&out, 5, 5), [0, 255, 0]);
        assert_eq!(pixel(&out, 25, 5), [0, 255, 0]);
        // the outlier is not drawn
        assert_eq!(pixel(&out, 15, 12), BLACK);
        assert_eq!(pixel(&out, 35, 12), BLACK);
        Ok(())
    }

    #[test]
    fn reprojected_correspondence_lines() -> Result<(), VizError> {
        let result = MatchingResult {
            lafs1: vec![Laf::from_center_scale_ori([5.0, 5.0], 2.0, 0.0)],
            lafs2: vec![Laf::from_center_scale_ori([15.0, 5.0], 2.0, 0.0)],
            tent_idxs: vec![[0, 0]],
            ..Default::default()
        };
        let config = DrawConfig {
            inlier_color: Some([0, 255, 0]),
            ..nothing()
        };

        let out = draw_laf_inliers_perspective_reprojected(
            &result.view(),
            &black(20, 20),
            &black(20, 20),
            &config,
            &IDENTITY_MAT3,
        )?;
        // (5, 5) to the match at (15, 5) in the first image, and the same in the second
        assert_eq!(pixel(&out, 10, 5), [0, 255, 0]);
        assert_eq!(pixel(&out, 20 + 10, 5), [0, 255, 0]);
        assert_eq!(pixel(&out, 10, 6), BLACK);

        let homography = [[1.0, 0.0, 4.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let out = draw_laf_inliers_perspective_reprojected(
            &result.view(),
            &black(20, 20),
            &black(20, 20),
            &config,
            &homography,
        )?;
        // first image: (5, 5) to H⁻¹(15, 5) = (11, 5)
        assert_eq!(pixel(&out, 8, 5), [0, 255, 0]);
        assert_eq!(pixel(&out, 14, 5), BLACK);
        // second image: H(5, 5) = (9, 5) to (15, 5)
        assert_eq!(pixel(&out, 20 + 12, 5), [0, 255, 0]);
        assert_eq!(pixel(&out, 20 + 7, 5), BLACK);
        Ok(())
    }

    #[test]
    fn reprojected_translation() -> Result<(), VizError> {
        let mut result = sample_result();
        result.inlier_mask = None;
        let homography = [[1.0, 0.0, 4.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let config = DrawConfig {
            inlier_color: None,
            reprojected_color: Some([255, 0, 0]),
            ..nothing()
        };
        let out = draw_laf_inliers_perspective_reprojected(
            &result.view(),
            &black(20, 20),
            &black(20, 20),
            &config,
            &homography,
        )?;
        // frame 0 of the first image lands at (9, 5) in the second one
        assert_eq!(pixel(&out, 20 + 9, 5), [255, 0, 0]);
        // frame 0 of the second image maps back to (1, 5) in the first one
        assert_eq!(pixel(&out, 1, 5), [255, 0, 0]);
        assert_eq!(pixel(&out, 5, 5), BLACK);
        Ok(())
    }

    #[test]
    fn reprojected_singular() {
        let result = sample_result();
        let res = draw_laf_inliers_perspective_reprojected(
            &result.view(),
            &black(20, 20),
            &black(20, 20),
            &DrawConfig::default(),
            &[[0.0; 3]; 3],
        );
        assert!(matches!(res, Err(VizError::Geometry(_))));
    }
}
