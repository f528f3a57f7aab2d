use crate::{
    error::FeatureError,
    keypoint::{DMatch, KeyPoint},
    laf::Laf,
};

/// Magnification between the SIFT keypoint size and the frame scale.
pub const SIFT_MR_SIZE: f64 = 6.0;

/// Magnification between the ORB keypoint size and the frame scale.
pub const ORB_MR_SIZE: f64 = 1.0;

/// Convert OpenCV keypoints into local affine frames.
///
/// The frame center is the keypoint location, its scale is `mr_size * size` and its
/// orientation is `-angle`, since OpenCV angles are clockwise.
///
/// # Arguments
///
/// * `kpts` - The keypoints to convert.
/// * `mr_size` - The magnification factor between the keypoint size and the frame scale.
pub fn laf_from_opencv_kpts(kpts: &[KeyPoint], mr_size: f64) -> Vec<Laf> {
    kpts.iter()
        .map(|kp| {
            Laf::from_center_scale_ori(
                [kp.pt[0] as f64, kp.pt[1] as f64],
                mr_size * kp.size as f64,
                -(kp.angle as f64),
            )
        })
        .collect()
}

/// Same as [`laf_from_opencv_kpts`] but also returns the keypoint responses.
pub fn laf_from_opencv_kpts_with_resp(kpts: &[KeyPoint], mr_size: f64) -> (Vec<Laf>, Vec<f32>) {
    let lafs = laf_from_opencv_kpts(kpts, mr_size);
    let resps = kpts.iter().map(|kp| kp.response).collect();
    (lafs, resps)
}

/// Convert SIFT keypoints into local affine frames.
pub fn laf_from_opencv_sift_kpts(kpts: &[KeyPoint]) -> Vec<Laf> {
    laf_from_opencv_kpts(kpts, SIFT_MR_SIZE)
}

/// Convert ORB keypoints into local affine frames.
pub fn laf_from_opencv_orb_kpts(kpts: &[KeyPoint]) -> Vec<Laf> {
    laf_from_opencv_kpts(kpts, ORB_MR_SIZE)
}

/// Convert local affine frames into OpenCV keypoints.
///
/// # Arguments
///
/// * `lafs` - The frames to convert.
/// * `mr_size` - The magnification factor between the keypoint size and the frame scale.
/// * `resps` - Optional responses copied into the keypoints, one per frame.
///
/// # Errors
///
/// Returns [`FeatureError::LengthMismatch`] if `resps` does not have one value per frame.
pub fn opencv_kpts_from_laf(
    lafs: &[Laf],
    mr_size: f64,
    resps: Option<&[f32]>,
) -> Result<Vec<KeyPoint>, FeatureError> {
    if let Some(resps) = resps {
        if resps.len() != lafs.len() {
            return Err(FeatureError::LengthMismatch(
                "responses",
                resps.len(),
                lafs.len(),
            ));
        }
    }

    let kpts = lafs
        .iter()
        .enumerate()
        .map(|(i, laf)| {
            let [x, y] = laf.center();
            let response = resps.map_or(0.0, |r| r[i]);
            KeyPoint::new(
                x as f32,
                y as f32,
                (laf.scale() / mr_size) as f32,
                -laf.orientation() as f32,
                response,
            )
        })
        .collect();

    Ok(kpts)
}

/// Convert local affine frames into SIFT keypoints.
pub fn opencv_sift_kpts_from_laf(
    lafs: &[Laf],
    resps: Option<&[f32]>,
) -> Result<Vec<KeyPoint>, FeatureError> {
    opencv_kpts_from_laf(lafs, SIFT_MR_SIZE, resps)
}

/// Convert local affine frames into ORB keypoints.
pub fn opencv_orb_kpts_from_laf(
    lafs: &[Laf],
    resps: Option<&[f32]>,
) -> Result<Vec<KeyPoint>, FeatureError> {
    opencv_kpts_from_laf(lafs, ORB_MR_SIZE, resps)
}

/// Build OpenCV matches from distances and `[query, train]` index pairs.
///
/// # Errors
///
/// Returns [`FeatureError::LengthMismatch`] if there is not one distance per index pair.
pub fn cv2_matches_from_kornia(
    match_dists: &[f32],
    match_idxs: &[[usize; 2]],
) -> Result<Vec<DMatch>, FeatureError> {
    if match_dists.len() != match_idxs.len() {
        return Err(FeatureError::LengthMismatch(
            "match distances",
            match_dists.len(),
            match_idxs.len(),
        ));
    }

    Ok(match_idxs
        .iter()
        .zip(match_dists.iter())
        .map(|(idx, &d)| DMatch::new(idx[0], idx[1], d))
        .collect())
}

/// Split OpenCV matches into distances and `[query, train]` index pairs.
pub fn kornia_matches_from_cv2(matches: &[DMatch]) -> (Vec<f32>, Vec<[usize; 2]>) {
    matches
        .iter()
        .map(|m| (m.distance, [m.query_idx, m.train_idx]))
        .unzip()
}
