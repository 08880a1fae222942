// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the background quad geometry: center-crop math,
//! rotation mapping and the frame-driven texture-coordinate refresh

use ar_camera::FixedFrame;
use ar_camera::errors::RenderError;
use ar_camera::pipelines::background::geometry::{
    DEVICE_QUAD, QuadGeometry, Rotation, center_crop, rotated_tex_coords,
};

#[test]
fn test_portrait_screen_crops_landscape_image() {
    let crop = center_crop(1920, 1080, 9.0 / 16.0).unwrap();
    assert!(crop.u > 0.0);
    assert_eq!(crop.height, 1080.0, "full image height must be kept");
}

#[test]
fn test_equal_aspect_means_no_crop() {
    let crop = center_crop(1280, 720, 1280.0 / 720.0).unwrap();
    assert_eq!((crop.u, crop.v), (0.0, 0.0));
}

#[test]
fn test_crop_offsets_stay_below_half() {
    for (w, h, aspect) in [(1920, 1080, 0.5), (640, 480, 2.0), (1024, 1024, 1.0)] {
        let crop = center_crop(w, h, aspect).unwrap();
        assert!(crop.u >= 0.0 && crop.u < 0.5);
        assert!(crop.v >= 0.0 && crop.v < 0.5);
    }
}

#[test]
fn test_every_rotation_is_a_corner_permutation() {
    let (u, v) = (0.15, 0.3);
    let corner_set = [[u, v], [u, 1.0 - v], [1.0 - u, v], [1.0 - u, 1.0 - v]];
    for rotation in [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ] {
        let corners = rotated_tex_coords(u, v, rotation);
        for corner in corner_set {
            assert_eq!(
                corners.iter().filter(|c| **c == corner).count(),
                1,
                "{rotation:?} must visit {corner:?} exactly once"
            );
        }
    }
}

#[test]
fn test_rotations_differ_from_each_other() {
    let (u, v) = (0.15, 0.3);
    let all: Vec<_> = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ]
    .into_iter()
    .map(|r| rotated_tex_coords(u, v, r))
    .collect();
    for i in 0..all.len() {
        for j in i + 1..all.len() {
            assert_ne!(all[i], all[j], "rotations {i} and {j} must not alias");
        }
    }
}

#[test]
fn test_unsupported_rotations_fail() {
    for degrees in [1, 45, 89, 91, 360, 540] {
        assert!(
            matches!(
                Rotation::from_degrees(degrees),
                Err(RenderError::InvalidArgument(_))
            ),
            "{degrees} degrees must be rejected"
        );
    }
}

#[test]
fn test_set_cropped_with_bad_rotation_leaves_coords_untouched() {
    let mut geometry = QuadGeometry::new();
    geometry.set_cropped(1920, 1080, 9.0 / 16.0, 0).unwrap();
    let before = *geometry.tex_coords();

    assert!(geometry.set_cropped(1920, 1080, 9.0 / 16.0, 42).is_err());
    assert_eq!(*geometry.tex_coords(), before);
}

#[test]
fn test_frame_refresh_mutates_only_tex_coords() {
    let mut geometry = QuadGeometry::new();
    let frame = FixedFrame {
        timestamp_ns: 1,
        geometry_changed: true,
        tex_coords: [[0.0, 1.0], [1.0, 1.0], [0.0, 0.0], [1.0, 0.0]],
    };
    geometry.set_from_frame(&frame);
    assert_eq!(*geometry.tex_coords(), frame.tex_coords);
    assert_eq!(*geometry.device_coords(), DEVICE_QUAD);
}
