// SPDX-License-Identifier: GPL-3.0-only

//! Quad geometry and texture-coordinate math for the background draw
//!
//! The device-space corners are fixed; only the texture coordinates move,
//! either through a frame-supplied transform or through the center-crop /
//! rotation math for explicitly sized camera images.

use super::frame::CameraFrame;
use crate::errors::{RenderError, RenderResult};

/// Full-screen quad corners in normalized device coordinates.
///
/// Triangle-strip order: bottom-left, bottom-right, top-left, top-right.
pub const DEVICE_QUAD: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];

/// Vertices per background quad
pub const VERTEX_COUNT: usize = 4;

/// Supported display rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Parse a rotation in degrees; anything outside {0, 90, 180, 270} is a
    /// caller error.
    pub fn from_degrees(degrees: u32) -> RenderResult<Self> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(RenderError::InvalidArgument(format!(
                "unsupported display rotation {other} (expected 0, 90, 180 or 270)"
            ))),
        }
    }
}

/// Center-crop rectangle of a camera image, as texture-space offsets plus the
/// cropped size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CropRegion {
    /// Horizontal offset fraction (0 = no crop on the left/right edges)
    pub u: f32,
    /// Vertical offset fraction (0 = no crop on the top/bottom edges)
    pub v: f32,
    /// Cropped width in pixels
    pub width: f32,
    /// Cropped height in pixels
    pub height: f32,
}

/// Compute the center crop of a camera image that matches the screen aspect
/// ratio, preserving the larger usable area.
///
/// `screen_aspect` is width over height of the (pre-rotated) viewport.
pub fn center_crop(
    image_width: u32,
    image_height: u32,
    screen_aspect: f32,
) -> RenderResult<CropRegion> {
    if image_width == 0 || image_height == 0 {
        return Err(RenderError::InvalidArgument(format!(
            "camera image has zero dimension ({image_width}x{image_height})"
        )));
    }
    if !(screen_aspect.is_finite() && screen_aspect > 0.0) {
        return Err(RenderError::InvalidArgument(format!(
            "screen aspect ratio must be finite and positive, got {screen_aspect}"
        )));
    }

    let image_width = image_width as f32;
    let image_height = image_height as f32;
    let image_aspect = image_width / image_height;

    if image_aspect > screen_aspect {
        // Image wider than the screen: trim the left/right edges
        let width = image_height * screen_aspect;
        Ok(CropRegion {
            u: (image_width - width) / (2.0 * image_width),
            v: 0.0,
            width,
            height: image_height,
        })
    } else if image_aspect < screen_aspect {
        // Image taller than the screen: trim the top/bottom edges
        let height = image_width / screen_aspect;
        Ok(CropRegion {
            u: 0.0,
            v: (image_height - height) / (2.0 * image_height),
            width: image_width,
            height,
        })
    } else {
        Ok(CropRegion {
            u: 0.0,
            v: 0.0,
            width: image_width,
            height: image_height,
        })
    }
}

/// Texture coordinates of the crop rectangle for each supported rotation.
///
/// Corner order matches [`DEVICE_QUAD`] (BL, BR, TL, TR). Each rotation is a
/// fixed permutation/reflection of the `{u, 1-u} x {v, 1-v}` corner set:
///
/// | rotation | BL         | BR         | TL         | TR         |
/// |----------|------------|------------|------------|------------|
/// | 0        | (u, 1-v)   | (1-u, 1-v) | (u, v)     | (1-u, v)   |
/// | 90       | (1-u, 1-v) | (1-u, v)   | (u, 1-v)   | (u, v)     |
/// | 180      | (1-u, v)   | (u, v)     | (1-u, 1-v) | (u, 1-v)   |
/// | 270      | (u, v)     | (u, 1-v)   | (1-u, v)   | (1-u, 1-v) |
pub fn rotated_tex_coords(u: f32, v: f32, rotation: Rotation) -> [[f32; 2]; 4] {
    let (u0, u1, v0, v1) = (u, 1.0 - u, v, 1.0 - v);
    match rotation {
        Rotation::Deg0 => [[u0, v1], [u1, v1], [u0, v0], [u1, v0]],
        Rotation::Deg90 => [[u1, v1], [u1, v0], [u0, v1], [u0, v0]],
        Rotation::Deg180 => [[u1, v0], [u0, v0], [u1, v1], [u0, v1]],
        Rotation::Deg270 => [[u0, v0], [u0, v1], [u1, v0], [u1, v1]],
    }
}

/// Fixed device-space quad plus its mutable texture coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadGeometry {
    tex_coords: [[f32; 2]; 4],
}

impl QuadGeometry {
    pub fn new() -> Self {
        Self {
            tex_coords: [[0.0; 2]; 4],
        }
    }

    /// The immutable NDC corner set
    pub fn device_coords(&self) -> &'static [[f32; 2]; 4] {
        &DEVICE_QUAD
    }

    pub fn tex_coords(&self) -> &[[f32; 2]; 4] {
        &self.tex_coords
    }

    /// Recompute texture coordinates through a frame's device-to-texture
    /// transform.
    pub fn set_from_frame(&mut self, frame: &dyn CameraFrame) {
        self.tex_coords = frame.device_to_texture(&DEVICE_QUAD);
    }

    /// Recompute texture coordinates from explicit camera-image parameters:
    /// center-crop to the screen aspect, then rotate.
    pub fn set_cropped(
        &mut self,
        image_width: u32,
        image_height: u32,
        screen_aspect: f32,
        rotation_degrees: u32,
    ) -> RenderResult<()> {
        let rotation = Rotation::from_degrees(rotation_degrees)?;
        let crop = center_crop(image_width, image_height, screen_aspect)?;
        self.tex_coords = rotated_tex_coords(crop.u, crop.v, rotation);
        Ok(())
    }
}

impl Default for QuadGeometry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_image_on_portrait_screen() {
        let crop = center_crop(1920, 1080, 9.0 / 16.0).unwrap();
        assert!(crop.u > 0.0, "portrait screen must trim a landscape image horizontally");
        assert_eq!(crop.v, 0.0);
        assert_eq!(crop.height, 1080.0);
    }

    #[test]
    fn test_matching_aspect_has_no_crop() {
        let crop = center_crop(1920, 1080, 1920.0 / 1080.0).unwrap();
        assert_eq!(crop.u, 0.0);
        assert_eq!(crop.v, 0.0);
        assert_eq!(crop.width, 1920.0);
        assert_eq!(crop.height, 1080.0);
    }

    #[test]
    fn test_narrow_image_on_wide_screen() {
        let crop = center_crop(1080, 1920, 16.0 / 9.0).unwrap();
        assert_eq!(crop.u, 0.0);
        assert!(crop.v > 0.0);
        assert_eq!(crop.width, 1080.0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            center_crop(0, 1080, 1.0),
            Err(RenderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rotation_corner_sets() {
        let (u, v) = (0.2, 0.1);
        for rotation in [
            Rotation::Deg0,
            Rotation::Deg90,
            Rotation::Deg180,
            Rotation::Deg270,
        ] {
            let corners = rotated_tex_coords(u, v, rotation);
            // Every rotation visits each corner of the crop rect exactly once
            for expected in [[u, v], [u, 1.0 - v], [1.0 - u, v], [1.0 - u, 1.0 - v]] {
                assert_eq!(
                    corners.iter().filter(|c| **c == expected).count(),
                    1,
                    "rotation {rotation:?} must use corner {expected:?} exactly once"
                );
            }
        }
    }

    #[test]
    fn test_rotation_mapping_table() {
        let (u, v) = (0.25, 0.0);
        assert_eq!(
            rotated_tex_coords(u, v, Rotation::Deg0),
            [[0.25, 1.0], [0.75, 1.0], [0.25, 0.0], [0.75, 0.0]]
        );
        assert_eq!(
            rotated_tex_coords(u, v, Rotation::Deg180),
            [[0.75, 0.0], [0.25, 0.0], [0.75, 1.0], [0.25, 1.0]]
        );
    }

    #[test]
    fn test_unsupported_rotation() {
        match Rotation::from_degrees(45) {
            Err(RenderError::InvalidArgument(msg)) => assert!(msg.contains("45")),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_set_cropped_leaves_device_coords_fixed() {
        let mut geometry = QuadGeometry::new();
        let before = *geometry.device_coords();
        geometry.set_cropped(1920, 1080, 9.0 / 16.0, 90).unwrap();
        assert_eq!(*geometry.device_coords(), before);
        assert_ne!(*geometry.tex_coords(), [[0.0; 2]; 4]);
    }
}
