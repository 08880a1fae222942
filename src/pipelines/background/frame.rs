// SPDX-License-Identifier: GPL-3.0-only

//! Camera frame abstraction
//!
//! The AR session hands the render loop one frame object per iteration. The
//! renderer only needs three things from it: the capture timestamp, whether
//! the display geometry changed since the last frame, and the mapping from
//! normalized device coordinates to normalized texture coordinates.

/// Per-frame data supplied by the AR tracking session
pub trait CameraFrame {
    /// Capture timestamp in nanoseconds; zero means no real camera image has
    /// arrived yet.
    fn timestamp_ns(&self) -> i64;

    /// True when the display geometry (rotation, viewport size, camera
    /// intrinsics) changed since the previous frame and texture coordinates
    /// must be recomputed.
    fn display_geometry_changed(&self) -> bool;

    /// Map device-space quad corners to texture coordinates.
    fn device_to_texture(&self, device_coords: &[[f32; 2]; 4]) -> [[f32; 2]; 4];
}

/// A frame with precomputed texture coordinates, for callers that resolve the
/// display transform themselves.
#[derive(Debug, Clone, Copy)]
pub struct FixedFrame {
    pub timestamp_ns: i64,
    pub geometry_changed: bool,
    pub tex_coords: [[f32; 2]; 4],
}

impl CameraFrame for FixedFrame {
    fn timestamp_ns(&self) -> i64 {
        self.timestamp_ns
    }

    fn display_geometry_changed(&self) -> bool {
        self.geometry_changed
    }

    fn device_to_texture(&self, _device_coords: &[[f32; 2]; 4]) -> [[f32; 2]; 4] {
        self.tex_coords
    }
}

/// Whether a frame with this timestamp should reach the draw call.
///
/// Zero-timestamp frames carry no camera image and are skipped unless the
/// caller disabled the skip.
pub(crate) fn should_draw(timestamp_ns: i64, skip_empty_frames: bool) -> bool {
    timestamp_ns != 0 || !skip_empty_frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timestamp_skipped_by_default() {
        assert!(!should_draw(0, true));
        assert!(should_draw(123, true));
    }

    #[test]
    fn test_skip_can_be_disabled() {
        assert!(should_draw(0, false));
    }

    #[test]
    fn test_fixed_frame_ignores_device_coords() {
        let coords = [[0.0, 1.0], [1.0, 1.0], [0.0, 0.0], [1.0, 0.0]];
        let frame = FixedFrame {
            timestamp_ns: 1,
            geometry_changed: true,
            tex_coords: coords,
        };
        assert_eq!(frame.device_to_texture(&[[9.0; 2]; 4]), coords);
    }
}
