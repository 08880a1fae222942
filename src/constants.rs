// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// `GL_TEXTURE_EXTERNAL_OES` from GL_OES_EGL_image_external.
///
/// The camera pipeline writes into an external-image texture; glow does not
/// expose the extension enum, so it is spelled out here.
pub const TEXTURE_EXTERNAL_OES: u32 = 0x8D65;

/// Logical asset path of the shared background vertex shader
pub const BACKGROUND_VERTEX_SHADER: &str = "background.vert";
/// Logical asset path of the camera-feed fragment shader
pub const CAMERA_FRAGMENT_SHADER: &str = "background_camera.frag";
/// Logical asset path of the depth-visualization fragment shader
pub const DEPTH_FRAGMENT_SHADER: &str = "background_depth.frag";

/// Depth range used for colormap normalization (millimeters).
///
/// Values above `DEPTH_MAX_MM` are clamped to the far end of the colormap;
/// 0 mm means "no depth estimate" and renders black.
pub const DEPTH_MIN_MM: f32 = 0.0;
pub const DEPTH_MAX_MM: f32 = 8000.0;

/// Subdirectory under the user config dir holding persisted settings
pub const APP_CONFIG_DIR: &str = "ar-camera";
/// Settings file name inside [`APP_CONFIG_DIR`]
pub const SETTINGS_FILE: &str = "settings.json";
