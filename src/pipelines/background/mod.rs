// SPDX-License-Identifier: GPL-3.0-only

//! Full-screen background renderer
//!
//! Draws the live camera feed (or the depth-visualization overlay) as a
//! textured quad behind all scene content. The camera feed lands in an
//! external-image texture owned here; the depth texture is borrowed from the
//! AR session. Two programs are linked at initialization and selected per
//! draw by [`RenderMode`].
//!
//! Every method touching GL state must run on the thread owning the GL
//! context, which is why they are `unsafe fn`.

pub mod frame;
pub mod geometry;

use crate::constants::{
    BACKGROUND_VERTEX_SHADER, CAMERA_FRAGMENT_SHADER, DEPTH_FRAGMENT_SHADER, DEPTH_MAX_MM,
    DEPTH_MIN_MM, TEXTURE_EXTERNAL_OES,
};
use crate::errors::{RenderError, RenderResult};
use crate::gl::check_error;
use crate::shaders::{ShaderAssets, load_program};
use frame::CameraFrame;
use geometry::{DEVICE_QUAD, QuadGeometry, VERTEX_COUNT};
use glow::HasContext;
use tracing::{debug, info, warn};

/// Which background is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Live camera feed from the external-image texture
    CameraFeed,
    /// False-color visualization of the depth texture
    DepthVisualization,
}

/// A linked program with its resolved attribute/uniform locations.
///
/// Locations are looked up once after linking and stay valid for the
/// program's lifetime.
#[derive(Debug, Clone, Copy)]
struct QuadProgram {
    program: glow::NativeProgram,
    position_attrib: u32,
    tex_coord_attrib: u32,
    sampler_uniform: glow::NativeUniformLocation,
}

impl QuadProgram {
    unsafe fn create(
        gl: &glow::Context,
        assets: &dyn ShaderAssets,
        fragment_path: &str,
        defines: &[(&str, &str)],
    ) -> RenderResult<Self> {
        unsafe {
            let program =
                load_program(gl, assets, BACKGROUND_VERTEX_SHADER, fragment_path, defines)?;
            let position_attrib = gl.get_attrib_location(program, "a_position").ok_or_else(|| {
                RenderError::ResourceInit(format!("'{fragment_path}' program has no a_position"))
            })?;
            let tex_coord_attrib =
                gl.get_attrib_location(program, "a_tex_coord").ok_or_else(|| {
                    RenderError::ResourceInit(format!(
                        "'{fragment_path}' program has no a_tex_coord"
                    ))
                })?;
            let sampler_uniform = gl.get_uniform_location(program, "u_texture").ok_or_else(|| {
                RenderError::ResourceInit(format!("'{fragment_path}' program has no u_texture"))
            })?;
            Ok(Self {
                program,
                position_attrib,
                tex_coord_attrib,
                sampler_uniform,
            })
        }
    }
}

/// Renders the camera feed or depth overlay as a full-screen quad.
///
/// GPU resources are created once in [`BackgroundRenderer::new`] and live as
/// long as the GL context; teardown is the context owner's responsibility.
pub struct BackgroundRenderer {
    camera_texture: glow::NativeTexture,
    depth_texture: Option<glow::NativeTexture>,
    camera_program: QuadProgram,
    depth_program: QuadProgram,
    vertex_array: glow::NativeVertexArray,
    device_coord_buffer: glow::NativeBuffer,
    tex_coord_buffer: glow::NativeBuffer,
    geometry: QuadGeometry,
    skip_empty_frames: bool,
}

impl BackgroundRenderer {
    /// Create all GPU resources for background rendering.
    ///
    /// The camera-feed texture is created here and exposed through
    /// [`camera_texture`](Self::camera_texture) for the camera pipeline to
    /// populate each frame. `depth_texture` stays owned by the caller; pass
    /// `None` when no depth source exists yet.
    pub unsafe fn new(
        gl: &glow::Context,
        assets: &dyn ShaderAssets,
        depth_texture: Option<glow::NativeTexture>,
    ) -> RenderResult<Self> {
        // Consistency check between the fixed corner set and the draw call
        if DEVICE_QUAD.len() != VERTEX_COUNT {
            return Err(RenderError::ResourceInit(format!(
                "quad geometry holds {} vertices, expected {}",
                DEVICE_QUAD.len(),
                VERTEX_COUNT
            )));
        }

        unsafe {
            let camera_texture = gl
                .create_texture()
                .map_err(|e| RenderError::ResourceInit(format!("create_texture failed: {e}")))?;
            gl.bind_texture(TEXTURE_EXTERNAL_OES, Some(camera_texture));
            gl.tex_parameter_i32(
                TEXTURE_EXTERNAL_OES,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                TEXTURE_EXTERNAL_OES,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                TEXTURE_EXTERNAL_OES,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                TEXTURE_EXTERNAL_OES,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.bind_texture(TEXTURE_EXTERNAL_OES, None);
            check_error(gl, "BackgroundRenderer camera texture")?;

            let camera_program = QuadProgram::create(gl, assets, CAMERA_FRAGMENT_SHADER, &[])?;
            let min_mm = DEPTH_MIN_MM.to_string();
            let max_mm = DEPTH_MAX_MM.to_string();
            let depth_defines = [
                ("MIN_DEPTH_MM", min_mm.as_str()),
                ("MAX_DEPTH_MM", max_mm.as_str()),
            ];
            let depth_program =
                QuadProgram::create(gl, assets, DEPTH_FRAGMENT_SHADER, &depth_defines)?;

            let vertex_array = gl.create_vertex_array().map_err(|e| {
                RenderError::ResourceInit(format!("create_vertex_array failed: {e}"))
            })?;

            let device_coord_buffer = gl
                .create_buffer()
                .map_err(|e| RenderError::ResourceInit(format!("create_buffer failed: {e}")))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(device_coord_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&DEVICE_QUAD[..]),
                glow::STATIC_DRAW,
            );

            let geometry = QuadGeometry::new();
            let tex_coord_buffer = gl
                .create_buffer()
                .map_err(|e| RenderError::ResourceInit(format!("create_buffer failed: {e}")))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(tex_coord_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&geometry.tex_coords()[..]),
                glow::DYNAMIC_DRAW,
            );
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            check_error(gl, "BackgroundRenderer buffers")?;

            info!(
                has_depth_texture = depth_texture.is_some(),
                "Background renderer initialized"
            );

            Ok(Self {
                camera_texture,
                depth_texture,
                camera_program,
                depth_program,
                vertex_array,
                device_coord_buffer,
                tex_coord_buffer,
                geometry,
                skip_empty_frames: true,
            })
        }
    }

    /// Texture the camera pipeline must feed with live pixel data
    pub fn camera_texture(&self) -> glow::NativeTexture {
        self.camera_texture
    }

    /// Borrowed depth texture, if one was supplied
    pub fn depth_texture(&self) -> Option<glow::NativeTexture> {
        self.depth_texture
    }

    /// Supply or replace the borrowed depth texture
    pub fn set_depth_texture(&mut self, texture: Option<glow::NativeTexture>) {
        self.depth_texture = texture;
    }

    /// Current quad geometry (device corners plus texture coordinates)
    pub fn geometry(&self) -> &QuadGeometry {
        &self.geometry
    }

    /// Control the zero-timestamp frame skip in [`draw_frame`](Self::draw_frame).
    pub fn set_skip_empty_frames(&mut self, skip: bool) {
        self.skip_empty_frames = skip;
    }

    /// Recompute texture coordinates when the frame reports a display
    /// geometry change. Only the texture-coordinate buffer is touched.
    pub unsafe fn update_geometry(
        &mut self,
        gl: &glow::Context,
        frame: &dyn CameraFrame,
    ) -> RenderResult<()> {
        if !frame.display_geometry_changed() {
            return Ok(());
        }
        self.geometry.set_from_frame(frame);
        unsafe { self.upload_tex_coords(gl) }
    }

    /// Frame-driven entry point: refresh geometry, then draw unless the frame
    /// carries no camera image yet.
    pub unsafe fn draw_frame(
        &mut self,
        gl: &glow::Context,
        frame: &dyn CameraFrame,
        mode: RenderMode,
    ) -> RenderResult<()> {
        unsafe {
            self.update_geometry(gl, frame)?;
            if !frame::should_draw(frame.timestamp_ns(), self.skip_empty_frames) {
                debug!("Skipping background draw for zero-timestamp frame");
                return Ok(());
            }
            self.draw(gl, mode)
        }
    }

    /// Explicit-parameters entry point: center-crop the camera image to the
    /// screen aspect, rotate, then draw the camera feed.
    pub unsafe fn draw_cropped(
        &mut self,
        gl: &glow::Context,
        image_width: u32,
        image_height: u32,
        screen_aspect_ratio: f32,
        rotation_degrees: u32,
    ) -> RenderResult<()> {
        self.geometry
            .set_cropped(image_width, image_height, screen_aspect_ratio, rotation_degrees)?;
        unsafe {
            self.upload_tex_coords(gl)?;
            self.draw(gl, RenderMode::CameraFeed)
        }
    }

    /// Draw the full-screen quad with the mode-selected program and texture.
    ///
    /// The background is never depth-tested against scene geometry, so depth
    /// test and depth writes are disabled for the duration of the draw and
    /// restored afterwards.
    pub unsafe fn draw(&mut self, gl: &glow::Context, mode: RenderMode) -> RenderResult<()> {
        let (program, texture, target) = match mode {
            RenderMode::CameraFeed => {
                (self.camera_program, self.camera_texture, TEXTURE_EXTERNAL_OES)
            }
            RenderMode::DepthVisualization => match self.depth_texture {
                Some(texture) => (self.depth_program, texture, glow::TEXTURE_2D),
                None => {
                    warn!("Depth visualization requested before a depth texture was supplied");
                    return Ok(());
                }
            },
        };

        unsafe {
            gl.disable(glow::DEPTH_TEST);
            gl.depth_mask(false);

            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(target, Some(texture));
            gl.use_program(Some(program.program));
            gl.uniform_1_i32(Some(&program.sampler_uniform), 0);

            gl.bind_vertex_array(Some(self.vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.device_coord_buffer));
            gl.enable_vertex_attrib_array(program.position_attrib);
            gl.vertex_attrib_pointer_f32(program.position_attrib, 2, glow::FLOAT, false, 0, 0);
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.tex_coord_buffer));
            gl.enable_vertex_attrib_array(program.tex_coord_attrib);
            gl.vertex_attrib_pointer_f32(program.tex_coord_attrib, 2, glow::FLOAT, false, 0, 0);

            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, VERTEX_COUNT as i32);

            gl.disable_vertex_attrib_array(program.position_attrib);
            gl.disable_vertex_attrib_array(program.tex_coord_attrib);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
            gl.use_program(None);
            gl.bind_texture(target, None);

            gl.depth_mask(true);
            gl.enable(glow::DEPTH_TEST);

            check_error(gl, "BackgroundRenderer::draw")
        }
    }

    unsafe fn upload_tex_coords(&self, gl: &glow::Context) -> RenderResult<()> {
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.tex_coord_buffer));
            gl.buffer_sub_data_u8_slice(
                glow::ARRAY_BUFFER,
                0,
                bytemuck::cast_slice(&self.geometry.tex_coords()[..]),
            );
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            check_error(gl, "BackgroundRenderer tex coords upload")
        }
    }
}
