// SPDX-License-Identifier: GPL-3.0-only

//! Shader compilation and program linking
//!
//! Builds GL shader objects from preprocessed asset sources. On compile
//! failure the driver's info log is captured and the shader object is deleted
//! before the error is returned, so nothing leaks into the context.

use super::assets::ShaderAssets;
use super::preprocessor::assemble;
use crate::errors::{RenderError, RenderResult};
use glow::HasContext;
use tracing::debug;

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// Load, preprocess and compile one shader stage.
///
/// `defines` are prepended as `#define KEY VALUE` lines in slice order.
/// Must run on the thread owning the GL context.
pub unsafe fn load_shader(
    gl: &glow::Context,
    assets: &dyn ShaderAssets,
    stage: ShaderStage,
    path: &str,
    defines: &[(&str, &str)],
) -> RenderResult<glow::NativeShader> {
    let source = assemble(assets, path, defines)?;
    debug!(path = path, stage = ?stage, bytes = source.len(), "Compiling shader");

    unsafe {
        let shader = gl
            .create_shader(stage.gl_enum())
            .map_err(|e| RenderError::ResourceInit(format!("create_shader failed: {e}")))?;
        gl.shader_source(shader, &source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(RenderError::ShaderCompile {
                path: path.to_string(),
                log,
            });
        }
        Ok(shader)
    }
}

/// Link a vertex/fragment pair into a program.
///
/// The shader objects are detached and deleted whether or not linking
/// succeeds; a failed program is deleted before the error is returned.
pub unsafe fn link_program(
    gl: &glow::Context,
    vertex: glow::NativeShader,
    fragment: glow::NativeShader,
) -> RenderResult<glow::NativeProgram> {
    unsafe {
        let program = gl
            .create_program()
            .map_err(|e| RenderError::ResourceInit(format!("create_program failed: {e}")))?;
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);

        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(RenderError::ResourceInit(format!(
                "program link failed: {log}"
            )));
        }
        Ok(program)
    }
}

/// Compile both stages from assets and link them.
///
/// `defines` apply to both stages.
pub unsafe fn load_program(
    gl: &glow::Context,
    assets: &dyn ShaderAssets,
    vertex_path: &str,
    fragment_path: &str,
    defines: &[(&str, &str)],
) -> RenderResult<glow::NativeProgram> {
    unsafe {
        let vertex = load_shader(gl, assets, ShaderStage::Vertex, vertex_path, defines)?;
        let fragment = match load_shader(gl, assets, ShaderStage::Fragment, fragment_path, defines)
        {
            Ok(fragment) => fragment,
            Err(err) => {
                gl.delete_shader(vertex);
                return Err(err);
            }
        };
        link_program(gl, vertex, fragment)
    }
}
