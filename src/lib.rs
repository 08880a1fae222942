// SPDX-License-Identifier: GPL-3.0-only

//! AR Camera - rendering and settings helpers for an augmented-reality
//! camera application
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`shaders`]: Shader asset loading, `#include` preprocessing and compilation
//! - [`pipelines`]: The full-screen background renderer (camera feed / depth overlay)
//! - [`gl`]: GL error-state utilities
//! - [`config`]: Persisted boolean settings
//!
//! The AR tracking session, windowing and GL context ownership live outside
//! this crate; every GL-touching function must be called on the thread owning
//! the context.

pub mod config;
pub mod constants;
pub mod errors;
pub mod gl;
pub mod pipelines;
pub mod shaders;

// Re-export commonly used types
pub use config::{Settings, SettingsStore};
pub use errors::{AppError, RenderError, RenderResult, SettingsError};
pub use pipelines::background::frame::{CameraFrame, FixedFrame};
pub use pipelines::background::{BackgroundRenderer, RenderMode};
pub use shaders::{EmbeddedShaderAssets, MemoryShaderAssets, ShaderAssets, ShaderStage};
