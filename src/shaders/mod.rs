// SPDX-License-Identifier: GPL-3.0-only

//! Shader asset loading, preprocessing and compilation
//!
//! This module is the single source of truth for shader sources. Assets are
//! embedded text files addressed by logical path, run through a minimal
//! `#include` preprocessor with macro injection, then compiled and linked
//! into GL programs.

pub mod assets;
pub mod loader;
pub mod preprocessor;

pub use assets::{EmbeddedShaderAssets, MemoryShaderAssets, ShaderAssets};
pub use loader::{ShaderStage, link_program, load_program, load_shader};
pub use preprocessor::{assemble, preprocess};
