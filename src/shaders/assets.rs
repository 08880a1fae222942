// SPDX-License-Identifier: GPL-3.0-only

//! Shader asset sources
//!
//! Shader text is addressed by logical path (e.g. `background.vert`). The
//! shipped sources are embedded into the binary; an in-memory map backs tests
//! and tooling that synthesize sources on the fly.

use crate::errors::{RenderError, RenderResult};
use rust_embed::RustEmbed;
use std::collections::HashMap;

/// Resolver from logical shader path to source text
pub trait ShaderAssets {
    fn source(&self, path: &str) -> RenderResult<String>;
}

#[derive(RustEmbed)]
#[folder = "assets/shaders/"]
struct EmbeddedSources;

/// Shader sources embedded at build time from `assets/shaders/`
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedShaderAssets;

impl ShaderAssets for EmbeddedShaderAssets {
    fn source(&self, path: &str) -> RenderResult<String> {
        let file = EmbeddedSources::get(path).ok_or_else(|| RenderError::AssetNotFound {
            path: path.to_string(),
        })?;
        String::from_utf8(file.data.into_owned()).map_err(|_| {
            RenderError::ResourceInit(format!("shader asset '{}' is not valid UTF-8", path))
        })
    }
}

/// In-memory shader source map, mainly for tests and tooling
#[derive(Debug, Default, Clone)]
pub struct MemoryShaderAssets {
    sources: HashMap<String, String>,
}

impl MemoryShaderAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(path.into(), source.into());
    }
}

impl ShaderAssets for MemoryShaderAssets {
    fn source(&self, path: &str) -> RenderResult<String> {
        self.sources
            .get(path)
            .cloned()
            .ok_or_else(|| RenderError::AssetNotFound {
                path: path.to_string(),
            })
    }
}
