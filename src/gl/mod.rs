// SPDX-License-Identifier: GPL-3.0-only

//! GL error-state utilities
//!
//! OpenGL reports most failures through a sticky error flag rather than
//! return values. Resource creation and draw paths call [`check_error`] after
//! each logical operation, aggregating any accumulated codes into a single
//! labelled failure.

use crate::errors::{RenderError, RenderResult};
use glow::HasContext;
use tracing::error;

/// Drain the GL error queue; fail with the given label if anything was pending.
///
/// Must run on the thread owning the GL context.
pub unsafe fn check_error(gl: &glow::Context, label: &str) -> RenderResult<()> {
    let mut codes = Vec::new();
    loop {
        let code = unsafe { gl.get_error() };
        if code == glow::NO_ERROR {
            break;
        }
        codes.push(code);
    }

    if codes.is_empty() {
        return Ok(());
    }

    for code in &codes {
        error!(label = label, code = *code, name = error_name(*code), "GL error");
    }
    Err(RenderError::Gl {
        label: label.to_string(),
        codes,
    })
}

/// Human-readable name for a GL error code
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names() {
        assert_eq!(error_name(glow::INVALID_ENUM), "GL_INVALID_ENUM");
        assert_eq!(error_name(0xdead), "unknown");
    }
}
