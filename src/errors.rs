// SPDX-License-Identifier: MPL-2.0

//! Error types for the AR camera helpers

use std::fmt;

/// Result type alias for rendering and shader-loading operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised by the shader loader and the background renderer
#[derive(Debug, Clone)]
pub enum RenderError {
    /// Shader compilation failed; carries the driver's info log
    ShaderCompile {
        /// Logical asset path of the shader that failed
        path: String,
        /// Compiler diagnostic log
        log: String,
    },
    /// A shader asset is part of its own include chain
    IncludeCycle { path: String },
    /// A shader asset could not be found under its logical path
    AssetNotFound { path: String },
    /// An `#include` directive that does not carry a quoted target
    MalformedInclude { path: String, line: String },
    /// Program linking or GPU resource creation failed
    ResourceInit(String),
    /// A caller passed an unsupported argument (e.g. rotation value)
    InvalidArgument(String),
    /// Accumulated `glGetError` codes detected after a labelled operation
    Gl { label: String, codes: Vec<u32> },
}

/// Errors raised by the persisted settings store
#[derive(Debug, Clone)]
pub enum SettingsError {
    /// Reading or writing the settings file failed
    Io(String),
    /// The settings file exists but could not be parsed
    Parse(String),
}

/// Top-level error type for the CLI
#[derive(Debug, Clone)]
pub enum AppError {
    /// Rendering / shader pipeline errors
    Render(RenderError),
    /// Settings persistence errors
    Settings(SettingsError),
    /// Generic error with message
    Other(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ShaderCompile { path, log } => {
                write!(f, "Failed to compile shader '{}': {}", path, log)
            }
            RenderError::IncludeCycle { path } => {
                write!(f, "Shader '{}' is included by its own include chain", path)
            }
            RenderError::AssetNotFound { path } => {
                write!(f, "Shader asset '{}' not found", path)
            }
            RenderError::MalformedInclude { path, line } => {
                write!(f, "Malformed #include in '{}': {}", path, line)
            }
            RenderError::ResourceInit(msg) => write!(f, "Resource initialization failed: {}", msg),
            RenderError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            RenderError::Gl { label, codes } => {
                write!(f, "GL error after {}:", label)?;
                for code in codes {
                    write!(f, " 0x{:04x}", code)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Settings parse error: {}", msg),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Render(e) => write!(f, "Render error: {}", e),
            AppError::Settings(e) => write!(f, "Settings error: {}", e),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RenderError {}
impl std::error::Error for SettingsError {}
impl std::error::Error for AppError {}

// Conversions from sub-errors to AppError
impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        AppError::Settings(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err.to_string())
    }
}
