// SPDX-License-Identifier: GPL-3.0-only

//! Command-line helpers for settings inspection and shader tooling

use ar_camera::errors::AppError;
use ar_camera::shaders::{EmbeddedShaderAssets, assemble};
use ar_camera::SettingsStore;
use clap::{Subcommand, ValueEnum};

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print all settings and the backing file path
    Show,

    /// Change one setting and persist it
    Set {
        /// Which setting to change
        key: SettingKey,
        /// New value
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

/// Persisted boolean settings addressable from the CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SettingKey {
    DepthOcclusion,
    InstantPlacement,
    ImageStabilization,
    DepthVisualization,
}

pub fn run_settings(action: SettingsAction) -> Result<(), AppError> {
    let mut store = SettingsStore::open_default()?;
    match action {
        SettingsAction::Show => {
            println!("Settings file: {}", store.path().display());
            println!("  depth-occlusion:     {}", store.depth_occlusion());
            println!("  instant-placement:   {}", store.instant_placement());
            println!("  image-stabilization: {}", store.image_stabilization());
            println!("  depth-visualization: {}", store.depth_visualization());
        }
        SettingsAction::Set { key, value } => {
            match key {
                SettingKey::DepthOcclusion => store.set_depth_occlusion(value)?,
                SettingKey::InstantPlacement => store.set_instant_placement(value)?,
                SettingKey::ImageStabilization => store.set_image_stabilization(value)?,
                SettingKey::DepthVisualization => store.set_depth_visualization(value)?,
            }
            println!("Set {:?} = {}", key, value);
        }
    }
    Ok(())
}

/// Print a shader asset after include splicing and macro injection.
pub fn dump_shader(name: &str, defines: &[String]) -> Result<(), AppError> {
    let parsed: Vec<(String, String)> = defines
        .iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| AppError::Other(format!("invalid define '{entry}', expected KEY=VALUE")))
        })
        .collect::<Result<_, _>>()?;
    let borrowed: Vec<(&str, &str)> = parsed
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let source = assemble(&EmbeddedShaderAssets, name, &borrowed)?;
    print!("{source}");
    Ok(())
}
