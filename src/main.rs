// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(name = "ar-camera")]
#[command(about = "Settings and shader-pipeline tooling for the AR camera helpers")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change persisted settings
    Settings {
        #[command(subcommand)]
        action: cli::SettingsAction,
    },

    /// Print a shader asset after preprocessing (includes spliced, defines prepended)
    Shader {
        /// Logical asset path, e.g. background_depth.frag
        name: String,

        /// Macro to inject, as KEY=VALUE (repeatable, kept in order)
        #[arg(short, long = "define")]
        defines: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=ar_camera=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Settings { action } => cli::run_settings(action)?,
        Commands::Shader { name, defines } => cli::dump_shader(&name, &defines)?,
    }

    Ok(())
}
