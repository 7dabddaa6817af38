// macgoenv-rs: macOS GUI Environment Setter - Rust Port
//
// SPDX-FileCopyrightText: 2026 macgoenv-rs contributors
// SPDX-License-Identifier: MIT

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Legacy | Agent | Options | Version
//! ```

use std::process::ExitCode;

use macgoenv_rs::cli::global::GlobalOptions;
use macgoenv_rs::cli::{self, Command};
use macgoenv_rs::cmd::agent::run_agent_command;
use macgoenv_rs::cmd::config::run_options_command;
use macgoenv_rs::cmd::legacy::run_legacy_command;
use macgoenv_rs::config::Config;
use macgoenv_rs::config::loader::ConfigLoader;
use macgoenv_rs::logging::init_logging;
use macgoenv_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Legacy) => load_config(&cli.global).and_then(|c| run_legacy_command(&c)),
        Some(Command::Agent) => load_config(&cli.global).and_then(|c| run_agent_command(&c)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("macgoenv.toml");
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix("MACGOENV")
}

fn load_config(global: &GlobalOptions) -> macgoenv_rs::error::Result<Config> {
    let result = build_config_loader(global)
        .apply_overrides(&global.to_config_overrides())
        .and_then(ConfigLoader::build);

    result.map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
