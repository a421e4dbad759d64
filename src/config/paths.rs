// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! Sources are tried in order and the first one that yields a directory wins:
//!
//! 1. an explicit directory passed to a `*_with_override()` function
//! 2. `--config-dir`, registered once at startup with [`init_cli_override`]
//! 3. the `PHOTO_LENS_CONFIG_DIR` environment variable (ignored when empty)
//! 4. `<platform config dir>/PhotoLens` from the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name below the platform config dir.
const APP_NAME: &str = "PhotoLens";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "PHOTO_LENS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--config-dir` value. The first call wins.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::debug!("--config-dir already registered, ignoring");
    }
}

/// Config directory from the CLI, environment or platform.
///
/// Returns `None` when no source yields a directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory, preferring `override_path` over every other source.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    let env = env.filter(|value| !value.is_empty()).map(PathBuf::from);
    let dir = explicit
        .or(cli)
        .or(env)
        .or_else(|| platform.map(|base| base.join(APP_NAME)));
    log::trace!("config dir resolved to {dir:?}");
    dir
}
