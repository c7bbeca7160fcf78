// SPDX-License-Identifier: MPL-2.0
//! Kept in its own test binary: it mutates `SOLARSHARE_CONFIG_DIR`, which
//! would race with any other test resolving the config directory.

use solarshare::app::paths::{get_app_config_dir_with_override, ENV_CONFIG_DIR};
use solarshare::config::{self, Config};
use solarshare::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn env_config_dir_is_used_when_no_override_is_given() {
    let dir = tempdir().expect("temp dir");
    let previous = std::env::var(ENV_CONFIG_DIR).ok();
    std::env::set_var(ENV_CONFIG_DIR, dir.path());

    assert_eq!(
        get_app_config_dir_with_override(None),
        Some(dir.path().to_path_buf())
    );

    let mut saved = Config::default();
    saved.general.language = Some("fr".to_string());
    saved.general.theme_mode = ThemeMode::Dark;
    saved.sign_in.simulated_latency_ms = Some(1200);
    config::save_with_override(&saved, None).expect("save through env dir");
    assert!(dir.path().join("settings.toml").exists());

    let (loaded, warning) = config::load_with_override(None);

    match previous {
        Some(value) => std::env::set_var(ENV_CONFIG_DIR, value),
        None => std::env::remove_var(ENV_CONFIG_DIR),
    }

    assert!(warning.is_none());
    assert_eq!(loaded, saved);
}
