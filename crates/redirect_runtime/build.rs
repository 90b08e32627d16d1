use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const MAX_REDIRECT_DELAY_MS: u32 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RedirectSettings {
    param_key: String,
    presentation: String,
    redirect_delay_ms: u32,
    in_app_markers: Vec<String>,
    root_element_id: String,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("redirect.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let settings: RedirectSettings = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if !matches!(settings.presentation.as_str(), "frame" | "tip") {
        panic!(
            "unknown presentation in {}: expected `frame` or `tip`, found `{}`",
            path.display(),
            settings.presentation
        );
    }
    if settings.param_key.is_empty()
        || settings
            .param_key
            .chars()
            .any(|c| matches!(c, '&' | '=' | '#' | '+' | '%') || c.is_whitespace())
    {
        panic!(
            "param_key in {} must be non-empty and free of reserved query characters: `{}`",
            path.display(),
            settings.param_key
        );
    }
    if settings.in_app_markers.iter().all(|m| m.trim().is_empty()) {
        panic!("in_app_markers in {} needs at least one marker", path.display());
    }
    if settings.root_element_id.trim().is_empty() {
        panic!("root_element_id in {} must not be empty", path.display());
    }
    if settings.redirect_delay_ms > MAX_REDIRECT_DELAY_MS {
        panic!(
            "redirect_delay_ms in {} exceeds {MAX_REDIRECT_DELAY_MS}: {}",
            path.display(),
            settings.redirect_delay_ms
        );
    }

    let json = serde_json::to_string_pretty(&settings).expect("serialize redirect settings");
    let generated = format!(
        "/// Build-time generated redirect configuration JSON.\n\
pub const REDIRECT_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("redirect_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
