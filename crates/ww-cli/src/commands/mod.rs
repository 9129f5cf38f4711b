pub mod map;
pub mod play;
pub mod rules;

use std::path::Path;

use ww_mechanics::Rules;
use ww_mechanics::rules::preset;

/// Resolve `--preset` / `--rules` into a validated rule set.
pub fn load_rules(preset_name: Option<&str>, path: Option<&Path>) -> Result<Rules, String> {
    if let Some(path) = path {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        return Rules::from_json(&json).map_err(|e| format!("{}: {e}", path.display()));
    }

    match preset_name {
        Some(name) => lookup_preset(name),
        None => Ok(Rules::default()),
    }
}

/// Look up a named preset, listing the valid names on failure.
pub fn lookup_preset(name: &str) -> Result<Rules, String> {
    preset::by_name(name).ok_or_else(|| {
        format!(
            "unknown preset '{name}' (expected one of: {})",
            preset::NAMES.join(", ")
        )
    })
}
