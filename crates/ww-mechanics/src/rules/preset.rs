//! Ready-made rule sets.

use crate::rules::Rules;

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["classic", "peaceful", "small"];

/// The default tuning.
pub fn classic() -> Rules {
    Rules::default()
}

/// No animals or items ever appear. Useful for scripted walkthroughs.
pub fn peaceful() -> Rules {
    Rules::default().without_spawns()
}

/// A cramped 9x9 forest with fewer trunks and quicker levels.
pub fn small() -> Rules {
    Rules::default()
        .with_ground_size(4, 4)
        .with_ground_trunks(6, 12)
        .with_level_multiplier(2)
}

/// Look up a preset by name, case-insensitively.
pub fn by_name(name: &str) -> Option<Rules> {
    match name.to_lowercase().as_str() {
        "classic" => Some(classic()),
        "peaceful" => Some(peaceful()),
        "small" => Some(small()),
        _ => None,
    }
}
