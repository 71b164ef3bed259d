//! # 名称词表
//!
//! 无头渲染端认可的特效名与音效名。查找大小写不敏感，返回规范名称。

/// 通用世界特效
pub const WORLD_EFFECTS: &[&str] = &[
    "blaze_shoot",
    "bow_fire",
    "click1",
    "click2",
    "door_toggle",
    "ender_signal",
    "extinguish",
    "ghast_shoot",
    "ghast_shriek",
    "mobspawner_flames",
    "potion_break",
    "record_play",
    "smoke",
    "step_sound",
    "zombie_chew_iron_door",
];

/// 音效
pub const SOUNDS: &[&str] = &[
    "ambience_thunder",
    "anvil_land",
    "chest_open",
    "click",
    "door_open",
    "explode",
    "firework_blast",
    "firework_launch",
    "firework_twinkle",
    "level_up",
    "note_pling",
    "orb_pickup",
    "portal_travel",
    "successful_hit",
    "wither_spawn",
];

/// 在词表中查找名称
pub fn lookup(vocabulary: &'static [&'static str], name: &str) -> Option<&'static str> {
    vocabulary
        .iter()
        .copied()
        .find(|entry| entry.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup(SOUNDS, "LEVEL_UP"), Some("level_up"));
        assert_eq!(lookup(WORLD_EFFECTS, "Smoke"), Some("smoke"));
        assert_eq!(lookup(SOUNDS, "moo"), None);
    }

    #[test]
    fn test_vocabularies_are_sorted_and_unique() {
        for vocabulary in [WORLD_EFFECTS, SOUNDS] {
            assert!(vocabulary.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
