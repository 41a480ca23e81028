// ── Display hints ──
//
// Presentation-only values derived from records: category colors, stat
// bar fill, and label casing. Nothing here mutates a record.

use std::fmt;
use std::str::FromStr;

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Cap applied to stat bars. Values above it render as a full bar.
pub const STAT_BAR_MAX: u32 = 100;

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB`
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Color used for unknown or missing categories.
pub const DEFAULT_CATEGORY_COLOR: Rgb = Rgb(0xA8, 0xA8, 0xA8);

/// The eighteen known item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Category {
    pub const fn color(self) -> Rgb {
        match self {
            Self::Normal => Rgb(0xA8, 0xA8, 0xA8),
            Self::Fire => Rgb(0xF0, 0x80, 0x30),
            Self::Water => Rgb(0x68, 0x90, 0xF0),
            Self::Electric => Rgb(0xF8, 0xD0, 0x30),
            Self::Grass => Rgb(0x78, 0xC8, 0x50),
            Self::Ice => Rgb(0x98, 0xD8, 0xD8),
            Self::Fighting => Rgb(0xC0, 0x30, 0x28),
            Self::Poison => Rgb(0xA0, 0x40, 0xA0),
            Self::Ground => Rgb(0xE0, 0xC0, 0x68),
            Self::Flying => Rgb(0xA8, 0x90, 0xF0),
            Self::Psychic => Rgb(0xF8, 0x58, 0x88),
            Self::Bug => Rgb(0xA8, 0xB8, 0x20),
            Self::Rock => Rgb(0xB8, 0xA0, 0x38),
            Self::Ghost => Rgb(0x70, 0x58, 0x98),
            Self::Dragon => Rgb(0x70, 0x38, 0xF8),
            Self::Dark => Rgb(0x70, 0x58, 0x48),
            Self::Steel => Rgb(0xB8, 0xB8, 0xD0),
            Self::Fairy => Rgb(0xEE, 0x99, 0xAC),
        }
    }
}

/// Color for a category name, falling back to [`DEFAULT_CATEGORY_COLOR`].
pub fn category_color(name: &str) -> Rgb {
    Category::from_str(name).map_or(DEFAULT_CATEGORY_COLOR, Category::color)
}

/// Color for an optional primary category.
pub fn primary_color(category: Option<&str>) -> Rgb {
    category.map_or(DEFAULT_CATEGORY_COLOR, category_color)
}

/// Width of a stat bar as a percentage: `min(value, 100)`.
pub fn stat_fill_percent(value: u32) -> u16 {
    u16::try_from(value.min(STAT_BAR_MAX)).unwrap_or(100)
}

/// Upper-case the first character: `"special-attack"` → `"Special-attack"`.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn known_categories_have_colors() {
        assert_eq!(category_color("electric").hex(), "#F8D030");
        assert_eq!(category_color("grass").hex(), "#78C850");
        assert_eq!(category_color("Fairy").hex(), "#EE99AC");
        assert_eq!(Category::iter().count(), 18);
    }

    #[test]
    fn unknown_category_falls_back() {
        assert_eq!(category_color("shadow"), DEFAULT_CATEGORY_COLOR);
        assert_eq!(primary_color(None).hex(), "#A8A8A8");
    }

    #[test]
    fn stat_fill_is_clamped() {
        assert_eq!(stat_fill_percent(150), 100);
        assert_eq!(stat_fill_percent(100), 100);
        assert_eq!(stat_fill_percent(45), 45);
        assert_eq!(stat_fill_percent(0), 0);
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("hp"), "Hp");
        assert_eq!(capitalize("special-attack"), "Special-attack");
        assert_eq!(capitalize(""), "");
    }
}
