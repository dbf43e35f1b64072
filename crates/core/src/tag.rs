//! Tags and the tag colour palette.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stockboard_types::TagId;
use utoipa::ToSchema;

/// A labelled category attachable to a hospital, used both as a filter
/// criterion and as a badge label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tag {
    /// Unique identifier of this tag.
    pub id: TagId,
    /// Human-readable label.
    pub description: String,
}

/// Display colour token for tag buttons and badges.
///
/// These are abstract colour names, not concrete CSS values; the presentation
/// layer decides what each token looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Dark,
}

impl ColorToken {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Success => "success",
            ColorToken::Danger => "danger",
            ColorToken::Warning => "warning",
            ColorToken::Info => "info",
            ColorToken::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Fallback assignment cycles through these by identifier.
const CYCLE: [ColorToken; 6] = [
    ColorToken::Primary,
    ColorToken::Success,
    ColorToken::Danger,
    ColorToken::Warning,
    ColorToken::Info,
    ColorToken::Dark,
];

/// Style lookup from tag identifier to display colour.
///
/// Total on the domain of tag identifiers: explicit assignments win, and any
/// unassigned identifier falls back to a deterministic cycle so every tag
/// always has a colour.
#[derive(Clone, Debug, Default)]
pub struct TagPalette {
    assigned: BTreeMap<TagId, ColorToken>,
}

impl TagPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `tag` to a specific colour, replacing any previous assignment.
    pub fn assign(&mut self, tag: TagId, color: ColorToken) {
        self.assigned.insert(tag, color);
    }

    /// The colour for `tag`.
    pub fn color_for(&self, tag: TagId) -> ColorToken {
        if let Some(color) = self.assigned.get(&tag) {
            return *color;
        }
        let index = tag.0.rem_euclid(CYCLE.len() as i64) as usize;
        CYCLE[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_assignment_wins() {
        let mut palette = TagPalette::new();
        palette.assign(TagId(1), ColorToken::Secondary);
        assert_eq!(palette.color_for(TagId(1)), ColorToken::Secondary);
    }

    #[test]
    fn fallback_is_total_and_deterministic() {
        let palette = TagPalette::new();
        for id in -3..20 {
            assert_eq!(palette.color_for(TagId(id)), palette.color_for(TagId(id)));
        }
    }

    #[test]
    fn fallback_cycles_by_identifier() {
        let palette = TagPalette::new();
        assert_eq!(palette.color_for(TagId(0)), ColorToken::Primary);
        assert_eq!(palette.color_for(TagId(6)), ColorToken::Primary);
        assert_ne!(palette.color_for(TagId(1)), palette.color_for(TagId(2)));
    }
}
