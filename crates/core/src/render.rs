//! Card presentation model and plain-text rendering.
//!
//! The view-model stays pure data; this module turns it into a
//! [`ViewSnapshot`] a presentation surface can draw directly: a bar of tag
//! toggle buttons followed by one card per displayed hospital. A plain-text
//! writer is provided for the CLI.

use chrono::{DateTime, Utc};
use std::fmt::Write;
use stockboard_types::HospitalId;

use crate::tag::{ColorToken, Tag, TagPalette};
use crate::view::FilterableHospitalView;

/// Card titles longer than this many characters are cut and suffixed with `...`.
pub const TITLE_TRUNCATE_AT: usize = 50;

/// Truncate `text` to `at` characters, appending `...` when it was longer.
///
/// Character-based, so a multi-byte name never splits a code point. A text
/// of exactly `at` characters passes through unchanged.
pub fn truncate(text: &str, at: usize) -> String {
    if text.chars().count() > at {
        let mut cut: String = text.chars().take(at).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

/// Link target for a manageable hospital's detail view.
pub fn details_path(id: HospitalId) -> String {
    format!("/details/{id}")
}

fn human_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One toggle control in the tag bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagButton {
    pub tag: Tag,
    pub color: ColorToken,
    /// True iff the tag is part of the current selection.
    pub active: bool,
}

/// A tag badge on a hospital card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagBadge {
    pub label: String,
    pub color: ColorToken,
}

/// One inventory row on a hospital card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryRow {
    /// Product name, upper-cased for presentation.
    pub product: String,
    /// Human-readable rendering of the stock record's update time.
    pub updated_at: String,
    pub quantity: i64,
}

/// One hospital card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HospitalCard {
    pub id: HospitalId,
    /// Truncated display title.
    pub title: String,
    /// Link target, present only when the viewer may manage this hospital.
    pub details_link: Option<String>,
    pub description: String,
    pub tags: Vec<TagBadge>,
    /// Empty when the hospital has no stock records; no placeholder row.
    pub inventory: Vec<InventoryRow>,
}

/// Everything a presentation surface needs to draw the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub tag_bar: Vec<TagButton>,
    pub cards: Vec<HospitalCard>,
}

/// Renders a hospital's tag sequence into badges.
///
/// This is a seam: the list screen does not care how tags are drawn, only
/// that they are. [`BadgeTagRenderer`] is the default implementation.
pub trait TagRenderer {
    fn render(&self, tags: &[Tag]) -> Vec<TagBadge>;
}

/// Default tag renderer: one coloured badge per tag, labelled with its
/// description, coloured from the shared palette.
pub struct BadgeTagRenderer<'a> {
    palette: &'a TagPalette,
}

impl<'a> BadgeTagRenderer<'a> {
    pub fn new(palette: &'a TagPalette) -> Self {
        Self { palette }
    }
}

impl TagRenderer for BadgeTagRenderer<'_> {
    fn render(&self, tags: &[Tag]) -> Vec<TagBadge> {
        tags.iter()
            .map(|t| TagBadge {
                label: t.description.clone(),
                color: self.palette.color_for(t.id),
            })
            .collect()
    }
}

impl FilterableHospitalView {
    /// Build the drawable snapshot for the current view state.
    pub fn snapshot(&self, palette: &TagPalette, tags: &dyn TagRenderer) -> ViewSnapshot {
        let tag_bar = self
            .tags()
            .iter()
            .map(|t| TagButton {
                tag: t.clone(),
                color: palette.color_for(t.id),
                active: self.is_selected(t.id),
            })
            .collect();

        let cards = self
            .filtered()
            .iter()
            .map(|h| {
                let title = truncate(h.name.as_str(), TITLE_TRUNCATE_AT);
                let details_link = h.can_manage.then(|| details_path(h.id));
                let inventory = h
                    .inventory
                    .iter()
                    .map(|line| InventoryRow {
                        product: line.product.name.to_uppercase(),
                        updated_at: human_timestamp(line.updated_at),
                        quantity: line.quantity,
                    })
                    .collect();

                HospitalCard {
                    id: h.id,
                    title,
                    details_link,
                    description: h.description.clone(),
                    tags: tags.render(&h.tags),
                    inventory,
                }
            })
            .collect();

        ViewSnapshot { tag_bar, cards }
    }
}

/// Render a snapshot as plain text, one block per card.
pub fn render_text(snapshot: &ViewSnapshot) -> String {
    let mut out = String::new();

    for button in &snapshot.tag_bar {
        let marker = if button.active { "*" } else { " " };
        let _ = writeln!(
            out,
            "[{marker}] {} ({})",
            button.tag.description, button.color
        );
    }
    if !snapshot.tag_bar.is_empty() {
        out.push('\n');
    }

    for card in &snapshot.cards {
        match &card.details_link {
            Some(link) => {
                let _ = writeln!(out, "{} -> {}", card.title, link);
            }
            None => {
                let _ = writeln!(out, "{}", card.title);
            }
        }
        if !card.description.is_empty() {
            let _ = writeln!(out, "  {}", card.description);
        }
        if !card.tags.is_empty() {
            let labels: Vec<&str> = card.tags.iter().map(|b| b.label.as_str()).collect();
            let _ = writeln!(out, "  tags: {}", labels.join(", "));
        }
        for row in &card.inventory {
            let _ = writeln!(
                out,
                "  - {} x{} (updated {})",
                row.product, row.quantity, row.updated_at
            );
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hospital::{Hospital, InventoryLine, ProductRef};
    use chrono::TimeZone;
    use stockboard_types::{NonEmptyText, ProductId, TagId};

    fn tag(id: i64, description: &str) -> Tag {
        Tag {
            id: TagId(id),
            description: description.to_string(),
        }
    }

    fn hospital(id: i64, name: &str, can_manage: bool) -> Hospital {
        Hospital {
            id: HospitalId(id),
            name: NonEmptyText::new(name).expect("valid name"),
            description: "desc".to_string(),
            can_manage,
            tags: vec![tag(1, "urgent")],
            inventory: vec![],
        }
    }

    #[test]
    fn truncation_keeps_exact_length_names() {
        let name = "x".repeat(50);
        assert_eq!(truncate(&name, TITLE_TRUNCATE_AT), name);
    }

    #[test]
    fn truncation_cuts_longer_names_with_ellipsis() {
        let name = "x".repeat(51);
        let expected = format!("{}...", "x".repeat(50));
        assert_eq!(truncate(&name, TITLE_TRUNCATE_AT), expected);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let name = "é".repeat(51);
        let expected = format!("{}...", "é".repeat(50));
        assert_eq!(truncate(&name, TITLE_TRUNCATE_AT), expected);
    }

    #[test]
    fn manage_flag_gates_details_link() {
        let mut view = FilterableHospitalView::new();
        view.set_hospitals(vec![hospital(1, "Open", true), hospital(2, "Closed", false)]);

        let palette = TagPalette::new();
        let renderer = BadgeTagRenderer::new(&palette);
        let snapshot = view.snapshot(&palette, &renderer);

        assert_eq!(snapshot.cards[0].details_link.as_deref(), Some("/details/1"));
        assert_eq!(snapshot.cards[1].details_link, None);
    }

    #[test]
    fn inventory_rows_uppercase_product_and_format_timestamp() {
        let updated_at = Utc.with_ymd_and_hms(2026, 1, 23, 13, 58, 4).unwrap();
        let mut h = hospital(1, "General", false);
        h.inventory = vec![InventoryLine {
            product: ProductRef {
                id: ProductId(9),
                name: "surgical gloves".to_string(),
            },
            quantity: 12,
            updated_at,
        }];

        let mut view = FilterableHospitalView::new();
        view.set_hospitals(vec![h]);

        let palette = TagPalette::new();
        let renderer = BadgeTagRenderer::new(&palette);
        let snapshot = view.snapshot(&palette, &renderer);

        let row = &snapshot.cards[0].inventory[0];
        assert_eq!(row.product, "SURGICAL GLOVES");
        assert_eq!(row.updated_at, "2026-01-23 13:58:04");
        assert_eq!(row.quantity, 12);
    }

    #[test]
    fn empty_inventory_renders_empty_section() {
        let mut view = FilterableHospitalView::new();
        view.set_hospitals(vec![hospital(1, "General", false)]);

        let palette = TagPalette::new();
        let renderer = BadgeTagRenderer::new(&palette);
        let snapshot = view.snapshot(&palette, &renderer);

        assert!(snapshot.cards[0].inventory.is_empty());
        let text = render_text(&snapshot);
        assert!(!text.contains("x0"));
    }

    #[test]
    fn tag_bar_marks_active_buttons() {
        let mut view = FilterableHospitalView::new();
        view.set_tags(vec![tag(1, "urgent"), tag(2, "rural")]);
        view.toggle_tag(TagId(2));

        let palette = TagPalette::new();
        let renderer = BadgeTagRenderer::new(&palette);
        let snapshot = view.snapshot(&palette, &renderer);

        assert!(!snapshot.tag_bar[0].active);
        assert!(snapshot.tag_bar[1].active);

        let text = render_text(&snapshot);
        assert!(text.contains("[*] rural"));
        assert!(text.contains("[ ] urgent"));
    }
}
