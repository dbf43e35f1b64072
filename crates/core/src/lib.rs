//! # Stockboard Core
//!
//! Core business logic for the stockboard hospital inventory browser.
//!
//! This crate contains pure data operations and the filterable view:
//! - Domain model: hospitals, tags, inventory lines
//! - The tag-filterable hospital view and its pure filtering function
//! - Card presentation model and plain-text rendering
//! - Fixture-backed `InventoryService` that owns the canonical collections
//!
//! **No API concerns**: HTTP servers, wire envelopes, or client-side stores
//! belong in `stockboard-run` and `stockboard-store`.

pub mod config;
pub mod error;
pub mod hospital;
pub mod render;
pub mod service;
pub mod tag;
pub mod view;

pub use config::CoreConfig;
pub use error::{StockError, StockResult};
pub use hospital::{Hospital, InventoryLine, ProductRef};
pub use render::{BadgeTagRenderer, HospitalCard, InventoryRow, TagBadge, TagButton, TagRenderer, ViewSnapshot};
pub use service::InventoryService;
pub use tag::{ColorToken, Tag, TagPalette};
pub use view::{filter_hospitals, FilterableHospitalView};
