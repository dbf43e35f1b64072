//! # Stockboard Store
//!
//! Client-side state layer for the hospital list screen.
//!
//! The list view observes two collections it does not own: the hospital
//! list and the tag list, each replaced wholesale whenever a refresh
//! completes. This crate supplies:
//! - [`DataSource`]: the injected fetch capability ([`RestDataSource`] is
//!   the HTTP implementation)
//! - [`Store`]: holds the two collections behind watch channels and exposes
//!   fire-and-forget refresh commands
//! - [`ViewDriver`]: keeps a `FilterableHospitalView` consistent with the
//!   store without any user interaction
//!
//! Failed refreshes are logged and leave the previous collection in place;
//! the view never sees an error state, only collections.

pub mod driver;
pub mod source;
pub mod store;

pub use driver::ViewDriver;
pub use source::{DataSource, RestDataSource, StoreError, StoreResult};
pub use store::Store;
