//! The ayah toolbar widget.
//!
//! A [`Toolbar`] floats over a scrollable text view and offers a handful
//! of actions for the selected verse. It is made of three parts:
//!
//! - a [`Pip`](pip::Pip) pointing at the exact spot the toolbar refers to,
//! - an [`ItemRow`](row::ItemRow) of fixed-width icons for the displayed
//!   menu level,
//! - the menu state, which opens submenus and reports selections.
//!
//! All of it is synchronous and meant to be driven from the UI thread.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use ayah_toolbar_core as core;

pub mod pip;
pub mod preview;
pub mod row;
pub mod toolbar;

pub use toolbar::{Bookmark, Geometry, Selection, Toolbar};
