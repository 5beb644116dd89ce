//! The core library of ayah_toolbar.
//!
//! This library holds basic types that can be reused and re-exported in
//! different toolbar frontends: geometry, colors, the menu model, the
//! host-computed [`ToolbarPosition`] and the [`Renderer`] seam.
//!
//! It does not hold any toolbar state; see `ayah_toolbar_widget` for that.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod event;
pub mod menu;
pub mod renderer;
pub mod settings;

mod color;
mod error;
mod point;
mod pointer;
mod position;
mod rectangle;
mod size;
mod vector;

pub use color::Color;
pub use error::Error;
pub use event::Status;
pub use menu::{Icon, ItemKind, MenuDescriptor, MenuId, MenuItem, MenuLevel};
pub use point::Point;
pub use pointer::PointerOrientation;
pub use position::ToolbarPosition;
pub use rectangle::Rectangle;
pub use renderer::Renderer;
pub use settings::{Metrics, Settings, Style};
pub use size::Size;
pub use vector::Vector;
