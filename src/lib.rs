//! A floating context toolbar for verses selected in a scrollable text view.
//!
//! The toolbar renders a row of icons with a small pip pointing at the
//! selection. The host computes where the selection is and pushes a
//! [`ToolbarPosition`] on every scroll; the toolbar takes care of placing
//! its pip, routing taps into submenus and reporting selected actions.
//!
//! ```
//! use ayah_toolbar::menu::{MenuDescriptor, MenuId, MenuItem};
//! use ayah_toolbar::{Bookmark, Icon, Toolbar, ToolbarPosition};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Action {
//!     Bookmark,
//!     Play,
//!     Tag,
//! }
//!
//! let menu = MenuDescriptor::new(vec![
//!     MenuItem::action(MenuId(1), "ic_not_favorite", Action::Bookmark),
//!     MenuItem::action(MenuId(2), "ic_play", Action::Play),
//!     MenuItem::submenu(
//!         MenuId(3),
//!         "ic_more",
//!         vec![MenuItem::action(MenuId(4), "ic_tag", Action::Tag)],
//!     ),
//! ])?;
//!
//! let mut toolbar = Toolbar::new(menu).bookmark(Bookmark {
//!     id: MenuId(1),
//!     bookmarked: Icon::new("ic_favorite"),
//!     not_bookmarked: Icon::new("ic_not_favorite"),
//! });
//!
//! toolbar.show();
//! toolbar.update_position(ToolbarPosition::new(40.0, 200.0).with_pointer_offset(60.0));
//!
//! let _ = toolbar.on_tap(MenuId(3));
//! assert_eq!(toolbar.row().ids().collect::<Vec<_>>(), vec![MenuId(4)]);
//! # Ok::<(), ayah_toolbar::Error>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use ayah_toolbar_core as core;
pub use ayah_toolbar_widget as widget;

pub use crate::core::event::{self, Status};
pub use crate::core::menu;
pub use crate::core::renderer::{self, Renderer};
pub use crate::core::settings::{self, Metrics, Settings, Style};
pub use crate::core::{
    Color, Error, Icon, MenuId, Point, PointerOrientation, Rectangle, Size, ToolbarPosition,
    Vector,
};

pub use crate::widget::pip::Pip;
pub use crate::widget::preview::{self, Preview, Previews};
pub use crate::widget::row::{ItemRow, RowItem};
pub use crate::widget::{Bookmark, Geometry, Selection, Toolbar};
