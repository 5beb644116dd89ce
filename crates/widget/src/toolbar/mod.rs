//! A floating toolbar anchored to a point inside a scrollable text view.
//!
//! The toolbar shows one level of a [`MenuDescriptor`] as a row of
//! fixed-width icons, with a [`Pip`] pointing at the anchored content.
//!
//! Repositioning comes in two speeds. [`Toolbar::update_position`] runs
//! on every scroll tick and only moves the toolbar around; the layout
//! pass is redone only when the pip changes side or offset.
//!
//! # Example
//! ```
//! use ayah_toolbar_widget::Toolbar;
//! use ayah_toolbar_widget::core::menu::{MenuDescriptor, MenuId, MenuItem};
//! use ayah_toolbar_widget::core::{PointerOrientation, ToolbarPosition};
//!
//! const BOOKMARK: MenuId = MenuId::from_str("bookmark");
//! const SHARE: MenuId = MenuId::from_str("share");
//!
//! let menu = MenuDescriptor::new(vec![
//!     MenuItem::new(BOOKMARK, "ic_not_favorite").label("Bookmark"),
//!     MenuItem::new(SHARE, "ic_share").label("Share"),
//! ])
//! .expect("ids are unique");
//!
//! let mut toolbar: Toolbar<()> = Toolbar::new(menu).share_override(SHARE, true);
//! toolbar.set_on_item_selected(|selection| println!("selected {:?}", selection.id));
//! toolbar.show();
//!
//! toolbar.update_position(
//!     ToolbarPosition::new(120.0, 300.0)
//!         .with_pointer_offset(10.0)
//!         .with_orientation(PointerOrientation::AboveContent),
//! );
//!
//! let geometry = toolbar.layout();
//! assert_eq!(geometry.size.width, toolbar.toolbar_width());
//! ```
mod layout;


pub use layout::{Geometry, arrange, measure, pip_left};

use crate::core::event::Status;
use crate::core::menu::{Icon, MenuDescriptor, MenuId, MenuItem, MenuLevel};
use crate::core::{Point, PointerOrientation, Renderer, Settings, Size, ToolbarPosition, Vector};
use crate::pip::Pip;
use crate::preview::{Preview, Previews};
use crate::row::{self, ItemRow};

use std::fmt;

/// The bookmark item and the two icons it toggles between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// The id of the bookmark item.
    pub id: MenuId,
    /// Icon shown while the selection is bookmarked.
    pub bookmarked: Icon,
    /// Icon shown while it is not.
    pub not_bookmarked: Icon,
}

/// A leaf item picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a, Message> {
    /// The id of the selected item.
    pub id: MenuId,
    /// The payload attached to the item, if any.
    pub on_select: Option<&'a Message>,
}

type Listener<Message> = Box<dyn FnMut(Selection<'_, Message>)>;

/// A floating context toolbar.
pub struct Toolbar<Message> {
    menu: MenuDescriptor<Message>,
    settings: Settings,
    bookmark: Option<Bookmark>,
    hidden_share: Option<MenuId>,
    level: MenuLevel,
    row: ItemRow,
    pip: Pip,
    orientation: PointerOrientation,
    pointer_offset: f32,
    translation: Vector,
    is_showing: bool,
    geometry: Option<Geometry>,
    layout_passes: usize,
    on_item_selected: Option<Listener<Message>>,
    previews: Previews,
}

impl<Message> fmt::Debug for Toolbar<Message>
where
    Message: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolbar")
            .field("menu", &self.menu)
            .field("level", &self.level)
            .field("row", &self.row)
            .field("orientation", &self.orientation)
            .field("pointer_offset", &self.pointer_offset)
            .field("translation", &self.translation)
            .field("is_showing", &self.is_showing)
            .finish_non_exhaustive()
    }
}

impl<Message> Toolbar<Message> {
    /// Creates a hidden [`Toolbar`] displaying the root of the given menu.
    ///
    /// [`Toolbar::set_bookmarked`] does nothing until a bookmark item is
    /// configured with [`Toolbar::bookmark`].
    pub fn new(menu: MenuDescriptor<Message>) -> Self {
        let settings = Settings::default();
        let metrics = settings.metrics;

        let mut toolbar = Self {
            menu,
            settings,
            bookmark: None,
            hidden_share: None,
            level: MenuLevel::Root,
            row: ItemRow::default(),
            pip: Pip::new(Size::new(metrics.pip_width, metrics.pip_height)),
            orientation: PointerOrientation::default(),
            pointer_offset: 0.0,
            translation: Vector::ZERO,
            is_showing: false,
            geometry: None,
            layout_passes: 0,
            on_item_selected: None,
            previews: Previews::new(),
        };

        toolbar.rebuild();
        toolbar
    }

    /// Sets the [`Settings`] of the [`Toolbar`].
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        let metrics = settings.metrics;
        let orientation = self.pip.orientation();

        self.settings = settings;
        self.pip = Pip::new(Size::new(metrics.pip_width, metrics.pip_height));
        self.pip.set_orientation(orientation);
        self.rebuild();
        self
    }

    /// Sets the bookmark item toggled by [`Toolbar::set_bookmarked`].
    #[must_use]
    pub fn bookmark(mut self, bookmark: Bookmark) -> Self {
        self.bookmark = Some(bookmark);
        self
    }

    /// Forces the share item out of every row when `hidden` is set.
    ///
    /// Some product variants must not offer sharing; the host decides
    /// which and passes the result here.
    #[must_use]
    pub fn share_override(mut self, share: MenuId, hidden: bool) -> Self {
        self.hidden_share = hidden.then_some(share);
        self.rebuild();
        self
    }

    /// Sets the listener notified when a leaf item is tapped.
    ///
    /// Replaces any previous listener.
    pub fn set_on_item_selected(&mut self, listener: impl FnMut(Selection<'_, Message>) + 'static) {
        self.on_item_selected = Some(Box::new(listener));
    }

    /// Removes the selection listener. Taps on leaf items are then absorbed.
    pub fn clear_on_item_selected(&mut self) {
        self.on_item_selected = None;
    }

    /// Returns the menu of the [`Toolbar`].
    pub fn menu(&self) -> &MenuDescriptor<Message> {
        &self.menu
    }

    /// Returns the [`Settings`] of the [`Toolbar`].
    pub fn current_settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the level currently displayed.
    pub fn level(&self) -> MenuLevel {
        self.level
    }

    /// Returns the rendered item row.
    pub fn row(&self) -> &ItemRow {
        &self.row
    }

    /// Returns the pointer pip.
    pub fn pip(&self) -> &Pip {
        &self.pip
    }

    /// Returns the queued long-press previews.
    pub fn previews(&self) -> &Previews {
        &self.previews
    }

    /// Returns the queued long-press previews, mutably, so the host can
    /// dismiss them.
    pub fn previews_mut(&mut self) -> &mut Previews {
        &mut self.previews
    }

    /// Returns `true` if the toolbar is shown.
    pub fn is_showing(&self) -> bool {
        self.is_showing
    }

    /// Returns the current screen translation.
    pub fn translation(&self) -> Vector {
        self.translation
    }

    /// Returns the current pointer orientation.
    pub fn orientation(&self) -> PointerOrientation {
        self.orientation
    }

    /// Returns the last applied pointer offset.
    pub fn pointer_offset(&self) -> f32 {
        self.pointer_offset
    }

    /// The width the host should reserve for the toolbar.
    ///
    /// Always computed from the visible root items so that submenus,
    /// which are usually shorter, fit the same budget.
    pub fn toolbar_width(&self) -> f32 {
        let count = self
            .menu
            .items()
            .iter()
            .filter(|&item| row::is_rendered(item, self.hidden_share))
            .count();

        count as f32 * self.settings.metrics.item_width
    }

    /// Shows the root of the menu and marks the toolbar as visible.
    pub fn show(&mut self) {
        self.show_level(MenuLevel::Root);
        self.is_showing = true;
        log::debug!("showing toolbar");
    }

    /// Marks the toolbar as hidden, keeping the displayed level.
    pub fn hide(&mut self) {
        self.is_showing = false;
        log::debug!("hiding toolbar");
    }

    /// Returns to the root of the menu without changing visibility.
    pub fn reset_menu(&mut self) {
        self.show_level(MenuLevel::Root);
    }

    /// Toggles the icon of the bookmark item.
    ///
    /// Without a [`Bookmark`] configured this logs a warning and does
    /// nothing. A rendered bookmark entry is updated in place, without a rebuild.
    pub fn set_bookmarked(&mut self, bookmarked: bool) {
        let Some(bookmark) = &self.bookmark else {
            log::warn!("no bookmark item configured, ignoring bookmark state");
            return;
        };

        let id = bookmark.id;
        let icon = if bookmarked {
            bookmark.bookmarked.clone()
        } else {
            bookmark.not_bookmarked.clone()
        };

        if let Some(item) = self.menu.find_mut(id) {
            item.icon = icon.clone();
        }

        let _ = self.row.set_icon(id, icon);
    }

    /// Shows or hides an item at runtime.
    pub fn set_item_visible(&mut self, id: MenuId, visible: bool) {
        let Some(item) = self.menu.find_mut(id) else {
            return;
        };

        if item.visible == visible {
            return;
        }

        item.visible = visible;

        match self.menu.level_of(id) {
            Some(level) if level == self.level => self.rebuild(),
            Some(MenuLevel::Root) => self.request_layout(),
            _ => {}
        }
    }

    /// Moves the toolbar to the given position.
    ///
    /// The translation is always applied. A layout pass is requested only
    /// when the pointer changes side or offset.
    pub fn update_position(&mut self, position: ToolbarPosition) {
        // Bitwise, so a repeated NaN offset counts as unchanged.
        let needs_layout = position.pointer_orientation != self.orientation
            || position.pointer_offset.to_bits() != self.pointer_offset.to_bits();

        self.pip.set_orientation(position.pointer_orientation);
        self.orientation = position.pointer_orientation;
        self.pointer_offset = position.pointer_offset;
        self.translation = position.translation();

        if needs_layout {
            log::trace!(
                "pointer moved to {:?} at {}, requesting layout",
                self.orientation,
                self.pointer_offset
            );
            self.request_layout();
        }
    }

    /// Measures the toolbar: the row width by the row and pip heights.
    pub fn measure(&self) -> Size {
        measure(self.toolbar_width(), &self.settings.metrics)
    }

    /// Returns `true` if a layout pass is pending.
    pub fn needs_layout(&self) -> bool {
        self.geometry.is_none()
    }

    /// Returns the number of layout passes run so far.
    pub fn layout_passes(&self) -> usize {
        self.layout_passes
    }

    /// Runs the pending layout pass, if any, and returns the geometry.
    pub fn layout(&mut self) -> Geometry {
        if let Some(geometry) = self.geometry {
            return geometry;
        }

        let geometry = self.arrange();

        self.geometry = Some(geometry);
        self.layout_passes += 1;

        geometry
    }

    /// Returns the id of the rendered item under the given screen point.
    pub fn item_at(&self, point: Point) -> Option<MenuId> {
        if !self.is_showing {
            return None;
        }

        let geometry = self.geometry.unwrap_or_else(|| self.arrange());
        let local = point - self.translation;

        if !geometry.row.contains(local) {
            return None;
        }

        self.row
            .item_at(local - (geometry.row.position() - Point::ORIGIN))
    }

    /// Handles a tap on the rendered item with the given id.
    ///
    /// Items owning a submenu open it; any other item is reported to the
    /// selection listener. Ids that are not part of the displayed row are
    /// ignored.
    pub fn on_tap(&mut self, id: MenuId) -> Status {
        if self.row.get(id).is_none() {
            log::trace!("ignoring tap on {id:?}, not in the displayed row");
            return Status::Ignored;
        }

        if let Some(level) = self.menu.submenu_level(id) {
            log::debug!("opening submenu of {id:?}");
            self.show_level(level);
            return Status::Captured;
        }

        let Some(item) = self.menu.find(id) else {
            return Status::Ignored;
        };

        match self.on_item_selected.as_mut() {
            Some(listener) => listener(Selection {
                id,
                on_select: item.on_select(),
            }),
            None => log::trace!("no listener for {id:?}, tap absorbed"),
        }

        Status::Captured
    }

    /// Handles a long press on the rendered item with the given id.
    ///
    /// Queues a preview of the item's label. Items without a label are
    /// left to the host's default handling.
    pub fn on_long_press(&mut self, id: MenuId) -> Status {
        let label = self
            .row
            .get(id)
            .and_then(|_| self.menu.find(id))
            .and_then(|item| item.label.as_deref())
            .filter(|label| !label.is_empty());

        match label {
            Some(label) => {
                let preview = Preview::new(label).duration(self.settings.preview_duration);
                let _ = self.previews.push(preview);

                Status::Captured
            }
            None => Status::Ignored,
        }
    }

    /// Handles a tap at the given screen point.
    pub fn on_press(&mut self, point: Point) -> Status {
        match self.item_at(point) {
            Some(id) => self.on_tap(id),
            None => Status::Ignored,
        }
    }

    /// Handles a long press at the given screen point.
    pub fn on_long_press_at(&mut self, point: Point) -> Status {
        match self.item_at(point) {
            Some(id) => self.on_long_press(id),
            None => Status::Ignored,
        }
    }

    /// Draws the toolbar, running the pending layout pass first.
    ///
    /// Nothing is drawn while the toolbar is hidden.
    pub fn draw(&mut self, renderer: &mut impl Renderer) {
        if !self.is_showing {
            return;
        }

        let geometry = self.layout();
        let style = self.settings.style;
        let translation = self.translation;
        let row_offset = geometry.row.position() - Point::ORIGIN;

        renderer.fill_rectangle(geometry.row + translation, style.background);

        for item in self.row.items() {
            renderer.draw_icon(
                &item.icon,
                item.bounds + row_offset + translation,
                style.icon_tint,
            );
        }

        self.pip
            .draw(renderer, geometry.pip + translation, style.pip);
    }

    fn arrange(&self) -> Geometry {
        arrange(
            self.measure(),
            &self.settings.metrics,
            self.orientation,
            self.pointer_offset,
        )
    }

    fn show_level(&mut self, level: MenuLevel) {
        self.level = level;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let metrics = self.settings.metrics;
        let items: &[MenuItem<Message>] = self.menu.level(self.level);

        self.row = ItemRow::build(
            self.level,
            items,
            Size::new(metrics.item_width, metrics.toolbar_height),
            self.hidden_share,
        );
        self.request_layout();
    }

    fn request_layout(&mut self) {
        self.geometry = None;
    }
}
