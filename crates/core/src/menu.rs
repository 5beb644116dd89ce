//! Toolbar menu model.
//!
//! A [`MenuDescriptor`] is an ordered list of root [`MenuItem`]s, each of
//! which may own a flat submenu. The tree is built once by the host and is
//! never restructured afterwards; only visibility flags and icons change
//! at runtime.
//!
//! ```
//! use ayah_toolbar_core::menu::{MenuDescriptor, MenuId, MenuItem};
//!
//! let menu: MenuDescriptor<&str> = MenuDescriptor::new(vec![
//!     MenuItem::action(MenuId::from_u64(1), "ic_not_favorite", "bookmark"),
//!     MenuItem::action(MenuId::from_u64(2), "ic_share", "share"),
//!     MenuItem::submenu(
//!         MenuId::from_u64(3),
//!         "ic_more",
//!         vec![MenuItem::action(MenuId::from_u64(4), "ic_tag", "tag")],
//!     ),
//! ])
//! .expect("ids are unique");
//!
//! assert_eq!(menu.visible_count(ayah_toolbar_core::menu::MenuLevel::Root), 3);
//! ```
use crate::Error;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// Stable identifier for a menu item.
///
/// Ids must be unique across the whole [`MenuDescriptor`], submenus
/// included, so a tap can be resolved without knowing its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub u64);

impl MenuId {
    /// Creates a new [`MenuId`] from a raw u64 value.
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Creates a [`MenuId`] by hashing a string at compile time.
    #[must_use]
    pub const fn from_str(s: &str) -> Self {
        Self(fnv1a_hash_str(s))
    }
}

const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;
const FNV1A_PRIME: u64 = 0x00000100000001B3;

/// Computes FNV-1a hash of a string at compile time.
#[must_use]
pub const fn fnv1a_hash_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash = FNV1A_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    hash
}

/// A reference to an icon asset, resolved by the [`Renderer`].
///
/// [`Renderer`]: crate::Renderer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Icon(SmolStr);

impl Icon {
    /// Creates a new [`Icon`] reference.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name))
    }

    /// Returns the name of the icon asset.
    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Self(SmolStr::from(name))
    }
}

/// A single entry of the toolbar.
#[derive(Debug, Clone)]
pub struct MenuItem<Message> {
    /// Stable identifier of this item.
    pub id: MenuId,
    /// Text shown as a preview on long press.
    pub label: Option<String>,
    /// The icon drawn in the item row.
    pub icon: Icon,
    /// Whether the item takes part in the item row.
    pub visible: bool,
    /// What a tap on this item does.
    pub kind: ItemKind<Message>,
}

/// The concrete behavior of a [`MenuItem`].
#[derive(Debug, Clone)]
pub enum ItemKind<Message> {
    /// A leaf item. Tapping it notifies the selection listener.
    Action(Option<Message>),

    /// An item owning a submenu. Tapping it descends into the children
    /// when there is at least one.
    Submenu(Vec<MenuItem<Message>>),
}

impl<Message> MenuItem<Message> {
    /// Creates a visible leaf item without a payload.
    pub fn new(id: MenuId, icon: impl Into<Icon>) -> Self {
        Self {
            id,
            label: None,
            icon: icon.into(),
            visible: true,
            kind: ItemKind::Action(None),
        }
    }

    /// Creates a visible leaf item carrying the given payload.
    pub fn action(id: MenuId, icon: impl Into<Icon>, on_select: Message) -> Self {
        Self {
            kind: ItemKind::Action(Some(on_select)),
            ..Self::new(id, icon)
        }
    }

    /// Creates a visible item owning a submenu.
    pub fn submenu(id: MenuId, icon: impl Into<Icon>, children: Vec<MenuItem<Message>>) -> Self {
        Self {
            kind: ItemKind::Submenu(children),
            ..Self::new(id, icon)
        }
    }

    /// Sets the label of this item.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets whether this item is visible.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Returns the children of this item, if it owns a non-empty submenu.
    pub fn children(&self) -> Option<&[MenuItem<Message>]> {
        match &self.kind {
            ItemKind::Submenu(children) if !children.is_empty() => Some(children),
            _ => None,
        }
    }

    /// Returns the payload emitted when this item is selected.
    pub fn on_select(&self) -> Option<&Message> {
        match &self.kind {
            ItemKind::Action(message) => message.as_ref(),
            ItemKind::Submenu(_) => None,
        }
    }
}

/// The level of a [`MenuDescriptor`] whose items populate the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuLevel {
    /// The root items.
    #[default]
    Root,

    /// The children of the root item at the given index.
    Submenu(usize),
}

/// The full, two-level menu of a toolbar.
#[derive(Debug, Clone)]
pub struct MenuDescriptor<Message> {
    items: Vec<MenuItem<Message>>,
}

impl<Message> MenuDescriptor<Message> {
    /// Creates a new [`MenuDescriptor`] from its root items.
    ///
    /// Fails if an id is used twice or if a submenu nests another submenu.
    pub fn new(items: Vec<MenuItem<Message>>) -> Result<Self, Error> {
        let mut seen = FxHashSet::default();

        for item in &items {
            if !seen.insert(item.id) {
                return Err(Error::DuplicateId(item.id));
            }

            if let ItemKind::Submenu(children) = &item.kind {
                for child in children {
                    if matches!(child.kind, ItemKind::Submenu(_)) {
                        return Err(Error::NestedSubmenu {
                            parent: item.id,
                            child: child.id,
                        });
                    }

                    if !seen.insert(child.id) {
                        return Err(Error::DuplicateId(child.id));
                    }
                }
            }
        }

        Ok(Self { items })
    }

    /// Returns the root items.
    pub fn items(&self) -> &[MenuItem<Message>] {
        &self.items
    }

    /// Returns the items of the given level.
    ///
    /// A level that does not point at a submenu resolves to no items.
    pub fn level(&self, level: MenuLevel) -> &[MenuItem<Message>] {
        match level {
            MenuLevel::Root => &self.items,
            MenuLevel::Submenu(index) => match self.items.get(index).map(|item| &item.kind) {
                Some(ItemKind::Submenu(children)) => children,
                _ => &[],
            },
        }
    }

    /// Returns the [`MenuLevel`] opened by the root item with the given id.
    pub fn submenu_level(&self, id: MenuId) -> Option<MenuLevel> {
        self.items
            .iter()
            .position(|item| item.id == id && item.children().is_some())
            .map(MenuLevel::Submenu)
    }

    /// Returns the number of visible items in the given level.
    pub fn visible_count(&self, level: MenuLevel) -> usize {
        self.level(level).iter().filter(|item| item.visible).count()
    }

    /// Finds an item anywhere in the tree.
    pub fn find(&self, id: MenuId) -> Option<&MenuItem<Message>> {
        self.items.iter().find_map(|item| {
            if item.id == id {
                return Some(item);
            }

            match &item.kind {
                ItemKind::Submenu(children) => children.iter().find(|child| child.id == id),
                ItemKind::Action(_) => None,
            }
        })
    }

    /// Finds an item anywhere in the tree, mutably.
    pub fn find_mut(&mut self, id: MenuId) -> Option<&mut MenuItem<Message>> {
        self.items.iter_mut().find_map(|item| {
            if item.id == id {
                return Some(item);
            }

            match &mut item.kind {
                ItemKind::Submenu(children) => children.iter_mut().find(|child| child.id == id),
                ItemKind::Action(_) => None,
            }
        })
    }

    /// Returns the [`MenuLevel`] the item with the given id lives in.
    pub fn level_of(&self, id: MenuId) -> Option<MenuLevel> {
        self.items.iter().enumerate().find_map(|(index, item)| {
            if item.id == id {
                return Some(MenuLevel::Root);
            }

            match &item.kind {
                ItemKind::Submenu(children) if children.iter().any(|child| child.id == id) => {
                    Some(MenuLevel::Submenu(index))
                }
                _ => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> MenuId {
        MenuId::from_u64(raw)
    }

    fn sample() -> MenuDescriptor<u32> {
        MenuDescriptor::new(vec![
            MenuItem::action(id(1), "bookmark", 1).label("Bookmark"),
            MenuItem::action(id(2), "share", 2),
            MenuItem::submenu(
                id(3),
                "more",
                vec![
                    MenuItem::action(id(4), "tag", 4),
                    MenuItem::action(id(5), "copy", 5).visible(false),
                ],
            ),
        ])
        .expect("valid menu")
    }

    #[test]
    fn test_menu_id_from_str_is_stable() {
        assert_eq!(MenuId::from_str("share"), MenuId::from_str("share"));
        assert_ne!(MenuId::from_str("share"), MenuId::from_str("tag"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = MenuDescriptor::new(vec![
            MenuItem::new(id(1), "a"),
            MenuItem::submenu(id(2), "b", vec![MenuItem::<()>::new(id(1), "c")]),
        ]);

        assert_eq!(result.err(), Some(Error::DuplicateId(id(1))));
    }

    #[test]
    fn test_nested_submenus_are_rejected() {
        let result = MenuDescriptor::new(vec![MenuItem::submenu(
            id(1),
            "a",
            vec![MenuItem::<()>::submenu(id(2), "b", vec![])],
        )]);

        assert_eq!(
            result.err(),
            Some(Error::NestedSubmenu {
                parent: id(1),
                child: id(2),
            })
        );
    }

    #[test]
    fn test_levels() {
        let menu = sample();

        assert_eq!(menu.level(MenuLevel::Root).len(), 3);
        assert_eq!(menu.level(MenuLevel::Submenu(2)).len(), 2);
        assert!(menu.level(MenuLevel::Submenu(0)).is_empty());
        assert!(menu.level(MenuLevel::Submenu(9)).is_empty());
        assert_eq!(menu.visible_count(MenuLevel::Submenu(2)), 1);
        assert_eq!(menu.submenu_level(id(3)), Some(MenuLevel::Submenu(2)));
        assert_eq!(menu.submenu_level(id(1)), None);
    }

    #[test]
    fn test_find_searches_submenus() {
        let mut menu = sample();

        assert_eq!(menu.find(id(4)).and_then(MenuItem::on_select), Some(&4));
        assert_eq!(menu.level_of(id(4)), Some(MenuLevel::Submenu(2)));
        assert_eq!(menu.level_of(id(2)), Some(MenuLevel::Root));
        assert!(menu.find(id(42)).is_none());

        if let Some(item) = menu.find_mut(id(5)) {
            item.visible = true;
        }
        assert_eq!(menu.visible_count(MenuLevel::Submenu(2)), 2);
    }

    #[test]
    fn test_empty_submenu_has_no_children() {
        let item = MenuItem::<()>::submenu(id(1), "empty", vec![]);

        assert!(item.children().is_none());
        assert!(item.on_select().is_none());
    }
}
