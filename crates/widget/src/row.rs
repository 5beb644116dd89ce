//! Project one level of the menu into a row of fixed-width items.
use crate::core::menu::{Icon, MenuId, MenuItem, MenuLevel};
use crate::core::{Point, Rectangle, Size};

use rustc_hash::FxHashMap;

/// A tappable entry of an [`ItemRow`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowItem {
    /// The id of the menu item this entry stands for.
    pub id: MenuId,
    /// The icon currently drawn for it.
    pub icon: Icon,
    /// Bounds relative to the row.
    pub bounds: Rectangle,
}

/// The rendered items of the displayed [`MenuLevel`].
#[derive(Debug, Clone, Default)]
pub struct ItemRow {
    level: MenuLevel,
    items: Vec<RowItem>,
    lookup: FxHashMap<MenuId, usize>,
}

impl ItemRow {
    /// Builds the row for the given level.
    ///
    /// Items that are not visible, as well as the `forced_hidden` one,
    /// are skipped. Every other item gets `item_size`, laid out left to
    /// right in declaration order.
    pub fn build<Message>(
        level: MenuLevel,
        items: &[MenuItem<Message>],
        item_size: Size,
        forced_hidden: Option<MenuId>,
    ) -> Self {
        let items: Vec<RowItem> = items
            .iter()
            .filter(|&item| is_rendered(item, forced_hidden))
            .enumerate()
            .map(|(index, item)| RowItem {
                id: item.id,
                icon: item.icon.clone(),
                bounds: Rectangle::new(
                    Point::new(index as f32 * item_size.width, 0.0),
                    item_size,
                ),
            })
            .collect();

        let lookup = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id, index))
            .collect();

        Self {
            level,
            items,
            lookup,
        }
    }

    /// Returns the level this row was built from.
    pub fn level(&self) -> MenuLevel {
        self.level
    }

    /// Returns the rendered items, in order.
    pub fn items(&self) -> &[RowItem] {
        &self.items
    }

    /// Returns the ids of the rendered items, in order.
    pub fn ids(&self) -> impl Iterator<Item = MenuId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// Returns the number of rendered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the rendered entry for the given id.
    pub fn get(&self, id: MenuId) -> Option<&RowItem> {
        self.lookup.get(&id).and_then(|index| self.items.get(*index))
    }

    /// Replaces the icon of a rendered entry in place.
    ///
    /// Returns `false` if the id is not part of this row.
    pub fn set_icon(&mut self, id: MenuId, icon: Icon) -> bool {
        match self.lookup.get(&id).and_then(|index| self.items.get_mut(*index)) {
            Some(item) => {
                item.icon = icon;
                true
            }
            None => false,
        }
    }

    /// Returns the id of the entry under the given row-relative point.
    pub fn item_at(&self, point: Point) -> Option<MenuId> {
        self.items
            .iter()
            .find(|item| item.bounds.contains(point))
            .map(|item| item.id)
    }
}

/// Returns `true` if the item takes up a slot in a row.
pub(crate) fn is_rendered<Message>(item: &MenuItem<Message>, forced_hidden: Option<MenuId>) -> bool {
    item.visible && forced_hidden != Some(item.id)
}
