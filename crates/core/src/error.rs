use crate::menu::MenuId;

/// An error building a [`MenuDescriptor`](crate::menu::MenuDescriptor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two items share the same id.
    #[error("menu id {0:?} is used by more than one item")]
    DuplicateId(MenuId),

    /// A submenu item owns a submenu of its own.
    #[error("submenu item {child:?} of {parent:?} cannot own a submenu")]
    NestedSubmenu {
        /// The root item owning the submenu.
        parent: MenuId,
        /// The offending submenu item.
        child: MenuId,
    },
}
