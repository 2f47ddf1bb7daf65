use super::item::{Filter, ItemId};

/// Lightbox navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Every input the gallery understands, whatever adapter produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryCommand {
    /// A filter button was pressed
    Filter(Filter),
    /// A gallery item was activated
    Open(ItemId),
    Close,
    Next,
    Prev,
}
