//! Render projector: builds the view-model for the open page.
//!
//! The projector is one-way. It reads an [`Album`] and produces a
//! [`PageView`] that the presentation layer turns into DOM. It never mutates
//! the document, and nothing in the view flows back into the model except
//! through engine intents.
//!
//! Two slots mirror the open book. The left slot carries every widget and the
//! album metadata panel. The right slot only carries the page background.
//! Gesture moves do not go through here; they patch one live node at a time
//! with a [`ViewPatch`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::doc::{Album, AlbumId, Background, ItemId, Polaroid, Sticker};
use crate::geom::{Point, Size};

/// Text shown in the metadata panel when an album has no description.
const EMPTY_DESCRIPTION: &str = "No description";

/// Placeholder shown in an empty caption field.
const CAPTION_PLACEHOLDER: &str = "Add a caption...";

/// The full view-model for one page of an open album.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub album: AlbumId,
    pub page_index: usize,
    pub left: SlotView,
    pub right: SlotView,
    pub meta: PageMeta,
}

/// One side of the open book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    /// Class list for the page element, e.g. `page left-page grid-bg`.
    pub class: String,
    pub polaroids: Vec<PolaroidNode>,
    pub stickers: Vec<StickerNode>,
}

/// Album metadata panel drawn on the left page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// `Page N of M`, 1-based.
    pub page_label: String,
}

/// Everything needed to build one polaroid widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolaroidNode {
    pub id: ItemId,
    /// Outer positioned element, carrying the tilt class when set.
    pub container_class: String,
    /// Inner card, carrying the frame class.
    pub frame_class: String,
    pub caption_class: String,
    pub image: String,
    pub caption: String,
    pub placeholder: &'static str,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub transform: String,
}

/// Everything needed to build one sticker widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StickerNode {
    pub id: ItemId,
    /// Icon-font class for the glyph, e.g. `fas fa-heart`.
    pub icon_class: String,
    pub left: f64,
    pub top: f64,
    pub font_size: f64,
    pub color: String,
    pub transform: String,
}

/// An in-place update to one live widget node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewPatch {
    Position { left: f64, top: f64 },
    Size { width: f64, height: f64 },
    Rotation { transform: String },
    Frame { class: String },
}

impl ViewPatch {
    #[must_use]
    pub fn position(at: Point) -> Self {
        Self::Position { left: at.x, top: at.y }
    }

    #[must_use]
    pub fn size(size: Size) -> Self {
        Self::Size { width: size.width, height: size.height }
    }

    #[must_use]
    pub fn rotation(deg: f64) -> Self {
        Self::Rotation { transform: rotate_transform(deg) }
    }

    #[must_use]
    pub fn frame(polaroid: &Polaroid) -> Self {
        Self::Frame { class: frame_class(polaroid) }
    }
}

/// Project page `page_index` of `album`. `None` if the page does not exist.
#[must_use]
pub fn project_page(album: &Album, page_index: usize) -> Option<PageView> {
    let page = album.pages.get(page_index)?;

    let description = if album.description.is_empty() {
        EMPTY_DESCRIPTION.to_string()
    } else {
        album.description.clone()
    };

    Some(PageView {
        album: album.id,
        page_index,
        left: SlotView {
            class: page_class("left-page", page.background),
            polaroids: page.polaroids.iter().map(polaroid_node).collect(),
            stickers: page.stickers.iter().map(sticker_node).collect(),
        },
        right: SlotView { class: page_class("right-page", page.background), polaroids: Vec::new(), stickers: Vec::new() },
        meta: PageMeta {
            title: album.name.clone(),
            description,
            page_label: format!("Page {} of {}", page_index + 1, album.pages.len()),
        },
    })
}

#[must_use]
pub fn polaroid_node(p: &Polaroid) -> PolaroidNode {
    let container_class = match p.tilt {
        Some(tilt) => format!("polaroid-container {}", tilt.as_str()),
        None => "polaroid-container".to_string(),
    };
    PolaroidNode {
        id: p.id,
        container_class,
        frame_class: frame_class(p),
        caption_class: format!("polaroid-caption {} caption-{}", p.font.as_str(), p.color.as_str()),
        image: p.image.clone(),
        caption: p.caption.clone(),
        placeholder: CAPTION_PLACEHOLDER,
        left: p.x,
        top: p.y,
        width: p.width,
        height: p.height,
        transform: rotate_transform(p.rotation),
    }
}

#[must_use]
pub fn sticker_node(s: &Sticker) -> StickerNode {
    StickerNode {
        id: s.id,
        icon_class: format!("fas fa-{}", s.kind.as_str()),
        left: s.x,
        top: s.y,
        font_size: s.size,
        color: s.color.clone(),
        transform: rotate_transform(s.rotation),
    }
}

/// CSS transform for a rotation in degrees.
#[must_use]
pub fn rotate_transform(deg: f64) -> String {
    format!("rotate({deg}deg)")
}

fn frame_class(p: &Polaroid) -> String {
    format!("polaroid {}", p.frame.as_str())
}

fn page_class(side: &str, background: Background) -> String {
    format!("page {side} {}-bg", background.as_str())
}
