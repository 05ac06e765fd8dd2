//! Document model: albums, pages, and the widgets placed on them.
//!
//! This module defines the persisted record types (`Album`, `Page`,
//! `Polaroid`, `Sticker`), the small closed vocabularies they use (frames,
//! fonts, backgrounds, sticker kinds), and the in-memory store that owns every
//! album (`Library`).
//!
//! `Library` edits are plain structural changes that report whether they
//! applied. An edit aimed at an album, page, or item that no longer exists
//! returns `false` and changes nothing, so a gesture callback that outlives
//! its target is harmless.
//!
//! The serde shape of these types is the persisted format. It carries no
//! version field.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    DEFAULT_POLAROID_HEIGHT, DEFAULT_POLAROID_WIDTH, DEFAULT_STICKER_SIZE, FALLBACK_STICKER_COLOR,
    MIN_POLAROID_HEIGHT, MIN_POLAROID_WIDTH,
};
use crate::geom::{Point, Size};

/// Identifier of an album.
pub type AlbumId = Uuid;

/// Identifier of a polaroid or sticker.
pub type ItemId = Uuid;

// =============================================================
// Vocabularies
// =============================================================

/// Paper style behind a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    #[default]
    Clean,
    Lined,
    Grid,
    Dotted,
    Kraft,
    Vintage,
}

impl Background {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Lined => "lined",
            Self::Grid => "grid",
            Self::Dotted => "dotted",
            Self::Kraft => "kraft",
            Self::Vintage => "vintage",
        }
    }
}

/// Border style of a polaroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frame {
    #[default]
    Classic,
    Vintage,
    Warm,
    PastelBlue,
    PastelPink,
    PastelGreen,
    Minimalist,
}

impl Frame {
    /// Cycle order used by the frame context menu.
    pub const ALL: [Frame; 7] = [
        Self::Classic,
        Self::Vintage,
        Self::Warm,
        Self::PastelBlue,
        Self::PastelPink,
        Self::PastelGreen,
        Self::Minimalist,
    ];

    /// The frame after this one in [`Frame::ALL`], wrapping to the first.
    #[must_use]
    pub fn next(self) -> Frame {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Vintage => "vintage",
            Self::Warm => "warm",
            Self::PastelBlue => "pastel-blue",
            Self::PastelPink => "pastel-pink",
            Self::PastelGreen => "pastel-green",
            Self::Minimalist => "minimalist",
        }
    }
}

/// Caption typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaptionFont {
    #[default]
    #[serde(rename = "caption-handwritten")]
    Handwritten,
    #[serde(rename = "caption-typewriter")]
    Typewriter,
    #[serde(rename = "caption-marker")]
    Marker,
}

impl CaptionFont {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Handwritten => "caption-handwritten",
            Self::Typewriter => "caption-typewriter",
            Self::Marker => "caption-marker",
        }
    }
}

/// Caption ink color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptionColor {
    #[default]
    Black,
    Sepia,
    White,
}

impl CaptionColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Sepia => "sepia",
            Self::White => "white",
        }
    }
}

/// Static tilt class applied on top of the free rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tilt {
    #[serde(rename = "tilt-left")]
    Left,
    #[serde(rename = "tilt-right")]
    Right,
}

impl Tilt {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "tilt-left",
            Self::Right => "tilt-right",
        }
    }
}

/// Sticker icon. The serialized name doubles as the icon-font glyph name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StickerKind {
    Plane,
    Map,
    Camera,
    Heart,
    Star,
    Cloud,
    Sun,
    Coffee,
    Book,
    Music,
    Flag,
    Gift,
}

impl StickerKind {
    /// Every kind, in sticker-palette order.
    pub const ALL: [StickerKind; 12] = [
        Self::Plane,
        Self::Map,
        Self::Camera,
        Self::Heart,
        Self::Star,
        Self::Cloud,
        Self::Sun,
        Self::Coffee,
        Self::Book,
        Self::Music,
        Self::Flag,
        Self::Gift,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Map => "map",
            Self::Camera => "camera",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Cloud => "cloud",
            Self::Sun => "sun",
            Self::Coffee => "coffee",
            Self::Book => "book",
            Self::Music => "music",
            Self::Flag => "flag",
            Self::Gift => "gift",
        }
    }

    /// Parse the drag-and-drop payload name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<StickerKind> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Color a freshly dropped sticker of this kind gets.
    #[must_use]
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Plane => "#4682B4",
            Self::Map | Self::Coffee => "#8B4513",
            Self::Camera => FALLBACK_STICKER_COLOR,
            Self::Heart => "#FF4757",
            Self::Star => "#FFD700",
            Self::Cloud => "#87CEEB",
            Self::Sun => "#FFA500",
            Self::Book => "#2E8B57",
            Self::Music => "#9B30FF",
            Self::Flag => "#FF6347",
            Self::Gift => "#20B2AA",
        }
    }
}

// =============================================================
// Records
// =============================================================

/// A positioned, resizable, rotatable photo widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polaroid {
    pub id: ItemId,
    /// Image reference: a URL or a `data:` URL.
    pub image: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub frame: Frame,
    #[serde(default)]
    pub font: CaptionFont,
    #[serde(default)]
    pub color: CaptionColor,
    /// Left edge in page pixels.
    pub x: f64,
    /// Top edge in page pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees. Not normalized; may exceed ±360.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tilt: Option<Tilt>,
}

impl Polaroid {
    /// A new polaroid at `at` with the default size, an empty caption, and no rotation.
    #[must_use]
    pub fn new(image: String, frame: Frame, font: CaptionFont, at: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            caption: String::new(),
            frame,
            font,
            color: CaptionColor::default(),
            x: at.x,
            y: at.y,
            width: DEFAULT_POLAROID_WIDTH,
            height: DEFAULT_POLAROID_HEIGHT,
            rotation: 0.0,
            tilt: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A small positioned, rotatable decorative icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: StickerKind,
    pub x: f64,
    pub y: f64,
    /// Icon font size in pixels.
    pub size: f64,
    /// CSS color string.
    pub color: String,
    #[serde(default)]
    pub rotation: f64,
}

impl Sticker {
    /// A new sticker of `kind` at `at`, colored from the kind's palette entry.
    #[must_use]
    pub fn new(kind: StickerKind, at: Point, rotation: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            x: at.x,
            y: at.y,
            size: DEFAULT_STICKER_SIZE,
            color: kind.default_color().to_string(),
            rotation,
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One page of an album.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub polaroids: Vec<Polaroid>,
    #[serde(default)]
    pub stickers: Vec<Sticker>,
}

impl Page {
    /// An empty page on the clean background.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }
}

/// A named collection of pages with a cover image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Cover image reference: a URL or a `data:` URL.
    pub cover: String,
    pub pages: Vec<Page>,
}

impl Album {
    /// A new album holding exactly one blank page.
    #[must_use]
    pub fn new(name: String, description: String, cover: String) -> Self {
        Self { id: Uuid::new_v4(), name, description, cover, pages: vec![Page::blank()] }
    }
}

// =============================================================
// Addressing
// =============================================================

/// A polaroid or sticker, by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ItemRef {
    Polaroid(ItemId),
    Sticker(ItemId),
}

impl ItemRef {
    #[must_use]
    pub fn id(self) -> ItemId {
        match self {
            Self::Polaroid(id) | Self::Sticker(id) => id,
        }
    }
}

/// A page, by album id and page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef {
    pub album: AlbumId,
    pub page: usize,
}

// =============================================================
// Library
// =============================================================

/// In-memory store of every album, in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    albums: Vec<Album>,
}

impl Library {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self { albums: Vec::new() }
    }

    #[must_use]
    pub fn from_albums(albums: Vec<Album>) -> Self {
        Self { albums }
    }

    /// Replace every album with a loaded snapshot.
    pub fn replace_all(&mut self, albums: Vec<Album>) {
        self.albums = albums;
    }

    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    // --- Albums ---

    pub fn push_album(&mut self, album: Album) {
        self.albums.push(album);
    }

    /// Remove an album. Returns false if it was already gone.
    pub fn remove_album(&mut self, id: &AlbumId) -> bool {
        let before = self.albums.len();
        self.albums.retain(|a| a.id != *id);
        self.albums.len() != before
    }

    #[must_use]
    pub fn album(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == *id)
    }

    pub fn album_mut(&mut self, id: &AlbumId) -> Option<&mut Album> {
        self.albums.iter_mut().find(|a| a.id == *id)
    }

    // --- Pages ---

    #[must_use]
    pub fn page(&self, at: PageRef) -> Option<&Page> {
        self.album(&at.album)?.pages.get(at.page)
    }

    pub fn page_mut(&mut self, at: PageRef) -> Option<&mut Page> {
        self.album_mut(&at.album)?.pages.get_mut(at.page)
    }

    /// Append a blank page, returning its index.
    pub fn push_page(&mut self, album: &AlbumId) -> Option<usize> {
        let album = self.album_mut(album)?;
        album.pages.push(Page::blank());
        Some(album.pages.len() - 1)
    }

    pub fn set_background(&mut self, at: PageRef, background: Background) -> bool {
        let Some(page) = self.page_mut(at) else {
            return false;
        };
        page.background = background;
        true
    }

    // --- Polaroids ---

    pub fn push_polaroid(&mut self, at: PageRef, polaroid: Polaroid) -> bool {
        let Some(page) = self.page_mut(at) else {
            return false;
        };
        page.polaroids.push(polaroid);
        true
    }

    pub fn remove_polaroid(&mut self, at: PageRef, id: &ItemId) -> bool {
        let Some(page) = self.page_mut(at) else {
            return false;
        };
        let before = page.polaroids.len();
        page.polaroids.retain(|p| p.id != *id);
        page.polaroids.len() != before
    }

    #[must_use]
    pub fn polaroid(&self, at: PageRef, id: &ItemId) -> Option<&Polaroid> {
        self.page(at)?.polaroids.iter().find(|p| p.id == *id)
    }

    fn polaroid_mut(&mut self, at: PageRef, id: &ItemId) -> Option<&mut Polaroid> {
        self.page_mut(at)?.polaroids.iter_mut().find(|p| p.id == *id)
    }

    pub fn set_polaroid_position(&mut self, at: PageRef, id: &ItemId, pos: Point) -> bool {
        let Some(p) = self.polaroid_mut(at, id) else {
            return false;
        };
        p.x = pos.x;
        p.y = pos.y;
        true
    }

    /// Set a polaroid's size, clamped to the minimum polaroid size.
    pub fn set_polaroid_size(&mut self, at: PageRef, id: &ItemId, size: Size) -> bool {
        let Some(p) = self.polaroid_mut(at, id) else {
            return false;
        };
        p.width = size.width.max(MIN_POLAROID_WIDTH);
        p.height = size.height.max(MIN_POLAROID_HEIGHT);
        true
    }

    pub fn set_polaroid_rotation(&mut self, at: PageRef, id: &ItemId, rotation: f64) -> bool {
        let Some(p) = self.polaroid_mut(at, id) else {
            return false;
        };
        p.rotation = rotation;
        true
    }

    pub fn set_polaroid_caption(&mut self, at: PageRef, id: &ItemId, caption: &str) -> bool {
        let Some(p) = self.polaroid_mut(at, id) else {
            return false;
        };
        caption.clone_into(&mut p.caption);
        true
    }

    pub fn set_polaroid_frame(&mut self, at: PageRef, id: &ItemId, frame: Frame) -> bool {
        let Some(p) = self.polaroid_mut(at, id) else {
            return false;
        };
        p.frame = frame;
        true
    }

    // --- Stickers ---

    pub fn push_sticker(&mut self, at: PageRef, sticker: Sticker) -> bool {
        let Some(page) = self.page_mut(at) else {
            return false;
        };
        page.stickers.push(sticker);
        true
    }

    pub fn remove_sticker(&mut self, at: PageRef, id: &ItemId) -> bool {
        let Some(page) = self.page_mut(at) else {
            return false;
        };
        let before = page.stickers.len();
        page.stickers.retain(|s| s.id != *id);
        page.stickers.len() != before
    }

    #[must_use]
    pub fn sticker(&self, at: PageRef, id: &ItemId) -> Option<&Sticker> {
        self.page(at)?.stickers.iter().find(|s| s.id == *id)
    }

    pub fn set_sticker_position(&mut self, at: PageRef, id: &ItemId, pos: Point) -> bool {
        let Some(s) = self.page_mut(at).and_then(|page| page.stickers.iter_mut().find(|s| s.id == *id)) else {
            return false;
        };
        s.x = pos.x;
        s.y = pos.y;
        true
    }

    // --- Either kind ---

    /// Current position of a polaroid or sticker.
    #[must_use]
    pub fn item_position(&self, at: PageRef, item: ItemRef) -> Option<Point> {
        match item {
            ItemRef::Polaroid(id) => self.polaroid(at, &id).map(Polaroid::position),
            ItemRef::Sticker(id) => self.sticker(at, &id).map(Sticker::position),
        }
    }

    pub fn set_item_position(&mut self, at: PageRef, item: ItemRef, pos: Point) -> bool {
        match item {
            ItemRef::Polaroid(id) => self.set_polaroid_position(at, &id, pos),
            ItemRef::Sticker(id) => self.set_sticker_position(at, &id, pos),
        }
    }

    pub fn remove_item(&mut self, at: PageRef, item: ItemRef) -> bool {
        match item {
            ItemRef::Polaroid(id) => self.remove_polaroid(at, &id),
            ItemRef::Sticker(id) => self.remove_sticker(at, &id),
        }
    }
}
