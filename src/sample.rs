//! Sample content seeded on first run, or when stored data is unusable.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use uuid::Uuid;

use crate::doc::{Album, Background, CaptionColor, CaptionFont, Frame, Page, Polaroid, Sticker, StickerKind, Tilt};

const COVER_URL: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=600&q=80";
const BEACH_URL: &str = "https://images.unsplash.com/photo-1518837695005-2083093ee35b?auto=format&fit=crop&w=600&q=80";
const SUNSET_URL: &str = "https://images.unsplash.com/photo-1544551763-46a013bb70d5?auto=format&fit=crop&w=600&q=80";

/// One album, "Summer Memories", with two polaroids and a sun sticker.
#[must_use]
pub fn sample_albums() -> Vec<Album> {
    let beach = Polaroid {
        id: Uuid::new_v4(),
        image: BEACH_URL.to_string(),
        caption: "Beach day!".to_string(),
        frame: Frame::Classic,
        font: CaptionFont::Handwritten,
        color: CaptionColor::Black,
        x: 50.0,
        y: 30.0,
        width: 200.0,
        height: 250.0,
        rotation: 0.0,
        tilt: Some(Tilt::Left),
    };
    let sunset = Polaroid {
        id: Uuid::new_v4(),
        image: SUNSET_URL.to_string(),
        caption: "Sunset views".to_string(),
        frame: Frame::Vintage,
        font: CaptionFont::Typewriter,
        color: CaptionColor::Sepia,
        x: 300.0,
        y: 100.0,
        width: 200.0,
        height: 250.0,
        rotation: 0.0,
        tilt: Some(Tilt::Right),
    };
    let sun = Sticker {
        id: Uuid::new_v4(),
        kind: StickerKind::Sun,
        x: 400.0,
        y: 40.0,
        size: 40.0,
        color: "#FFD700".to_string(),
        rotation: 0.0,
    };

    vec![Album {
        id: Uuid::new_v4(),
        name: "Summer Memories".to_string(),
        description: "Best summer ever!".to_string(),
        cover: COVER_URL.to_string(),
        pages: vec![Page { background: Background::Clean, polaroids: vec![beach, sunset], stickers: vec![sun] }],
    }]
}
