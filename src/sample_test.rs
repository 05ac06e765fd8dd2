#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn one_summer_album_with_one_page() {
    let albums = sample_albums();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].name, "Summer Memories");
    assert_eq!(albums[0].description, "Best summer ever!");
    assert_eq!(albums[0].pages.len(), 1);
    assert_eq!(albums[0].pages[0].background, Background::Clean);
}

#[test]
fn page_holds_two_polaroids_and_a_sun() {
    let page = &sample_albums()[0].pages[0];
    let beach = &page.polaroids[0];
    assert_eq!((beach.x, beach.y), (50.0, 30.0));
    assert_eq!(beach.tilt, Some(Tilt::Left));
    assert_eq!(beach.frame, Frame::Classic);

    let sunset = &page.polaroids[1];
    assert_eq!(sunset.frame, Frame::Vintage);
    assert_eq!(sunset.font, CaptionFont::Typewriter);
    assert_eq!(sunset.color, CaptionColor::Sepia);
    assert_eq!(sunset.tilt, Some(Tilt::Right));

    assert_eq!(page.stickers.len(), 1);
    assert_eq!(page.stickers[0].kind, StickerKind::Sun);
    assert_eq!(page.stickers[0].color, "#FFD700");
}

#[test]
fn ids_are_fresh_each_call() {
    let a = sample_albums();
    let b = sample_albums();
    assert_ne!(a[0].id, b[0].id);
    assert_ne!(a[0].pages[0].polaroids[0].id, a[0].pages[0].polaroids[1].id);
}
