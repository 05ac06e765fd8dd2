#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;

fn make_polaroid(x: f64, y: f64) -> Polaroid {
    Polaroid::new("data:image/jpeg;base64,AAAA".into(), Frame::Classic, CaptionFont::Handwritten, Point::new(x, y))
}

fn library_with_page() -> (Library, PageRef) {
    let album = Album::new("Trip".into(), String::new(), "cover.jpg".into());
    let at = PageRef { album: album.id, page: 0 };
    let mut lib = Library::new();
    lib.push_album(album);
    (lib, at)
}

// =============================================================
// Vocabulary serde
// =============================================================

#[test]
fn frame_serde_names() {
    let cases = [
        (Frame::Classic, "\"classic\""),
        (Frame::Vintage, "\"vintage\""),
        (Frame::Warm, "\"warm\""),
        (Frame::PastelBlue, "\"pastel-blue\""),
        (Frame::PastelPink, "\"pastel-pink\""),
        (Frame::PastelGreen, "\"pastel-green\""),
        (Frame::Minimalist, "\"minimalist\""),
    ];
    for (frame, expected) in cases {
        assert_eq!(serde_json::to_string(&frame).unwrap(), expected);
        assert_eq!(format!("\"{}\"", frame.as_str()), expected);
    }
}

#[test]
fn frame_next_cycles_and_wraps() {
    assert_eq!(Frame::Classic.next(), Frame::Vintage);
    assert_eq!(Frame::PastelGreen.next(), Frame::Minimalist);
    assert_eq!(Frame::Minimalist.next(), Frame::Classic);
}

#[test]
fn frame_next_visits_every_frame_once() {
    let mut f = Frame::Classic;
    let mut seen = Vec::new();
    for _ in 0..Frame::ALL.len() {
        seen.push(f);
        f = f.next();
    }
    assert_eq!(f, Frame::Classic);
    assert_eq!(seen, Frame::ALL.to_vec());
}

#[test]
fn caption_font_serde_uses_css_class_names() {
    assert_eq!(serde_json::to_string(&CaptionFont::Handwritten).unwrap(), "\"caption-handwritten\"");
    let f: CaptionFont = serde_json::from_str("\"caption-typewriter\"").unwrap();
    assert_eq!(f, CaptionFont::Typewriter);
}

#[test]
fn tilt_serde_names() {
    assert_eq!(serde_json::to_string(&Tilt::Left).unwrap(), "\"tilt-left\"");
    let t: Tilt = serde_json::from_str("\"tilt-right\"").unwrap();
    assert_eq!(t, Tilt::Right);
}

#[test]
fn background_default_is_clean() {
    assert_eq!(Background::default(), Background::Clean);
    assert_eq!(serde_json::to_string(&Background::Kraft).unwrap(), "\"kraft\"");
}

#[test]
fn background_rejects_unknown_name() {
    assert!(serde_json::from_str::<Background>("\"plaid\"").is_err());
}

#[test]
fn sticker_kind_from_name_roundtrips_every_kind() {
    for kind in StickerKind::ALL {
        assert_eq!(StickerKind::from_name(kind.as_str()), Some(kind));
    }
    assert_eq!(StickerKind::from_name("unicorn"), None);
}

#[test]
fn sticker_kind_palette() {
    assert_eq!(StickerKind::Sun.default_color(), "#FFA500");
    assert_eq!(StickerKind::Map.default_color(), "#8B4513");
    assert_eq!(StickerKind::Coffee.default_color(), "#8B4513");
    assert_eq!(StickerKind::Camera.default_color(), "#333");
}

// =============================================================
// Records
// =============================================================

#[test]
fn album_new_has_one_blank_page() {
    let album = Album::new("Trip".into(), String::new(), "cover".into());
    assert_eq!(album.pages.len(), 1);
    assert_eq!(album.pages[0], Page::blank());
    assert!(album.pages[0].polaroids.is_empty());
    assert!(album.pages[0].stickers.is_empty());
}

#[test]
fn polaroid_new_defaults() {
    let p = make_polaroid(10.0, 20.0);
    assert_eq!(p.position(), Point::new(10.0, 20.0));
    assert_eq!(p.size(), Size::new(200.0, 250.0));
    assert_eq!(p.rotation, 0.0);
    assert!(p.caption.is_empty());
    assert_eq!(p.color, CaptionColor::Black);
    assert!(p.tilt.is_none());
}

#[test]
fn new_items_get_distinct_ids() {
    let a = make_polaroid(0.0, 0.0);
    let b = make_polaroid(0.0, 0.0);
    assert_ne!(a.id, b.id);
}

#[test]
fn sticker_serializes_kind_as_type() {
    let s = Sticker::new(StickerKind::Heart, Point::new(1.0, 2.0), 5.0);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["type"], "heart");
    assert_eq!(v["color"], "#FF4757");
    assert_eq!(v["size"], 40.0);
}

#[test]
fn polaroid_without_rotation_field_loads_as_zero() {
    let raw = r#"{
        "id": "00000000-0000-0000-0000-000000000001",
        "image": "a.jpg", "caption": "Beach day!", "frame": "classic",
        "font": "caption-handwritten", "color": "black", "tilt": "tilt-left",
        "x": 50, "y": 30, "width": 200, "height": 250
    }"#;
    let p: Polaroid = serde_json::from_str(raw).unwrap();
    assert_eq!(p.rotation, 0.0);
    assert_eq!(p.tilt, Some(Tilt::Left));
    assert_eq!(p.position(), Point::new(50.0, 30.0));
}

#[test]
fn polaroid_without_tilt_omits_field() {
    let v = serde_json::to_value(make_polaroid(0.0, 0.0)).unwrap();
    assert!(v.get("tilt").is_none());
}

#[test]
fn album_roundtrip_is_field_for_field_equal() {
    let mut album = Album::new("Trip".into(), "Coast".into(), "cover".into());
    let mut p = make_polaroid(50.0, 30.0);
    p.rotation = 725.5;
    p.caption = "hi".into();
    p.tilt = Some(Tilt::Right);
    album.pages[0].polaroids.push(p);
    album.pages[0].stickers.push(Sticker::new(StickerKind::Star, Point::new(5.0, 6.0), -12.0));
    album.pages[0].background = Background::Grid;

    let json = serde_json::to_string(&album).unwrap();
    let back: Album = serde_json::from_str(&json).unwrap();
    assert_eq!(back, album);
}

// =============================================================
// Library: albums and pages
// =============================================================

#[test]
fn library_new_is_empty() {
    let lib = Library::new();
    assert!(lib.is_empty());
    assert_eq!(lib.len(), 0);
}

#[test]
fn library_remove_album() {
    let (mut lib, at) = library_with_page();
    assert!(lib.remove_album(&at.album));
    assert!(lib.is_empty());
    assert!(!lib.remove_album(&at.album));
}

#[test]
fn library_push_page_returns_new_index() {
    let (mut lib, at) = library_with_page();
    assert_eq!(lib.push_page(&at.album), Some(1));
    assert_eq!(lib.push_page(&at.album), Some(2));
    assert_eq!(lib.album(&at.album).unwrap().pages.len(), 3);
}

#[test]
fn library_push_page_unknown_album_is_none() {
    let (mut lib, _) = library_with_page();
    assert_eq!(lib.push_page(&Uuid::new_v4()), None);
}

#[test]
fn library_page_out_of_range_is_none() {
    let (lib, at) = library_with_page();
    assert!(lib.page(PageRef { page: 3, ..at }).is_none());
}

#[test]
fn library_set_background() {
    let (mut lib, at) = library_with_page();
    assert!(lib.set_background(at, Background::Dotted));
    assert_eq!(lib.page(at).unwrap().background, Background::Dotted);
    assert!(!lib.set_background(PageRef { page: 9, ..at }, Background::Dotted));
}

#[test]
fn library_replace_all() {
    let (mut lib, _) = library_with_page();
    let other = Album::new("Other".into(), String::new(), "c".into());
    lib.replace_all(vec![other.clone()]);
    assert_eq!(lib.albums(), &[other]);
}

// =============================================================
// Library: items
// =============================================================

#[test]
fn library_polaroid_edits() {
    let (mut lib, at) = library_with_page();
    let p = make_polaroid(50.0, 30.0);
    let id = p.id;
    assert!(lib.push_polaroid(at, p));

    assert!(lib.set_polaroid_position(at, &id, Point::new(70.0, 20.0)));
    assert!(lib.set_polaroid_rotation(at, &id, 45.0));
    assert!(lib.set_polaroid_caption(at, &id, "Sunset"));
    assert!(lib.set_polaroid_frame(at, &id, Frame::Warm));

    let p = lib.polaroid(at, &id).unwrap();
    assert_eq!(p.position(), Point::new(70.0, 20.0));
    assert_eq!(p.rotation, 45.0);
    assert_eq!(p.caption, "Sunset");
    assert_eq!(p.frame, Frame::Warm);
}

#[test]
fn library_set_polaroid_size_clamps_to_minimum() {
    let (mut lib, at) = library_with_page();
    let p = make_polaroid(0.0, 0.0);
    let id = p.id;
    lib.push_polaroid(at, p);

    assert!(lib.set_polaroid_size(at, &id, Size::new(-50.0, 10.0)));
    assert_eq!(lib.polaroid(at, &id).unwrap().size(), Size::new(120.0, 140.0));
}

#[test]
fn library_edits_on_missing_items_are_noops() {
    let (mut lib, at) = library_with_page();
    let ghost = Uuid::new_v4();
    let before = lib.clone();

    assert!(!lib.set_polaroid_position(at, &ghost, Point::new(1.0, 1.0)));
    assert!(!lib.set_polaroid_size(at, &ghost, Size::new(300.0, 300.0)));
    assert!(!lib.set_polaroid_rotation(at, &ghost, 10.0));
    assert!(!lib.set_polaroid_caption(at, &ghost, "x"));
    assert!(!lib.set_sticker_position(at, &ghost, Point::new(1.0, 1.0)));
    assert!(!lib.remove_polaroid(at, &ghost));
    assert!(!lib.remove_sticker(at, &ghost));

    assert_eq!(lib, before);
}

#[test]
fn library_edits_on_missing_album_are_noops() {
    let (mut lib, _) = library_with_page();
    let gone = PageRef { album: Uuid::new_v4(), page: 0 };
    assert!(!lib.push_polaroid(gone, make_polaroid(0.0, 0.0)));
    assert!(!lib.push_sticker(gone, Sticker::new(StickerKind::Sun, Point::default(), 0.0)));
}

#[test]
fn library_items_keep_insertion_order() {
    let (mut lib, at) = library_with_page();
    let ids: Vec<_> = (0..4)
        .map(|i| {
            let p = make_polaroid(f64::from(i), 0.0);
            let id = p.id;
            lib.push_polaroid(at, p);
            id
        })
        .collect();
    let stored: Vec<_> = lib.page(at).unwrap().polaroids.iter().map(|p| p.id).collect();
    assert_eq!(stored, ids);
}

#[test]
fn library_item_ref_helpers() {
    let (mut lib, at) = library_with_page();
    let s = Sticker::new(StickerKind::Sun, Point::new(400.0, 40.0), 0.0);
    let item = ItemRef::Sticker(s.id);
    lib.push_sticker(at, s);

    assert_eq!(lib.item_position(at, item), Some(Point::new(400.0, 40.0)));
    assert!(lib.set_item_position(at, item, Point::new(1.0, 2.0)));
    assert_eq!(lib.item_position(at, item), Some(Point::new(1.0, 2.0)));
    assert!(lib.remove_item(at, item));
    assert_eq!(lib.item_position(at, item), None);
    assert!(!lib.set_item_position(at, item, Point::new(1.0, 2.0)));
}

#[test]
fn item_ref_id() {
    let id = Uuid::new_v4();
    assert_eq!(ItemRef::Polaroid(id).id(), id);
    assert_eq!(ItemRef::Sticker(id).id(), id);
    assert_ne!(ItemRef::Polaroid(id), ItemRef::Sticker(id));
}
