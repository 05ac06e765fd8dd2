use super::*;
use crate::doc::{CaptionFont, Frame, Polaroid, Sticker, StickerKind};
use crate::geom::Point;

const KEY: &str = "polaroidAlbums";

fn populated_album() -> Album {
    let mut album = Album::new("Trip".into(), "Coast road".into(), "data:image/jpeg;base64,AAAA".into());
    let mut p = Polaroid::new("img".into(), Frame::Vintage, CaptionFont::Typewriter, Point::new(50.0, 30.0));
    p.caption = "Sunset views".into();
    p.rotation = -33.25;
    album.pages[0].polaroids.push(p);
    album.pages[0].stickers.push(Sticker::new(StickerKind::Sun, Point::new(400.0, 40.0), 7.5));
    album
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_missing_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("nope").unwrap(), None);
}

#[test]
fn memory_store_set_then_get() {
    let mut store = MemoryStore::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    assert_eq!(store.write_count(), 1);
}

#[test]
fn memory_store_refuses_write_over_capacity() {
    let mut store = MemoryStore::with_capacity_bytes(10);
    assert_eq!(store.set("k", "0123456789abc"), Err(StoreError::QuotaExceeded));
    assert_eq!(store.get("k").unwrap(), None);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn memory_store_overwrite_counts_only_new_value() {
    let mut store = MemoryStore::with_capacity_bytes(8);
    store.set("k", "1234567").unwrap();
    store.set("k", "7654321").unwrap();
    assert_eq!(store.raw("k"), Some("7654321"));
}

// =============================================================
// Persistence: save / load
// =============================================================

#[test]
fn save_then_load_reproduces_albums() {
    let albums = vec![populated_album()];
    let mut p = Persistence::new(MemoryStore::new(), KEY);
    p.save(&albums).unwrap();
    assert_eq!(p.load(), Some(albums));
}

#[test]
fn save_writes_single_record_under_key() {
    let mut p = Persistence::new(MemoryStore::new(), KEY);
    p.save(&[populated_album()]).unwrap();
    let raw = p.store().raw(KEY).unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"polaroids\""));
    assert!(raw.contains("\"type\":\"sun\""));
}

#[test]
fn load_empty_store_is_none() {
    let p = Persistence::new(MemoryStore::new(), KEY);
    assert_eq!(p.load(), None);
}

#[test]
fn load_malformed_is_none() {
    let mut store = MemoryStore::new();
    store.set(KEY, "{definitely not albums").unwrap();
    let p = Persistence::new(store, KEY);
    assert_eq!(p.load(), None);
}

#[test]
fn load_wrong_shape_is_none() {
    let mut store = MemoryStore::new();
    store.set(KEY, r#"[{"id": 7, "title": "old format"}]"#).unwrap();
    let p = Persistence::new(store, KEY);
    assert_eq!(p.load(), None);
}

#[test]
fn load_empty_array_is_some_empty() {
    let mut store = MemoryStore::new();
    store.set(KEY, "[]").unwrap();
    let p = Persistence::new(store, KEY);
    assert_eq!(p.load(), Some(Vec::new()));
}

// =============================================================
// Persistence: quota
// =============================================================

#[test]
fn save_over_quota_reports_quota_and_degrades() {
    let mut p = Persistence::new(MemoryStore::with_capacity_bytes(16), KEY);
    let err = p.save(&[populated_album()]).unwrap_err();
    assert!(err.is_quota());
    assert!(p.is_degraded());
}

#[test]
fn save_after_quota_failure_keeps_previous_record() {
    let small = vec![Album::new("A".into(), String::new(), "c".into())];
    let mut p = Persistence::new(MemoryStore::new(), KEY);
    p.save(&small).unwrap();
    let used = p.store().raw(KEY).unwrap().len() + KEY.len();
    p.store_mut().set_capacity_bytes(Some(used));

    assert!(p.save(&[populated_album()]).is_err());
    assert_eq!(p.load(), Some(small));
}

#[test]
fn successful_save_clears_degraded() {
    let mut p = Persistence::new(MemoryStore::with_capacity_bytes(16), KEY);
    assert!(p.save(&[populated_album()]).is_err());
    p.store_mut().set_capacity_bytes(None);
    p.save(&[populated_album()]).unwrap();
    assert!(!p.is_degraded());
}

#[test]
fn key_accessor() {
    let p = Persistence::new(MemoryStore::new(), "albums-v2");
    assert_eq!(p.key(), "albums-v2");
}
