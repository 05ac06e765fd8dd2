//! Editor core for a browser scrapbook of photo albums.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! album document, writes it through to `localStorage`, turns raw pointer
//! input into drag / resize / rotate edits, downsamples uploaded photos, and
//! projects the open page into a view-model. The host JavaScript layer only
//! wires DOM events to the engine and applies the returned
//! [`engine::Action`]s to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level browser `Engine` and testable [`engine::EngineCore`] |
//! | [`doc`] | Album / page / widget records and the in-memory `Library` |
//! | [`state`] | Library plus the open-album cursor |
//! | [`store`] | Key-value backends and full-snapshot persistence |
//! | [`input`] | Pointer sources, press targets, and the gesture state machines |
//! | [`render`] | Page view-model projection |
//! | [`ingest`] | Photo decode, downsample, and JPEG re-encode |
//! | [`config`] | Host-supplied editor configuration |
//! | [`sample`] | First-run sample albums |
//! | [`geom`] | Points, sizes, rectangles |
//! | [`error`] | Error types and codes |
//! | [`consts`] | Shared numeric and string constants |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod ingest;
pub mod input;
pub mod render;
pub mod sample;
pub mod state;
pub mod store;
