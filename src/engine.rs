//! Engine: the controller between host events and the document.
//!
//! `EngineCore` owns the application state, the three gesture machines, the
//! editor's UI selections, and the persistence adapter. The host feeds it
//! pointer events and button-click intents; every call returns the
//! [`Action`]s the host must apply to the DOM.
//!
//! Each mutating call commits to the model first, then writes the whole
//! library through to storage, then reports. A failed write never rolls the
//! model back. It surfaces as one [`Action::StorageWarning`] per failure
//! streak, and the next successful write emits [`Action::StorageRecovered`].
//!
//! `Engine` is the browser binding: the same core over `localStorage`, with
//! JSON in and JSON out for the host script.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use crate::config::{EditorConfig, WritePolicy};
use crate::consts::{
    FALLBACK_PLACEMENT, PLACEMENT_CASCADE, PLACEMENT_HALF_HEIGHT, PLACEMENT_HALF_WIDTH, STICKER_TILT_DEG,
};
use crate::doc::{Album, AlbumId, Background, CaptionFont, Frame, ItemId, ItemRef, PageRef, Polaroid, Sticker, StickerKind};
use crate::error::{ErrorCode, IngestError, InputError, PersistError};
use crate::geom::{Point, Size};
use crate::ingest::{self, IngestOptions};
use crate::input::{
    DragSession, Gesture, GestureKind, GestureSession, InputState, PointerDown, PointerSource, PressTarget,
    ResizeSession, RotateSession, UiState,
};
use crate::render::{self, PageView, StickerNode, ViewPatch};
use crate::sample;
use crate::state::AppState;
use crate::store::{KeyValueStore, Persistence, WebStore};

const QUOTA_WARNING: &str = "Your browser storage seems full. Some very large images may not be saved.\n\
     Try using smaller images or clearing site data if this keeps happening.";

/// Instructions returned to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Action {
    /// Start routing document-level move/up/cancel events for `source` to the engine.
    AttachListeners { gesture: GestureKind, source: PointerSource },
    /// Stop routing events for this gesture.
    DetachListeners { gesture: GestureKind, source: PointerSource },
    /// Patch one live widget node in place.
    Transform { item: ItemRef, patch: ViewPatch },
    /// Rebuild the open page from scratch.
    RenderPage(PageView),
    /// Add one sticker node to the open page.
    AppendSticker(StickerNode),
    /// Remove one widget node from the open page.
    RemoveNode(ItemRef),
    /// The album list changed; redraw the shelf.
    AlbumsChanged,
    /// Hide the album viewer.
    ViewerClosed,
    /// Tell the user their changes are not being saved.
    StorageWarning(String),
    /// Saving works again after a warning.
    StorageRecovered,
}

/// Core engine state. Everything except the browser storage binding.
///
/// Generic over the storage backend so it can be tested with an in-memory store.
pub struct EngineCore<S> {
    pub state: AppState,
    pub input: InputState,
    pub ui: UiState,
    config: EditorConfig,
    persistence: Persistence<S>,
    /// A warning has been shown for the current failure streak.
    storage_warned: bool,
    /// Gesture commits not yet written (`WritePolicy::OnRelease`).
    pending_write: bool,
}

impl<S: KeyValueStore> EngineCore<S> {
    #[must_use]
    pub fn new(store: S, config: EditorConfig) -> Self {
        let persistence = Persistence::new(store, config.storage_key.clone());
        Self {
            state: AppState::default(),
            input: InputState::default(),
            ui: UiState::default(),
            config,
            persistence,
            storage_warned: false,
            pending_write: false,
        }
    }

    /// Load the stored library. Missing, unreadable, or empty data is
    /// replaced with the sample albums (if enabled), which are saved at once.
    pub fn boot(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.persistence.load() {
            Some(albums) if !albums.is_empty() => {
                info!(albums = albums.len(), "library loaded");
                self.state.replace_library(albums);
            }
            _ if self.config.seed_sample_content => {
                info!("no stored albums; seeding sample content");
                self.state.replace_library(sample::sample_albums());
                self.persist(&mut actions);
            }
            _ => {
                info!("no stored albums");
                self.state.replace_library(Vec::new());
            }
        }
        actions.push(Action::AlbumsChanged);
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn albums(&self) -> &[Album] {
        self.state.library().albums()
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.persistence.store_mut()
    }

    /// Whether the last write failed.
    #[must_use]
    pub fn is_storage_degraded(&self) -> bool {
        self.persistence.is_degraded()
    }

    /// View-model for the open page.
    #[must_use]
    pub fn current_view(&self) -> Option<PageView> {
        render::project_page(self.state.current_album()?, self.state.current_page_index()?)
    }

    // --- Albums ---

    /// Create an album with one blank page.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the trimmed name is empty or no cover was
    /// given. Nothing is created in that case.
    pub fn create_album(
        &mut self,
        name: &str,
        description: &str,
        cover: Option<&str>,
    ) -> Result<Vec<Action>, InputError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InputError::MissingName);
        }
        let cover = cover.filter(|c| !c.is_empty()).ok_or(InputError::MissingCover)?;

        let album = Album::new(name.to_string(), description.trim().to_string(), cover.to_string());
        info!(album = %album.id, name, "album created");
        self.state.library_mut().push_album(album);

        let mut actions = Vec::new();
        self.persist(&mut actions);
        actions.push(Action::AlbumsChanged);
        Ok(actions)
    }

    pub fn delete_album(&mut self, id: &AlbumId) -> Vec<Action> {
        let mut actions = Vec::new();
        let was_open = self.state.cursor().is_some_and(|c| c.album == *id);
        release_matching(&mut self.input, &mut actions, |_, page, _| page.album == *id);
        self.flush(&mut actions);
        if !self.state.delete_album(id) {
            debug!(album = %id, "delete of unknown album ignored");
            return actions;
        }
        info!(album = %id, "album deleted");
        self.persist(&mut actions);
        if was_open {
            actions.push(Action::ViewerClosed);
        }
        actions.push(Action::AlbumsChanged);
        actions
    }

    pub fn open_album(&mut self, id: &AlbumId) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.state.library().album(id).is_none() {
            debug!(album = %id, "open of unknown album ignored");
            return actions;
        }
        self.end_all_gestures(&mut actions);
        if self.state.open_album(id) {
            self.render_current(&mut actions);
        }
        actions
    }

    pub fn close_album(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_all_gestures(&mut actions);
        if self.state.close_album() {
            actions.push(Action::ViewerClosed);
            actions.push(Action::AlbumsChanged);
        }
        actions
    }

    // --- Pages ---

    pub fn prev_page(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.state.current_page_index().is_none_or(|page| page == 0) {
            return actions;
        }
        self.end_all_gestures(&mut actions);
        if self.state.prev_page() {
            self.render_current(&mut actions);
        }
        actions
    }

    /// Go forward one page, appending a blank page when on the last one.
    pub fn next_page(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        let Some(before) = self.state.current_album().map(|a| a.pages.len()) else {
            return actions;
        };
        self.end_all_gestures(&mut actions);
        if !self.state.next_page() {
            return actions;
        }
        if self.state.current_album().is_some_and(|a| a.pages.len() != before) {
            debug!(pages = before + 1, "page appended");
            self.persist(&mut actions);
        }
        self.render_current(&mut actions);
        actions
    }

    pub fn change_background(&mut self, background: Background) -> Vec<Action> {
        let mut actions = Vec::new();
        let Some(at) = self.state.current_page_ref() else {
            return actions;
        };
        if self.state.library_mut().set_background(at, background) {
            self.persist(&mut actions);
            self.render_current(&mut actions);
        }
        actions
    }

    // --- Widgets ---

    /// Add a polaroid for `image` to the open page, centered with a cascade
    /// offset, using the selected frame and font.
    pub fn add_polaroid(&mut self, image: String) -> Vec<Action> {
        let mut actions = Vec::new();
        let Some(at) = self.state.current_page_ref() else {
            debug!("add polaroid with no album open");
            return actions;
        };
        let existing = self.state.current_page().map_or(0, |p| p.polaroids.len());
        let polaroid = Polaroid::new(image, self.ui.frame, self.ui.font, self.placement(existing));
        debug!(item = %polaroid.id, x = polaroid.x, y = polaroid.y, "polaroid added");
        if self.state.library_mut().push_polaroid(at, polaroid) {
            self.persist(&mut actions);
            self.render_current(&mut actions);
        }
        actions
    }

    /// Downsample an uploaded file and add it as a polaroid.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] if the file cannot be decoded or re-encoded.
    pub fn add_photo(&mut self, bytes: &[u8]) -> Result<Vec<Action>, IngestError> {
        if self.state.cursor().is_none() {
            debug!("photo upload with no album open");
            return Ok(Vec::new());
        }
        let image = ingest::downsample(bytes, self.ingest_options())?;
        Ok(self.add_polaroid(image.data_url))
    }

    /// Same as [`EngineCore::add_photo`] for a `data:` URL from `FileReader`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] if the URL or its image cannot be decoded.
    pub fn add_photo_data_url(&mut self, url: &str) -> Result<Vec<Action>, IngestError> {
        if self.state.cursor().is_none() {
            debug!("photo upload with no album open");
            return Ok(Vec::new());
        }
        let image = ingest::downsample_data_url(url, self.ingest_options())?;
        Ok(self.add_polaroid(image.data_url))
    }

    /// Add several uploads. Each file that ingests becomes a polaroid in
    /// input order; files that fail are skipped and returned.
    pub fn add_photos<B: AsRef<[u8]>>(&mut self, files: &[B]) -> (Vec<Action>, Vec<IngestError>) {
        let mut actions = Vec::new();
        let mut failures = Vec::new();
        if self.state.cursor().is_none() {
            debug!(files = files.len(), "photo upload with no album open");
            return (actions, failures);
        }
        for result in ingest::ingest_all(files, self.ingest_options()) {
            match result {
                Ok(image) => actions.extend(self.add_polaroid(image.data_url)),
                Err(e) => {
                    warn!(code = e.error_code(), error = %e, "skipping photo");
                    failures.push(e);
                }
            }
        }
        (actions, failures)
    }

    /// Drop a sticker from the palette at `at` (page coordinates). Unknown
    /// sticker names are ignored.
    pub fn drop_sticker(&mut self, kind: &str, at: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if !at.is_finite() {
            debug!(?at, "sticker drop at non-finite point ignored");
            return actions;
        }
        let Some(kind) = StickerKind::from_name(kind) else {
            debug!(kind, "unknown sticker kind dropped");
            return actions;
        };
        let Some(page) = self.state.current_page_ref() else {
            return actions;
        };
        let tilt = rand::rng().random_range(-STICKER_TILT_DEG..STICKER_TILT_DEG);
        let sticker = Sticker::new(kind, at, tilt);
        let node = render::sticker_node(&sticker);
        if self.state.library_mut().push_sticker(page, sticker) {
            self.persist(&mut actions);
            actions.push(Action::AppendSticker(node));
        }
        actions
    }

    /// Store caption text typed into a polaroid. The view already shows it.
    pub fn set_caption(&mut self, id: &ItemId, caption: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        let Some(page) = self.state.current_page_ref() else {
            return actions;
        };
        if self.state.library_mut().set_polaroid_caption(page, id, caption) {
            self.persist(&mut actions);
        } else {
            debug!(item = %id, "caption for missing polaroid ignored");
        }
        actions
    }

    /// Advance a polaroid to the next frame style.
    pub fn cycle_frame(&mut self, id: &ItemId) -> Vec<Action> {
        let mut actions = Vec::new();
        let Some(page) = self.state.current_page_ref() else {
            return actions;
        };
        let Some(next) = self.state.library().polaroid(page, id).map(|p| p.frame.next()) else {
            debug!(item = %id, "frame cycle for missing polaroid ignored");
            return actions;
        };
        self.state.library_mut().set_polaroid_frame(page, id, next);
        self.persist(&mut actions);
        if let Some(p) = self.state.library().polaroid(page, id) {
            actions.push(Action::Transform { item: ItemRef::Polaroid(*id), patch: ViewPatch::frame(p) });
        }
        actions
    }

    pub fn delete_polaroid(&mut self, id: &ItemId) -> Vec<Action> {
        self.delete_item(ItemRef::Polaroid(*id))
    }

    pub fn delete_sticker(&mut self, id: &ItemId) -> Vec<Action> {
        self.delete_item(ItemRef::Sticker(*id))
    }

    fn delete_item(&mut self, item: ItemRef) -> Vec<Action> {
        let mut actions = Vec::new();
        release_matching(&mut self.input, &mut actions, |target, _, _| target == item);
        self.flush(&mut actions);
        let Some(page) = self.state.current_page_ref() else {
            return actions;
        };
        if self.state.library_mut().remove_item(page, item) {
            self.persist(&mut actions);
            actions.push(Action::RemoveNode(item));
        } else {
            debug!(?item, "delete of missing item ignored");
        }
        actions
    }

    // --- Selections ---

    /// Frame used for the next added polaroid.
    pub fn select_frame(&mut self, frame: Frame) {
        self.ui.frame = frame;
    }

    /// Caption font used for the next added polaroid.
    pub fn select_font(&mut self, font: CaptionFont) {
        self.ui.font = font;
    }

    /// Report the page element's size, used to center new polaroids.
    pub fn set_page_size(&mut self, size: Size) {
        if !size.is_finite() {
            debug!(?size, "non-finite page size ignored");
            return;
        }
        self.ui.page_size = size;
    }

    // --- Pointer input ---

    /// Pointer-down on a widget. Starts the gesture the press target selects.
    pub fn pointer_down(&mut self, down: PointerDown) -> Vec<Action> {
        let mut actions = Vec::new();
        if !down.point.is_finite() || !down.bounds.center().is_finite() {
            debug!(point = ?down.point, "pointer down at non-finite point ignored");
            return actions;
        }
        let Some(page) = self.state.current_page_ref() else {
            debug!("pointer down with no album open");
            return actions;
        };
        let library = self.state.library();

        match (down.target, down.item) {
            (PressTarget::ResizeHandle, ItemRef::Polaroid(id)) => {
                let Some(origin) = library.polaroid(page, &id).map(Polaroid::size) else {
                    debug!(item = %id, "resize on missing polaroid ignored");
                    return actions;
                };
                let session = ResizeSession { id, page, start_pointer: down.point, origin };
                start(&mut self.input.resize, session, down.source, &mut actions);
            }
            (PressTarget::RotateHandle, ItemRef::Polaroid(id)) => {
                let Some(base) = library.polaroid(page, &id).map(|p| p.rotation) else {
                    debug!(item = %id, "rotate on missing polaroid ignored");
                    return actions;
                };
                let session = RotateSession::new(id, page, down.bounds.center(), down.point, base);
                start(&mut self.input.rotate, session, down.source, &mut actions);
            }
            (target, item) if target.starts_drag() => {
                let Some(origin) = library.item_position(page, item) else {
                    debug!(?item, "drag on missing item ignored");
                    return actions;
                };
                let session = DragSession { item, page, start_pointer: down.point, origin };
                start(&mut self.input.drag, session, down.source, &mut actions);
            }
            _ => {}
        }
        actions
    }

    /// Pointer-move from `source`. Every active machine bound to that source
    /// commits its new absolute value.
    pub fn pointer_move(&mut self, point: Point, source: PointerSource) -> Vec<Action> {
        let mut actions = Vec::new();
        if !point.is_finite() {
            debug!(?point, "pointer move at non-finite point ignored");
            return actions;
        }
        let mut committed = false;

        if let Some(s) = self.input.drag.session_for(source).copied() {
            let at = s.position_at(point);
            if self.state.library_mut().set_item_position(s.page, s.item, at) {
                actions.push(Action::Transform { item: s.item, patch: ViewPatch::position(at) });
                committed = true;
            } else {
                debug!(item = ?s.item, "drag target gone");
                release(&mut self.input.drag, &mut actions);
            }
        }

        if let Some(s) = self.input.resize.session_for(source).copied() {
            let size = s.size_at(point);
            if self.state.library_mut().set_polaroid_size(s.page, &s.id, size) {
                actions.push(Action::Transform { item: s.item(), patch: ViewPatch::size(size) });
                committed = true;
            } else {
                debug!(item = %s.id, "resize target gone");
                release(&mut self.input.resize, &mut actions);
            }
        }

        if let Some(s) = self.input.rotate.session_for(source).copied() {
            let rotation = s.rotation_at(point);
            if self.state.library_mut().set_polaroid_rotation(s.page, &s.id, rotation) {
                actions.push(Action::Transform { item: s.item(), patch: ViewPatch::rotation(rotation) });
                committed = true;
            } else {
                debug!(item = %s.id, "rotate target gone");
                release(&mut self.input.rotate, &mut actions);
            }
        }

        if committed {
            match self.config.write_policy {
                WritePolicy::EveryStep => self.persist(&mut actions),
                WritePolicy::OnRelease => self.pending_write = true,
            }
        }
        actions
    }

    /// Pointer-up from `source`: ends every machine bound to it.
    pub fn pointer_up(&mut self, source: PointerSource) -> Vec<Action> {
        let mut actions = Vec::new();
        release_matching(&mut self.input, &mut actions, |_, _, s| s == source);
        self.flush(&mut actions);
        actions
    }

    /// Pointer-cancel from `source`. Same as release; committed moves stay.
    pub fn pointer_cancel(&mut self, source: PointerSource) -> Vec<Action> {
        self.pointer_up(source)
    }

    /// End every active gesture, e.g. when the host page loses focus.
    pub fn abort_gestures(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.end_all_gestures(&mut actions);
        actions
    }

    // --- Internals ---

    fn end_all_gestures(&mut self, actions: &mut Vec<Action>) {
        release_matching(&mut self.input, actions, |_, _, _| true);
        self.flush(actions);
    }

    fn ingest_options(&self) -> IngestOptions {
        IngestOptions::from_config(&self.config)
    }

    #[allow(clippy::cast_precision_loss)]
    fn placement(&self, existing: usize) -> Point {
        let page = self.ui.page_size;
        if !page.is_known() {
            return Point::new(FALLBACK_PLACEMENT, FALLBACK_PLACEMENT);
        }
        let cascade = existing as f64 * PLACEMENT_CASCADE;
        Point::new(
            page.width / 2.0 - PLACEMENT_HALF_WIDTH + cascade,
            page.height / 2.0 - PLACEMENT_HALF_HEIGHT + cascade,
        )
    }

    fn render_current(&self, actions: &mut Vec<Action>) {
        if let Some(view) = self.current_view() {
            actions.push(Action::RenderPage(view));
        }
    }

    fn flush(&mut self, actions: &mut Vec<Action>) {
        if self.pending_write {
            self.persist(actions);
        }
    }

    fn persist(&mut self, actions: &mut Vec<Action>) {
        self.pending_write = false;
        match self.persistence.save(self.state.library().albums()) {
            Ok(()) => {
                if self.storage_warned {
                    self.storage_warned = false;
                    info!("album snapshot saved again");
                    actions.push(Action::StorageRecovered);
                }
            }
            Err(e) => {
                warn!(code = e.error_code(), error = %e, "album snapshot not saved; changes kept in memory");
                if !self.storage_warned {
                    self.storage_warned = true;
                    actions.push(Action::StorageWarning(warning_message(&e)));
                }
            }
        }
    }
}

fn warning_message(err: &PersistError) -> String {
    if err.is_quota() {
        QUOTA_WARNING.to_string()
    } else {
        format!("Could not save your albums: {err}")
    }
}

/// Enter `Active`, releasing any abandoned session of the same kind first.
fn start<S: GestureSession>(gesture: &mut Gesture<S>, session: S, source: PointerSource, actions: &mut Vec<Action>) {
    if let Some((_, old)) = gesture.begin(session, source) {
        debug!(gesture = ?S::KIND, source = ?old, "abandoned gesture replaced");
        actions.push(Action::DetachListeners { gesture: S::KIND, source: old });
    }
    debug!(gesture = ?S::KIND, ?source, "gesture started");
    actions.push(Action::AttachListeners { gesture: S::KIND, source });
}

fn release<S: GestureSession>(gesture: &mut Gesture<S>, actions: &mut Vec<Action>) {
    if let Some((_, source)) = gesture.finish() {
        debug!(gesture = ?S::KIND, ?source, "gesture ended");
        actions.push(Action::DetachListeners { gesture: S::KIND, source });
    }
}

fn release_where<S, F>(gesture: &mut Gesture<S>, actions: &mut Vec<Action>, pred: &F)
where
    S: GestureSession,
    F: Fn(ItemRef, PageRef, PointerSource) -> bool,
{
    let hit = match gesture {
        Gesture::Active { session, source } => pred(session.item(), session.page(), *source),
        Gesture::Idle => false,
    };
    if hit {
        release(gesture, actions);
    }
}

/// Release every machine whose session matches `pred(item, page, source)`.
fn release_matching<F>(input: &mut InputState, actions: &mut Vec<Action>, pred: F)
where
    F: Fn(ItemRef, PageRef, PointerSource) -> bool,
{
    release_where(&mut input.drag, actions, &pred);
    release_where(&mut input.resize, actions, &pred);
    release_where(&mut input.rotate, actions, &pred);
}

// =============================================================
// Browser binding
// =============================================================

/// The editor bound to `window.localStorage`.
///
/// Every method returns the resulting actions as a JSON array.
#[wasm_bindgen]
pub struct Engine {
    core: EngineCore<WebStore>,
}

#[wasm_bindgen]
#[allow(clippy::missing_errors_doc)]
impl Engine {
    /// Create an engine. `config_json` is an optional [`EditorConfig`] object.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Engine, JsError> {
        let config = match config_json.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => EditorConfig::from_json(raw)?,
            _ => EditorConfig::default(),
        };
        let store = WebStore::local()?;
        Ok(Self { core: EngineCore::new(store, config) })
    }

    pub fn boot(&mut self) -> Result<String, JsError> {
        encode(&self.core.boot())
    }

    /// Every album, as stored.
    pub fn albums(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.core.albums())?)
    }

    /// The open page's view-model, or `null`.
    pub fn current_view(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.core.current_view())?)
    }

    pub fn create_album(&mut self, name: &str, description: &str, cover: Option<String>) -> Result<String, JsError> {
        encode(&self.core.create_album(name, description, cover.as_deref())?)
    }

    pub fn delete_album(&mut self, id: &str) -> Result<String, JsError> {
        let id = Uuid::parse_str(id)?;
        encode(&self.core.delete_album(&id))
    }

    pub fn open_album(&mut self, id: &str) -> Result<String, JsError> {
        let id = Uuid::parse_str(id)?;
        encode(&self.core.open_album(&id))
    }

    pub fn close_album(&mut self) -> Result<String, JsError> {
        encode(&self.core.close_album())
    }

    pub fn prev_page(&mut self) -> Result<String, JsError> {
        encode(&self.core.prev_page())
    }

    pub fn next_page(&mut self) -> Result<String, JsError> {
        encode(&self.core.next_page())
    }

    pub fn change_background(&mut self, background: &str) -> Result<String, JsError> {
        let background = parse_name::<Background>(background)?;
        encode(&self.core.change_background(background))
    }

    pub fn add_photo(&mut self, bytes: &[u8]) -> Result<String, JsError> {
        encode(&self.core.add_photo(bytes)?)
    }

    pub fn add_photo_data_url(&mut self, url: &str) -> Result<String, JsError> {
        encode(&self.core.add_photo_data_url(url)?)
    }

    pub fn drop_sticker(&mut self, kind: &str, x: f64, y: f64) -> Result<String, JsError> {
        encode(&self.core.drop_sticker(kind, Point::new(x, y)))
    }

    pub fn set_caption(&mut self, id: &str, caption: &str) -> Result<String, JsError> {
        let id = Uuid::parse_str(id)?;
        encode(&self.core.set_caption(&id, caption))
    }

    pub fn cycle_frame(&mut self, id: &str) -> Result<String, JsError> {
        let id = Uuid::parse_str(id)?;
        encode(&self.core.cycle_frame(&id))
    }

    pub fn delete_polaroid(&mut self, id: &str) -> Result<String, JsError> {
        let id = Uuid::parse_str(id)?;
        encode(&self.core.delete_polaroid(&id))
    }

    pub fn delete_sticker(&mut self, id: &str) -> Result<String, JsError> {
        let id = Uuid::parse_str(id)?;
        encode(&self.core.delete_sticker(&id))
    }

    pub fn select_frame(&mut self, frame: &str) -> Result<(), JsError> {
        self.core.select_frame(parse_name(frame)?);
        Ok(())
    }

    pub fn select_font(&mut self, font: &str) -> Result<(), JsError> {
        self.core.select_font(parse_name(font)?);
        Ok(())
    }

    pub fn set_page_size(&mut self, width: f64, height: f64) {
        self.core.set_page_size(Size::new(width, height));
    }

    /// `event_json` is a [`PointerDown`] object.
    pub fn pointer_down(&mut self, event_json: &str) -> Result<String, JsError> {
        let down: PointerDown = serde_json::from_str(event_json)?;
        encode(&self.core.pointer_down(down))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, touch: bool) -> Result<String, JsError> {
        encode(&self.core.pointer_move(Point::new(x, y), source(touch)))
    }

    pub fn pointer_up(&mut self, touch: bool) -> Result<String, JsError> {
        encode(&self.core.pointer_up(source(touch)))
    }

    pub fn pointer_cancel(&mut self, touch: bool) -> Result<String, JsError> {
        encode(&self.core.pointer_cancel(source(touch)))
    }

    pub fn abort_gestures(&mut self) -> Result<String, JsError> {
        encode(&self.core.abort_gestures())
    }
}

fn source(touch: bool) -> PointerSource {
    if touch { PointerSource::Touch } else { PointerSource::Mouse }
}

fn encode(actions: &[Action]) -> Result<String, JsError> {
    Ok(serde_json::to_string(actions)?)
}

/// Parse a bare vocabulary name such as `"pastel-blue"` into its enum.
fn parse_name<T: DeserializeOwned>(name: &str) -> Result<T, JsError> {
    Ok(serde_json::from_value(serde_json::Value::String(name.to_string()))?)
}
