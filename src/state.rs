//! Application state: the album library plus the open-viewer cursor.
//!
//! DESIGN
//! ======
//! `AppState` is the one owner of everything the editor mutates. The cursor
//! is `Some` exactly while an album viewer is open, and its page index always
//! points at an existing page of that album. Every method that changes the
//! library or the cursor keeps that invariant; nothing else writes to them.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::doc::{Album, AlbumId, Library, Page, PageRef};

/// The album open in the viewer and the page shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub album: AlbumId,
    pub page: usize,
}

impl Cursor {
    #[must_use]
    pub fn page_ref(self) -> PageRef {
        PageRef { album: self.album, page: self.page }
    }
}

/// Owner of the library and the viewer cursor.
///
/// Outside the crate the library is read-only; album removal has to go
/// through [`AppState::delete_album`]:
///
/// ```compile_fail
/// let mut state = scrapbook::state::AppState::default();
/// state.library_mut();
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppState {
    library: Library,
    cursor: Option<Cursor>,
}

impl AppState {
    #[must_use]
    pub fn new(library: Library) -> Self {
        Self { library, cursor: None }
    }

    #[must_use]
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Mutable library access for item-level edits inside the crate. Album
    /// removal goes through [`AppState::delete_album`] so the cursor follows.
    pub(crate) fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }

    /// Replace the library with a loaded snapshot, closing any open viewer.
    pub fn replace_library(&mut self, albums: Vec<Album>) {
        self.library.replace_all(albums);
        self.cursor = None;
    }

    // --- Viewer ---

    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Open an album at its first page. Unknown ids and albums with no pages
    /// leave the viewer unchanged.
    pub fn open_album(&mut self, id: &AlbumId) -> bool {
        let has_pages = self.library.album(id).is_some_and(|a| !a.pages.is_empty());
        if !has_pages {
            return false;
        }
        self.cursor = Some(Cursor { album: *id, page: 0 });
        true
    }

    /// Close the viewer. Returns false if nothing was open.
    pub fn close_album(&mut self) -> bool {
        self.cursor.take().is_some()
    }

    /// Delete an album, closing the viewer if it was showing that album.
    pub fn delete_album(&mut self, id: &AlbumId) -> bool {
        if !self.library.remove_album(id) {
            return false;
        }
        if self.cursor.is_some_and(|c| c.album == *id) {
            self.cursor = None;
        }
        true
    }

    #[must_use]
    pub fn current_album(&self) -> Option<&Album> {
        self.library.album(&self.cursor?.album)
    }

    #[must_use]
    pub fn current_page_index(&self) -> Option<usize> {
        self.cursor.map(|c| c.page)
    }

    #[must_use]
    pub fn current_page_ref(&self) -> Option<PageRef> {
        self.cursor.map(Cursor::page_ref)
    }

    #[must_use]
    pub fn current_page(&self) -> Option<&Page> {
        self.library.page(self.current_page_ref()?)
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        let at = self.current_page_ref()?;
        self.library.page_mut(at)
    }

    // --- Navigation ---

    /// Step back one page. No-op on the first page or with no album open.
    pub fn prev_page(&mut self) -> bool {
        let Some(cursor) = self.cursor.as_mut() else {
            return false;
        };
        if cursor.page == 0 {
            return false;
        }
        cursor.page -= 1;
        true
    }

    /// Step forward one page, appending a blank page first when already on
    /// the last one. Returns false only when no album is open.
    pub fn next_page(&mut self) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let Some(album) = self.library.album(&cursor.album) else {
            self.cursor = None;
            return false;
        };
        let next = if cursor.page + 1 < album.pages.len() {
            cursor.page + 1
        } else {
            let Some(idx) = self.library.push_page(&cursor.album) else {
                return false;
            };
            idx
        };
        self.cursor = Some(Cursor { page: next, ..cursor });
        true
    }
}
