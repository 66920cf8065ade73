//! View state for the demo pages.

use std::sync::{Arc, RwLock};

use soundkit_music_models::Album;

/// Listener invoked with the new album list after a mutation.
pub type ChangeListener = Box<dyn Fn(&[Album]) + Send + Sync>;

/// Single-owner mutable cell holding a page's album list.
///
/// Reads and mutations both happen on the host's single logical render
/// thread; listeners fire synchronously inside [`Self::set_albums`].
#[derive(Default, Clone)]
pub struct AlbumListState {
    albums: Arc<RwLock<Vec<Album>>>,
    listeners: Arc<RwLock<Vec<ChangeListener>>>,
}

impl AlbumListState {
    #[must_use]
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: Arc::new(RwLock::new(albums)),
            listeners: Arc::new(RwLock::new(vec![])),
        }
    }

    /// Returns a snapshot of the current album list.
    ///
    /// # Panics
    ///
    /// * If the state `RwLock` is poisoned
    #[must_use]
    pub fn albums(&self) -> Vec<Album> {
        self.albums.read().unwrap().clone()
    }

    /// Replaces the album list and notifies subscribers with the new list.
    ///
    /// # Panics
    ///
    /// * If the state `RwLock` is poisoned
    pub fn set_albums(&self, albums: Vec<Album>) {
        *self.albums.write().unwrap() = albums;

        let snapshot = self.albums();
        for listener in self.listeners.read().unwrap().iter() {
            listener(&snapshot);
        }
    }

    /// Registers a listener invoked after each mutation.
    ///
    /// # Panics
    ///
    /// * If the state `RwLock` is poisoned
    pub fn on_change(&self, listener: ChangeListener) {
        self.listeners.write().unwrap().push(listener);
    }
}
