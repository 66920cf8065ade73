//! Album grid widget.
//!
//! Renders an ordered list of [`Album`] records as a grid of cards and
//! reports user intent upward through caller-supplied handlers. The widget
//! never mutates the albums it is given; interactive surfaces carry
//! serialized [`GridAction`] payloads that the host runtime routes back
//! through [`handle_action`].

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use soundkit_music_models::Album;
use soundkit_ui::{formatting::TimeFormat as _, public_img};
use thiserror::Error;

/// Action payload emitted by the grid's interactive surfaces.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GridAction {
    /// The play button on an album card was activated
    Play { album_id: u64 },
    /// The album card itself was activated
    Select { album_id: u64 },
    /// The like button on an album card was activated
    Like { album_id: u64 },
}

impl GridAction {
    /// Returns the id of the album the action refers to.
    #[must_use]
    pub const fn album_id(&self) -> u64 {
        match self {
            Self::Play { album_id } | Self::Select { album_id } | Self::Like { album_id } => {
                *album_id
            }
        }
    }
}

impl std::fmt::Display for GridAction {
    /// # Panics
    ///
    /// * Panics if the action cannot be serialized to JSON
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_json::to_string(self).unwrap())
    }
}

impl<'a> TryFrom<&'a str> for GridAction {
    type Error = serde_json::Error;

    /// # Errors
    ///
    /// * Returns an error if the string is not valid JSON or does not match
    ///   the `GridAction` schema
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        serde_json::from_str(value)
    }
}

/// Callback invoked with the album the user acted on.
pub type AlbumCallback = Box<dyn Fn(&Album) + Send + Sync>;

/// Child-to-parent handlers wired by the page embedding the grid.
pub struct AlbumGridHandlers {
    /// Invoked when an album's play button is activated
    pub on_play: AlbumCallback,
    /// Invoked when an album card is activated
    pub on_select: AlbumCallback,
    /// Invoked when an album's like button is activated
    pub on_like: AlbumCallback,
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Album not found: {album_id}")]
    AlbumNotFound { album_id: u64 },
}

/// Resolves the album an action refers to and invokes the matching handler.
///
/// # Errors
///
/// * If the action's album id is not present in `albums`
pub fn handle_action(
    action: &GridAction,
    albums: &[Album],
    handlers: &AlbumGridHandlers,
) -> Result<(), GridError> {
    let album_id = action.album_id();
    let album = albums
        .iter()
        .find(|album| album.id == album_id)
        .ok_or(GridError::AlbumNotFound { album_id })?;

    log::debug!("handle_action: action={action:?} album={}", album.title);

    match action {
        GridAction::Play { .. } => (handlers.on_play)(album),
        GridAction::Select { .. } => (handlers.on_select)(album),
        GridAction::Like { .. } => (handlers.on_like)(album),
    }

    Ok(())
}

/// Returns the album's art URL, or the bundled placeholder when it has none.
#[must_use]
pub fn album_cover_url(album: &Album) -> &str {
    album
        .album_art
        .as_deref()
        .unwrap_or(public_img!("album.svg"))
}

#[must_use]
pub fn album_cover_img(album: &Album, size: u16) -> Markup {
    html! {
        img
            src=(album_cover_url(album))
            alt={ (album.title) " cover" }
            sx-width=(size)
            sx-height=(size);
    }
}

#[must_use]
pub fn album_card(album: &Album, size: u16) -> Markup {
    html! {
        div
            class="album-card"
            sx-width=(size)
            sx-height=(size + 80)
            fx-click=(GridAction::Select { album_id: album.id })
        {
            div class="album-card-art" sx-width=(size) sx-height=(size) sx-position="relative" {
                (album_cover_img(album, size))
                @let button_size = 30;
                button
                    class="album-card-play"
                    sx-width=(button_size)
                    sx-height=(button_size)
                    sx-position="absolute"
                    sx-bottom=(10)
                    sx-left=(10)
                    sx-border-radius="100%"
                    sx-background="#181a1b"
                    fx-click=(GridAction::Play { album_id: album.id })
                {
                    img
                        src=(public_img!("play-button-white.svg"))
                        sx-width=(button_size - 14)
                        sx-height=(button_size - 14);
                }
                button
                    class="album-card-like"
                    sx-width=(button_size)
                    sx-height=(button_size)
                    sx-position="absolute"
                    sx-bottom=(10)
                    sx-right=(10)
                    sx-border-radius="100%"
                    sx-background="#181a1b"
                    fx-click=(GridAction::Like { album_id: album.id })
                {
                    img
                        src=(public_img!("heart-white.svg"))
                        sx-width=(button_size - 14)
                        sx-height=(button_size - 14);
                }
            }
            div class="album-card-title" { (album.title) }
            div class="album-card-artist" sx-color="#ccc" {
                (album.artist) " \u{b7} " (album.release_year)
            }
            div class="album-card-meta" sx-color="#888" {
                @if album.track_count() == 1 {
                    "1 track"
                } @else {
                    (album.track_count()) " tracks"
                }
                " // "
                (album.total_duration().into_formatted())
            }
        }
    }
}

/// Renders one card per album, in input order.
#[must_use]
pub fn album_grid(albums: &[Album], size: u16) -> Markup {
    html! {
        div
            class="album-grid"
            sx-dir="row"
            sx-overflow-x="wrap"
            sx-justify-content="space-evenly"
            sx-gap=(15)
        {
            @for album in albums {
                (album_card(album, size))
            }
        }
    }
}
