//! Album grid example page.
//!
//! Usage example for the album grid widget: seeds a fixed in-memory album
//! list and wires the grid's three callbacks to the operator log. The list
//! is mutable only through the state's own setter, which the demo never
//! invokes after initialization.

use maud::{Markup, html};
use soundkit_album_grid::{AlbumGridHandlers, album_grid};
use soundkit_music_models::{Album, AudioFormat, AudioQuality, AudioSource, Track};
use soundkit_ui::page_header;

use crate::{page, state::AlbumListState};

static ALBUM_SIZE: u16 = 200;

/// The demo's initial album list.
#[must_use]
pub fn demo_albums() -> Vec<Album> {
    vec![Album {
        id: 1,
        title: "Midnight Dreams".to_string(),
        artist: "Luna Eclipse".to_string(),
        release_year: 2024,
        album_art: Some("https://cdn.soundkit.dev/art/midnight-dreams.jpg".to_string()),
        tracks: vec![Track {
            id: 1,
            title: "Starlight Serenade".to_string(),
            artist: "Luna Eclipse".to_string(),
            duration: 245,
            audio_sources: vec![
                AudioSource {
                    url: "https://cdn.soundkit.dev/audio/starlight-serenade.flac".to_string(),
                    format: AudioFormat::Flac,
                    quality: AudioQuality::Lossless,
                },
                AudioSource {
                    url: "https://cdn.soundkit.dev/audio/starlight-serenade.mp3".to_string(),
                    format: AudioFormat::Mp3,
                    quality: AudioQuality::High,
                },
            ],
        }],
    }]
}

/// View state seeded with the demo albums.
#[must_use]
pub fn demo_state() -> AlbumListState {
    AlbumListState::new(demo_albums())
}

/// Handlers reporting each album interaction to the operator log.
#[must_use]
pub fn logging_handlers() -> AlbumGridHandlers {
    AlbumGridHandlers {
        on_play: Box::new(|album| log::info!("Playing album: {}", album.title)),
        on_select: Box::new(|album| log::info!("Selected album: {}", album.title)),
        on_like: Box::new(|album| log::info!("Liked album: {}", album.title)),
    }
}

#[must_use]
pub fn album_grid_example(state: &AlbumListState) -> Markup {
    page(&html! {
        (page_header("Album Grid", "A fixed album list rendered through the grid widget"))
        (album_grid(&state.albums(), ALBUM_SIZE))
    })
}
