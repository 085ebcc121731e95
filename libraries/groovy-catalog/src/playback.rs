//! Playback controller
//!
//! Connects catalog navigation to an external audio engine. The engine is
//! driven through [`PlaybackOutput`]; the host's UI timer reports progress
//! through [`PlaybackController::on_progress`], which auto-advances at the
//! end of a song.

use crate::controllers::SharedStore;
use crate::types::{Direction, ProgressTick, TickOutcome};
use groovy_core::{BrowseMode, GroovyError, PlaybackOutput, Result, Song, SongId};
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{debug, warn};

/// Fraction of a song after which a silent output counts as finished
pub const END_OF_TRACK_FRACTION: f64 = 0.98;

/// Play/pause/stop and auto-advance on top of the catalog store
pub struct PlaybackController {
    store: SharedStore,
    output: Box<dyn PlaybackOutput>,

    /// Length of the current song, from the engine or the duration text
    track_length: Option<Duration>,
}

impl PlaybackController {
    pub fn new(store: SharedStore, output: Box<dyn PlaybackOutput>) -> Self {
        Self {
            store,
            output,
            track_length: None,
        }
    }

    /// Length of the current song, if known
    pub fn track_length(&self) -> Option<Duration> {
        self.track_length
    }

    // ===== Playback Control =====

    /// Make a library song current and start it
    ///
    /// The song is recorded in history and the browsing mode switches to
    /// `mode` before the engine is asked to play. If the engine fails, the
    /// song stays current but is marked not playing.
    pub fn play_song(&mut self, id: SongId, mode: BrowseMode) -> Result<Song> {
        let song = {
            let mut store = self.store.borrow_mut();
            let song = store
                .resolve(id)
                .cloned()
                .ok_or(GroovyError::SongNotFound(id))?;

            store.set_current(Some(id));
            store.set_playing(true);
            store.set_mode(mode);
            store.record_play(id);
            song
        };

        self.track_length = self
            .output
            .track_length(&song)
            .or_else(|| song.duration_secs().map(Duration::from_secs));

        if let Err(e) = self.output.play(&song) {
            warn!(song_id = %song.id, error = %e, "Cannot play song");
            self.store.borrow_mut().set_playing(false);
            return Err(e);
        }

        debug!(song_id = %song.id, mode = %mode, "Playing song");
        Ok(song)
    }

    /// Skip forward; starts a random song when nothing is current
    pub fn play_next(&mut self) -> Result<Option<Song>> {
        self.skip(Direction::Next)
    }

    /// Skip backward; starts a random song when nothing is current
    pub fn play_prev(&mut self) -> Result<Option<Song>> {
        self.skip(Direction::Previous)
    }

    fn skip(&mut self, direction: Direction) -> Result<Option<Song>> {
        let (has_current, target, mode) = {
            let store = self.store.borrow();
            (
                store.current_song().is_some(),
                store.advance(direction).map(|song| song.id),
                store.mode(),
            )
        };

        if !has_current {
            return self.play_random(None);
        }

        match target {
            Some(id) => self.play_song(id, mode).map(Some),
            None => Ok(None),
        }
    }

    /// Play a random song from the first non-empty catalog
    ///
    /// Modes are tried in order: `prefer`, the current mode, library,
    /// playlist. Returns `Ok(None)` when every catalog is empty.
    pub fn play_random(&mut self, prefer: Option<BrowseMode>) -> Result<Option<Song>> {
        let current_mode = self.store.borrow().mode();

        let mut modes: Vec<BrowseMode> = Vec::with_capacity(3);
        for mode in prefer
            .into_iter()
            .chain([current_mode, BrowseMode::Library, BrowseMode::Playlist])
        {
            if !modes.contains(&mode) {
                modes.push(mode);
            }
        }

        let pick = {
            let store = self.store.borrow();
            let mut rng = rand::thread_rng();
            modes.iter().find_map(|&mode| {
                store
                    .ordered_view_for(mode)
                    .choose(&mut rng)
                    .map(|song| (song.id, mode))
            })
        };

        match pick {
            Some((id, mode)) => self.play_song(id, mode).map(Some),
            None => Ok(None),
        }
    }

    /// Play/pause button
    ///
    /// With nothing current a random song is started. Returns whether
    /// something is playing afterwards.
    pub fn toggle_play_pause(&mut self) -> Result<bool> {
        let (has_current, playing) = {
            let store = self.store.borrow();
            (store.current_song().is_some(), store.is_playing())
        };

        if !has_current {
            return Ok(self.play_random(None)?.is_some());
        }

        if playing {
            self.pause();
        } else {
            self.resume();
        }
        Ok(self.store.borrow().is_playing())
    }

    /// Pause the current song; no-op when nothing is current
    pub fn pause(&mut self) {
        if self.store.borrow().current_song().is_none() {
            return;
        }
        self.output.pause();
        self.store.borrow_mut().set_playing(false);
    }

    /// Resume the current song; no-op when nothing is current
    pub fn resume(&mut self) {
        if self.store.borrow().current_song().is_none() {
            return;
        }
        self.output.resume();
        self.store.borrow_mut().set_playing(true);
    }

    /// Stop playback and forget the current song
    pub fn stop(&mut self) {
        self.output.stop();
        self.track_length = None;

        let mut store = self.store.borrow_mut();
        store.set_current(None);
        store.set_playing(false);
    }

    // ===== End Of Track =====

    /// The current song ended: play the next one, or stop if there is none
    pub fn track_finished(&mut self) -> Result<Option<Song>> {
        let (next, mode) = {
            let store = self.store.borrow();
            (store.next_song().map(|song| song.id), store.mode())
        };

        match next {
            Some(id) => self.play_song(id, mode).map(Some),
            None => {
                self.stop();
                Ok(None)
            }
        }
    }

    /// Periodic progress report from the audio engine
    ///
    /// A song counts as finished once the output is idle and at least
    /// [`END_OF_TRACK_FRACTION`] of its known length has elapsed. Songs of
    /// unknown length never auto-advance.
    pub fn on_progress(&mut self, elapsed: Duration, output_busy: bool) -> Result<ProgressTick> {
        let total = self.track_length.unwrap_or_default();
        let fraction = if total.is_zero() {
            0.0
        } else {
            (elapsed.as_secs_f64() / total.as_secs_f64()).min(1.0)
        };

        let outcome = if !output_busy && !total.is_zero() && fraction >= END_OF_TRACK_FRACTION {
            match self.track_finished()? {
                Some(song) => TickOutcome::Advanced(song),
                None => TickOutcome::Stopped,
            }
        } else {
            TickOutcome::Continue
        };

        Ok(ProgressTick {
            elapsed,
            total,
            fraction,
            outcome,
        })
    }
}
