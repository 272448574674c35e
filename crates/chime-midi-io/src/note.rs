//! Scoped note: NOTE ON when created, NOTE OFF when it goes out of scope.
//!
//! A [`Note`] observes its sink through a [`Weak`] reference and never keeps
//! it alive. If the sink is dropped first, the NOTE OFF is skipped.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use chime_midi_io::{MidiSink, Note, Output, RecordingBackend};
//!
//! let (backend, log) = RecordingBackend::with_log();
//! let output = Arc::new(Output::from_backend(backend));
//! output.connect()?;
//!
//! {
//!     let _c = Note::middle_c(&output)?;
//!     // ... hold the note ...
//! }
//! assert_eq!(log.len(), 2);
//! # Ok::<(), chime_midi_io::Error>(())
//! ```

use std::sync::{Arc, Weak};

use chime_midi::{note_off, note_on, MAX_VELOCITY, MIDDLE_C};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::sink::MidiSink;

#[must_use = "the note stops as soon as it is dropped"]
pub struct Note<S: MidiSink + ?Sized> {
    sink: Weak<S>,
    pitch: u8,
    velocity: u8,
    channel: u8,
    /// Cleared once the NOTE OFF has been attempted.
    sounding: bool,
}

impl<S: MidiSink + ?Sized> Note<S> {
    /// Send NOTE ON through `sink` and return the guard that will stop it.
    pub fn play(sink: &Arc<S>, pitch: u8, velocity: u8, channel: u8) -> Result<Self> {
        Self::play_weak(Arc::downgrade(sink), pitch, velocity, channel)
    }

    /// Like [`Note::play`], failing with [`Error::SinkGone`] if the sink has
    /// already been dropped.
    pub fn play_weak(sink: Weak<S>, pitch: u8, velocity: u8, channel: u8) -> Result<Self> {
        let target = sink.upgrade().ok_or(Error::SinkGone)?;
        target.transmit(&note_on(pitch, velocity, channel)?)?;
        debug!("Note on: pitch {} velocity {} channel {}", pitch, velocity, channel);

        Ok(Self {
            sink,
            pitch,
            velocity,
            channel,
            sounding: true,
        })
    }

    /// Middle C at full velocity on channel 0.
    pub fn middle_c(sink: &Arc<S>) -> Result<Self> {
        Self::play(sink, MIDDLE_C, MAX_VELOCITY, 0)
    }

    #[inline]
    pub fn pitch(&self) -> u8 {
        self.pitch
    }

    #[inline]
    pub fn velocity(&self) -> u8 {
        self.velocity
    }

    #[inline]
    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// Send the NOTE OFF now and report whether it reached the sink.
    ///
    /// Dropping the note afterwards sends nothing.
    pub fn release(mut self) -> Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> Result<()> {
        self.sounding = false;
        let target = self.sink.upgrade().ok_or(Error::SinkGone)?;
        target.transmit(&note_off(self.pitch, self.velocity, self.channel)?)?;
        debug!("Note off: pitch {} channel {}", self.pitch, self.channel);
        Ok(())
    }
}

impl<S: MidiSink + ?Sized> Drop for Note<S> {
    fn drop(&mut self) {
        if !self.sounding {
            return;
        }
        if let Err(e) = self.stop() {
            warn!("Dropping NOTE OFF for pitch {}: {}", self.pitch, e);
        }
    }
}
