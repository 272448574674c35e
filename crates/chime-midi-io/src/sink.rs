//! The capability every MIDI output exposes to the rest of chime.

use chime_midi::Message;

use crate::error::Result;

/// A destination for MIDI messages.
///
/// Implementations serialize their operations internally, so a sink can be
/// shared behind an `Arc` and driven from several threads. Each transmit is
/// delivered as one non-interleaved unit.
pub trait MidiSink: Send + Sync {
    /// Fails with `AlreadyConnected` when a connection is live.
    fn connect(&self) -> Result<()>;

    /// No-op when already disconnected.
    fn disconnect(&self);

    fn is_connected(&self) -> bool;

    /// Send one message.
    ///
    /// Only 1-3 byte short messages are transmitted; anything else fails
    /// with `UnsupportedMessageLength` instead of being truncated.
    fn transmit(&self, message: &Message) -> Result<()>;

    fn is_physical_device(&self) -> bool;

    fn manufacturer_id(&self) -> u16;

    fn product_id(&self) -> u16;

    fn product_name(&self) -> String;
}
