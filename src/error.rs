//! Centralized error type for the chime umbrella crate.
//!
//! Wraps both subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("MIDI: {0}")]
    Midi(#[from] chime_midi::Error),

    #[error("Output: {0}")]
    Output(#[from] chime_midi_io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use chime_midi_io::MidiSink;

    fn parse_then_send() -> Result<()> {
        let msg = chime_midi::Message::parse(&[0x90, 0x3C, 0x7F])?;
        let (backend, _log) = chime_midi_io::RecordingBackend::with_log();
        let output = chime_midi_io::Output::from_backend(backend);
        output.transmit(&msg)?;
        Ok(())
    }

    #[test]
    fn test_subsystem_errors_convert() {
        let err = Error::from(chime_midi::Message::new(0x12).unwrap_err());
        assert!(matches!(
            err,
            Error::Midi(chime_midi::Error::InvalidStatusByte(0x12))
        ));

        assert!(matches!(
            parse_then_send(),
            Err(Error::Output(chime_midi_io::Error::NotConnected))
        ));
    }

    #[test]
    fn test_display_prefixes() {
        let err = Error::from(chime_midi_io::Error::NotConnected);
        assert!(err.to_string().starts_with("Output: "));

        let err = Error::from(chime_midi::Error::EmptyMessage);
        assert!(err.to_string().starts_with("MIDI: "));
    }
}
