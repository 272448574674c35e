//! Conversions to and from `midi-msg` types.

use midi_msg::MidiMsg;

use crate::error::{Error, Result};
use crate::kind::MessageKind;
use crate::message::Message;

impl Message {
    /// Decode into a `midi-msg` value. System exclusive is not supported.
    pub fn to_midi_msg(&self) -> Result<MidiMsg> {
        if self.kind() == MessageKind::SystemExclusive {
            return Err(Error::UnsupportedOperation {
                operation: "to_midi_msg",
                status: self.message_type_raw(),
            });
        }
        let (msg, _len) = MidiMsg::from_midi(self.as_bytes())?;
        Ok(msg)
    }
}

impl TryFrom<&MidiMsg> for Message {
    type Error = Error;

    fn try_from(msg: &MidiMsg) -> Result<Self> {
        Message::parse(&msg.to_midi())
    }
}
