//! Serde support for [`Message`].
//!
//! A message serializes as its raw bytes. Deserializing goes back through
//! [`Message::parse`], so byte sequences that are not exactly one valid
//! message are rejected, including ones with trailing bytes.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::kind::{status, MessageKind};
use crate::message::Message;

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_bytes())
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut bytes = Vec::<u8>::deserialize(deserializer)?;

        // Exclusive records are stored without their terminator.
        if bytes.first() == Some(&MessageKind::SystemExclusive.status_mask()) {
            bytes.push(status::END_OF_SYSTEM_EXCLUSIVE);
        }

        let message = Message::parse(&bytes).map_err(D::Error::custom)?;

        let consumed = match message.kind() {
            MessageKind::SystemExclusive => message.size() + 1,
            _ => message.size(),
        };
        if consumed != bytes.len() {
            return Err(D::Error::custom(format!(
                "{} trailing bytes after {} message",
                bytes.len() - consumed,
                message.kind()
            )));
        }
        Ok(message)
    }
}
