//! Text encodings that turn a message into 8 bit code units and back.
//!
//! The codec only ever sees code units, so both sides of a hidden message need
//! to agree on the encoding. With `Utf8` one character may take several units.

use crate::error::SteganoError;
use crate::result::Result;

/// Decides how a text message maps onto the 8 bit code units that get hidden.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// One code unit per character, only characters up to U+00FF are representable.
    #[default]
    Latin1,
    /// The UTF-8 bytes of the message are the code units, any text is representable.
    Utf8,
}

impl TextEncoding {
    /// turns a text into code units, fails for characters the encoding cannot represent
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Latin1 => text
                .chars()
                .enumerate()
                .map(|(position, character)| {
                    u8::try_from(character).map_err(|_| SteganoError::UnencodableCharacter {
                        character,
                        position,
                    })
                })
                .collect(),
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        }
    }

    /// turns recovered code units back into text
    pub fn decode(&self, units: Vec<u8>) -> Result<String> {
        match self {
            TextEncoding::Latin1 => Ok(units.into_iter().map(char::from).collect()),
            TextEncoding::Utf8 => Ok(String::from_utf8(units)?),
        }
    }
}
