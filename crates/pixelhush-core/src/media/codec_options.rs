use crate::layout::{Embedding, Layout};
use crate::result::Result;
use crate::text::TextEncoding;

/// Codec configuration for hiding and unveiling text messages
///
/// Both sides need the same options, a message hidden with one layout or text
/// encoding cannot be unveiled with another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Where the message lives inside the pixels.
    /// The default is the length header with 3 fold repetition in the red channel.
    pub layout: Layout,

    /// How the text turns into 8 bit code units.
    /// The default `Latin1` rejects characters beyond U+00FF.
    pub text_encoding: TextEncoding,
}

impl CodecOptions {
    pub fn with_layout<L: Into<Layout>>(mut self, layout: L) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = text_encoding;
        self
    }

    /// maximum number of code units a buffer of the given byte length can carry
    pub fn capacity(&self, buffer_byte_length: usize) -> usize {
        self.layout.capacity(buffer_byte_length)
    }

    pub fn hide_text(&self, pixels: &mut [u8], text: &str) -> Result<()> {
        let units = self.text_encoding.encode(text)?;
        self.layout.embed(pixels, &units)
    }

    pub fn unveil_text(&self, pixels: &[u8]) -> Result<String> {
        self.text_encoding.decode(self.layout.extract(pixels)?)
    }
}
