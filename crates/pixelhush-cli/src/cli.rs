use clap::{Parser, Subcommand, ValueEnum};
use pixelhush_core::{CodecOptions, Layout, LegacyAlphaTerminated, RepetitionFrame, TextEncoding};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Where the message lives inside the pixels, both sides must agree on it
    #[arg(long, value_enum, global = true, default_value_t = LayoutArg::RepetitionFrame)]
    pub layout: LayoutArg,

    /// How the message text is turned into bytes
    #[arg(long, value_enum, global = true, default_value_t = EncodingArg::Latin1)]
    pub encoding: EncodingArg,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_layout(self.layout)
            .with_text_encoding(self.encoding.into())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Inspect(inspect::InspectArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutArg {
    /// 32 bit length header, every bit 3 times in the red channel
    RepetitionFrame,
    /// NUL terminated message in the alpha channel, as written by older tools
    LegacyAlpha,
}

impl From<LayoutArg> for Layout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::RepetitionFrame => RepetitionFrame.into(),
            LayoutArg::LegacyAlpha => LegacyAlphaTerminated.into(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingArg {
    /// one byte per character, up to U+00FF
    Latin1,
    Utf8,
}

impl From<EncodingArg> for TextEncoding {
    fn from(encoding: EncodingArg) -> Self {
        match encoding {
            EncodingArg::Latin1 => TextEncoding::Latin1,
            EncodingArg::Utf8 => TextEncoding::Utf8,
        }
    }
}
