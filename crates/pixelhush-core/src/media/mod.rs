pub mod codec_options;
pub mod inspect;
mod types;

use std::path::Path;

pub use codec_options::CodecOptions;
pub use inspect::{inspect, CarrierInfo};
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
