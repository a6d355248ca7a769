//! # Pixelhush Core API
//!
//! Hides a text message in the least significant bits of the red channel of
//! an RGBA pixel buffer. The message is framed by a 32 bit length header and
//! every bit is written 3 times, so a single flipped replica per bit does not
//! harm the message.
//!
//! The codec itself works on plain pixel buffers, one byte per channel and 4
//! channels per pixel:
//! - [`encode`] / [`decode`] for code units
//! - [`capacity`] to check the message length up front
//!
//! On top of that [`Media`][media] loads and saves carrier images, and the
//! [`api`] module offers builders for whole files.
//!
//! # Usage Examples
//!
//! ## Hide data inside a pixel buffer
//!
//! ```rust
//! use pixelhush_core::{capacity, decode, encode};
//!
//! // 1000 gray RGBA pixels
//! let mut pixels = vec![128u8; 1000 * 4];
//! assert_eq!(capacity(pixels.len()), 37);
//!
//! encode(&mut pixels, b"Hi").expect("Failed to hide message");
//! assert_eq!(decode(&pixels).expect("Failed to unveil message"), b"Hi");
//! ```
//!
//! ## Hide and unveil a message with image files
//!
//! ```rust
//! use pixelhush_core::media::{Media, Persist};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let secret = temp_dir.path().join("image-with-a-message-inside.png");
//! Media::from_image(image::RgbaImage::new(64, 64))
//!     .save_as(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! pixelhush_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(&secret)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = pixelhush_core::api::unveil::prepare()
//!     .from_secret_file(&secret)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! [media]: ./media/struct.Media.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod capacity;
pub mod channel;
pub mod commands;
pub mod engine;
pub mod error;
pub mod frame;
pub mod layout;
pub mod legacy;
pub mod media;
pub mod result;
pub mod text;

pub use crate::capacity::{capacity, capacity_of};
pub use crate::engine::{decode, encode, hide_text, unveil_text};
pub use crate::error::SteganoError;
pub use crate::frame::{HEADER_LENGTH, REPETITION_FACTOR};
pub use crate::layout::{Embedding, Layout, LegacyAlphaTerminated, RepetitionFrame};
pub use crate::media::{CarrierInfo, CodecOptions, Media, Persist};
pub use crate::result::Result;
pub use crate::text::TextEncoding;
