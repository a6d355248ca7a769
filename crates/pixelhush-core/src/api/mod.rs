//! Fluent builders on top of [`Media`](crate::media::Media), one per use case.
//!
//! Every builder is created by its module's `prepare()` function, collects
//! its inputs and runs with `execute()`.

pub mod hide;
pub mod inspect;
pub mod unveil;
