use std::path::Path;

use crate::media::{CarrierInfo, CodecOptions};
use crate::SteganoError;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    message: Option<String>,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(media)
        .with_output(write_to_file)
        .use_message(message)
        .execute()
}

/// unveils the hidden message, if `output_file` is given it is written there as well
pub fn unveil(
    secret_media: &Path,
    output_file: Option<&Path>,
    options: CodecOptions,
) -> Result<String, SteganoError> {
    let api = crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media);

    match output_file {
        Some(output_file) => api.into_output_file(output_file).execute(),
        None => api.execute(),
    }
}

pub fn inspect(media: &Path) -> Result<CarrierInfo, SteganoError> {
    crate::api::inspect::prepare().with_image(media).execute()
}
