use std::path::Path;

use log::info;

use super::{read_text, write_text};
use crate::{CodecOptions, Result};

/// Hides the message in the text of the `cover` file and writes the result to `write_to_file`.
/// Without a cover file the sample cover of the chosen strategy is used.
pub fn hide(
    cover: Option<&Path>,
    write_to_file: &Path,
    message: Option<String>,
    options: CodecOptions,
) -> Result<()> {
    let cover = match cover {
        Some(file) => read_text(file)?,
        None => options.strategy.sample_cover().to_string(),
    };

    let stego = crate::api::hide::prepare()
        .with_options(options)
        .with_cover(&cover)
        .use_message(message)
        .execute()?;

    info!("{} hid the message in {:?}", options.strategy, write_to_file);
    write_text(write_to_file, &stego)
}
