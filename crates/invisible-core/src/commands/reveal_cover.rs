use std::path::Path;

use super::{read_text, write_text};
use crate::{visible_text, Result};

/// Writes the text of `secret_text` with all hidden payloads removed.
pub fn reveal_cover(secret_text: &Path, destination_file: &Path) -> Result<()> {
    let text = read_text(secret_text)?;

    write_text(destination_file, &visible_text(&text))
}
