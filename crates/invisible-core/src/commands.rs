mod hide;
mod reveal_cover;
mod unveil;
mod unveil_raw;

pub use hide::hide;
pub use reveal_cover::reveal_cover;
pub use unveil::unveil;
pub use unveil_raw::unveil_raw;

use std::fs;
use std::path::Path;

use crate::{Result, SteganoError};

fn read_text(file: &Path) -> Result<String> {
    fs::read_to_string(file).map_err(|source| SteganoError::ReadError { source })
}

fn write_text(file: &Path, content: &str) -> Result<()> {
    fs::write(file, content).map_err(|source| SteganoError::WriteError { source })
}
