use std::path::Path;

use super::{read_text, write_text};
use crate::{Result, SteganoError};

/// unveil all candidate payloads, no resolution between them is happening.
/// Writes one line per span: strategy, character offset and the raw bits, tab separated.
pub fn unveil_raw(secret_text: &Path, destination_file: &Path) -> Result<()> {
    let text = read_text(secret_text)?;
    let spans = crate::api::unveil_raw::prepare()
        .from_text(&text)
        .execute()?;

    if spans.is_empty() {
        return Err(SteganoError::NoSecretData);
    }

    let dump: String = spans
        .iter()
        .map(|span| format!("{}\t{}\t{}\n", span.strategy, span.offset, span.bits()))
        .collect();

    write_text(destination_file, &dump)
}

#[cfg(test)]
mod tests {
    use std::{fs, io};

    use tempfile::TempDir;

    use super::*;
    use crate::embed_emoji;

    #[test]
    fn should_dump_all_spans() -> io::Result<()> {
        let out_dir = TempDir::new()?;
        let secret = out_dir.path().join("secret.txt");
        let dump = out_dir.path().join("spans.tsv");
        fs::write(&secret, embed_emoji("a 🚀", "H").unwrap())?;

        unveil_raw(&secret, &dump).unwrap();

        assert_eq!(fs::read_to_string(&dump)?, "Emoji Strategy\t3\t01001000\n");

        Ok(())
    }

    #[test]
    fn should_fail_without_spans() -> io::Result<()> {
        let out_dir = TempDir::new()?;
        let plain = out_dir.path().join("plain.txt");
        fs::write(&plain, "plain")?;

        let result = unveil_raw(&plain, &out_dir.path().join("spans.tsv"));
        assert!(matches!(result, Err(SteganoError::NoSecretData)));

        Ok(())
    }
}
