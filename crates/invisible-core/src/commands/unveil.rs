use std::path::Path;

use super::read_text;
use crate::{Result, Unveiled};

pub fn unveil(secret_text: &Path) -> Result<Unveiled> {
    let text = read_text(secret_text)?;

    crate::api::unveil::prepare().from_text(&text).execute()
}

#[cfg(test)]
mod tests {
    use std::{fs, io};

    use tempfile::TempDir;

    use super::*;
    use crate::{embed_text, SteganoError, Strategy};

    #[test]
    fn should_unveil_from_a_file() -> io::Result<()> {
        let out_dir = TempDir::new()?;
        let secret = out_dir.path().join("secret.txt");
        fs::write(&secret, embed_text("The quick brown fox", "Hi").unwrap())?;

        let unveiled = unveil(&secret).unwrap();
        assert_eq!(unveiled.strategy, Strategy::TEXT);
        assert_eq!(unveiled.secret, "Hi");

        Ok(())
    }

    #[test]
    fn should_report_no_secret_data() -> io::Result<()> {
        let out_dir = TempDir::new()?;
        let plain = out_dir.path().join("plain.txt");
        fs::write(&plain, "nothing to see")?;

        assert!(matches!(unveil(&plain), Err(SteganoError::NoSecretData)));

        Ok(())
    }
}
