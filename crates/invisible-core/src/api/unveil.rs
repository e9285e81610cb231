use crate::{extract_robust, Result, SteganoError, Unveiled};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_text: Option<String>,
}

impl UnveilApi {
    /// This is the text that contains the secret to be unveiled
    pub fn from_text(mut self, secret_text: &str) -> Self {
        self.secret_text = Some(secret_text.to_string());
        self
    }

    /// Execute the unveil process
    pub fn execute(self) -> Result<Unveiled> {
        let Some(secret_text) = self.secret_text.filter(|t| !t.is_empty()) else {
            return Err(SteganoError::MissingSecretText);
        };

        extract_robust(&secret_text)
    }
}
