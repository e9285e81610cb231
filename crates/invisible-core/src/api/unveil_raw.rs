use crate::{scan, Result, SteganoError, Span};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_text: Option<String>,
}

impl UnveilRawApi {
    /// This is the text that contains the payloads to be unveiled
    pub fn from_text(mut self, secret_text: &str) -> Self {
        self.secret_text = Some(secret_text.to_string());
        self
    }

    /// Returns every candidate span in text order, without deciding which one is the secret.
    pub fn execute(self) -> Result<Vec<Span>> {
        let Some(secret_text) = self.secret_text else {
            return Err(SteganoError::MissingSecretText);
        };

        Ok(scan(&secret_text))
    }
}
