use crate::{CodecOptions, Result, SteganoError, Strategy};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    cover: Option<String>,
    message: Option<String>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.options = self.options.with_strategy(strategy);
        self
    }

    /// The visible text the secret gets attached to
    pub fn with_cover(mut self, cover: &str) -> Self {
        self.cover = Some(cover.to_string());
        self
    }

    pub fn use_cover<S: AsRef<str>>(mut self, cover: Option<S>) -> Self {
        self.cover = cover.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Returns the cover text with the message hidden in it
    pub fn execute(self) -> Result<String> {
        self.validate()?;
        let Some(cover) = self.cover else {
            return Err(SteganoError::MissingCover);
        };
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };

        self.options.strategy.embed(&cover, &message)
    }

    fn validate(&self) -> Result<()> {
        if self.cover.as_deref().map_or(true, str::is_empty) {
            return Err(SteganoError::MissingCover);
        }
        if self.message.as_deref().map_or(true, str::is_empty) {
            return Err(SteganoError::MissingMessage);
        }

        Ok(())
    }
}
