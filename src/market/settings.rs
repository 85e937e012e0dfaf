use super::*;

use crate::error::MarketError;
use crate::model::AssistantConfig;

impl<I: IdGen, C: Clock> Market<I, C> {
    pub fn language(&self) -> Result<String> {
        Ok(self.store.read_config()?.language)
    }

    pub fn set_language(&self, code: &str) -> Result<()> {
        let code = code.trim().to_lowercase();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(MarketError::invalid_input(format!(
                "language must be a two-letter code, got {:?}",
                code
            ))
            .into());
        }
        let mut cfg = self.store.read_config()?;
        cfg.language = code;
        self.store.write_config(&cfg)
    }

    pub fn assistant_config(&self) -> Result<Option<AssistantConfig>> {
        Ok(self.store.read_config()?.assistant)
    }

    pub fn set_assistant_config(&self, assistant: AssistantConfig) -> Result<()> {
        let mut cfg = self.store.read_config()?;
        cfg.assistant = Some(assistant);
        self.store.write_config(&cfg)
    }
}
