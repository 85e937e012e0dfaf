use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardConfig {
    pub version: u32,

    /// Two-letter interface language code.
    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant: Option<AssistantConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            language: default_language(),
            assistant: None,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Connection settings for the external chat-completion service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub base_url: String,
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deepseek.com/v1".to_string(),
            model: "deepseek-chat".to_string(),
            api_key: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}
