use serde::Deserialize;

pub const DEFAULT_MODEL: &str = "gpt-5";
pub const DEFAULT_HOST: &str = "https://api.openai.com";

/// Process-wide completion settings, read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompletionConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_host")]
    pub host: String,
}

impl CompletionConfig {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            host: default_host(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// The API key, if one is configured. An empty key counts as none.
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self::new(None, default_model())
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
