use std::str::FromStr;

use crate::{error::LauncherError, language::Language, prompt};

/// External chat services a page can be handed over to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    ChatGpt,
    Claude,
    Gemini,
}

impl Service {
    pub const ALL: &'static [Service] = &[Service::ChatGpt, Service::Claude, Service::Gemini];

    pub fn name(&self) -> &'static str {
        match self {
            Service::ChatGpt => "ChatGPT",
            Service::Claude => "Claude",
            Service::Gemini => "Gemini",
        }
    }

    /// Endpoint the encoded prompt is appended to.
    pub fn base_url(&self) -> &'static str {
        match self {
            Service::ChatGpt => "https://chat.openai.com/?q=",
            Service::Claude => "https://claude.ai/new?q=",
            Service::Gemini => "https://gemini.google.com/app?q=",
        }
    }

    pub fn build_url(&self, text: &str, language: Language) -> String {
        let prompt = prompt::translation_prompt(language, text);
        format!("{}{}", self.base_url(), prompt::encode(&prompt))
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Service {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|service| service.name() == s)
            .ok_or_else(|| LauncherError::unknown_service(s))
    }
}

#[test]
fn test_service_order() {
    let names: Vec<_> = Service::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(vec!["ChatGPT", "Claude", "Gemini"], names);
}

#[test]
fn test_chatgpt_url() {
    let url = Service::ChatGpt.build_url("Bonjour", Language::German);
    assert_eq!(
        "https://chat.openai.com/?q=Translate%20the%20following%20to%20German%3A%0A%0ABonjour",
        url
    );
}

#[test]
fn test_unknown_service() {
    let err = "Bard".parse::<Service>().unwrap_err();
    assert_eq!(crate::error::DomainType::Selection, err.domain());
}
