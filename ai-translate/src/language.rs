use std::str::FromStr;

use crate::error::LauncherError;

/// Target languages offered by the picker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Japanese,
    Chinese,
    Korean,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::Japanese,
        Language::Chinese,
        Language::Korean,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    /// Label shown in the selector, also used as the option value.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
            Language::Korean => "Korean",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.name() == s)
            .ok_or_else(|| LauncherError::unknown_language(s))
    }
}

#[test]
fn test_language_order() {
    let names: Vec<_> = Language::ALL.iter().map(|l| l.name()).collect();
    assert_eq!(
        vec!["Japanese", "Chinese", "Korean", "Spanish", "French", "German"],
        names
    );
}

#[test]
fn test_language_from_str() {
    assert_eq!(Ok(Language::Korean), "Korean".parse());
    assert!("korean".parse::<Language>().is_err());
    assert!("".parse::<Language>().is_err());
}
