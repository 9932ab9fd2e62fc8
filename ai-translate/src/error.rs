#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainType {
    Dom,
    Selection,
    Browser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherError {
    reason: String,
    recovery_suggestion: String,
    code: i32,
    domain: DomainType,
}

impl std::fmt::Display for LauncherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let recovery_hint = if self.recovery_suggestion.is_empty() {
            "".to_owned()
        } else {
            format!("(Try \"{}\" to recover)", self.recovery_suggestion)
        };
        write!(
            f,
            "[{:?} - {}]{}{}",
            self.domain, self.code, self.reason, recovery_hint
        )
    }
}

impl std::error::Error for LauncherError {}

impl LauncherError {
    pub fn new(reason: &str, recovery_suggestion: &str, domain: DomainType) -> Self {
        Self {
            reason: reason.to_owned(),
            recovery_suggestion: recovery_suggestion.to_owned(),
            code: 0,
            domain,
        }
    }

    pub fn domain(&self) -> DomainType {
        self.domain
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn unknown_language(value: &str) -> Self {
        Self {
            reason: format!("Unknown target language \"{}\"", value),
            recovery_suggestion: "Pick a language from the list".to_owned(),
            code: 1,
            domain: DomainType::Selection,
        }
    }

    pub fn unknown_service(value: &str) -> Self {
        Self {
            reason: format!("Unknown translation service \"{}\"", value),
            recovery_suggestion: "Pick a service from the list".to_owned(),
            code: 2,
            domain: DomainType::Selection,
        }
    }

    pub fn selector_missing(class_name: &str) -> Self {
        Self {
            reason: format!("Widget control .{} not found", class_name),
            recovery_suggestion: "Reload the page".to_owned(),
            code: 3,
            domain: DomainType::Dom,
        }
    }

    pub fn dom(reason: &str) -> Self {
        Self {
            reason: reason.to_owned(),
            recovery_suggestion: "".to_owned(),
            code: 4,
            domain: DomainType::Dom,
        }
    }

    pub fn no_window() -> Self {
        Self {
            reason: "No browsing context available".to_owned(),
            recovery_suggestion: "".to_owned(),
            code: 5,
            domain: DomainType::Browser,
        }
    }

    pub fn browser(reason: &str) -> Self {
        Self {
            reason: reason.to_owned(),
            recovery_suggestion: "".to_owned(),
            code: 6,
            domain: DomainType::Browser,
        }
    }
}

#[test]
fn test_display_with_recovery_hint() {
    let err = LauncherError::unknown_service("Bard");
    assert_eq!(
        "[Selection - 2]Unknown translation service \"Bard\"(Try \"Pick a service from the list\" to recover)",
        err.to_string()
    );
}

#[test]
fn test_display_without_recovery_hint() {
    let err = LauncherError::new("boom", "", DomainType::Browser);
    assert_eq!("[Browser - 0]boom", err.to_string());
}
