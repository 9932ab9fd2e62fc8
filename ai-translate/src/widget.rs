use crate::{
    config::LauncherConfig, error::LauncherError, language::Language, page::HostPage, prompt,
    service::Service,
};

pub const CONTAINER_CLASS: &str = "ai-translate";
pub const LANGUAGE_CLASS: &str = "ai-translate-lang";
pub const SERVICE_CLASS: &str = "ai-translate-service";
pub const BUTTON_CLASS: &str = "ai-translate-btn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectLayout {
    pub class_name: &'static str,
    pub options: Vec<SelectOption>,
}

/// What gets inserted under the heading: two selectors and a button inside one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetLayout {
    pub container_class: &'static str,
    pub language_select: SelectLayout,
    pub service_select: SelectLayout,
    pub button_class: &'static str,
    pub button_label: String,
}

impl WidgetLayout {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            container_class: CONTAINER_CLASS,
            language_select: SelectLayout {
                class_name: LANGUAGE_CLASS,
                options: Language::ALL
                    .iter()
                    .map(|lang| SelectOption {
                        value: lang.name(),
                        label: lang.name(),
                    })
                    .collect(),
            },
            service_select: SelectLayout {
                class_name: SERVICE_CLASS,
                options: Service::ALL
                    .iter()
                    .map(|service| SelectOption {
                        value: service.name(),
                        label: service.name(),
                    })
                    .collect(),
            },
            button_class: BUTTON_CLASS,
            button_label: config.button_label.clone(),
        }
    }
}

/// Builds the destination URL from raw selector values.
///
/// A missing host container contributes an empty text.
pub fn launch_url(
    lang: &str,
    service: &str,
    article_text: Option<&str>,
    max_chars: usize,
) -> Result<String, LauncherError> {
    let lang: Language = lang.parse()?;
    let service: Service = service.parse()?;
    let text = prompt::truncate_chars(article_text.unwrap_or(""), max_chars);
    Ok(service.build_url(text, lang))
}

#[derive(Debug, Clone, Default)]
pub struct Launcher {
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    pub fn layout(&self) -> WidgetLayout {
        WidgetLayout::new(&self.config)
    }

    /// Inserts the widget right after the host's heading.
    ///
    /// Returns `Ok(None)` without touching the page when the host container
    /// or its heading is absent.
    pub fn mount<P: HostPage>(&self, page: &P) -> Result<Option<P::Element>, LauncherError> {
        let host = match page.query(&self.config.host_selector) {
            Some(host) => host,
            None => {
                log::debug!("No <{}> on page, skipping", self.config.host_selector);
                return Ok(None);
            }
        };
        let heading = match page.query_within(&host, &self.config.heading_selector) {
            Some(heading) => heading,
            None => {
                log::debug!(
                    "No <{}> inside <{}>, skipping",
                    self.config.heading_selector,
                    self.config.host_selector
                );
                return Ok(None);
            }
        };
        let widget = page.insert_after(&heading, &self.layout())?;
        log::info!("Translate widget inserted");
        Ok(Some(widget))
    }

    /// Reads the current selection and opens the chosen service. Returns the opened URL.
    pub fn trigger<P: HostPage>(
        &self,
        page: &P,
        widget: &P::Element,
    ) -> Result<String, LauncherError> {
        let lang = page
            .selected_value(widget, LANGUAGE_CLASS)
            .ok_or_else(|| LauncherError::selector_missing(LANGUAGE_CLASS))?;
        let service = page
            .selected_value(widget, SERVICE_CLASS)
            .ok_or_else(|| LauncherError::selector_missing(SERVICE_CLASS))?;
        let text = page
            .query(&self.config.host_selector)
            .map(|host| page.inner_text(&host));
        let url = launch_url(&lang, &service, text.as_deref(), self.config.max_chars)?;
        log::info!("Opening {} for {} ({} bytes)", service, lang, url.len());
        page.open(&url, &self.config.open_target)?;
        Ok(url)
    }
}

#[test]
fn test_layout_options() {
    let layout = WidgetLayout::new(&LauncherConfig::default());
    assert_eq!(6, layout.language_select.options.len());
    assert_eq!(
        SelectOption {
            value: "Japanese",
            label: "Japanese"
        },
        layout.language_select.options[0]
    );
    let services: Vec<_> = layout.service_select.options.iter().map(|o| o.value).collect();
    assert_eq!(vec!["ChatGPT", "Claude", "Gemini"], services);
    assert_eq!("Translate with AI", layout.button_label);
}

#[test]
fn test_launch_url_without_host() {
    let url = launch_url("Korean", "Gemini", None, 8000).unwrap();
    assert_eq!(
        "https://gemini.google.com/app?q=Translate%20the%20following%20to%20Korean%3A%0A%0A",
        url
    );
}

#[test]
fn test_launch_url_unknown_language() {
    let err = launch_url("Klingon", "Claude", Some("text"), 8000).unwrap_err();
    assert_eq!(1, err.code());
}

#[test]
fn test_layout_button_label_from_config() {
    let layout = WidgetLayout::new(&LauncherConfig::default().with_button_label("AI"));
    assert_eq!("AI", layout.button_label);
    assert_eq!(BUTTON_CLASS, layout.button_class);
}
