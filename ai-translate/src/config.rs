use crate::prompt::DEFAULT_MAX_CHARS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub host_selector: String,
    pub heading_selector: String,
    pub max_chars: usize,
    pub button_label: String,
    pub open_target: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            host_selector: "article".to_owned(),
            heading_selector: "h1".to_owned(),
            max_chars: DEFAULT_MAX_CHARS,
            button_label: "Translate with AI".to_owned(),
            open_target: "_blank".to_owned(),
        }
    }
}

impl LauncherConfig {
    pub fn with_host_selector(mut self, selector: &str) -> Self {
        self.host_selector = selector.to_owned();
        self
    }

    pub fn with_heading_selector(mut self, selector: &str) -> Self {
        self.heading_selector = selector.to_owned();
        self
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    pub fn with_button_label(mut self, label: &str) -> Self {
        self.button_label = label.to_owned();
        self
    }

    pub fn with_open_target(mut self, target: &str) -> Self {
        self.open_target = target.to_owned();
        self
    }
}

/// Looks up `search_key` in a `?key=value&...` string, as found in `location.search`.
pub fn parse_url_query_string<'a>(query: &'a str, search_key: &str) -> Option<&'a str> {
    let query_string = query.strip_prefix('?')?;

    for pair in query_string.split('&') {
        let mut pair = pair.split('=');
        let key = pair.next()?;
        let value = match pair.next() {
            Some(value) => value,
            None => continue,
        };

        if key == search_key {
            return Some(value);
        }
    }

    None
}

pub fn log_level_from_query(query: &str) -> log::Level {
    parse_url_query_string(query, "RUST_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Error)
}

#[test]
fn test_config_builder() {
    let config = LauncherConfig::default()
        .with_host_selector("main")
        .with_heading_selector("h2")
        .with_max_chars(100)
        .with_button_label("Translate")
        .with_open_target("_self");
    assert_eq!("main", config.host_selector);
    assert_eq!("h2", config.heading_selector);
    assert_eq!(100, config.max_chars);
    assert_eq!("Translate", config.button_label);
    assert_eq!("_self", config.open_target);
}

#[test]
fn test_parse_url_query_string() {
    assert_eq!(Some("debug"), parse_url_query_string("?a=1&RUST_LOG=debug", "RUST_LOG"));
    assert_eq!(Some("1"), parse_url_query_string("?flag&a=1", "a"));
    assert_eq!(None, parse_url_query_string("a=1", "a"));
    assert_eq!(None, parse_url_query_string("?a=1", "b"));
}

#[test]
fn test_log_level_from_query() {
    assert_eq!(log::Level::Info, log_level_from_query("?RUST_LOG=info"));
    assert_eq!(log::Level::Error, log_level_from_query("?RUST_LOG=loud"));
    assert_eq!(log::Level::Error, log_level_from_query(""));
}
