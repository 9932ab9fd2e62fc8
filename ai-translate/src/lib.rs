pub mod config;
pub mod error;
pub mod language;
pub mod page;
pub mod prompt;
pub mod service;
#[cfg(target_arch = "wasm32")]
pub mod wasm_proxy;
pub mod widget;

pub use config::LauncherConfig;
pub use error::{DomainType, LauncherError};
pub use language::Language;
pub use page::HostPage;
pub use service::Service;
pub use widget::{launch_url, Launcher, WidgetLayout};
