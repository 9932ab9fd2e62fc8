use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlOptionElement, HtmlSelectElement, Node, Window,
};

use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::page::HostPage;
use crate::widget::{Launcher, SelectLayout, WidgetLayout};

impl From<LauncherError> for JsValue {
    fn from(err: LauncherError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn dom_error(context: &str, value: JsValue) -> LauncherError {
    let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    LauncherError::dom(&format!("{}: {}", context, detail))
}

#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new(window: Window) -> Result<Self, LauncherError> {
        let document = window
            .document()
            .ok_or_else(|| LauncherError::dom("Window has no document"))?;
        Ok(Self { window, document })
    }

    pub fn from_global() -> Result<Self, LauncherError> {
        let window = web_sys::window().ok_or_else(LauncherError::no_window)?;
        Self::new(window)
    }

    fn build_select(&self, layout: &SelectLayout) -> Result<HtmlSelectElement, LauncherError> {
        let select: HtmlSelectElement = self
            .document
            .create_element("select")
            .map_err(|e| dom_error("create <select>", e))?
            .dyn_into()
            .map_err(|_| LauncherError::dom("<select> is not an HtmlSelectElement"))?;
        select.set_class_name(layout.class_name);
        for option in &layout.options {
            let element = HtmlOptionElement::new_with_text_and_value(option.label, option.value)
                .map_err(|e| dom_error("create <option>", e))?;
            select
                .append_child(&element)
                .map_err(|e| dom_error("append <option>", e))?;
        }
        Ok(select)
    }

    fn build_widget(&self, layout: &WidgetLayout) -> Result<Element, LauncherError> {
        let container = self
            .document
            .create_element("div")
            .map_err(|e| dom_error("create container", e))?;
        container.set_class_name(layout.container_class);

        let language = self.build_select(&layout.language_select)?;
        let service = self.build_select(&layout.service_select)?;
        let button = self
            .document
            .create_element("button")
            .map_err(|e| dom_error("create <button>", e))?;
        button.set_class_name(layout.button_class);
        button.set_text_content(Some(&layout.button_label));

        let children: [&Node; 3] = [language.as_ref(), service.as_ref(), button.as_ref()];
        for child in children {
            container
                .append_child(child)
                .map_err(|e| dom_error("append widget control", e))?;
        }
        Ok(container)
    }
}

impl HostPage for WebPage {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_within(&self, parent: &Element, selector: &str) -> Option<Element> {
        parent.query_selector(selector).ok().flatten()
    }

    fn insert_after(&self, anchor: &Element, layout: &WidgetLayout) -> Result<Element, LauncherError> {
        let widget = self.build_widget(layout)?;
        anchor
            .after_with_node_1(&widget)
            .map_err(|e| dom_error("insert widget", e))?;
        Ok(widget)
    }

    fn selected_value(&self, widget: &Element, class_name: &str) -> Option<String> {
        self.query_within(widget, &format!(".{}", class_name))?
            .dyn_into::<HtmlSelectElement>()
            .ok()
            .map(|select| select.value())
    }

    fn inner_text(&self, element: &Element) -> String {
        match element.dyn_ref::<HtmlElement>() {
            Some(element) => element.inner_text(),
            None => element.text_content().unwrap_or_default(),
        }
    }

    fn open(&self, url: &str, target: &str) -> Result<(), LauncherError> {
        let opened = self
            .window
            .open_with_url_and_target(url, target)
            .map_err(|e| LauncherError::browser(&format!("window.open failed: {:?}", e)))?;
        if opened.is_none() {
            log::warn!("window.open returned no window, pop-up was probably blocked");
        }
        Ok(())
    }
}

fn mount_and_listen(launcher: &Launcher, page: &WebPage) -> Result<(), LauncherError> {
    let widget = match launcher.mount(page)? {
        Some(widget) => widget,
        None => return Ok(()),
    };
    let button = page
        .query_within(&widget, &format!(".{}", crate::widget::BUTTON_CLASS))
        .ok_or_else(|| LauncherError::selector_missing(crate::widget::BUTTON_CLASS))?;

    let launcher = launcher.clone();
    let page = page.clone();
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        if let Err(err) = launcher.trigger(&page, &widget) {
            log::error!("{}", err);
        }
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| dom_error("register click listener", e))?;
    // The button lives as long as the page.
    on_click.forget();
    Ok(())
}

fn mount_on_ready_event(launcher: Launcher, page: WebPage) -> Result<(), LauncherError> {
    let document = page.document.clone();
    let mut pending = Some((launcher, page));
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        // later dispatches find nothing left to mount
        if let Some((launcher, page)) = pending.take() {
            if let Err(err) = mount_and_listen(&launcher, &page) {
                log::error!("{}", err);
            }
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| dom_error("register DOMContentLoaded listener", e))?;
    on_ready.forget();
    Ok(())
}

fn mount_when_ready(launcher: Launcher, page: WebPage) -> Result<(), LauncherError> {
    if page.document.ready_state() != "loading" {
        log::debug!("Document already parsed, mounting now");
        return mount_and_listen(&launcher, &page);
    }
    mount_on_ready_event(launcher, page)
}

/// Mounts the widget once the document has been parsed.
pub fn install(config: LauncherConfig) -> Result<(), JsValue> {
    let page = WebPage::from_global()?;
    mount_when_ready(Launcher::new(config), page)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Document, Element, HtmlOptionElement, HtmlSelectElement};

    use super::{mount_and_listen, mount_on_ready_event, mount_when_ready, WebPage};
    use crate::page::HostPage;
    use crate::widget::{Launcher, BUTTON_CLASS, CONTAINER_CLASS, LANGUAGE_CLASS, SERVICE_CLASS};
    use crate::{Language, Service};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Replaces the body with `markup` and returns the page wrapper.
    fn page_with_body(markup: &str) -> WebPage {
        document().body().unwrap().set_inner_html(markup);
        WebPage::from_global().unwrap()
    }

    fn count(selector: &str) -> u32 {
        document().query_selector_all(selector).unwrap().length()
    }

    fn options(widget: &Element, class_name: &str) -> Vec<(String, String)> {
        let select: HtmlSelectElement = widget
            .query_selector(&format!(".{}", class_name))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        (0..select.length())
            .map(|i| {
                let option: HtmlOptionElement = select.item(i).unwrap().dyn_into().unwrap();
                (option.value(), option.text())
            })
            .collect()
    }

    fn assert_single_widget_after_heading() -> Element {
        assert_eq!(1, count(".ai-translate"));
        let heading = document().query_selector("article h1").unwrap().unwrap();
        let widget = heading.next_element_sibling().unwrap();
        assert_eq!(CONTAINER_CLASS, widget.class_name());
        assert_eq!(3, widget.child_element_count());
        for class_name in [LANGUAGE_CLASS, SERVICE_CLASS, BUTTON_CLASS] {
            let selector = format!(".{}", class_name);
            assert_eq!(1, widget.query_selector_all(&selector).unwrap().length());
        }
        widget
    }

    #[wasm_bindgen_test]
    fn test_widget_inserted_after_heading() {
        let page = page_with_body("<article><h1>Title</h1><p>Body</p></article>");
        mount_and_listen(&Launcher::default(), &page).unwrap();

        let widget = assert_single_widget_after_heading();
        let expected: Vec<_> = Language::ALL
            .iter()
            .map(|l| (l.name().to_owned(), l.name().to_owned()))
            .collect();
        assert_eq!(expected, options(&widget, LANGUAGE_CLASS));
        let expected: Vec<_> = Service::ALL
            .iter()
            .map(|s| (s.name().to_owned(), s.name().to_owned()))
            .collect();
        assert_eq!(expected, options(&widget, SERVICE_CLASS));

        let button = widget
            .query_selector(&format!(".{}", BUTTON_CLASS))
            .unwrap()
            .unwrap();
        assert_eq!("BUTTON", button.tag_name());
        assert_eq!(Some("Translate with AI".to_owned()), button.text_content());
    }

    #[wasm_bindgen_test]
    fn test_missing_host_inserts_nothing() {
        let page = page_with_body("<h1>Title</h1><p>Body</p>");
        mount_and_listen(&Launcher::default(), &page).unwrap();
        assert_eq!(0, count(".ai-translate"));

        let page = page_with_body("<article><p>Body</p></article>");
        mount_and_listen(&Launcher::default(), &page).unwrap();
        assert_eq!(0, count(".ai-translate"));
    }

    #[wasm_bindgen_test]
    fn test_parsed_document_mounts_once() {
        let page = page_with_body("<article><h1>Title</h1></article>");
        assert_ne!("loading", document().ready_state());
        mount_when_ready(Launcher::default(), page).unwrap();
        assert_single_widget_after_heading();

        // a late DOMContentLoaded must not insert a second widget
        dispatch_ready();
        assert_eq!(1, count(".ai-translate"));
    }

    fn dispatch_ready() {
        let event = web_sys::Event::new("DOMContentLoaded").unwrap();
        document().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_ready_event_mounts_once() {
        let page = page_with_body("<article><h1>Title</h1></article>");
        mount_on_ready_event(Launcher::default(), page).unwrap();
        assert_eq!(0, count(".ai-translate"));

        dispatch_ready();
        dispatch_ready();
        assert_single_widget_after_heading();
    }

    #[wasm_bindgen_test]
    fn test_selected_value_and_inner_text() {
        let page = page_with_body("<article><h1>Title</h1><p>Body</p></article>");
        let widget = Launcher::default().mount(&page).unwrap().unwrap();
        assert_eq!(Some("Japanese".to_owned()), page.selected_value(&widget, LANGUAGE_CLASS));

        let select: HtmlSelectElement = widget
            .query_selector(&format!(".{}", SERVICE_CLASS))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        select.set_value("Gemini");
        assert_eq!(Some("Gemini".to_owned()), page.selected_value(&widget, SERVICE_CLASS));

        let article = page.query("article").unwrap();
        assert!(page.inner_text(&article).contains("Body"));
    }
}
