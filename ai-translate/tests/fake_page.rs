use std::cell::RefCell;
use std::collections::HashMap;

use ai_translate::{HostPage, LauncherError, WidgetLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Article,
    Heading,
    Widget(usize),
}

/// A document holding at most one `article`, optionally with an `h1`.
#[derive(Default)]
pub struct FakePage {
    pub has_article: bool,
    pub has_heading: bool,
    pub article_text: String,
    /// Widgets in insertion order, each with the node it was placed after.
    pub inserted: RefCell<Vec<(Node, WidgetLayout)>>,
    pub selections: RefCell<HashMap<String, String>>,
    pub opened: RefCell<Vec<(String, String)>>,
}

impl FakePage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_article(text: &str, has_heading: bool) -> Self {
        Self {
            has_article: true,
            has_heading,
            article_text: text.to_owned(),
            ..Default::default()
        }
    }

    pub fn select(&self, class_name: &str, value: &str) {
        self.selections
            .borrow_mut()
            .insert(class_name.to_owned(), value.to_owned());
    }

    pub fn count_class(&self, class_name: &str) -> usize {
        self.inserted
            .borrow()
            .iter()
            .filter(|(_, layout)| layout.container_class == class_name)
            .count()
    }
}

impl HostPage for FakePage {
    type Element = Node;

    fn query(&self, selector: &str) -> Option<Node> {
        match selector {
            "article" if self.has_article => Some(Node::Article),
            _ => None,
        }
    }

    fn query_within(&self, parent: &Node, selector: &str) -> Option<Node> {
        match (parent, selector) {
            (Node::Article, "h1") if self.has_heading => Some(Node::Heading),
            _ => None,
        }
    }

    fn insert_after(&self, anchor: &Node, layout: &WidgetLayout) -> Result<Node, LauncherError> {
        let mut inserted = self.inserted.borrow_mut();
        inserted.push((*anchor, layout.clone()));
        Ok(Node::Widget(inserted.len() - 1))
    }

    fn selected_value(&self, widget: &Node, class_name: &str) -> Option<String> {
        let index = match widget {
            Node::Widget(index) => *index,
            _ => return None,
        };
        let inserted = self.inserted.borrow();
        let (_, layout) = inserted.get(index)?;
        let select = [&layout.language_select, &layout.service_select]
            .into_iter()
            .find(|select| select.class_name == class_name)?;
        // an untouched <select> reports its first option
        self.selections
            .borrow()
            .get(class_name)
            .cloned()
            .or_else(|| select.options.first().map(|o| o.value.to_owned()))
    }

    fn inner_text(&self, element: &Node) -> String {
        match element {
            Node::Article => self.article_text.clone(),
            _ => String::new(),
        }
    }

    fn open(&self, url: &str, target: &str) -> Result<(), LauncherError> {
        self.opened
            .borrow_mut()
            .push((url.to_owned(), target.to_owned()));
        Ok(())
    }
}
