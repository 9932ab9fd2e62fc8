use crate::{error::LauncherError, widget::WidgetLayout};

/// The slice of a document the widget reads from and writes to.
///
/// Implementations take `&self` because DOM handles are shared references;
/// mutation goes through the document itself.
pub trait HostPage {
    type Element: Clone;

    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_within(&self, parent: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Builds the widget from `layout` and inserts it as the next sibling of `anchor`.
    fn insert_after(
        &self,
        anchor: &Self::Element,
        layout: &WidgetLayout,
    ) -> Result<Self::Element, LauncherError>;

    /// Current value of the `<select>` with class `class_name` inside `widget`.
    fn selected_value(&self, widget: &Self::Element, class_name: &str) -> Option<String>;

    /// Rendered visible text of `element`.
    fn inner_text(&self, element: &Self::Element) -> String;

    fn open(&self, url: &str, target: &str) -> Result<(), LauncherError>;
}
