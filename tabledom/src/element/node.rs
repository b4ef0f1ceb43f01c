use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::event::EventResult;
use crate::types::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Structural role of an element. Tag-based queries match on this,
/// the way the original host matched elements by tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Box,
    Table,
    Row,
    HeaderCell,
    Cell,
    Link,
    Text,
}

/// Handler invoked when the pointer enters or leaves an element.
/// Returning [`EventResult::Consumed`] suppresses default handling.
pub type HoverHandler = Rc<dyn Fn(&mut Element) -> EventResult>;

#[derive(Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Attributes
    /// Tooltip text shown by the host on hover.
    pub title: Option<String>,
    /// Visual state marker, empty when no state applies.
    pub class_name: String,

    // Visual
    pub style: Style,

    // Interaction
    pub on_hover_enter: Option<HoverHandler>,
    pub on_hover_leave: Option<HoverHandler>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Box,
            content: Content::None,
            title: None,
            class_name: String::new(),
            style: Style::default(),
            on_hover_enter: None,
            on_hover_leave: None,
        }
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("content", &self.content)
            .field("title", &self.title)
            .field("class_name", &self.class_name)
            .field("style", &self.style)
            .field("on_hover_enter", &self.on_hover_enter.as_ref().map(|_| "..."))
            .field("on_hover_leave", &self.on_hover_leave.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: Tag::Text,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn table() -> Self {
        Self {
            id: generate_id("table"),
            tag: Tag::Table,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            tag: Tag::Row,
            ..Default::default()
        }
    }

    pub fn header_cell() -> Self {
        Self {
            id: generate_id("header"),
            tag: Tag::HeaderCell,
            ..Default::default()
        }
    }

    pub fn cell() -> Self {
        Self {
            id: generate_id("cell"),
            tag: Tag::Cell,
            ..Default::default()
        }
    }

    /// Create a sort link with a visible text label.
    pub fn link(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("link"),
            tag: Tag::Link,
            content: Content::Text(label.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn on_hover_enter(mut self, handler: impl Fn(&mut Element) -> EventResult + 'static) -> Self {
        self.on_hover_enter = Some(Rc::new(handler));
        self
    }

    pub fn on_hover_leave(mut self, handler: impl Fn(&mut Element) -> EventResult + 'static) -> Self {
        self.on_hover_leave = Some(Rc::new(handler));
        self
    }

    /// Text data of this element's first text-bearing child: either the
    /// element's own text content, or the text of its first child when that
    /// child is a text node. Returns `None` when the first child is anything
    /// else (a malformed label).
    pub fn label_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Children(children) => {
                let first = children.first()?;
                if first.tag != Tag::Text {
                    return None;
                }
                match &first.content {
                    Content::Text(text) => Some(text),
                    _ => None,
                }
            }
            Content::None => None,
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
