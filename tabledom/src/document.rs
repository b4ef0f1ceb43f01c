use crate::element::{find_element, find_element_mut, Element};

/// What the host environment supports. The original host could lack
/// tag-based element lookup entirely, in which case decoration is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub tag_lookup: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { tag_lookup: true }
    }
}

impl Capabilities {
    pub fn none() -> Self {
        Self { tag_lookup: false }
    }
}

/// The rendered page: a forest of element trees plus the host's capabilities.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub roots: Vec<Element>,
    pub capabilities: Capabilities,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: Element) -> Self {
        self.roots.push(root);
        self
    }

    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn supports_tag_lookup(&self) -> bool {
        self.capabilities.tag_lookup
    }

    /// Find an element by ID anywhere in the document.
    pub fn find(&self, id: &str) -> Option<&Element> {
        self.roots.iter().find_map(|root| find_element(root, id))
    }

    /// Find an element by ID anywhere in the document, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.roots
            .iter_mut()
            .find_map(|root| find_element_mut(root, id))
    }
}
