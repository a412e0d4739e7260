//! The element node all schema-typed views are built on.

/// A node in an ordered XML element tree.
///
/// Holds a (prefix-qualified) tag name, an ordered attribute list, optional
/// text content, and an ordered child list. Children of a schema-typed
/// element must appear in the relative order fixed by that element type's
/// tag sequence; the slot layer in [`crate::schema`] maintains that
/// invariant, this type only supplies the structural primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Tag name, including any namespace prefix (e.g. `a:off`).
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Raw string value of an attribute, `None` if absent.
    pub fn attr_raw(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Write an attribute, replacing any existing value.
    pub fn set_attr_raw(&mut self, name: &str, value: impl Into<String>) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.into(),
            None => self.attrs.push((name.to_string(), value.into())),
        }
    }

    /// Remove an attribute if present.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    /// Iterate over `(name, value)` attribute pairs in document order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Text content directly inside this element.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append to the element's text content.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Child elements in document order.
    #[inline]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Mutable view of the child elements.
    #[inline]
    pub fn children_mut(&mut self) -> &mut [XmlElement] {
        &mut self.children
    }

    /// First child element regardless of tag, `None` if childless.
    pub fn first_child(&self) -> Option<&XmlElement> {
        self.children.first()
    }

    /// Mutable first child element.
    pub fn first_child_mut(&mut self) -> Option<&mut XmlElement> {
        self.children.first_mut()
    }

    /// First direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Mutable first direct child with the given tag.
    pub fn child_mut(&mut self, tag: &str) -> Option<&mut XmlElement> {
        self.children.iter_mut().find(|c| c.tag == tag)
    }

    /// Index of the first direct child with the given tag.
    pub fn child_index(&self, tag: &str) -> Option<usize> {
        self.children.iter().position(|c| c.tag == tag)
    }

    /// Index of the first direct child whose tag is in `tags`.
    ///
    /// This is the primitive behind the slot insertion-ordering rule: a new
    /// occupant is inserted immediately before the first present successor.
    pub fn child_position(&self, tags: &[&str]) -> Option<usize> {
        self.children
            .iter()
            .position(|c| tags.contains(&c.tag.as_str()))
    }

    /// Walk a fixed path of tags, one exactly-one-level hop each.
    ///
    /// Returns `None` as soon as any hop is absent.
    pub fn child_path(&self, path: &[&str]) -> Option<&XmlElement> {
        let mut current = self;
        for tag in path {
            current = current.child(tag)?;
        }
        Some(current)
    }

    /// Append a child at the end of the child list.
    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Insert a child at the given position.
    pub fn insert_child(&mut self, index: usize, child: XmlElement) {
        self.children.insert(index, child);
    }

    /// Detach and return the first direct child with the given tag.
    pub fn remove_child(&mut self, tag: &str) -> Option<XmlElement> {
        let index = self.child_index(tag)?;
        Some(self.children.remove(index))
    }
}
