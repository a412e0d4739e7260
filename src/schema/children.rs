//! Child slots: presence management that preserves sibling ordering.
//!
//! A slot binds a child tag (or a mutually exclusive candidate set) to the
//! ordered list of sibling tags the schema says must follow it. Insertion
//! scans the parent's children in document order and places the new
//! occupant immediately before the first present successor, or at the end
//! when none is present. That local rule is enough to keep every pair of
//! schema-ordered siblings in the right relative order without ever
//! materializing the full sequence.
use crate::error::{Result, SchemaError};
use crate::schema::registry;
use crate::xml::element::XmlElement;

fn insert_position(parent: &XmlElement, successors: &[&str]) -> usize {
    parent
        .child_position(successors)
        .unwrap_or(parent.children().len())
}

/// A zero-or-one child slot for a single tag.
pub struct ChildSlot {
    tag: &'static str,
    successors: &'static [&'static str],
}

impl ChildSlot {
    pub const fn new(tag: &'static str, successors: &'static [&'static str]) -> Self {
        Self { tag, successors }
    }

    /// The occupant element, `None` when the slot is empty.
    pub fn get<'a>(&self, parent: &'a XmlElement) -> Option<&'a XmlElement> {
        parent.child(self.tag)
    }

    /// Mutable occupant, `None` when the slot is empty.
    pub fn get_mut<'a>(&self, parent: &'a mut XmlElement) -> Option<&'a mut XmlElement> {
        parent.child_mut(self.tag)
    }

    /// The occupant, constructed and inserted in schema order when absent.
    ///
    /// Calling this on an occupied slot returns the existing occupant;
    /// it never creates a duplicate.
    pub fn get_or_add<'a>(&self, parent: &'a mut XmlElement) -> Result<&'a mut XmlElement> {
        let index = match parent.child_index(self.tag) {
            Some(index) => index,
            None => {
                let child = registry::new_element(self.tag)?;
                let index = insert_position(parent, self.successors);
                parent.insert_child(index, child);
                index
            },
        };
        Ok(&mut parent.children_mut()[index])
    }

    /// Detach and discard the occupant and its subtree; no-op when empty.
    pub fn remove(&self, parent: &mut XmlElement) {
        parent.remove_child(self.tag);
    }

    /// Replace the occupant (if any) with `new`, inserted in schema order.
    ///
    /// `new` must carry this slot's tag; anything else is a configuration
    /// error.
    pub fn replace(&self, parent: &mut XmlElement, new: XmlElement) -> Result<()> {
        if new.tag() != self.tag {
            return Err(SchemaError::ElementMismatch {
                tag: new.tag().to_string(),
                expected: self.tag.to_string(),
            });
        }
        parent.remove_child(self.tag);
        let index = insert_position(parent, self.successors);
        parent.insert_child(index, new);
        Ok(())
    }
}

/// A zero-or-one slot whose occupant may be any one of several mutually
/// exclusive candidate tags.
///
/// The successor list is the combined list of tags that follow the whole
/// group; since at most one candidate is ever present, the single-slot
/// insertion rule applies unchanged.
pub struct ChoiceSlot {
    candidates: &'static [&'static str],
    successors: &'static [&'static str],
}

impl ChoiceSlot {
    pub const fn new(
        candidates: &'static [&'static str],
        successors: &'static [&'static str],
    ) -> Self {
        Self {
            candidates,
            successors,
        }
    }

    fn candidate(&self, tag: &str) -> Result<&'static str> {
        self.candidates
            .iter()
            .find(|c| **c == tag)
            .copied()
            .ok_or_else(|| SchemaError::UnknownElement(tag.to_string()))
    }

    /// The present candidate, `None` when the whole group is empty.
    pub fn get<'a>(&self, parent: &'a XmlElement) -> Option<&'a XmlElement> {
        parent
            .child_position(self.candidates)
            .map(|i| &parent.children()[i])
    }

    /// The present candidate whatever its tag; `preferred` is only
    /// constructed when the whole group is empty.
    ///
    /// This is what keeps the group exclusive: asking for a second
    /// candidate while another occupies the slot hands back the existing
    /// occupant rather than creating a sibling.
    pub fn get_or_add_candidate<'a>(
        &self,
        parent: &'a mut XmlElement,
        preferred: &str,
    ) -> Result<&'a mut XmlElement> {
        let preferred = self.candidate(preferred)?;
        let index = match parent.child_position(self.candidates) {
            Some(index) => index,
            None => {
                let child = registry::new_element(preferred)?;
                let index = insert_position(parent, self.successors);
                parent.insert_child(index, child);
                index
            },
        };
        Ok(&mut parent.children_mut()[index])
    }

    /// Force the occupant to be `tag`, removing any other present
    /// candidate first.
    pub fn get_or_change_to<'a>(
        &self,
        parent: &'a mut XmlElement,
        tag: &str,
    ) -> Result<&'a mut XmlElement> {
        let tag = self.candidate(tag)?;
        for candidate in self.candidates {
            if *candidate != tag {
                parent.remove_child(candidate);
            }
        }
        let index = match parent.child_index(tag) {
            Some(index) => index,
            None => {
                let child = registry::new_element(tag)?;
                let index = insert_position(parent, self.successors);
                parent.insert_child(index, child);
                index
            },
        };
        Ok(&mut parent.children_mut()[index])
    }

    /// Replace whichever candidate is present with `new`, inserted in
    /// schema order.
    ///
    /// `new` must carry one of the group's candidate tags; anything else is
    /// rejected without touching the parent.
    pub fn replace(&self, parent: &mut XmlElement, new: XmlElement) -> Result<()> {
        if !self.candidates.iter().any(|c| *c == new.tag()) {
            return Err(SchemaError::ElementMismatch {
                tag: new.tag().to_string(),
                expected: self.candidates.join(" | "),
            });
        }
        for candidate in self.candidates {
            parent.remove_child(candidate);
        }
        let index = insert_position(parent, self.successors);
        parent.insert_child(index, new);
        Ok(())
    }

    /// Detach and discard whichever candidate is present; no-op when empty.
    pub fn remove(&self, parent: &mut XmlElement) {
        for candidate in self.candidates {
            parent.remove_child(candidate);
        }
    }
}
