//! Generic tagged tree and depth-first searches over it
//!
//! Nested legislative acts (JSON) and transcript elements (XML) are both
//! lowered into [`Node`] so the order-sensitive searches are written once.

use std::collections::BTreeMap;

/// Tag used for text children of mixed-content elements
pub const TEXT_TAG: &str = "#text";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub tag: String,
    pub fields: BTreeMap<String, String>,
    /// Only set on [`TEXT_TAG`] nodes
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn text_node(text: impl Into<String>) -> Self {
        Self {
            tag: TEXT_TAG.to_string(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    /// Field value, `None` when absent or blank
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// First direct child with this tag
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// First node with this tag in depth-first order, self included
    pub fn find(&self, tag: &str) -> Option<&Node> {
        depth_first(std::slice::from_ref(self)).find(|n| n.tag == tag)
    }

    /// Follow a chain of direct-child tags
    pub fn descend(&self, tags: &[&str]) -> Option<&Node> {
        tags.iter().try_fold(self, |node, tag| node.child(tag))
    }

    /// All descendants (self included) with this tag, in document order
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        depth_first(std::slice::from_ref(self)).filter(move |n| n.tag == tag)
    }

    /// Concatenated text of every text node below, in document order
    pub fn text_content(&self) -> String {
        depth_first(std::slice::from_ref(self))
            .filter(|n| n.is_text())
            .map(|n| n.text.as_str())
            .collect()
    }
}

/// Pre-order depth-first iterator; siblings are visited in source order
pub struct DepthFirst<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

pub fn depth_first(roots: &[Node]) -> DepthFirst<'_> {
    DepthFirst {
        stack: roots.iter().rev().collect(),
    }
}

/// First non-blank value picked during a depth-first walk
pub fn first_match<'a, F>(roots: &'a [Node], pick: F) -> Option<&'a str>
where
    F: FnMut(&'a Node) -> Option<&'a str>,
{
    depth_first(roots)
        .filter_map(pick)
        .find(|v| !v.trim().is_empty())
}

/// Last non-blank value picked during a depth-first walk
///
/// Depends on sibling order being stable: with parallel tracks the "last"
/// value is whatever the source lists last.
pub fn last_match<'a, F>(roots: &'a [Node], pick: F) -> Option<&'a str>
where
    F: FnMut(&'a Node) -> Option<&'a str>,
{
    depth_first(roots)
        .filter_map(pick)
        .filter(|v| !v.trim().is_empty())
        .last()
}
