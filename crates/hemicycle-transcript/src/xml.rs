//! XML text to [`Node`] tree
//!
//! Elements keep their local name (namespaces are dropped) and attributes
//! become fields. Text is kept as `#text` children so mixed content stays in
//! document order; whitespace-only runs between elements are dropped.

use hemicycle_core::Node;

pub fn parse(text: &str) -> Result<Node, roxmltree::Error> {
    let doc = roxmltree::Document::parse(text)?;
    Ok(lower(doc.root_element()))
}

fn lower(element: roxmltree::Node<'_, '_>) -> Node {
    let mut node = Node::new(element.tag_name().name());
    for attr in element.attributes() {
        node.fields
            .insert(attr.name().to_string(), attr.value().to_string());
    }
    for child in element.children() {
        if child.is_element() {
            node.children.push(lower(child));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                if !text.trim().is_empty() {
                    node.children.push(Node::text_node(text));
                }
            }
        }
    }
    node
}
