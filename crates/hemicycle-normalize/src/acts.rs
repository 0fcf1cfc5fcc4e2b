//! Legislative acts as a [`Node`] tree
//!
//! A dossier lists its acts under `actesLegislatifs.acteLegislatif`, and each
//! act can nest the same structure again to any depth.

use hemicycle_core::value::{as_seq, path, text_of};
use hemicycle_core::Node;
use serde_json::Value;

const ACT_TAG: &str = "acte";

/// Lower the act list found under `actesLegislatifs.acteLegislatif` of `owner`
pub fn acts_tree(owner: &Value) -> Vec<Node> {
    as_seq(path(owner, &["actesLegislatifs", "acteLegislatif"]))
        .into_iter()
        .filter(|act| act.is_object())
        .map(act_node)
        .collect()
}

fn act_node(act: &Value) -> Node {
    let mut node = Node::new(ACT_TAG)
        .with_field("uid", text_of(act.get("uid")))
        .with_field("code", text_of(act.get("codeActe")))
        .with_field("date", text_of(act.get("dateActe")))
        .with_field("libelle", text_of(act.get("libelleActe")));
    node.children = acts_tree(act);
    node
}
