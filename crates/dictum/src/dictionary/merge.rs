use crate::types::{Entry, Node};

/// Fill `target` with every entry of `fallback` that it lacks.
///
/// Nodes present on both sides are merged recursively. Any other entry already
/// in `target` wins, including a leaf standing where the fallback has a node.
/// Inserted entries are clones, so `fallback` is never shared mutably.
pub fn merge(target: &mut Node, fallback: &Node) {
    for (key, value) in fallback {
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), value.clone());
            }
            Some(Entry::Node(child)) => {
                if let Entry::Node(parent) = value {
                    merge(child, parent);
                }
            }
            Some(_) => {}
        }
    }
}
