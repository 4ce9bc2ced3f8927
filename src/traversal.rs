use crate::node::Link;

/// The order in which [`Tree::traverse`](crate::Tree::traverse) visits keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, then the node, then the right subtree. Yields keys in
    /// ascending order.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
}

impl Traversal {
    /// Every traversal order.
    pub const ALL: [Traversal; 3] = [Self::InOrder, Self::PreOrder, Self::PostOrder];

    pub(crate) fn collect<'a, K>(self, root: &'a Link<K>, len: usize) -> Vec<&'a K> {
        let mut out = Vec::with_capacity(len);
        match self {
            Self::InOrder => in_order(root, &mut out),
            Self::PreOrder => pre_order(root, &mut out),
            Self::PostOrder => post_order(root, &mut out),
        }
        out
    }
}

fn in_order<'a, K>(link: &'a Link<K>, out: &mut Vec<&'a K>) {
    if let Some(node) = link {
        in_order(&node.left, out);
        out.push(&node.key);
        in_order(&node.right, out);
    }
}

fn pre_order<'a, K>(link: &'a Link<K>, out: &mut Vec<&'a K>) {
    if let Some(node) = link {
        out.push(&node.key);
        pre_order(&node.left, out);
        pre_order(&node.right, out);
    }
}

fn post_order<'a, K>(link: &'a Link<K>, out: &mut Vec<&'a K>) {
    if let Some(node) = link {
        post_order(&node.left, out);
        post_order(&node.right, out);
        out.push(&node.key);
    }
}
