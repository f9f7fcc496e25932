use crate::accounts::AccountNode;
use serde::{Deserialize, Serialize};

/// An ordered list of root nodes, each with its own subtree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest(Vec<AccountNode>);

/// What a traversal sees for each node
#[derive(Clone, Copy)]
pub struct Visit<'a> {
    pub node: &'a AccountNode,

    // The immediate parent, None for roots
    pub parent: Option<&'a AccountNode>,

    // The depth of the node in the tree, starting at 0 for root nodes
    pub depth: usize,
}

impl Forest {
    pub fn new(roots: Vec<AccountNode>) -> Self {
        Self(roots)
    }

    pub fn roots(&self) -> &[AccountNode] {
        &self.0
    }

    pub fn into_roots(self) -> Vec<AccountNode> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all nodes, parents before their children, each node
    /// exactly once.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![self.0.iter()],
        }
    }

    /// Number of nodes in the whole forest
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The first node, in pre-order, that matches the predicate
    pub fn find<F>(&self, mut predicate: F) -> Option<&AccountNode>
    where
        F: FnMut(&AccountNode) -> bool,
    {
        self.iter().find(|n| predicate(n))
    }

    /// Recursively traverse all nodes.
    ///
    /// If parent_first is true, then process is first called on the parent
    /// node, then on all the children.  Otherwise the order is reversed.
    pub fn traverse<'a, F>(&'a self, mut process: F, parent_first: bool)
    where
        F: FnMut(Visit<'a>),
    {
        traverse_recursive(&self.0, None, 0, &mut process, parent_first);
    }

    /// Return a copy of the forest with only the nodes accepted by the
    /// filter.
    ///
    /// Children are filtered first, then the node itself, so that the filter
    /// can find out whether any children remain.  A rejected node is removed
    /// along with its whole subtree.
    pub fn retain<F>(&self, mut filter: F) -> Forest
    where
        F: FnMut(&AccountNode) -> bool,
    {
        Forest(retain_recursive(&self.0, &mut filter))
    }

    /// Keep the nodes matching the predicate, as well as their ancestors so
    /// that the shape of the tree is preserved.
    pub fn filter<F>(&self, mut predicate: F) -> Forest
    where
        F: FnMut(&AccountNode) -> bool,
    {
        self.retain(|n| n.has_children() || predicate(n))
    }

    /// Keep only the nodes matching the predicate.  Non-matching nodes are
    /// dropped, and their matching descendants move up to the closest
    /// matching ancestor, or become roots.
    pub fn select<F>(&self, mut predicate: F) -> Forest
    where
        F: FnMut(&AccountNode) -> bool,
    {
        let mut roots = Vec::new();
        select_recursive(&self.0, &mut predicate, &mut roots);
        Forest(roots)
    }
}

fn select_recursive<F>(
    nodes: &[AccountNode],
    predicate: &mut F,
    into: &mut Vec<AccountNode>,
) where
    F: FnMut(&AccountNode) -> bool,
{
    for node in nodes {
        if predicate(node) {
            let mut children = Vec::new();
            select_recursive(&node.children, predicate, &mut children);
            into.push(AccountNode {
                code: node.code.clone(),
                primary_label: node.primary_label.clone(),
                secondary_label: node.secondary_label.clone(),
                meta: node.meta.clone(),
                children,
            });
        } else {
            select_recursive(&node.children, predicate, into);
        }
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a AccountNode;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator, parents first
pub struct PreOrder<'a> {
    stack: Vec<std::slice::Iter<'a, AccountNode>>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a AccountNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) => {
                    if node.has_children() {
                        self.stack.push(node.children.iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

fn traverse_recursive<'a, F>(
    nodes: &'a [AccountNode],
    parent: Option<&'a AccountNode>,
    depth: usize,
    process: &mut F,
    parent_first: bool,
) where
    F: FnMut(Visit<'a>),
{
    for node in nodes {
        let visit = Visit {
            node,
            parent,
            depth,
        };
        if parent_first {
            process(visit);
        }
        traverse_recursive(
            &node.children,
            Some(node),
            depth + 1,
            process,
            parent_first,
        );
        if !parent_first {
            process(visit);
        }
    }
}

fn retain_recursive<F>(nodes: &[AccountNode], filter: &mut F) -> Vec<AccountNode>
where
    F: FnMut(&AccountNode) -> bool,
{
    let mut result = Vec::new();
    for node in nodes {
        let pruned = AccountNode {
            code: node.code.clone(),
            primary_label: node.primary_label.clone(),
            secondary_label: node.secondary_label.clone(),
            meta: node.meta.clone(),
            children: retain_recursive(&node.children, filter),
        };
        if filter(&pruned) {
            result.push(pruned);
        }
    }
    result
}
