use crate::account_categories::AccountCategory;
use crate::accounts::AccountNode;
use crate::trees::Forest;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The top-level nodes of one category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTree {
    #[serde(rename = "id")]
    pub category: AccountCategory,
    pub label: String,
    pub nodes: Forest,
}

impl CategoryTree {
    pub fn new(category: AccountCategory, roots: Vec<AccountNode>) -> Self {
        CategoryTree {
            category,
            label: category.label().to_string(),
            nodes: Forest::new(roots),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }
}

/// A node found in the chart, along with the category that owns it.
#[derive(Clone, Copy, Debug)]
pub struct FoundNode<'a> {
    pub node: &'a AccountNode,
    pub category: AccountCategory,

    // Immediate parent, None for the roots of a category
    pub parent: Option<&'a AccountNode>,
}

/// A code that appears more than once in the chart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateCode {
    pub code: String,
    pub categories: Vec<AccountCategory>,
}

/// The chart of accounts.
///
/// This is static configuration, built once and never modified afterwards,
/// so it can be shared freely between voucher sessions.
///
/// Codes are expected to be unique.  When they are not, lookups return the
/// first match, looking at categories in the order of the chart and at
/// nodes in pre-order.  `duplicate_codes` reports such cases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taxonomy {
    categories: Vec<CategoryTree>,
}

impl Taxonomy {
    pub fn new(categories: Vec<CategoryTree>) -> Self {
        let t = Taxonomy { categories };
        for dup in t.duplicate_codes() {
            log::warn!(
                "Account code {} is defined more than once ({}), lookups \
                 will use the first one",
                dup.code,
                dup.categories.iter().map(|c| c.id()).join(", "),
            );
        }
        t
    }

    pub fn list_categories(&self) -> &[CategoryTree] {
        &self.categories
    }

    pub fn into_categories(self) -> Vec<CategoryTree> {
        self.categories
    }

    pub fn category(&self, category: AccountCategory) -> Option<&CategoryTree> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Iterate over all nodes of the given categories, in chart order.
    pub fn iter_nodes<'a>(
        &'a self,
        categories: &'a [AccountCategory],
    ) -> impl Iterator<Item = (AccountCategory, &'a AccountNode)> + 'a {
        self.categories
            .iter()
            .filter(move |c| categories.contains(&c.category))
            .flat_map(|c| c.nodes.iter().map(move |n| (c.category, n)))
    }

    /// Iterate over every node of the chart
    pub fn iter_all(
        &self,
    ) -> impl Iterator<Item = (AccountCategory, &AccountNode)> + '_ {
        self.categories
            .iter()
            .flat_map(|c| c.nodes.iter().map(move |n| (c.category, n)))
    }

    /// Look up a code.  An empty code is never found.
    pub fn find_node_by_code(&self, code: &str) -> Option<FoundNode<'_>> {
        self.find_all_by_code(code).into_iter().next()
    }

    /// All nodes with this code, first match first.
    pub fn find_all_by_code(&self, code: &str) -> Vec<FoundNode<'_>> {
        let mut found = Vec::new();
        if code.is_empty() {
            return found;
        }
        for cat in &self.categories {
            cat.nodes.traverse(
                |v| {
                    if v.node.has_code(code) {
                        found.push(FoundNode {
                            node: v.node,
                            category: cat.category,
                            parent: v.parent,
                        });
                    }
                },
                true,
            );
        }
        found
    }

    /// Codes defined more than once, sorted by code
    pub fn duplicate_codes(&self) -> Vec<DuplicateCode> {
        self.iter_all()
            .filter_map(|(cat, n)| n.code().map(|c| (c, cat)))
            .into_group_map()
            .into_iter()
            .filter(|(_, cats)| cats.len() > 1)
            .map(|(code, categories)| DuplicateCode {
                code: code.to_string(),
                categories,
            })
            .sorted_by(|a, b| a.code.cmp(&b.code))
            .collect()
    }

    /// A copy of the chart with only the nodes matching the predicate, and
    /// their ancestors.  Categories left empty are kept, with no nodes.
    pub fn filter<F>(&self, mut predicate: F) -> Taxonomy
    where
        F: FnMut(AccountCategory, &AccountNode) -> bool,
    {
        Taxonomy {
            categories: self
                .categories
                .iter()
                .map(|c| CategoryTree {
                    category: c.category,
                    label: c.label.clone(),
                    nodes: c.nodes.filter(|n| predicate(c.category, n)),
                })
                .collect(),
        }
    }

    /// A copy of the chart restricted to some categories
    pub fn restrict(&self, categories: &[AccountCategory]) -> Taxonomy {
        Taxonomy {
            categories: self
                .categories
                .iter()
                .filter(|c| categories.contains(&c.category))
                .cloned()
                .collect(),
        }
    }

    /// Apply `retain` (see Forest) to each category
    pub fn retain<F>(&self, mut filter: F) -> Taxonomy
    where
        F: FnMut(&AccountNode) -> bool,
    {
        Taxonomy {
            categories: self
                .categories
                .iter()
                .map(|c| CategoryTree {
                    category: c.category,
                    label: c.label.clone(),
                    nodes: c.nodes.retain(&mut filter),
                })
                .collect(),
        }
    }
}
