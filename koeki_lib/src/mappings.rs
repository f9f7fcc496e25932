use crate::account_categories::AccountCategory;
use crate::accounts::AccountNode;
use crate::taxonomy::Taxonomy;
use std::collections::HashMap;

const PROFIT_LOSS: [AccountCategory; 2] =
    [AccountCategory::Revenue, AccountCategory::Expense];
const CASH_BASIS: [AccountCategory; 2] =
    [AccountCategory::CashIncome, AccountCategory::CashExpense];

/// The statements for which we need to know the parent of an account
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatementKind {
    // Activity statement: revenue and expenses
    ProfitLoss,

    // Net assets section of the balance sheet
    NetAssets,
}

impl StatementKind {
    pub fn categories(self) -> &'static [AccountCategory] {
        match self {
            StatementKind::ProfitLoss => &PROFIT_LOSS,
            StatementKind::NetAssets => &[AccountCategory::NetAssets],
        }
    }
}

/// Maps a cash-basis code to the profit/loss accounts it expands to.
#[derive(Clone, Debug, Default)]
pub struct CashToAccrualMap(HashMap<String, Vec<AccountNode>>);

impl CashToAccrualMap {
    pub fn build(taxonomy: &Taxonomy) -> Self {
        let pl_nodes = index_by_code(taxonomy, &PROFIT_LOSS);
        let mut map = HashMap::new();

        for (_, node) in taxonomy.iter_nodes(&CASH_BASIS) {
            let Some(code) = node.code() else { continue };
            let resolved: Vec<AccountNode> = node
                .meta
                .expands_to_codes
                .iter()
                .filter_map(|target| {
                    let pl = pl_nodes.get(target.as_str());
                    if pl.is_none() {
                        log::warn!(
                            "Cash-basis account {code} expands to unknown \
                             profit/loss account {target}"
                        );
                    }
                    pl.map(|n| (*n).clone())
                })
                .collect();
            if !resolved.is_empty() {
                map.entry(code.to_string()).or_insert(resolved);
            }
        }
        CashToAccrualMap(map)
    }

    /// All profit/loss accounts for a cash-basis code, in the order of the
    /// chart's linkage list.  None when no linkage is configured.
    pub fn get(&self, code: &str) -> Option<&[AccountNode]> {
        self.0.get(code).map(Vec::as_slice)
    }

    /// The profit/loss account used for the secondary journal
    pub fn first(&self, code: &str) -> Option<&AccountNode> {
        self.get(code).and_then(|nodes| nodes.first())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Maps a code to the primary label of its immediate parent, for one kind
/// of statement.
#[derive(Clone, Debug, Default)]
pub struct ParentNameMap(HashMap<String, String>);

impl ParentNameMap {
    pub fn build(taxonomy: &Taxonomy, kind: StatementKind) -> Self {
        let mut map = HashMap::new();
        for cat in taxonomy.list_categories() {
            if !kind.categories().contains(&cat.category) {
                continue;
            }
            cat.nodes.traverse(
                |v| {
                    if let (Some(code), Some(parent)) = (v.node.code(), v.parent)
                    {
                        map.entry(code.to_string())
                            .or_insert_with(|| parent.primary_label.clone());
                    }
                },
                true,
            );
        }
        ParentNameMap(map)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Missing configuration in the cash to accrual linkage
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkageGap {
    // The linkage names a code that is not a profit/loss account
    Dangling { cash_code: String, target: String },

    // A cash-basis account with no linkage and no children.  Lines on it
    // are derived with provisional labels.
    Unlinked { cash_code: String },
}

/// Report the cash-basis accounts whose secondary journal cannot be derived
/// completely, in chart order.
pub fn linkage_gaps(taxonomy: &Taxonomy) -> Vec<LinkageGap> {
    let pl_nodes = index_by_code(taxonomy, &PROFIT_LOSS);
    let mut gaps = Vec::new();
    for (_, node) in taxonomy.iter_nodes(&CASH_BASIS) {
        let Some(code) = node.code() else { continue };
        if node.meta.expands_to_codes.is_empty() {
            if !node.has_children() {
                gaps.push(LinkageGap::Unlinked {
                    cash_code: code.to_string(),
                });
            }
            continue;
        }
        for target in &node.meta.expands_to_codes {
            if !pl_nodes.contains_key(target.as_str()) {
                gaps.push(LinkageGap::Dangling {
                    cash_code: code.to_string(),
                    target: target.clone(),
                });
            }
        }
    }
    gaps
}

/// code -> node for the given categories.  The first node wins when a code
/// is duplicated, as for all lookups.
fn index_by_code<'a>(
    taxonomy: &'a Taxonomy,
    categories: &'a [AccountCategory],
) -> HashMap<&'a str, &'a AccountNode> {
    let mut index = HashMap::new();
    for (_, node) in taxonomy.iter_nodes(categories) {
        if let Some(code) = node.code() {
            index.entry(code).or_insert(node);
        }
    }
    index
}

#[cfg(test)]
mod test {
    use crate::account_categories::AccountCategory;
    use crate::accounts::AccountNode;
    use crate::mappings::{
        linkage_gaps, CashToAccrualMap, LinkageGap, ParentNameMap,
        StatementKind,
    };
    use crate::taxonomy::{CategoryTree, Taxonomy};

    #[test]
    fn test_cash_to_accrual() {
        let t = Taxonomy::default();
        let map = CashToAccrualMap::build(&t);

        let nodes = map.get("332500").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].code(), Some("762500"));
        assert_eq!(nodes[0].primary_label, "消耗品費");

        assert_eq!(map.first("402500").unwrap().code(), Some("832500"));
        assert_eq!(map.first("147100").unwrap().code(), Some("547100"));

        // No linkage configured
        assert!(map.get("334600").is_none());
        assert!(map.get("330000").is_none());

        // Not a cash-basis account
        assert!(map.get("762500").is_none());
    }

    #[test]
    fn test_fan_out_and_dangling() {
        let t = Taxonomy::new(vec![
            CategoryTree::new(
                AccountCategory::CashExpense,
                vec![
                    AccountNode::new("332500", "消耗品費支出", "2219")
                        .set_expands_to(&["762500", "999999", "832500"]),
                    AccountNode::new("332700", "修繕費支出", "2219")
                        .set_expands_to(&["999999"]),
                    AccountNode::new("334600", "前払金支出", "2241"),
                ],
            ),
            CategoryTree::new(
                AccountCategory::Expense,
                vec![
                    AccountNode::new("762500", "消耗品費", "3219"),
                    AccountNode::new("832500", "消耗品費", "3219"),
                ],
            ),
        ]);
        let map = CashToAccrualMap::build(&t);
        let codes: Vec<_> = map
            .get("332500")
            .unwrap()
            .iter()
            .filter_map(|n| n.code())
            .collect();
        assert_eq!(codes, vec!["762500", "832500"]);

        // Nothing resolved, so no entry at all
        assert!(map.get("332700").is_none());
        assert_eq!(map.len(), 1);

        assert_eq!(
            linkage_gaps(&t),
            vec![
                LinkageGap::Dangling {
                    cash_code: "332500".into(),
                    target: "999999".into(),
                },
                LinkageGap::Dangling {
                    cash_code: "332700".into(),
                    target: "999999".into(),
                },
                LinkageGap::Unlinked {
                    cash_code: "334600".into(),
                },
            ]
        );
    }

    #[test]
    fn test_parent_names() {
        let t = Taxonomy::default();
        let pl = ParentNameMap::build(&t, StatementKind::ProfitLoss);
        assert_eq!(pl.get("762500"), Some("事業費"));
        assert_eq!(pl.get("832500"), Some("管理費"));
        assert_eq!(pl.get("540100"), Some("事業収益"));

        // Roots have no parent
        assert_eq!(pl.get("760000"), None);
        assert_eq!(pl.get("740100"), None);

        // Other statements are not included
        assert_eq!(pl.get("109100"), None);
        assert_eq!(pl.get("332500"), None);

        let na = ParentNameMap::build(&t, StatementKind::NetAssets);
        assert_eq!(na.get("109100"), Some("その他有価証券評価差額金"));
        assert_eq!(na.get("109200"), Some("その他有価証券評価差額金"));
        assert_eq!(na.get("100101"), Some("指定純資産"));
        assert_eq!(na.get("762500"), None);
    }

    #[test]
    fn test_standard_chart_gaps() {
        let gaps = linkage_gaps(&Taxonomy::default());
        assert!(gaps.contains(&LinkageGap::Unlinked {
            cash_code: "334600".into()
        }));
        assert!(!gaps
            .iter()
            .any(|g| matches!(g, LinkageGap::Dangling { .. })));
    }
}
