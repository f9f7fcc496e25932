//! Views of the chart used when searching for an account.
//!
//! Each view is a copy of the chart, restricted to some categories and
//! nodes.  Views preserve the tree shape unless documented otherwise.

use crate::account_categories::AccountCategory;
use crate::accounts::DisplayTab;
use crate::errors::Error;
use crate::taxonomy::{CategoryTree, Taxonomy};
use std::str::FromStr;

const DEPOSIT_TYPE: &str = "1114";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchView {
    #[default]
    All,
    BalanceSheet,
    CashBasis,

    // Revenue and expenses, except those shown with the net assets
    ProfitLoss,

    // The revenue and expense accounts shown with the net assets, as a
    // flat list
    NetAssetsProfitLoss,

    // Ordinary and current deposits only
    Deposit,
}

impl SearchView {
    pub const ALL: [SearchView; 6] = [
        SearchView::All,
        SearchView::BalanceSheet,
        SearchView::CashBasis,
        SearchView::ProfitLoss,
        SearchView::NetAssetsProfitLoss,
        SearchView::Deposit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchView::All => "全科目",
            SearchView::BalanceSheet => "貸借科目",
            SearchView::CashBasis => "収支科目",
            SearchView::ProfitLoss => "活動科目",
            SearchView::NetAssetsProfitLoss => "純資産科目",
            SearchView::Deposit => "普通・当座預金科目",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            SearchView::All => "all",
            SearchView::BalanceSheet => "bs",
            SearchView::CashBasis => "cash",
            SearchView::ProfitLoss => "pl",
            SearchView::NetAssetsProfitLoss => "net-assets-pl",
            SearchView::Deposit => "deposit",
        }
    }

    pub fn build(self, taxonomy: &Taxonomy) -> Taxonomy {
        match self {
            SearchView::All => taxonomy.clone(),
            SearchView::BalanceSheet => taxonomy.restrict(&[
                AccountCategory::Asset,
                AccountCategory::Liability,
                AccountCategory::NetAssets,
            ]),
            SearchView::CashBasis => taxonomy.restrict(&[
                AccountCategory::CashIncome,
                AccountCategory::CashExpense,
            ]),
            SearchView::ProfitLoss => taxonomy
                .restrict(&[AccountCategory::Revenue, AccountCategory::Expense])
                .retain(|n| {
                    n.meta.display_tab != DisplayTab::NetAssetsProfitLoss
                }),
            SearchView::NetAssetsProfitLoss => {
                net_assets_profit_loss(taxonomy)
            }
            SearchView::Deposit => deposits(taxonomy),
        }
    }
}

impl FromStr for SearchView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchView::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| Error::Str(format!("Invalid view {s}")))
    }
}

fn net_assets_profit_loss(taxonomy: &Taxonomy) -> Taxonomy {
    let flat = taxonomy
        .restrict(&[AccountCategory::Revenue, AccountCategory::Expense])
        .into_categories()
        .into_iter()
        .map(|c| {
            let nodes = c
                .nodes
                .iter()
                .filter(|n| {
                    n.meta.display_tab == DisplayTab::NetAssetsProfitLoss
                })
                .map(|n| n.clone().with_children(Vec::new()))
                .collect();
            CategoryTree::new(c.category, nodes).with_label(&c.label)
        })
        .collect();
    Taxonomy::new(flat)
}

fn deposits(taxonomy: &Taxonomy) -> Taxonomy {
    let roots = taxonomy
        .category(AccountCategory::Asset)
        .map(|c| {
            c.nodes
                .select(|n| n.meta.major_type_code == DEPOSIT_TYPE)
                .into_roots()
        })
        .unwrap_or_default();
    Taxonomy::new(vec![CategoryTree::new(AccountCategory::Asset, roots)
        .with_label(SearchView::Deposit.label())])
}

/// Every node of one account type, with its descendants of the same type.
/// Nodes of that type nested under a different type become roots.
pub fn by_major_type(taxonomy: &Taxonomy, major_type_code: &str) -> Taxonomy {
    Taxonomy::new(
        taxonomy
            .list_categories()
            .iter()
            .map(|c| CategoryTree {
                category: c.category,
                label: c.label.clone(),
                nodes: c
                    .nodes
                    .select(|n| n.meta.major_type_code == major_type_code),
            })
            .filter(|c| !c.nodes.is_empty())
            .collect(),
    )
}

/// Nodes whose code or full name contains the text, with their ancestors.
/// An empty query matches everything.
pub fn search(taxonomy: &Taxonomy, query: &str) -> Taxonomy {
    let query = query.trim();
    if query.is_empty() {
        return taxonomy.clone();
    }
    taxonomy.filter(|_, n| {
        n.full_name().contains(query)
            || n.code().is_some_and(|c| c.contains(query))
    })
}

#[cfg(test)]
mod test {
    use crate::account_categories::AccountCategory;
    use crate::account_views::{by_major_type, search, SearchView};
    use crate::taxonomy::Taxonomy;

    fn codes(t: &Taxonomy) -> Vec<&str> {
        t.iter_all().filter_map(|(_, n)| n.code()).collect()
    }

    #[test]
    fn test_category_views() {
        let t = Taxonomy::default();
        assert_eq!(SearchView::All.build(&t), t);

        let bs = SearchView::BalanceSheet.build(&t);
        assert_eq!(bs.list_categories().len(), 3);
        assert!(codes(&bs).contains(&"109100"));
        assert!(!codes(&bs).contains(&"332500"));

        let cash = SearchView::CashBasis.build(&t);
        assert!(cash
            .iter_all()
            .all(|(c, _)| c == AccountCategory::CashIncome
                || c == AccountCategory::CashExpense));
    }

    #[test]
    fn test_profit_loss_views() {
        let t = Taxonomy::default();
        let pl = SearchView::ProfitLoss.build(&t);
        let pl_codes = codes(&pl);
        assert!(pl_codes.contains(&"762500"));
        assert!(!pl_codes.contains(&"740100"));
        assert!(!pl_codes.contains(&"959000"));
        assert!(!pl_codes.contains(&"960100"));

        let na = SearchView::NetAssetsProfitLoss.build(&t);
        assert_eq!(codes(&na), vec!["740100", "959000", "960100"]);
        assert!(na.iter_all().all(|(_, n)| !n.has_children()));
    }

    #[test]
    fn test_deposit_view() {
        let t = Taxonomy::default();
        let dep = SearchView::Deposit.build(&t);
        let cat = dep.category(AccountCategory::Asset).unwrap();
        assert_eq!(cat.label, "普通・当座預金科目");

        let roots: Vec<_> =
            cat.nodes.roots().iter().filter_map(|n| n.code()).collect();
        assert_eq!(roots, vec!["010131", "010132"]);
        assert_eq!(
            codes(&dep),
            vec!["010131", "01013101", "010132", "01013201", "01013215"]
        );
    }

    #[test]
    fn test_by_major_type() {
        let t = Taxonomy::default();
        let v = by_major_type(&t, "1990");
        assert_eq!(v.list_categories().len(), 1);
        assert_eq!(
            codes(&v),
            vec!["100101", "100301", "109100", "109200"]
        );
        assert!(by_major_type(&t, "0000").list_categories().is_empty());
    }

    #[test]
    fn test_search() {
        let t = Taxonomy::default();
        let found = search(&t, "消耗品費支出");
        assert_eq!(
            codes(&found),
            vec!["330000", "332500", "400000", "402500"]
        );
        assert_eq!(codes(&search(&t, "9601")), vec!["960100"]);
        assert_eq!(search(&t, "  "), t);
    }

    #[test]
    fn test_parse_view() {
        assert_eq!(
            "net-assets-pl".parse::<SearchView>().unwrap(),
            SearchView::NetAssetsProfitLoss
        );
        assert!("summary".parse::<SearchView>().is_err());
    }
}
