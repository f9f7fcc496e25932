use serde::{Deserialize, Serialize};

/// Which tab of the account-search screen shows an account.  This is
/// independent from the accounting classification: some revenue or expense
/// accounts are listed with the net assets accounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayTab {
    #[default]
    None,
    NetAssetsProfitLoss,
}

/// Classification metadata, never displayed directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    // Major type: current assets, designated net assets, ordinary
    // disbursements, ...  See account_types.
    pub major_type_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_type_code: Option<String>,

    // Cash and deposits
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_fund_like: bool,

    // For cash-basis accounts: the profit/loss accounts this expands to,
    // in order.  Only the first one is used by the derivation today.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expands_to_codes: Vec<String>,

    #[serde(default, skip_serializing_if = "is_default_tab")]
    pub display_tab: DisplayTab,
}

fn is_default_tab(tab: &DisplayTab) -> bool {
    *tab == DisplayTab::None
}

/// A node of the chart of accounts.
///
/// Nodes without a code only group other nodes; they cannot be posted to.
/// A node is an aggregate when it has children, or when its code closes a
/// block (ends with "00").  Mid-level aggregates with a code remain
/// selectable in some screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub primary_label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_label: Option<String>,

    pub meta: AccountMeta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AccountNode>,
}

impl AccountNode {
    /// A postable account.  The detail type code defaults to the code
    /// itself, which is what most of the chart uses.
    pub fn new(code: &str, primary_label: &str, major_type_code: &str) -> Self {
        AccountNode {
            code: Some(code.into()),
            primary_label: primary_label.into(),
            secondary_label: None,
            meta: AccountMeta {
                major_type_code: major_type_code.into(),
                detail_type_code: Some(code.into()),
                is_fund_like: false,
                expands_to_codes: Vec::new(),
                display_tab: DisplayTab::None,
            },
            children: Vec::new(),
        }
    }

    /// A summary node with no code of its own
    pub fn group(primary_label: &str, major_type_code: &str) -> Self {
        AccountNode {
            code: None,
            primary_label: primary_label.into(),
            secondary_label: None,
            meta: AccountMeta {
                major_type_code: major_type_code.into(),
                detail_type_code: None,
                is_fund_like: false,
                expands_to_codes: Vec::new(),
                display_tab: DisplayTab::None,
            },
            children: Vec::new(),
        }
    }

    pub fn set_secondary_label(mut self, secondary_label: &str) -> Self {
        self.secondary_label = Some(secondary_label.into());
        self
    }
    pub fn set_detail_type_code(mut self, detail_type_code: &str) -> Self {
        self.meta.detail_type_code = Some(detail_type_code.into());
        self
    }
    pub fn set_fund_like(mut self, is_fund_like: bool) -> Self {
        self.meta.is_fund_like = is_fund_like;
        self
    }
    pub fn set_expands_to(mut self, codes: &[&str]) -> Self {
        self.meta.expands_to_codes =
            codes.iter().map(|c| c.to_string()).collect();
        self
    }
    pub fn set_display_tab(mut self, display_tab: DisplayTab) -> Self {
        self.meta.display_tab = display_tab;
        self
    }
    pub fn with_children(mut self, children: Vec<AccountNode>) -> Self {
        self.children = children;
        self
    }

    /// The code, if any.  An empty code is the same as no code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.is_empty())
    }

    pub fn has_code(&self, code: &str) -> bool {
        !code.is_empty() && self.code() == Some(code)
    }

    pub fn full_name(&self) -> String {
        match &self.secondary_label {
            Some(s) if !s.is_empty() => format!("{} {}", self.primary_label, s),
            _ => self.primary_label.clone(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_aggregate(&self) -> bool {
        self.has_children() || self.code().is_some_and(|c| c.ends_with("00"))
    }

    /// Iterate over direct children
    pub fn iter_children(&self) -> impl Iterator<Item = &AccountNode> {
        self.children.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::accounts::{AccountNode, DisplayTab};

    #[test]
    fn test_full_name() {
        let acc = AccountNode::new("01013215", "普通預金 三井住友銀行 新宿支店", "1114")
            .set_secondary_label("周年事業積立資産");
        assert_eq!(
            acc.full_name(),
            "普通預金 三井住友銀行 新宿支店 周年事業積立資産"
        );

        let acc = AccountNode::new("010101", "小口現金", "1111");
        assert_eq!(acc.full_name(), "小口現金");
    }

    #[test]
    fn test_aggregate() {
        let leaf = AccountNode::new("010101", "小口現金", "1111");
        assert!(!leaf.is_aggregate());

        // closes a block, even without children
        let block = AccountNode::new("010900", "未収金", "1120");
        assert!(block.is_aggregate());

        let group = AccountNode::group("合計", "1100")
            .with_children(vec![leaf.clone()]);
        assert!(group.is_aggregate());
        assert_eq!(group.code(), None);

        let empty = AccountNode::group("空", "1100");
        assert!(!empty.is_aggregate());
    }

    #[test]
    fn test_code() {
        let mut acc = AccountNode::new("010101", "小口現金", "1111");
        assert!(acc.has_code("010101"));
        assert!(!acc.has_code(""));
        acc.code = Some(String::new());
        assert_eq!(acc.code(), None);
        assert!(!acc.has_code(""));
    }

    #[test]
    fn test_builder() {
        let acc = AccountNode::new("960100", "その他有価証券評価差額金", "3279")
            .set_secondary_label("（評価損）")
            .set_detail_type_code("960000")
            .set_display_tab(DisplayTab::NetAssetsProfitLoss);
        assert_eq!(acc.meta.detail_type_code.as_deref(), Some("960000"));
        assert_eq!(acc.meta.display_tab, DisplayTab::NetAssetsProfitLoss);
        assert!(acc.meta.expands_to_codes.is_empty());

        let acc = AccountNode::new("332500", "消耗品費支出", "2219")
            .set_expands_to(&["762500"]);
        assert_eq!(acc.meta.expands_to_codes, vec!["762500".to_string()]);
    }
}
