use crate::account_kinds::AccountKind;
use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The buckets in which the chart of accounts groups its top-level nodes.
/// These match the tabs of the account-search screen, though the search
/// screen also has views that cut across categories (see account_views).

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountCategory {
    // Balance sheet
    Asset,
    Liability,
    NetAssets,

    // Activity statement, accrual basis
    Revenue,
    Expense,

    // Receipts and disbursements statement, cash basis.
    // Most of these accounts list the profit/loss accounts they expand to
    // when a secondary journal entry is derived.
    CashIncome,
    CashExpense,
}

impl AccountCategory {
    /// All categories, in the order the standard chart lists them.
    pub const ALL: [AccountCategory; 7] = [
        AccountCategory::Asset,
        AccountCategory::Liability,
        AccountCategory::NetAssets,
        AccountCategory::CashIncome,
        AccountCategory::CashExpense,
        AccountCategory::Revenue,
        AccountCategory::Expense,
    ];

    /// Classification of all accounts in this category.
    /// Adding a category must be decided here, there is no fallback.
    pub fn kind(self) -> AccountKind {
        match self {
            AccountCategory::Asset
            | AccountCategory::Liability
            | AccountCategory::NetAssets => AccountKind::BalanceSheet,
            AccountCategory::Revenue | AccountCategory::Expense => {
                AccountKind::ProfitLoss
            }
            AccountCategory::CashIncome | AccountCategory::CashExpense => {
                AccountKind::CashBasis
            }
        }
    }

    /// The default display label, used when a chart does not provide one
    pub fn label(self) -> &'static str {
        match self {
            AccountCategory::Asset => "資産",
            AccountCategory::Liability => "負債",
            AccountCategory::NetAssets => "純資産",
            AccountCategory::Revenue => "収益",
            AccountCategory::Expense => "費用",
            AccountCategory::CashIncome => "収入科目",
            AccountCategory::CashExpense => "支出科目",
        }
    }

    /// Identifier as used in chart files
    pub fn id(self) -> &'static str {
        match self {
            AccountCategory::Asset => "asset",
            AccountCategory::Liability => "liability",
            AccountCategory::NetAssets => "netAssets",
            AccountCategory::Revenue => "revenue",
            AccountCategory::Expense => "expense",
            AccountCategory::CashIncome => "cashIncome",
            AccountCategory::CashExpense => "cashExpense",
        }
    }
}

impl FromStr for AccountCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountCategory::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s) || c.label() == s)
            .ok_or_else(|| Error::Str(format!("Unknown account category {s}")))
    }
}
