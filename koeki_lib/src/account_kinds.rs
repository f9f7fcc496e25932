use serde::{Deserialize, Serialize};

/// Semantic kind of an account, derived from the category it belongs to.
/// This is what decides whether a journal line needs a secondary entry.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    // Asset, liability or net assets.  Journal lines on these accounts are
    // shown as entered.
    BalanceSheet,

    // Revenue or expense of the activity statement.
    ProfitLoss,

    // Receipts and disbursements.  These are expanded to their profit/loss
    // counterpart in the secondary journal.
    CashBasis,

    // Unknown code, or anything the chart does not classify.
    Other,
}

impl AccountKind {
    /// Whether lines on such accounts show the funding designation badge
    /// (general vs designated net assets).
    pub fn is_funding_target(self) -> bool {
        matches!(self, AccountKind::ProfitLoss | AccountKind::CashBasis)
    }

    /// Short name for display purposes
    pub fn short_name(self) -> &'static str {
        match self {
            AccountKind::BalanceSheet => "BS",
            AccountKind::ProfitLoss => "PL",
            AccountKind::CashBasis => "収支",
            AccountKind::Other => "その他",
        }
    }
}
