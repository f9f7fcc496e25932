use crate::account_categories::AccountCategory;
use crate::account_kinds::AccountKind;
use crate::errors::Error;
use crate::funding::{FundingDesignation, FundingRouting};
use crate::mappings::{CashToAccrualMap, ParentNameMap, StatementKind};
use crate::taxonomy::Taxonomy;
use std::str::FromStr;

const PROVISIONAL_REVENUE: &str = "収益（仮）";
const PROVISIONAL_EXPENSE: &str = "費用（仮）";
const PROVISIONAL_CHILD: &str = "（紐付未設定）";
const PL_REVENUE: &str = "収益（PL）";
const PL_EXPENSE: &str = "費用（PL）";
const PL_PLACEHOLDER: &str = "（PL科目）";

// Major type of the designated net assets group
const DESIGNATED_NET_ASSETS_TYPE: &str = "1910";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Debit,
    Credit,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Debit, Side::Credit];

    pub fn label(self) -> &'static str {
        match self {
            Side::Debit => "借方",
            Side::Credit => "貸方",
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "debit" | "借方" => Ok(Side::Debit),
            "credit" | "貸方" => Ok(Side::Credit),
            _ => Err(Error::Str(format!("Invalid side {s}"))),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How one side of a journal line shows in the secondary journal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedAccountView {
    pub code: String,
    pub parent_name: String,
    pub child_name: String,

    // Either ProfitLoss, or Other when the account is shown as entered
    pub kind: AccountKind,

    // Set when the labels are placeholders because the cash-basis account
    // has no linkage to a profit/loss account.  The chart needs fixing.
    pub provisional: bool,
}

impl DerivedAccountView {
    pub fn is_profit_loss(&self) -> bool {
        self.kind == AccountKind::ProfitLoss
    }

    fn pass_through(code: &str) -> Self {
        DerivedAccountView {
            code: code.to_string(),
            parent_name: String::new(),
            child_name: String::new(),
            kind: AccountKind::Other,
            provisional: false,
        }
    }

    fn profit_loss(code: &str, parent_name: &str, child_name: &str) -> Self {
        DerivedAccountView {
            code: code.to_string(),
            parent_name: parent_name.to_string(),
            child_name: child_name.to_string(),
            kind: AccountKind::ProfitLoss,
            provisional: false,
        }
    }
}

/// A net assets account a designated-funded line can be assigned to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignatedTarget {
    pub code: String,
    pub name: String,
}

/// Computes the secondary journal for raw account codes.
///
/// All lookup tables are built once from the chart when the deriver is
/// created.  The deriver is never modified afterwards, so a single instance
/// can be shared by any number of voucher sessions.
#[derive(Clone, Debug)]
pub struct JournalDeriver {
    taxonomy: Taxonomy,
    routing: FundingRouting,
    cash_to_accrual: CashToAccrualMap,
    pl_parents: ParentNameMap,
    net_assets_parents: ParentNameMap,
    designated_targets: Vec<DesignatedTarget>,
}

impl Default for JournalDeriver {
    fn default() -> Self {
        JournalDeriver::new(Taxonomy::default(), FundingRouting::default())
    }
}

impl JournalDeriver {
    pub fn new(taxonomy: Taxonomy, routing: FundingRouting) -> Self {
        let cash_to_accrual = CashToAccrualMap::build(&taxonomy);
        let pl_parents =
            ParentNameMap::build(&taxonomy, StatementKind::ProfitLoss);
        let net_assets_parents =
            ParentNameMap::build(&taxonomy, StatementKind::NetAssets);
        let designated_targets = collect_designated_targets(&taxonomy);
        log::debug!(
            "Journal deriver ready: {} cash-basis linkages, {} designated \
             targets",
            cash_to_accrual.len(),
            designated_targets.len(),
        );
        JournalDeriver {
            taxonomy,
            routing,
            cash_to_accrual,
            pl_parents,
            net_assets_parents,
            designated_targets,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn routing(&self) -> &FundingRouting {
        &self.routing
    }

    pub fn cash_to_accrual(&self) -> &CashToAccrualMap {
        &self.cash_to_accrual
    }

    /// The accounts a designated-funded profit/loss line can be assigned to
    pub fn designated_targets(&self) -> &[DesignatedTarget] {
        &self.designated_targets
    }

    pub fn designated_target(&self, code: &str) -> Option<&DesignatedTarget> {
        self.designated_targets.iter().find(|t| t.code == code)
    }

    /// The secondary journal view of a raw account code.
    ///
    /// Cash-basis accounts are replaced with the profit/loss account they
    /// expand to, profit/loss accounts are shown with their parent, and
    /// the evaluation gain/loss accounts are routed by funding designation.
    /// Anything else is shown as entered.  The side only changes the
    /// wording of placeholder labels.
    pub fn derive(
        &self,
        raw_code: &str,
        side: Side,
        funding: Option<FundingDesignation>,
    ) -> DerivedAccountView {
        if self.routing.is_gain_loss_code(raw_code) {
            return self.derive_valuation_differential(raw_code, funding);
        }

        match self.taxonomy.classify(raw_code) {
            AccountKind::CashBasis => self.derive_cash_basis(raw_code, side),
            AccountKind::ProfitLoss => self.derive_profit_loss(raw_code, side),
            AccountKind::BalanceSheet | AccountKind::Other => {
                DerivedAccountView::pass_through(raw_code)
            }
        }
    }

    fn derive_valuation_differential(
        &self,
        raw_code: &str,
        funding: Option<FundingDesignation>,
    ) -> DerivedAccountView {
        let routed = self.routing.resolve(&self.routing.base_code, funding);
        let parent = self
            .net_assets_parents
            .get(routed)
            .or_else(|| self.pl_parents.get(routed))
            .unwrap_or_default();
        log::debug!(
            "{raw_code} routed to {routed} ({})",
            funding.map_or("no designation", FundingDesignation::label)
        );
        DerivedAccountView::profit_loss(
            routed,
            parent,
            self.routing.child_label(routed),
        )
    }

    fn derive_cash_basis(&self, raw_code: &str, side: Side) -> DerivedAccountView {
        let linked = self
            .cash_to_accrual
            .first(raw_code)
            .and_then(|n| n.code().map(|c| (c, n)));
        match linked {
            Some((code, node)) => {
                log::debug!("{raw_code} expands to {code}");
                DerivedAccountView::profit_loss(
                    code,
                    self.pl_parents.get(code).unwrap_or_default(),
                    &node.primary_label,
                )
            }
            None => {
                log::warn!(
                    "Cash-basis account {raw_code} has no linked profit/loss \
                     account, using provisional labels"
                );
                let parent = match side {
                    Side::Credit => PROVISIONAL_REVENUE,
                    Side::Debit => PROVISIONAL_EXPENSE,
                };
                DerivedAccountView {
                    provisional: true,
                    ..DerivedAccountView::profit_loss(
                        raw_code,
                        parent,
                        PROVISIONAL_CHILD,
                    )
                }
            }
        }
    }

    fn derive_profit_loss(&self, raw_code: &str, side: Side) -> DerivedAccountView {
        let parent = self.pl_parents.get(raw_code).unwrap_or_else(|| {
            if raw_code.starts_with('4') {
                PL_REVENUE
            } else if raw_code.starts_with('5') {
                PL_EXPENSE
            } else {
                match side {
                    Side::Credit => PL_REVENUE,
                    Side::Debit => PL_EXPENSE,
                }
            }
        });
        let child = self
            .taxonomy
            .find_node_by_code(raw_code)
            .map(|f| f.node.primary_label.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(PL_PLACEHOLDER);
        DerivedAccountView::profit_loss(raw_code, parent, child)
    }
}

/// The children of the designated net assets group
fn collect_designated_targets(taxonomy: &Taxonomy) -> Vec<DesignatedTarget> {
    taxonomy
        .iter_nodes(&[AccountCategory::NetAssets])
        .find(|(_, n)| n.meta.major_type_code == DESIGNATED_NET_ASSETS_TYPE)
        .map(|(_, group)| {
            group
                .iter_children()
                .filter_map(|c| {
                    c.code().map(|code| DesignatedTarget {
                        code: code.to_string(),
                        name: c.full_name(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
