use crate::account_kinds::AccountKind;
use crate::taxonomy::Taxonomy;

impl Taxonomy {
    /// The kind of account a code refers to.  Unknown and empty codes are
    /// `Other`.
    pub fn classify(&self, code: &str) -> AccountKind {
        self.find_node_by_code(code)
            .map_or(AccountKind::Other, |found| found.category.kind())
    }

    /// Whether a journal line on this code shows the funding designation
    /// badge.
    pub fn is_funding_routing_target(&self, code: &str) -> bool {
        self.classify(code).is_funding_target()
    }
}

#[cfg(test)]
mod test {
    use crate::account_categories::AccountCategory;
    use crate::account_kinds::AccountKind;
    use crate::taxonomy::Taxonomy;

    #[test]
    fn test_classify_every_code() {
        let t = Taxonomy::default();
        for (cat, node) in t.iter_all() {
            let Some(code) = node.code() else { continue };
            let expected = match cat {
                AccountCategory::Asset
                | AccountCategory::Liability
                | AccountCategory::NetAssets => AccountKind::BalanceSheet,
                AccountCategory::Revenue | AccountCategory::Expense => {
                    AccountKind::ProfitLoss
                }
                AccountCategory::CashIncome
                | AccountCategory::CashExpense => AccountKind::CashBasis,
            };
            assert_eq!(t.classify(code), expected, "code {code}");
        }
    }

    #[test]
    fn test_classify() {
        let t = Taxonomy::default();
        assert_eq!(t.classify("010101"), AccountKind::BalanceSheet);
        assert_eq!(t.classify("109100"), AccountKind::BalanceSheet);
        assert_eq!(t.classify("332500"), AccountKind::CashBasis);
        assert_eq!(t.classify("762500"), AccountKind::ProfitLoss);
        assert_eq!(t.classify("960100"), AccountKind::ProfitLoss);
        assert_eq!(t.classify("123456"), AccountKind::Other);
        assert_eq!(t.classify(""), AccountKind::Other);
    }

    #[test]
    fn test_funding_routing_target() {
        let t = Taxonomy::default();
        assert!(t.is_funding_routing_target("332500"));
        assert!(t.is_funding_routing_target("740100"));
        assert!(!t.is_funding_routing_target("010111"));
        assert!(!t.is_funding_routing_target("nope"));
    }
}
