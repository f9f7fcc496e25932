use std::collections::HashMap;

/// Labels for the major type codes carried in the account metadata.
/// These are for logic and reports; the account-search screen does not
/// show them.
pub struct AccountTypeCollection(HashMap<String, AccountType>);

impl AccountTypeCollection {
    pub fn add(&mut self, code: &str, label: &str) {
        self.0.insert(
            code.to_string(),
            AccountType {
                code: code.to_string(),
                label: label.to_string(),
            },
        );
    }

    pub fn get(&self, code: &str) -> Option<&AccountType> {
        self.0.get(code)
    }

    /// The type for this code, or for the block it belongs to ("1114" is
    /// part of "1100").  Detail types are not all listed in the master.
    pub fn find(&self, code: &str) -> Option<&AccountType> {
        self.get(code).or_else(|| {
            let prefix = code.get(..2)?;
            self.get(&format!("{prefix}00"))
        })
    }

    pub fn label(&self, code: &str) -> Option<&str> {
        self.find(code).map(|t| t.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AccountTypeCollection {
    fn default() -> Self {
        let mut t = Self(HashMap::new());

        // Assets
        t.add("1100", "流動資産");
        t.add("1200", "有形固定資産");
        t.add("1300", "無形固定資産");
        t.add("1400", "投資その他の資産");

        // Liabilities
        t.add("1500", "流動負債");
        t.add("1600", "固定負債");

        // Net assets
        t.add("1910", "指定純資産");
        t.add("1920", "一般純資産");
        t.add("1990", "基金");
        t.add("1998", "その他有価証券評価差額金");

        // Receipts
        t.add("2119", "収入(経常・一般)");
        t.add("2118", "収入(繰入金等)");
        t.add("2121", "収入(取崩・投資)");
        t.add("2122", "収入(その他投資)");
        t.add("2161", "収入(借入金)");
        t.add("2182", "収入(他会計貸付・借入)");
        t.add("2192", "収入(前期繰越)");

        // Disbursements
        t.add("2219", "支出(経常・一般)");
        t.add("2218", "支出(繰入金)");
        t.add("2220", "支出(投資・固定資産等)");
        t.add("2230", "支出(特定資産)");
        t.add("2241", "支出(その他投資)");
        t.add("2261", "支出(借入金返済)");
        t.add("2269", "支出(その他)");
        t.add("2282", "支出(他会計貸付・借入)");

        // Revenue
        t.add("3118", "PL収益（繰入金等）");
        t.add("3119", "PL収益（経常・一般）");
        t.add("3121", "PL収益（投資・取得・売却）");
        t.add("3122", "PL収益（その他投資収益）");
        t.add("3130", "PL収益（受贈益）");
        t.add("3142", "PL収益（引当金取崩額）");
        t.add("3179", "PL収益（その他）");

        // Expenses
        t.add("3218", "PL費用（繰出額）");
        t.add("3219", "PL費用（経常・一般）");
        t.add("3232", "PL費用（有価証券売却損）");
        t.add("3241", "PL費用（固定資産損失）");
        t.add("3242", "PL費用（災害損失）");
        t.add("3251", "PL費用（減価償却費）");
        t.add("3252", "PL費用（無形固定資産償却費）");
        t.add("3262", "PL費用（法人税等）");
        t.add("3271", "PL費用（雑損失）");
        t.add("3272", "PL費用（棚卸資産損失）");
        t.add("3279", "PL費用（評価損ほか）");
        t.add("3291", "PL費用（振替額）");
        t
    }
}

#[derive(Debug, Clone)]
pub struct AccountType {
    pub code: String,

    // Display name
    pub label: String,
}

#[cfg(test)]
mod test {
    use crate::account_types::AccountTypeCollection;

    #[test]
    fn test_labels() {
        let types = AccountTypeCollection::default();
        assert_eq!(types.label("1100"), Some("流動資産"));
        assert_eq!(types.label("1998"), Some("その他有価証券評価差額金"));
        assert_eq!(types.label("3279"), Some("PL費用（評価損ほか）"));
        assert_eq!(types.label("9999"), None);

        // Detail types fall back on their block
        assert!(types.get("1114").is_none());
        assert_eq!(types.label("1114"), Some("流動資産"));
        assert_eq!(types.label("1620"), Some("固定負債"));
        assert_eq!(types.label(""), None);
    }
}
