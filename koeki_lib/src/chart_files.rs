use crate::errors::Error;
use crate::taxonomy::Taxonomy;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Charts of accounts can be exchanged as JSON: a list of categories, each
/// with its id, label and tree of nodes.
impl Taxonomy {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let t: Taxonomy = serde_json::from_str(json)?;
        Ok(Taxonomy::new(t.into_categories()))
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let t: Taxonomy = serde_json::from_reader(BufReader::new(file))?;
        log::debug!(
            "Loaded chart of accounts from {} ({} nodes)",
            path.display(),
            t.iter_all().count()
        );
        Ok(Taxonomy::new(t.into_categories()))
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut buf = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut buf, self)?;
        buf.write_all(b"\n")?;
        buf.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::account_categories::AccountCategory;
    use crate::accounts::DisplayTab;
    use crate::taxonomy::Taxonomy;

    #[test]
    fn test_read_chart() {
        let t = Taxonomy::from_json(
            r#"[
              {
                "id": "cashExpense",
                "label": "支出科目",
                "nodes": [
                  {
                    "code": "330000",
                    "primaryLabel": "事業費支出",
                    "meta": { "majorTypeCode": "2219" },
                    "children": [
                      {
                        "code": "332500",
                        "primaryLabel": "消耗品費支出",
                        "meta": {
                          "majorTypeCode": "2219",
                          "expandsToCodes": ["762500"]
                        }
                      }
                    ]
                  }
                ]
              },
              {
                "id": "expense",
                "label": "費用",
                "nodes": [
                  {
                    "primaryLabel": "評価差額",
                    "meta": { "majorTypeCode": "3279" },
                    "children": [
                      {
                        "code": "960100",
                        "primaryLabel": "その他有価証券評価差額金",
                        "secondaryLabel": "（評価損）",
                        "meta": {
                          "majorTypeCode": "3279",
                          "displayTab": "netAssetsProfitLoss"
                        }
                      }
                    ]
                  }
                ]
              }
            ]"#,
        )
        .unwrap();

        let found = t.find_node_by_code("332500").unwrap();
        assert_eq!(found.category, AccountCategory::CashExpense);
        assert_eq!(found.node.meta.expands_to_codes, vec!["762500"]);
        assert_eq!(found.node.meta.detail_type_code, None);
        assert!(!found.node.meta.is_fund_like);

        let found = t.find_node_by_code("960100").unwrap();
        assert_eq!(
            found.node.meta.display_tab,
            DisplayTab::NetAssetsProfitLoss
        );
        assert_eq!(found.parent.unwrap().code(), None);
    }

    #[test]
    fn test_invalid_chart() {
        assert!(Taxonomy::from_json(r#"[{"id": "equity"}]"#).is_err());
        assert!(Taxonomy::from_json("not json").is_err());
    }

    #[test]
    fn test_standard_chart_survives_export() {
        let t = Taxonomy::default();
        let json = t.to_json().unwrap();
        assert!(json.contains("\"expandsToCodes\""));
        assert!(json.contains("\"id\": \"cashIncome\""));
        assert_eq!(Taxonomy::from_json(&json).unwrap(), t);
    }
}
