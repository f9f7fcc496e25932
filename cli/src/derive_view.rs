use crate::tables::{Column, Table, Width};
use console::style;
use koeki_lib::derivation::{DerivedAccountView, JournalDeriver, Side};
use koeki_lib::funding::{FundingDesignation, FundingRouting};
use koeki_lib::mappings::{linkage_gaps, LinkageGap};
use koeki_lib::taxonomy::Taxonomy;

struct Derived {
    raw: String,
    view: DerivedAccountView,
}

/// Show the secondary journal entry for each code, as it would appear on
/// the given side of a voucher.
pub fn derive_view(
    deriver: &JournalDeriver,
    codes: &[String],
    side: Side,
    funding: Option<FundingDesignation>,
    table_settings: &crate::tables::Settings,
    width: usize,
) -> String {
    // Provisional names are highlighted, they need a fix in the chart
    let highlight = |d: &Derived, text: &str| {
        if d.view.provisional {
            style(text).yellow().to_string()
        } else {
            text.to_string()
        }
    };
    let raw = |d: &Derived| d.raw.clone();
    let code = |d: &Derived| d.view.code.clone();
    let parent = |d: &Derived| highlight(d, &d.view.parent_name);
    let child = |d: &Derived| highlight(d, &d.view.child_name);
    let kind = |d: &Derived| d.view.kind.short_name().to_string();
    let columns = vec![
        Column::new("Entered", &raw),
        Column::new("Code", &code),
        Column::new("Kind", &kind),
        Column::new("Parent", &parent).with_width(Width::Shrink(8)),
        Column::new("Account", &child).with_width(Width::Shrink(12)),
    ];
    let mut table = Table::new(columns, table_settings).with_col_headers();
    for c in codes {
        table.add_row(
            &Derived {
                raw: c.clone(),
                view: deriver.derive(c, side, funding),
            },
            0,
        );
    }
    table.to_string(width)
}

/// Show where the valuation differential goes for each funding
/// designation, or only for the one given.
pub fn split_view(
    routing: &FundingRouting,
    base_code: &str,
    funding: Option<FundingDesignation>,
) -> String {
    let designations = match funding {
        Some(f) => vec![Some(f)],
        None => vec![
            None,
            Some(FundingDesignation::General),
            Some(FundingDesignation::Designated),
        ],
    };
    let mut result = String::new();
    for d in designations {
        let routed = routing.resolve(base_code, d);
        let label = d.map_or("指定なし", FundingDesignation::label);
        if routed == base_code && base_code != routing.base_code {
            result.push_str(&format!("{label}: {routed}\n"));
        } else {
            result.push_str(&format!(
                "{label}: {routed} {}\n",
                routing.child_label(routed)
            ));
        }
    }
    result
}

/// Report the problems in the chart that affect the secondary journal.
/// Returns the report and the number of problems found.
pub fn check_view(taxonomy: &Taxonomy) -> (String, usize) {
    let mut result = String::new();
    let mut count = 0;

    for dup in taxonomy.duplicate_codes() {
        count += 1;
        let cats: Vec<&str> =
            dup.categories.iter().map(|c| c.label()).collect();
        result.push_str(&format!(
            "Duplicate code {} in {}, only the first one is used\n",
            dup.code,
            cats.join(", ")
        ));
    }

    for gap in linkage_gaps(taxonomy) {
        count += 1;
        match gap {
            LinkageGap::Dangling { cash_code, target } => {
                result.push_str(&format!(
                    "{cash_code} expands to {target}, which is not a \
                     profit/loss account\n"
                ));
            }
            LinkageGap::Unlinked { cash_code } => {
                result.push_str(&format!(
                    "{cash_code} has no profit/loss account, provisional \
                     names will be used\n"
                ));
            }
        }
    }

    if count == 0 {
        result.push_str("No problem found\n");
    }
    (result, count)
}

#[cfg(test)]
mod test {
    use crate::derive_view::{check_view, derive_view, split_view};
    use koeki_lib::account_categories::AccountCategory;
    use koeki_lib::accounts::AccountNode;
    use koeki_lib::derivation::{JournalDeriver, Side};
    use koeki_lib::funding::{FundingDesignation, FundingRouting};
    use koeki_lib::mappings::linkage_gaps;
    use koeki_lib::taxonomy::{CategoryTree, Taxonomy};

    #[test]
    fn test_derive_view() {
        let deriver = JournalDeriver::default();
        let output = derive_view(
            &deriver,
            &["332500".to_string(), "010111".to_string()],
            Side::Debit,
            None,
            &crate::tables::Settings::default(),
            200,
        );
        let cash = output.lines().find(|l| l.starts_with("332500")).unwrap();
        assert!(cash.contains("762500"));
        assert!(cash.contains("事業費"));
        assert!(cash.contains("PL"));
        let bs = output.lines().find(|l| l.starts_with("010111")).unwrap();
        assert!(bs.contains("その他"));
        assert!(!bs.contains("PL"));
    }

    #[test]
    fn test_split_view() {
        let routing = FundingRouting::default();
        assert_eq!(
            split_view(&routing, "108100", Some(FundingDesignation::Designated)),
            "指定: 109100 （うち指定純資産に係る評価差額金）\n",
        );
        assert_eq!(
            split_view(&routing, "108100", None),
            "指定なし: 108100 その他有価証券評価差額金\n\
             一般: 109200 （うち一般純資産に係る評価差額金）\n\
             指定: 109100 （うち指定純資産に係る評価差額金）\n",
        );
        assert_eq!(
            split_view(&routing, "010111", Some(FundingDesignation::General)),
            "一般: 010111\n",
        );
    }

    #[test]
    fn test_check_view() {
        let standard = Taxonomy::default();
        let (report, count) = check_view(&standard);
        assert_eq!(count, linkage_gaps(&standard).len());
        assert!(report.contains("334600 has no profit/loss account"));
        assert!(!report.contains("332500"));

        let dup = Taxonomy::new(vec![
            CategoryTree::new(
                AccountCategory::Asset,
                vec![AccountNode::new("010111", "現金", "1111")],
            ),
            CategoryTree::new(
                AccountCategory::Liability,
                vec![AccountNode::new("010111", "未払金", "1211")],
            ),
        ]);
        let (report, count) = check_view(&dup);
        assert_eq!(count, 1);
        assert!(report.starts_with("Duplicate code 010111"));
    }
}
