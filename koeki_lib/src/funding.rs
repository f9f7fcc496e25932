use crate::errors::Error;
use std::str::FromStr;

/// Source of the funds a journal line relates to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FundingDesignation {
    #[default]
    General,
    Designated,
}

impl FundingDesignation {
    pub fn label(self) -> &'static str {
        match self {
            FundingDesignation::General => "一般",
            FundingDesignation::Designated => "指定",
        }
    }
}

impl FromStr for FundingDesignation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "一般" | "general" => Ok(FundingDesignation::General),
            "指定" | "designated" => Ok(FundingDesignation::Designated),
            _ => Err(Error::Str(format!("Invalid funding designation {s}"))),
        }
    }
}

impl std::fmt::Display for FundingDesignation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the other-securities valuation differential is split by funding
/// source.
///
/// The valuation differential is booked on a single account, but the
/// disclosures need it split between the designated and the general net
/// assets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FundingRouting {
    // The net account for the valuation differential
    pub base_code: String,
    pub designated_code: String,
    pub general_code: String,

    // Evaluation gain and evaluation loss
    pub gain_loss_codes: Vec<String>,

    pub base_label: String,
    pub designated_label: String,
    pub general_label: String,
}

impl Default for FundingRouting {
    fn default() -> Self {
        FundingRouting {
            base_code: "108100".into(),
            designated_code: "109100".into(),
            general_code: "109200".into(),
            gain_loss_codes: vec!["740100".into(), "960100".into()],
            base_label: "その他有価証券評価差額金".into(),
            designated_label: "（うち指定純資産に係る評価差額金）".into(),
            general_label: "（うち一般純資産に係る評価差額金）".into(),
        }
    }
}

impl FundingRouting {
    /// The account to use for `base_code` given the funding designation.
    /// Any code other than the valuation differential is returned unchanged,
    /// as is the valuation differential when no designation is known.
    pub fn resolve<'a>(
        &'a self,
        base_code: &'a str,
        designation: Option<FundingDesignation>,
    ) -> &'a str {
        if base_code != self.base_code {
            return base_code;
        }
        match designation {
            Some(FundingDesignation::Designated) => &self.designated_code,
            Some(FundingDesignation::General) => &self.general_code,
            None => base_code,
        }
    }

    /// Whether this is one of the evaluation gain/loss accounts that are
    /// routed through the valuation differential.
    pub fn is_gain_loss_code(&self, code: &str) -> bool {
        self.gain_loss_codes.iter().any(|c| c == code)
    }

    /// Label shown for a routed code in the secondary journal
    pub fn child_label(&self, routed_code: &str) -> &str {
        if routed_code == self.designated_code {
            &self.designated_label
        } else if routed_code == self.general_code {
            &self.general_label
        } else {
            &self.base_label
        }
    }
}

/// Split the valuation differential with the standard accounts
pub fn resolve_funding_split(
    base_code: &str,
    designation: Option<FundingDesignation>,
) -> String {
    FundingRouting::default()
        .resolve(base_code, designation)
        .to_string()
}

#[cfg(test)]
mod test {
    use crate::funding::{
        resolve_funding_split, FundingDesignation, FundingRouting,
    };
    use std::str::FromStr;

    #[test]
    fn test_split() {
        assert_eq!(
            resolve_funding_split(
                "108100",
                Some(FundingDesignation::Designated)
            ),
            "109100"
        );
        assert_eq!(
            resolve_funding_split("108100", Some(FundingDesignation::General)),
            "109200"
        );
        assert_eq!(resolve_funding_split("108100", None), "108100");
    }

    #[test]
    fn test_other_codes_unchanged() {
        for code in ["762500", "109100", "740100", "", "1081"] {
            assert_eq!(resolve_funding_split(code, None), code);
            assert_eq!(
                resolve_funding_split(code, Some(FundingDesignation::General)),
                code
            );
            assert_eq!(
                resolve_funding_split(
                    code,
                    Some(FundingDesignation::Designated)
                ),
                code
            );
        }
    }

    #[test]
    fn test_routing() {
        let r = FundingRouting::default();
        assert!(r.is_gain_loss_code("740100"));
        assert!(r.is_gain_loss_code("960100"));
        assert!(!r.is_gain_loss_code("108100"));

        assert_eq!(r.child_label("109100"), "（うち指定純資産に係る評価差額金）");
        assert_eq!(r.child_label("109200"), "（うち一般純資産に係る評価差額金）");
        assert_eq!(r.child_label("108100"), "その他有価証券評価差額金");
    }

    #[test]
    fn test_parse_designation() {
        assert_eq!(
            FundingDesignation::from_str("指定").unwrap(),
            FundingDesignation::Designated
        );
        assert_eq!(
            FundingDesignation::from_str("general").unwrap(),
            FundingDesignation::General
        );
        assert!(FundingDesignation::from_str("restricted").is_err());
        assert_eq!(FundingDesignation::default().to_string(), "一般");
    }
}
