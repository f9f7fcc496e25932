use crate::derivation::{DerivedAccountView, JournalDeriver, Side};
use crate::errors::Error;
use crate::funding::FundingDesignation;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// The steps of entering a voucher, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Header,
    Detail,
    TransferPreview,
    AssignDesignated,
    Confirmed,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Header => "伝票情報",
            Phase::Detail => "明細入力",
            Phase::TransferPreview => "二次仕訳プレビュー",
            Phase::AssignDesignated => "指定純資産科目選択",
            Phase::Confirmed => "確定",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Header => "header",
            Phase::Detail => "detail",
            Phase::TransferPreview => "transfer preview",
            Phase::AssignDesignated => "designated assignment",
            Phase::Confirmed => "confirmed",
        };
        write!(f, "{name}")
    }
}

/// Groups of fields, each owned by one phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Detail,
    Designated,
}

impl Section {
    /// The phase in which the fields are entered.  They are locked once the
    /// voucher moves past that phase.
    pub fn phase(self) -> Phase {
        match self {
            Section::Header => Phase::Header,
            Section::Detail => Phase::Detail,
            Section::Designated => Phase::AssignDesignated,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::Header => "header",
            Section::Detail => "detail",
            Section::Designated => "designated net assets",
        };
        write!(f, "{name}")
    }
}

/// Why the voucher could not move to the next phase.  The message is shown
/// to the operator as is.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("日付・会計を選択してください")]
    MissingDateOrUnit,

    #[error("日付が正しくありません")]
    InvalidDate,

    #[error("科目を入力（または参照選択）してください。")]
    MissingAccount,

    #[error("金額を入力してください。")]
    MissingAmount,

    #[error("金額が正しくありません。")]
    InvalidAmount,

    #[error("指定純資産科目を選択してください。")]
    MissingDesignatedTarget,

    #[error("{}では実行できません", .0.label())]
    OutOfPhase(Phase),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Era {
    #[default]
    Reiwa,
    Heisei,
}

impl Era {
    pub fn label(self) -> &'static str {
        match self {
            Era::Reiwa => "令和",
            Era::Heisei => "平成",
        }
    }

    /// Gregorian year of year zero of the era (the first year is 1)
    fn base_year(self) -> i32 {
        match self {
            Era::Reiwa => 2018,
            Era::Heisei => 1988,
        }
    }
}

impl FromStr for Era {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "令和" | "R" | "reiwa" => Ok(Era::Reiwa),
            "平成" | "H" | "heisei" => Ok(Era::Heisei),
            _ => Err(Error::Str(format!("Invalid era {s}"))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountingUnit {
    pub code: String,
    pub name: String,
}

impl AccountingUnit {
    pub fn is_empty(&self) -> bool {
        self.code.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitLevel {
    Parent,
    Child,
    Grandchild,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoucherHeader {
    pub era: Era,
    pub year: String,
    pub month: String,
    pub day: String,
    pub voucher_no: String,

    // Accounting unit, as a chain of up to three levels.  Only the parent
    // level is required.
    pub parent_unit: AccountingUnit,
    pub child_unit: AccountingUnit,
    pub grandchild_unit: AccountingUnit,

    pub funding: FundingDesignation,
}

impl VoucherHeader {
    pub fn has_date_fields(&self) -> bool {
        [&self.year, &self.month, &self.day]
            .iter()
            .all(|f| !f.trim().is_empty())
    }

    /// The date as a calendar date.  The first year of an era can be
    /// written 元.
    pub fn date(&self) -> Option<NaiveDate> {
        let year: i32 = match self.year.trim() {
            "元" => 1,
            y => y.parse().ok()?,
        };
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(
            self.era.base_year().checked_add(year)?,
            self.month.trim().parse().ok()?,
            self.day.trim().parse().ok()?,
        )
    }

    /// The deepest accounting unit that is set
    pub fn current_unit(&self) -> Option<&AccountingUnit> {
        [&self.grandchild_unit, &self.child_unit, &self.parent_unit]
            .into_iter()
            .find(|u| !u.is_empty())
    }

    fn unit_mut(&mut self, level: UnitLevel) -> &mut AccountingUnit {
        match level {
            UnitLevel::Parent => &mut self.parent_unit,
            UnitLevel::Child => &mut self.child_unit,
            UnitLevel::Grandchild => &mut self.grandchild_unit,
        }
    }
}

/// One side of the journal line, as entered
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineItem {
    pub code: String,
    pub parent_name: String,
    pub child_name: String,

    // As typed, possibly with thousands separators
    pub amount: String,
}

impl LineItem {
    pub fn amount_value(&self) -> Option<Decimal> {
        let cleaned: String = self
            .amount
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '，')
            .collect();
        Decimal::from_str(&cleaned).ok()
    }
}

/// A value for each side of the journal line
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BySide<T> {
    pub debit: T,
    pub credit: T,
}

impl<T> BySide<T> {
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Debit => &self.debit,
            Side::Credit => &self.credit,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Debit => &mut self.debit,
            Side::Credit => &mut self.credit,
        }
    }
}

/// The state of one voucher being entered.
///
/// Each `submit_*` operation checks the fields of the current phase and
/// either moves to the next phase, or stays and records a message for the
/// operator.  Fields of phases already passed are locked until `go_back`.
///
/// The derived secondary journal is only kept while previewing or
/// confirming.  It is always recomputed from the raw line items.
pub struct VoucherEntry<'d> {
    deriver: &'d JournalDeriver,
    phase: Phase,
    header: VoucherHeader,
    lines: BySide<LineItem>,
    preview: Option<BySide<DerivedAccountView>>,
    designated: BySide<Option<String>>,
    message: String,
}

impl<'d> VoucherEntry<'d> {
    pub fn new(deriver: &'d JournalDeriver) -> Self {
        VoucherEntry {
            deriver,
            phase: Phase::Header,
            header: VoucherHeader::default(),
            lines: BySide::default(),
            preview: None,
            designated: BySide::default(),
            message: String::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn header(&self) -> &VoucherHeader {
        &self.header
    }
    pub fn line(&self, side: Side) -> &LineItem {
        self.lines.get(side)
    }
    pub fn preview(&self) -> Option<&BySide<DerivedAccountView>> {
        self.preview.as_ref()
    }
    pub fn designated(&self, side: Side) -> Option<&str> {
        self.designated.get(side).as_deref()
    }

    /// The validation message for the current phase, empty if none
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the fields of that section can be modified.  Sections of
    /// phases not reached yet remain editable.
    pub fn is_editable(&self, section: Section) -> bool {
        section.phase() >= self.phase
    }

    fn ensure_editable(&self, section: Section) -> Result<(), Error> {
        if self.is_editable(section) {
            Ok(())
        } else {
            Err(Error::Locked {
                section,
                phase: self.phase,
            })
        }
    }

    pub fn set_era(&mut self, era: Era) -> Result<(), Error> {
        self.ensure_editable(Section::Header)?;
        self.header.era = era;
        Ok(())
    }

    pub fn set_date(
        &mut self,
        year: &str,
        month: &str,
        day: &str,
    ) -> Result<(), Error> {
        self.ensure_editable(Section::Header)?;
        self.header.year = year.to_string();
        self.header.month = month.to_string();
        self.header.day = day.to_string();
        Ok(())
    }

    pub fn set_voucher_no(&mut self, voucher_no: &str) -> Result<(), Error> {
        self.ensure_editable(Section::Header)?;
        self.header.voucher_no = voucher_no.to_string();
        Ok(())
    }

    pub fn set_unit(
        &mut self,
        level: UnitLevel,
        code: &str,
        name: &str,
    ) -> Result<(), Error> {
        self.ensure_editable(Section::Header)?;
        let unit = self.header.unit_mut(level);
        unit.code = code.to_string();
        unit.name = name.to_string();
        Ok(())
    }

    pub fn set_funding(
        &mut self,
        funding: FundingDesignation,
    ) -> Result<(), Error> {
        self.ensure_editable(Section::Header)?;
        self.header.funding = funding;
        Ok(())
    }

    /// Set a line as typed by the operator
    pub fn set_line(
        &mut self,
        side: Side,
        code: &str,
        parent_name: &str,
        child_name: &str,
    ) -> Result<(), Error> {
        self.ensure_editable(Section::Detail)?;
        let line = self.lines.get_mut(side);
        line.code = code.to_string();
        line.parent_name = parent_name.to_string();
        line.child_name = child_name.to_string();
        Ok(())
    }

    pub fn set_amount(&mut self, side: Side, amount: &str) -> Result<(), Error> {
        self.ensure_editable(Section::Detail)?;
        self.lines.get_mut(side).amount = amount.to_string();
        Ok(())
    }

    /// Set a line from an account picked in the chart.  The names are
    /// those of the account and of its parent; a root account only has a
    /// child name.
    pub fn pick_account(&mut self, side: Side, code: &str) -> Result<(), Error> {
        self.ensure_editable(Section::Detail)?;
        let found = self
            .deriver
            .taxonomy()
            .find_node_by_code(code)
            .ok_or_else(|| Error::Str(format!("Unknown account {code}")))?;
        let line = self.lines.get_mut(side);
        line.code = code.to_string();
        line.parent_name = found.parent.map(|p| p.full_name()).unwrap_or_default();
        line.child_name = found.node.full_name();
        Ok(())
    }

    /// Choose the designated net assets account for one side
    pub fn select_designated(
        &mut self,
        side: Side,
        code: &str,
    ) -> Result<(), Error> {
        self.ensure_editable(Section::Designated)?;
        if self.phase != Phase::AssignDesignated {
            return Err(Error::Str(format!(
                "Designated net assets are selected in the {} phase",
                Phase::AssignDesignated
            )));
        }
        if !self.needs_designated(side) {
            return Err(Error::Str(format!(
                "The {} line does not need a designated net assets account",
                side.label()
            )));
        }
        let target = self
            .deriver
            .designated_target(code)
            .ok_or_else(|| Error::UnknownDesignatedTarget(code.to_string()))?;
        *self.designated.get_mut(side) = Some(target.code.clone());
        Ok(())
    }

    /// Whether this side must be assigned a designated net assets account
    /// before the voucher can be confirmed.
    pub fn needs_designated(&self, side: Side) -> bool {
        self.header.funding == FundingDesignation::Designated
            && self
                .preview
                .as_ref()
                .is_some_and(|p| p.get(side).is_profit_loss())
    }

    /// Whether the funding designation badge is shown next to the line
    pub fn shows_funding_badge(&self, side: Side) -> bool {
        match self.phase {
            Phase::Header => false,
            Phase::Detail => self
                .deriver
                .taxonomy()
                .is_funding_routing_target(&self.lines.get(side).code),
            Phase::TransferPreview
            | Phase::AssignDesignated
            | Phase::Confirmed => self
                .preview
                .as_ref()
                .is_some_and(|p| p.get(side).is_profit_loss()),
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), ValidationError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ValidationError::OutOfPhase(self.phase))
        }
    }

    fn advance(
        &mut self,
        result: Result<Phase, ValidationError>,
    ) -> Result<Phase, ValidationError> {
        match result {
            Ok(next) => {
                log::debug!("Voucher moves from {} to {next}", self.phase);
                self.phase = next;
                self.message.clear();
                Ok(next)
            }
            Err(e) => {
                log::debug!("Voucher stays in {}: {e}", self.phase);
                self.message = e.to_string();
                Err(e)
            }
        }
    }

    /// Header -> Detail
    pub fn submit_header(&mut self) -> Result<Phase, ValidationError> {
        let result = self.check_header();
        if result.is_ok() && self.header.voucher_no.trim().is_empty() {
            self.header.voucher_no = "1".into();
        }
        self.advance(result)
    }

    fn check_header(&self) -> Result<Phase, ValidationError> {
        self.expect_phase(Phase::Header)?;
        if !self.header.has_date_fields() || self.header.parent_unit.is_empty()
        {
            return Err(ValidationError::MissingDateOrUnit);
        }
        if self.header.date().is_none() {
            return Err(ValidationError::InvalidDate);
        }
        Ok(Phase::Detail)
    }

    /// Detail -> TransferPreview, deriving the secondary journal
    pub fn submit_detail(&mut self) -> Result<Phase, ValidationError> {
        let result = self.check_detail();
        if result.is_ok() {
            self.preview = Some(BySide {
                debit: self.derive_line(Side::Debit),
                credit: self.derive_line(Side::Credit),
            });
        }
        self.advance(result)
    }

    fn check_detail(&self) -> Result<Phase, ValidationError> {
        self.expect_phase(Phase::Detail)?;
        let lines = [&self.lines.debit, &self.lines.credit];
        if lines.iter().any(|l| l.code.trim().is_empty()) {
            return Err(ValidationError::MissingAccount);
        }
        if lines.iter().any(|l| l.amount.trim().is_empty()) {
            return Err(ValidationError::MissingAmount);
        }
        if lines.iter().any(|l| l.amount_value().is_none()) {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(Phase::TransferPreview)
    }

    /// Lines that are not profit/loss keep the names entered by the
    /// operator.
    fn derive_line(&self, side: Side) -> DerivedAccountView {
        let line = self.lines.get(side);
        let mut view = self.deriver.derive(
            line.code.trim(),
            side,
            Some(self.header.funding),
        );
        if !view.is_profit_loss() {
            view.parent_name.clone_from(&line.parent_name);
            view.child_name.clone_from(&line.child_name);
        }
        view
    }

    /// TransferPreview -> AssignDesignated for designated funds, or
    /// directly to Confirmed.
    pub fn submit_preview(&mut self) -> Result<Phase, ValidationError> {
        let result = self.expect_phase(Phase::TransferPreview).map(|_| {
            match self.header.funding {
                FundingDesignation::Designated => Phase::AssignDesignated,
                FundingDesignation::General => Phase::Confirmed,
            }
        });
        self.advance(result)
    }

    /// AssignDesignated -> Confirmed
    pub fn submit_designated_assignment(
        &mut self,
    ) -> Result<Phase, ValidationError> {
        let result = self.check_designated();
        self.advance(result)
    }

    fn check_designated(&self) -> Result<Phase, ValidationError> {
        self.expect_phase(Phase::AssignDesignated)?;
        let missing = Side::BOTH.into_iter().any(|side| {
            self.needs_designated(side)
                && self
                    .designated
                    .get(side)
                    .as_deref()
                    .map_or(true, str::is_empty)
        });
        if missing {
            return Err(ValidationError::MissingDesignatedTarget);
        }
        Ok(Phase::Confirmed)
    }

    /// The "Enter" key: submit the current phase
    pub fn submit(&mut self) -> Result<Phase, ValidationError> {
        match self.phase {
            Phase::Header => self.submit_header(),
            Phase::Detail => self.submit_detail(),
            Phase::TransferPreview => self.submit_preview(),
            Phase::AssignDesignated => self.submit_designated_assignment(),
            Phase::Confirmed => Ok(Phase::Confirmed),
        }
    }

    /// Step back.
    ///
    /// From the preview or the designated assignment, return to the line
    /// items and drop everything derived from them.  From the line items,
    /// return to the header.  Once confirmed, start a new voucher.
    pub fn go_back(&mut self) -> Phase {
        let previous = self.phase;
        match self.phase {
            Phase::Header => {}
            Phase::Detail => self.phase = Phase::Header,
            Phase::TransferPreview | Phase::AssignDesignated => {
                self.clear_preview();
                self.phase = Phase::Detail;
            }
            Phase::Confirmed => {
                self.header = VoucherHeader::default();
                self.lines = BySide::default();
                self.clear_preview();
                self.phase = Phase::Header;
            }
        }
        self.message.clear();
        log::debug!("Voucher goes back from {previous} to {}", self.phase);
        self.phase
    }

    fn clear_preview(&mut self) {
        self.preview = None;
        self.designated = BySide::default();
    }
}

#[cfg(test)]
mod test {
    use crate::account_kinds::AccountKind;
    use crate::derivation::{JournalDeriver, Side};
    use crate::errors::Error;
    use crate::funding::FundingDesignation;
    use crate::vouchers::{
        Era, Phase, Section, UnitLevel, ValidationError, VoucherEntry,
        VoucherHeader,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at_header(d: &JournalDeriver) -> VoucherEntry<'_> {
        let mut v = VoucherEntry::new(d);
        v.set_date("6", "4", "1").unwrap();
        v.set_unit(UnitLevel::Parent, "1", "法人会計").unwrap();
        v
    }

    fn at_detail(
        d: &JournalDeriver,
        funding: FundingDesignation,
    ) -> VoucherEntry<'_> {
        let mut v = at_header(d);
        v.set_funding(funding).unwrap();
        assert_eq!(v.submit_header(), Ok(Phase::Detail));
        v
    }

    fn fill_lines(v: &mut VoucherEntry, debit: &str, credit: &str) {
        v.pick_account(Side::Debit, debit).unwrap();
        v.pick_account(Side::Credit, credit).unwrap();
        v.set_amount(Side::Debit, "1,000").unwrap();
        v.set_amount(Side::Credit, "1,000").unwrap();
    }

    #[test]
    fn test_header_requires_unit() {
        let d = JournalDeriver::default();
        let mut v = VoucherEntry::new(&d);
        v.set_date("6", "4", "1").unwrap();
        assert_eq!(v.submit_header(), Err(ValidationError::MissingDateOrUnit));
        assert_eq!(v.phase(), Phase::Header);
        assert_eq!(v.message(), "日付・会計を選択してください");
    }

    #[test]
    fn test_header_requires_date() {
        let d = JournalDeriver::default();
        let mut v = at_header(&d);
        v.set_date("", "4", "1").unwrap();
        for _ in 0..2 {
            assert!(v.submit_header().is_err());
            assert_eq!(v.phase(), Phase::Header);
            assert!(!v.message().is_empty());
        }

        v.set_date("6", "2", "30").unwrap();
        assert_eq!(v.submit_header(), Err(ValidationError::InvalidDate));

        // Years past the calendar range are rejected, not wrapped
        v.set_date("2147483647", "4", "1").unwrap();
        assert_eq!(v.submit_header(), Err(ValidationError::InvalidDate));
        assert_eq!(v.phase(), Phase::Header);
        assert_eq!(v.message(), "日付が正しくありません");
    }

    #[test]
    fn test_header_defaults_voucher_no() {
        let d = JournalDeriver::default();
        let mut v = at_header(&d);
        assert_eq!(v.submit_header(), Ok(Phase::Detail));
        assert_eq!(v.header().voucher_no, "1");
        assert!(v.message().is_empty());

        let mut v = at_header(&d);
        v.set_voucher_no("42").unwrap();
        v.submit_header().unwrap();
        assert_eq!(v.header().voucher_no, "42");
    }

    #[test]
    fn test_detail_requires_amount() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::General);
        v.pick_account(Side::Debit, "332500").unwrap();
        v.pick_account(Side::Credit, "010111").unwrap();
        v.set_amount(Side::Debit, "1000").unwrap();
        assert_eq!(v.submit_detail(), Err(ValidationError::MissingAmount));
        assert_eq!(v.phase(), Phase::Detail);
        assert!(v.preview().is_none());

        v.set_amount(Side::Credit, "abc").unwrap();
        assert_eq!(v.submit_detail(), Err(ValidationError::InvalidAmount));

        v.set_line(Side::Credit, "", "", "").unwrap();
        assert_eq!(v.submit_detail(), Err(ValidationError::MissingAccount));
        assert_eq!(v.message(), "科目を入力（または参照選択）してください。");
    }

    #[test]
    fn test_general_funding_confirms() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::General);
        fill_lines(&mut v, "332500", "010111");
        assert_eq!(v.submit(), Ok(Phase::TransferPreview));

        let p = v.preview().unwrap();
        assert_eq!(p.debit.code, "762500");
        assert_eq!(p.debit.parent_name, "事業費");
        assert_eq!(p.credit.code, "010111");
        assert_eq!(p.credit.kind, AccountKind::Other);
        assert_eq!(p.credit.child_name, "現金");
        assert_eq!(p.credit.parent_name, "現金預金");

        assert_eq!(v.submit(), Ok(Phase::Confirmed));
        assert_eq!(v.submit(), Ok(Phase::Confirmed));
    }

    #[test]
    fn test_designated_target_required() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::Designated);
        fill_lines(&mut v, "332500", "010111");
        v.submit_detail().unwrap();
        assert!(v.preview().unwrap().debit.is_profit_loss());
        assert_eq!(v.submit_preview(), Ok(Phase::AssignDesignated));

        assert_eq!(
            v.submit_designated_assignment(),
            Err(ValidationError::MissingDesignatedTarget)
        );
        assert_eq!(v.phase(), Phase::AssignDesignated);
        assert!(!v.message().is_empty());

        // Only profit/loss lines get a designated account
        assert!(v.select_designated(Side::Credit, "100101").is_err());
        assert!(matches!(
            v.select_designated(Side::Debit, "105000"),
            Err(Error::UnknownDesignatedTarget(_))
        ));

        v.select_designated(Side::Debit, "100101").unwrap();
        assert_eq!(v.designated(Side::Debit), Some("100101"));
        assert_eq!(v.submit_designated_assignment(), Ok(Phase::Confirmed));
        assert!(v.message().is_empty());
    }

    #[test]
    fn test_back_from_preview_keeps_lines() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::Designated);
        fill_lines(&mut v, "960100", "010111");
        let before = (v.line(Side::Debit).clone(), v.line(Side::Credit).clone());

        v.submit_detail().unwrap();
        assert_eq!(v.preview().unwrap().debit.code, "109100");
        assert_eq!(v.go_back(), Phase::Detail);
        assert!(v.preview().is_none());
        assert_eq!(v.line(Side::Debit), &before.0);
        assert_eq!(v.line(Side::Credit), &before.1);

        // Back from the assignment also drops the selections
        v.submit_detail().unwrap();
        v.submit_preview().unwrap();
        v.select_designated(Side::Debit, "100301").unwrap();
        assert_eq!(v.go_back(), Phase::Detail);
        assert_eq!(v.designated(Side::Debit), None);
        assert_eq!(v.line(Side::Debit), &before.0);
    }

    #[test]
    fn test_back_from_confirmed_starts_new_voucher() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::General);
        fill_lines(&mut v, "332500", "010111");
        v.submit_detail().unwrap();
        v.submit_preview().unwrap();

        assert_eq!(v.go_back(), Phase::Header);
        assert_eq!(v.header(), &VoucherHeader::default());
        assert!(v.line(Side::Debit).code.is_empty());
        assert!(v.preview().is_none());

        assert_eq!(v.go_back(), Phase::Header);
    }

    #[test]
    fn test_back_from_detail_keeps_header() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::General);
        v.set_amount(Side::Debit, "500").unwrap();
        assert_eq!(v.go_back(), Phase::Header);
        assert_eq!(v.header().voucher_no, "1");
        assert_eq!(v.line(Side::Debit).amount, "500");
    }

    #[test]
    fn test_locked_sections() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::General);
        assert!(!v.is_editable(Section::Header));
        assert!(v.is_editable(Section::Detail));
        assert!(v.is_editable(Section::Designated));
        assert!(matches!(
            v.set_voucher_no("2"),
            Err(Error::Locked {
                section: Section::Header,
                phase: Phase::Detail
            })
        ));

        fill_lines(&mut v, "332500", "010111");
        v.submit_detail().unwrap();
        assert!(v.set_amount(Side::Debit, "1").is_err());
        assert!(v.pick_account(Side::Debit, "402500").is_err());
        assert_eq!(v.line(Side::Debit).amount, "1,000");

        v.submit_preview().unwrap();
        assert!(!v.is_editable(Section::Designated));
    }

    #[test]
    fn test_out_of_phase() {
        let d = JournalDeriver::default();
        let mut v = VoucherEntry::new(&d);
        assert_eq!(
            v.submit_detail(),
            Err(ValidationError::OutOfPhase(Phase::Header))
        );
        assert_eq!(v.phase(), Phase::Header);
        assert!(v.submit_preview().is_err());
        assert!(v.submit_designated_assignment().is_err());
    }

    #[test]
    fn test_funding_badge() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::General);
        fill_lines(&mut v, "960100", "010111");
        assert!(v.shows_funding_badge(Side::Debit));
        assert!(!v.shows_funding_badge(Side::Credit));

        v.submit_detail().unwrap();
        assert!(v.shows_funding_badge(Side::Debit));
        assert!(!v.shows_funding_badge(Side::Credit));
        assert_eq!(v.preview().unwrap().debit.code, "109200");
    }

    #[test]
    fn test_pick_account() {
        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::General);
        v.pick_account(Side::Debit, "01013215").unwrap();
        let line = v.line(Side::Debit);
        assert_eq!(line.parent_name, "普通預金 三井住友銀行 新宿支店");
        assert_eq!(
            line.child_name,
            "普通預金 三井住友銀行 新宿支店 周年事業積立資産"
        );

        v.pick_account(Side::Credit, "630000").unwrap();
        assert_eq!(v.line(Side::Credit).parent_name, "");
        assert_eq!(v.line(Side::Credit).child_name, "受取寄付金");

        assert!(v.pick_account(Side::Credit, "999999").is_err());
    }

    #[test]
    fn test_dates_and_amounts() {
        let mut h = VoucherHeader {
            year: "6".into(),
            month: "4".into(),
            day: "1".into(),
            ..VoucherHeader::default()
        };
        assert_eq!(h.date(), NaiveDate::from_ymd_opt(2024, 4, 1));
        h.era = Era::Heisei;
        h.year = "元".into();
        assert_eq!(h.date(), NaiveDate::from_ymd_opt(1989, 4, 1));
        h.year = "0".into();
        assert_eq!(h.date(), None);
        h.year = i32::MAX.to_string();
        assert_eq!(h.date(), None);

        let d = JournalDeriver::default();
        let mut v = at_detail(&d, FundingDesignation::General);
        v.set_amount(Side::Debit, " 1,234.5 ").unwrap();
        assert_eq!(v.line(Side::Debit).amount_value(), Some(dec!(1234.5)));
    }

    #[test]
    fn test_current_unit() {
        let d = JournalDeriver::default();
        let mut v = at_header(&d);
        assert_eq!(v.header().current_unit().unwrap().name, "法人会計");
        v.set_unit(UnitLevel::Child, "11", "公益目的事業会計").unwrap();
        assert_eq!(v.header().current_unit().unwrap().code, "11");
    }
}
