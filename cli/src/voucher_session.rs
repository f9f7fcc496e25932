//! Entering vouchers from the terminal, one command per line.
//!
//! Every command maps to one action of the voucher entry screen, so a
//! script of commands replays what an operator would do.

use anyhow::{bail, Context, Result};
use koeki_lib::derivation::{JournalDeriver, Side};
use koeki_lib::funding::FundingDesignation;
use koeki_lib::vouchers::{Phase, UnitLevel, VoucherEntry};
use std::fmt::Write as _;
use std::io::{BufRead, Write};

const HELP: &str = "\
date [ERA] YEAR MONTH DAY     set the date (ERA is 令和 or 平成)
no NUMBER                    set the voucher number
unit LEVEL CODE [NAME]       set the accounting unit (parent, child, grandchild)
funding 一般|指定             set the funding designation
debit CODE [AMOUNT]          set the debit line
credit CODE [AMOUNT]         set the credit line
amount SIDE AMOUNT           set the amount of one line
designate SIDE CODE          choose the designated net assets account
targets                      list the designated net assets accounts
enter                        move to the next step
back                         return to the previous step
show                         show the voucher
quit                         leave
";

pub enum LoopControl {
    Continue,
    Exit,
}

pub struct VoucherSession<'d> {
    deriver: &'d JournalDeriver,
    entry: VoucherEntry<'d>,

    // Funding designation of each new voucher
    funding: FundingDesignation,

    // Number of vouchers confirmed so far
    confirmed: usize,
}

impl<'d> VoucherSession<'d> {
    pub fn new(
        deriver: &'d JournalDeriver,
        funding: FundingDesignation,
    ) -> Result<Self> {
        let mut entry = VoucherEntry::new(deriver);
        entry.set_funding(funding)?;
        Ok(Self {
            deriver,
            entry,
            funding,
            confirmed: 0,
        })
    }

    pub fn confirmed(&self) -> usize {
        self.confirmed
    }

    /// Execute all commands from input.  Errors in a command are reported
    /// and the next command is executed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let mut out = String::new();
            let control = match self.handle_line(&line, &mut out) {
                Ok(control) => control,
                Err(e) => {
                    writeln!(out, "error: {e:#}")?;
                    LoopControl::Continue
                }
            };
            output.write_all(out.as_bytes())?;
            if let LoopControl::Exit = control {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_line(
        &mut self,
        line: &str,
        out: &mut String,
    ) -> Result<LoopControl> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(LoopControl::Continue);
        }
        let tokens = shlex::split(line)
            .with_context(|| format!("Cannot parse {line:?}"))?;
        let Some((command, args)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let command = command.to_lowercase();
        log::debug!("voucher command {command} {args:?}");

        match (command.as_str(), args.as_slice()) {
            ("date", [year, month, day]) => {
                self.entry.set_date(year, month, day)?;
            }
            ("date", [era, year, month, day]) => {
                self.entry.set_era(era.parse()?)?;
                self.entry.set_date(year, month, day)?;
            }
            ("no", [number]) => self.entry.set_voucher_no(number)?,
            ("unit", [level, code]) => {
                self.entry.set_unit(parse_level(level)?, code, "")?;
            }
            ("unit", [level, code, name @ ..]) => {
                self.entry.set_unit(parse_level(level)?, code, &name.join(" "))?;
            }
            ("funding", [funding]) => self.entry.set_funding(funding.parse()?)?,
            ("debit" | "credit" | "借方" | "貸方", [code, amount @ ..]) => {
                let side: Side = command.parse()?;
                match amount {
                    [] => self.set_account(side, code)?,
                    [amount] => {
                        self.set_account(side, code)?;
                        self.entry.set_amount(side, amount)?;
                    }
                    _ => bail!("Too many arguments in {line:?}"),
                }
            }
            ("amount", [side, amount]) => {
                self.entry.set_amount(side.parse()?, amount)?;
            }
            ("designate", [side, code]) => {
                self.entry.select_designated(side.parse()?, code)?;
            }
            ("targets", []) => {
                for t in self.deriver.designated_targets() {
                    writeln!(out, "{} {}", t.code, t.name)?;
                }
            }
            ("enter", []) => self.enter(out)?,
            ("back", []) => {
                let before = self.entry.phase();
                let phase = self.entry.go_back();
                if before == Phase::Confirmed {
                    self.entry.set_funding(self.funding)?;
                }
                writeln!(out, "[{}]", phase.label())?;
            }
            ("show", []) => self.show(out)?,
            ("help", []) => out.push_str(HELP),
            ("quit" | "exit", []) => return Ok(LoopControl::Exit),
            _ => bail!("Invalid command {line:?}, try help"),
        }
        Ok(LoopControl::Continue)
    }

    /// Use the names from the chart when the code is known, otherwise
    /// keep the code as typed.
    fn set_account(&mut self, side: Side, code: &str) -> Result<()> {
        if self.entry.pick_account(side, code).is_err() {
            log::info!("{code} is not in the chart, names left empty");
            self.entry.set_line(side, code, "", "")?;
        }
        Ok(())
    }

    fn enter(&mut self, out: &mut String) -> Result<()> {
        let before = self.entry.phase();
        match self.entry.submit() {
            Ok(Phase::Confirmed) if before != Phase::Confirmed => {
                self.confirmed += 1;
                self.show(out)?;
            }
            Ok(_) => self.show(out)?,
            Err(e) => writeln!(out, "{e}")?,
        }
        Ok(())
    }

    fn show(&self, out: &mut String) -> Result<()> {
        let header = self.entry.header();
        writeln!(out, "[{}]", self.entry.phase().label())?;
        writeln!(
            out,
            "{} {}年 {}月 {}日  No.{}  {}  {}",
            header.era.label(),
            header.year,
            header.month,
            header.day,
            header.voucher_no,
            header
                .current_unit()
                .map(|u| format!("{} {}", u.code, u.name).trim().to_string())
                .unwrap_or_default(),
            header.funding.label(),
        )?;
        for side in Side::BOTH {
            let line = self.entry.line(side);
            let badge = if self.entry.shows_funding_badge(side) {
                format!(" [{}]", header.funding.label())
            } else {
                String::new()
            };
            writeln!(
                out,
                "{} {} {} {} {}{badge}",
                side.label(),
                line.code,
                line.parent_name,
                line.child_name,
                line.amount,
            )?;
        }
        if let Some(preview) = self.entry.preview() {
            writeln!(out, "二次仕訳")?;
            for side in Side::BOTH {
                let view = preview.get(side);
                writeln!(
                    out,
                    "{} {} {} {}",
                    side.label(),
                    view.code,
                    view.parent_name,
                    view.child_name,
                )?;
                if let Some(code) = self.entry.designated(side) {
                    writeln!(out, "  指定純資産 {code}")?;
                }
            }
        }
        if !self.entry.message().is_empty() {
            writeln!(out, "{}", self.entry.message())?;
        }
        Ok(())
    }
}

fn parse_level(level: &str) -> Result<UnitLevel> {
    match level {
        "parent" | "親" => Ok(UnitLevel::Parent),
        "child" | "子" => Ok(UnitLevel::Child),
        "grandchild" | "孫" => Ok(UnitLevel::Grandchild),
        _ => bail!("Invalid accounting unit level {level}"),
    }
}
