mod args;
mod chart_view;
mod derive_view;
mod global_settings;
pub mod tables;
mod voucher_session;

use crate::args::build_cli;
use crate::chart_view::{chart_view, classify_view};
use crate::derive_view::{check_view, derive_view, split_view};
use crate::global_settings::GlobalSettings;
use crate::voucher_session::VoucherSession;
use anyhow::{Context, Result};
use clap::ArgMatches;
use console::Term;
use env_logger::Env;
use koeki_lib::derivation::{JournalDeriver, Side};
use koeki_lib::funding::FundingRouting;
use log::LevelFilter;
use std::fs::File;
use std::io::{stdin, stdout, BufReader};
use std::path::Path;

fn codes(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>("CODE")
        .map(|c| c.cloned().collect())
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = build_cli().get_matches();
    let mut settings = GlobalSettings::new(&args)?;

    let mut logger =
        env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if settings.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Some(("completions", sub)) = args.subcommand() {
        if let Some(shell) =
            sub.get_one::<clap_complete_command::Shell>("shell")
        {
            shell.generate(&mut build_cli(), &mut stdout());
        }
        return Ok(());
    }

    let taxonomy = settings.load_chart()?;
    settings.postprocess(&taxonomy);
    let deriver = JournalDeriver::new(taxonomy, FundingRouting::default());
    let width = Term::stdout().size().1 as usize;

    match args.subcommand() {
        Some(("tree", sub)) => {
            let view_settings = crate::chart_view::Settings::new(sub)?;
            println!(
                "{}",
                chart_view(
                    deriver.taxonomy(),
                    &settings.types,
                    &view_settings,
                    &settings.table,
                    width,
                )
            );
        }
        Some(("classify", sub)) => {
            println!(
                "{}",
                classify_view(
                    deriver.taxonomy(),
                    &codes(sub),
                    &settings.table,
                    width
                )
            );
        }
        Some(("derive", sub)) => {
            let side: Side = match sub.get_one::<String>("side") {
                None => Side::Debit,
                Some(s) => s.parse()?,
            };
            println!(
                "{}",
                derive_view(
                    &deriver,
                    &codes(sub),
                    side,
                    settings.funding,
                    &settings.table,
                    width,
                )
            );
        }
        Some(("split", sub)) => {
            let base = sub
                .get_one::<String>("CODE")
                .map_or("", String::as_str);
            print!("{}", split_view(deriver.routing(), base, settings.funding));
        }
        Some(("check", _)) => {
            let (report, count) = check_view(deriver.taxonomy());
            print!("{report}");
            log::info!("{count} problem(s) found in the chart of accounts");
        }
        Some(("export-chart", sub)) => match sub.get_one::<String>("output") {
            Some(path) => deriver.taxonomy().save(Path::new(path))?,
            None => println!("{}", deriver.taxonomy().to_json()?),
        },
        Some(("voucher", sub)) => {
            let mut session = VoucherSession::new(
                &deriver,
                settings.funding.unwrap_or_default(),
            )?;
            match sub.get_one::<String>("script") {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("Cannot open {path}"))?;
                    session.run(BufReader::new(file), &mut stdout())?;
                }
                None => session.run(stdin().lock(), &mut stdout())?,
            }
            log::info!("{} voucher(s) confirmed", session.confirmed());
        }
        _ => {}
    }
    Ok(())
}
