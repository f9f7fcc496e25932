use anyhow::{Context, Result};
use clap::{arg, Arg, ArgMatches};
use koeki_lib::account_types::AccountTypeCollection;
use koeki_lib::funding::FundingDesignation;
use koeki_lib::taxonomy::Taxonomy;
use std::path::PathBuf;

pub struct GlobalSettings {
    // Load the chart from this file rather than using the standard one
    pub chart: Option<PathBuf>,

    // None when not given on the command line
    pub funding: Option<FundingDesignation>,

    pub verbose: bool,
    pub table: crate::tables::Settings,
    pub types: AccountTypeCollection,

    // Major types used in the chart but missing from the type master
    pub unknown_types: Vec<String>,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--chart [FILE] "Load the chart of accounts from a JSON file")
                .global(true),
            arg!(--funding [FUNDING] "Funding designation (一般 or 指定)")
                .global(true),
            arg!(-v --verbose "Show debug logs").global(true),
        ]
    }

    /// Create the settings from the command line arguments.  Some fields
    /// can only be computed once the chart has been loaded.
    pub fn new(args: &ArgMatches) -> Result<Self> {
        let funding = args
            .get_one::<String>("funding")
            .map(|f| f.parse::<FundingDesignation>())
            .transpose()?;
        Ok(GlobalSettings {
            chart: args.get_one::<String>("chart").map(PathBuf::from),
            funding,
            verbose: args.get_flag("verbose"),
            table: crate::tables::Settings {
                colsep: "│".to_string(),
                indent_size: 2,
            },
            types: AccountTypeCollection::default(),
            unknown_types: Vec::new(),
        })
    }

    pub fn load_chart(&self) -> Result<Taxonomy> {
        match &self.chart {
            None => Ok(Taxonomy::default()),
            Some(path) => Taxonomy::load(path).with_context(|| {
                format!("Cannot read chart of accounts {}", path.display())
            }),
        }
    }

    /// Compute the remaining fields, after loading the chart.
    pub fn postprocess(&mut self, taxonomy: &Taxonomy) {
        let mut unknown: Vec<String> = taxonomy
            .iter_all()
            .map(|(_, n)| n.meta.major_type_code.as_str())
            .filter(|code| self.types.find(code).is_none())
            .map(str::to_string)
            .collect();
        unknown.sort();
        unknown.dedup();
        for code in &unknown {
            log::warn!("Unknown account type {code} in the chart");
        }
        self.unknown_types = unknown;
    }
}
