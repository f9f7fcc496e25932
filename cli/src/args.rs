use crate::global_settings::GlobalSettings;
use clap::{arg, Arg, Command};

pub(crate) fn build_cli() -> Command {
    Command::new("koeki")
        .version("0.1")
        .about("Chart of accounts and secondary journal for public interest corporations")
        .subcommand_required(true)
        .subcommand_precedence_over_arg(true)
        .flatten_help(true)
        .arg_required_else_help(true)
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("tree")
                .about("Show the chart of accounts")
                .args(crate::chart_view::Settings::cli()),
        )
        .subcommand(
            Command::new("classify")
                .about("Show the kind of each account")
                .arg(arg!(<CODE> ... "Account codes")),
        )
        .subcommand(
            Command::new("derive")
                .about("Show the secondary journal for account codes")
                .arg(arg!(<CODE> ... "Account codes as entered"))
                .arg(
                    arg!(--side [SIDE] "Side of the journal line")
                        .value_parser(["debit", "credit"])
                        .default_value("debit"),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Route the valuation differential by funding source")
                .arg(arg!(<CODE> "Base account code")),
        )
        .subcommand(
            Command::new("check")
                .about("Report duplicate codes and missing linkages"),
        )
        .subcommand(
            Command::new("export-chart")
                .about("Write the chart of accounts as JSON")
                .arg(arg!(-o --output [FILE] "Name of output file")),
        )
        .subcommand(
            Command::new("voucher")
                .about("Enter a voucher, one command per line")
                .arg(arg!(--script [FILE] "Read commands from a file instead of stdin")),
        )
        .subcommand(
            // Use    eval "$(koeki completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;

    #[test]
    fn test_cli_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let m = build_cli()
            .try_get_matches_from([
                "koeki", "derive", "960100", "--funding", "指定", "-v",
            ])
            .unwrap();
        assert_eq!(
            m.get_one::<String>("funding").map(String::as_str),
            Some("指定")
        );
        assert!(m.get_flag("verbose"));
        let (name, sub) = m.subcommand().unwrap();
        assert_eq!(name, "derive");
        assert_eq!(
            sub.get_one::<String>("side").map(String::as_str),
            Some("debit")
        );
    }
}
