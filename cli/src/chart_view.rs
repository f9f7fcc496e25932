use crate::tables::{Column, Table, Width};
use anyhow::Result;
use clap::{arg, Arg, ArgMatches};
use itertools::Itertools;
use koeki_lib::account_types::AccountTypeCollection;
use koeki_lib::account_views::{by_major_type, search, SearchView};
use koeki_lib::taxonomy::Taxonomy;

pub struct Settings {
    pub view: SearchView,

    // Only show accounts of this major type
    pub major_type: Option<String>,

    // Only show accounts whose code or name contain this text
    pub search: Option<String>,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--view [VIEW] "Which accounts to show")
                .value_parser(SearchView::ALL.map(SearchView::id))
                .default_value("all"),
            arg!(--type [TYPE] "Only show accounts of this major type"),
            arg!(--search [TEXT] "Only show accounts matching this text"),
        ]
    }

    pub fn new(args: &ArgMatches) -> Result<Self> {
        Ok(Settings {
            view: match args.get_one::<String>("view") {
                None => SearchView::default(),
                Some(v) => v.parse()?,
            },
            major_type: args.get_one::<String>("type").cloned(),
            search: args.get_one::<String>("search").cloned(),
        })
    }
}

struct Row {
    code: String,
    name: String,

    // Group accounts: with children, or with a block-closing code
    aggregate: bool,

    kind: &'static str,
    major_type: String,
    links: String,
}

/// Show the chart of accounts as a tree, one table row per account
pub fn chart_view(
    taxonomy: &Taxonomy,
    types: &AccountTypeCollection,
    settings: &Settings,
    table_settings: &crate::tables::Settings,
    width: usize,
) -> String {
    let mut shown = settings.view.build(taxonomy);
    if let Some(t) = &settings.major_type {
        shown = by_major_type(&shown, t);
    }
    if let Some(q) = &settings.search {
        shown = search(&shown, q);
    }

    let code = |row: &Row| row.code.clone();
    let name = |row: &Row| row.name.clone();
    let aggregate =
        |row: &Row| if row.aggregate { "計" } else { "" }.to_string();
    let kind = |row: &Row| row.kind.to_string();
    let major_type = |row: &Row| row.major_type.clone();
    let links = |row: &Row| row.links.clone();
    let columns = vec![
        Column::new("Code", &code),
        Column::new("Name", &name)
            .show_indent()
            .with_width(Width::Shrink(12)),
        Column::new("Sum", &aggregate),
        Column::new("Kind", &kind),
        Column::new("Type", &major_type).with_width(Width::Shrink(8)),
        Column::new("Expands to", &links).with_width(Width::Shrink(6)),
    ];
    let mut table = Table::new(columns, table_settings).with_col_headers();

    for (idx, cat) in shown.list_categories().iter().enumerate() {
        if idx > 0 {
            table.add_separator();
        }
        table.add_row(
            &Row {
                code: String::new(),
                name: cat.label.clone(),
                aggregate: false,
                kind: cat.category.kind().short_name(),
                major_type: String::new(),
                links: String::new(),
            },
            0,
        );
        cat.nodes.traverse(
            |v| {
                let t = &v.node.meta.major_type_code;
                table.add_row(
                    &Row {
                        code: v.node.code().unwrap_or_default().to_string(),
                        name: v.node.full_name(),
                        aggregate: v.node.is_aggregate(),
                        kind: cat.category.kind().short_name(),
                        major_type: match types.label(t) {
                            Some(label) => format!("{t} {label}"),
                            None => t.clone(),
                        },
                        links: v.node.meta.expands_to_codes.iter().join(","),
                    },
                    v.depth + 1,
                );
            },
            true,
        );
    }
    table.to_string(width)
}

struct Classified {
    code: String,
    category: &'static str,
    kind: &'static str,
    badge: bool,
    name: String,
}

/// Show the kind of each account code, and whether journal lines on it
/// carry the funding designation badge.
pub fn classify_view(
    taxonomy: &Taxonomy,
    codes: &[String],
    table_settings: &crate::tables::Settings,
    width: usize,
) -> String {
    let code = |row: &Classified| row.code.clone();
    let category = |row: &Classified| row.category.to_string();
    let kind = |row: &Classified| row.kind.to_string();
    let badge =
        |row: &Classified| if row.badge { "○" } else { "" }.to_string();
    let name = |row: &Classified| row.name.clone();
    let columns = vec![
        Column::new("Code", &code),
        Column::new("Category", &category),
        Column::new("Kind", &kind),
        Column::new("Funding", &badge),
        Column::new("Name", &name).with_width(Width::Shrink(12)),
    ];
    let mut table = Table::new(columns, table_settings).with_col_headers();
    for c in codes {
        let found = taxonomy.find_node_by_code(c);
        table.add_row(
            &Classified {
                code: c.clone(),
                category: found.as_ref().map_or("", |f| f.category.label()),
                kind: taxonomy.classify(c).short_name(),
                badge: taxonomy.is_funding_routing_target(c),
                name: found.map(|f| f.node.full_name()).unwrap_or_default(),
            },
            0,
        );
    }
    table.to_string(width)
}
