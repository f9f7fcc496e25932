pub mod account_categories;
pub mod account_kinds;
pub mod account_types;
pub mod account_views;
pub mod accounts;
pub mod chart_files;
pub mod classifier;
pub mod derivation;
pub mod errors;
pub mod funding;
pub mod mappings;
pub mod standard_chart;
pub mod taxonomy;
pub mod trees;
pub mod vouchers;
