mod compare;
mod filters;

pub use compare::{
    build_table, CompareError, ComparisonAttribute, ComparisonColumn, ComparisonRow,
    ComparisonSelection, ComparisonTable, ComparisonValue,
};
pub use filters::{filter_programs, matches_filter, sort_matches, ProgramFilter, SortKey};
