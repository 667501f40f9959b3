use serde::Deserialize;

use super::super::domain::{MaturityTier, ProgramRecord};
use super::super::scoring::MatchResult;

/// Attribute filters applied to a program list. All present clauses must
/// hold; the search clause alone is an OR over the text columns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgramFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub maturity: Option<MaturityTier>,
    pub geography: Option<String>,
    pub partner_type: Option<String>,
}

impl ProgramFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none()
            && self.category.is_none()
            && self.maturity.is_none()
            && self.geography.is_none()
            && self.partner_type.is_none()
    }
}

pub fn matches_filter(program: &ProgramRecord, filter: &ProgramFilter) -> bool {
    if let Some(term) = &filter.search {
        let term = term.to_lowercase();
        let hit = program.vendor.to_lowercase().contains(&term)
            || program.category.to_lowercase().contains(&term)
            || program.summary.to_lowercase().contains(&term);
        if !hit {
            return false;
        }
    }

    if let Some(category) = &filter.category {
        if program.category != category {
            return false;
        }
    }

    if let Some(maturity) = filter.maturity {
        if program.maturity != maturity {
            return false;
        }
    }

    if let Some(region) = &filter.geography {
        if !program.geography.iter().any(|value| value == region) {
            return false;
        }
    }

    if let Some(partner_type) = &filter.partner_type {
        if !program.partner_types.iter().any(|value| value == partner_type) {
            return false;
        }
    }

    true
}

pub fn filter_programs<'a>(
    programs: &'a [ProgramRecord],
    filter: &ProgramFilter,
) -> Vec<&'a ProgramRecord> {
    programs
        .iter()
        .filter(|program| matches_filter(program, filter))
        .collect()
}

/// Sortable match-list columns. Every key sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Score,
    Maturity,
    Health,
    MarketPresence,
}

/// Reorder matches by the chosen column, best first. Stable, so entries
/// scoring equal keep their prior relative order.
pub fn sort_matches(matches: &mut [MatchResult], key: SortKey) {
    match key {
        SortKey::Score => matches.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortKey::Maturity => {
            matches.sort_by(|a, b| b.program.maturity.rank().cmp(&a.program.maturity.rank()))
        }
        SortKey::Health => matches.sort_by(|a, b| b.program.health.cmp(&a.program.health)),
        SortKey::MarketPresence => matches.sort_by(|a, b| {
            b.program
                .market_presence
                .cmp(&a.program.market_presence)
        }),
    }
}
