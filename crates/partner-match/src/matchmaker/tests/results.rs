use super::common::*;
use crate::matchmaker::domain::{AssessmentAnswers, MaturityTier};
use crate::matchmaker::results::{
    build_table, filter_programs, sort_matches, CompareError, ComparisonAttribute,
    ComparisonSelection, ComparisonValue, ProgramFilter, SortKey,
};

fn ids(programs: &[&crate::matchmaker::ProgramRecord]) -> Vec<&'static str> {
    programs.iter().map(|program| program.id.as_str()).collect()
}

#[test]
fn search_matches_any_text_column_case_insensitively() {
    let catalog = catalog();
    let filter = ProgramFilter {
        search: Some("PAYMENT".to_string()),
        ..ProgramFilter::default()
    };

    // "payment" only appears in the Stripe summary.
    let found = filter_programs(catalog.programs(), &filter);
    assert_eq!(ids(&found), vec!["stripe-1"]);
}

#[test]
fn search_covers_vendor_and_category() {
    let catalog = catalog();

    let by_vendor = ProgramFilter {
        search: Some("hubspot".to_string()),
        ..ProgramFilter::default()
    };
    assert_eq!(ids(&filter_programs(catalog.programs(), &by_vendor)), vec!["hubspot-1"]);

    let by_category = ProgramFilter {
        search: Some("finance".to_string()),
        ..ProgramFilter::default()
    };
    assert_eq!(
        ids(&filter_programs(catalog.programs(), &by_category)),
        vec!["stripe-1"]
    );
}

#[test]
fn attribute_filters_are_anded() {
    let catalog = catalog();
    let filter = ProgramFilter {
        category: Some("CRM & Sales".to_string()),
        maturity: Some(MaturityTier::Enterprise),
        ..ProgramFilter::default()
    };

    let found = filter_programs(catalog.programs(), &filter);
    assert_eq!(ids(&found), vec!["salesforce-1"]);
}

#[test]
fn geography_filter_checks_membership() {
    let catalog = catalog();
    let filter = ProgramFilter {
        geography: Some("Latin America".to_string()),
        ..ProgramFilter::default()
    };

    let found = filter_programs(catalog.programs(), &filter);
    assert_eq!(ids(&found), vec!["salesforce-1"]);
}

#[test]
fn partner_type_filter_checks_membership() {
    let catalog = catalog();
    let filter = ProgramFilter {
        partner_type: Some("SI".to_string()),
        ..ProgramFilter::default()
    };

    let found = filter_programs(catalog.programs(), &filter);
    assert_eq!(ids(&found), vec!["salesforce-1", "microsoft-1"]);
}

#[test]
fn empty_filter_keeps_everything() {
    let catalog = catalog();
    let filter = ProgramFilter::default();

    assert!(filter.is_unfiltered());
    assert_eq!(filter_programs(catalog.programs(), &filter).len(), 6);
}

#[test]
fn sort_by_maturity_uses_the_ordinal_rank() {
    let engine = engine();
    let catalog = catalog();
    let mut matches = engine.rank(&AssessmentAnswers::new(), catalog.programs());

    sort_matches(&mut matches, SortKey::Maturity);

    let tiers: Vec<MaturityTier> = matches
        .iter()
        .map(|result| result.program.maturity)
        .collect();
    for pair in tiers.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    // Enterprise programs lead, keeping catalog order within the tie.
    assert_eq!(matches[0].program.id.as_str(), "salesforce-1");
    assert_eq!(matches[1].program.id.as_str(), "microsoft-1");
}

#[test]
fn sort_by_market_presence_is_descending() {
    let engine = engine();
    let catalog = catalog();
    let mut matches = engine.rank(&AssessmentAnswers::new(), catalog.programs());

    sort_matches(&mut matches, SortKey::MarketPresence);

    for pair in matches.windows(2) {
        assert!(pair[0].program.market_presence >= pair[1].program.market_presence);
    }
    // Stripe carries the lone 3 and lands last.
    assert_eq!(matches.last().map(|r| r.program.id.as_str()), Some("stripe-1"));
}

#[test]
fn selection_toggles_and_gates_comparison() {
    let mut selection = ComparisonSelection::new();
    assert!(!selection.can_compare());

    selection.toggle("stripe-1");
    assert!(selection.is_selected("stripe-1"));
    assert!(!selection.can_compare());

    selection.toggle("hubspot-1");
    assert!(selection.can_compare());
    assert_eq!(selection.ids(), ["stripe-1", "hubspot-1"]);

    // Toggling again removes, preserving the order of the rest.
    selection.toggle("stripe-1");
    assert!(!selection.can_compare());
    assert_eq!(selection.ids(), ["hubspot-1"]);
}

#[test]
fn comparison_requires_at_least_two_programs() {
    let catalog = catalog();
    let error = build_table(&["stripe-1".to_string()], &catalog).unwrap_err();

    assert_eq!(error, CompareError::NotEnoughSelections { selected: 1 });
}

#[test]
fn comparison_rejects_unknown_ids() {
    let catalog = catalog();
    let ids = vec!["hubspot-1".to_string(), "missing-9".to_string()];

    let error = build_table(&ids, &catalog).unwrap_err();
    assert_eq!(error, CompareError::UnknownProgram("missing-9".to_string()));
}

#[test]
fn comparison_table_covers_shared_attributes_in_selection_order() {
    let catalog = catalog();
    let ids = vec!["stripe-1".to_string(), "hubspot-1".to_string()];

    let table = build_table(&ids, &catalog).expect("two known ids");

    let column_ids: Vec<&str> = table.columns.iter().map(|column| column.id.as_str()).collect();
    assert_eq!(column_ids, vec!["stripe-1", "hubspot-1"]);
    assert_eq!(table.columns[0].vendor, "Stripe");
    assert_eq!(table.columns[0].market_presence, 3);

    let attributes: Vec<ComparisonAttribute> =
        table.rows.iter().map(|row| row.attribute).collect();
    assert_eq!(attributes, ComparisonAttribute::ordered().to_vec());

    let labels: Vec<&str> = table.rows.iter().map(|row| row.label).collect();
    assert_eq!(
        labels,
        vec![
            "Maturity",
            "Commission Model",
            "Onboarding Time",
            "Support Level",
            "Partner Types",
            "Available Regions",
            "Compliance"
        ]
    );

    assert_eq!(
        table.rows[0].values,
        vec![
            ComparisonValue::Single("Scaleup".to_string()),
            ComparisonValue::Single("Scaleup".to_string())
        ]
    );
    assert_eq!(
        table.rows[1].values[0],
        ComparisonValue::Single("5-15%".to_string())
    );
    assert_eq!(
        table.rows[4].values[1],
        ComparisonValue::Many(vec![
            "Reseller".to_string(),
            "ISV".to_string(),
            "Technology Partner".to_string()
        ])
    );
}
