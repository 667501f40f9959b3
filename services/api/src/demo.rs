use crate::infra::build_matchmaker;
use chrono::Local;
use clap::Args;
use partner_match::error::AppError;
use partner_match::matchmaker::{
    roi, AnswerValue, AssessmentFlow, ComparisonValue, MatchmakerError, RoiInputs, RoiProjection,
    Scenario, StepInput,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Assessment scenario to walk ("non-competing" or "benchmark")
    #[arg(long, value_parser = crate::infra::parse_scenario)]
    pub(crate) scenario: Option<Scenario>,
    /// Print the per-criterion score breakdown for each match
    #[arg(long)]
    pub(crate) show_components: bool,
    /// Skip the ROI projection portion of the demo
    #[arg(long)]
    pub(crate) skip_roi: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RoiEstimateArgs {
    /// Average deal size in dollars (defaults to 10000)
    #[arg(long)]
    pub(crate) average_deal_size: Option<f64>,
    /// Partner margin as a percentage (defaults to 20)
    #[arg(long)]
    pub(crate) partner_margin: Option<f64>,
    /// Deals closed per month (defaults to 5)
    #[arg(long)]
    pub(crate) monthly_deal_volume: Option<f64>,
    /// One-time enablement and certification cost (defaults to 5000)
    #[arg(long)]
    pub(crate) enablement_cost: Option<f64>,
    /// One-time onboarding cost (defaults to 2000)
    #[arg(long)]
    pub(crate) onboarding_cost: Option<f64>,
    /// Marketing development funds earmarked for the partnership (defaults to 10000)
    #[arg(long)]
    pub(crate) mdf_allocation: Option<f64>,
    /// Contract length in months (defaults to 12)
    #[arg(long)]
    pub(crate) contract_duration_months: Option<u32>,
    /// Print the month-by-month revenue, cost, and profit schedule
    #[arg(long)]
    pub(crate) schedule: bool,
}

pub(crate) fn run_roi_estimate(args: RoiEstimateArgs) -> Result<(), AppError> {
    let inputs = roi_inputs_from(&args);
    let projection = roi::estimate(&inputs).map_err(MatchmakerError::from)?;
    render_projection(&inputs, &projection, args.schedule);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        scenario,
        show_components,
        skip_roi,
    } = args;

    let scenario = scenario.unwrap_or(Scenario::NonCompeting);
    let today = Local::now().date_naive();

    println!("Partner matchmaking demo ({today})");
    println!("Scenario: {}", scenario.label());

    let mut flow = AssessmentFlow::new(scenario);
    println!("\nAssessment wizard ({} steps)", flow.total_steps());

    let first_field = flow.current_field();
    if let Err(err) = flow.next(StepInput::empty()) {
        println!("- Guard on '{}': {}", first_field.label, err);
    }

    for input in canned_inputs(scenario) {
        let field = flow.current_field();
        let rendered = describe_input(&input);
        match flow.next(input) {
            Ok(_) => println!("- {} -> {}", field.label, rendered),
            Err(err) => {
                println!("  Walk halted: {}", err);
                return Ok(());
            }
        }
    }

    let answers = flow.into_answers();
    let service = build_matchmaker(None);
    let outcome = service.submit_assessment(scenario, &answers);

    println!(
        "\nSubmission {} ranked {} programs",
        outcome.assessment_id,
        outcome.matches.len()
    );
    for (rank, entry) in outcome.matches.iter().enumerate() {
        println!(
            "{:>2}. {} [{}] {} | score {:.0}%",
            rank + 1,
            entry.program.vendor,
            entry.program.category,
            entry.program.maturity.label(),
            entry.score * 100.0
        );
        if show_components {
            for component in &entry.score_components {
                println!("      +{:.2} {}", component.bonus, component.note);
            }
        }
    }

    if outcome.matches.len() >= 2 {
        let selection: Vec<String> = outcome
            .matches
            .iter()
            .take(2)
            .map(|entry| entry.program.id.to_string())
            .collect();

        match service.compare(&selection) {
            Ok(table) => {
                println!(
                    "\nSide by side: {} vs {}",
                    table.columns[0].vendor, table.columns[1].vendor
                );
                for row in &table.rows {
                    let cells: Vec<String> = row.values.iter().map(describe_cell).collect();
                    println!("- {}: {}", row.label, cells.join(" vs "));
                }
                for column in &table.columns {
                    println!(
                        "- {} ratings: reputation {}/5 | market presence {}/5",
                        column.vendor, column.health, column.market_presence
                    );
                }
            }
            Err(err) => println!("  Comparison unavailable: {}", err),
        }
    }

    if skip_roi {
        return Ok(());
    }

    println!("\nPartnership economics (default inputs)");
    let inputs = RoiInputs::default();
    match roi::estimate(&inputs) {
        Ok(projection) => render_projection(&inputs, &projection, false),
        Err(err) => println!("  Projection unavailable: {}", err),
    }

    Ok(())
}

fn roi_inputs_from(args: &RoiEstimateArgs) -> RoiInputs {
    let defaults = RoiInputs::default();
    RoiInputs {
        average_deal_size: args.average_deal_size.unwrap_or(defaults.average_deal_size),
        partner_margin: args.partner_margin.unwrap_or(defaults.partner_margin),
        monthly_deal_volume: args
            .monthly_deal_volume
            .unwrap_or(defaults.monthly_deal_volume),
        enablement_cost: args.enablement_cost.unwrap_or(defaults.enablement_cost),
        onboarding_cost: args.onboarding_cost.unwrap_or(defaults.onboarding_cost),
        mdf_allocation: args.mdf_allocation.unwrap_or(defaults.mdf_allocation),
        contract_duration_months: args
            .contract_duration_months
            .unwrap_or(defaults.contract_duration_months),
    }
}

fn render_projection(inputs: &RoiInputs, projection: &RoiProjection, schedule: bool) {
    println!(
        "ROI projection over a {}-month contract",
        inputs.contract_duration_months
    );
    println!(
        "- Monthly: ${:.2} revenue | ${:.2} costs | ${:.2} profit",
        projection.monthly_revenue, projection.monthly_costs, projection.monthly_profit
    );
    println!("- Break-even month: {}", projection.break_even_months);
    println!("- 12-month ROI: {:.2}%", projection.roi_12_months);
    println!(
        "- MDF earmarked (reported, not projected): ${:.2}",
        inputs.mdf_allocation
    );

    if schedule {
        println!("\nCumulative schedule");
        for month in &projection.schedule {
            println!(
                "- Month {:>2}: revenue ${:.2} | costs ${:.2} | profit ${:.2}",
                month.month, month.revenue, month.costs, month.profit
            );
        }
    }
}

fn describe_input(input: &StepInput) -> String {
    match &input.value {
        Some(AnswerValue::Toggle(true)) => "yes".to_string(),
        Some(AnswerValue::Toggle(false)) => "no".to_string(),
        Some(AnswerValue::Number(number)) => number.to_string(),
        Some(AnswerValue::Text(text)) => text.clone(),
        Some(AnswerValue::List(items)) => items.join(", "),
        None => "(skipped)".to_string(),
    }
}

fn describe_cell(value: &ComparisonValue) -> String {
    match value {
        ComparisonValue::Single(text) => text.clone(),
        ComparisonValue::Many(items) => items.join(", "),
    }
}

fn canned_inputs(scenario: Scenario) -> Vec<StepInput> {
    match scenario {
        Scenario::NonCompeting => vec![
            StepInput::value(text("Finance & Accounting")),
            StepInput::value(list(&["HubSpot"])),
            StepInput::value(text("1-3 years")),
            StepInput::value(list(&["North America"])),
            StepInput::value(list(&["SMB (Small & Medium Business)"])),
            StepInput::value(AnswerValue::Toggle(true)),
            StepInput::value(text("Market expansion")),
            StepInput::value(list(&["Technology Partner"])),
            StepInput::value(text("10-20%")),
            StepInput::value(list(&["Sales training", "Dedicated support"])),
            StepInput::value(text("REST API access")),
            StepInput::value(list(&["GDPR"])),
            StepInput::value(text("0-3 months")),
        ],
        Scenario::Benchmark => vec![
            StepInput::value(list(&["HubSpot", "Salesforce"])),
            StepInput::value(text("Gold")),
            StepInput::value(list(&["Europe"])),
            StepInput::value(list(&["Enterprise"])),
            StepInput::value(text("Odoo")),
            StepInput::value(AnswerValue::Toggle(true)),
            StepInput::value(list(&["Reseller"])),
            StepInput::value(text("20-30%")),
            StepInput::value(list(&["CRM", "Accounting"])),
            StepInput::value(list(&["Pricing flexibility", "Support quality"])),
            StepInput::value(list(&["ISO 27001"])),
            StepInput::value(text("3-6 months")),
        ],
    }
}

fn text(value: &str) -> AnswerValue {
    AnswerValue::Text(value.to_string())
}

fn list(values: &[&str]) -> AnswerValue {
    AnswerValue::List(values.iter().map(|value| value.to_string()).collect())
}
