//! Integration tests for the wiring layer.

use cli::config::Config;
use cli::plan::{PizzaPlan, TeamPlan, day_plan, season_plan};
use common::Money;
use domain::league::{Division, STARTING_ELEVEN};
use domain::pizzeria::{MARGHERITA, Style};

fn config() -> Config {
    let mut config = Config::default();
    config.season_label = "Temporada 2024".to_string();
    config.business_day = "2024-05-01".to_string();
    config
}

#[test]
fn run_registers_valid_entities_and_reports_rejections() {
    let outcome = cli::execute(&config(), &season_plan(), &day_plan());

    let teams: Vec<String> = outcome
        .league
        .list()
        .iter()
        .map(|t| t.id().to_string())
        .collect();
    assert_eq!(teams, vec!["Leones", "Águilas", "Cachorros"]);
    assert_eq!(outcome.register.len(), 3);
    assert_eq!(outcome.rejections.len(), 7);

    let rejected: Vec<&str> = outcome
        .rejections
        .iter()
        .map(|r| r.subject.as_str())
        .collect();
    assert_eq!(
        rejected,
        vec!["Pumas", "Tigres", "Leones", "Halcones", "NA-002", "NY-003", "NY-001"]
    );
}

#[test]
fn order_totals_follow_each_style() {
    let outcome = cli::execute(&config(), &season_plan(), &day_plan());
    // $12.00 + $13.00 at 10%, $13.50 at 8%
    assert_eq!(outcome.order.subtotal(), Money::from_cents(3850));
    assert_eq!(outcome.order.tax(), Money::from_cents(120 + 130 + 108));
    assert_eq!(outcome.order.total(), Money::from_cents(4208));
}

#[test]
fn report_json_shape() {
    let report = cli::run(&config());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["season"], "Temporada 2024");
    assert_eq!(json["business_day"], "2024-05-01");
    assert_eq!(json["teams"][0]["name"], "Leones");
    assert_eq!(json["teams"][0]["fee"], 86000);
    assert_eq!(json["order"]["total"], 4208);
}

#[test]
fn report_text_mentions_rejections() {
    let text = cli::run(&config()).to_string();
    assert!(text.starts_with("Temporada 2024"));
    assert!(text.contains("total    $42.08"));
    assert!(text.contains("Pumas: Builder error: Out of bounds"));
}

#[test]
fn empty_plans_produce_empty_outcome() {
    let outcome = cli::execute(&config(), &[], &[]);
    assert!(outcome.league.is_empty());
    assert!(outcome.order.is_empty());
    assert!(outcome.rejections.is_empty());
}

#[test]
fn custom_plans() {
    let teams = [TeamPlan {
        name: "Rayos",
        division: Division::Femenina,
        lineups: &[STARTING_ELEVEN],
        coach: None,
        color: None,
    }];
    let pizzas = [PizzaPlan {
        ticket: "NA-100",
        style: Style::Napolitana,
        recipe: MARGHERITA,
        extras: &[],
        customer: Some("Luis"),
    }];
    let outcome = cli::execute(&config(), &teams, &pizzas);
    assert_eq!(outcome.league.len(), 1);
    assert_eq!(
        outcome.register.list()[0].customer(),
        Some("Luis")
    );
    assert_eq!(outcome.order.total(), Money::from_cents(1458));
}
