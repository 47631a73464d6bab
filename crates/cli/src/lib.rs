//! Wiring layer for the lineup workspace.
//!
//! Selects the categories in play, fills the template catalogs, drives the
//! builders and registers the results. Failures for one team or pizza are
//! recorded and processing continues with the next one.

pub mod config;
pub mod plan;
pub mod report;

use domain::league::{League, default_lineups};
use domain::pizzeria::{DailyRegister, Order, default_recipes};

use config::Config;
use plan::{PizzaPlan, TeamPlan};
use report::{Rejection, Report};

/// Registries and order produced by one run.
pub struct Outcome {
    pub league: League,
    pub register: DailyRegister,
    pub order: Order,
    pub rejections: Vec<Rejection>,
}

/// Enrolls every team and rings up every pizza in the given plans.
pub fn execute(config: &Config, teams: &[TeamPlan], pizzas: &[PizzaPlan]) -> Outcome {
    let league = League::new(config.season_label.as_str());
    let register = DailyRegister::new(config.business_day.as_str());
    let lineups = default_lineups();
    let recipes = default_recipes();
    let mut rejections = Vec::new();

    for team in teams {
        if let Err(error) = team.enroll(&lineups, &league) {
            tracing::warn!(team = team.name, %error, "team rejected");
            rejections.push(Rejection::new(team.name, &error));
        }
    }

    for pizza in pizzas {
        if let Err(error) = pizza.ring_up(&recipes, &register) {
            tracing::warn!(ticket = pizza.ticket, %error, "pizza rejected");
            rejections.push(Rejection::new(pizza.ticket, &error));
        }
    }

    let order = Order::from_register(&register);
    tracing::info!(
        teams = league.len(),
        pizzas = register.len(),
        rejected = rejections.len(),
        "run complete"
    );

    Outcome {
        league,
        register,
        order,
        rejections,
    }
}

/// Runs the built-in season and day plans and returns the report.
pub fn run(config: &Config) -> Report {
    let outcome = execute(config, &plan::season_plan(), &plan::day_plan());
    Report::from_outcome(&outcome)
}
