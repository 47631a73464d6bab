//! Report of a run for stdout, as text or JSON.

use common::Money;
use domain::DomainError;
use domain::pizzeria::OrderSummary;
use serde::Serialize;

use crate::Outcome;

/// A team or pizza that could not be built or registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub subject: String,
    pub reason: String,
}

impl Rejection {
    pub fn new(subject: impl Into<String>, error: &DomainError) -> Self {
        Self {
            subject: subject.into(),
            reason: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamLine {
    pub name: String,
    pub division: String,
    pub players: usize,
    pub fee: Money,
    pub match_minutes: u32,
    pub coach: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub season: String,
    pub business_day: String,
    pub teams: Vec<TeamLine>,
    pub order: OrderSummary,
    pub rejections: Vec<Rejection>,
}

impl Report {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let teams = outcome
            .league
            .list()
            .iter()
            .map(|team| TeamLine {
                name: team.id().to_string(),
                division: team.category().to_string(),
                players: team.part_count(),
                fee: team.registration_fee(),
                match_minutes: team.match_duration_minutes(),
                coach: team.coach().map(str::to_string),
            })
            .collect();

        Self {
            season: outcome.league.label().to_string(),
            business_day: outcome.register.label().to_string(),
            teams,
            order: outcome.order.summary(),
            rejections: outcome.rejections.clone(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.season)?;
        for team in &self.teams {
            writeln!(
                f,
                "  {:<12} {:<10} {:>2} players  fee {:>9}  {} min  coach: {}",
                team.name,
                team.division,
                team.players,
                team.fee.to_string(),
                team.match_minutes,
                team.coach.as_deref().unwrap_or("-"),
            )?;
        }

        writeln!(f, "\nOrder {} ({})", self.order.id, self.business_day)?;
        for line in &self.order.lines {
            writeln!(
                f,
                "  {:<8} {:<10} {} toppings  {:>8}  tax {} = {}",
                line.ticket.as_str(),
                line.style,
                line.toppings,
                line.price.to_string(),
                line.tax_rate,
                line.tax,
            )?;
        }
        writeln!(f, "  subtotal {}", self.order.subtotal)?;
        writeln!(f, "  tax      {}", self.order.tax)?;
        writeln!(f, "  total    {}", self.order.total)?;

        if !self.rejections.is_empty() {
            writeln!(f, "\nRejected")?;
            for rejection in &self.rejections {
                writeln!(f, "  {}: {}", rejection.subject, rejection.reason)?;
            }
        }
        Ok(())
    }
}
