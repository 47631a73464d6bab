//! Built-in plans for a season of teams and a day of pizzas.

use std::sync::Arc;

use domain::TemplateCatalog;
use domain::league::{
    BENCH, Division, GOALKEEPER, JerseyNumber, League, STARTING_ELEVEN, Team, TeamBuilder,
    YOUTH_SEVEN,
};
use domain::pizzeria::{
    CAPRICCIOSA, DailyRegister, MARGHERITA, PEPPERONI, Pizza, PizzaBuilder, Style, Topping,
};

/// A team to enroll: division, lineup templates and descriptive fields.
#[derive(Debug, Clone)]
pub struct TeamPlan {
    pub name: &'static str,
    pub division: Division,
    pub lineups: &'static [&'static str],
    pub coach: Option<&'static str>,
    pub color: Option<&'static str>,
}

impl TeamPlan {
    /// Builds the team and registers it in `league`.
    pub fn enroll(
        &self,
        lineups: &TemplateCatalog<JerseyNumber>,
        league: &League,
    ) -> domain::Result<Arc<Team>> {
        let mut builder = TeamBuilder::new();
        builder.division(&self.division)?.name(self.name)?;
        if let Some(coach) = self.coach {
            builder.coach(coach)?;
        }
        if let Some(color) = self.color {
            builder.color(color)?;
        }
        for key in self.lineups {
            builder.add_lineup(lineups.retrieve(key)?)?;
        }
        Ok(league.register(builder.build()?)?)
    }
}

/// A pizza to ring up: style, base recipe and extra toppings.
#[derive(Debug, Clone)]
pub struct PizzaPlan {
    pub ticket: &'static str,
    pub style: Style,
    pub recipe: &'static str,
    pub extras: &'static [(&'static str, Topping)],
    pub customer: Option<&'static str>,
}

impl PizzaPlan {
    /// Builds the pizza and registers it in `register`.
    pub fn ring_up(
        &self,
        recipes: &TemplateCatalog<Topping>,
        register: &DailyRegister,
    ) -> domain::Result<Arc<Pizza>> {
        let mut builder = PizzaBuilder::new();
        builder
            .style(&self.style)?
            .ticket(self.ticket)?
            .add_recipe(recipes.retrieve(self.recipe)?)?;
        if let Some(customer) = self.customer {
            builder.customer(customer)?;
        }
        for (label, topping) in self.extras {
            builder.add_topping(*label, *topping)?;
        }
        Ok(register.register(builder.build()?)?)
    }
}

pub fn season_plan() -> Vec<TeamPlan> {
    vec![
        TeamPlan {
            name: "Leones",
            division: Division::Masculina,
            lineups: &[STARTING_ELEVEN, BENCH],
            coach: Some("Ricardo Ferretti"),
            color: Some("amarillo"),
        },
        TeamPlan {
            name: "Águilas",
            division: Division::Femenina,
            lineups: &[STARTING_ELEVEN],
            coach: Some("Ana Galindo"),
            color: Some("azul"),
        },
        TeamPlan {
            name: "Cachorros",
            division: Division::Sub17,
            lineups: &[YOUTH_SEVEN],
            coach: None,
            color: Some("verde"),
        },
        TeamPlan {
            name: "Pumas",
            division: Division::Masculina,
            lineups: &[YOUTH_SEVEN],
            coach: None,
            color: None,
        },
        TeamPlan {
            name: "Tigres",
            division: Division::Masculina,
            lineups: &[STARTING_ELEVEN, GOALKEEPER],
            coach: None,
            color: None,
        },
        TeamPlan {
            name: "Leones",
            division: Division::Sub17,
            lineups: &[YOUTH_SEVEN],
            coach: None,
            color: None,
        },
        TeamPlan {
            name: "Halcones",
            division: Division::Sub17,
            lineups: &["three-at-the-back"],
            coach: None,
            color: None,
        },
    ]
}

pub fn day_plan() -> Vec<PizzaPlan> {
    vec![
        PizzaPlan {
            ticket: "NY-001",
            style: Style::NewYork,
            recipe: MARGHERITA,
            extras: &[],
            customer: Some("Marta"),
        },
        PizzaPlan {
            ticket: "NY-002",
            style: Style::NewYork,
            recipe: PEPPERONI,
            extras: &[("Mushrooms", Topping::Mushroom)],
            customer: None,
        },
        PizzaPlan {
            ticket: "NA-001",
            style: Style::Napolitana,
            recipe: MARGHERITA,
            extras: &[],
            customer: None,
        },
        PizzaPlan {
            ticket: "NA-002",
            style: Style::Napolitana,
            recipe: PEPPERONI,
            extras: &[],
            customer: None,
        },
        PizzaPlan {
            ticket: "NY-003",
            style: Style::NewYork,
            recipe: CAPRICCIOSA,
            extras: &[("Pineapple", Topping::Pineapple)],
            customer: None,
        },
        PizzaPlan {
            ticket: "NY-001",
            style: Style::NewYork,
            recipe: PEPPERONI,
            extras: &[],
            customer: None,
        },
    ]
}
