use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use domain::league::{BENCH, Division, League, STARTING_ELEVEN, TeamBuilder, default_lineups};
use domain::pizzeria::{MARGHERITA, Order, PizzaBuilder, Style, default_recipes};

fn bench_build_team(c: &mut Criterion) {
    let lineups = default_lineups();

    c.bench_function("domain/build_team_18_players", |b| {
        b.iter(|| {
            let mut builder = TeamBuilder::new();
            builder
                .division(&Division::Masculina)
                .unwrap()
                .name("Leones")
                .unwrap()
                .add_lineup(lineups.retrieve(STARTING_ELEVEN).unwrap())
                .unwrap()
                .add_lineup(lineups.retrieve(BENCH).unwrap())
                .unwrap();
            builder.build().unwrap()
        });
    });
}

fn bench_catalog_retrieve(c: &mut Criterion) {
    let lineups = default_lineups();

    c.bench_function("domain/catalog_retrieve", |b| {
        b.iter(|| lineups.retrieve(STARTING_ELEVEN).unwrap());
    });
}

fn bench_register_teams(c: &mut Criterion) {
    let lineups = default_lineups();

    c.bench_function("domain/register_100_teams", |b| {
        b.iter(|| {
            let league = League::new("bench");
            for n in 0..100 {
                let mut builder = TeamBuilder::new();
                builder
                    .division(&Division::Masculina)
                    .unwrap()
                    .name(format!("Team {n}"))
                    .unwrap()
                    .add_lineup(lineups.retrieve(STARTING_ELEVEN).unwrap())
                    .unwrap();
                league.register(builder.build().unwrap()).unwrap();
            }
            league
        });
    });
}

fn bench_order_totals(c: &mut Criterion) {
    let recipes = default_recipes();
    let lines: Vec<_> = (0..50)
        .map(|n| {
            let style = if n % 2 == 0 {
                Style::NewYork
            } else {
                Style::Napolitana
            };
            let mut builder = PizzaBuilder::new();
            builder
                .style(&style)
                .unwrap()
                .ticket(format!("T-{n}"))
                .unwrap()
                .add_recipe(recipes.retrieve(MARGHERITA).unwrap())
                .unwrap();
            Arc::new(builder.build().unwrap())
        })
        .collect();
    let order = Order::new(lines);

    c.bench_function("domain/order_total_50_lines", |b| {
        b.iter(|| order.total());
    });
}

criterion_group!(
    benches,
    bench_build_team,
    bench_catalog_retrieve,
    bench_register_teams,
    bench_order_totals,
);
criterion_main!(benches);
