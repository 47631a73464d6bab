//! Integration tests for pizza assembly, the daily register and orders.

use std::sync::Arc;
use std::thread;

use common::{Money, TaxRate};
use domain::pizzeria::{
    CAPRICCIOSA, DailyRegister, MARGHERITA, MARINARA, Order, PEPPERONI, Pizza, PizzaBuilder,
    Style, Topping, default_recipes,
};
use domain::{BuilderError, DomainError, RegistryError};

fn pizza(ticket: &str, style: Style, recipe: &str) -> Result<Pizza, DomainError> {
    let recipes = default_recipes();
    let mut builder = PizzaBuilder::new();
    builder
        .style(&style)?
        .ticket(ticket)?
        .add_recipe(recipes.retrieve(recipe)?)?;
    Ok(builder.build()?)
}

mod building {
    use super::*;

    #[test]
    fn margherita_in_both_styles() {
        let ny = pizza("NY-001", Style::NewYork, MARGHERITA).unwrap();
        let na = pizza("NA-001", Style::Napolitana, MARGHERITA).unwrap();

        assert_eq!(ny.price(), Money::from_dollars(12));
        assert_eq!(na.price(), Money::from_cents(1350));
        assert_eq!(ny.bake().seconds, 720);
        assert_eq!(na.bake().seconds, 90);
        assert_eq!(ny.tax_rate(), TaxRate::from_percent(10));
        assert_eq!(na.tax_rate(), TaxRate::from_percent(8));
    }

    #[test]
    fn napolitana_rejects_pepperoni_recipe_atomically() {
        let recipes = default_recipes();
        let mut builder = PizzaBuilder::new();
        builder.style(&Style::Napolitana).unwrap().ticket("NA-002").unwrap();

        let err = builder
            .add_recipe(recipes.retrieve(PEPPERONI).unwrap())
            .err()
            .unwrap();
        assert!(matches!(err, BuilderError::InvalidDiscriminator { .. }));

        builder
            .add_recipe(recipes.retrieve(MARINARA).unwrap())
            .unwrap();
        let pizza = builder.build().unwrap();
        assert_eq!(
            pizza.toppings().collect::<Vec<_>>(),
            vec![Topping::Tomato, Topping::Garlic, Topping::Oregano]
        );
    }

    #[test]
    fn capricciosa_is_not_napolitana_but_fits_new_york() {
        let err = pizza("NA-003", Style::Napolitana, CAPRICCIOSA).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Builder(BuilderError::InvalidDiscriminator { .. })
        ));

        let ny = pizza("NY-003", Style::NewYork, CAPRICCIOSA).unwrap();
        assert_eq!(ny.part_count(), 6);
        assert_eq!(ny.price(), Money::from_dollars(15));
    }

    #[test]
    fn recipe_plus_extra_topping_beyond_limit() {
        let recipes = default_recipes();
        let mut builder = PizzaBuilder::new();
        builder
            .style(&Style::NewYork)
            .unwrap()
            .ticket("NY-004")
            .unwrap()
            .add_recipe(recipes.retrieve(CAPRICCIOSA).unwrap())
            .unwrap()
            .add_topping("Pineapple", Topping::Pineapple)
            .unwrap();

        assert_eq!(
            builder.build().unwrap_err(),
            BuilderError::OutOfBounds {
                category: "New York".to_string(),
                actual: 7,
                min: 1,
                max: 6,
            }
        );
    }
}

mod orders {
    use super::*;

    #[test]
    fn order_of_ten_and_twelve_dollar_pizzas() {
        let mut builder = PizzaBuilder::new();
        builder
            .style(&Style::NewYork)
            .unwrap()
            .ticket("NY-010")
            .unwrap()
            .add_topping("Cheese", Topping::Mozzarella)
            .unwrap();
        let plain = builder.build().unwrap();
        let margherita = pizza("NY-011", Style::NewYork, MARGHERITA).unwrap();
        assert_eq!(plain.price(), Money::from_dollars(10));
        assert_eq!(margherita.price(), Money::from_dollars(12));

        let order = Order::new([Arc::new(plain), Arc::new(margherita)]);
        assert_eq!(order.subtotal().to_string(), "$22.00");
        assert_eq!(order.tax().to_string(), "$2.20");
        assert_eq!(order.total().to_string(), "$24.20");
    }

    #[test]
    fn order_totals_are_stable() {
        let order = Order::new([
            Arc::new(pizza("NY-020", Style::NewYork, PEPPERONI).unwrap()),
            Arc::new(pizza("NA-020", Style::Napolitana, MARGHERITA).unwrap()),
        ]);
        let first = order.summary();
        for _ in 0..5 {
            assert_eq!(order.summary(), first);
        }
    }

    #[test]
    fn order_summary_serializes() {
        let order = Order::new([Arc::new(pizza("NY-030", Style::NewYork, MARGHERITA).unwrap())]);
        let json = serde_json::to_value(order.summary()).unwrap();
        assert_eq!(json["subtotal"], 1200);
        assert_eq!(json["tax"], 120);
        assert_eq!(json["lines"][0]["ticket"], "NY-030");
        assert_eq!(json["lines"][0]["style"], "New York");
    }
}

mod register {
    use super::*;

    #[test]
    fn same_ticket_twice_is_rejected() {
        let register = DailyRegister::new("2024-05-01");
        register
            .register(pizza("NY-001", Style::NewYork, MARGHERITA).unwrap())
            .unwrap();
        let err = register
            .register(pizza("NY-001", Style::NewYork, PEPPERONI).unwrap())
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateIdentity { .. }));

        let order = Order::from_register(&register);
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.total(), Money::from_cents(1320));
    }

    #[test]
    fn concurrent_tills_register_distinct_tickets() {
        let register = Arc::new(DailyRegister::new("2024-05-01"));
        let handles: Vec<_> = (0..4)
            .map(|till| {
                let register = Arc::clone(&register);
                thread::spawn(move || {
                    for n in 0..5 {
                        let ticket = format!("T{till}-{n}");
                        let pizza = pizza(&ticket, Style::NewYork, MARGHERITA).unwrap();
                        register.register(pizza).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(register.len(), 20);
        assert_eq!(
            Order::from_register(&register).subtotal(),
            Money::from_dollars(240)
        );
    }
}
