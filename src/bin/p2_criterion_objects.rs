//! Step 2: Criterion objects and generic selection
//!
//! The one line that varied between the loops of step 1 becomes a value:
//! first a named strategy type, then a plain closure. A single generic
//! `select_by` replaces every hand-written loop — and because it is generic
//! over the element type, it filters strings as happily as cars.
//!
//! Run with: cargo run --bin p2_criterion_objects

use colored::Colorize;
use superseq::{Car, Criterion};

/// A named strategy type: the heaviest way to spell a criterion, shown once
/// so the closure versions below have something to be lighter than.
struct RedCarCriterion;

impl Criterion<Car> for RedCarCriterion {
    fn test(&self, car: &Car) -> bool {
        car.color() == "Red"
    }
}

/// One loop to rule them all: works for any element type and any criterion.
fn select_by<E: Clone>(input: &[E], criterion: impl Criterion<E>) -> Vec<E> {
    let mut output = Vec::new();
    for item in input {
        if criterion.test(item) {
            output.push(item.clone());
        }
    }
    output
}

fn fleet() -> Vec<Car> {
    vec![
        Car::with_gas_color_passengers(6, "Red", &["Fred", "Jim", "Sheila"]),
        Car::with_gas_color_passengers(3, "Octarine", &["Rincewind", "Ridcully"]),
        Car::with_gas_color_passengers(9, "Black", &["Weatherwax", "Magrat"]),
        Car::with_gas_color_passengers(7, "Green", &["Valentine", "Gillian", "Anne", "Dr. Mahmoud"]),
        Car::with_gas_color_passengers(6, "Red", &["Ender", "Hyrum", "Locke", "Bonzo"]),
    ]
}

fn show_all<E: std::fmt::Display>(items: &[E]) {
    for item in items {
        println!("{}", item);
    }
    println!("---------------------------");
}

fn main() {
    println!("{}\n", "=== Step 2: Criteria As Values ===".bold());

    let cars = fleet();

    println!("{}", "Named strategy type:".green());
    let red = select_by(&cars, RedCarCriterion);
    show_all(&red);
    assert_eq!(red.len(), 2);

    println!("{}", "Stock criterion from the Car module:".green());
    show_all(&select_by(&cars, Car::gas_level_at_least(6)));

    println!("{}", "Ad-hoc closure, no type to declare:".green());
    let two_seaters = select_by(&cars, |c: &Car| c.passengers().len() == 2);
    show_all(&two_seaters);
    assert_eq!(two_seaters.len(), 2);

    // The same machinery selects over any element type.
    println!("{}", "Same select_by, now over strings:".green());
    let colors = ["LightCoral", "pink", "Orange", "Gold", "plum", "Blue", "limeGreen"];
    let long_names = select_by(&colors, |s: &&str| s.len() > 4);
    show_all(&long_names);
    assert_eq!(long_names, ["LightCoral", "Orange", "limeGreen"]);

    let capitalized = select_by(&colors, |s: &&str| {
        s.chars().next().is_some_and(|c| c.is_uppercase())
    });
    show_all(&capitalized);
    assert_eq!(capitalized, ["LightCoral", "Orange", "Gold", "Blue"]);

    println!("{}", "=== What Changed ===".bold());
    println!("The loop is written once; the question travels as a value.");
    println!("Closures make one-off criteria free. Step 3 composes them.");
}
