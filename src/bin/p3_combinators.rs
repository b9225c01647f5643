//! Step 3: Predicate combinators and ordering adapters
//!
//! Criteria stopped being loops in step 2; here they gain an algebra.
//! `negate`, `and`, and `or` build compound questions out of simple ones
//! without touching any iteration code, and the ordering adapters turn a
//! comparator plus one reference car into a criterion ("more gas than
//! Bert's car").
//!
//! Run with: cargo run --bin p3_combinators

use colored::Colorize;
use superseq::{compare_greater, compare_with_this, Car, Criterion};

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

fn show_all(cars: &[Car]) {
    for car in cars {
        println!("{}", car);
    }
    println!("---------------------------");
}

fn main() {
    println!("{}\n", "=== Step 3: An Algebra Of Criteria ===".bold());

    let cars = fleet();

    println!("{}", "Gas level >= 7:".green());
    let level7 = Car::gas_level_at_least(7);
    show_all(&select_by(&cars, &level7));

    println!("{}", "Negated — gas level below 7:".green());
    let below7 = (&level7).negate();
    let thirsty = select_by(&cars, below7);
    show_all(&thirsty);
    assert_eq!(thirsty.len(), 3);

    println!("{}", "Red AND four passengers:".green());
    let red_four = Car::red_paint().and(Car::passenger_count(4));
    let matched = select_by(&cars, red_four);
    show_all(&matched);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].passengers()[0], "Ender");

    println!("{}", "Black OR four passengers:".green());
    let black_or_four = Car::color_in(&["Black"]).or(Car::passenger_count(4));
    let matched = select_by(&cars, black_or_four);
    show_all(&matched);
    assert_eq!(matched.len(), 3);

    println!("{}", "=== Ordering Adapters ===".bold());

    // One reference car, compared against every member of the fleet.
    let bert = Car::with_gas_color_passengers(5, "Blue", &[]);
    println!("Reference: {}\n", bert);

    let against_bert = compare_with_this(bert, Car::gas_comparator());
    for car in &cars {
        println!(
            "comparing gives {:?} for {}",
            against_bert(car),
            car
        );
    }
    println!("---------------------------");

    // Less means "the reference orders first", i.e. this car has MORE gas.
    println!("{}", "Cars with more gas than the reference:".green());
    let more_gas = select_by(&cars, compare_greater(against_bert));
    show_all(&more_gas);
    assert_eq!(
        more_gas.iter().map(Car::gas_level).collect::<Vec<_>>(),
        [6, 9, 7, 6]
    );

    println!("{}", "=== What Changed ===".bold());
    println!("Compound questions compose from simple ones; no new loops.");
    println!("Comparators join in through compare_with_this/compare_greater.");
    println!("Step 4 chains whole transformations, not just selections.");
}
