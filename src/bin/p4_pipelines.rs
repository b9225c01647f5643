//! Step 4: SuperSeq pipelines
//!
//! The generic selection function of steps 2 and 3 becomes a wrapper type,
//! and the transformations become chainable methods. Each stage
//! materializes a fresh sequence, so every intermediate result can be
//! printed or re-iterated, and the source is never touched. `flat_map`
//! unrolls a collection of collections — one flat list of passengers out
//! of a fleet of cars.
//!
//! Run with: cargo run --bin p4_pipelines

use colored::Colorize;
use superseq::{Car, SuperSeq};

fn fleet() -> SuperSeq<Car> {
    SuperSeq::new([
        Car::with_gas_color_passengers(6, "Red", &["Fred", "Jim", "Sheila"]),
        Car::with_gas_color_passengers(3, "Octarine", &["Rincewind", "Ridcully"]),
        Car::with_gas_color_passengers(9, "Black", &["Weatherwax", "Magrat"]),
        Car::with_gas_color_passengers(7, "Green", &["Valentine", "Gillian", "Anne", "Dr. Mahmoud"]),
        Car::with_gas_color_passengers(6, "Red", &["Ender", "Hyrum", "Locke", "Bonzo"]),
    ])
}

fn divider() {
    println!("---------------------------------");
}

fn main() {
    println!("{}\n", "=== Step 4: Chained Pipelines ===".bold());

    let strings = SuperSeq::new(
        ["LightCoral", "pink", "Orange", "Gold", "plum", "Blue", "limegreen"]
            .map(String::from),
    );
    strings.for_each(|s| println!("> {}", s));
    divider();

    // The transformation works on a fresh copy; `strings` is unchanged.
    println!("{}", "Starting with an uppercase letter:".green());
    let upper_case = strings.filter(|s: &String| {
        s.chars().next().is_some_and(|c| c.is_uppercase())
    });
    upper_case.for_each(|s| println!("> {}", s));
    assert_eq!(upper_case.len(), 4);
    divider();

    println!("{}", "Filter, then map, then print — one chain:".green());
    strings
        .filter(|s: &String| s.chars().next().is_some_and(|c| c.is_uppercase()))
        .map(|s| s.to_uppercase())
        .for_each(|s| println!("{}", s));
    divider();

    // Still seven entries, in the original order.
    strings.for_each(|s| println!("> {}", s));
    assert_eq!(strings.len(), 7);
    divider();

    let cars = fleet();

    println!("{}", "Drivers of well-fueled cars:".green());
    cars.filter(|c: &Car| c.gas_level() > 6)
        .map(|c| {
            format!(
                "{} is driving a {} car with lots of fuel",
                c.passengers()[0],
                c.color()
            )
        })
        .for_each(|line| println!("> {}", line));
    divider();

    println!("{}", "The whole fleet, refueled (originals untouched):".green());
    let refueled = cars.map(|c| c.add_gas(4));
    refueled.for_each(|c| println!("> {}", c));
    assert_eq!(
        refueled.iter().map(Car::gas_level).collect::<Vec<_>>(),
        [10, 7, 13, 11, 10]
    );
    divider();

    println!("{}", "Passengers of the crowded cars, shouted:".green());
    cars.filter(|c: &Car| c.passengers().len() > 3)
        .flat_map(|c| SuperSeq::new(c.passengers().to_vec()))
        .map(|p| p.to_uppercase())
        .for_each(|p| println!("> {}", p));
    divider();

    // flat_map's closure can itself run a pipeline over the inner sequence,
    // keeping the outer element in scope.
    println!("{}", "Every passenger, with their car's color:".green());
    cars.flat_map(|c| {
        let color = c.color().to_string();
        SuperSeq::new(c.passengers().to_vec())
            .map(move |p| format!("{} is riding in a {} car", p, color))
    })
    .for_each(|line| println!("> {}", line));
    divider();

    println!("{}", "=== What Changed ===".bold());
    println!("Selections, transformations, and flattening chain in one");
    println!("expression; each stage is a fresh, inspectable sequence.");
}
