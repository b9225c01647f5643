//! Step 1: Hand-written loops, one per criterion
//!
//! The starting point: every selection is its own loop over the fleet.
//! Want red cars? Write a loop. Want well-fueled cars? Copy the loop and
//! change one line. The duplication is the lesson — steps 2 onward exist
//! to delete it.
//!
//! Run with: cargo run --bin p1_hardcoded_loops

use colored::Colorize;
use superseq::Car;

fn fleet() -> Vec<Car> {
    vec![
        Car::with_gas_color_passengers(6, "Red", &["Fred", "Jim", "Sheila"]),
        Car::with_gas_color_passengers(3, "Octarine", &["Rincewind", "Ridcully"]),
        Car::with_gas_color_passengers(9, "Black", &["Weatherwax", "Magrat"]),
        Car::with_gas_color_passengers(7, "Green", &["Valentine", "Gillian", "Anne", "Dr. Mahmoud"]),
        Car::with_gas_color_passengers(6, "Red", &["Ender", "Hyrum", "Locke", "Bonzo"]),
    ]
}

/// First attempt: a dedicated function for exactly one question.
fn red_cars(cars: &[Car]) -> Vec<Car> {
    let mut output = Vec::new();
    for car in cars {
        if car.color() == "Red" {
            output.push(car.clone());
        }
    }
    output
}

/// Second question, second function. Note how little actually changed.
fn cars_with_gas_at_least(cars: &[Car], threshold: u32) -> Vec<Car> {
    let mut output = Vec::new();
    for car in cars {
        if car.gas_level() >= threshold {
            output.push(car.clone());
        }
    }
    output
}

/// Third question, third copy of the same loop.
fn cars_with_color(cars: &[Car], color: &str) -> Vec<Car> {
    let mut output = Vec::new();
    for car in cars {
        if car.color() == color {
            output.push(car.clone());
        }
    }
    output
}

fn show_all(cars: &[Car]) {
    for car in cars {
        println!("{}", car);
    }
    println!("---------------------------");
}

fn main() {
    println!("{}\n", "=== Step 1: One Loop Per Criterion ===".bold());

    let cars = fleet();
    show_all(&cars);

    println!("{}", "Red cars:".green());
    let red = red_cars(&cars);
    show_all(&red);
    assert_eq!(red.len(), 2);

    println!("{}", "Gas level >= 6:".green());
    let fueled = cars_with_gas_at_least(&cars, 6);
    show_all(&fueled);
    assert_eq!(
        fueled.iter().map(Car::gas_level).collect::<Vec<_>>(),
        [6, 9, 7, 6]
    );

    println!("{}", "Black cars:".green());
    show_all(&cars_with_color(&cars, "Black"));

    println!("{}", "=== The Problem ===".bold());
    println!("Three questions cost three nearly identical loops.");
    println!("Only the `if` line differs; everything else is ceremony.");
    println!("Step 2 moves that one line into a value we can pass around.");
}
