//! Step 5: Option chaining instead of nested null checks
//!
//! Not every car has a trunk, and not every owner is in the registry. The
//! defensive version nests an `if let` per layer of maybe-missing data;
//! the monadic version chains `map`/`and_then` and collapses the staircase
//! into one expression — the same shape as the sequence pipelines of
//! step 4, over zero-or-one element instead of many.
//!
//! Run with: cargo run --bin p5_option_chaining

use std::collections::HashMap;

use colored::Colorize;
use itertools::Itertools;
use superseq::Car;

fn registry() -> HashMap<String, Car> {
    let mut owners = HashMap::new();
    owners.insert(
        "Sheila".to_string(),
        Car::with_gas_color_passengers(6, "Red", &["Fred", "Jim", "Sheila"]),
    );
    owners.insert(
        "Librarian".to_string(),
        Car::with_gas_color_passengers(3, "Octarine", &["Rincewind", "Ridcully"]),
    );
    owners.insert(
        "Ogg".to_string(),
        Car::with_gas_color_passengers_and_trunk(9, "Black", &["Weatherwax", "Magrat"]),
    );
    owners
}

/// The staircase: one nested check per layer that might be absent.
fn trunk_report_nested(owners: &HashMap<String, Car>, owner: &str) -> Option<String> {
    if let Some(car) = owners.get(owner) {
        if let Some(items) = car.trunk_contents() {
            return Some(format!("{} has [{}] in the car", owner, items.iter().join(", ")));
        }
    }
    None
}

/// The chain: each link handles "absent" by doing nothing.
fn trunk_report_chained(owners: &HashMap<String, Car>, owner: &str) -> Option<String> {
    owners
        .get(owner)
        .and_then(|car| car.trunk_contents())
        .map(|items| format!("{} has [{}] in the car", owner, items.iter().join(", ")))
}

fn main() {
    println!("{}\n", "=== Step 5: Chaining Over Absence ===".bold());

    let owners = registry();

    println!("{}", "Nested checks:".green());
    if let Some(report) = trunk_report_nested(&owners, "Ogg") {
        println!("{}", report);
    }
    println!("---------------------------------");

    println!("{}", "Chained version, same answers:".green());
    for owner in ["Ogg", "Sheila", "Nobby"] {
        match trunk_report_chained(&owners, owner) {
            Some(report) => println!("{}", report),
            None => println!("nothing to report for {}", owner),
        }
    }
    println!("---------------------------------");

    // Both shapes agree on every case: present, trunkless, unknown.
    for owner in ["Ogg", "Sheila", "Librarian", "Nobby"] {
        assert_eq!(
            trunk_report_nested(&owners, owner),
            trunk_report_chained(&owners, owner)
        );
    }
    assert_eq!(
        trunk_report_chained(&owners, "Ogg").as_deref(),
        Some("Ogg has [jack, wrench, spare wheel] in the car")
    );
    assert_eq!(trunk_report_chained(&owners, "Sheila"), None); // no trunk
    assert_eq!(trunk_report_chained(&owners, "Nobby"), None); // no car

    println!("{}", "=== What Changed ===".bold());
    println!("Absence flows through the chain instead of branching around it;");
    println!("map/and_then on Option mirror map/flat_map on SuperSeq.");
}
