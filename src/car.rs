//! The demo domain entity every graded step filters, maps, and sorts.
//!
//! `Car` is an immutable value object; "modifying" one means building a new
//! one (`add_gas`). The associated functions returning closures are the
//! stock criteria the early steps hard-coded and the later steps compose.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    gas_level: u32,
    color: String,
    passengers: Vec<String>,
    trunk_contents: Option<Vec<String>>,
}

impl Car {
    pub fn with_gas_color_passengers(gas_level: u32, color: &str, passengers: &[&str]) -> Car {
        Car {
            gas_level,
            color: color.to_string(),
            passengers: passengers.iter().map(|p| p.to_string()).collect(),
            trunk_contents: None,
        }
    }

    /// Same as [`Car::with_gas_color_passengers`], plus the standard trunk kit.
    pub fn with_gas_color_passengers_and_trunk(
        gas_level: u32,
        color: &str,
        passengers: &[&str],
    ) -> Car {
        Car {
            trunk_contents: Some(
                ["jack", "wrench", "spare wheel"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            ..Car::with_gas_color_passengers(gas_level, color, passengers)
        }
    }

    pub fn gas_level(&self) -> u32 {
        self.gas_level
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn passengers(&self) -> &[String] {
        &self.passengers
    }

    pub fn trunk_contents(&self) -> Option<&[String]> {
        self.trunk_contents.as_deref()
    }

    /// A refueled copy; the original car is untouched.
    pub fn add_gas(&self, extra: u32) -> Car {
        Car {
            gas_level: self.gas_level + extra,
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------
    // Stock criteria
    // ------------------------------------------------------------------

    pub fn red_paint() -> impl Fn(&Car) -> bool {
        |c: &Car| c.color == "Red"
    }

    pub fn gas_level_at_least(threshold: u32) -> impl Fn(&Car) -> bool {
        move |c: &Car| c.gas_level >= threshold
    }

    pub fn color_in(colors: &[&str]) -> impl Fn(&Car) -> bool {
        let accepted: HashSet<String> = colors.iter().map(|s| s.to_string()).collect();
        move |c: &Car| accepted.contains(&c.color)
    }

    pub fn passenger_count(count: usize) -> impl Fn(&Car) -> bool {
        move |c: &Car| c.passengers.len() == count
    }

    // ------------------------------------------------------------------
    // Stock comparators
    // ------------------------------------------------------------------

    pub fn gas_comparator() -> impl Fn(&Car, &Car) -> Ordering {
        |a: &Car, b: &Car| a.gas_level.cmp(&b.gas_level)
    }

    pub fn passenger_count_comparator() -> impl Fn(&Car, &Car) -> Ordering {
        |a: &Car, b: &Car| a.passengers.len().cmp(&b.passengers.len())
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car {{ gas_level: {}, color: {}, passengers: [{}]",
            self.gas_level,
            self.color,
            self.passengers.iter().join(", ")
        )?;
        match &self.trunk_contents {
            Some(items) => write!(f, ", trunk: [{}] }}", items.iter().join(", ")),
            None => write!(f, ", no trunk }}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criterion::Criterion;

    fn fixture() -> Car {
        Car::with_gas_color_passengers(6, "Red", &["Fred", "Jim", "Sheila"])
    }

    #[test]
    fn constructors_fill_the_fields() {
        let car = fixture();
        assert_eq!(car.gas_level(), 6);
        assert_eq!(car.color(), "Red");
        assert_eq!(car.passengers(), ["Fred", "Jim", "Sheila"]);
        assert_eq!(car.trunk_contents(), None);

        let with_trunk = Car::with_gas_color_passengers_and_trunk(9, "Black", &["Weatherwax"]);
        assert_eq!(
            with_trunk.trunk_contents().unwrap(),
            ["jack", "wrench", "spare wheel"]
        );
    }

    #[test]
    fn add_gas_builds_a_new_car() {
        let car = fixture();
        let refueled = car.add_gas(4);
        assert_eq!(refueled.gas_level(), 10);
        assert_eq!(car.gas_level(), 6);
        assert_eq!(refueled.passengers(), car.passengers());
    }

    #[test]
    fn stock_criteria_match_their_names() {
        let car = fixture();
        assert!(Car::red_paint().test(&car));
        assert!(Car::gas_level_at_least(6).test(&car));
        assert!(!Car::gas_level_at_least(7).test(&car));
        assert!(Car::color_in(&["Red", "Black"]).test(&car));
        assert!(!Car::color_in(&["Green"]).test(&car));
        assert!(Car::passenger_count(3).test(&car));
    }

    #[test]
    fn comparators_order_by_their_field() {
        let low = Car::with_gas_color_passengers(3, "Octarine", &["Rincewind", "Ridcully"]);
        let high = fixture();
        assert_eq!(Car::gas_comparator()(&low, &high), Ordering::Less);
        assert_eq!(
            Car::passenger_count_comparator()(&high, &low),
            Ordering::Greater
        );
    }

    #[test]
    fn display_is_the_braced_single_line_form() {
        let car = fixture();
        assert_eq!(
            car.to_string(),
            "Car { gas_level: 6, color: Red, passengers: [Fred, Jim, Sheila], no trunk }"
        );
    }
}
