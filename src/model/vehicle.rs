//! Vehicle type with capacity, cost, and category.

use crate::geo::Location;

use super::route::Trip;

/// The category a vehicle belongs to, and the category an employee may
/// prefer. `Any` on either side is always compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleCategory {
    Premium,
    Normal,
    Any,
}

impl VehicleCategory {
    /// Parses the input document's lowercase category strings.
    /// Anything other than `"premium"`/`"normal"` is treated as `Any`.
    pub fn parse(s: &str) -> Self {
        match s {
            "premium" => VehicleCategory::Premium,
            "normal" => VehicleCategory::Normal,
            _ => VehicleCategory::Any,
        }
    }

    /// The output document's category label.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Premium => "premium",
            VehicleCategory::Normal => "normal",
            VehicleCategory::Any => "any",
        }
    }
}

/// A vehicle in the fleet: capacity, cost, category, and its evolving
/// routing state (available time, current location, trips so far).
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: String,
    pub capacity: i32,
    pub cost_per_km: f64,
    pub speed_kmh: f64,
    pub depot_loc: Location,
    pub category: VehicleCategory,
    /// Monotonically advancing clock: minutes-since-midnight at which this
    /// vehicle is next available.
    pub available_time: i64,
    /// Monotonically advancing position: starts at `depot_loc`, moves to
    /// OFFICE after each completed trip.
    pub current_loc: Location,
    pub trips: Vec<Trip>,
    pub total_cost: f64,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, capacity: i32, cost_per_km: f64, speed_kmh: f64) -> Self {
        let depot_loc = Location::new(0.0, 0.0);
        Self {
            id: id.into(),
            capacity,
            cost_per_km,
            speed_kmh,
            depot_loc,
            category: VehicleCategory::Any,
            available_time: 0,
            current_loc: depot_loc,
            trips: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// Recomputes `total_cost` as the sum of every trip with at least one
    /// pickup (idle, passenger-less trips contribute nothing — see
    /// DESIGN.md for why this diverges from the original source).
    pub fn recompute_total_cost(&mut self) {
        self.total_cost = self
            .trips
            .iter()
            .filter(|t| t.current_capacity > 0)
            .map(|t| t.total_cost)
            .sum();
    }
}
