//! Great-circle distance with a per-stop-id override table.

use std::collections::HashMap;

/// A pair of decimal-degree coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two locations, in kilometres.
///
/// # Examples
///
/// ```
/// use commute_router::geo::{Location, dist};
///
/// let a = Location::new(12.97, 77.59);
/// let b = Location::new(12.98, 77.60);
/// assert!(dist(a, b) > 0.0);
/// assert!((dist(a, a)).abs() < 1e-9);
/// ```
pub fn dist(a: Location, b: Location) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// Sentinel travel time (minutes) returned when a vehicle's speed is
/// non-positive. Large enough to fail any `due_time` check.
pub const TRAVEL_TIME_SENTINEL: i64 = 1_000_000_000;

/// Travel time in whole minutes for `km` at `speed_kmh`.
///
/// Returns [`TRAVEL_TIME_SENTINEL`] when `speed_kmh <= 0.0`.
///
/// # Examples
///
/// ```
/// use commute_router::geo::travel_minutes;
///
/// assert_eq!(travel_minutes(30.0, 30.0), 60);
/// assert_eq!(travel_minutes(10.0, 0.0), commute_router::geo::TRAVEL_TIME_SENTINEL);
/// ```
pub fn travel_minutes(km: f64, speed_kmh: f64) -> i64 {
    if speed_kmh <= 0.0 {
        return TRAVEL_TIME_SENTINEL;
    }
    ((km / speed_kmh) * 60.0).round() as i64
}

/// Normalizes a stop id so that every drop-sentinel spelling
/// (`"drop"`, `"DROP"`, `"END"`, `"OFFICE"`, `"Office"`) maps to the same
/// override-table key.
fn norm_id(id: &str) -> &str {
    match id {
        "drop" | "DROP" | "END" | "OFFICE" | "Office" => "drop",
        other => other,
    }
}

/// A symmetric table of distance overrides, keyed by normalized stop-id
/// pair. Distances are stored in metres and returned in kilometres.
#[derive(Debug, Clone, Default)]
pub struct DistanceOverrides {
    table: HashMap<(String, String), f64>,
}

impl DistanceOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an override of `metres` between `from_id` and `to_id`.
    /// Lookup is symmetric regardless of insertion order.
    pub fn insert(&mut self, from_id: &str, to_id: &str, metres: f64) {
        let key = Self::key(from_id, to_id);
        self.table.insert(key, metres);
    }

    fn key(a: &str, b: &str) -> (String, String) {
        let (a, b) = (norm_id(a), norm_id(b));
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    fn lookup_km(&self, from_id: &str, to_id: &str) -> Option<f64> {
        if from_id.is_empty() || to_id.is_empty() {
            return None;
        }
        self.table
            .get(&Self::key(from_id, to_id))
            .map(|metres| metres / 1000.0)
    }

    /// Distance between two identified stops: returns the override in
    /// kilometres if registered for the unordered pair, otherwise falls
    /// back to great-circle distance between `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use commute_router::geo::{DistanceOverrides, Location};
    ///
    /// let mut overrides = DistanceOverrides::new();
    /// overrides.insert("E1", "OFFICE", 5000.0);
    ///
    /// let a = Location::new(0.0, 0.0);
    /// let b = Location::new(1.0, 1.0);
    /// assert_eq!(overrides.dist_by_id("E1", "END", a, b), 5.0);
    /// assert_eq!(overrides.dist_by_id("END", "E1", a, b), 5.0);
    /// ```
    pub fn dist_by_id(&self, from_id: &str, to_id: &str, a: Location, b: Location) -> f64 {
        self.lookup_km(from_id, to_id).unwrap_or_else(|| dist(a, b))
    }
}
