use serde::{Deserialize, Serialize};

/// One submission's worth of car attributes, captured from the form or the
/// JSON API. Immutable once built; dropped after a single prediction.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInput {
    pub year: i32,
    pub mileage: u32,
    pub car_model: String,
    pub transmission: String,
    pub fuel_type: String,
    pub tax: u32,
    pub mpg: f64,
    pub engine_size: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct PredictionOut {
    pub t: i64,
    pub car_model: String,
    pub year: i32,
    /// Estimated sale price, truncated to a whole unit.
    pub price: i64,
}

/// Input bounds for the numeric fields. Values outside the range are
/// clamped on receipt rather than rejected.
pub const YEAR_MIN: i32 = 1990;
pub const YEAR_MAX: i32 = 2025;
pub const MILEAGE_MAX: u32 = 300_000;

/// Closed-choice options presented by the form.
pub const CAR_MODELS: &[&str] = &[
    "B-MAX",
    "C-MAX",
    "EcoSport",
    "Edge",
    "Escort",
    "Fiesta",
    "Focus",
    "Fusion",
    "Galaxy",
    "Grand C-MAX",
    "Grand Tourneo Connect",
    "KA",
    "Ka+",
    "Kuga",
    "Mondeo",
    "Mustang",
    "Puma",
    "Ranger",
    "S-MAX",
    "Streetka",
    "Tourneo Connect",
    "Tourneo Custom",
    "Transit Tourneo",
];

pub const TRANSMISSIONS: &[&str] = &["Manual", "Semi-Auto", "Automatic"];

pub const FUEL_TYPES: &[&str] = &["Petrol", "Diesel", "Electric", "Hybrid", "Other"];

impl RawInput {
    /// Range coercion for the numeric fields. No error states: anything the
    /// form can send is folded into the valid range.
    pub fn clamped(mut self) -> Self {
        self.year = self.year.clamp(YEAR_MIN, YEAR_MAX);
        self.mileage = self.mileage.min(MILEAGE_MAX);
        self.mpg = self.mpg.max(0.0);
        self.engine_size = self.engine_size.max(0.0);
        self
    }
}
