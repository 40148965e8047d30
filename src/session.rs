use crate::stats::SpecAverages;
use crate::types::RawInput;

/// Field values that survive across interaction cycles, so the auto-fill
/// action can overwrite the three technical-spec fields without resetting
/// the rest of the form.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub year: i32,
    pub mileage: u32,
    pub car_model: String,
    pub transmission: String,
    pub fuel_type: String,
    pub tax: u32,
    pub mpg: f64,
    pub engine_size: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            year: 2018,
            mileage: 40_000,
            car_model: "B-MAX".to_string(),
            transmission: "Manual".to_string(),
            fuel_type: "Petrol".to_string(),
            tax: 150,
            mpg: 55.0,
            engine_size: 1.5,
        }
    }
}

impl SessionState {
    /// Overwrite tax, mpg and engine size from the per-model averages.
    /// Every other field keeps its current value.
    pub fn apply_autofill(&mut self, stats: SpecAverages) {
        self.tax = stats.tax;
        self.mpg = stats.mpg;
        self.engine_size = stats.engine;
    }

    /// Fold one submission into the session so the re-rendered form shows
    /// what the user last entered.
    pub fn absorb(&mut self, input: &RawInput) {
        self.year = input.year;
        self.mileage = input.mileage;
        self.car_model = input.car_model.clone();
        self.transmission = input.transmission.clone();
        self.fuel_type = input.fuel_type.clone();
        self.tax = input.tax;
        self.mpg = input.mpg;
        self.engine_size = input.engine_size;
    }

    /// Snapshot the current field values as one immutable submission.
    pub fn to_raw_input(&self) -> RawInput {
        RawInput {
            year: self.year,
            mileage: self.mileage,
            car_model: self.car_model.clone(),
            transmission: self.transmission.clone(),
            fuel_type: self.fuel_type.clone(),
            tax: self.tax,
            mpg: self.mpg,
            engine_size: self.engine_size,
        }
    }
}
