use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::RawInput;

/// Which encoding pipeline a model artifact was trained against. The two
/// variants are not interchangeable; a running instance uses whichever one
/// its loaded schema declares and never mixes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingKind {
    /// 34-column scheme: raw numerics plus one-hot flags for model,
    /// transmission and fuel type.
    OneHot,
    /// 6-column scheme: raw numerics plus small-integer codes for the
    /// categorical fields.
    Integer,
}

/// Versioned column layout shipped alongside the model artifact. The
/// artifact's coefficient order follows `columns` exactly, so this file is
/// the single source of truth for slot order — no duplicated hard-coded
/// lists on the encoder side.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDescriptor {
    pub version: u32,
    pub encoding: EncodingKind,
    pub columns: Vec<String>,
}

/// Integer codes for the compact pipeline. Unmatched values fall through
/// to 0, same as an unmatched one-hot name.
const FUEL_CODES: &[(&str, f64)] = &[
    ("Petrol", 1.0),
    ("Diesel", 2.0),
    ("Electric", 3.0),
    ("Hybrid", 4.0),
    ("Other", 5.0),
];

const TRANSMISSION_CODES: &[(&str, f64)] = &[
    ("Manual", 1.0),
    ("Semi-Auto", 2.0),
    ("Automatic", 3.0),
];

fn code_for(table: &[(&str, f64)], value: &str) -> f64 {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, code)| *code)
        .unwrap_or(0.0)
}

/// Encode one submission into the slot order the schema dictates.
///
/// Works like the flat-map ordering in the upstream predictor: build a
/// name -> value map for everything this input can light up, then walk the
/// schema's column list taking 0.0 for any name that is absent. A category
/// with no matching column (the reference category, or an unknown value)
/// therefore leaves its whole group zeroed without raising an error.
pub fn encode(input: &RawInput, schema: &SchemaDescriptor) -> Vec<f64> {
    let map = match schema.encoding {
        EncodingKind::OneHot => onehot_map(input),
        EncodingKind::Integer => integer_map(input),
    };
    order_from_map(&map, &schema.columns)
}

fn order_from_map(map: &HashMap<String, f64>, columns: &[String]) -> Vec<f64> {
    let mut v = Vec::with_capacity(columns.len());
    for col in columns {
        v.push(*map.get(col).unwrap_or(&0.0));
    }
    v
}

fn onehot_map(input: &RawInput) -> HashMap<String, f64> {
    let mut map = HashMap::new();
    map.insert("year".to_string(), input.year as f64);
    map.insert("mileage".to_string(), input.mileage as f64);
    map.insert("tax".to_string(), input.tax as f64);
    map.insert("mpg".to_string(), input.mpg);
    map.insert("engineSize".to_string(), input.engine_size);

    // Training columns carry a leading space after "model_".
    map.insert(format!("model_ {}", input.car_model), 1.0);
    map.insert(format!("transmission_{}", input.transmission), 1.0);
    map.insert(format!("fuelType_{}", input.fuel_type), 1.0);
    map
}

fn integer_map(input: &RawInput) -> HashMap<String, f64> {
    let mut map = HashMap::new();
    map.insert("year".to_string(), input.year as f64);
    map.insert("km_driven".to_string(), input.mileage as f64);
    map.insert("mpg".to_string(), input.mpg);
    map.insert("engineSize".to_string(), input.engine_size);
    map.insert("fuel".to_string(), code_for(FUEL_CODES, &input.fuel_type));
    map.insert(
        "transmission".to_string(),
        code_for(TRANSMISSION_CODES, &input.transmission),
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RawInput {
        RawInput {
            year: 2018,
            mileage: 40_000,
            car_model: "Fiesta".to_string(),
            transmission: "Manual".to_string(),
            fuel_type: "Petrol".to_string(),
            tax: 101,
            mpg: 61.0,
            engine_size: 1.1,
        }
    }

    fn compact_schema() -> SchemaDescriptor {
        SchemaDescriptor {
            version: 1,
            encoding: EncodingKind::Integer,
            columns: [
                "year",
                "km_driven",
                "mpg",
                "engineSize",
                "fuel",
                "transmission",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    #[test]
    fn compact_pipeline_codes_categoricals() {
        let v = encode(&input(), &compact_schema());
        assert_eq!(v, vec![2018.0, 40_000.0, 61.0, 1.1, 1.0, 1.0]);
    }

    #[test]
    fn compact_pipeline_unknown_code_is_zero() {
        let mut i = input();
        i.fuel_type = "Steam".to_string();
        let v = encode(&i, &compact_schema());
        assert_eq!(v[4], 0.0);
    }

    #[test]
    fn absent_columns_read_as_zero() {
        let map = HashMap::from([("a".to_string(), 1.5)]);
        let cols = vec!["a".to_string(), "b".to_string()];
        assert_eq!(order_from_map(&map, &cols), vec![1.5, 0.0]);
    }
}
