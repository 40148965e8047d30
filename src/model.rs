use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

use crate::encode::SchemaDescriptor;

/// On-disk shape of the trained artifact: one coefficient per schema
/// column plus an intercept.
#[derive(Deserialize)]
struct ArtifactJson {
    coefficients: Vec<f64>,
    intercept: f64,
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("feature length mismatch: got {got}, expected {expected}")]
    DimensionMismatch { got: usize, expected: usize },
}

/// A loaded regression artifact, held read-only for the process lifetime.
/// The column order it was trained on lives in the schema descriptor
/// shipped next to it; a mismatch between the two is caught at load, not
/// at predict time.
#[derive(Debug)]
pub struct Predictor {
    coefficients: Vec<f64>,
    intercept: f64,
    schema: SchemaDescriptor,
}

impl Predictor {
    pub fn load(model_path: &str, schema_path: &str) -> Result<Self> {
        let schema_txt = fs::read_to_string(Path::new(schema_path))
            .with_context(|| format!("failed to read schema at {}", schema_path))?;
        let schema: SchemaDescriptor =
            serde_json::from_str(&schema_txt).with_context(|| "failed to parse schema json")?;

        let artifact_txt = fs::read_to_string(Path::new(model_path))
            .with_context(|| format!("failed to read model artifact at {}", model_path))?;
        let artifact: ArtifactJson =
            serde_json::from_str(&artifact_txt).with_context(|| "failed to parse model artifact")?;

        if artifact.coefficients.len() != schema.columns.len() {
            bail!(
                "artifact has {} coefficients but schema v{} lists {} columns",
                artifact.coefficients.len(),
                schema.version,
                schema.columns.len()
            );
        }

        Ok(Self {
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
            schema,
        })
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    pub fn in_dim(&self) -> usize {
        self.coefficients.len()
    }

    /// Run the regression over a batch of rows, one output per row.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictError> {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != self.coefficients.len() {
                return Err(PredictError::DimensionMismatch {
                    got: row.len(),
                    expected: self.coefficients.len(),
                });
            }
            let dot: f64 = row
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, w)| x * w)
                .sum();
            out.push(dot + self.intercept);
        }
        Ok(out)
    }
}
