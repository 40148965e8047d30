use std::path::PathBuf;

/// Runtime configuration, read from the environment with workable local
/// defaults so the demo artifacts under `models/` load without any setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub model_path: String,
    pub schema_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let model_path = std::env::var("MODEL_PATH")
            .unwrap_or_else(|_| resolve_artifact_path("car_price_onehot.json"));
        let schema_path = std::env::var("SCHEMA_PATH")
            .unwrap_or_else(|_| resolve_artifact_path("car_price_onehot.schema.json"));
        Self {
            port,
            model_path,
            schema_path,
        }
    }
}

/// Try the usual run locations for a bundled artifact: project root, CWD,
/// then next to the executable. Falls back to the relative path; the
/// loader reports the miss with context.
fn resolve_artifact_path(file: &str) -> String {
    let candidates = [
        PathBuf::from("models").join(file),
        PathBuf::from(file),
        {
            let mut p = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
            p.pop(); // exe dir
            p.push("models");
            p.push(file);
            p
        },
    ];

    for c in candidates {
        if c.exists() {
            return c.to_string_lossy().into_owned();
        }
    }

    PathBuf::from("models").join(file).to_string_lossy().into_owned()
}
