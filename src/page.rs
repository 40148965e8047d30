use crate::session::SessionState;
use crate::types::{CAR_MODELS, FUEL_TYPES, MILEAGE_MAX, TRANSMISSIONS, YEAR_MAX, YEAR_MIN};

/// What the last interaction produced, shown above the form.
pub enum Outcome {
    None,
    Price(i64),
    Error(String),
}

/// Group an integer's digits in thousands, matching the original app's
/// price formatting.
pub fn format_price(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn select(name: &str, options: &[&str], current: &str) -> String {
    let mut html = format!("<select name=\"{}\">", name);
    for opt in options {
        let sel = if *opt == current { " selected" } else { "" };
        html.push_str(&format!("<option value=\"{0}\"{1}>{0}</option>", opt, sel));
    }
    html.push_str("</select>");
    html
}

/// Render the whole single-page form from the current session values.
pub fn render(state: &SessionState, outcome: &Outcome) -> String {
    let banner = match outcome {
        Outcome::None => String::new(),
        Outcome::Price(p) => format!(
            "<p class=\"result\">Estimated Price: &#8377; {}</p>",
            format_price(*p)
        ),
        Outcome::Error(msg) => format!("<p class=\"error\">Error during prediction: {}</p>", msg),
    };

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Car Price Predictor</title>
<style>
body {{ font-family: sans-serif; max-width: 40em; margin: 2em auto; }}
label {{ display: block; margin-top: 0.8em; }}
.result {{ color: #1a7a2e; font-size: 1.3em; }}
.error {{ color: #a12020; }}
fieldset {{ margin-top: 1em; }}
</style>
</head>
<body>
<h1>Car Price Predictor</h1>
{banner}
<form method="post" action="/predict">
  <label>Car Year
    <input type="number" name="year" min="{year_min}" max="{year_max}" value="{year}">
  </label>
  <label>Mileage
    <input type="number" name="mileage" min="0" max="{mileage_max}" value="{mileage}">
  </label>
  <label>Car Model {model_select}</label>
  <label>Transmission {transmission_select}</label>
  <label>Fuel Type {fuel_select}</label>
  <fieldset>
    <legend>Technical Specs (adjust manually or auto-fill from model averages)</legend>
    <label>Road Tax (&pound;)
      <input type="number" name="tax" min="0" value="{tax}">
    </label>
    <label>MPG
      <input type="number" name="mpg" min="0" step="0.1" value="{mpg}">
    </label>
    <label>Engine Size (L)
      <input type="number" name="engine_size" min="0" step="0.1" value="{engine_size}">
    </label>
    <button formaction="/autofill">Auto-Fill Specs</button>
  </fieldset>
  <p><button type="submit">Predict Price</button></p>
</form>
</body>
</html>
"#,
        banner = banner,
        year_min = YEAR_MIN,
        year_max = YEAR_MAX,
        mileage_max = MILEAGE_MAX,
        year = state.year,
        mileage = state.mileage,
        tax = state.tax,
        mpg = state.mpg,
        engine_size = state.engine_size,
        model_select = select("car_model", CAR_MODELS, &state.car_model),
        transmission_select = select("transmission", TRANSMISSIONS, &state.transmission),
        fuel_select = select("fuel_type", FUEL_TYPES, &state.fuel_type),
    )
}
