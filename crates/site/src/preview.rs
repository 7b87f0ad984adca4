//! Link preview: drive a surface from a JSON submission.
//!
//! Input is one JSON object tagged by `form`:
//!
//! ```json
//! {"form": "contact", "name": "Asha", "email": "a@x.com", "phone": "555", "message": "Hi"}
//! {"form": "order", "product": "Grocery Bags", "name": "Asha", "address": "...", "phone": "555", "quantity": 200}
//! ```
//!
//! Every other key is fed to the surface as a field edit, exactly as the page
//! would feed input events, then the form is submitted.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde_json::{Number, Value};

use varahi_dispatch::{DispatchConfig, Navigator, SubmitOutcome};

use crate::{CatalogSurface, ContactSurface};

#[derive(Debug, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
enum Submission {
    Contact {
        #[serde(flatten)]
        fields: BTreeMap<String, Value>,
    },
    Order {
        product: String,
        #[serde(flatten)]
        fields: BTreeMap<String, Value>,
    },
}

/// Parse `input`, replay it on the matching surface and submit.
pub fn run<N: Navigator>(input: &str, config: &DispatchConfig, navigator: N) -> Result<SubmitOutcome> {
    let submission: Submission =
        serde_json::from_str(input).context("submission is not a valid JSON form object")?;

    let outcome = match submission {
        Submission::Contact { fields } => {
            let mut surface = ContactSurface::new(config, navigator);
            for (name, value) in &fields {
                surface
                    .set_named(name, field_text(name, value)?)
                    .with_context(|| format!("contact form rejected field {name:?}"))?;
            }
            if !surface.can_submit() {
                tracing::warn!("contact submission has empty required fields");
            }
            surface.submit()
        }
        Submission::Order { product, fields } => {
            let mut surface = CatalogSurface::new(config, navigator);
            surface.select(product.as_str());
            for (name, value) in &fields {
                surface
                    .set_named(name, field_text(name, value)?)
                    .with_context(|| format!("order form rejected field {name:?}"))?;
            }
            surface.submit()
        }
    };

    if !outcome.is_dispatched() {
        bail!("nothing was dispatched (no product selected)");
    }
    Ok(outcome)
}

fn field_text(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_text(n)),
        Value::Null => Ok(String::new()),
        other => Err(anyhow!("field {name:?} must be a string or number, got {other}")),
    }
}

/// Whole-number floats (`200.0`) are written the way a number input shows
/// them. Past 2^53 a float no longer holds an exact integer and is left alone.
fn number_text(n: &Number) -> String {
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= EXACT_LIMIT => format!("{f:.0}"),
        _ => n.to_string(),
    }
}
