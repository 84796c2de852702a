//! Machine-readable outcome representation.

use serde::Serialize;

use skuforge_registry::Outcome;

/// JSON line for one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OutcomeLine {
    Approved { sku: String },
    Rejected { field: &'static str, reason: String },
}

impl From<&Outcome> for OutcomeLine {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Approved(sku) => OutcomeLine::Approved {
                sku: sku.to_string(),
            },
            Outcome::Rejected(err) => OutcomeLine::Rejected {
                field: err.field(),
                reason: err.to_string(),
            },
        }
    }
}
