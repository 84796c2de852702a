use serde::Serialize;

use skuforge_core::{RunId, ValidationError};
use skuforge_products::{ProductAttributes, ProductRecord, Sku};

use crate::registry::SkuRegistry;

/// Result of processing one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Approved(Sku),
    Rejected(ValidationError),
}

impl Outcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, Outcome::Approved(_))
    }

    pub fn sku(&self) -> Option<&Sku> {
        match self {
            Outcome::Approved(sku) => Some(sku),
            Outcome::Rejected(_) => None,
        }
    }
}

/// Console form: `[APPROVED] <SKU>` or `[REJECTED] <message>`.
impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Outcome::Approved(sku) => write!(f, "[APPROVED] {sku}"),
            Outcome::Rejected(err) => write!(f, "[REJECTED] {err}"),
        }
    }
}

/// Approved/rejected tallies for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub approved: usize,
    pub rejected: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let approved = outcomes.iter().filter(|o| o.is_approved()).count();
        Self {
            approved,
            rejected: outcomes.len() - approved,
        }
    }

    pub fn total(&self) -> usize {
        self.approved + self.rejected
    }
}

/// Validates, derives and allocates SKUs for an ordered sequence of inputs.
///
/// Single-threaded: the registry is owned by the runner and mutated one
/// record at a time. A rejected record never affects the registry.
#[derive(Debug)]
pub struct Runner {
    registry: SkuRegistry,
    current_year: i32,
    run_id: RunId,
}

impl Runner {
    pub fn new(current_year: i32) -> Self {
        Self {
            registry: SkuRegistry::new(),
            current_year,
            run_id: RunId::new(),
        }
    }

    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = run_id;
        self
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn registry(&self) -> &SkuRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> SkuRegistry {
        self.registry
    }

    /// Process a single record.
    pub fn process(&mut self, attrs: &ProductAttributes) -> Outcome {
        match ProductRecord::new(attrs, self.current_year) {
            Ok(record) => Outcome::Approved(self.registry.allocate(record.derive_sku())),
            Err(err) => Outcome::Rejected(err),
        }
    }

    /// Process every record in order, one outcome per input.
    pub fn run<'a, I>(&mut self, inputs: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = &'a ProductAttributes>,
    {
        let span = tracing::info_span!(
            "sku_run",
            run_id = %self.run_id,
            current_year = self.current_year
        );
        let _guard = span.enter();

        let outcomes: Vec<Outcome> = inputs
            .into_iter()
            .enumerate()
            .map(|(index, attrs)| {
                let outcome = self.process(attrs);
                match &outcome {
                    Outcome::Approved(sku) => tracing::info!(index, sku = %sku, "approved"),
                    Outcome::Rejected(err) => {
                        tracing::warn!(index, field = err.field(), error = %err, "rejected")
                    }
                }
                outcome
            })
            .collect();

        let summary = RunSummary::from_outcomes(&outcomes);
        tracing::info!(
            approved = summary.approved,
            rejected = summary.rejected,
            issued = self.registry.len(),
            "run complete"
        );

        outcomes
    }
}
