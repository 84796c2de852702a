use std::collections::HashSet;

use skuforge_products::Sku;

/// Set of SKUs issued so far in this run.
///
/// Grows monotonically and never holds duplicates. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct SkuRegistry {
    issued: HashSet<Sku>,
}

impl SkuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `base`, or the first free `base-1`, `base-2`, ... if taken.
    ///
    /// Never fails: the registry is finite and the suffix counter is not.
    pub fn allocate(&mut self, base: Sku) -> Sku {
        if self.issued.insert(base.clone()) {
            return base;
        }

        let mut n: u64 = 1;
        loop {
            let candidate = base.with_suffix(n);
            if self.issued.insert(candidate.clone()) {
                tracing::debug!(base = %base, sku = %candidate, probes = n, "resolved sku collision");
                return candidate;
            }
            n += 1;
        }
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.issued.contains(sku)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Issued SKUs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Sku> {
        self.issued.iter()
    }
}
