use rand::Rng;

use crate::errors::GenerationError;

/// Collection of valid identifiers a reference field may sample from.
///
/// Reference plausibility is an id-pool membership guarantee, not an
/// enforced foreign key; nothing checks the written files against each
/// other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPool {
    ids: Vec<u32>,
}

impl IdPool {
    pub fn new(ids: Vec<u32>) -> Self {
        Self { ids }
    }

    /// Dense pool `1..=count`, the surrogate-id range of a freshly
    /// generated table.
    pub fn dense(count: u32) -> Self {
        Self {
            ids: (1..=count).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Guard a generator against sampling from an empty pool.
    pub fn ensure_non_empty(
        &self,
        table: &'static str,
        column: &'static str,
    ) -> Result<(), GenerationError> {
        if self.ids.is_empty() {
            return Err(GenerationError::EmptyIdPool { table, column });
        }
        Ok(())
    }

    /// Uniform draw. Callers run `ensure_non_empty` first.
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        self.ids[rng.random_range(0..self.ids.len())]
    }
}
