//! Tag repair chain.
use super::{ChunkRepair, PunctuationNormalizer, Transform};
use crate::conll::Line;

/// Chains transformers, applying them in insertion order.
///
/// The default chain is the one used on chunking input:
/// [PunctuationNormalizer] then [ChunkRepair].
pub struct TagRepair(Vec<Box<dyn Transform + Sync>>);

impl TagRepair {
    /// Empty chain, leaving lines untouched.
    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn add(&mut self, transform: Box<dyn Transform + Sync>) -> &mut TagRepair {
        self.0.push(transform);
        self
    }
}

impl Transform for TagRepair {
    fn transform_own(&self, lines: Vec<Line>) -> Vec<Line> {
        self.0
            .iter()
            .fold(lines, |lines, transform| transform.transform_own(lines))
    }
}

impl Default for TagRepair {
    fn default() -> Self {
        let mut repair = Self::empty();
        repair
            .add(Box::<PunctuationNormalizer>::default())
            .add(Box::<ChunkRepair>::default());
        repair
    }
}
