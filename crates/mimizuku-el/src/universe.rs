//! 概念ユニバース
//!
//! オントロジーに出現する全ての部分概念の有限閉包。完備化規則が要素の
//! ラベルに追加してよい概念はこの集合の要素に限られ、これが飽和の
//! 停止性を保証する。

use mimizuku_model::{Concept, Ontology};
use std::collections::HashSet;

/// Finite closure set of all EL-shaped expressions in the ontology.
/// Read-only during reasoning; acts as the membership oracle bounding
/// what may ever be asserted of a model element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptUniverse {
    concepts: HashSet<Concept>,
}

impl ConceptUniverse {
    pub fn from_ontology(ontology: &Ontology) -> Self {
        Self::from_concepts(ontology.sub_concepts.iter().cloned())
    }

    /// Build from a raw sub-expression closure, filtering out non-EL
    /// shapes (the same scoping decision the normalizer applies to axioms).
    pub fn from_concepts<I: IntoIterator<Item = Concept>>(concepts: I) -> Self {
        let mut kept = HashSet::new();
        let mut dropped = 0usize;
        for concept in concepts {
            if concept.is_el_shape() {
                kept.insert(concept);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::debug!(dropped, "non-EL sub-concepts excluded from universe");
        }
        Self { concepts: kept }
    }

    pub fn contains(&self, concept: &Concept) -> bool {
        self.concepts.contains(concept)
    }

    pub fn contains_thing(&self) -> bool {
        self.concepts.contains(&Concept::Thing)
    }

    /// Look up the registered conjunction of two expressions. The ontology
    /// may register only one canonical operand order, so both orders are
    /// tried.
    pub fn registered_conjunction(&self, left: &Concept, right: &Concept) -> Option<&Concept> {
        let forward = Concept::intersection_of(left.clone(), right.clone());
        if let Some(found) = self.concepts.get(&forward) {
            return Some(found);
        }
        let reversed = Concept::intersection_of(right.clone(), left.clone());
        self.concepts.get(&reversed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
