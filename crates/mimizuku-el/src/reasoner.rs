//! EL 分類リーナー
//!
//! 正規化済み TBox と概念ユニバースを保持し、クエリごとに新しい
//! 標準モデルを構築して包含分類を行う。コンテキストは不変なので、
//! 同じオントロジーに対するクエリは何度でも再利用できる。

use crate::completion::CompletionEngine;
use crate::normalize::{normalize, NormalizationWarning, TBox};
use crate::universe::ConceptUniverse;
use crate::world::World;
use crate::ElError;
use mimizuku_model::{Concept, ConceptIri, Ontology};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// EL subsumption reasoner over a fixed ontology.
pub struct ElReasoner {
    tbox: TBox,
    universe: ConceptUniverse,
    concept_names: HashSet<ConceptIri>,
    warnings: Vec<NormalizationWarning>,
}

impl ElReasoner {
    /// Normalize the ontology's axioms and build the reasoning context.
    /// Warnings for dropped axioms are retained and queryable.
    pub fn new(ontology: &Ontology) -> Self {
        let normalization = normalize(&ontology.axioms);
        let universe = ConceptUniverse::from_ontology(ontology);
        tracing::debug!(
            inclusions = normalization.tbox.len(),
            universe = universe.len(),
            warnings = normalization.warnings.len(),
            "reasoning context built"
        );
        Self {
            tbox: normalization.tbox,
            universe,
            concept_names: ontology.concept_names.clone(),
            warnings: normalization.warnings,
        }
    }

    /// Assemble a reasoner from an already-normalized TBox, a universe and
    /// a concept-name set, for callers that manage those pieces themselves.
    pub fn from_parts(
        tbox: TBox,
        universe: ConceptUniverse,
        concept_names: HashSet<ConceptIri>,
    ) -> Self {
        Self {
            tbox,
            universe,
            concept_names,
            warnings: Vec::new(),
        }
    }

    /// Issues collected while normalizing the ontology.
    pub fn warnings(&self) -> &[NormalizationWarning] {
        &self.warnings
    }

    pub fn tbox(&self) -> &TBox {
        &self.tbox
    }

    pub fn universe(&self) -> &ConceptUniverse {
        &self.universe
    }

    /// All concept names subsuming the queried concept name, the query
    /// itself included. ⊤ is not a concept name and is never part of the
    /// result; use [`is_subsumed_by`](Self::is_subsumed_by) with
    /// `Concept::Thing` to ask about it.
    pub fn classify(&self, query: &ConceptIri) -> Result<BTreeSet<ConceptIri>, ElError> {
        let root_label = self.saturated_root_label(query)?;

        let subsumers = root_label
            .iter()
            .filter_map(|concept| match concept {
                Concept::Named(iri) if self.concept_names.contains(iri) => Some(iri.clone()),
                _ => None,
            })
            .collect();
        Ok(subsumers)
    }

    /// Check whether the queried concept name is subsumed by an arbitrary
    /// EL expression (for example `Concept::Thing`).
    pub fn is_subsumed_by(&self, query: &ConceptIri, sup: &Concept) -> Result<bool, ElError> {
        let root_label = self.saturated_root_label(query)?;
        Ok(root_label.contains(sup))
    }

    /// Classify every concept name of the ontology (TBox classification).
    pub fn classify_all(&self) -> Result<BTreeMap<ConceptIri, BTreeSet<ConceptIri>>, ElError> {
        let mut hierarchy = BTreeMap::new();
        for name in &self.concept_names {
            hierarchy.insert(name.clone(), self.classify(name)?);
        }
        Ok(hierarchy)
    }

    fn saturated_root_label(&self, query: &ConceptIri) -> Result<HashSet<Concept>, ElError> {
        if !self.concept_names.contains(query) {
            return Err(ElError::UnknownConceptName(query.to_string()));
        }

        // Fresh world per query; the context stays untouched
        let mut world = World::new();
        let root = world.create_element(Concept::Named(query.clone()));
        CompletionEngine::new(&self.tbox, &self.universe).saturate(&mut world);
        tracing::debug!(query = %query, elements = world.len(), "classification finished");

        Ok(world.element(root).label().clone())
    }
}
