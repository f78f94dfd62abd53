//! 標準モデル (World)
//!
//! 推論中に成長する有向ラベル付きグラフ。要素は作成順に採番され、
//! 一度作成された要素とエッジは削除されない (追記専用)。

use mimizuku_model::{Concept, RoleIri};
use std::collections::{HashMap, HashSet};

/// Element key, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Node of the canonical model: a label of concepts known to hold, and
/// role-named directed connections to other elements. Self-loops and
/// cycles are allowed.
#[derive(Debug, Clone)]
pub struct Element {
    id: ElementId,
    label: HashSet<Concept>,
    successors: HashMap<RoleIri, HashSet<ElementId>>,
}

impl Element {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn label(&self) -> &HashSet<Concept> {
        &self.label
    }

    pub fn has_label(&self, concept: &Concept) -> bool {
        self.label.contains(concept)
    }

    /// Roles on which this element has at least one successor.
    pub fn successor_roles(&self) -> impl Iterator<Item = &RoleIri> {
        self.successors.keys()
    }

    pub fn successors(&self, role: &RoleIri) -> HashSet<ElementId> {
        self.successors.get(role).cloned().unwrap_or_default()
    }
}

/// The mutable canonical model owned by a single reasoning run.
#[derive(Debug, Clone, Default)]
pub struct World {
    elements: Vec<Element>,
    by_seed: HashMap<Concept, ElementId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a fresh element labeled with a single seed concept.
    pub fn create_element(&mut self, seed: Concept) -> ElementId {
        let id = ElementId(self.elements.len());
        let mut label = HashSet::new();
        label.insert(seed.clone());
        self.elements.push(Element {
            id,
            label,
            successors: HashMap::new(),
        });
        // First element created for a seed keeps the registration
        self.by_seed.entry(seed).or_insert(id);
        id
    }

    pub fn element(&self, id: ElementId) -> &Element {
        // Ids are only minted by create_element, so the index is always valid
        &self.elements[id.0]
    }

    /// Add a concept to an element's label. Returns true if the label grew.
    pub fn add_label(&mut self, id: ElementId, concept: Concept) -> bool {
        self.elements[id.0].label.insert(concept)
    }

    pub fn has_label(&self, id: ElementId, concept: &Concept) -> bool {
        self.elements[id.0].label.contains(concept)
    }

    /// Add a directed role edge. Returns true if the edge is new.
    pub fn connect(&mut self, from: ElementId, role: &RoleIri, to: ElementId) -> bool {
        self.elements[from.0]
            .successors
            .entry(role.clone())
            .or_default()
            .insert(to)
    }

    pub fn successors(&self, id: ElementId, role: &RoleIri) -> HashSet<ElementId> {
        self.elements[id.0].successors(role)
    }

    /// The element created for this seed concept, if any. An element
    /// whose label merely grew to contain the concept does not match;
    /// reuse keyed on the seed stays independent of label iteration
    /// order and of which rule fired first.
    pub fn element_seeded_with(&self, concept: &Concept) -> Option<ElementId> {
        self.by_seed.get(concept).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> {
        (0..self.elements.len()).map(ElementId)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}
