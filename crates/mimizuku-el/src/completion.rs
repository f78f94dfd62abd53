//! 完備化エンジン
//!
//! 標準モデルに対して 6 つの単調規則を不動点まで適用する。各規則は
//! ラベルとエッジを追加するだけで、削除は行わない。ユニバースが有限で
//! あるため不動点は必ず到達する。

use crate::normalize::TBox;
use crate::universe::ConceptUniverse;
use crate::world::{ElementId, World};
use itertools::Itertools;
use mimizuku_model::{Concept, RoleIri};

/// Applies the six completion rules to a world until no rule adds new
/// information. The TBox and universe are read-only inputs shared across
/// queries; the world is exclusively owned by one run.
pub struct CompletionEngine<'a> {
    tbox: &'a TBox,
    universe: &'a ConceptUniverse,
}

impl<'a> CompletionEngine<'a> {
    pub fn new(tbox: &'a TBox, universe: &'a ConceptUniverse) -> Self {
        Self { tbox, universe }
    }

    /// Run full passes over every element until a pass makes no change.
    /// Elements created mid-pass are visited within the same pass.
    pub fn saturate(&self, world: &mut World) {
        let mut changed = true;
        let mut pass = 0usize;

        while changed {
            changed = false;
            pass += 1;

            let mut index = 0;
            while index < world.len() {
                let id = ElementId(index);
                changed |= self.apply_thing_rule(world, id);
                changed |= self.apply_intersection_decomposition(world, id);
                changed |= self.apply_intersection_composition(world, id);
                changed |= self.apply_existential_introduction(world, id);
                changed |= self.apply_existential_generalization(world, id);
                changed |= self.apply_subsumption_rule(world, id);
                index += 1;
            }

            tracing::debug!(pass, elements = world.len(), changed, "completion pass finished");
        }
    }

    /// ⊤-rule: every element carries ⊤ whenever ⊤ occurs in the ontology.
    fn apply_thing_rule(&self, world: &mut World, id: ElementId) -> bool {
        if self.universe.contains_thing() {
            world.add_label(id, Concept::Thing)
        } else {
            false
        }
    }

    /// ⊓-elimination: C ⊓ D in the label puts both C and D in the label.
    fn apply_intersection_decomposition(&self, world: &mut World, id: ElementId) -> bool {
        let conjunctions: Vec<(Concept, Concept)> = world
            .element(id)
            .label()
            .iter()
            .filter_map(|concept| match concept {
                Concept::IntersectionOf(left, right) => {
                    Some(((**left).clone(), (**right).clone()))
                }
                _ => None,
            })
            .collect();

        let mut changed = false;
        for (left, right) in conjunctions {
            // Operands of a universe member are universe members (closure)
            debug_assert!(self.universe.contains(&left) && self.universe.contains(&right));
            changed |= world.add_label(id, left);
            changed |= world.add_label(id, right);
        }
        changed
    }

    /// ⊓-introduction: for distinct C, D in the label whose conjunction is
    /// registered in the universe (either operand order), add it.
    fn apply_intersection_composition(&self, world: &mut World, id: ElementId) -> bool {
        let label: Vec<Concept> = world.element(id).label().iter().cloned().collect();

        let mut changed = false;
        for (left, right) in label.iter().tuple_combinations() {
            if let Some(conjunction) = self.universe.registered_conjunction(left, right) {
                changed |= world.add_label(id, conjunction.clone());
            }
        }
        changed
    }

    /// ∃-introduction: ∃r.C in the label requires an r-successor with C.
    /// An existing r-successor already carrying C satisfies the
    /// restriction; otherwise the element created for C is reused, and
    /// only if none exists a fresh element is created. Reuse keyed on
    /// the created-for concept keeps the model finite and makes the
    /// saturation result independent of label iteration order.
    fn apply_existential_introduction(&self, world: &mut World, id: ElementId) -> bool {
        let mut restrictions: Vec<(RoleIri, Concept)> = world
            .element(id)
            .label()
            .iter()
            .filter_map(|concept| match concept {
                Concept::SomeValuesFrom { property, filler } => {
                    Some((property.clone(), (**filler).clone()))
                }
                _ => None,
            })
            .collect();
        // Label sets iterate in arbitrary order; fix the processing order
        restrictions.sort();

        let mut changed = false;
        for (role, filler) in restrictions {
            let satisfied = world
                .successors(id, &role)
                .iter()
                .any(|successor| world.has_label(*successor, &filler));
            if satisfied {
                continue;
            }

            match world.element_seeded_with(&filler) {
                Some(existing) => {
                    changed |= world.connect(id, &role, existing);
                }
                None => {
                    // The filler of a universe member is a universe member
                    debug_assert!(
                        self.universe.contains(&filler),
                        "existential filler escaped the concept universe"
                    );
                    let fresh = world.create_element(filler);
                    world.connect(id, &role, fresh);
                    changed = true;
                }
            }
        }
        changed
    }

    /// ∃-generalization: an r-successor carrying C licenses ∃r.C on this
    /// element, provided the restriction is registered in the universe.
    /// The restriction is added, never the filler itself.
    fn apply_existential_generalization(&self, world: &mut World, id: ElementId) -> bool {
        let roles: Vec<RoleIri> = world.element(id).successor_roles().cloned().collect();

        let mut changed = false;
        for role in roles {
            for successor in world.successors(id, &role) {
                let successor_label: Vec<Concept> =
                    world.element(successor).label().iter().cloned().collect();
                for concept in successor_label {
                    let restriction = Concept::SomeValuesFrom {
                        property: role.clone(),
                        filler: Box::new(concept),
                    };
                    if self.universe.contains(&restriction) {
                        changed |= world.add_label(id, restriction);
                    }
                }
            }
        }
        changed
    }

    /// ⊑-rule: a TBox inclusion A ⊑ B with A in the label puts B in the
    /// label, provided B is a universe member.
    fn apply_subsumption_rule(&self, world: &mut World, id: ElementId) -> bool {
        let mut changed = false;
        for (sub, sup) in self.tbox.iter() {
            if world.has_label(id, sub) && self.universe.contains(sup) {
                changed |= world.add_label(id, sup.clone());
            }
        }
        changed
    }
}
