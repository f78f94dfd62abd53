//! 公理正規化
//!
//! 等価公理を双方向の包含公理に書き換え、EL フラグメント外の公理を
//! 警告付きで除去する。

use mimizuku_model::{Axiom, Concept};
use serde::{Deserialize, Serialize};

/// Normalized TBox: inclusion axioms over EL-shaped expressions only.
/// Immutable once normalization completes; axiom order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TBox {
    inclusions: Vec<(Concept, Concept)>,
}

impl TBox {
    pub fn iter(&self) -> impl Iterator<Item = &(Concept, Concept)> {
        self.inclusions.iter()
    }

    pub fn len(&self) -> usize {
        self.inclusions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inclusions.is_empty()
    }

    fn push(&mut self, sub: Concept, sup: Concept) {
        self.inclusions.push((sub, sup));
    }
}

/// Non-fatal issue detected during normalization. The offending axiom is
/// dropped; the rest of the ontology remains usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationWarning {
    /// Equivalence axiom whose operand count is not exactly two
    MalformedEquivalence { operand_count: usize },

    /// Inclusion axiom with an operand outside the EL fragment
    UnsupportedAxiom { axiom: String },
}

impl std::fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizationWarning::MalformedEquivalence { operand_count } => {
                write!(
                    f,
                    "equivalence axiom does not consist of two sub-concepts (found {})",
                    operand_count
                )
            }
            NormalizationWarning::UnsupportedAxiom { axiom } => {
                write!(f, "axiom outside the EL fragment dropped: {}", axiom)
            }
        }
    }
}

/// Result of normalization: the usable TBox plus the warning list.
#[derive(Debug, Clone, Default)]
pub struct Normalization {
    pub tbox: TBox,
    pub warnings: Vec<NormalizationWarning>,
}

/// Rewrite raw axioms into a TBox of EL inclusion axioms.
///
/// - `EquivalentClasses(A, B)` becomes `A ⊑ B` and `B ⊑ A`
/// - equivalences with an operand count other than two are dropped
/// - inclusions with a non-EL operand are dropped
///
/// Pure transformation; dropped axioms are reported, never fatal.
pub fn normalize(axioms: &[Axiom]) -> Normalization {
    let mut result = Normalization::default();

    for axiom in axioms {
        match axiom {
            Axiom::SubClassOf(sub, sup) => {
                push_inclusion(&mut result, axiom, sub, sup);
            }
            Axiom::EquivalentClasses(operands) => {
                if operands.len() != 2 {
                    tracing::warn!(
                        operand_count = operands.len(),
                        "equivalence axiom does not consist of two sub-concepts"
                    );
                    result.warnings.push(NormalizationWarning::MalformedEquivalence {
                        operand_count: operands.len(),
                    });
                    continue;
                }
                push_inclusion(&mut result, axiom, &operands[0], &operands[1]);
                push_inclusion(&mut result, axiom, &operands[1], &operands[0]);
            }
        }
    }

    result
}

fn push_inclusion(result: &mut Normalization, origin: &Axiom, sub: &Concept, sup: &Concept) {
    if sub.is_el_shape() && sup.is_el_shape() {
        result.tbox.push(sub.clone(), sup.clone());
    } else {
        tracing::warn!(axiom = %origin, "dropping axiom outside the EL fragment");
        result.warnings.push(NormalizationWarning::UnsupportedAxiom {
            axiom: origin.to_string(),
        });
    }
}
