//! EL 概念代数データモデル

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Concept name IRI wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ConceptIri(pub String);

impl ConceptIri {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConceptIri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role (object property) IRI wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RoleIri(pub String);

impl RoleIri {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleIri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Class expression
///
/// Equality and hashing are structural: two expressions are equal iff they
/// have the same variant and the same sub-expressions, recursively. All
/// label-membership decisions in the reasoner rely on this, never on the
/// rendered form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Concept {
    /// owl:Thing (⊤)
    Thing,

    /// owl:Nothing (⊥)
    Nothing,

    /// Named concept
    Named(ConceptIri),

    /// Binary conjunction: C ⊓ D
    IntersectionOf(Box<Concept>, Box<Concept>),

    /// Binary disjunction: C ⊔ D
    UnionOf(Box<Concept>, Box<Concept>),

    /// Complement: ¬C
    ComplementOf(Box<Concept>),

    /// Existential restriction: ∃r.C
    SomeValuesFrom {
        property: RoleIri,
        filler: Box<Concept>,
    },

    /// Universal restriction: ∀r.C
    AllValuesFrom {
        property: RoleIri,
        filler: Box<Concept>,
    },
}

impl Concept {
    pub fn named<S: Into<String>>(iri: S) -> Self {
        Concept::Named(ConceptIri::new(iri))
    }

    pub fn intersection_of(left: Concept, right: Concept) -> Self {
        Concept::IntersectionOf(Box::new(left), Box::new(right))
    }

    pub fn some_values_from<S: Into<String>>(property: S, filler: Concept) -> Self {
        Concept::SomeValuesFrom {
            property: RoleIri::new(property),
            filler: Box::new(filler),
        }
    }

    /// Fold an n-ary conjunction into the binary form the reasoner expects.
    ///
    /// Returns `None` for an empty operand list. A single operand is
    /// returned unchanged.
    pub fn intersection_of_all(operands: Vec<Concept>) -> Option<Concept> {
        operands.into_iter().rev().reduce(|acc, c| Concept::intersection_of(c, acc))
    }

    /// Check whether this expression lies inside the EL fragment
    /// (⊤, concept names, binary conjunction, existential restriction).
    pub fn is_el_shape(&self) -> bool {
        match self {
            Concept::Thing | Concept::Named(_) => true,
            Concept::IntersectionOf(left, right) => left.is_el_shape() && right.is_el_shape(),
            Concept::SomeValuesFrom { filler, .. } => filler.is_el_shape(),
            Concept::Nothing
            | Concept::UnionOf(_, _)
            | Concept::ComplementOf(_)
            | Concept::AllValuesFrom { .. } => false,
        }
    }
}

impl std::fmt::Display for Concept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Concept::Thing => write!(f, "⊤"),
            Concept::Nothing => write!(f, "⊥"),
            Concept::Named(iri) => write!(f, "{}", iri),
            Concept::IntersectionOf(left, right) => write!(f, "({} ⊓ {})", left, right),
            Concept::UnionOf(left, right) => write!(f, "({} ⊔ {})", left, right),
            Concept::ComplementOf(inner) => write!(f, "¬{}", inner),
            Concept::SomeValuesFrom { property, filler } => write!(f, "∃{}.{}", property, filler),
            Concept::AllValuesFrom { property, filler } => write!(f, "∀{}.{}", property, filler),
        }
    }
}

/// Terminological axiom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axiom {
    /// SubClassOf(C D): C ⊑ D
    SubClassOf(Concept, Concept),

    /// EquivalentClasses(C1 ... Cn)
    EquivalentClasses(Vec<Concept>),
}

impl std::fmt::Display for Axiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axiom::SubClassOf(sub, sup) => write!(f, "{} ⊑ {}", sub, sup),
            Axiom::EquivalentClasses(operands) => {
                let rendered: Vec<String> = operands.iter().map(|c| c.to_string()).collect();
                write!(f, "{}", rendered.join(" ≡ "))
            }
        }
    }
}

/// EL Ontology (TBox only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ontology {
    /// All axioms in the ontology
    pub axioms: Vec<Axiom>,

    /// All concept names mentioned in the ontology
    pub concept_names: HashSet<ConceptIri>,

    /// All roles mentioned in the ontology
    pub roles: HashSet<RoleIri>,

    /// Sub-expression closure: every class expression occurring anywhere
    /// in the ontology, including every nested sub-expression
    pub sub_concepts: HashSet<Concept>,
}

/// Ontology load-time report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologySummary {
    pub axiom_count: usize,
    pub concept_count: usize,
    pub concept_name_count: usize,
    pub role_count: usize,
}

impl Ontology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axiom, extending the name/role sets and the sub-expression
    /// closure with everything the axiom mentions.
    pub fn add_axiom(&mut self, axiom: Axiom) {
        match &axiom {
            Axiom::SubClassOf(sub, sup) => {
                self.collect_sub_concepts(sub);
                self.collect_sub_concepts(sup);
            }
            Axiom::EquivalentClasses(operands) => {
                for operand in operands {
                    self.collect_sub_concepts(operand);
                }
            }
        }

        self.axioms.push(axiom);
    }

    pub fn summary(&self) -> OntologySummary {
        OntologySummary {
            axiom_count: self.axioms.len(),
            concept_count: self.sub_concepts.len(),
            concept_name_count: self.concept_names.len(),
            role_count: self.roles.len(),
        }
    }

    fn collect_sub_concepts(&mut self, concept: &Concept) {
        match concept {
            Concept::Thing | Concept::Nothing => {}
            Concept::Named(iri) => {
                self.concept_names.insert(iri.clone());
            }
            Concept::IntersectionOf(left, right) | Concept::UnionOf(left, right) => {
                self.collect_sub_concepts(left);
                self.collect_sub_concepts(right);
            }
            Concept::ComplementOf(inner) => {
                self.collect_sub_concepts(inner);
            }
            Concept::SomeValuesFrom { property, filler }
            | Concept::AllValuesFrom { property, filler } => {
                self.roles.insert(property.clone());
                self.collect_sub_concepts(filler);
            }
        }
        self.sub_concepts.insert(concept.clone());
    }
}
