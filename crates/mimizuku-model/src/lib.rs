//! # Mimizuku 概念モデルライブラリ
//!
//! EL 記述論理の概念式・公理・オントロジーのデータモデルを提供
//! 等価性は常に構造的 (レンダリング文字列は診断用のみ)

pub mod model;

pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod concept_tests {
        use super::*;

        #[test]
        fn test_structural_equality() {
            let c1 = Concept::some_values_from("r", Concept::named("B"));
            let c2 = Concept::some_values_from("r", Concept::named("B"));
            let c3 = Concept::some_values_from("s", Concept::named("B"));

            assert_eq!(c1, c2);
            assert_ne!(c1, c3);
        }

        #[test]
        fn test_conjunction_order_is_significant() {
            let ab = Concept::intersection_of(Concept::named("A"), Concept::named("B"));
            let ba = Concept::intersection_of(Concept::named("B"), Concept::named("A"));
            assert_ne!(ab, ba);
        }

        #[test]
        fn test_el_shape_accepts_el_fragment() {
            assert!(Concept::Thing.is_el_shape());
            assert!(Concept::named("A").is_el_shape());
            assert!(Concept::intersection_of(Concept::named("A"), Concept::named("B")).is_el_shape());
            assert!(Concept::some_values_from("r", Concept::named("A")).is_el_shape());
        }

        #[test]
        fn test_el_shape_rejects_richer_constructors() {
            assert!(!Concept::Nothing.is_el_shape());
            assert!(!Concept::ComplementOf(Box::new(Concept::named("A"))).is_el_shape());
            assert!(!Concept::UnionOf(
                Box::new(Concept::named("A")),
                Box::new(Concept::named("B"))
            )
            .is_el_shape());
            // Non-EL shape nested inside an existential restriction
            let nested = Concept::some_values_from("r", Concept::ComplementOf(Box::new(Concept::named("A"))));
            assert!(!nested.is_el_shape());
        }

        #[test]
        fn test_intersection_of_all_binarizes() {
            let folded = Concept::intersection_of_all(vec![
                Concept::named("A"),
                Concept::named("B"),
                Concept::named("C"),
            ])
            .unwrap();

            let expected = Concept::intersection_of(
                Concept::named("A"),
                Concept::intersection_of(Concept::named("B"), Concept::named("C")),
            );
            assert_eq!(folded, expected);
        }

        #[test]
        fn test_intersection_of_all_edge_cases() {
            assert_eq!(Concept::intersection_of_all(vec![]), None);
            assert_eq!(
                Concept::intersection_of_all(vec![Concept::named("A")]),
                Some(Concept::named("A"))
            );
        }

        #[test]
        fn test_display_rendering() {
            let c = Concept::intersection_of(
                Concept::named("A"),
                Concept::some_values_from("r", Concept::Thing),
            );
            assert_eq!(format!("{}", c), "(A ⊓ ∃r.⊤)");
        }
    }

    #[cfg(test)]
    mod axiom_tests {
        use super::*;

        #[test]
        fn test_axiom_display() {
            let axiom = Axiom::SubClassOf(Concept::named("A"), Concept::named("B"));
            assert_eq!(format!("{}", axiom), "A ⊑ B");

            let equiv = Axiom::EquivalentClasses(vec![Concept::named("A"), Concept::named("B")]);
            assert_eq!(format!("{}", equiv), "A ≡ B");
        }

        #[test]
        fn test_axiom_serde_round_trip() {
            let axiom = Axiom::SubClassOf(
                Concept::named("A"),
                Concept::some_values_from("r", Concept::named("B")),
            );

            let json = serde_json::to_string(&axiom).unwrap();
            let back: Axiom = serde_json::from_str(&json).unwrap();
            assert_eq!(axiom, back);
        }
    }

    #[cfg(test)]
    mod ontology_tests {
        use super::*;

        #[test]
        fn test_empty_ontology() {
            let ontology = Ontology::new();
            assert!(ontology.axioms.is_empty());
            assert!(ontology.concept_names.is_empty());
            assert!(ontology.roles.is_empty());
            assert!(ontology.sub_concepts.is_empty());
        }

        #[test]
        fn test_add_axiom_collects_closure() {
            let mut ontology = Ontology::new();
            ontology.add_axiom(Axiom::SubClassOf(
                Concept::named("A"),
                Concept::some_values_from("r", Concept::named("B")),
            ));

            assert_eq!(ontology.axioms.len(), 1);
            assert!(ontology.concept_names.contains(&ConceptIri::new("A")));
            assert!(ontology.concept_names.contains(&ConceptIri::new("B")));
            assert!(ontology.roles.contains(&RoleIri::new("r")));

            // The closure holds the restriction itself and every nested piece
            assert!(ontology.sub_concepts.contains(&Concept::named("A")));
            assert!(ontology.sub_concepts.contains(&Concept::named("B")));
            assert!(ontology
                .sub_concepts
                .contains(&Concept::some_values_from("r", Concept::named("B"))));
        }

        #[test]
        fn test_add_equivalence_collects_all_operands() {
            let mut ontology = Ontology::new();
            ontology.add_axiom(Axiom::EquivalentClasses(vec![
                Concept::named("A"),
                Concept::intersection_of(Concept::named("B"), Concept::named("C")),
            ]));

            assert!(ontology.concept_names.contains(&ConceptIri::new("A")));
            assert!(ontology.concept_names.contains(&ConceptIri::new("B")));
            assert!(ontology.concept_names.contains(&ConceptIri::new("C")));
            assert!(ontology
                .sub_concepts
                .contains(&Concept::intersection_of(Concept::named("B"), Concept::named("C"))));
        }

        #[test]
        fn test_summary_counts() {
            let mut ontology = Ontology::new();
            ontology.add_axiom(Axiom::SubClassOf(
                Concept::named("A"),
                Concept::some_values_from("r", Concept::named("B")),
            ));
            ontology.add_axiom(Axiom::SubClassOf(Concept::named("B"), Concept::named("C")));

            let summary = ontology.summary();
            assert_eq!(summary.axiom_count, 2);
            assert_eq!(summary.concept_name_count, 3);
            assert_eq!(summary.role_count, 1);
            // A, B, C, ∃r.B
            assert_eq!(summary.concept_count, 4);
        }
    }
}
