//! オントロジーローダー
//!
//! オントロジー文書 (公理リストの JSON 表現) を読み込み、部分概念
//! 閉包付きの [`Ontology`] を構築する。OWL 構文の解析は扱わない。

use crate::ElError;
use mimizuku_model::{Axiom, Ontology};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized ontology document: the raw axiom list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OntologyDocument {
    pub axioms: Vec<Axiom>,
}

impl OntologyDocument {
    /// Fold the axiom list into an ontology, building the name/role sets
    /// and the sub-expression closure along the way.
    pub fn into_ontology(self) -> Ontology {
        let mut ontology = Ontology::new();
        for axiom in self.axioms {
            ontology.add_axiom(axiom);
        }
        ontology
    }
}

/// Ontology loader trait
pub trait OntologyLoader {
    fn load_from_str(&self, input: &str) -> Result<Ontology, ElError>;
}

/// Default JSON document loader
pub struct JsonOntologyLoader;

impl OntologyLoader for JsonOntologyLoader {
    fn load_from_str(&self, input: &str) -> Result<Ontology, ElError> {
        let document: OntologyDocument = serde_json::from_str(input)?;
        Ok(document.into_ontology())
    }
}

impl JsonOntologyLoader {
    pub fn load_from_path(&self, path: &Path) -> Result<Ontology, ElError> {
        let input = std::fs::read_to_string(path)
            .map_err(|err| ElError::Load(format!("{}: {}", path.display(), err)))?;
        self.load_from_str(&input)
    }
}
