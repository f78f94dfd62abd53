//! EL 包含推論エンジン
//!
//! このクレートは EL フラグメントの完備化 (飽和) アルゴリズムを実装します:
//! - 公理の正規化 (等価公理の除去・EL 形状フィルタ)
//! - 概念ユニバース (部分概念閉包による状態空間の有界化)
//! - 標準モデルの構築と 6 つの完備化規則の不動点適用
//! - 概念名の包含分類クエリ

pub mod completion;
pub mod loader;
pub mod normalize;
pub mod reasoner;
pub mod universe;
pub mod world;

pub use completion::CompletionEngine;
pub use loader::{JsonOntologyLoader, OntologyDocument, OntologyLoader};
pub use normalize::{normalize, Normalization, NormalizationWarning, TBox};
pub use reasoner::ElReasoner;
pub use universe::ConceptUniverse;
pub use world::{Element, ElementId, World};

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElError {
    #[error("unknown concept name: {0}")]
    UnknownConceptName(String),

    #[error("failed to load ontology: {0}")]
    Load(String),

    #[error("malformed ontology document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}
