//! # ner-hmm — Reconhecimento de Entidades Nomeadas com HMM
//!
//! Este crate implementa a marcação de tokens com tags BIO usando um Hidden
//! Markov Model: os parâmetros são estimados por máxima verossimilhança a
//! partir de um corpus anotado, e a melhor sequência de tags para uma
//! sentença nova é encontrada por programação dinâmica (Viterbi).
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui pelos módulos nesta ordem:
//!
//! 1.  **Corpus** ([`corpus`]): sentenças anotadas `(palavra, tag_BIO)`.
//! 2.  **Estimação** ([`hmm`]): contagens → suavização → normalização →
//!     log-probabilidades; palavras raras colapsam no token reservado `UNK`.
//! 3.  **Pontuação** ([`scorer`]): os três potenciais (inicial, transição,
//!     emissão) atrás de um trait, para que a decodificação não dependa da
//!     família de modelo.
//! 4.  **Decodificação** ([`viterbi`]): caminho de máxima verossimilhança em
//!     `O(T × N²)`, com desempate determinístico.
//! 5.  **Saída** ([`span`]): tags BIO viram entidades `{start, end, label}`.
//!
//! O ponto de entrada é [`SequenceModel`] ([`model`]), que também declara a
//! variante discriminativa (CRF) como capacidade não suportada.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use ner_hmm::corpus::get_corpus;
//! use ner_hmm::tokenizer::words;
//! use ner_hmm::{HmmConfig, SequenceModel};
//!
//! // 1. Treina o HMM com o corpus anotado embutido
//! let model = SequenceModel::train_hmm(&get_corpus(), &HmmConfig::default()).unwrap();
//!
//! // 2. Decodifica texto novo (palavras desconhecidas caem no UNK)
//! let tokens = words("Marta marcou em Recife.");
//! let tags = model.decode(&tokens).unwrap();
//! assert_eq!(tags.len(), tokens.len());
//!
//! // 3. Converte as tags BIO em entidades estruturadas
//! for span in model.decode_spans(&tokens).unwrap() {
//!     println!("Entidade {} em [{}, {})", span.label, span.start, span.end);
//! }
//! ```

pub mod corpus;
pub mod error;
pub mod hmm;
pub mod indexer;
pub mod model;
pub mod scorer;
pub mod span;
pub mod tokenizer;
pub mod viterbi;

pub use error::{NerError, Result};
pub use hmm::{HmmConfig, HmmModel, UNK};
pub use model::SequenceModel;
pub use scorer::{ProbabilisticSequenceScorer, SequenceScorer};
pub use span::{bio_to_spans, Span};
pub use tokenizer::{tokenize, Token};
pub use viterbi::{viterbi_decode, ViterbiPath};
