//! # Extração de Spans a partir de Tags BIO
//!
//! A saída do decodificador é uma tag por token; o que a aplicação quer são
//! entidades completas ("São Paulo" → LOC). Este módulo implementa a máquina
//! de estados do esquema BIO que reconstrói os spans a partir da sequência de
//! tags, tolerando sequências malformadas (I- sem B- anterior, troca de
//! categoria no meio da entidade) em vez de falhar.

use serde::{Deserialize, Serialize};

/// Um intervalo de tokens com rótulo de entidade.
///
/// # Exemplo
/// Em "Universidade de São Paulo", o span "São Paulo":
/// `Span { start: 2, end: 4, label: "LOC" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Índice do token inicial (inclusivo)
    pub start: usize,
    /// Índice do token final (exclusivo)
    pub end: usize,
    /// Rótulo da entidade (ex: "PER", "ORG")
    pub label: String,
}

/// Converte uma sequência de tags BIO em spans de entidades.
///
/// Regras da varredura:
/// - `B-X` fecha o span aberto (se houver) e abre um novo com rótulo X.
/// - `I-X` estende o span aberto se o rótulo coincidir; com rótulo diferente
///   ou sem span aberto, é tratado como um novo `B-X`.
/// - `O` fecha o span aberto.
/// - Fim da sequência fecha o span aberto.
///
/// # Exemplo
/// ```rust
/// use ner_hmm::span::{bio_to_spans, Span};
///
/// let tags = vec!["O", "B-PER", "I-PER", "O", "B-LOC"];
/// let spans = bio_to_spans(&tags);
/// assert_eq!(spans, vec![
///     Span { start: 1, end: 3, label: "PER".to_string() },
///     Span { start: 4, end: 5, label: "LOC".to_string() },
/// ]);
/// ```
pub fn bio_to_spans<S: AsRef<str>>(tags: &[S]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut current_start: Option<usize> = None;
    let mut current_label: Option<String> = None;

    for (i, tag) in tags.iter().enumerate() {
        let tag = tag.as_ref();
        if let Some(label) = tag.strip_prefix("B-") {
            if let (Some(start), Some(open)) = (current_start, current_label.take()) {
                spans.push(Span { start, end: i, label: open });
            }
            current_start = Some(i);
            current_label = Some(label.to_string());
        } else if let Some(label) = tag.strip_prefix("I-") {
            let continues = current_label.as_deref() == Some(label);
            if !continues {
                // I- órfão ou de outra categoria: vira início de entidade
                if let (Some(start), Some(open)) = (current_start, current_label.take()) {
                    spans.push(Span { start, end: i, label: open });
                }
                current_start = Some(i);
                current_label = Some(label.to_string());
            }
        } else {
            // O (ou tag sem prefixo conhecido): fecha o span aberto
            if let (Some(start), Some(open)) = (current_start.take(), current_label.take()) {
                spans.push(Span { start, end: i, label: open });
            }
        }
    }

    // Fecha último span se aberto
    if let (Some(start), Some(open)) = (current_start, current_label) {
        spans.push(Span { start, end: tags.len(), label: open });
    }

    spans
}
