//! # Tokenizador
//!
//! Divide texto bruto em tokens (palavras e pontuações) preservando a posição
//! de byte de cada token no texto original. O corpus de treino já vem
//! tokenizado; este módulo existe para alimentar o decodificador com texto
//! livre.
//!
//! A segmentação usa as fronteiras de palavra do padrão Unicode (UAX #29),
//! que lidam corretamente com acentuação e pontuação do português.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
///
/// Mantém a referência exata de sua posição no texto (`start` e `end`),
/// permitindo reconstruir o trecho original de uma entidade a partir dos
/// índices de token de um [`crate::span::Span`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// O texto do token (ex: "Lula", ",", "presidente").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Tokeniza um texto em palavras e pontuações.
///
/// Espaços em branco são descartados; todo o resto vira token.
///
/// # Exemplo
/// ```rust
/// use ner_hmm::tokenizer::tokenize;
///
/// let tokens = tokenize("Lula visitou Paris.");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, vec!["Lula", "visitou", "Paris", "."]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (start, piece) in text.split_word_bound_indices() {
        if piece.chars().all(char::is_whitespace) {
            continue;
        }
        tokens.push(Token {
            text: piece.to_string(),
            start,
            end: start + piece.len(),
            index: tokens.len(),
        });
    }
    tokens
}

/// Atalho: tokeniza e devolve apenas os textos, no formato que o
/// decodificador consome.
pub fn words(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.text).collect()
}
