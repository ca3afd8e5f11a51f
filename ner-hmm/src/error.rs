//! # Erros do Sistema NER
//!
//! Taxonomia única de erros do crate. Todas as falhas são reportadas de forma
//! síncrona ao chamador imediato: não há retry automático nem resultado
//! parcial — cada chamada de treino ou decodificação sucede ou falha inteira.
//!
//! Palavras desconhecidas durante a decodificação **não** são erro: elas são
//! substituídas silenciosamente pelo token reservado `UNK` (ver [`crate::hmm`]).

use thiserror::Error;

/// Alias de resultado usado em todo o crate.
pub type Result<T> = std::result::Result<T, NerError>;

/// Erros possíveis ao treinar ou decodificar modelos de sequência.
#[derive(Debug, Error)]
pub enum NerError {
    /// Entrada malformada: sentença vazia no decodificador, corpus vazio ou
    /// sentença sem anotações no estimador.
    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    /// Probabilidades quebradas: constante de suavização zero, negativa ou
    /// não-finita, ou tabela treinada cuja linha não soma 1. Sem suavização
    /// positiva as contagens viram `log(0) = -inf` e zeram caminhos inteiros
    /// do Viterbi, então isso é rejeitado na construção do modelo, nunca
    /// deixado chegar à decodificação.
    #[error("probabilidade degenerada: {0}")]
    DegenerateProbability(String),

    /// Capacidade presente na interface mas sem implementação (caminho
    /// discriminativo/CRF). Falha explícita em vez de trabalho parcial.
    #[error("capacidade não implementada: {0}")]
    Unimplemented(&'static str),

    /// Falha ao serializar ou desserializar um modelo treinado.
    #[error("falha de serialização: {0}")]
    Serialization(#[from] serde_json::Error),
}
