//! # Modelo de Sequência Decodificável
//!
//! Ponto de entrada polimórfico do crate: a aplicação treina e decodifica
//! através de [`SequenceModel`], sem saber qual família de modelo está por
//! trás.
//!
//! Hoje existe uma família implementada (o HMM generativo). A variante
//! discriminativa (CRF linear-chain com features e pesos aprendidos) está
//! presente na interface como capacidade declarada, mas **sem implementação**:
//! qualquer tentativa de treino ou decodificação com ela falha explicitamente
//! com [`NerError::Unimplemented`], em vez de produzir trabalho parcial.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corpus::AnnotatedSentence;
use crate::error::{NerError, Result};
use crate::hmm::{HmmConfig, HmmModel};
use crate::span::{bio_to_spans, Span};

/// Um modelo de sequência capaz de decodificar tags BIO.
///
/// Depois de construído, o modelo é imutável: todas as operações de
/// decodificação apenas leem, o que torna seguro compartilhá-lo entre
/// threads (ver [`SequenceModel::decode_batch`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SequenceModel {
    /// HMM generativo com probabilidades estimadas por máxima
    /// verossimilhança (o caminho implementado).
    ProbabilisticHmm(HmmModel),
    /// Modelo discriminativo (CRF). Variante declarada e **não suportada**:
    /// toda operação retorna [`NerError::Unimplemented`].
    Discriminative,
}

impl SequenceModel {
    /// Treina a variante HMM sobre o corpus anotado.
    pub fn train_hmm(corpus: &[AnnotatedSentence], config: &HmmConfig) -> Result<Self> {
        Ok(SequenceModel::ProbabilisticHmm(HmmModel::train(corpus, config)?))
    }

    /// Treino discriminativo: capacidade declarada, sem implementação.
    pub fn train_discriminative(_corpus: &[AnnotatedSentence]) -> Result<Self> {
        Err(NerError::Unimplemented("treino discriminativo (CRF)"))
    }

    /// Decodifica uma sentença: uma tag BIO por token.
    pub fn decode(&self, tokens: &[String]) -> Result<Vec<String>> {
        match self {
            SequenceModel::ProbabilisticHmm(model) => model.predict(tokens),
            SequenceModel::Discriminative => {
                Err(NerError::Unimplemented("decodificação discriminativa (CRF)"))
            }
        }
    }

    /// Decodifica várias sentenças em paralelo.
    ///
    /// Cada decodificação é independente e o modelo é somente leitura, então
    /// as sentenças são distribuídas entre threads sem nenhuma trava. A
    /// primeira falha aborta o lote inteiro.
    pub fn decode_batch(&self, sentences: &[Vec<String>]) -> Result<Vec<Vec<String>>> {
        sentences
            .par_iter()
            .map(|tokens| self.decode(tokens))
            .collect()
    }

    /// Decodifica e converte as tags BIO em spans de entidade.
    pub fn decode_spans(&self, tokens: &[String]) -> Result<Vec<Span>> {
        let tags = self.decode(tokens)?;
        Ok(bio_to_spans(&tags))
    }

    /// Serializa o modelo treinado para JSON.
    ///
    /// O layout persistido é estável: lista de tags ordenada por id, lista de
    /// palavras ordenada por id (UNK primeiro) e as três tabelas de
    /// log-probabilidade como vetores planos row-major.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Recarrega um modelo serializado por [`SequenceModel::to_json`].
    ///
    /// O modelo recarregado decodifica **bit a bit** igual ao original.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
