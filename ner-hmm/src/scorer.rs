//! # Interface de Pontuação de Sequências
//!
//! O decodificador de Viterbi não sabe de onde vêm os scores: ele só precisa
//! dos três potenciais do modelo (inicial, transição, emissão). Este módulo
//! define essa fronteira como um trait, de modo que o mesmo decodificador
//! sirva para o HMM generativo de hoje e para um modelo discriminativo de
//! pesos aprendidos amanhã.
//!
//! Todos os scores são **log-probabilidades naturais**: quem consome deve
//! somá-los, nunca multiplicar probabilidades cruas — o produto de muitas
//! probabilidades pequenas sofre underflow numérico.

use crate::hmm::HmmModel;

/// Os três potenciais consultados pela decodificação.
///
/// As tags são referidas pelos ids densos `0..num_tags()` do indexador do
/// modelo. Implementações não têm efeitos colaterais: o mesmo par de
/// argumentos sempre devolve o mesmo score.
pub trait SequenceScorer {
    /// Número de tags (estados) do modelo — dimensiona a treliça do Viterbi.
    fn num_tags(&self) -> usize;

    /// Score da tag na posição 0: $\log P(y_0 = tag)$.
    fn score_initial(&self, tag: usize) -> f64;

    /// Score da transição: $\log P(y_i = curr \mid y_{i-1} = prev)$.
    fn score_transition(&self, prev_tag: usize, curr_tag: usize) -> f64;

    /// Score de emissão do token em `position`: $\log P(x_i \mid y_i = tag)$.
    ///
    /// É aqui — e somente aqui — que conteúdo fora do vocabulário treinado é
    /// tratado: palavras desconhecidas usam a linha de emissão do token
    /// reservado `UNK`, a mesma substituição aplicada no treino a palavras
    /// raras.
    fn score_emission(&self, tokens: &[String], tag: usize, position: usize) -> f64;
}

/// Scorer baseado nas probabilidades condicionais de um [`HmmModel`] treinado.
///
/// Apenas empresta o modelo: criar um scorer é gratuito e vários podem
/// coexistir lendo o mesmo modelo em paralelo.
pub struct ProbabilisticSequenceScorer<'a> {
    model: &'a HmmModel,
}

impl<'a> ProbabilisticSequenceScorer<'a> {
    pub fn new(model: &'a HmmModel) -> Self {
        Self { model }
    }
}

impl SequenceScorer for ProbabilisticSequenceScorer<'_> {
    fn num_tags(&self) -> usize {
        self.model.num_tags()
    }

    fn score_initial(&self, tag: usize) -> f64 {
        self.model.init_log_prob(tag)
    }

    fn score_transition(&self, prev_tag: usize, curr_tag: usize) -> f64 {
        self.model.transition_log_prob(prev_tag, curr_tag)
    }

    fn score_emission(&self, tokens: &[String], tag: usize, position: usize) -> f64 {
        let word_id = self.model.word_id(&tokens[position]);
        self.model.emission_log_prob(tag, word_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::AnnotatedSentence;
    use crate::hmm::HmmConfig;

    fn small_model() -> HmmModel {
        let corpus = vec![AnnotatedSentence {
            text: "Lula visitou Paris e visitou Roma",
            domain: "teste",
            annotations: &[
                ("Lula", "B-PER"),
                ("visitou", "O"),
                ("Paris", "B-LOC"),
                ("e", "O"),
                ("visitou", "O"),
                ("Roma", "B-LOC"),
            ],
        }];
        HmmModel::train(&corpus, &HmmConfig::default()).unwrap()
    }

    #[test]
    fn test_scores_sao_logs_negativos() {
        let model = small_model();
        let scorer = ProbabilisticSequenceScorer::new(&model);
        assert_eq!(scorer.num_tags(), model.num_tags());
        for tag in 0..scorer.num_tags() {
            assert!(scorer.score_initial(tag) < 0.0);
            for prev in 0..scorer.num_tags() {
                assert!(scorer.score_transition(prev, tag) < 0.0);
            }
        }
    }

    #[test]
    fn test_emissao_usa_unk_para_desconhecidas() {
        let model = small_model();
        let scorer = ProbabilisticSequenceScorer::new(&model);
        // "Tóquio" nunca apareceu no treino; deve pontuar como UNK
        let unseen = vec!["Tóquio".to_string()];
        let unk = vec!["UNK".to_string()];
        for tag in 0..scorer.num_tags() {
            assert_eq!(
                scorer.score_emission(&unseen, tag, 0),
                scorer.score_emission(&unk, tag, 0)
            );
        }
    }
}
