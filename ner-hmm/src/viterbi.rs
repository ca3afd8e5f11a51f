//! # Algoritmo de Viterbi
//!
//! Programação dinâmica que encontra a sequência de tags de máxima
//! verossimilhança sob um modelo de sequência. Uma busca exaustiva custaria
//! `O(N^T)`; o Viterbi explora que o melhor caminho até a posição `i` com tag
//! `c` depende apenas do melhor caminho até `i-1` com alguma tag anterior,
//! caindo para `O(T × N²)` de tempo e `O(T × N)` de espaço, sem poda nem
//! aproximação por beam.
//!
//! ## Algoritmo
//!
//! ```text
//! Inicialização: score[0][t] = inicial(t) + emissão(t, x_0)
//!
//! Recursão:      score[i][c] = max_p [score[i-1][p] + transição(p, c)] + emissão(c, x_i)
//!
//! Backtracking:  reconstrói o caminho ótimo de trás pra frente
//! ```
//!
//! O decodificador é único e genérico sobre [`SequenceScorer`]: o mesmo laço
//! serve ao HMM e a qualquer modelo futuro que forneça os três potenciais.

use crate::error::{NerError, Result};
use crate::scorer::SequenceScorer;

/// Caminho ótimo encontrado pela decodificação.
#[derive(Debug, Clone, PartialEq)]
pub struct ViterbiPath {
    /// Ids de tag, um por token, na ordem original da sentença.
    pub tags: Vec<usize>,
    /// Log-probabilidade (não normalizada) do caminho.
    pub log_prob: f64,
}

/// Decodifica a melhor sequência de tags para `tokens`.
///
/// A treliça de scores e a de backpointers vivem só durante esta chamada; o
/// decodificador não guarda estado entre chamadas, então decodificações
/// concorrentes sobre o mesmo scorer não exigem sincronização.
///
/// # Erros
/// [`NerError::InvalidInput`] para sentença vazia ou scorer sem tags.
///
/// # Retorno
/// Exatamente `tokens.len()` ids de tag, cada um menor que
/// `scorer.num_tags()`.
pub fn viterbi_decode<S: SequenceScorer>(scorer: &S, tokens: &[String]) -> Result<ViterbiPath> {
    if tokens.is_empty() {
        return Err(NerError::InvalidInput(
            "sentença vazia no decodificador".to_string(),
        ));
    }
    let n_tags = scorer.num_tags();
    if n_tags == 0 {
        return Err(NerError::InvalidInput(
            "modelo sem tags: nada a decodificar".to_string(),
        ));
    }

    let n_tokens = tokens.len();
    // score[t][s] = log-prob do melhor caminho terminando na posição t com tag s
    let mut score = vec![vec![f64::NEG_INFINITY; n_tags]; n_tokens];
    // backptr[t][s] = tag anterior que maximizou score[t][s]
    let mut backptr = vec![vec![0usize; n_tags]; n_tokens];

    // 1. Inicialização (t=0): sem predecessor, só inicial + emissão
    for s in 0..n_tags {
        score[0][s] = scorer.score_initial(s) + scorer.score_emission(tokens, s, 0);
    }

    // 2. Recursão (t=1..T)
    for t in 1..n_tokens {
        for curr in 0..n_tags {
            let emit = scorer.score_emission(tokens, curr, t);
            let mut best = f64::NEG_INFINITY;
            let mut best_prev = 0usize;
            for prev in 0..n_tags {
                let candidate = score[t - 1][prev] + scorer.score_transition(prev, curr) + emit;
                // Empate: `>=` continua atualizando, então entre candidatos
                // iguais vence o último varrido (maior id de tag).
                if candidate >= best {
                    best = candidate;
                    best_prev = prev;
                }
            }
            score[t][curr] = best;
            backptr[t][curr] = best_prev;
        }
    }

    // 3. Terminação: melhor estado final, mesmo critério de empate da recursão
    let (best_last, best_score) = argmax_last_on_ties(&score[n_tokens - 1]);

    // 4. Backtracking
    let mut tags = vec![0usize; n_tokens];
    tags[n_tokens - 1] = best_last;
    let mut current = best_last;
    for t in (1..n_tokens).rev() {
        current = backptr[t][current];
        tags[t - 1] = current;
    }

    Ok(ViterbiPath {
        tags,
        log_prob: best_score,
    })
}

/// Varredura em ordem crescente de id com `>=`: em empate vence o último.
fn argmax_last_on_ties(scores: &[f64]) -> (usize, f64) {
    let mut best_idx = 0usize;
    let mut best = f64::NEG_INFINITY;
    for (idx, &value) in scores.iter().enumerate() {
        if value >= best {
            best = value;
            best_idx = idx;
        }
    }
    (best_idx, best)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scorer de tabelas fixas para os testes: a emissão é indexada pela
    /// posição do token, não pelo conteúdo.
    struct TableScorer {
        init: Vec<f64>,
        trans: Vec<Vec<f64>>,
        emit_by_position: Vec<Vec<f64>>, // emit_by_position[tag][posição]
    }

    impl SequenceScorer for TableScorer {
        fn num_tags(&self) -> usize {
            self.init.len()
        }
        fn score_initial(&self, tag: usize) -> f64 {
            self.init[tag]
        }
        fn score_transition(&self, prev_tag: usize, curr_tag: usize) -> f64 {
            self.trans[prev_tag][curr_tag]
        }
        fn score_emission(&self, _tokens: &[String], tag: usize, position: usize) -> f64 {
            self.emit_by_position[tag][position]
        }
    }

    /// Scorer uniforme: todos os potenciais idênticos, forçando empate total.
    struct UniformScorer {
        n_tags: usize,
    }

    impl SequenceScorer for UniformScorer {
        fn num_tags(&self) -> usize {
            self.n_tags
        }
        fn score_initial(&self, _tag: usize) -> f64 {
            -1.0
        }
        fn score_transition(&self, _prev: usize, _curr: usize) -> f64 {
            -1.0
        }
        fn score_emission(&self, _tokens: &[String], _tag: usize, _position: usize) -> f64 {
            -1.0
        }
    }

    /// Scorer que explode se a transição for consultada (sentenças de um
    /// token não têm transição).
    struct NoTransitionScorer;

    impl SequenceScorer for NoTransitionScorer {
        fn num_tags(&self) -> usize {
            2
        }
        fn score_initial(&self, tag: usize) -> f64 {
            if tag == 0 {
                -0.5
            } else {
                -2.0
            }
        }
        fn score_transition(&self, _prev: usize, _curr: usize) -> f64 {
            panic!("transição não deve ser consultada com T=1");
        }
        fn score_emission(&self, _tokens: &[String], tag: usize, _position: usize) -> f64 {
            if tag == 0 {
                -0.5
            } else {
                -0.1
            }
        }
    }

    fn sent(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_sentenca_vazia_rejeitada() {
        let scorer = UniformScorer { n_tags: 3 };
        let result = viterbi_decode(&scorer, &[]);
        assert!(matches!(result, Err(NerError::InvalidInput(_))));
    }

    #[test]
    fn test_tag_dominante_vence_em_todas_as_posicoes() {
        // N=2 tags {A=0, B=1}, T=3; A domina emissão e transição
        let half = 0.5f64.ln();
        let scorer = TableScorer {
            init: vec![half, half],
            trans: vec![vec![-0.1, -5.0], vec![-0.1, -5.0]],
            emit_by_position: vec![vec![-0.1, -0.1, -0.1], vec![-4.0, -4.0, -4.0]],
        };
        let path = viterbi_decode(&scorer, &sent(&["x", "y", "z"])).unwrap();
        assert_eq!(path.tags, vec![0, 0, 0]);
    }

    #[test]
    fn test_empate_total_escolhe_ultima_tag() {
        // Com scores todos iguais, o `>=` faz o último candidato varrido
        // vencer em cada célula e na terminação.
        let scorer = UniformScorer { n_tags: 3 };
        let path = viterbi_decode(&scorer, &sent(&["a", "b"])).unwrap();
        assert_eq!(path.tags, vec![2, 2]);
    }

    #[test]
    fn test_decodificacao_deterministica() {
        let scorer = UniformScorer { n_tags: 4 };
        let tokens = sent(&["um", "dois", "três"]);
        let first = viterbi_decode(&scorer, &tokens).unwrap();
        for _ in 0..5 {
            assert_eq!(viterbi_decode(&scorer, &tokens).unwrap(), first);
        }
    }

    #[test]
    fn test_t1_nao_consulta_transicao() {
        let scorer = NoTransitionScorer;
        // init+emissão: tag 0 = -1.0, tag 1 = -2.1 → vence a tag 0
        let path = viterbi_decode(&scorer, &sent(&["só"])).unwrap();
        assert_eq!(path.tags, vec![0]);
        assert!((path.log_prob - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_backtrace_troca_de_tag() {
        // Cenário onde o melhor caminho muda de tag no meio: 0 → 1
        let scorer = TableScorer {
            init: vec![-0.1, -3.0],
            trans: vec![vec![-3.0, -0.1], vec![-3.0, -0.1]],
            emit_by_position: vec![vec![-0.1, -3.0], vec![-3.0, -0.1]],
        };
        let path = viterbi_decode(&scorer, &sent(&["a", "b"])).unwrap();
        assert_eq!(path.tags, vec![0, 1]);
    }

    #[test]
    fn test_uma_unica_tag_degenera() {
        // N=1: toda posição recebe a única tag existente
        let scorer = TableScorer {
            init: vec![-0.7],
            trans: vec![vec![-0.7]],
            emit_by_position: vec![vec![-0.5, -0.5, -0.5, -0.5]],
        };
        let path = viterbi_decode(&scorer, &sent(&["a", "b", "c", "d"])).unwrap();
        assert_eq!(path.tags, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_comprimento_da_saida() {
        let scorer = UniformScorer { n_tags: 2 };
        for len in 1..8 {
            let tokens: Vec<String> = (0..len).map(|i| format!("w{i}")).collect();
            let path = viterbi_decode(&scorer, &tokens).unwrap();
            assert_eq!(path.tags.len(), len);
            assert!(path.tags.iter().all(|&t| t < 2));
        }
    }
}
