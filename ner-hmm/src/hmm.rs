//! # Hidden Markov Model (HMM) para NER
//!
//! Modelo **generativo** clássico onde:
//! - **Estados Ocultos**: Tags BIO (B-PER, I-ORG, O, etc.)
//! - **Observações**: Tokens (palavras)
//!
//! O estimador aprende por máxima verossimilhança, com suavização aditiva:
//! 1. Probabilidade Inicial: $P(y_0)$
//! 2. Probabilidade de Transição: $P(y_i \mid y_{i-1})$
//! 3. Probabilidade de Emissão: $P(x_i \mid y_i)$
//!
//! ## Armazenamento
//! As três tabelas ficam em **log-space** para evitar underflow numérico ao
//! acumular muitas probabilidades pequenas:
//! $$ \log(A \cdot B) = \log(A) + \log(B) $$
//!
//! ## Palavras raras e desconhecidas
//! Palavras vistas menos de 2 vezes no corpus nunca ganham id próprio: elas
//! colapsam no token reservado [`UNK`] já no treino. Na decodificação,
//! qualquer palavra fora do vocabulário cai na mesma linha de emissão do
//! `UNK` — o tratamento é idêntico nos dois momentos.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::AnnotatedSentence;
use crate::error::{NerError, Result};
use crate::indexer::{Indexer, SymbolCounter};
use crate::scorer::ProbabilisticSequenceScorer;
use crate::viterbi::viterbi_decode;

/// Símbolo reservado do vocabulário para palavras raras/desconhecidas.
/// É sempre o primeiro símbolo indexado, portanto seu id é sempre 0.
pub const UNK: &str = "UNK";

/// Limiar de frequência: palavras com contagem abaixo disso colapsam em UNK.
const MIN_WORD_COUNT: u32 = 2;

/// Tolerância do invariante de normalização das linhas.
const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Configuração do estimador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HmmConfig {
    /// Constante de suavização aditiva aplicada a todas as contagens antes
    /// da normalização. Precisa ser finita e positiva: com zero, pares
    /// nunca observados virariam `log(0) = -inf` e apagariam caminhos
    /// inteiros do Viterbi.
    pub smoothing: f64,
}

impl Default for HmmConfig {
    fn default() -> Self {
        Self { smoothing: 0.001 }
    }
}

impl HmmConfig {
    fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(NerError::DegenerateProbability(format!(
                "constante de suavização {} (esperado valor finito > 0)",
                self.smoothing
            )));
        }
        Ok(())
    }
}

/// Matriz densa de log-probabilidades, em ordem row-major.
///
/// A forma persistida é exatamente esta: dimensões mais o vetor plano de
/// `f64`, com a célula `(r, c)` em `data[r * cols + c]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogProbMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl LogProbMatrix {
    fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Normaliza cada linha pela sua soma e substitui pelo log natural.
    fn log_normalize_rows(&mut self) {
        for row in 0..self.rows {
            let slice = &mut self.data[row * self.cols..(row + 1) * self.cols];
            log_normalize(slice);
        }
    }
}

/// Converte contagens em log-probabilidades: divide pela soma, aplica `ln`.
fn log_normalize(row: &mut [f64]) {
    let total: f64 = row.iter().sum();
    for value in row.iter_mut() {
        *value = (*value / total).ln();
    }
}

/// Modelo HMM treinado para NER.
///
/// Pacote **imutável**: construído uma única vez pelo estimador
/// ([`HmmModel::train`]) e somente lido depois disso. Não há estado global
/// nem mutação pós-treino, então decodificar várias sentenças em paralelo
/// sobre o mesmo modelo dispensa qualquer trava.
///
/// # Componentes
/// - Indexadores de tags e de vocabulário (ids densos, ordem de inserção,
///   `UNK` sempre com id 0).
/// - `init`: vetor `[N]` com $\log P(y_0)$.
/// - `transitions`: matriz `[N × N]` com $\log P(y_i \mid y_{i-1})$,
///   normalizada por linha.
/// - `emissions`: matriz `[N × V]` com $\log P(x_i \mid y_i)$, normalizada
///   por linha — é $p(palavra \mid tag)$ que normaliza, não
///   $p(tag \mid palavra)$.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HmmModel {
    tag_indexer: Indexer,
    word_indexer: Indexer,
    init_log_probs: Vec<f64>,
    transition_log_probs: LogProbMatrix,
    emission_log_probs: LogProbMatrix,
}

impl HmmModel {
    /// Estima um HMM a partir do corpus anotado (máxima verossimilhança).
    ///
    /// # Processo de Treinamento
    /// 1. **Pré-passada de vocabulário**: conta a frequência de cada palavra
    ///    no corpus inteiro.
    /// 2. **Indexação**: `UNK` reserva o id 0; palavras com frequência ≥ 2
    ///    ganham ids densos; tags ganham ids na ordem em que aparecem.
    /// 3. **Contagem**: inicia as três tabelas com a constante de suavização
    ///    e acumula emissões, iniciais (posição 0) e transições (demais
    ///    posições).
    /// 4. **Normalização + log**: `init` normaliza pelo total; cada linha de
    ///    transição e de emissão normaliza pela soma da própria linha; tudo
    ///    vira log natural.
    ///
    /// # Erros
    /// - [`NerError::DegenerateProbability`] para suavização inválida ou
    ///   linha que não soma 1 após a normalização.
    /// - [`NerError::InvalidInput`] para corpus vazio ou sentença sem
    ///   anotações.
    pub fn train(corpus: &[AnnotatedSentence], config: &HmmConfig) -> Result<Self> {
        config.validate()?;
        if corpus.is_empty() {
            return Err(NerError::InvalidInput("corpus vazio no estimador".to_string()));
        }

        // 1. Frequência de cada palavra, para decidir quem colapsa em UNK
        let mut word_counts = SymbolCounter::new();
        for sentence in corpus {
            if sentence.is_empty() {
                return Err(NerError::InvalidInput(format!(
                    "sentença sem anotações no corpus: {:?}",
                    sentence.text
                )));
            }
            for (word, _) in sentence.annotations {
                word_counts.increment(word);
            }
        }

        // 2. Indexação antecipada: assim já sabemos o tamanho das matrizes
        let mut word_indexer = Indexer::new();
        word_indexer.get_or_create_id(UNK);
        let mut tag_indexer = Indexer::new();
        for sentence in corpus {
            for (word, tag) in sentence.annotations {
                collapsed_word_id(&mut word_indexer, &word_counts, word);
                tag_indexer.get_or_create_id(tag);
            }
        }

        let n_tags = tag_indexer.len();
        let vocab_size = word_indexer.len();

        // 3. Contagens já iniciadas com a suavização: nenhuma célula zera
        let mut init = vec![config.smoothing; n_tags];
        let mut transitions = LogProbMatrix::filled(n_tags, n_tags, config.smoothing);
        let mut emissions = LogProbMatrix::filled(n_tags, vocab_size, config.smoothing);

        for sentence in corpus {
            let mut prev_tag: Option<usize> = None;
            for (i, (word, tag)) in sentence.annotations.iter().enumerate() {
                let tag_id = tag_indexer.get_or_create_id(tag);
                let word_id = collapsed_word_id(&mut word_indexer, &word_counts, word);
                *emissions.get_mut(tag_id, word_id) += 1.0;
                if i == 0 {
                    init[tag_id] += 1.0;
                } else if let Some(prev) = prev_tag {
                    *transitions.get_mut(prev, tag_id) += 1.0;
                }
                prev_tag = Some(tag_id);
            }
        }

        // 4. Contagens → probabilidades → log
        log_normalize(&mut init);
        transitions.log_normalize_rows();
        emissions.log_normalize_rows();

        debug!(
            "HMM treinado: {} tags, {} palavras no vocabulário, {} sentenças",
            n_tags,
            vocab_size,
            corpus.len()
        );

        let model = Self {
            tag_indexer,
            word_indexer,
            init_log_probs: init,
            transition_log_probs: transitions,
            emission_log_probs: emissions,
        };
        model.check_normalization()?;
        Ok(model)
    }

    /// Decodifica a melhor sequência de tags para os tokens dados.
    ///
    /// Usa o algoritmo de Viterbi sobre um
    /// [`ProbabilisticSequenceScorer`] emprestando este modelo.
    ///
    /// # Retorno
    /// Uma tag BIO por token, na ordem da sentença (ex: `["B-PER", "O"]`).
    pub fn predict(&self, tokens: &[String]) -> Result<Vec<String>> {
        let scorer = ProbabilisticSequenceScorer::new(self);
        let path = viterbi_decode(&scorer, tokens)?;
        Ok(path
            .tags
            .iter()
            .map(|&id| self.tag_indexer.symbol(id).to_string())
            .collect())
    }

    /// Número de tags distintas (N).
    pub fn num_tags(&self) -> usize {
        self.tag_indexer.len()
    }

    /// Tamanho do vocabulário, incluindo `UNK` (V).
    pub fn vocab_size(&self) -> usize {
        self.word_indexer.len()
    }

    /// Lista de tags ordenada por id.
    pub fn tags(&self) -> &[String] {
        self.tag_indexer.symbols()
    }

    /// Rótulo da tag com o id dado.
    pub fn tag_label(&self, tag_id: usize) -> &str {
        self.tag_indexer.symbol(tag_id)
    }

    /// Id da tag, se conhecida.
    pub fn tag_id(&self, label: &str) -> Option<usize> {
        self.tag_indexer.id_of(label)
    }

    /// Id da palavra no vocabulário; fora do vocabulário resolve para o id
    /// do `UNK` (substituição silenciosa, não é erro).
    pub fn word_id(&self, word: &str) -> usize {
        self.word_indexer.id_of(word).unwrap_or(0)
    }

    /// $\log P(y_0 = tag)$
    pub fn init_log_prob(&self, tag: usize) -> f64 {
        self.init_log_probs[tag]
    }

    /// $\log P(y_i = curr \mid y_{i-1} = prev)$
    pub fn transition_log_prob(&self, prev: usize, curr: usize) -> f64 {
        self.transition_log_probs.get(prev, curr)
    }

    /// $\log P(x_i = word \mid y_i = tag)$
    pub fn emission_log_prob(&self, tag: usize, word: usize) -> f64 {
        self.emission_log_probs.get(tag, word)
    }

    /// Verifica o invariante de normalização: `sum(exp(linha)) ≈ 1` para o
    /// vetor inicial, cada linha de transição e cada linha de emissão.
    pub fn check_normalization(&self) -> Result<()> {
        check_row_sums_to_one(&self.init_log_probs, "inicial")?;
        for row in 0..self.transition_log_probs.rows() {
            check_row_sums_to_one(self.transition_log_probs.row(row), "transição")?;
        }
        for row in 0..self.emission_log_probs.rows() {
            check_row_sums_to_one(self.emission_log_probs.row(row), "emissão")?;
        }
        Ok(())
    }
}

/// Id da palavra respeitando o colapso de raras: frequência abaixo do limiar
/// resolve para o `UNK` (id 0) em vez de criar id próprio.
fn collapsed_word_id(indexer: &mut Indexer, counts: &SymbolCounter, word: &str) -> usize {
    if counts.count(word) < MIN_WORD_COUNT {
        indexer.get_or_create_id(UNK)
    } else {
        indexer.get_or_create_id(word)
    }
}

fn check_row_sums_to_one(log_row: &[f64], table: &str) -> Result<()> {
    let sum: f64 = log_row.iter().map(|lp| lp.exp()).sum();
    if (sum - 1.0).abs() > NORMALIZATION_TOLERANCE {
        return Err(NerError::DegenerateProbability(format!(
            "linha da tabela {table} soma {sum}, esperado 1"
        )));
    }
    Ok(())
}
