//! # Indexador Bidirecional de Símbolos
//!
//! Mapeia strings (tags BIO, palavras do vocabulário) para ids inteiros
//! densos `0..N` e de volta. As matrizes do HMM são indexadas por esses ids,
//! então eles precisam ser **estáveis**: uma vez atribuído, o id de um
//! símbolo nunca muda durante a vida do modelo.
//!
//! ## Convenções
//! - Ids seguem a **ordem de inserção** (primeiro símbolo visto recebe 0).
//! - Durante o treino o indexador é *append-only*; depois do treino ele é
//!   somente leitura.
//! - Na serialização o indexador vira apenas a lista de símbolos ordenada por
//!   id — o mapa reverso é reconstruído na carga.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Dicionário bidirecional símbolo ↔ id denso.
///
/// # Exemplo
/// ```rust
/// use ner_hmm::indexer::Indexer;
///
/// let mut idx = Indexer::new();
/// assert_eq!(idx.get_or_create_id("B-PER"), 0);
/// assert_eq!(idx.get_or_create_id("O"), 1);
/// assert_eq!(idx.get_or_create_id("B-PER"), 0); // já existia
/// assert_eq!(idx.id_of("O"), Some(1));
/// assert_eq!(idx.symbol(0), "B-PER");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", from = "Vec<String>")]
pub struct Indexer {
    symbols: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Indexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retorna o id do símbolo, criando um novo id denso se necessário.
    pub fn get_or_create_id(&mut self, symbol: &str) -> usize {
        if let Some(&id) = self.ids.get(symbol) {
            return id;
        }
        let id = self.symbols.len();
        self.symbols.push(symbol.to_string());
        self.ids.insert(symbol.to_string(), id);
        id
    }

    /// Busca somente leitura: `None` se o símbolo nunca foi indexado.
    pub fn id_of(&self, symbol: &str) -> Option<usize> {
        self.ids.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.ids.contains_key(symbol)
    }

    /// Símbolo associado ao id.
    ///
    /// # Panics
    /// Indexação direta: ids fora de `0..len()` causam panic, como em um
    /// slice. Os ids produzidos pelo decodificador sempre estão no intervalo.
    pub fn symbol(&self, id: usize) -> &str {
        &self.symbols[id]
    }

    /// Lista completa de símbolos, ordenada por id.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Número de símbolos distintos indexados.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<Vec<String>> for Indexer {
    fn from(symbols: Vec<String>) -> Self {
        let ids = symbols
            .iter()
            .enumerate()
            .map(|(id, s)| (s.clone(), id))
            .collect();
        Self { symbols, ids }
    }
}

impl From<Indexer> for Vec<String> {
    fn from(indexer: Indexer) -> Self {
        indexer.symbols
    }
}

/// Contador de frequências de símbolos (pré-passada do vocabulário).
///
/// Usado pelo estimador para decidir quais palavras são raras demais para
/// receber id próprio (ver colapso em `UNK` no módulo [`crate::hmm`]).
#[derive(Debug, Clone, Default)]
pub struct SymbolCounter {
    counts: HashMap<String, u32>,
}

impl SymbolCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, symbol: &str) {
        *self.counts.entry(symbol.to_string()).or_insert(0) += 1;
    }

    /// Frequência observada do símbolo (0 se nunca visto).
    pub fn count(&self, symbol: &str) -> u32 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_densos_em_ordem_de_insercao() {
        let mut idx = Indexer::new();
        assert_eq!(idx.get_or_create_id("UNK"), 0);
        assert_eq!(idx.get_or_create_id("casa"), 1);
        assert_eq!(idx.get_or_create_id("rio"), 2);
        // Reinserção não muda o id
        assert_eq!(idx.get_or_create_id("casa"), 1);
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.symbol(2), "rio");
    }

    #[test]
    fn test_id_of_nao_cria() {
        let mut idx = Indexer::new();
        idx.get_or_create_id("O");
        assert_eq!(idx.id_of("O"), Some(0));
        assert_eq!(idx.id_of("B-PER"), None);
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn test_serializacao_preserva_ordem() {
        let mut idx = Indexer::new();
        idx.get_or_create_id("UNK");
        idx.get_or_create_id("Brasília");
        idx.get_or_create_id("governo");

        let json = serde_json::to_string(&idx).unwrap();
        // Persistido como lista simples ordenada por id
        assert_eq!(json, r#"["UNK","Brasília","governo"]"#);

        let reloaded: Indexer = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, idx);
        assert_eq!(reloaded.id_of("governo"), Some(2));
    }

    #[test]
    fn test_contador_de_frequencias() {
        let mut counter = SymbolCounter::new();
        counter.increment("de");
        counter.increment("de");
        counter.increment("Anvisa");
        assert_eq!(counter.count("de"), 2);
        assert_eq!(counter.count("Anvisa"), 1);
        assert_eq!(counter.count("inexistente"), 0);
    }
}
