//! # Corpus Anotado para Treinamento do HMM
//!
//! Corpus em Português Brasileiro anotado no formato BIO, usado para estimar
//! os parâmetros do modelo e para os testes do crate. Cada sentença já vem
//! tokenizada e alinhada com suas tags ouro, par a par — por construção não
//! existe desalinhamento entre tokens e tags.
//!
//! ## Domínios Cobertos
//! - Política e instituições
//! - Economia e negócios
//! - Esportes
//! - Ciência e saúde
//! - Cultura
//! - Meio ambiente

/// Uma sentença anotada no formato BIO
///
/// O formato BIO (Begin, Inside, Outside) é o esquema padrão para NER:
/// - **B-TYPE**: Início de uma entidade do tipo TYPE.
/// - **I-TYPE**: Continuação de uma entidade do tipo TYPE.
/// - **O**: Fora de qualquer entidade.
pub struct AnnotatedSentence {
    /// O texto completo da sentença.
    pub text: &'static str,
    /// Domínio temático (utilizado para análises de performance por área).
    pub domain: &'static str,
    /// Pares (palavra, tag_BIO).
    /// Exemplo: `[("Lula", "B-PER"), ("viajou", "O")]`
    pub annotations: &'static [(&'static str, &'static str)],
}

impl AnnotatedSentence {
    /// Tokens da sentença, na ordem original.
    pub fn words(&self) -> Vec<String> {
        self.annotations.iter().map(|(w, _)| w.to_string()).collect()
    }

    /// Tags ouro alinhadas 1:1 com os tokens.
    pub fn bio_tags(&self) -> Vec<&'static str> {
        self.annotations.iter().map(|(_, t)| *t).collect()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Retorna o corpus de demonstração em PT-BR
pub fn get_corpus() -> Vec<AnnotatedSentence> {
    vec![
        // ===== POLÍTICA =====
        AnnotatedSentence {
            text: "O presidente Lula recebeu a comitiva da Argentina no Palácio do Planalto.",
            domain: "política",
            annotations: &[
                ("O", "O"), ("presidente", "O"), ("Lula", "B-PER"), ("recebeu", "O"),
                ("a", "O"), ("comitiva", "O"), ("da", "O"), ("Argentina", "B-LOC"),
                ("no", "O"), ("Palácio", "B-LOC"), ("do", "I-LOC"), ("Planalto", "I-LOC"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "O Senado aprovou o projeto enviado pelo Ministério da Fazenda.",
            domain: "política",
            annotations: &[
                ("O", "O"), ("Senado", "B-ORG"), ("aprovou", "O"), ("o", "O"),
                ("projeto", "O"), ("enviado", "O"), ("pelo", "O"),
                ("Ministério", "B-ORG"), ("da", "I-ORG"), ("Fazenda", "I-ORG"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "A ministra Marina Silva defendeu a proposta no Congresso Nacional.",
            domain: "política",
            annotations: &[
                ("A", "O"), ("ministra", "O"), ("Marina", "B-PER"), ("Silva", "I-PER"),
                ("defendeu", "O"), ("a", "O"), ("proposta", "O"), ("no", "O"),
                ("Congresso", "B-ORG"), ("Nacional", "I-ORG"), (".", "O"),
            ],
        },

        // ===== ECONOMIA =====
        AnnotatedSentence {
            text: "A Petrobras anunciou novos investimentos na Bacia de Santos.",
            domain: "economia",
            annotations: &[
                ("A", "O"), ("Petrobras", "B-ORG"), ("anunciou", "O"), ("novos", "O"),
                ("investimentos", "O"), ("na", "O"),
                ("Bacia", "B-LOC"), ("de", "I-LOC"), ("Santos", "I-LOC"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "O Banco Central manteve a taxa Selic na reunião de maio.",
            domain: "economia",
            annotations: &[
                ("O", "O"), ("Banco", "B-ORG"), ("Central", "I-ORG"), ("manteve", "O"),
                ("a", "O"), ("taxa", "O"), ("Selic", "B-MISC"), ("na", "O"),
                ("reunião", "O"), ("de", "O"), ("maio", "O"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "A Embraer exporta aviões para a Europa desde a década de noventa.",
            domain: "economia",
            annotations: &[
                ("A", "O"), ("Embraer", "B-ORG"), ("exporta", "O"), ("aviões", "O"),
                ("para", "O"), ("a", "O"), ("Europa", "B-LOC"), ("desde", "O"),
                ("a", "O"), ("década", "O"), ("de", "O"), ("noventa", "O"), (".", "O"),
            ],
        },

        // ===== ESPORTES =====
        AnnotatedSentence {
            text: "O Flamengo venceu o Palmeiras no Maracanã pelo Campeonato Brasileiro.",
            domain: "esportes",
            annotations: &[
                ("O", "O"), ("Flamengo", "B-ORG"), ("venceu", "O"), ("o", "O"),
                ("Palmeiras", "B-ORG"), ("no", "O"), ("Maracanã", "B-LOC"), ("pelo", "O"),
                ("Campeonato", "B-MISC"), ("Brasileiro", "I-MISC"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Rebeca Andrade conquistou o ouro na ginástica durante os Jogos Olímpicos.",
            domain: "esportes",
            annotations: &[
                ("Rebeca", "B-PER"), ("Andrade", "I-PER"), ("conquistou", "O"), ("o", "O"),
                ("ouro", "O"), ("na", "O"), ("ginástica", "O"), ("durante", "O"),
                ("os", "O"), ("Jogos", "B-MISC"), ("Olímpicos", "I-MISC"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Marta marcou duas vezes na vitória da seleção em Recife.",
            domain: "esportes",
            annotations: &[
                ("Marta", "B-PER"), ("marcou", "O"), ("duas", "O"), ("vezes", "O"),
                ("na", "O"), ("vitória", "O"), ("da", "O"), ("seleção", "O"),
                ("em", "O"), ("Recife", "B-LOC"), (".", "O"),
            ],
        },

        // ===== CIÊNCIA E SAÚDE =====
        AnnotatedSentence {
            text: "A Fiocruz iniciou os testes da vacina contra a dengue em São Paulo.",
            domain: "ciência",
            annotations: &[
                ("A", "O"), ("Fiocruz", "B-ORG"), ("iniciou", "O"), ("os", "O"),
                ("testes", "O"), ("da", "O"), ("vacina", "O"), ("contra", "O"),
                ("a", "O"), ("dengue", "B-MISC"), ("em", "O"),
                ("São", "B-LOC"), ("Paulo", "I-LOC"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "Pesquisadores do Instituto Butantan publicaram o estudo na revista Nature.",
            domain: "ciência",
            annotations: &[
                ("Pesquisadores", "O"), ("do", "O"),
                ("Instituto", "B-ORG"), ("Butantan", "I-ORG"),
                ("publicaram", "O"), ("o", "O"), ("estudo", "O"), ("na", "O"),
                ("revista", "O"), ("Nature", "B-ORG"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "O satélite Amazonia-1 foi desenvolvido pelo INPE em São José dos Campos.",
            domain: "ciência",
            annotations: &[
                ("O", "O"), ("satélite", "O"), ("Amazonia-1", "B-MISC"), ("foi", "O"),
                ("desenvolvido", "O"), ("pelo", "O"), ("INPE", "B-ORG"), ("em", "O"),
                ("São", "B-LOC"), ("José", "I-LOC"), ("dos", "I-LOC"), ("Campos", "I-LOC"), (".", "O"),
            ],
        },

        // ===== CULTURA =====
        AnnotatedSentence {
            text: "Chico Buarque lançou o disco novo durante o festival em Salvador.",
            domain: "cultura",
            annotations: &[
                ("Chico", "B-PER"), ("Buarque", "I-PER"), ("lançou", "O"), ("o", "O"),
                ("disco", "O"), ("novo", "O"), ("durante", "O"), ("o", "O"),
                ("festival", "O"), ("em", "O"), ("Salvador", "B-LOC"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "A obra de Machado de Assis segue estudada na USP e na UFRJ.",
            domain: "cultura",
            annotations: &[
                ("A", "O"), ("obra", "O"), ("de", "O"),
                ("Machado", "B-PER"), ("de", "I-PER"), ("Assis", "I-PER"),
                ("segue", "O"), ("estudada", "O"), ("na", "O"), ("USP", "B-ORG"),
                ("e", "O"), ("na", "O"), ("UFRJ", "B-ORG"), (".", "O"),
            ],
        },

        // ===== MEIO AMBIENTE =====
        AnnotatedSentence {
            text: "O desmatamento na Amazônia caiu segundo dados do IBGE divulgados em Brasília.",
            domain: "meio ambiente",
            annotations: &[
                ("O", "O"), ("desmatamento", "O"), ("na", "O"), ("Amazônia", "B-LOC"),
                ("caiu", "O"), ("segundo", "O"), ("dados", "O"), ("do", "O"),
                ("IBGE", "B-ORG"), ("divulgados", "O"), ("em", "O"),
                ("Brasília", "B-LOC"), (".", "O"),
            ],
        },
        AnnotatedSentence {
            text: "O rio São Francisco abastece cidades do Nordeste durante a seca.",
            domain: "meio ambiente",
            annotations: &[
                ("O", "O"), ("rio", "O"), ("São", "B-LOC"), ("Francisco", "I-LOC"),
                ("abastece", "O"), ("cidades", "O"), ("do", "O"), ("Nordeste", "B-LOC"),
                ("durante", "O"), ("a", "O"), ("seca", "O"), (".", "O"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_nao_vazio() {
        let corpus = get_corpus();
        assert!(corpus.len() >= 10);
        for sentence in &corpus {
            assert!(!sentence.is_empty(), "sentença sem anotações: {}", sentence.text);
        }
    }

    #[test]
    fn test_tags_bio_bem_formadas() {
        for sentence in get_corpus() {
            for (word, tag) in sentence.annotations {
                let valida = *tag == "O" || tag.starts_with("B-") || tag.starts_with("I-");
                assert!(valida, "tag inválida '{}' para '{}'", tag, word);
            }
        }
    }

    #[test]
    fn test_acessores_alinhados() {
        let corpus = get_corpus();
        let first = &corpus[0];
        assert_eq!(first.words().len(), first.bio_tags().len());
        assert_eq!(first.words().len(), first.len());
    }
}
