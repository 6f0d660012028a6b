//! # Cpf — Identificador do Aluno
//!
//! O CPF (Cadastro de Pessoas Físicas) é o identificador único de cada
//! aluno no roster. Ele circula em duas representações:
//!
//! | Forma | Exemplo | Uso |
//! |-------|---------|-----|
//! | **Normalizada** | `12345678900` | Chave de unicidade, comparação, busca |
//! | **Formatada** | `123.456.789-00` | Exibição e respostas da API |
//!
//! A entrada aceita qualquer mistura dos separadores `.`, `-`, `/` e
//! espaços. Qualquer outro caractere não numérico torna o CPF inválido.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::Cpf;
//!
//! let a = Cpf::parse("123.456.789-00").unwrap();
//! let b = Cpf::parse("12345678900").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.formatted(), "123.456.789-00");
//! ```
//!
//! Os dígitos verificadores **não** são conferidos: o sistema usa o CPF
//! apenas como chave, nunca como documento fiscal.

use std::fmt;

use serde::{Serialize, Serializer};

use super::error::{Field, ValidationError};

/// Quantidade de dígitos de um CPF normalizado.
pub const CPF_DIGITS: usize = 11;

/// Mensagem de erro exibida ao cliente quando o CPF é malformado.
pub const INVALID_CPF: &str = "Invalid CPF format";

/// CPF normalizado — sempre exatamente 11 dígitos ASCII.
///
/// Só pode ser construído via [`Cpf::parse`], então qualquer instância
/// existente já é válida. Igualdade e hash usam a forma normalizada.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Normaliza e valida um CPF em qualquer estilo de pontuação.
    ///
    /// Remove os separadores aceitos e exige exatamente 11 dígitos.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let mut digits = String::with_capacity(CPF_DIGITS);
        for ch in raw.chars() {
            match ch {
                '0'..='9' => digits.push(ch),
                '.' | '-' | '/' => {}
                c if c.is_whitespace() => {}
                _ => return Err(ValidationError::new(Field::Cpf, INVALID_CPF)),
            }
        }
        if digits.len() != CPF_DIGITS {
            return Err(ValidationError::new(Field::Cpf, INVALID_CPF));
        }
        Ok(Self(digits))
    }

    /// Forma normalizada (somente dígitos), usada como chave.
    pub fn normalized(&self) -> &str {
        &self.0
    }

    /// Forma de exibição `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Serializa sempre na forma formatada (contrato público da API).
impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted())
    }
}
