//! # Erros do Domínio
//!
//! Taxonomia de falhas do registro de alunos:
//!
//! | Variante | Quando | Mutação? |
//! |----------|--------|----------|
//! | [`RegistryError::Validation`] | CPF, email, nome ou avaliações malformados | Nunca |
//! | [`RegistryError::Duplicate`] | CPF já cadastrado em `add` | Nunca |
//! | [`RegistryError::NotFound`] | CPF ausente em `update`/avaliação | Nunca |
//!
//! Remoção e busca **não** usam erros: ausência é um resultado normal
//! (`false` / `None`).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::cpf::Cpf;

/// Campo que falhou na validação — permite ao cliente destacar o input certo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Cpf,
    Email,
    Goal,
    Grade,
    Evaluations,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Cpf => "cpf",
            Field::Email => "email",
            Field::Goal => "goal",
            Field::Grade => "grade",
            Field::Evaluations => "evaluations",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Falha de validação de um único campo.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Campo rejeitado.
    pub field: Field,
    /// Mensagem exibida ao usuário sem alteração.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Erros propagados pelas operações do [`StudentRegistry`](super::StudentRegistry).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Entrada malformada — nenhum estado foi alterado.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Já existe aluno com este CPF normalizado.
    #[error("Student with this CPF already exists")]
    Duplicate { cpf: String },

    /// Nenhum aluno com este CPF normalizado.
    #[error("Student not found")]
    NotFound { cpf: String },
}

impl RegistryError {
    /// `NotFound` com a chave normalizada; entrada que nem chega a ser um
    /// CPF é guardada como veio.
    pub fn not_found(cpf: &str) -> Self {
        let cpf = Cpf::parse(cpf)
            .map(|key| key.normalized().to_string())
            .unwrap_or_else(|_| cpf.to_string());
        RegistryError::NotFound { cpf }
    }

    /// CPF envolvido na falha, quando ela é sobre um aluno específico.
    pub fn cpf(&self) -> Option<&str> {
        match self {
            RegistryError::Duplicate { cpf } | RegistryError::NotFound { cpf } => Some(cpf.as_str()),
            RegistryError::Validation(_) => None,
        }
    }
}
