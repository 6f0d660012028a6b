//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Agrupa os tipos que formam o roster de alunos. Nenhum deles conhece HTTP,
//! HTML ou travas: tudo aqui é síncrono e determinístico.
//!
//! - [`Cpf`] — Identificador normalizado (11 dígitos) com forma de exibição
//! - [`Student`] — Aluno validado (nome, CPF, email, avaliações)
//! - [`Evaluation`] / [`Grade`] — Nota MANA/MPA/MA para uma meta
//! - [`StudentRegistry`] — Contêiner que garante CPF único e uma nota por meta
//! - [`RegistryError`] / [`ValidationError`] — Taxonomia de falhas
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{Grade, StudentRegistry};
//!
//! let mut registry = StudentRegistry::new();
//! registry.add("Ana Silva", "123.456.789-00", "ana@example.com")?;
//! registry.upsert_evaluation("12345678900", "Design", Some(Grade::Ma))?;
//! assert_eq!(registry.count(), 1);
//! ```

/// Sub-módulo com a implementação de [`Cpf`] — normalização e formatação.
pub mod cpf;

/// Sub-módulo com os erros do domínio.
pub mod error;

/// Sub-módulo com [`Student`], [`Evaluation`] e [`Grade`].
pub mod student;

/// Sub-módulo com [`StudentRegistry`] — o roster em memória.
pub mod registry;

pub use cpf::Cpf;
pub use error::{Field, RegistryError, ValidationError};
pub use registry::{StudentRegistry, StudentUpdate};
pub use student::{Evaluation, Grade, PublicStudent, Student};
