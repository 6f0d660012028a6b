//! # Student — Aluno Validado
//!
//! Um [`Student`] representa uma pessoa no roster: nome, [`Cpf`], email e a
//! sequência ordenada de [`Evaluation`]s (uma nota por meta).
//!
//! ## Construção Fail-Fast
//!
//! A única forma de obter um `Student` é [`Student::new`], que valida tudo
//! de uma vez. Não existe instância parcialmente válida:
//!
//! ```text
//! Student::new(nome, cpf, email)
//!   ├── nome vazio?        → ValidationError { field: Name }
//!   ├── CPF ≠ 11 dígitos?  → ValidationError { field: Cpf }
//!   ├── email sem a@b.c?   → ValidationError { field: Email }
//!   └── Ok(Student)
//! ```
//!
//! Depois de criado, o aluno só é alterado pelo
//! [`StudentRegistry`](super::StudentRegistry), que revalida cada mudança.
//! Chamadores externos recebem cópias (`Clone`).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::cpf::Cpf;
use super::error::{Field, ValidationError};

/// Mensagem de erro para email malformado.
pub const INVALID_EMAIL: &str = "Invalid email format";

/// Mensagem de erro para nome vazio.
pub const EMPTY_NAME: &str = "Name is required";

/// Formato `local@dominio.tld` — sem espaços e com um único `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex de email válida"));

/// Nota qualitativa atribuída a uma meta.
///
/// - **MANA** — Meta Ainda Não Atingida (não aprovar)
/// - **MPA** — Meta Parcialmente Atingida (pode passar)
/// - **MA** — Meta Atingida (aprovar)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Mana,
    Mpa,
    Ma,
}

impl Grade {
    /// Todas as notas, na ordem exibida na grade de avaliação.
    pub const ALL: [Grade; 3] = [Grade::Mana, Grade::Mpa, Grade::Ma];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Mana => "MANA",
            Grade::Mpa => "MPA",
            Grade::Ma => "MA",
        }
    }

    /// Classe CSS usada na grade de avaliações.
    pub fn css_class(&self) -> &'static str {
        match self {
            Grade::Mana => "grade-MANA",
            Grade::Mpa => "grade-MPA",
            Grade::Ma => "grade-MA",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MANA" => Ok(Grade::Mana),
            "MPA" => Ok(Grade::Mpa),
            "MA" => Ok(Grade::Ma),
            other => Err(ValidationError::new(
                Field::Grade,
                format!("Invalid grade: {other}"),
            )),
        }
    }
}

/// Uma nota para uma meta. A meta é chave secundária dentro do aluno.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub goal: String,
    pub grade: Grade,
}

/// Projeção pública do aluno (sem avaliações).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicStudent {
    pub name: String,
    /// CPF na forma formatada.
    pub cpf: String,
    pub email: String,
}

/// Aluno validado.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    name: String,
    cpf: Cpf,
    email: String,
    evaluations: Vec<Evaluation>,
}

impl Student {
    /// Constrói e valida em um passo. Nunca retorna objeto parcial.
    pub fn new(name: &str, cpf: &str, email: &str) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::new(Field::Name, EMPTY_NAME));
        }
        let cpf = Cpf::parse(cpf)?;
        validate_email(email)?;
        Ok(Self {
            name: name.to_string(),
            cpf,
            email: email.to_string(),
            evaluations: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Nota atual para uma meta, se houver.
    pub fn grade_for(&self, goal: &str) -> Option<Grade> {
        self.evaluations
            .iter()
            .find(|e| e.goal == goal)
            .map(|e| e.grade)
    }

    /// CPF no formato `DDD.DDD.DDD-DD`.
    pub fn formatted_cpf(&self) -> String {
        self.cpf.formatted()
    }

    /// CPF somente dígitos — chave de igualdade.
    pub fn normalized_cpf(&self) -> &str {
        self.cpf.normalized()
    }

    pub fn to_public(&self) -> PublicStudent {
        PublicStudent {
            name: self.name.clone(),
            cpf: self.formatted_cpf(),
            email: self.email.clone(),
        }
    }

    // ─── Mutações (restritas ao módulo core) ──────────────────────

    pub(super) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(super) fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub(super) fn evaluations_mut(&mut self) -> &mut Vec<Evaluation> {
        &mut self.evaluations
    }

    pub(super) fn set_evaluations(&mut self, evaluations: Vec<Evaluation>) {
        self.evaluations = evaluations;
    }
}

/// Valida o formato `local@dominio.tld`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new(Field::Email, INVALID_EMAIL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_and_keeps_fields() {
        let s = Student::new("Ana Silva", "123.456.789-00", "ana@example.com").unwrap();
        assert_eq!(s.name(), "Ana Silva");
        assert_eq!(s.email(), "ana@example.com");
        assert_eq!(s.normalized_cpf(), "12345678900");
        assert_eq!(s.formatted_cpf(), "123.456.789-00");
        assert!(s.evaluations().is_empty());
    }

    #[test]
    fn invalid_cpf_reports_cpf_field() {
        let err = Student::new("Ana", "123", "ana@example.com").unwrap_err();
        assert_eq!(err.field, Field::Cpf);
    }

    #[test]
    fn invalid_email_reports_email_field() {
        for email in ["bad", "ana@", "ana@example", "a na@example.com", "ana@@example.com", ""] {
            let err = Student::new("Ana", "12345678900", email).unwrap_err();
            assert_eq!(err.field, Field::Email, "email {email:?}");
            assert_eq!(err.message, INVALID_EMAIL);
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Student::new("   ", "12345678900", "ana@example.com").unwrap_err();
        assert_eq!(err.field, Field::Name);
    }

    #[test]
    fn public_projection_uses_formatted_cpf() {
        let s = Student::new("Bruno", "98765432100", "bruno@ufpe.br").unwrap();
        let public = s.to_public();
        assert_eq!(public.cpf, "987.654.321-00");
        let json = serde_json::to_value(&public).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Bruno", "cpf": "987.654.321-00", "email": "bruno@ufpe.br"})
        );
    }

    #[test]
    fn grade_parsing() {
        assert_eq!("MANA".parse::<Grade>().unwrap(), Grade::Mana);
        assert_eq!("MPA".parse::<Grade>().unwrap(), Grade::Mpa);
        assert_eq!("MA".parse::<Grade>().unwrap(), Grade::Ma);
        assert_eq!("ma".parse::<Grade>().unwrap_err().field, Field::Grade);
        assert_eq!(serde_json::to_string(&Grade::Mpa).unwrap(), "\"MPA\"");
    }
}
