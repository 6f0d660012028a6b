//! # StudentRegistry — O Roster em Memória
//!
//! O [`StudentRegistry`] é o **dono único** de todos os [`Student`]s e o
//! guardião das invariantes do sistema:
//!
//! - **CPF único**: a chave normalizada nunca se repete
//! - **Uma nota por meta**: dentro de cada aluno, a meta é chave secundária
//! - **Nada parcial**: toda operação que falha deixa o registro intacto
//!
//! ## Estrutura de Chaves em Dois Níveis
//!
//! ```text
//! StudentRegistry
//!   ├── students: HashMap<Cpf, Student>    ← CPF → aluno (unicidade estrutural)
//!   └── order:    Vec<Cpf>                 ← ordem de inserção para listagem
//!         │
//!         └── Student.evaluations: Vec<Evaluation>  ← meta → nota (ordem de exibição)
//! ```
//!
//! ## Concorrência
//!
//! O registro é síncrono e não tem travas próprias. No servidor ele fica em
//! `Arc<RwLock<StudentRegistry>>`; cada operação mutável roda inteira sob o
//! write lock, então nenhuma chamada observa mutação parcial de outra.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{Grade, StudentRegistry, StudentUpdate};
//!
//! let mut registry = StudentRegistry::new();
//! registry.add("Ana Silva", "123.456.789-00", "ana@example.com")?;
//! registry.upsert_evaluation("12345678900", "Requirements", Some(Grade::Mpa))?;
//! let update = StudentUpdate { email: Some("ana@new.com".into()), ..Default::default() };
//! registry.update("12345678900", update)?;
//! assert!(registry.remove("123.456.789-00"));
//! ```

use std::collections::{HashMap, HashSet};

use super::cpf::Cpf;
use super::error::{Field, RegistryError, ValidationError};
use super::student::{validate_email, Evaluation, Grade, Student};

/// Atualização parcial de um aluno.
///
/// Para `name` e `email`, `None` e `Some("")` significam ambos "não
/// alterar": uma string vazia nunca limpa o campo. `evaluations`, quando
/// presente, substitui a sequência inteira (inclusive por uma vazia).
///
/// Diferente de [`Student::new`], o nome não é aparado: qualquer string
/// não vazia substitui o atual, inclusive uma só de espaços.
#[derive(Clone, Debug, Default)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub evaluations: Option<Vec<Evaluation>>,
}

/// Roster de alunos indexado por CPF normalizado.
#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: HashMap<Cpf, Student>,
    order: Vec<Cpf>,
}

impl StudentRegistry {
    /// Cria um registro vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cadastra um aluno.
    ///
    /// Ordem das verificações: CPF normalizável → duplicidade → construção
    /// completa do aluno. Em qualquer falha, nada é alterado.
    pub fn add(&mut self, name: &str, cpf: &str, email: &str) -> Result<Student, RegistryError> {
        let key = Cpf::parse(cpf)?;
        if self.students.contains_key(&key) {
            tracing::debug!(cpf = %key, "Registro: CPF duplicado");
            return Err(RegistryError::Duplicate {
                cpf: key.normalized().to_string(),
            });
        }

        let student = Student::new(name, cpf, email)?;
        tracing::debug!(cpf = %key, name = %student.name(), "Registro: aluno cadastrado");
        self.order.push(key.clone());
        self.students.insert(key, student.clone());
        Ok(student)
    }

    /// Remove um aluno. Retorna `true` se havia alguém com este CPF.
    ///
    /// Nunca falha: CPF malformado ou ausente é simplesmente `false`.
    pub fn remove(&mut self, cpf: &str) -> bool {
        let Ok(key) = Cpf::parse(cpf) else {
            return false;
        };
        if self.students.remove(&key).is_none() {
            return false;
        }
        self.order.retain(|k| k != &key);
        tracing::debug!(cpf = %key, "Registro: aluno removido");
        true
    }

    /// Atualiza nome, email e/ou avaliações. O CPF é imutável.
    ///
    /// Tudo é validado **antes** de qualquer escrita: email malformado ou
    /// metas repetidas deixam o aluno exatamente como estava.
    pub fn update(&mut self, cpf: &str, update: StudentUpdate) -> Result<Student, RegistryError> {
        let student = self.get_mut(cpf)?;

        let new_email = update.email.filter(|e| !e.is_empty());
        if let Some(email) = &new_email {
            validate_email(email)?;
        }
        if let Some(evaluations) = &update.evaluations {
            check_unique_goals(evaluations)?;
        }

        if let Some(name) = update.name.filter(|n| !n.is_empty()) {
            student.set_name(name);
        }
        if let Some(email) = new_email {
            student.set_email(email);
        }
        if let Some(evaluations) = update.evaluations {
            student.set_evaluations(evaluations);
        }

        tracing::debug!(cpf = %student.cpf(), "Registro: aluno atualizado");
        Ok(student.clone())
    }

    /// Busca por CPF em qualquer estilo de pontuação.
    pub fn find_by_cpf(&self, cpf: &str) -> Option<Student> {
        let key = Cpf::parse(cpf).ok()?;
        self.students.get(&key).cloned()
    }

    /// Cópia de todos os alunos, na ordem de cadastro.
    pub fn list(&self) -> Vec<Student> {
        self.order
            .iter()
            .filter_map(|k| self.students.get(k))
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    /// Insere, substitui ou apaga a nota de uma meta.
    ///
    /// | `grade` | Meta já avaliada? | Efeito |
    /// |---------|-------------------|--------|
    /// | `None` | sim | remove a entrada |
    /// | `None` | não | nada |
    /// | `Some(g)` | sim | troca a nota, mantém a posição |
    /// | `Some(g)` | não | adiciona no fim |
    pub fn upsert_evaluation(
        &mut self,
        cpf: &str,
        goal: &str,
        grade: Option<Grade>,
    ) -> Result<Student, RegistryError> {
        let student = self.get_mut(cpf)?;
        let evaluations = student.evaluations_mut();
        let existing = evaluations.iter().position(|e| e.goal == goal);

        match (grade, existing) {
            (None, Some(idx)) => {
                evaluations.remove(idx);
            }
            (None, None) => {}
            (Some(grade), Some(idx)) => evaluations[idx].grade = grade,
            (Some(grade), None) => evaluations.push(Evaluation {
                goal: goal.to_string(),
                grade,
            }),
        }

        tracing::debug!(
            cpf = %student.cpf(),
            goal,
            grade = ?grade,
            "Registro: avaliação gravada"
        );
        Ok(student.clone())
    }

    /// Localiza o aluno para mutação. CPF malformado conta como ausente.
    fn get_mut(&mut self, cpf: &str) -> Result<&mut Student, RegistryError> {
        let key = Cpf::parse(cpf).map_err(|_| RegistryError::not_found(cpf))?;
        self.students
            .get_mut(&key)
            .ok_or_else(|| RegistryError::NotFound {
                cpf: key.normalized().to_string(),
            })
    }
}

/// Uma meta só pode aparecer uma vez na sequência de avaliações.
fn check_unique_goals(evaluations: &[Evaluation]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    match evaluations.iter().find(|e| !seen.insert(e.goal.as_str())) {
        Some(dup) => Err(ValidationError::new(
            Field::Evaluations,
            format!("Duplicate evaluation for goal: {}", dup.goal),
        )),
        None => Ok(()),
    }
}
