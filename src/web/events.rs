//! # Eventos SSE do Roster
//!
//! Define o enum [`RosterEvent`] — cada mutação bem-sucedida do registro
//! publica um evento no canal broadcast, repassado ao navegador via
//! Server-Sent Events em `/events`.
//!
//! ## Serialização
//!
//! Usa `#[serde(tag = "type")]` para produzir JSON com discriminador:
//!
//! ```json
//! { "type": "EvaluationChanged", "cpf": "123.456.789-00", "goal": "Design", "grade": "MA" }
//! ```
//!
//! A página do roster escuta esses eventos e recarrega o fragmento da
//! tabela, mantendo várias abas sincronizadas.

use serde::Serialize;

use crate::core::{Cpf, Grade, Student};

/// Mudança no roster, publicada após o write lock ser liberado.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RosterEvent {
    /// Novo aluno cadastrado.
    StudentAdded { cpf: String, name: String },

    /// Nome, email ou sequência de avaliações alterados.
    StudentUpdated { cpf: String },

    /// Aluno removido do roster.
    StudentRemoved { cpf: String },

    /// Nota gravada (`grade: null` = nota apagada).
    EvaluationChanged {
        cpf: String,
        goal: String,
        grade: Option<Grade>,
    },
}

impl RosterEvent {
    pub fn added(student: &Student) -> Self {
        RosterEvent::StudentAdded {
            cpf: student.formatted_cpf(),
            name: student.name().to_string(),
        }
    }

    pub fn updated(student: &Student) -> Self {
        RosterEvent::StudentUpdated {
            cpf: student.formatted_cpf(),
        }
    }

    /// Evento de remoção com o CPF sempre na forma formatada.
    pub fn removed(cpf: &str) -> Self {
        let cpf = Cpf::parse(cpf)
            .map(|c| c.formatted())
            .unwrap_or_else(|_| cpf.to_string());
        RosterEvent::StudentRemoved { cpf }
    }
}
