//! # Estado da Aplicação Web
//!
//! [`AppState`] é criado uma única vez em `main` e clonado (barato, só
//! `Arc`s) para cada handler via extrator `State<AppState>` do Axum.
//!
//! ```text
//! AppState
//!  ├── registry  Arc<RwLock<StudentRegistry>>   ← dono único do roster
//!  ├── goals     Arc<[String]>                  ← catálogo fixo de metas
//!  └── events_tx Arc<broadcast::Sender<..>>     ← feed SSE de mudanças
//! ```
//!
//! Testes constroem seu próprio `AppState`, então cada teste começa com
//! um registro vazio e independente.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::core::{Field, StudentRegistry, ValidationError};
use crate::web::events::RosterEvent;

/// Capacidade do canal de eventos — consumidores lentos perdem os antigos.
const EVENT_CAPACITY: usize = 256;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Roster compartilhado. Mutações tomam o write lock pela operação inteira.
    pub registry: Arc<RwLock<StudentRegistry>>,
    /// Metas aceitas nas avaliações, na ordem das colunas da grade.
    pub goals: Arc<[String]>,
    /// Canal broadcast para eventos SSE do roster.
    pub events_tx: Arc<broadcast::Sender<RosterEvent>>,
}

impl AppState {
    pub fn new(registry: StudentRegistry, goals: Vec<String>) -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            registry: Arc::new(RwLock::new(registry)),
            goals: goals.into(),
            events_tx: Arc::new(events_tx),
        }
    }

    /// Publica um evento. Sem assinantes, o envio falha e é ignorado.
    pub fn publish(&self, event: RosterEvent) {
        let _ = self.events_tx.send(event);
    }

    /// Rejeita metas fora do catálogo configurado.
    pub fn check_goal(&self, goal: &str) -> Result<(), ValidationError> {
        if self.goals.iter().any(|g| g == goal) {
            Ok(())
        } else {
            Err(ValidationError::new(
                Field::Goal,
                format!("Unknown evaluation goal: {goal}"),
            ))
        }
    }
}
