//! # Módulo Web — API e Interface do Roster
//!
//! Camada HTTP construída com **Axum** + **HTMX** + **Maud** + **SSE**.
//! Nenhuma regra de negócio mora aqui: os handlers traduzem requisições
//! em chamadas ao [`StudentRegistry`](crate::core::StudentRegistry) e
//! erros em status HTTP.
//!
//! ## Rotas
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ API JSON                                                    │
//! │  ├── GET    /api/students                  → lista          │
//! │  ├── POST   /api/students                  → cadastra (201) │
//! │  ├── GET    /api/students/{cpf}            → busca          │
//! │  ├── PUT    /api/students/{cpf}            → atualiza       │
//! │  ├── DELETE /api/students/{cpf}            → remove (204)   │
//! │  ├── PUT    /api/students/{cpf}/evaluations → nota          │
//! │  ├── GET    /api/goals                     → metas          │
//! │  └── GET    /api/health                    → liveness       │
//! ├─────────────────────────────────────────────────────────────┤
//! │ HTML / HTMX                                                 │
//! │  ├── GET  /                        → página completa        │
//! │  ├── GET  /ui/roster               → fragment               │
//! │  ├── POST /ui/students             → fragment               │
//! │  ├── GET  /ui/students/{cpf}/edit  → form em modo edição    │
//! │  ├── POST /ui/students/{cpf}       → atualiza → fragment    │
//! │  ├── POST /ui/students/{cpf}/delete → fragment              │
//! │  └── POST /ui/evaluations          → fragment               │
//! ├─────────────────────────────────────────────────────────────┤
//! │ GET /events → SSE de RosterEvent                            │
//! │ /assets/*   → tower_http::ServeDir                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`events`] | Enum de eventos SSE |
//! | [`error`] | Mapeamento erro → status HTTP |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod error;
pub mod events;
pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── API JSON ──────────────────────────────────────────
        .route(
            "/api/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/api/students/{cpf}",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
        .route("/api/students/{cpf}/evaluations", put(handlers::set_evaluation))
        .route("/api/goals", get(handlers::list_goals))
        .route("/api/health", get(handlers::health))
        .route("/events", get(handlers::sse_events))
        // ── Páginas e fragments HTMX ─────────────────────────
        .route("/", get(handlers::index))
        .route("/ui/roster", get(handlers::ui_roster))
        .route("/ui/students", post(handlers::ui_add_student))
        .route("/ui/students/{cpf}", post(handlers::ui_update_student))
        .route("/ui/students/{cpf}/edit", get(handlers::ui_edit_student))
        .route("/ui/students/{cpf}/delete", post(handlers::ui_delete_student))
        .route("/ui/evaluations", post(handlers::ui_set_evaluation))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
