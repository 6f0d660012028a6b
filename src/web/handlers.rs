//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Operação do registro |
//! |---------|--------|---------|----------------------|
//! | `list_students` | GET | JSON | `list` |
//! | `create_student` | POST | JSON 201 | `add` |
//! | `get_student` | GET | JSON / 404 | `find_by_cpf` |
//! | `update_student` | PUT | JSON | `update` |
//! | `delete_student` | DELETE | 204 / 404 | `remove` |
//! | `set_evaluation` | PUT | JSON | `upsert_evaluation` |
//! | `list_goals` | GET | JSON | catálogo de metas |
//! | `health` | GET | JSON | `count` |
//! | `sse_events` | GET | SSE stream | — |
//! | `index` | GET | HTML completo | `list` |
//! | `ui_edit_student` | GET | HTMX fragment | `find_by_cpf` |
//! | `ui_update_student` | POST | HTMX fragment | `update` |
//! | `ui_*` (demais) | GET/POST | HTMX fragment | idem API |
//!
//! ## Travas
//!
//! Cada handler toma o lock do registro em uma única expressão, e o guard
//! é liberado antes de publicar eventos ou renderizar. Nenhum lock
//! atravessa um `.await`.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use axum::response::Html;
use axum::{Form, Json};
use futures_util::stream::StreamExt;
use serde::{Deserialize, Deserializer, Serialize};
use tokio_stream::wrappers::BroadcastStream;

use super::error::ApiError;
use super::events::RosterEvent;
use super::state::AppState;
use super::templates;
use crate::core::{Evaluation, Grade, PublicStudent, RegistryError, Student, StudentUpdate};

// ─── DTOs ───────────────────────────────────────────────────────

/// Aluno como exposto pela API: projeção pública + avaliações.
#[derive(Debug, Serialize)]
pub struct StudentView {
    pub name: String,
    /// CPF formatado (`DDD.DDD.DDD-DD`).
    pub cpf: String,
    pub email: String,
    pub evaluations: Vec<Evaluation>,
}

impl From<&Student> for StudentView {
    fn from(student: &Student) -> Self {
        let PublicStudent { name, cpf, email } = student.to_public();
        Self {
            name,
            cpf,
            email,
            evaluations: student.evaluations().to_vec(),
        }
    }
}

/// Corpo de `POST /api/students`. Campos ausentes viram string vazia e
/// falham na validação do domínio.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub email: String,
}

/// Corpo de `PUT /api/students/{cpf}`. Strings vazias não alteram nada.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Substitui a sequência inteira de avaliações.
    pub evaluations: Option<Vec<Evaluation>>,
}

/// Form de edição da página. O CPF vem do path (o input fica desabilitado).
#[derive(Debug, Deserialize)]
pub struct EditStudentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Corpo de `PUT /api/students/{cpf}/evaluations` e do form da grade.
#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub cpf: Option<String>,
    #[serde(default)]
    pub goal: String,
    /// Ausente, `null` ou `""` apagam a nota.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub grade: Option<Grade>,
}

/// Resposta do endpoint `/api/health`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub students: usize,
}

/// Aceita `"MANA" | "MPA" | "MA"`; trata `null` e `""` como ausência.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Grade>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// ─── API JSON ───────────────────────────────────────────────────

/// GET `/api/students` — todos os alunos, na ordem de cadastro.
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<StudentView>> {
    let students = state.registry.read().list();
    Json(students.iter().map(StudentView::from).collect())
}

/// POST `/api/students` — cadastra um aluno.
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentView>), ApiError> {
    let student = state.registry.write().add(&req.name, &req.cpf, &req.email)?;
    tracing::info!(cpf = %student.cpf(), "Aluno cadastrado");
    state.publish(RosterEvent::added(&student));
    Ok((StatusCode::CREATED, Json(StudentView::from(&student))))
}

/// GET `/api/students/{cpf}` — busca por CPF em qualquer pontuação.
pub async fn get_student(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<StudentView>, ApiError> {
    let student = state
        .registry
        .read()
        .find_by_cpf(&cpf)
        .ok_or_else(|| RegistryError::not_found(&cpf))?;
    Ok(Json(StudentView::from(&student)))
}

/// PUT `/api/students/{cpf}` — atualização parcial.
///
/// Metas das avaliações são conferidas contra o catálogo antes de tocar
/// no registro.
pub async fn update_student(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    Json(req): Json<UpdateStudentRequest>,
) -> Result<Json<StudentView>, ApiError> {
    if let Some(evaluations) = &req.evaluations {
        for evaluation in evaluations {
            state.check_goal(&evaluation.goal)?;
        }
    }

    let update = StudentUpdate {
        name: req.name,
        email: req.email,
        evaluations: req.evaluations,
    };
    let student = state.registry.write().update(&cpf, update)?;
    tracing::info!(cpf = %student.cpf(), "Aluno atualizado");
    state.publish(RosterEvent::updated(&student));
    Ok(Json(StudentView::from(&student)))
}

/// DELETE `/api/students/{cpf}` — 204 se removido, 404 se ausente.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = state.registry.write().remove(&cpf);
    if !removed {
        return Err(RegistryError::not_found(&cpf).into());
    }
    tracing::info!(cpf = %cpf, "Aluno removido");
    state.publish(RosterEvent::removed(&cpf));
    Ok(StatusCode::NO_CONTENT)
}

/// PUT `/api/students/{cpf}/evaluations` — grava ou apaga uma nota.
pub async fn set_evaluation(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    Json(req): Json<EvaluationRequest>,
) -> Result<Json<StudentView>, ApiError> {
    let student = apply_evaluation(&state, &cpf, &req.goal, req.grade)?;
    Ok(Json(StudentView::from(&student)))
}

/// GET `/api/goals` — metas avaliadas, na ordem das colunas.
pub async fn list_goals(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.goals.to_vec())
}

/// GET `/api/health` — liveness + tamanho do roster.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        students: state.registry.read().count(),
    })
}

/// GET `/events` — stream SSE de [`RosterEvent`]s.
///
/// Assinantes atrasados perdem eventos (filter_map descarta `Lagged`).
pub async fn sse_events(
    State(state): State<AppState>,
) -> Sse<impl futures_util::Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.events_tx.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| async move {
        match result {
            Ok(event) => {
                let data = serde_json::to_string(&event).ok()?;
                Some(Ok(SseEvent::default().data(data)))
            }
            Err(_) => None,
        }
    });
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Confere a meta, grava a nota e publica o evento.
fn apply_evaluation(
    state: &AppState,
    cpf: &str,
    goal: &str,
    grade: Option<Grade>,
) -> Result<Student, ApiError> {
    state.check_goal(goal)?;
    let student = state.registry.write().upsert_evaluation(cpf, goal, grade)?;
    tracing::info!(cpf = %student.cpf(), goal, grade = ?grade, "Avaliação gravada");
    state.publish(RosterEvent::EvaluationChanged {
        cpf: student.formatted_cpf(),
        goal: goal.to_string(),
        grade,
    });
    Ok(student)
}

// ─── Páginas e fragments HTMX ───────────────────────────────────

fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// Re-renderiza `#roster` com o estado atual e, opcionalmente, um erro.
///
/// `editing` abre o formulário em modo edição para este CPF, se ele
/// ainda existir.
fn roster_fragment(state: &AppState, editing: Option<&str>, error: Option<&str>) -> Html<String> {
    let (students, editing) = {
        let registry = state.registry.read();
        (registry.list(), editing.and_then(|cpf| registry.find_by_cpf(cpf)))
    };
    markup_to_html(templates::roster(
        &students,
        &state.goals,
        editing.as_ref(),
        error,
    ))
}

/// GET `/` — página completa do roster.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let students = state.registry.read().list();
    markup_to_html(templates::full_page(&students, &state.goals))
}

/// GET `/ui/roster` — fragmento recarregado pelo listener SSE.
pub async fn ui_roster(State(state): State<AppState>) -> Html<String> {
    roster_fragment(&state, None, None)
}

/// POST `/ui/students` — cadastro via formulário.
pub async fn ui_add_student(
    State(state): State<AppState>,
    Form(form): Form<CreateStudentRequest>,
) -> Html<String> {
    let result = state.registry.write().add(&form.name, &form.cpf, &form.email);
    match result {
        Ok(student) => {
            tracing::info!(cpf = %student.cpf(), "Aluno cadastrado via formulário");
            state.publish(RosterEvent::added(&student));
            roster_fragment(&state, None, None)
        }
        Err(e) => {
            tracing::info!(error = %e, "Cadastro via formulário rejeitado");
            roster_fragment(&state, None, Some(&e.to_string()))
        }
    }
}

/// GET `/ui/students/{cpf}/edit` — abre o formulário em modo edição.
pub async fn ui_edit_student(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Html<String> {
    let exists = state.registry.read().find_by_cpf(&cpf).is_some();
    if exists {
        roster_fragment(&state, Some(&cpf), None)
    } else {
        roster_fragment(&state, None, Some("Student not found"))
    }
}

/// POST `/ui/students/{cpf}` — envio do formulário de edição.
///
/// Em falha, o formulário continua em modo edição com os dados gravados.
pub async fn ui_update_student(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    Form(form): Form<EditStudentForm>,
) -> Html<String> {
    let update = StudentUpdate {
        name: Some(form.name),
        email: Some(form.email),
        evaluations: None,
    };
    let result = state.registry.write().update(&cpf, update);
    match result {
        Ok(student) => {
            tracing::info!(cpf = %student.cpf(), "Aluno atualizado via formulário");
            state.publish(RosterEvent::updated(&student));
            roster_fragment(&state, None, None)
        }
        Err(e) => {
            tracing::info!(cpf = ?e.cpf(), error = %e, "Edição via formulário rejeitada");
            roster_fragment(&state, Some(&cpf), Some(&e.to_string()))
        }
    }
}

/// POST `/ui/students/{cpf}/delete` — remoção pelo botão da tabela.
pub async fn ui_delete_student(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Html<String> {
    let removed = state.registry.write().remove(&cpf);
    if removed {
        tracing::info!(cpf = %cpf, "Aluno removido via formulário");
        state.publish(RosterEvent::removed(&cpf));
        roster_fragment(&state, None, None)
    } else {
        roster_fragment(&state, None, Some("Student not found"))
    }
}

/// POST `/ui/evaluations` — mudança de um `<select>` da grade.
pub async fn ui_set_evaluation(
    State(state): State<AppState>,
    Form(form): Form<EvaluationRequest>,
) -> Html<String> {
    let cpf = form.cpf.unwrap_or_default();
    match apply_evaluation(&state, &cpf, &form.goal, form.grade) {
        Ok(_) => roster_fragment(&state, None, None),
        Err(e) => roster_fragment(&state, None, Some(&e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::super::create_router;
    use super::super::state::AppState;
    use super::super::events::RosterEvent;
    use crate::core::StudentRegistry;

    fn test_state() -> AppState {
        AppState::new(
            StudentRegistry::new(),
            vec!["Requirements".to_string(), "Design".to_string()],
        )
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        (status, value)
    }

    async fn send_get(app: &Router, uri: &str) -> String {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn send_form(app: &Router, uri: &str, form: &str) -> String {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn ana() -> Value {
        json!({"name": "Ana Silva", "cpf": "123.456.789-00", "email": "ana@example.com"})
    }

    #[tokio::test]
    async fn create_then_fetch_with_any_punctuation() {
        let app = create_router(test_state());

        let (status, body) = send(&app, Method::POST, "/api/students", Some(ana())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["cpf"], "123.456.789-00");
        assert_eq!(body["evaluations"], json!([]));

        let (status, body) = send(&app, Method::GET, "/api/students/12345678900", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ana Silva");

        let (_, list) = send(&app, Method::GET, "/api/students", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_and_invalid_map_to_distinct_statuses() {
        let app = create_router(test_state());
        send(&app, Method::POST, "/api/students", Some(ana())).await;

        let dup = json!({"name": "Outra", "cpf": "12345678900", "email": "o@example.com"});
        let (status, body) = send(&app, Method::POST, "/api/students", Some(dup)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Student with this CPF already exists");

        let bad = json!({"name": "Bia", "cpf": "123", "email": "bia@example.com"});
        let (status, body) = send(&app, Method::POST, "/api/students", Some(bad)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Invalid CPF format");
        assert_eq!(body["field"], "cpf");

        let (status, _) = send(&app, Method::GET, "/api/students/98765432100", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, health) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(health["students"], 1);
    }

    #[tokio::test]
    async fn update_skips_empty_fields_and_rejects_bad_email() {
        let app = create_router(test_state());
        send(&app, Method::POST, "/api/students", Some(ana())).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/students/123.456.789-00",
            Some(json!({"name": "", "email": "bad"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "email");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/students/12345678900",
            Some(json!({"name": "", "email": "ana@new.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ana Silva");
        assert_eq!(body["email"], "ana@new.com");

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/students/99999999999",
            Some(json!({"name": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn evaluation_upsert_and_clear() {
        let app = create_router(test_state());
        send(&app, Method::POST, "/api/students", Some(ana())).await;
        let uri = "/api/students/12345678900/evaluations";

        let (status, body) =
            send(&app, Method::PUT, uri, Some(json!({"goal": "Requirements", "grade": "MA"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["evaluations"], json!([{"goal": "Requirements", "grade": "MA"}]));

        let (_, body) =
            send(&app, Method::PUT, uri, Some(json!({"goal": "Requirements", "grade": "MPA"}))).await;
        assert_eq!(body["evaluations"], json!([{"goal": "Requirements", "grade": "MPA"}]));

        let (_, body) =
            send(&app, Method::PUT, uri, Some(json!({"goal": "Requirements", "grade": ""}))).await;
        assert_eq!(body["evaluations"], json!([]));

        let (status, body) =
            send(&app, Method::PUT, uri, Some(json!({"goal": "Astrology", "grade": "MA"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "goal");

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/students/99999999999/evaluations",
            Some(json!({"goal": "Design", "grade": "MA"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_replaces_evaluation_list() {
        let app = create_router(test_state());
        send(&app, Method::POST, "/api/students", Some(ana())).await;

        let evaluations = json!([{"goal": "Design", "grade": "MANA"}]);
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/students/12345678900",
            Some(json!({"name": "Ana Silva", "email": "ana@example.com", "evaluations": evaluations})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["evaluations"], evaluations);
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let app = create_router(test_state());
        send(&app, Method::POST, "/api/students", Some(ana())).await;

        let (status, _) = send(&app, Method::DELETE, "/api/students/123.456.789-00", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = send(&app, Method::DELETE, "/api/students/12345678900", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Student not found");
    }

    #[tokio::test]
    async fn mutations_publish_events() {
        let state = test_state();
        let mut rx = state.events_tx.subscribe();
        let app = create_router(state);

        send(&app, Method::POST, "/api/students", Some(ana())).await;
        assert_eq!(
            rx.recv().await.unwrap(),
            RosterEvent::StudentAdded {
                cpf: "123.456.789-00".into(),
                name: "Ana Silva".into()
            }
        );

        send(&app, Method::DELETE, "/api/students/12345678900", None).await;
        assert_eq!(
            rx.recv().await.unwrap(),
            RosterEvent::StudentRemoved { cpf: "123.456.789-00".into() }
        );
    }

    #[tokio::test]
    async fn ui_form_keeps_roster_on_error() {
        let app = create_router(test_state());

        let html = send_form(&app, "/ui/students", "name=Ana&cpf=123.456.789-00&email=ana%40example.com").await;
        assert!(html.contains("Ana"));
        assert!(!html.contains("error-message"));

        let html = send_form(&app, "/ui/students", "name=Bia&cpf=12345678900&email=bia%40example.com").await;
        assert!(html.contains("Student with this CPF already exists"));
        assert!(html.contains("Students (1)"));

        let html = send_form(&app, "/ui/evaluations", "cpf=12345678900&goal=Design&grade=MA").await;
        assert!(html.contains(r#"<option value="MA" selected>MA</option>"#));

        let html = send_form(&app, "/ui/students/12345678900/delete", "").await;
        assert!(html.contains("Students (0)"));
    }

    #[tokio::test]
    async fn goals_and_pages_render() {
        let app = create_router(test_state());

        let (status, goals) = send(&app, Method::GET, "/api/goals", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(goals, json!(["Requirements", "Design"]));

        let page = send_get(&app, "/").await;
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"id="roster""#));
        assert!(page.contains("/events"));

        let fragment = send_get(&app, "/ui/roster").await;
        assert!(fragment.contains("Students (0)"));
        assert!(!fragment.contains("<html"));
    }

    #[tokio::test]
    async fn ui_edit_updates_student_or_keeps_row() {
        let state = test_state();
        let mut rx = state.events_tx.subscribe();
        let app = create_router(state.clone());

        send_form(&app, "/ui/students", "name=Ana+Silva&cpf=123.456.789-00&email=ana%40example.com").await;
        rx.recv().await.unwrap();

        let html = send_get(&app, "/ui/students/123.456.789-00/edit").await;
        assert!(html.contains("Edit Student"));
        assert!(html.contains(r#"value="ana@example.com""#));

        let html = send_form(&app, "/ui/students/12345678900", "name=Ana+Souza&email=bad").await;
        assert!(html.contains("Invalid email format"));
        assert!(html.contains("Edit Student"));
        let stored = state.registry.read().find_by_cpf("12345678900").unwrap();
        assert_eq!(stored.name(), "Ana Silva");
        assert_eq!(stored.email(), "ana@example.com");

        let html = send_form(&app, "/ui/students/12345678900", "name=Ana+Souza&email=ana%40new.com").await;
        assert!(!html.contains("error-message"));
        assert!(html.contains("Add New Student"));
        assert!(html.contains("Ana Souza"));
        assert!(html.contains("ana@new.com"));
        assert_eq!(
            rx.recv().await.unwrap(),
            RosterEvent::StudentUpdated { cpf: "123.456.789-00".into() }
        );

        let html = send_get(&app, "/ui/students/99999999999/edit").await;
        assert!(html.contains("Student not found"));
        assert!(html.contains("Add New Student"));
    }
}
