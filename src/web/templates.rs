//! # Templates Maud — Roster e Grade de Avaliações
//!
//! HTML renderizado no servidor com [`maud`](https://maud.lambda.xyz/) e
//! atualizado por fragmentos HTMX.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Cabeçalho + `#roster` + scripts |
//! | [`roster()`] | Fragment HTMX | Formulário, lista de alunos e grade de notas |
//!
//! O formulário tem dois modos: cadastro (POST `/ui/students`) e edição
//! (POST `/ui/students/{cpf}`, CPF travado, botão Cancel recarrega o roster).
//!
//! ## Layout
//!
//! ```text
//! ┌──────────── header ─────────────┐
//! │ Teaching Assistant              │
//! ├──────────── #roster ────────────┤
//! │ [erro, se houver]               │
//! │ Nome [____] CPF [____] Email [_]│
//! │ ┌ Alunos ─────────────────────┐ │
//! │ │ Nome │ CPF │ Email │ Ações  │ │
//! │ └─────────────────────────────┘ │
//! │ ┌ Avaliações ─────────────────┐ │
//! │ │ Nome │ Meta1 │ Meta2 │ ...  │ │
//! │ └─────────────────────────────┘ │
//! └─────────────────────────────────┘
//! ```
//!
//! Toda ação HTMX troca o conteúdo de `#roster` inteiro. Em falha, o
//! fragmento mostra o roster atual (inalterado) com a mensagem de erro.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::core::{Grade, Student};

/// Página principal — roster completo e scripts de atualização.
///
/// O script inline:
/// - aplica a máscara `000.000.000-00` no campo CPF (só exibição)
/// - escuta `/events` e recarrega `#roster` quando outra aba altera algo
pub fn full_page(students: &[Student], goals: &[String]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Teaching Assistant — Roster" }
                link rel="stylesheet" href="/assets/roster.css";
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body {
                header class="app-header" {
                    h1 { "Teaching Assistant" }
                    p { "Managing ESS student information" }
                }
                main id="roster" class="app-main" {
                    (roster(students, goals, None, None))
                }
                (PreEscaped(r#"<script>
(function() {
  document.body.addEventListener('input', function(e) {
    if (e.target.name !== 'cpf') return;
    var d = e.target.value.replace(/\D/g, '').slice(0, 11);
    e.target.value = d.length === 11
      ? d.replace(/(\d{3})(\d{3})(\d{3})(\d{2})/, '$1.$2.$3-$4')
      : d;
  });

  var es = new EventSource('/events');
  es.onmessage = function() {
    var active = document.activeElement;
    if (active && active.closest && active.closest('#student-form')) return;
    htmx.ajax('GET', '/ui/roster', { target: '#roster', swap: 'innerHTML' });
  };
})();
</script>"#))
            }
        }
    }
}

/// Fragment HTMX com formulário, lista de alunos e grade de avaliações.
///
/// Com `editing = Some(aluno)`, o formulário vem preenchido em modo edição.
pub fn roster(
    students: &[Student],
    goals: &[String],
    editing: Option<&Student>,
    error: Option<&str>,
) -> Markup {
    html! {
        @if let Some(message) = error {
            div class="error-message" {
                strong { "Error: " } (message)
            }
        }

        (student_form(editing))

        section class="student-list" {
            h2 { "Students (" (students.len()) ")" }
            @if students.is_empty() {
                p class="no-students" { "No students registered yet." }
            } @else {
                table class="students-table" {
                    thead {
                        tr { th { "Name" } th { "CPF" } th { "Email" } th {} }
                    }
                    tbody {
                        @for student in students {
                            tr {
                                td { (student.name()) }
                                td { (student.formatted_cpf()) }
                                td { (student.email()) }
                                td class="actions" {
                                    button class="edit-btn"
                                        hx-get=(format!("/ui/students/{}/edit", student.normalized_cpf()))
                                        hx-target="#roster"
                                        hx-swap="innerHTML" {
                                        "Edit"
                                    }
                                    " "
                                    button class="delete-btn"
                                        hx-post=(format!("/ui/students/{}/delete", student.normalized_cpf()))
                                        hx-target="#roster"
                                        hx-swap="innerHTML"
                                        hx-confirm=(format!("Remove {}?", student.name())) {
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        section class="evaluations-container" {
            h2 { "Student Evaluations" }
            @if students.is_empty() {
                div class="no-students" {
                    "No students available for evaluation. Add students first."
                }
            } @else {
                p { "Evaluation grades: MANA (Must Not Approve), MPA (May Pass), MA (Must Approve)" }
                table class="evaluations-table" {
                    thead {
                        tr {
                            th { "Student Name" }
                            @for goal in goals { th { (goal) } }
                        }
                    }
                    tbody {
                        @for student in students {
                            tr {
                                td { strong { (student.name()) } }
                                @for goal in goals {
                                    td class="grade-cell" { (grade_select(student, goal)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Formulário de cadastro ou de edição do aluno.
fn student_form(editing: Option<&Student>) -> Markup {
    let (title, action, submit) = match editing {
        Some(student) => (
            "Edit Student",
            format!("/ui/students/{}", student.normalized_cpf()),
            "Update Student",
        ),
        None => ("Add New Student", "/ui/students".to_string(), "Add Student"),
    };

    html! {
        form id="student-form" class="student-form"
            hx-post=(action)
            hx-target="#roster"
            hx-swap="innerHTML" {
            h2 { (title) }
            div class="form-group" {
                label for="name" { "Name:" }
                input type="text" id="name" name="name" required
                    placeholder="Enter student's full name"
                    value=[editing.map(|s| s.name())];
            }
            div class="form-group" {
                label for="cpf" { "CPF:" }
                input type="text" id="cpf" name="cpf" required
                    placeholder="000.000.000-00" maxlength="14"
                    value=[editing.map(|s| s.formatted_cpf())]
                    disabled[editing.is_some()];
            }
            div class="form-group" {
                label for="email" { "Email:" }
                input type="email" id="email" name="email" required
                    placeholder="student@example.com"
                    value=[editing.map(|s| s.email())];
            }
            div class="form-buttons" {
                button type="submit" { (submit) }
                @if editing.is_some() {
                    button type="button" class="cancel-btn"
                        hx-get="/ui/roster"
                        hx-target="#roster"
                        hx-swap="innerHTML" {
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// `<select>` de uma célula da grade (aluno × meta).
fn grade_select(student: &Student, goal: &str) -> Markup {
    let current = student.grade_for(goal);
    let vals = serde_json::json!({ "cpf": student.normalized_cpf(), "goal": goal });
    let class = match current {
        Some(grade) => format!("grade-select {}", grade.css_class()),
        None => "grade-select no-grade".to_string(),
    };

    html! {
        select name="grade" class=(class)
            hx-post="/ui/evaluations"
            hx-trigger="change"
            hx-vals=(vals.to_string())
            hx-target="#roster"
            hx-swap="innerHTML" {
            option value="" selected[current.is_none()] { "—" }
            @for grade in Grade::ALL {
                option value=(grade.as_str()) selected[current == Some(grade)] { (grade.as_str()) }
            }
        }
    }
}
