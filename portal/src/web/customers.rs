use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    form::{CustomerForm, SubmitStart},
    models::{
        customer::ACCEPTED_DOCUMENT_EXTENSIONS, CustomerRecord, DocumentRef, Field, FieldKindError,
        InputKind, Section,
    },
    web::render::{self, escape},
    AppState,
};

pub const ACTION_RESET: &str = "reset";
pub const BUSY_NOTICE: &str = "A submission is already in progress";

enum Step {
    Render,
    Send(CustomerRecord),
}

fn form_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Customer form {} not found", id))
}

/// Opens a new form instance and sends the browser to it.
pub async fn new_form(State(state): State<AppState>) -> Redirect {
    let id = state.forms.open();
    tracing::debug!(form = %id, "Opened customer form");
    Redirect::to(&format!("/create-customer/{}", id))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Html<String>> {
    render_instance(&state, id)
}

/// Applies the posted inputs, then resets or submits the form.
///
/// Inputs stay editable while a submission is in flight: a post that finds the
/// form busy still updates the draft, it just does not submit again. If the
/// in-flight call then fails, the kept draft holds those later edits.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>> {
    let reset = pairs
        .iter()
        .any(|(name, value)| name == "action" && value == ACTION_RESET);

    let step = state
        .forms
        .with_form(id, |form| -> Result<Step> {
            if reset {
                form.reset();
                return Ok(Step::Render);
            }
            apply_posted(form, &pairs)?;
            Ok(match form.begin_submit() {
                SubmitStart::Ready(record) => Step::Send(record),
                _ => Step::Render,
            })
        })
        .ok_or_else(|| form_not_found(id))??;

    if let Step::Send(record) = step {
        tracing::info!(form = %id, name = %record.name, "Submitting customer");
        // Settled on its own task: a dropped request must not leave the form submitting.
        let api = state.api.clone();
        let forms = state.forms.clone();
        tokio::spawn(async move {
            let result = api.create_customer(&record).await;
            forms.with_form(id, |form| form.complete(result))
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Submission task failed: {}", e)))?
        .ok_or_else(|| form_not_found(id))?;
    }

    render_instance(&state, id)
}

/// Copies posted values into the draft. Unchecked boxes are absent from a post.
fn apply_posted(form: &mut CustomerForm, pairs: &[(String, String)]) -> std::result::Result<(), FieldKindError> {
    let mut checked = HashSet::new();

    for (name, value) in pairs {
        let Some(field) = Field::from_name(name) else {
            continue;
        };
        match field.spec().kind {
            InputKind::Checkbox => {
                checked.insert(field);
            }
            // A urlencoded post only carries the picked file's name.
            InputKind::Document => {
                if !value.is_empty() {
                    form.attach_document(field, DocumentRef::new(value.as_str(), 0))?;
                }
            }
            _ => form.set_text(field, value.as_str())?,
        }
    }

    for field in Field::ALL {
        if field.spec().kind == InputKind::Checkbox {
            form.set_flag(field, checked.contains(&field))?;
        }
    }
    Ok(())
}

fn render_instance(state: &AppState, id: Uuid) -> Result<Html<String>> {
    state
        .forms
        .with_form(id, |form| render_page(id, form))
        .map(Html)
        .ok_or_else(|| form_not_found(id))
}

fn render_page(id: Uuid, form: &mut CustomerForm) -> String {
    let toast = form.take_notification();
    let mut content = render::page_header(
        "Create Customer",
        "Add a new customer to the system and sync with SAP",
    );
    if let Some(toast) = &toast {
        content.push_str(&render::toast(toast));
    } else if form.is_submitting() {
        content.push_str(&format!(
            r#"<div class="toast toast-info" role="status">{}</div>"#,
            BUSY_NOTICE
        ));
    }
    content.push_str(&render_form(id, form));
    render::layout("Create Customer", "/create-customer", &content)
}

fn render_form(id: Uuid, form: &CustomerForm) -> String {
    let sections: String = Section::ALL
        .iter()
        .map(|section| render_section(*section, form))
        .collect();

    let submit = if form.is_submitting() {
        r#"<button type="submit" name="action" value="create" disabled>Creating...</button>"#
    } else {
        r#"<button type="submit" name="action" value="create">Create Customer</button>"#
    };

    format!(
        r#"<form method="post" action="/create-customer/{id}" class="customer-form">
<div class="grid">{sections}</div>
<div class="actions">
<button type="submit" name="action" value="{ACTION_RESET}" formnovalidate>Reset</button>
{submit}
</div>
</form>"#
    )
}

fn render_section(section: Section, form: &CustomerForm) -> String {
    let fields: String = section.fields().map(|f| render_field(f, form)).collect();
    format!(
        r#"<section class="card"><h3>{}</h3>{}</section>"#,
        escape(section.title()),
        fields
    )
}

fn render_field(field: Field, form: &CustomerForm) -> String {
    let spec = field.spec();
    let draft = form.draft();
    let name = spec.name;
    let error = form
        .error(field)
        .map(|m| format!(r#"<div class="field-error">{}</div>"#, escape(m)))
        .unwrap_or_default();
    let marker = if spec.marked_required {
        r#"<span class="required">Required</span>"#
    } else {
        ""
    };
    let label = format!(
        r#"<div class="label"><span>{}</span>{}</div>"#,
        escape(spec.label),
        marker
    );
    let placeholder = escape(spec.placeholder);

    let control = match spec.kind {
        InputKind::Text | InputKind::Email | InputKind::Number => {
            let input_type = match spec.kind {
                InputKind::Email => "email",
                InputKind::Number => "number",
                _ => "text",
            };
            let step = if spec.kind == InputKind::Number { r#" step="any""# } else { "" };
            format!(
                r#"<input type="{input_type}" name="{name}" value="{}" placeholder="{placeholder}"{step}>"#,
                escape(&draft.display_value(field))
            )
        }
        InputKind::Select(options) => {
            let current = draft.text(field).unwrap_or_default();
            let opts: String = options
                .iter()
                .map(|(value, text)| {
                    let selected = if *value == current { " selected" } else { "" };
                    format!(
                        r#"<option value="{}"{selected}>{}</option>"#,
                        escape(value),
                        escape(text)
                    )
                })
                .collect();
            format!(r#"<select name="{name}">{opts}</select>"#)
        }
        InputKind::Checkbox => {
            let checked = if draft.flag(field).unwrap_or(false) { " checked" } else { "" };
            return format!(
                r#"<label class="check"><input type="checkbox" name="{name}" value="true"{checked}> <span>{}</span></label>{error}"#,
                escape(spec.label)
            );
        }
        InputKind::Document => {
            let accept: Vec<String> = ACCEPTED_DOCUMENT_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect();
            let current = draft
                .document(field)
                .map(|d| format!(r#"<span class="file">{}</span>"#, escape(&d.file_name)))
                .unwrap_or_default();
            format!(
                r#"<input type="file" name="{name}" accept="{}"><span class="hint">{placeholder}</span>{current}"#,
                accept.join(",")
            )
        }
    };

    format!(r#"<label class="field">{label}{control}{error}</label>"#)
}
