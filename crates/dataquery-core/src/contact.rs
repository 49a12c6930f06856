//! Contact Form
//!
//! Field layout of the contact section. The form is presentational: it has
//! no endpoint, and submitting it does nothing beyond keeping the page in
//! place.

use serde::Serialize;

/// Input control used for a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u32 },
}

impl FieldKind {
    /// `type` attribute for `<input>` controls
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::TextArea { .. } => None,
        }
    }
}

/// One labeled form control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactField {
    /// Used as both `id` and `name`
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub static CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        id: "name",
        label: "Nome Completo",
        kind: FieldKind::Text,
        required: true,
    },
    ContactField {
        id: "email",
        label: "Seu Melhor E-mail",
        kind: FieldKind::Email,
        required: true,
    },
    ContactField {
        id: "message",
        label: "Sua Mensagem",
        kind: FieldKind::TextArea { rows: 4 },
        required: true,
    },
];

pub const SUBMIT_LABEL: &str = "Enviar Mensagem";
