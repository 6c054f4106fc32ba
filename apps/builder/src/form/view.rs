//! What the editor form shows: panels, cards and inputs with their current
//! values. Serialized straight into the editor page template.

use serde::Serialize;

use crate::form::accordion::{Accordion, Panel};
use crate::form::fields::{FormField, PersonalField, Section, SectionEntry};
use crate::models::Document;

#[derive(Debug, Clone, Serialize)]
pub struct EditorForm {
    pub panels: Vec<PanelView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub key: &'static str,
    pub title: &'static str,
    pub open: bool,
    /// Inputs of the personal panel; empty for list sections.
    pub fields: Vec<FieldView>,
    pub cards: Vec<CardView>,
    pub add_label: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: String,
    /// `/sections/<section>/<id>` with the id as one encoded path segment.
    pub endpoint: String,
    pub title: String,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub multiline: bool,
}

fn field_view<F: FormField>(field: F, value: &str) -> FieldView {
    FieldView {
        name: field.key(),
        label: field.label(),
        placeholder: field.placeholder(),
        value: value.to_string(),
        multiline: field.multiline(),
    }
}

/// Builds the form for `doc`. Only the open panel carries its inputs; closed
/// panels render as a header alone.
pub fn editor_form(doc: &Document, accordion: &Accordion) -> EditorForm {
    let panels = Panel::ORDER
        .into_iter()
        .map(|panel| {
            let open = accordion.is_open(panel);
            let mut view = PanelView {
                key: panel.key(),
                title: panel.title(),
                open,
                fields: Vec::new(),
                cards: Vec::new(),
                add_label: None,
            };
            if !open {
                return view;
            }
            match panel {
                Panel::Personal => {
                    view.fields = PersonalField::ALL
                        .iter()
                        .map(|&f| field_view(f, doc.personal_info.field(f)))
                        .collect();
                }
                Panel::Section(section) => {
                    view.cards = section_cards(doc, section);
                    view.add_label = Some(section.add_label());
                }
            }
            view
        })
        .collect();

    EditorForm { panels }
}

fn section_cards(doc: &Document, section: Section) -> Vec<CardView> {
    match section {
        Section::Education => cards(&doc.education, section),
        Section::Experience => cards(&doc.experience, section),
        Section::Projects => cards(&doc.projects, section),
        Section::Certifications => cards(&doc.certifications, section),
        Section::Skills => cards(&doc.skills, section),
        Section::Activities => cards(&doc.activities, section),
    }
}

/// Ids are opaque strings from the saved blob, so `/`, `?` and dot
/// segments must not reach the URL unescaped.
fn entry_endpoint(section: Section, id: &str) -> String {
    let segment = urlencoding::encode(id).replace('.', "%2E");
    format!("/sections/{}/{segment}", section.key())
}

fn cards<E: SectionEntry>(entries: &[E], section: Section) -> Vec<CardView> {
    entries
        .iter()
        .map(|entry| {
            let title = match entry.headline() {
                "" => section.untitled().to_string(),
                headline => headline.to_string(),
            };
            CardView {
                id: entry.id().to_string(),
                endpoint: entry_endpoint(section, entry.id().as_str()),
                title,
                fields: E::Field::ALL
                    .iter()
                    .map(|&f| field_view(f, entry.field(f)))
                    .collect(),
            }
        })
        .collect()
}
