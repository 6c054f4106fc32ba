//! Document edits. Each operation takes the current snapshot by reference
//! and returns the next one; the input is never touched.

use tracing::{debug, warn};

use crate::form::fields::{
    CertificationField, EducationField, PersonalField, ProjectField, Section, SectionEntry,
    SkillField, TimelineField,
};
use crate::form::ids::IdSource;
use crate::form::EditError;
use crate::models::{
    CertificationEntry, Document, EducationEntry, EntryId, ProjectEntry, SkillGroup,
    TimelineEntry,
};

// ────────────────────────────────────────────────────────────────────────────
// Generic list edits
// ────────────────────────────────────────────────────────────────────────────

type ListOf<E> = fn(&mut Document) -> &mut Vec<E>;

fn add_entry<E: SectionEntry>(doc: &Document, id: EntryId, list: ListOf<E>) -> Document {
    let mut next = doc.clone();
    let entries = list(&mut next);
    if entries.iter().any(|e| e.id() == &id) {
        warn!("Refusing to add entry with duplicate id {id}");
        return next;
    }
    entries.push(E::blank(id));
    next
}

fn update_entry<E: SectionEntry>(
    doc: &Document,
    id: &EntryId,
    field: E::Field,
    value: &str,
    list: ListOf<E>,
) -> Document {
    let mut next = doc.clone();
    match list(&mut next).iter_mut().find(|e| e.id() == id) {
        Some(entry) => *entry.field_mut(field) = value.to_string(),
        None => debug!("Update for unknown entry {id} ignored"),
    }
    next
}

fn remove_entry<E: SectionEntry>(doc: &Document, id: &EntryId, list: ListOf<E>) -> Document {
    let mut next = doc.clone();
    list(&mut next).retain(|e| e.id() != id);
    next
}

fn education(doc: &mut Document) -> &mut Vec<EducationEntry> {
    &mut doc.education
}

fn experience(doc: &mut Document) -> &mut Vec<TimelineEntry> {
    &mut doc.experience
}

fn projects(doc: &mut Document) -> &mut Vec<ProjectEntry> {
    &mut doc.projects
}

fn certifications(doc: &mut Document) -> &mut Vec<CertificationEntry> {
    &mut doc.certifications
}

fn skills(doc: &mut Document) -> &mut Vec<SkillGroup> {
    &mut doc.skills
}

fn activities(doc: &mut Document) -> &mut Vec<TimelineEntry> {
    &mut doc.activities
}

// ────────────────────────────────────────────────────────────────────────────
// Per-section operations
// ────────────────────────────────────────────────────────────────────────────

pub fn update_personal_info(doc: &Document, field: PersonalField, value: &str) -> Document {
    let mut next = doc.clone();
    *next.personal_info.field_mut(field) = value.to_string();
    next
}

pub fn add_education(doc: &Document, id: EntryId) -> Document {
    add_entry(doc, id, education)
}

pub fn update_education(
    doc: &Document,
    id: &EntryId,
    field: EducationField,
    value: &str,
) -> Document {
    update_entry(doc, id, field, value, education)
}

pub fn remove_education(doc: &Document, id: &EntryId) -> Document {
    remove_entry(doc, id, education)
}

pub fn add_experience(doc: &Document, id: EntryId) -> Document {
    add_entry(doc, id, experience)
}

pub fn update_experience(
    doc: &Document,
    id: &EntryId,
    field: TimelineField,
    value: &str,
) -> Document {
    update_entry(doc, id, field, value, experience)
}

pub fn remove_experience(doc: &Document, id: &EntryId) -> Document {
    remove_entry(doc, id, experience)
}

pub fn add_project(doc: &Document, id: EntryId) -> Document {
    add_entry(doc, id, projects)
}

pub fn update_project(doc: &Document, id: &EntryId, field: ProjectField, value: &str) -> Document {
    update_entry(doc, id, field, value, projects)
}

pub fn remove_project(doc: &Document, id: &EntryId) -> Document {
    remove_entry(doc, id, projects)
}

pub fn add_certification(doc: &Document, id: EntryId) -> Document {
    add_entry(doc, id, certifications)
}

pub fn update_certification(
    doc: &Document,
    id: &EntryId,
    field: CertificationField,
    value: &str,
) -> Document {
    update_entry(doc, id, field, value, certifications)
}

pub fn remove_certification(doc: &Document, id: &EntryId) -> Document {
    remove_entry(doc, id, certifications)
}

pub fn add_skill(doc: &Document, id: EntryId) -> Document {
    add_entry(doc, id, skills)
}

pub fn update_skill(doc: &Document, id: &EntryId, field: SkillField, value: &str) -> Document {
    update_entry(doc, id, field, value, skills)
}

pub fn remove_skill(doc: &Document, id: &EntryId) -> Document {
    remove_entry(doc, id, skills)
}

pub fn add_activity(doc: &Document, id: EntryId) -> Document {
    add_entry(doc, id, activities)
}

pub fn update_activity(
    doc: &Document,
    id: &EntryId,
    field: TimelineField,
    value: &str,
) -> Document {
    update_entry(doc, id, field, value, activities)
}

pub fn remove_activity(doc: &Document, id: &EntryId) -> Document {
    remove_entry(doc, id, activities)
}

// ────────────────────────────────────────────────────────────────────────────
// Untyped edits (field names as they arrive from the browser)
// ────────────────────────────────────────────────────────────────────────────

/// One user edit, with field names still in their wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Personal {
        field: String,
        value: String,
    },
    Add {
        section: Section,
    },
    Update {
        section: Section,
        id: EntryId,
        field: String,
        value: String,
    },
    Remove {
        section: Section,
        id: EntryId,
    },
}

/// Applies an edit to `doc`. Only an unknown field name fails; an unknown
/// entry id leaves the document as it was.
pub fn apply(doc: &Document, edit: Edit, ids: &dyn IdSource) -> Result<Document, EditError> {
    let next = match edit {
        Edit::Personal { field, value } => update_personal_info(doc, field.parse()?, &value),
        Edit::Add { section } => {
            let id = ids.next_id();
            debug!("Adding {} entry {id}", section.key());
            match section {
                Section::Education => add_education(doc, id),
                Section::Experience => add_experience(doc, id),
                Section::Projects => add_project(doc, id),
                Section::Certifications => add_certification(doc, id),
                Section::Skills => add_skill(doc, id),
                Section::Activities => add_activity(doc, id),
            }
        }
        Edit::Update {
            section,
            id,
            field,
            value,
        } => match section {
            Section::Education => update_education(doc, &id, field.parse()?, &value),
            Section::Experience => update_experience(doc, &id, field.parse()?, &value),
            Section::Projects => update_project(doc, &id, field.parse()?, &value),
            Section::Certifications => update_certification(doc, &id, field.parse()?, &value),
            Section::Skills => update_skill(doc, &id, field.parse()?, &value),
            Section::Activities => update_activity(doc, &id, field.parse()?, &value),
        },
        Edit::Remove { section, id } => {
            debug!("Removing {} entry {id}", section.key());
            match section {
                Section::Education => remove_education(doc, &id),
                Section::Experience => remove_experience(doc, &id),
                Section::Projects => remove_project(doc, &id),
                Section::Certifications => remove_certification(doc, &id),
                Section::Skills => remove_skill(doc, &id),
                Section::Activities => remove_activity(doc, &id),
            }
        }
    };
    Ok(next)
}
