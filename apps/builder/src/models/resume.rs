//! Résumé document model.
//!
//! The JSON layout (camelCase keys) is the persisted blob layout, so renaming
//! a field here is a storage format change.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::form::ids::IdSource;

/// Opaque identifier of a list entry, unique within its list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    // Optional: empty means "not set".
    pub job_title: String,
    pub city_state_zip: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub city: String,
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    /// Newline-delimited; rendered as paragraph lines, never bullets.
    pub description: String,
}

/// Shape shared by `experience` and `activities`. Which list an entry lives
/// in is the only thing that tells the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub city: String,
    pub state: String,
    pub start_date: String,
    pub end_date: String,
    /// Newline-delimited; each non-blank line is one bullet.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: EntryId,
    pub name: String,
    pub technologies: String,
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub id: EntryId,
    pub name: String,
    pub issuer: String,
    pub link: String,
    /// Free text, not a structured date.
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillGroup {
    pub id: EntryId,
    pub category: String,
    /// Comma-separated free text.
    pub items: String,
}

/// The complete résumé. Treated as an immutable value: edits build a new
/// `Document` instead of mutating the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<TimelineEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certifications: Vec<CertificationEntry>,
    pub skills: Vec<SkillGroup>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub activities: Vec<TimelineEntry>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Document {
    /// Gives a fresh id to every entry whose id is empty or already used
    /// earlier in the same list. Returns how many ids were replaced.
    pub fn repair_ids(&mut self, ids: &dyn IdSource) -> usize {
        repair_list(&mut self.education, |e| &mut e.id, ids)
            + repair_list(&mut self.experience, |e| &mut e.id, ids)
            + repair_list(&mut self.projects, |e| &mut e.id, ids)
            + repair_list(&mut self.certifications, |e| &mut e.id, ids)
            + repair_list(&mut self.skills, |e| &mut e.id, ids)
            + repair_list(&mut self.activities, |e| &mut e.id, ids)
    }
}

fn repair_list<T>(
    list: &mut [T],
    id_of: impl Fn(&mut T) -> &mut EntryId,
    ids: &dyn IdSource,
) -> usize {
    let mut seen = HashSet::new();
    let mut repaired = 0;
    for entry in list.iter_mut() {
        let id = id_of(entry);
        if id.is_empty() || seen.contains(&*id) {
            *id = ids.next_id();
            repaired += 1;
        }
        seen.insert(id.clone());
    }
    repaired
}
