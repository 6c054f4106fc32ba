//! Classic Harvard layout: single column, serif, text first.
//!
//! Date ranges use an en dash (`Sep 2016 – 2021`) and skill groups stay as
//! the inline string the user typed.

use serde::Serialize;

use crate::models::{
    CertificationEntry, Document, EducationEntry, ProjectEntry, SkillGroup, TimelineEntry,
};
use crate::render::text::{description_lines, join_present, present, project_link, safe_href};

const DATE_SEPARATOR: &str = " – ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassicResume {
    pub full_name: String,
    /// Header row, joined with `|` when rendered.
    pub contact: Vec<ContactItem>,
    pub education: Vec<ClassicEducation>,
    pub projects: Vec<ClassicProject>,
    pub experience: Vec<ClassicTimeline>,
    pub certifications: Vec<ClassicCertification>,
    pub activities: Vec<ClassicTimeline>,
    pub skills: Vec<ClassicSkill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub text: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassicEducation {
    pub id: String,
    pub school: String,
    pub location: String,
    pub degree: String,
    pub dates: String,
    /// One paragraph line each.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassicProject {
    pub id: String,
    pub name: String,
    pub link: Option<String>,
    pub href: Option<String>,
    pub technologies: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassicTimeline {
    pub id: String,
    pub organization: String,
    pub location: String,
    pub role: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassicCertification {
    pub id: String,
    pub name: String,
    /// Shown verbatim; `href` is only set for web links.
    pub link: Option<String>,
    pub href: Option<String>,
    pub date: Option<String>,
    pub issued_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassicSkill {
    pub id: String,
    pub category: String,
    pub items: String,
}

/// Lays out `doc` in the Classic style.
pub fn render(doc: &Document) -> ClassicResume {
    let info = &doc.personal_info;

    let mut contact = Vec::new();
    for text in [&info.address, &info.city_state_zip] {
        if let Some(text) = present(text) {
            contact.push(ContactItem { text, href: None });
        }
    }
    if let Some(email) = present(&info.email) {
        contact.push(ContactItem {
            href: Some(format!("mailto:{email}")),
            text: email,
        });
    }
    if let Some(phone) = present(&info.phone) {
        contact.push(ContactItem {
            text: phone,
            href: None,
        });
    }

    ClassicResume {
        full_name: info.full_name.clone(),
        contact,
        education: doc.education.iter().map(education).collect(),
        projects: doc.projects.iter().map(project).collect(),
        experience: doc.experience.iter().map(timeline).collect(),
        certifications: doc.certifications.iter().map(certification).collect(),
        activities: doc.activities.iter().map(timeline).collect(),
        skills: doc.skills.iter().map(skill).collect(),
    }
}

fn education(entry: &EducationEntry) -> ClassicEducation {
    ClassicEducation {
        id: entry.id.to_string(),
        school: entry.school.clone(),
        location: join_present(&[entry.city.as_str(), entry.country.as_str()], ", "),
        degree: entry.degree.clone(),
        dates: join_present(&[entry.start_date.as_str(), entry.end_date.as_str()], DATE_SEPARATOR),
        lines: description_lines(&entry.description),
    }
}

fn project(entry: &ProjectEntry) -> ClassicProject {
    let link = project_link(&entry.link);
    ClassicProject {
        id: entry.id.to_string(),
        name: entry.name.clone(),
        href: link.as_deref().and_then(safe_href),
        link,
        technologies: entry.technologies.clone(),
        description: entry.description.clone(),
    }
}

fn timeline(entry: &TimelineEntry) -> ClassicTimeline {
    ClassicTimeline {
        id: entry.id.to_string(),
        organization: entry.company.clone(),
        location: join_present(&[entry.city.as_str(), entry.state.as_str()], ", "),
        role: entry.position.clone(),
        dates: join_present(&[entry.start_date.as_str(), entry.end_date.as_str()], DATE_SEPARATOR),
        bullets: description_lines(&entry.description),
    }
}

fn certification(entry: &CertificationEntry) -> ClassicCertification {
    ClassicCertification {
        id: entry.id.to_string(),
        name: entry.name.clone(),
        link: present(&entry.link),
        href: safe_href(&entry.link),
        date: present(&entry.date),
        issued_by: present(&entry.issuer).map(|issuer| format!("Issued by {issuer}")),
    }
}

fn skill(group: &SkillGroup) -> ClassicSkill {
    ClassicSkill {
        id: group.id.to_string(),
        category: group.category.clone(),
        items: group.items.clone(),
    }
}
