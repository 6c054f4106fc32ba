//! Modern Professional layout: a sidebar (photo, contact details, core
//! skills) beside a main column.
//!
//! Date ranges use a plain hyphen (`Sep 2016 - 2021`) and skill groups are
//! split on commas into one bullet per skill.

use serde::Serialize;

use crate::models::{
    CertificationEntry, Document, EducationEntry, ProjectEntry, SkillGroup, TimelineEntry,
};
use crate::render::text::{description_lines, join_present, present, project_link, safe_href};

const DATE_SEPARATOR: &str = " - ";
const TITLE_FALLBACK: &str = "Professional Title";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModernResume {
    pub avatar: Avatar,
    pub full_name: String,
    pub job_title: String,
    pub contacts: Vec<ModernContact>,
    pub skills: Vec<ModernSkillGroup>,
    pub summary: Option<String>,
    pub education: Vec<ModernEducation>,
    pub experience: Vec<ModernTimeline>,
    pub projects: Vec<ModernProject>,
    pub certifications: Vec<ModernCertification>,
    pub activities: Vec<ModernTimeline>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Avatar {
    Photo { url: String },
    /// Circular placeholder holding the first character of the name.
    Initial { letter: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Phone,
    Email,
    Address,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModernContact {
    pub kind: ContactKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModernSkillGroup {
    pub id: String,
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModernEducation {
    pub id: String,
    pub degree: String,
    /// `school | dates`
    pub subtitle: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModernTimeline {
    pub id: String,
    pub dates: String,
    /// `company, city`
    pub organization: String,
    pub position: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModernProject {
    pub id: String,
    pub name: String,
    pub technologies: String,
    pub link: Option<String>,
    pub href: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModernCertification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: Option<String>,
    /// Shown verbatim; `href` is only set for web links.
    pub link: Option<String>,
    pub href: Option<String>,
}

/// Lays out `doc` in the Modern style.
pub fn render(doc: &Document) -> ModernResume {
    let info = &doc.personal_info;

    let avatar = match present(&info.photo_url) {
        Some(url) => Avatar::Photo { url },
        None => Avatar::Initial {
            letter: info
                .full_name
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_else(|| " ".to_string()),
        },
    };

    let contacts = [
        (ContactKind::Phone, &info.phone),
        (ContactKind::Email, &info.email),
        (ContactKind::Address, &info.address),
        (ContactKind::Linkedin, &info.linkedin),
        (ContactKind::Website, &info.website),
    ]
    .into_iter()
    .filter_map(|(kind, value)| present(value).map(|text| ModernContact { kind, text }))
    .collect();

    ModernResume {
        avatar,
        full_name: info.full_name.clone(),
        job_title: present(&info.job_title).unwrap_or_else(|| TITLE_FALLBACK.to_string()),
        contacts,
        skills: doc.skills.iter().map(skill_group).collect(),
        summary: present(&info.summary),
        education: doc.education.iter().map(education).collect(),
        experience: doc.experience.iter().map(timeline).collect(),
        projects: doc.projects.iter().map(project).collect(),
        certifications: doc.certifications.iter().map(certification).collect(),
        activities: doc.activities.iter().map(timeline).collect(),
    }
}

fn skill_group(group: &SkillGroup) -> ModernSkillGroup {
    ModernSkillGroup {
        id: group.id.to_string(),
        category: group.category.clone(),
        items: group
            .items
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn dates(start: &str, end: &str) -> String {
    join_present(&[start, end], DATE_SEPARATOR)
}

fn education(entry: &EducationEntry) -> ModernEducation {
    let dates = dates(&entry.start_date, &entry.end_date);
    ModernEducation {
        id: entry.id.to_string(),
        degree: entry.degree.clone(),
        subtitle: join_present(&[entry.school.as_str(), dates.as_str()], " | "),
        lines: description_lines(&entry.description),
    }
}

fn timeline(entry: &TimelineEntry) -> ModernTimeline {
    ModernTimeline {
        id: entry.id.to_string(),
        dates: dates(&entry.start_date, &entry.end_date),
        organization: join_present(&[entry.company.as_str(), entry.city.as_str()], ", "),
        position: entry.position.clone(),
        bullets: description_lines(&entry.description),
    }
}

fn project(entry: &ProjectEntry) -> ModernProject {
    let link = project_link(&entry.link);
    ModernProject {
        id: entry.id.to_string(),
        name: entry.name.clone(),
        technologies: entry.technologies.clone(),
        href: link.as_deref().and_then(safe_href),
        link,
        description: entry.description.clone(),
    }
}

fn certification(entry: &CertificationEntry) -> ModernCertification {
    ModernCertification {
        id: entry.id.to_string(),
        name: entry.name.clone(),
        issuer: entry.issuer.clone(),
        date: present(&entry.date),
        link: present(&entry.link),
        href: safe_href(&entry.link),
    }
}
