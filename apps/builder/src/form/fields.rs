//! Section and field names accepted by the form controller.
//!
//! Field keys are the camelCase names used in the persisted JSON, so a key
//! coming from the browser addresses exactly one stored field.

use std::str::FromStr;

use crate::form::EditError;
use crate::models::{
    CertificationEntry, EducationEntry, EntryId, PersonalInfo, ProjectEntry, SkillGroup,
    TimelineEntry,
};

/// A named input of the editor form.
pub trait FormField: Copy + FromStr<Err = EditError> + 'static {
    /// All fields, in form display order.
    const ALL: &'static [Self];

    /// Wire and storage name.
    fn key(self) -> &'static str;
    fn label(self) -> &'static str;
    fn placeholder(self) -> &'static str;
    fn multiline(self) -> bool;
}

macro_rules! form_fields {
    (@multiline multiline) => { true };
    (@multiline) => { false };
    (
        $(#[$meta:meta])*
        $name:ident for $section:literal {
            $($variant:ident => ($key:literal, $label:literal, $placeholder:literal $(, $multiline:ident)?)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl FormField for $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn placeholder(self) -> &'static str {
                match self {
                    $($name::$variant => $placeholder),+
                }
            }

            fn multiline(self) -> bool {
                match self {
                    $($name::$variant => form_fields!(@multiline $($multiline)?)),+
                }
            }
        }

        impl FromStr for $name {
            type Err = EditError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err(EditError::UnknownField {
                        section: $section,
                        field: other.to_string(),
                    }),
                }
            }
        }
    };
}

form_fields! {
    PersonalField for "personal" {
        FullName => ("fullName", "Full Name", "e.g. John Doe"),
        JobTitle => ("jobTitle", "Job Title", "e.g. Software Engineer"),
        Email => ("email", "Email", "john@example.com"),
        Phone => ("phone", "Phone", "+1 234 567 890"),
        Address => ("address", "Address", "Street Address"),
        CityStateZip => ("cityStateZip", "City, State Zip (Classic Layout)", "New York, NY 10001"),
        Website => ("website", "Website / Portfolio", "www.johndoe.com"),
        Linkedin => ("linkedin", "LinkedIn", "linkedin.com/in/johndoe"),
        PhotoUrl => ("photoUrl", "Photo URL (Modern Layout)", "https://..."),
        Summary => ("summary", "Professional Summary", "Write a short professional summary...", multiline),
    }
}

form_fields! {
    EducationField for "education" {
        School => ("school", "School", "University Name"),
        Degree => ("degree", "Degree", "Bachelor of Science"),
        City => ("city", "City", "City"),
        Country => ("country", "Country", "Country"),
        StartDate => ("startDate", "Start Month / Year", "Aug 2018"),
        EndDate => ("endDate", "End Month / Year", "May 2022"),
        Description => ("description", "Description", "Additional details...", multiline),
    }
}

form_fields! {
    /// Fields of an experience or activity entry.
    TimelineField for "timeline" {
        Company => ("company", "Employer", "Company Name"),
        Position => ("position", "Job Title", "Position"),
        StartDate => ("startDate", "Start Month / Year", "MM/YYYY"),
        EndDate => ("endDate", "End Month / Year", "MM/YYYY or Present"),
        City => ("city", "Location (City)", "City"),
        State => ("state", "State / Country", "State"),
        Description => ("description", "Description", "- Accomplishment 1\n- Accomplishment 2", multiline),
    }
}

form_fields! {
    ProjectField for "projects" {
        Name => ("name", "Project Name", "My Awesome Project"),
        Technologies => ("technologies", "Technologies", "React, TypeScript, Node.js"),
        Link => ("link", "Link", "github.com/user/repo"),
        Description => ("description", "Description", "Describe what you built...", multiline),
    }
}

form_fields! {
    CertificationField for "certifications" {
        Name => ("name", "Certificate Name", "AWS Solutions Architect"),
        Issuer => ("issuer", "Issued By", "Amazon"),
        Date => ("date", "Date", "Jan 2024"),
        Link => ("link", "Link", "https://certificate-url.com"),
    }
}

form_fields! {
    SkillField for "skills" {
        Category => ("category", "Category", "e.g. Technical, Languages"),
        Items => ("items", "Skills List", "Java, Python, React, etc."),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// A list-valued part of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Education,
    Experience,
    Projects,
    Certifications,
    Skills,
    Activities,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Certifications,
        Section::Skills,
        Section::Activities,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Skills => "skills",
            Section::Activities => "activities",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects / Open Source",
            Section::Certifications => "Certifications",
            Section::Skills => "Skills",
            Section::Activities => "Leadership & Activities",
        }
    }

    pub fn add_label(self) -> &'static str {
        match self {
            Section::Education => "Add Education",
            Section::Experience => "Add Experience",
            Section::Projects => "Add Project",
            Section::Certifications => "Add Certification",
            Section::Skills => "Add Skill Group",
            Section::Activities => "Add Activity",
        }
    }

    /// Card heading used while an entry's headline field is still empty.
    pub fn untitled(self) -> &'static str {
        match self {
            Section::Education => "Education Entry",
            Section::Experience => "Experience Entry",
            Section::Projects => "Project Entry",
            Section::Certifications => "Certification Entry",
            Section::Skills => "Skill Group",
            Section::Activities => "Activity Entry",
        }
    }
}

impl FromStr for Section {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| EditError::UnknownSection(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field access
// ────────────────────────────────────────────────────────────────────────────

/// An entry in one of the list-valued sections.
pub trait SectionEntry: Clone {
    type Field: FormField;

    fn id(&self) -> &EntryId;

    /// A new entry with placeholder values for this section.
    fn blank(id: EntryId) -> Self;

    /// The field that names the entry on its form card.
    fn headline(&self) -> &str;

    fn field(&self, field: Self::Field) -> &str;

    fn field_mut(&mut self, field: Self::Field) -> &mut String;
}

impl PersonalInfo {
    pub fn field(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FullName => &self.full_name,
            PersonalField::JobTitle => &self.job_title,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Address => &self.address,
            PersonalField::CityStateZip => &self.city_state_zip,
            PersonalField::Website => &self.website,
            PersonalField::Linkedin => &self.linkedin,
            PersonalField::PhotoUrl => &self.photo_url,
            PersonalField::Summary => &self.summary,
        }
    }

    pub fn field_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::JobTitle => &mut self.job_title,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Address => &mut self.address,
            PersonalField::CityStateZip => &mut self.city_state_zip,
            PersonalField::Website => &mut self.website,
            PersonalField::Linkedin => &mut self.linkedin,
            PersonalField::PhotoUrl => &mut self.photo_url,
            PersonalField::Summary => &mut self.summary,
        }
    }
}

impl SectionEntry for EducationEntry {
    type Field = EducationField;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        EducationEntry {
            id,
            ..Default::default()
        }
    }

    fn headline(&self) -> &str {
        &self.school
    }

    fn field(&self, field: EducationField) -> &str {
        match field {
            EducationField::School => &self.school,
            EducationField::Degree => &self.degree,
            EducationField::City => &self.city,
            EducationField::Country => &self.country,
            EducationField::StartDate => &self.start_date,
            EducationField::EndDate => &self.end_date,
            EducationField::Description => &self.description,
        }
    }

    fn field_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::School => &mut self.school,
            EducationField::Degree => &mut self.degree,
            EducationField::City => &mut self.city,
            EducationField::Country => &mut self.country,
            EducationField::StartDate => &mut self.start_date,
            EducationField::EndDate => &mut self.end_date,
            EducationField::Description => &mut self.description,
        }
    }
}

impl SectionEntry for TimelineEntry {
    type Field = TimelineField;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        TimelineEntry {
            id,
            ..Default::default()
        }
    }

    fn headline(&self) -> &str {
        &self.company
    }

    fn field(&self, field: TimelineField) -> &str {
        match field {
            TimelineField::Company => &self.company,
            TimelineField::Position => &self.position,
            TimelineField::StartDate => &self.start_date,
            TimelineField::EndDate => &self.end_date,
            TimelineField::City => &self.city,
            TimelineField::State => &self.state,
            TimelineField::Description => &self.description,
        }
    }

    fn field_mut(&mut self, field: TimelineField) -> &mut String {
        match field {
            TimelineField::Company => &mut self.company,
            TimelineField::Position => &mut self.position,
            TimelineField::StartDate => &mut self.start_date,
            TimelineField::EndDate => &mut self.end_date,
            TimelineField::City => &mut self.city,
            TimelineField::State => &mut self.state,
            TimelineField::Description => &mut self.description,
        }
    }
}

impl SectionEntry for ProjectEntry {
    type Field = ProjectField;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        ProjectEntry {
            id,
            ..Default::default()
        }
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn field(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::Name => &self.name,
            ProjectField::Technologies => &self.technologies,
            ProjectField::Link => &self.link,
            ProjectField::Description => &self.description,
        }
    }

    fn field_mut(&mut self, field: ProjectField) -> &mut String {
        match field {
            ProjectField::Name => &mut self.name,
            ProjectField::Technologies => &mut self.technologies,
            ProjectField::Link => &mut self.link,
            ProjectField::Description => &mut self.description,
        }
    }
}

impl SectionEntry for CertificationEntry {
    type Field = CertificationField;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        CertificationEntry {
            id,
            ..Default::default()
        }
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn field(&self, field: CertificationField) -> &str {
        match field {
            CertificationField::Name => &self.name,
            CertificationField::Issuer => &self.issuer,
            CertificationField::Date => &self.date,
            CertificationField::Link => &self.link,
        }
    }

    fn field_mut(&mut self, field: CertificationField) -> &mut String {
        match field {
            CertificationField::Name => &mut self.name,
            CertificationField::Issuer => &mut self.issuer,
            CertificationField::Date => &mut self.date,
            CertificationField::Link => &mut self.link,
        }
    }
}

impl SectionEntry for SkillGroup {
    type Field = SkillField;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn blank(id: EntryId) -> Self {
        SkillGroup {
            id,
            category: "Category".to_string(),
            items: String::new(),
        }
    }

    fn headline(&self) -> &str {
        &self.category
    }

    fn field(&self, field: SkillField) -> &str {
        match field {
            SkillField::Category => &self.category,
            SkillField::Items => &self.items,
        }
    }

    fn field_mut(&mut self, field: SkillField) -> &mut String {
        match field {
            SkillField::Category => &mut self.category,
            SkillField::Items => &mut self.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_parse_back() {
        for field in PersonalField::ALL {
            assert_eq!(field.key().parse::<PersonalField>().unwrap(), *field);
        }
        for field in TimelineField::ALL {
            assert_eq!(field.key().parse::<TimelineField>().unwrap(), *field);
        }
        assert_eq!(
            "startDate".parse::<EducationField>().unwrap(),
            EducationField::StartDate
        );
    }

    #[test]
    fn test_id_is_not_an_editable_field() {
        let err = "id".parse::<SkillField>().unwrap_err();
        assert!(matches!(
            err,
            EditError::UnknownField { section: "skills", .. }
        ));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert_eq!("projects".parse::<Section>().unwrap(), Section::Projects);
        assert!(matches!(
            "hobbies".parse::<Section>(),
            Err(EditError::UnknownSection(name)) if name == "hobbies"
        ));
    }

    #[test]
    fn test_multiline_fields() {
        assert!(PersonalField::Summary.multiline());
        assert!(TimelineField::Description.multiline());
        assert!(!ProjectField::Link.multiline());
        assert!(!SkillField::Items.multiline());
    }

    #[test]
    fn test_blank_skill_group_has_placeholder_category() {
        let blank = SkillGroup::blank("s".into());
        assert_eq!(blank.category, "Category");
        assert_eq!(blank.items, "");
    }

    #[test]
    fn test_headline_tracks_primary_field() {
        let mut entry = ProjectEntry::blank("p".into());
        assert_eq!(entry.headline(), "");
        *entry.field_mut(ProjectField::Name) = "Ferris".to_string();
        assert_eq!(entry.headline(), "Ferris");
    }

    #[test]
    fn test_personal_field_access() {
        let mut info = PersonalInfo::default();
        *info.field_mut(PersonalField::PhotoUrl) = "https://x/y.png".to_string();
        assert_eq!(info.photo_url, "https://x/y.png");
        assert_eq!(info.field(PersonalField::PhotoUrl), "https://x/y.png");
    }
}
