use super::resume::{Document, EducationEntry, PersonalInfo, SkillGroup, TimelineEntry};

/// The example résumé shown before anything is saved, and the data behind
/// the template thumbnails on the selection screen.
pub fn default_document() -> Document {
    Document {
        personal_info: PersonalInfo {
            full_name: "Aaron Towers".to_string(),
            job_title: "Finance Graduate".to_string(),
            email: "aaron@atowers.com".to_string(),
            phone: "07777777777".to_string(),
            address: "Manchester, UK".to_string(),
            city_state_zip: "Manchester, UK".to_string(),
            linkedin: "linkedin.com/in/aaron".to_string(),
            website: String::new(),
            summary: "A passionate Finance and Accounting Student with excellent academic and \
                      professional experience who enjoys working in a commercial environment..."
                .to_string(),
            photo_url: "https://picsum.photos/200/200".to_string(),
        },
        education: vec![EducationEntry {
            id: "1".into(),
            school: "Preston University".to_string(),
            degree: "BSc (Hons) Finance and Accounting".to_string(),
            city: "Preston".to_string(),
            country: "UK".to_string(),
            start_date: "Sep 2016".to_string(),
            end_date: "2021".to_string(),
            description:
                "Modules include: Finance, Micro & Macro Economics, Advanced Financial Law."
                    .to_string(),
        }],
        experience: vec![TimelineEntry {
            id: "1".into(),
            company: "ABCD Accounting".to_string(),
            position: "Finance Assistant".to_string(),
            city: "Manchester".to_string(),
            state: "UK".to_string(),
            start_date: "Dec 2019".to_string(),
            end_date: "Present".to_string(),
            description: "Reporting to Finance Manager.\n\
                          Processing purchase ledger transactions.\n\
                          Supporting with bank reconciliations."
                .to_string(),
        }],
        projects: Vec::new(),
        certifications: Vec::new(),
        skills: vec![
            SkillGroup {
                id: "1".into(),
                category: "Technical".to_string(),
                items: "Advanced MS Excel, SAP, Xero".to_string(),
            },
            SkillGroup {
                id: "2".into(),
                category: "Professional".to_string(),
                items: "Financial Regulations, Statistics".to_string(),
            },
        ],
        activities: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_populated() {
        let doc = default_document();
        assert_eq!(doc.personal_info.full_name, "Aaron Towers");
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.skills.len(), 2);
        assert!(doc.projects.is_empty());
        assert!(doc.certifications.is_empty());
        assert!(doc.activities.is_empty());
    }

    #[test]
    fn test_seeded_experience_has_three_lines() {
        let doc = default_document();
        assert_eq!(doc.experience[0].description.lines().count(), 3);
        assert!(doc.experience[0]
            .description
            .starts_with("Reporting to Finance Manager.\nProcessing"));
    }

    #[test]
    fn test_default_document_survives_json() {
        let doc = default_document();
        let raw = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, doc);
    }
}
