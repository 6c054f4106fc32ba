pub mod resume;
pub mod seed;

pub use resume::{
    CertificationEntry, Document, EducationEntry, EntryId, PersonalInfo, ProjectEntry,
    SkillGroup, TimelineEntry,
};
pub use seed::default_document;
