//! Editable portfolio content types
//!
//! Plain data records owned by the content store. Projects and ventures carry
//! a numeric id; services, testimonials and skills are addressed by position.

use serde::{Deserialize, Serialize};

/// A portfolio project, optionally extended with case-study fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique within the collection, assigned by the store on creation.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: String,
    /// External link; may be a placeholder like "#".
    pub link: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

/// Everything a [`Project`] holds except its id. The store assigns the id.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub link: String,
    pub category: String,
    pub client: Option<String>,
    pub year: Option<String>,
    pub role: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
}

impl ProjectDraft {
    pub fn into_project(self, id: u32) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            image_url: self.image_url,
            link: self.link,
            category: self.category,
            client: self.client,
            year: self.year,
            role: self.role,
            challenge: self.challenge,
            solution: self.solution,
        }
    }
}

/// Partial update for a [`Project`]; only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub client: Option<String>,
    pub year: Option<String>,
    pub role: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
}

impl ProjectPatch {
    pub fn apply(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(tags) = self.tags {
            project.tags = tags;
        }
        if let Some(image_url) = self.image_url {
            project.image_url = image_url;
        }
        if let Some(link) = self.link {
            project.link = link;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(client) = self.client {
            project.client = Some(client);
        }
        if let Some(year) = self.year {
            project.year = Some(year);
        }
        if let Some(role) = self.role {
            project.role = Some(role);
        }
        if let Some(challenge) = self.challenge {
            project.challenge = Some(challenge);
        }
        if let Some(solution) = self.solution {
            project.solution = Some(solution);
        }
    }
}

/// One labelled metric shown on a venture card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentureStat {
    pub label: String,
    pub value: String,
}

/// Contact details for a venture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentureContact {
    pub email: String,
    pub location: String,
    pub handle: String,
}

/// A company or initiative in the ventures section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venture {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub description: String,
    pub long_description: String,
    pub logo_url: String,
    pub cover_url: String,
    pub website: String,
    /// Free-form label, e.g. "Active", "Acquired", "Scaling".
    pub status: String,
    pub stats: Vec<VentureStat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<VentureContact>,
}

/// A service offering. `icon` is a key resolved by the UI icon registry;
/// the store never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl ServicePatch {
    pub fn apply(self, service: &mut Service) {
        if let Some(title) = self.title {
            service.title = title;
        }
        if let Some(description) = self.description {
            service.description = description;
        }
        if let Some(icon) = self.icon {
            service.icon = icon;
        }
    }
}

/// A client quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub text: Option<String>,
}

impl TestimonialPatch {
    pub fn apply(self, testimonial: &mut Testimonial) {
        if let Some(name) = self.name {
            testimonial.name = name;
        }
        if let Some(role) = self.role {
            testimonial.role = role;
        }
        if let Some(text) = self.text {
            testimonial.text = text;
        }
    }
}

/// A proficiency rating. `level` is stored verbatim; scaling against
/// `full_mark` (and any clamping) happens at the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    pub subject: String,
    pub level: u32,
    pub full_mark: u32,
}

#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub subject: Option<String>,
    pub level: Option<u32>,
    pub full_mark: Option<u32>,
}

impl SkillPatch {
    pub fn apply(self, skill: &mut SkillRating) {
        if let Some(subject) = self.subject {
            skill.subject = subject;
        }
        if let Some(level) = self.level {
            skill.level = level;
        }
        if let Some(full_mark) = self.full_mark {
            skill.full_mark = full_mark;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        ProjectDraft {
            title: "Test".into(),
            description: "A test project".into(),
            tags: vec!["Rust".into()],
            image_url: "https://example.com/a.png".into(),
            link: "#".into(),
            category: "Tools".into(),
            client: Some("Acme".into()),
            ..Default::default()
        }
        .into_project(7)
    }

    #[test]
    fn test_draft_keeps_assigned_id() {
        let project = sample_project();
        assert_eq!(project.id, 7);
        assert_eq!(project.client.as_deref(), Some("Acme"));
        assert!(project.year.is_none());
    }

    #[test]
    fn test_project_patch_touches_only_some_fields() {
        let mut project = sample_project();
        ProjectPatch {
            title: Some("Renamed".into()),
            year: Some("2025".into()),
            ..Default::default()
        }
        .apply(&mut project);

        assert_eq!(project.id, 7);
        assert_eq!(project.title, "Renamed");
        assert_eq!(project.year.as_deref(), Some("2025"));
        // Untouched fields survive.
        assert_eq!(project.description, "A test project");
        assert_eq!(project.tags, vec!["Rust".to_string()]);
        assert_eq!(project.client.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_skill_patch_accepts_any_level() {
        let mut skill = SkillRating {
            subject: "Strategy".into(),
            level: 88,
            full_mark: 100,
        };
        SkillPatch {
            level: Some(150),
            ..Default::default()
        }
        .apply(&mut skill);
        assert_eq!(skill.level, 150);
        assert_eq!(skill.subject, "Strategy");
    }

    #[test]
    fn test_project_optional_fields_roundtrip() {
        let project = sample_project();
        let json = serde_json::to_string(&project).unwrap();
        // Absent optionals are omitted from the serialized form.
        assert!(!json.contains("\"year\""));
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, back);
    }
}
