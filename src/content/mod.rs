//! Content store
//!
//! Single source of truth for the editable portfolio collections. Display
//! sections read from it, the admin panel writes through it, and every write
//! re-persists the touched collection so the on-disk copy stays in sync.

pub mod defaults;

use crate::storage::content::{
    clear_collections, load_collection, save_collection, PROJECTS_KEY, SERVICES_KEY, SKILLS_KEY,
    TESTIMONIALS_KEY, VENTURES_KEY,
};
use crate::types::content::{
    Project, ProjectDraft, ProjectPatch, Service, ServicePatch, SkillPatch, SkillRating,
    Testimonial, TestimonialPatch, Venture,
};
use serde::Serialize;
use std::path::PathBuf;

/// Owns the five editable collections for the lifetime of the session.
///
/// Constructed once at startup and shared through the app context; consumers
/// get read-only slices and route every change through the mutators below.
/// Mutators never fail visibly: a miss is a no-op and a persistence error is
/// logged and swallowed, with the in-memory state staying authoritative.
pub struct ContentStore {
    dir: Option<PathBuf>,
    projects: Vec<Project>,
    ventures: Vec<Venture>,
    services: Vec<Service>,
    testimonials: Vec<Testimonial>,
    skills: Vec<SkillRating>,
}

impl ContentStore {
    /// Open the store backed by `dir`, seeding each collection from its
    /// persisted file or from the built-in defaults. Never errors: a corrupt
    /// or unreadable file falls back to that collection's defaults alone.
    pub fn open(dir: PathBuf) -> Self {
        Self {
            projects: load_collection(&dir, PROJECTS_KEY).unwrap_or_else(defaults::projects),
            ventures: load_collection(&dir, VENTURES_KEY).unwrap_or_else(defaults::ventures),
            services: load_collection(&dir, SERVICES_KEY).unwrap_or_else(defaults::services),
            testimonials: load_collection(&dir, TESTIMONIALS_KEY)
                .unwrap_or_else(defaults::testimonials),
            skills: load_collection(&dir, SKILLS_KEY).unwrap_or_else(defaults::skills),
            dir: Some(dir),
        }
    }

    /// A store that never touches disk. Used when the platform data
    /// directory cannot be resolved; edits last for the session only.
    pub fn in_memory() -> Self {
        Self {
            dir: None,
            projects: defaults::projects(),
            ventures: defaults::ventures(),
            services: defaults::services(),
            testimonials: defaults::testimonials(),
            skills: defaults::skills(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn ventures(&self) -> &[Venture] {
        &self.ventures
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn skills(&self) -> &[SkillRating] {
        &self.skills
    }

    /// Merge `patch` into the project with `id`. No-op when absent.
    pub fn update_project(&mut self, id: u32, patch: ProjectPatch) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return;
        };
        patch.apply(project);
        self.persist(PROJECTS_KEY, &self.projects);
    }

    /// Append a new project, assigning it one more than the highest existing
    /// id (1 when the collection is empty). Returns the assigned id.
    pub fn add_project(&mut self, draft: ProjectDraft) -> u32 {
        let id = self.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.projects.push(draft.into_project(id));
        self.persist(PROJECTS_KEY, &self.projects);
        id
    }

    /// Remove the project with `id`. No-op when absent.
    pub fn delete_project(&mut self, id: u32) {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() != before {
            self.persist(PROJECTS_KEY, &self.projects);
        }
    }

    /// Merge `patch` into the service at `index`. Out of range is a no-op.
    pub fn update_service(&mut self, index: usize, patch: ServicePatch) {
        let Some(service) = self.services.get_mut(index) else {
            return;
        };
        patch.apply(service);
        self.persist(SERVICES_KEY, &self.services);
    }

    /// Merge `patch` into the testimonial at `index`. Out of range is a no-op.
    pub fn update_testimonial(&mut self, index: usize, patch: TestimonialPatch) {
        let Some(testimonial) = self.testimonials.get_mut(index) else {
            return;
        };
        patch.apply(testimonial);
        self.persist(TESTIMONIALS_KEY, &self.testimonials);
    }

    /// Merge `patch` into the skill at `index`. Out of range is a no-op.
    /// The level is stored verbatim; the 0-100 range is a display convention.
    pub fn update_skill(&mut self, index: usize, patch: SkillPatch) {
        let Some(skill) = self.skills.get_mut(index) else {
            return;
        };
        patch.apply(skill);
        self.persist(SKILLS_KEY, &self.skills);
    }

    /// Replace every collection with the built-in defaults and delete all
    /// persisted files. Confirmation happens at the UI boundary, not here.
    pub fn reset_to_defaults(&mut self) {
        self.projects = defaults::projects();
        self.ventures = defaults::ventures();
        self.services = defaults::services();
        self.testimonials = defaults::testimonials();
        self.skills = defaults::skills();

        if let Some(dir) = &self.dir {
            if let Err(e) = clear_collections(dir) {
                tracing::error!("failed to clear persisted content: {e}");
            }
        }
        tracing::info!("content restored to built-in defaults");
    }

    fn persist<T: Serialize>(&self, key: &str, items: &[T]) {
        let Some(dir) = &self.dir else {
            return;
        };
        if let Err(e) = save_collection(dir, key, items) {
            tracing::error!("failed to persist {key} collection: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.into(),
            description: "Description pending...".into(),
            tags: vec!["New".into()],
            image_url: "https://picsum.photos/600/400".into(),
            link: "#".into(),
            category: "General".into(),
            ..Default::default()
        }
    }

    fn key_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }

    #[test]
    fn test_update_project_changes_only_patched_fields() {
        let mut store = ContentStore::in_memory();
        let original = store.projects()[0].clone();

        store.update_project(
            original.id,
            ProjectPatch {
                title: Some("Rewritten".into()),
                ..Default::default()
            },
        );

        let updated = &store.projects()[0];
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, "Rewritten");
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.tags, original.tags);
        assert_eq!(updated.category, original.category);
    }

    #[test]
    fn test_update_missing_project_is_noop() {
        let mut store = ContentStore::in_memory();
        let snapshot = store.projects().to_vec();

        store.update_project(
            9999,
            ProjectPatch {
                title: Some("Ghost".into()),
                ..Default::default()
            },
        );

        assert_eq!(store.projects(), snapshot.as_slice());
    }

    #[test]
    fn test_add_project_ids_are_strictly_increasing() {
        let mut store = ContentStore::in_memory();
        let mut seen: Vec<u32> = store.projects().iter().map(|p| p.id).collect();

        for i in 0..5 {
            let id = store.add_project(draft(&format!("P{i}")));
            assert!(seen.iter().all(|&prev| id > prev), "id {id} not above {seen:?}");
            seen.push(id);
        }
    }

    #[test]
    fn test_add_project_to_empty_collection_gets_id_one() {
        let mut store = ContentStore::in_memory();
        for id in store.projects().iter().map(|p| p.id).collect::<Vec<_>>() {
            store.delete_project(id);
        }
        assert!(store.projects().is_empty());

        let id = store.add_project(draft("First"));
        assert_eq!(id, 1);
        assert_eq!(store.projects()[0].id, 1);
    }

    #[test]
    fn test_add_project_fills_past_gaps_from_max() {
        let mut store = ContentStore::in_memory();
        for id in store.projects().iter().map(|p| p.id).collect::<Vec<_>>() {
            store.delete_project(id);
        }
        for _ in 0..4 {
            store.add_project(draft("seed"));
        }
        // Leave ids [1, 3, 4].
        store.delete_project(2);

        let id = store.add_project(draft("next"));
        assert_eq!(id, 5);
    }

    #[test]
    fn test_delete_then_update_same_id_is_noop() {
        let mut store = ContentStore::in_memory();
        let id = store.projects()[0].id;
        let remaining = store.projects().len() - 1;

        store.delete_project(id);
        store.update_project(
            id,
            ProjectPatch {
                title: Some("Back from the dead".into()),
                ..Default::default()
            },
        );

        assert_eq!(store.projects().len(), remaining);
        assert!(store.projects().iter().all(|p| p.id != id));
    }

    #[test]
    fn test_positional_updates_out_of_range_are_noops() {
        let mut store = ContentStore::in_memory();
        let services = store.services().to_vec();
        let testimonials = store.testimonials().to_vec();
        let skills = store.skills().to_vec();

        store.update_service(
            services.len(),
            ServicePatch {
                title: Some("x".into()),
                ..Default::default()
            },
        );
        store.update_testimonial(
            testimonials.len(),
            TestimonialPatch {
                name: Some("x".into()),
                ..Default::default()
            },
        );
        store.update_skill(
            skills.len(),
            SkillPatch {
                level: Some(1),
                ..Default::default()
            },
        );

        assert_eq!(store.services(), services.as_slice());
        assert_eq!(store.testimonials(), testimonials.as_slice());
        assert_eq!(store.skills(), skills.as_slice());
    }

    #[test]
    fn test_update_skill_stores_out_of_range_level_verbatim() {
        let mut store = ContentStore::in_memory();

        store.update_skill(
            0,
            SkillPatch {
                level: Some(150),
                ..Default::default()
            },
        );

        assert_eq!(store.skills()[0].level, 150);
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();

        let new_id = {
            let mut store = ContentStore::open(dir.clone());
            store.update_testimonial(
                0,
                TestimonialPatch {
                    text: Some("Edited quote".into()),
                    ..Default::default()
                },
            );
            store.add_project(draft("Persisted"))
        };

        let reopened = ContentStore::open(dir);
        assert_eq!(reopened.testimonials()[0].text, "Edited quote");
        assert!(reopened.projects().iter().any(|p| p.id == new_id));
    }

    #[test]
    fn test_corrupt_collection_falls_back_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();

        {
            let mut store = ContentStore::open(dir.clone());
            store.update_service(
                0,
                ServicePatch {
                    title: Some("Custom Service".into()),
                    ..Default::default()
                },
            );
            store.update_skill(
                0,
                SkillPatch {
                    level: Some(1),
                    ..Default::default()
                },
            );
        }
        fs::write(key_path(&dir, SKILLS_KEY), "corrupted!!").unwrap();

        let reopened = ContentStore::open(dir);
        // Skills reverted to defaults, services kept the edit.
        assert_eq!(reopened.skills(), defaults::skills().as_slice());
        assert_eq!(reopened.services()[0].title, "Custom Service");
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();

        let mut store = ContentStore::open(dir.clone());
        store.add_project(draft("Doomed"));
        store.update_skill(
            0,
            SkillPatch {
                level: Some(5),
                ..Default::default()
            },
        );

        store.reset_to_defaults();

        assert_eq!(store.projects(), defaults::projects().as_slice());
        assert_eq!(store.ventures(), defaults::ventures().as_slice());
        assert_eq!(store.services(), defaults::services().as_slice());
        assert_eq!(store.testimonials(), defaults::testimonials().as_slice());
        assert_eq!(store.skills(), defaults::skills().as_slice());
        for key in crate::storage::content::COLLECTION_KEYS {
            assert!(!key_path(&dir, key).exists(), "{key} not cleared");
        }
    }
}
