use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::shared::store::listing::with_updated;
use crate::shared::store::{DerivedViews, ListStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectViews {
    pub visible: Vec<Project>,
    /// Featured and visible.
    pub featured: Vec<Project>,
}

impl DerivedViews<Project> for ProjectViews {
    fn derive(items: &[Project]) -> Self {
        Self {
            visible: items.iter().filter(|p| p.is_visible).cloned().collect(),
            featured: items
                .iter()
                .filter(|p| p.featured && p.is_visible)
                .cloned()
                .collect(),
        }
    }
}

pub type ProjectStore = ListStore<Project, ProjectViews>;

impl ProjectStore {
    pub fn featured(&self) -> Vec<Project> {
        self.snapshot().derived.featured.clone()
    }

    pub fn toggle_featured(&self, id: &str) -> bool {
        self.commit("toggleFeatured", |items| {
            with_updated(items, id, |p| p.featured = !p.featured)
        })
    }

    pub fn by_technology(&self, technology: &str) -> Vec<Project> {
        self.filter_items(|p| p.uses_technology(technology))
    }

    pub fn by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.filter_items(|p| p.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::test_data::project;
    use crate::shared::store::FilterOptions;

    fn seeded() -> ProjectStore {
        let store = ProjectStore::new("project-store");
        store.set_items(vec![
            project("p1", 1, true, ProjectStatus::Completed),
            project("p2", 2, false, ProjectStatus::InProgress),
            project("p3", 3, true, ProjectStatus::Completed),
        ]);
        store
    }

    #[test]
    fn featured_filter_keeps_relative_order() {
        let store = seeded();

        store.set_filters(FilterOptions {
            featured: Some(true),
            ..Default::default()
        });

        let orders: Vec<i32> = store.filtered().iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 3]);
    }

    #[test]
    fn featured_view_excludes_hidden() {
        let store = seeded();

        store.toggle_visibility("p3");

        let ids: Vec<String> = store.featured().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p1"]);
    }

    #[test]
    fn toggle_featured_twice_is_identity() {
        let store = seeded();
        let before = store.items();

        assert!(store.toggle_featured("p2"));
        assert_eq!(store.featured().len(), 3);
        assert!(store.toggle_featured("p2"));

        assert_eq!(store.items(), before);
        assert_eq!(store.featured().len(), 2);
    }

    #[test]
    fn toggle_on_unknown_id_changes_nothing() {
        let store = seeded();

        assert!(!store.toggle_featured("nope"));
        assert_eq!(store.featured().len(), 2);
    }

    #[test]
    fn typed_getters() {
        let store = seeded();

        assert_eq!(store.by_status(ProjectStatus::Completed).len(), 2);
        assert_eq!(store.by_technology("act").len(), 3);
        assert!(store.by_technology("haskell").is_empty());
    }

    #[test]
    fn status_filter_matches_kebab_value() {
        let store = seeded();

        store.set_filters(FilterOptions {
            status: Some("in-progress".to_string()),
            ..Default::default()
        });

        let ids: Vec<String> = store.filtered().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p2"]);
    }
}
