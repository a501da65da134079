use crate::modules::education::application::domain::entities::Education;
use crate::shared::store::listing::find_by_id;
use crate::shared::store::{DerivedViews, ListStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationViews {
    pub visible: Vec<Education>,
    pub current_study: Option<Education>,
}

impl DerivedViews<Education> for EducationViews {
    fn derive(items: &[Education]) -> Self {
        Self {
            visible: items.iter().filter(|e| e.is_visible).cloned().collect(),
            current_study: items.iter().find(|e| e.is_current_study).cloned(),
        }
    }
}

pub type EducationStore = ListStore<Education, EducationViews>;

impl EducationStore {
    pub fn current_study(&self) -> Option<Education> {
        self.snapshot().derived.current_study.clone()
    }

    /// Flags `id` as the current study and clears every other flag.
    pub fn set_current_study(&self, id: &str) -> bool {
        self.commit("setCurrentStudy", |items| {
            find_by_id(items, id)?;
            Some(
                items
                    .iter()
                    .cloned()
                    .map(|mut e| {
                        e.is_current_study = e.id == id;
                        e
                    })
                    .collect(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::education::application::domain::entities::test_data::education;

    #[test]
    fn set_current_study_moves_the_flag() {
        let store = EducationStore::new("education-store");
        store.set_items(vec![
            education("a", 1, true),
            education("b", 2, false),
            education("c", 3, true),
        ]);

        assert!(store.set_current_study("b"));

        let flagged: Vec<String> = store
            .items()
            .into_iter()
            .filter(|e| e.is_current_study)
            .map(|e| e.id)
            .collect();
        assert_eq!(flagged, vec!["b"]);
        assert_eq!(store.current_study().map(|e| e.order), Some(2));
    }

    #[test]
    fn visible_view_tracks_toggles() {
        let store = EducationStore::new("education-store");
        store.set_items(vec![education("a", 1, false), education("b", 2, false)]);

        store.toggle_visibility("a");
        assert_eq!(store.derived().visible.len(), 1);
        store.toggle_visibility("a");
        assert_eq!(store.derived().visible.len(), 2);
    }
}
