use crate::modules::experience::application::domain::entities::{EmploymentType, Experience};
use crate::shared::store::listing::find_by_id;
use crate::shared::store::{DerivedViews, ListStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceViews {
    pub visible: Vec<Experience>,
    pub current_job: Option<Experience>,
}

impl DerivedViews<Experience> for ExperienceViews {
    fn derive(items: &[Experience]) -> Self {
        Self {
            visible: items.iter().filter(|e| e.is_visible).cloned().collect(),
            current_job: items.iter().find(|e| e.is_current_job).cloned(),
        }
    }
}

pub type ExperienceStore = ListStore<Experience, ExperienceViews>;

impl ExperienceStore {
    pub fn current_job(&self) -> Option<Experience> {
        self.snapshot().derived.current_job.clone()
    }

    /// Marks `id` as the current job and clears the flag everywhere else.
    /// Unknown ids leave the store untouched.
    pub fn set_current_job(&self, id: &str) -> bool {
        self.commit("setCurrentJob", |items| {
            find_by_id(items, id)?;
            Some(
                items
                    .iter()
                    .cloned()
                    .map(|mut e| {
                        e.is_current_job = e.id == id;
                        e
                    })
                    .collect(),
            )
        })
    }

    pub fn by_company(&self, company: &str) -> Vec<Experience> {
        let wanted = company.to_lowercase();
        self.filter_items(|e| e.company.to_lowercase().contains(&wanted))
    }

    pub fn by_type(&self, kind: EmploymentType) -> Vec<Experience> {
        self.filter_items(|e| e.kind == kind)
    }
}
