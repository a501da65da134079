use crate::modules::memory::application::domain::entities::{Memory, Mood};
use crate::shared::store::listing::with_updated;
use crate::shared::store::{DerivedViews, ListStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryViews {
    pub visible: Vec<Memory>,
    /// Featured and visible.
    pub featured: Vec<Memory>,
}

impl DerivedViews<Memory> for MemoryViews {
    fn derive(items: &[Memory]) -> Self {
        Self {
            visible: items.iter().filter(|m| m.is_visible).cloned().collect(),
            featured: items
                .iter()
                .filter(|m| m.is_featured && m.is_visible)
                .cloned()
                .collect(),
        }
    }
}

pub type MemoryStore = ListStore<Memory, MemoryViews>;

impl MemoryStore {
    pub fn featured(&self) -> Vec<Memory> {
        self.snapshot().derived.featured.clone()
    }

    pub fn toggle_featured(&self, id: &str) -> bool {
        self.commit("toggleFeatured", |items| {
            with_updated(items, id, |m| m.is_featured = !m.is_featured)
        })
    }

    pub fn by_tag(&self, tag: &str) -> Vec<Memory> {
        self.filter_items(|m| m.has_tag(tag))
    }

    pub fn by_mood(&self, mood: Mood) -> Vec<Memory> {
        self.filter_items(|m| m.mood == Some(mood))
    }
}
