use std::sync::Arc;

use crate::modules::profile::application::domain::entities::{Skill, SocialLink, TechStack, User};
use crate::shared::store::{ListStore, StateCell};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Client-side copy of the profile: the user record plus the three
/// profile collections, each editable on its own.
pub struct UserStore {
    user: StateCell<UserState>,
    social_links: ListStore<SocialLink>,
    tech_stack: ListStore<TechStack>,
    skills: ListStore<Skill>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            user: StateCell::new("user-store", UserState::default()),
            social_links: ListStore::new("user-store/social-links"),
            tech_stack: ListStore::new("user-store/tech-stack"),
            skills: ListStore::new("user-store/skills"),
        }
    }

    pub fn state(&self) -> Arc<UserState> {
        self.user.get()
    }

    pub fn user(&self) -> Option<User> {
        self.user.get().user.clone()
    }

    pub fn set_user(&self, user: Option<User>) {
        self.user
            .update("setUser", |s| Some(UserState { user, ..s.clone() }));
    }

    pub fn social_links(&self) -> &ListStore<SocialLink> {
        &self.social_links
    }

    pub fn tech_stack(&self) -> &ListStore<TechStack> {
        &self.tech_stack
    }

    pub fn skills(&self) -> &ListStore<Skill> {
        &self.skills
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.user.update("setLoading", |s| {
            Some(UserState {
                is_loading,
                ..s.clone()
            })
        });
    }

    pub fn set_error(&self, error: Option<String>) {
        self.user
            .update("setError", |s| Some(UserState { error, ..s.clone() }));
    }

    pub fn clear_error(&self) {
        self.set_error(None);
    }

    pub fn reset(&self) {
        self.user.replace("reset", UserState::default());
        self.social_links.reset();
        self.tech_stack.reset();
        self.skills.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PortfolioFixtures;

    fn loaded() -> UserStore {
        let fixtures = PortfolioFixtures::load().unwrap();
        let store = UserStore::new();
        store.set_user(Some(fixtures.user));
        store.social_links().set_items(fixtures.social_links);
        store.skills().set_items(fixtures.skills);
        store
    }

    #[test]
    fn removing_a_social_link() {
        let store = loaded();
        let before = store.social_links().items().len();

        assert!(store.social_links().remove_item("social-2"));

        assert_eq!(store.social_links().items().len(), before - 1);
        assert!(store.social_links().by_id("social-2").is_none());
    }

    #[test]
    fn reorder_takes_the_new_list() {
        let store = loaded();
        let mut reversed = store.skills().items();
        reversed.reverse();
        let expected: Vec<String> = reversed.iter().map(|s| s.id.clone()).collect();

        store.skills().reorder(reversed);

        let ids: Vec<String> = store.skills().items().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn reset_clears_user_and_collections() {
        let store = loaded();
        store.set_error(Some("Failed to update profile".to_string()));

        store.reset();

        assert!(store.user().is_none());
        assert!(store.state().error.is_none());
        assert!(store.social_links().items().is_empty());
        assert!(store.skills().items().is_empty());
    }
}
