//! Local mirror of the contact list and the current selection.
//!
//! Every transition is a plain method on [`ContactListState`]; nothing here
//! talks to the network.

use crate::models::{Contact, ContactInput};

/// What the details pane is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A contact already in the mirror, by id
    Saved(String),
    /// A new contact that has not been submitted yet
    Draft(ContactInput),
}

/// The client's copy of the contact collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactListState {
    contacts: Vec<Contact>,
    selected: Option<Selection>,
}

impl ContactListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    /// The selected saved contact, if the selection is one.
    pub fn selected_contact(&self) -> Option<&Contact> {
        match &self.selected {
            Some(Selection::Saved(id)) => self.find(id),
            _ => None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    /// Replace the mirror with a freshly fetched list.
    pub fn loaded(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts
            .into_iter()
            .map(Contact::with_default_phone)
            .collect();
    }

    /// Select a contact from the mirror.
    pub fn select(&mut self, id: &str) {
        self.selected = self.find(id).map(|c| Selection::Saved(c.id.clone()));
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Start a new unsaved contact and select it.
    pub fn new_contact(&mut self) {
        self.selected = Some(Selection::Draft(ContactInput::draft()));
    }

    /// Append a contact the server just created and select it.
    pub fn created(&mut self, contact: Contact) {
        self.selected = Some(Selection::Saved(contact.id.clone()));
        self.contacts.push(contact);
    }

    /// Swap in the server's copy of an updated contact and select it.
    pub fn updated(&mut self, contact: Contact) {
        if let Some(idx) = self.index_of(&contact.id) {
            self.selected = Some(Selection::Saved(contact.id.clone()));
            self.contacts[idx] = contact;
        }
    }

    /// Drop a deleted contact and clear the selection.
    pub fn deleted(&mut self, id: &str) {
        if let Some(idx) = self.index_of(id) {
            self.contacts.remove(idx);
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phone;

    fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            phone: Some(Phone::blank()),
            create_date: None,
        }
    }

    fn state_with(contacts: &[(&str, &str)]) -> ContactListState {
        let mut state = ContactListState::new();
        state.loaded(contacts.iter().map(|(id, name)| contact(id, name)).collect());
        state
    }

    #[test]
    fn test_loaded_normalizes_missing_phone() {
        let mut state = ContactListState::new();
        let mut bare = contact("1", "A");
        bare.phone = None;
        state.loaded(vec![bare]);

        assert_eq!(state.contacts()[0].phone, Some(Phone::blank()));
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_loaded_replaces_previous_mirror() {
        let mut state = state_with(&[("1", "A"), ("2", "B")]);
        state.loaded(vec![contact("3", "C")]);

        assert_eq!(state.contacts().len(), 1);
        assert_eq!(state.contacts()[0].id, "3");
    }

    #[test]
    fn test_created_appends_and_selects() {
        let mut state = state_with(&[("1", "A")]);
        state.created(contact("2", "B"));

        assert_eq!(state.contacts().len(), 2);
        assert_eq!(state.contacts()[1].id, "2");
        assert_eq!(state.selection(), Some(&Selection::Saved("2".into())));
        assert_eq!(state.selected_contact().unwrap().name, "B");
    }

    #[test]
    fn test_updated_replaces_in_place_and_selects() {
        let mut state = state_with(&[("1", "A"), ("2", "B")]);
        state.updated(contact("1", "A2"));

        assert_eq!(state.contacts()[0].name, "A2");
        assert_eq!(state.contacts()[1].name, "B");
        assert_eq!(state.selected_contact().unwrap().name, "A2");
    }

    #[test]
    fn test_updated_unknown_id_is_noop() {
        let mut state = state_with(&[("1", "A")]);
        state.select("1");
        let before = state.clone();

        state.updated(contact("9", "Z"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_deleted_removes_and_clears_selection() {
        let mut state = state_with(&[("1", "A"), ("2", "B")]);
        state.select("2");
        state.deleted("2");

        assert_eq!(state.contacts().len(), 1);
        assert!(state.find("2").is_none());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_deleted_unknown_id_keeps_selection() {
        let mut state = state_with(&[("1", "A")]);
        state.select("1");
        state.deleted("9");

        assert_eq!(state.contacts().len(), 1);
        assert_eq!(state.selection(), Some(&Selection::Saved("1".into())));
    }

    #[test]
    fn test_new_contact_selects_draft_without_touching_mirror() {
        let mut state = state_with(&[("1", "A")]);
        state.new_contact();

        assert_eq!(state.contacts().len(), 1);
        match state.selection() {
            Some(Selection::Draft(draft)) => {
                assert!(draft.name.is_empty());
                assert_eq!(draft.phone, Some(Phone::blank()));
            }
            other => panic!("expected draft selection, got {:?}", other),
        }
        assert!(state.selected_contact().is_none());
    }

    #[test]
    fn test_select_unknown_id_clears_selection() {
        let mut state = state_with(&[("1", "A")]);
        state.select("1");
        state.select("9");
        assert!(state.selection().is_none());
    }
}
