//! Client side of the contact list.
//!
//! [`ContactBook`] drives a [`ContactService`] and applies each successful
//! response to a [`ContactListState`]. Failed requests are logged and leave the
//! state as it was; nothing is retried or refetched.

mod service;
mod state;

pub use service::*;
pub use state::*;

use crate::models::ContactInput;

/// A contact list UI's model: the server client plus its local mirror.
#[derive(Debug, Clone)]
pub struct ContactBook {
    service: ContactService,
    state: ContactListState,
}

impl ContactBook {
    pub fn new(service: ContactService) -> Self {
        Self {
            service,
            state: ContactListState::new(),
        }
    }

    pub fn state(&self) -> &ContactListState {
        &self.state
    }

    pub fn select(&mut self, id: &str) {
        self.state.select(id);
    }

    pub fn new_contact(&mut self) {
        self.state.new_contact();
    }

    /// Fetch the full list into the mirror.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let contacts = self
            .service
            .get_contacts()
            .await
            .inspect_err(|e| tracing::error!("Failed to load contacts: {}", e))?;
        self.state.loaded(contacts);
        Ok(())
    }

    pub async fn create(&mut self, new_contact: &ContactInput) -> Result<(), ClientError> {
        let contact = self
            .service
            .create_contact(new_contact)
            .await
            .inspect_err(|e| tracing::error!("Failed to create contact: {}", e))?;
        self.state.created(contact);
        Ok(())
    }

    /// Submit `changes` as the new body of contact `id`.
    pub async fn update(&mut self, id: &str, changes: &ContactInput) -> Result<(), ClientError> {
        let contact = changes.clone().into_contact(id.to_string());
        let updated = self
            .service
            .update_contact(&contact)
            .await
            .inspect_err(|e| tracing::error!("Failed to update contact {}: {}", id, e))?;
        self.state.updated(updated);
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        let deleted_id = self
            .service
            .delete_contact(id)
            .await
            .inspect_err(|e| tracing::error!("Failed to delete contact {}: {}", id, e))?;
        self.state.deleted(&deleted_id);
        Ok(())
    }

    /// Submit the details pane: a draft is created, a saved contact is
    /// replaced with `form`. Does nothing without a selection.
    pub async fn save_selected(&mut self, form: &ContactInput) -> Result<(), ClientError> {
        match self.state.selection().cloned() {
            Some(Selection::Draft(_)) => self.create(form).await,
            Some(Selection::Saved(id)) => self.update(&id, form).await,
            None => Ok(()),
        }
    }
}
