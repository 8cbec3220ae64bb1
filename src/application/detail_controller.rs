// src/application/detail_controller.rs
use tracing::{debug, instrument};

use crate::application::{Confirmer, CrmController, CustomerRepository, Modal, Notifier, Page};
use crate::domain::Customer;

const LOAD_DETAILS_FAILED: &str = "Failed to load customer details";
const EMPTY_NOTE: &str = "Please enter a note";
const ADD_NOTE_FAILED: &str = "Failed to add note";
const NOTE_ADDED: &str = "Note added successfully";
const DELETE_NOTE_FAILED: &str = "Failed to delete note";
const NOTE_DELETED: &str = "Note deleted successfully";
const DELETE_NOTE_PROMPT: &str = "Are you sure you want to delete this note?";

impl<R, P, N, C> CrmController<R, P, N, C>
where
    R: CustomerRepository,
    P: Page,
    N: Notifier,
    C: Confirmer,
{
    /// Fetch one customer with its notes and show the details overlay
    #[instrument(level = "debug", skip(self))]
    pub fn view_customer(&mut self, customer_id: i64) {
        match self.repository.get_customer(customer_id) {
            Ok(customer) => {
                debug!(notes = customer.notes.len(), "Loaded customer details");
                let html = self.presenter.render_customer_details(&customer);
                self.page.set_customer_details(customer.id, html);
                self.details = Some(customer);
                self.open_modal(Modal::Details);
            }
            Err(err) => self.fail(&err, LOAD_DETAILS_FAILED),
        }
    }

    /// Customer behind the details overlay, while it is open
    pub fn shown_customer(&self) -> Option<&Customer> {
        self.details
            .as_ref()
            .filter(|_| self.page.is_modal_open(Modal::Details))
    }

    /// Post the trimmed textarea content; whitespace-only input never leaves the client
    #[instrument(level = "debug", skip(self))]
    pub fn add_note(&mut self, customer_id: i64) {
        let content = self.page.note_input().trim().to_string();
        if content.is_empty() {
            self.reject(EMPTY_NOTE);
            return;
        }

        match self.repository.add_note(customer_id, &content) {
            Ok(note) => {
                debug!(note_id = note.id, "Added note");
                self.page.set_note_input("");
                self.view_customer(customer_id);
                self.succeed(NOTE_ADDED);
            }
            Err(err) => self.fail(&err, ADD_NOTE_FAILED),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete_note(&mut self, note_id: i64, customer_id: i64) {
        if !self.confirmer.confirm(DELETE_NOTE_PROMPT) {
            debug!(note_id, "Note deletion declined");
            return;
        }

        match self.repository.delete_note(note_id) {
            Ok(()) => {
                self.view_customer(customer_id);
                self.succeed(NOTE_DELETED);
            }
            Err(err) => self.fail(&err, DELETE_NOTE_FAILED),
        }
    }
}
