// src/application/list_renderer.rs
use tracing::{debug, instrument};

use crate::application::{Confirmer, CrmController, CustomerRepository, Modal, Notifier, Page};
use crate::domain::Customer;
use crate::util::text::matches_filter;

const LOAD_CUSTOMERS_FAILED: &str = "Failed to load customers";
const DELETE_CUSTOMER_FAILED: &str = "Failed to delete customer";
const CUSTOMER_DELETED: &str = "Customer deleted successfully";
const DELETE_CUSTOMER_PROMPT: &str =
    "Are you sure you want to delete this customer? This will also delete all associated notes.";

impl<R, P, N, C> CrmController<R, P, N, C>
where
    R: CustomerRepository,
    P: Page,
    N: Notifier,
    C: Confirmer,
{
    /// Fetch the whole collection and repaint the list container
    #[instrument(level = "debug", skip(self))]
    pub fn load_customers(&mut self) {
        match self.repository.list_customers() {
            Ok(customers) => {
                debug!(count = customers.len(), "Loaded customers");
                let html = self.presenter.render_customer_list(&customers);
                self.page.set_customer_list(html);
                self.customers = customers;
            }
            Err(err) => self.fail(&err, LOAD_CUSTOMERS_FAILED),
        }
    }

    /// Hide every rendered card whose text does not contain `term`.
    ///
    /// Works on what is painted; never issues a request.
    #[instrument(level = "debug", skip(self))]
    pub fn filter_customers(&mut self, term: &str) {
        for card in self.page.customer_cards() {
            let visible = matches_filter(&card.text, term);
            self.page.set_card_visible(card.customer_id, visible);
        }
    }

    /// Customers whose cards are currently shown, in list order
    pub fn visible_customers(&self) -> Vec<&Customer> {
        let cards = self.page.customer_cards();
        self.customers
            .iter()
            .filter(|customer| {
                cards
                    .iter()
                    .any(|card| card.customer_id == customer.id && card.visible)
            })
            .collect()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete_customer(&mut self, customer_id: i64) {
        if !self.confirmer.confirm(DELETE_CUSTOMER_PROMPT) {
            debug!(customer_id, "Customer deletion declined");
            return;
        }

        match self.repository.delete_customer(customer_id) {
            Ok(()) => {
                if self.page.details_customer() == Some(customer_id) {
                    self.page.hide_modal(Modal::Details);
                }
                self.load_customers();
                self.succeed(CUSTOMER_DELETED);
            }
            Err(err) => self.fail(&err, DELETE_CUSTOMER_FAILED),
        }
    }
}
