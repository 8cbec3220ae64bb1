// src/application/form_controller.rs
use tracing::{debug, instrument};

use crate::application::{Confirmer, CrmController, CustomerRepository, Modal, Notifier, Page};
use crate::domain::{Customer, CustomerForm};

const ADD_TITLE: &str = "Add New Customer";
const EDIT_TITLE: &str = "Edit Customer";
const REQUIRED_FIELDS: &str = "Please fill in all required fields";
const LOAD_CUSTOMER_FAILED: &str = "Failed to load customer";
const SAVE_CUSTOMER_FAILED: &str = "Failed to save customer";
const CUSTOMER_CREATED: &str = "Customer created successfully";
const CUSTOMER_UPDATED: &str = "Customer updated successfully";

impl<R, P, N, C> CrmController<R, P, N, C>
where
    R: CustomerRepository,
    P: Page,
    N: Notifier,
    C: Confirmer,
{
    /// Open the form blank (create) or pre-filled from `customer` (edit)
    pub fn open_customer_modal(&mut self, customer: Option<&Customer>) {
        match customer {
            Some(customer) => {
                self.page.set_modal_title(EDIT_TITLE);
                self.page.write_form(CustomerForm::from_customer(customer));
            }
            None => {
                self.page.set_modal_title(ADD_TITLE);
                self.page.write_form(CustomerForm::default());
            }
        }
        self.open_modal(Modal::Customer);
    }

    #[instrument(level = "debug", skip(self))]
    pub fn edit_customer(&mut self, customer_id: i64) {
        match self.repository.get_customer(customer_id) {
            Ok(customer) => self.open_customer_modal(Some(&customer)),
            Err(err) => self.fail(&err, LOAD_CUSTOMER_FAILED),
        }
    }

    /// Submit the form: POST when the id field is blank, PUT otherwise.
    ///
    /// On failure the form stays open with what the user typed.
    #[instrument(level = "debug", skip(self))]
    pub fn save_customer(&mut self) {
        let form = self.page.read_form();
        if form.missing_required() {
            self.reject(REQUIRED_FIELDS);
            return;
        }
        let customer_id = match form.customer_id() {
            Ok(id) => id,
            Err(err) => {
                self.reject(&err.to_string());
                return;
            }
        };

        let payload = form.payload();
        let result = match customer_id {
            Some(id) => self.repository.update_customer(id, &payload),
            None => self.repository.create_customer(&payload),
        };

        match result {
            Ok(saved) => {
                debug!(customer_id = saved.id, "Saved customer");
                self.page.hide_modal(Modal::Customer);
                self.page.write_form(CustomerForm::default());
                self.load_customers();
                self.succeed(if customer_id.is_some() {
                    CUSTOMER_UPDATED
                } else {
                    CUSTOMER_CREATED
                });
            }
            Err(err) => self.fail(&err, SAVE_CUSTOMER_FAILED),
        }
    }
}
