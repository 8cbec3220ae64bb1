// src/application/repository.rs
use crate::domain::{Customer, CustomerPayload, DomainError, Note};

/// The REST contract the client relies on.
///
/// Every method is a single request; implementations never retry.
pub trait CustomerRepository {
    fn list_customers(&mut self) -> Result<Vec<Customer>, DomainError>;

    /// Returns the customer with its notes embedded
    fn get_customer(&mut self, id: i64) -> Result<Customer, DomainError>;

    fn create_customer(&mut self, payload: &CustomerPayload) -> Result<Customer, DomainError>;

    fn update_customer(
        &mut self,
        id: i64,
        payload: &CustomerPayload,
    ) -> Result<Customer, DomainError>;

    /// Deletes the customer; the backend cascades to its notes
    fn delete_customer(&mut self, id: i64) -> Result<(), DomainError>;

    fn add_note(&mut self, customer_id: i64, content: &str) -> Result<Note, DomainError>;

    fn delete_note(&mut self, note_id: i64) -> Result<(), DomainError>;
}
