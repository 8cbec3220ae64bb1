// src/util/testing.rs

use anyhow::Result;
use std::collections::{BTreeMap, HashMap};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Confirmer, CustomerRepository, Notifier};
use crate::domain::{Customer, CustomerPayload, DomainError, Note, NotifyKind};

/// Repository operations, used to script failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListCustomers,
    GetCustomer,
    CreateCustomer,
    UpdateCustomer,
    DeleteCustomer,
    AddNote,
    DeleteNote,
}

/// One request as seen by [`MockCustomerRepository`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    ListCustomers,
    GetCustomer(i64),
    CreateCustomer(CustomerPayload),
    UpdateCustomer(i64, CustomerPayload),
    DeleteCustomer(i64),
    AddNote(i64, String),
    DeleteNote(i64),
}

impl RepositoryCall {
    pub fn operation(&self) -> Operation {
        match self {
            RepositoryCall::ListCustomers => Operation::ListCustomers,
            RepositoryCall::GetCustomer(_) => Operation::GetCustomer,
            RepositoryCall::CreateCustomer(_) => Operation::CreateCustomer,
            RepositoryCall::UpdateCustomer(..) => Operation::UpdateCustomer,
            RepositoryCall::DeleteCustomer(_) => Operation::DeleteCustomer,
            RepositoryCall::AddNote(..) => Operation::AddNote,
            RepositoryCall::DeleteNote(_) => Operation::DeleteNote,
        }
    }
}

/// In-memory stand-in for the backend that records every call.
///
/// Behaves like the real API (create assigns the next id, delete cascades to
/// notes) unless a failure is scripted for an operation.
///
/// # Examples
///
/// ```
/// use crmview::application::CustomerRepository;
/// use crmview::domain::DomainError;
/// use crmview::util::testing::{sample_customer, MockCustomerRepository, Operation, RepositoryCall};
///
/// let mut mock = MockCustomerRepository::builder()
///     .with_customer(sample_customer(5, "Ada", "Lovelace"))
///     .with_failure(Operation::DeleteCustomer, DomainError::Transport("down".into()))
///     .build();
///
/// assert!(mock.delete_customer(5).is_err());
/// assert_eq!(mock.calls(), &[RepositoryCall::DeleteCustomer(5)]);
/// ```
pub struct MockCustomerRepository {
    customers: BTreeMap<i64, Customer>,
    failures: HashMap<Operation, DomainError>,
    calls: Vec<RepositoryCall>,
    next_note_id: i64,
}

impl MockCustomerRepository {
    pub fn builder() -> MockCustomerRepositoryBuilder {
        MockCustomerRepositoryBuilder::new()
    }

    pub fn calls(&self) -> &[RepositoryCall] {
        &self.calls
    }

    pub fn count(&self, operation: Operation) -> usize {
        self.calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    pub fn customer(&self, id: i64) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// Make every later call of `operation` fail with `err`
    pub fn fail_on(&mut self, operation: Operation, err: DomainError) {
        self.failures.insert(operation, err);
    }

    fn record(&mut self, call: RepositoryCall) -> Result<(), DomainError> {
        let operation = call.operation();
        self.calls.push(call);
        match self.failures.get(&operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn not_found() -> DomainError {
        DomainError::Api {
            status: 404,
            message: None,
        }
    }
}

impl CustomerRepository for MockCustomerRepository {
    fn list_customers(&mut self) -> Result<Vec<Customer>, DomainError> {
        self.record(RepositoryCall::ListCustomers)?;
        Ok(self
            .customers
            .values()
            .map(|c| Customer {
                notes: vec![],
                ..c.clone()
            })
            .collect())
    }

    fn get_customer(&mut self, id: i64) -> Result<Customer, DomainError> {
        self.record(RepositoryCall::GetCustomer(id))?;
        self.customers.get(&id).cloned().ok_or_else(Self::not_found)
    }

    fn create_customer(&mut self, payload: &CustomerPayload) -> Result<Customer, DomainError> {
        self.record(RepositoryCall::CreateCustomer(payload.clone()))?;
        let id = self.customers.keys().next_back().map_or(1, |last| last + 1);
        let customer = customer_from_payload(id, payload);
        self.customers.insert(id, customer.clone());
        Ok(customer)
    }

    fn update_customer(
        &mut self,
        id: i64,
        payload: &CustomerPayload,
    ) -> Result<Customer, DomainError> {
        self.record(RepositoryCall::UpdateCustomer(id, payload.clone()))?;
        let existing = self.customers.get_mut(&id).ok_or_else(Self::not_found)?;
        let notes = std::mem::take(&mut existing.notes);
        *existing = Customer {
            notes,
            ..customer_from_payload(id, payload)
        };
        Ok(existing.clone())
    }

    fn delete_customer(&mut self, id: i64) -> Result<(), DomainError> {
        self.record(RepositoryCall::DeleteCustomer(id))?;
        self.customers
            .remove(&id)
            .map(|_| ())
            .ok_or_else(Self::not_found)
    }

    fn add_note(&mut self, customer_id: i64, content: &str) -> Result<Note, DomainError> {
        self.record(RepositoryCall::AddNote(customer_id, content.to_string()))?;
        let note = Note {
            id: self.next_note_id,
            customer_id,
            content: content.to_string(),
            created_at: None,
        };
        let customer = self
            .customers
            .get_mut(&customer_id)
            .ok_or_else(Self::not_found)?;
        customer.notes.push(note.clone());
        self.next_note_id += 1;
        Ok(note)
    }

    fn delete_note(&mut self, note_id: i64) -> Result<(), DomainError> {
        self.record(RepositoryCall::DeleteNote(note_id))?;
        for customer in self.customers.values_mut() {
            if let Some(pos) = customer.notes.iter().position(|n| n.id == note_id) {
                customer.notes.remove(pos);
                return Ok(());
            }
        }
        Err(Self::not_found())
    }
}

/// Builder for MockCustomerRepository
pub struct MockCustomerRepositoryBuilder {
    customers: BTreeMap<i64, Customer>,
    failures: HashMap<Operation, DomainError>,
}

impl MockCustomerRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            customers: BTreeMap::new(),
            failures: HashMap::new(),
        }
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customers.insert(customer.id, customer);
        self
    }

    /// Make every call of `operation` fail with `err` (the call is still recorded)
    pub fn with_failure(mut self, operation: Operation, err: DomainError) -> Self {
        self.failures.insert(operation, err);
        self
    }

    pub fn build(self) -> MockCustomerRepository {
        let next_note_id = self
            .customers
            .values()
            .flat_map(|c| c.notes.iter().map(|n| n.id))
            .max()
            .unwrap_or(0)
            + 1;
        MockCustomerRepository {
            customers: self.customers,
            failures: self.failures,
            calls: vec![],
            next_note_id,
        }
    }
}

impl Default for MockCustomerRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier that keeps every notification
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Vec<(NotifyKind, String)>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> &[(NotifyKind, String)] {
        &self.notifications
    }

    pub fn last(&self) -> Option<&(NotifyKind, String)> {
        self.notifications.last()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NotifyKind, message: &str) {
        self.notifications.push((kind, message.to_string()));
    }
}

/// Confirmer with a fixed answer that remembers the prompts it was shown
#[derive(Debug)]
pub struct ScriptedConfirmer {
    answer: bool,
    prompts: Vec<String>,
}

impl ScriptedConfirmer {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            prompts: vec![],
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            prompts: vec![],
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}

pub fn sample_customer(id: i64, first_name: &str, last_name: &str) -> Customer {
    Customer {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone: None,
        company: None,
        created_at: None,
        updated_at: None,
        notes: vec![],
    }
}

pub fn sample_note(id: i64, customer_id: i64, content: &str) -> Note {
    Note {
        id,
        customer_id,
        content: content.to_string(),
        created_at: None,
    }
}

fn customer_from_payload(id: i64, payload: &CustomerPayload) -> Customer {
    Customer {
        id,
        first_name: payload.first_name.clone(),
        last_name: payload.last_name.clone(),
        email: payload.email.clone(),
        phone: Some(payload.phone.clone()),
        company: Some(payload.company.clone()),
        created_at: None,
        updated_at: None,
        notes: vec![],
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "hyper_util", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
