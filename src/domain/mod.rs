// src/domain/mod.rs
pub mod customer;
pub mod error;
pub mod notification;
pub mod timestamp;

pub use customer::{Customer, CustomerForm, CustomerPayload, Note};
pub use error::DomainError;
pub use notification::NotifyKind;
