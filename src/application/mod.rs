// src/application/mod.rs
pub mod controller;
pub mod detail_controller;
pub mod form_controller;
pub mod interaction;
pub mod list_renderer;
pub mod page;
pub mod repository;

pub use controller::CrmController;
pub use interaction::{Confirmer, Notifier};
pub use page::{Modal, Page, RenderedCard};
pub use repository::CustomerRepository;
