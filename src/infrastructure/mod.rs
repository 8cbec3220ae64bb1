// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod page;
pub mod renderer;
pub mod terminal;

pub use config::Config;
pub use http::HttpCustomerRepository;
pub use page::HtmlPage;
pub use renderer::ContentRenderer;
pub use terminal::{PromptConfirmer, TerminalNotifier};
