// src/application/page.rs
use crate::domain::CustomerForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    /// Create/edit form
    Customer,
    /// Customer details with notes
    Details,
}

impl Modal {
    pub const ALL: [Modal; 2] = [Modal::Customer, Modal::Details];
}

/// A customer card as currently painted in the list container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub customer_id: i64,
    /// Text content of the card: markup stripped, entities decoded
    pub text: String,
    pub visible: bool,
}

/// Document/query interface the controller paints into.
///
/// This is the only mutable state shared between operations; the controller
/// holds no copy of the data it renders.
pub trait Page {
    /// Replaces the content of the customer list container
    fn set_customer_list(&mut self, html: String);

    fn customer_cards(&self) -> Vec<RenderedCard>;

    fn set_card_visible(&mut self, customer_id: i64, visible: bool);

    /// Replaces the details container; this also discards the note textarea content
    fn set_customer_details(&mut self, customer_id: i64, html: String);

    /// Customer currently painted in the details container
    fn details_customer(&self) -> Option<i64>;

    fn set_modal_title(&mut self, title: &str);

    fn read_form(&self) -> CustomerForm;

    fn write_form(&mut self, form: CustomerForm);

    fn note_input(&self) -> String;

    fn set_note_input(&mut self, text: &str);

    fn show_modal(&mut self, modal: Modal);

    fn hide_modal(&mut self, modal: Modal);

    fn is_modal_open(&self, modal: Modal) -> bool;
}
