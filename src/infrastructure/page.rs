// src/infrastructure/page.rs
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use tracing::trace;

use crate::application::{Modal, Page, RenderedCard};
use crate::domain::CustomerForm;
use crate::ports::{DocumentView, HtmlPresenter};
use crate::util::text::text_content;

const HIDDEN_STYLE: &str = r#" style="display: none;""#;

/// In-memory document holding what a browser tab would have painted.
///
/// Cards are located in the list markup by their `customer-card` opening
/// tag; a card spans up to the next card (or the end of the list).
#[derive(Debug)]
pub struct HtmlPage {
    card_start: Regex,
    list_html: String,
    hidden_cards: HashSet<i64>,
    details_html: String,
    details_customer: Option<i64>,
    modal_title: String,
    form: CustomerForm,
    note_input: String,
    open_modals: HashSet<Modal>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self {
            card_start: Regex::new(r#"<div class="customer-card" data-id="(-?\d+)""#).unwrap(),
            list_html: String::new(),
            hidden_cards: HashSet::new(),
            details_html: String::new(),
            details_customer: None,
            modal_title: String::new(),
            form: CustomerForm::default(),
            note_input: String::new(),
            open_modals: HashSet::new(),
        }
    }

    pub fn list_html(&self) -> &str {
        &self.list_html
    }

    pub fn details_html(&self) -> &str {
        &self.details_html
    }

    pub fn modal_title(&self) -> &str {
        &self.modal_title
    }

    fn card_spans(&self) -> Vec<(i64, Range<usize>)> {
        let starts: Vec<(usize, i64)> = self
            .card_start
            .captures_iter(&self.list_html)
            .filter_map(|caps| {
                let start = caps.get(0)?.start();
                let id = caps.get(1)?.as_str().parse().ok()?;
                Some((start, id))
            })
            .collect();

        starts
            .iter()
            .enumerate()
            .map(|(i, (start, id))| {
                let end = starts
                    .get(i + 1)
                    .map_or(self.list_html.len(), |(next, _)| *next);
                (*id, *start..end)
            })
            .collect()
    }

    /// List markup with hidden cards marked `display: none`
    fn visible_list_html(&self) -> String {
        let mut html = String::with_capacity(self.list_html.len());
        let mut cursor = 0;
        for (id, span) in self.card_spans() {
            html.push_str(&self.list_html[cursor..span.start]);
            let card = &self.list_html[span.clone()];
            if self.hidden_cards.contains(&id) {
                let open_tag_end = card.find('>').unwrap_or(card.len());
                html.push_str(&card[..open_tag_end]);
                html.push_str(HIDDEN_STYLE);
                html.push_str(&card[open_tag_end..]);
            } else {
                html.push_str(card);
            }
            cursor = span.end;
        }
        html.push_str(&self.list_html[cursor..]);
        html
    }

    /// The whole page as a standalone HTML document
    pub fn render(&self, presenter: &HtmlPresenter) -> String {
        let list_html = self.visible_list_html();
        presenter.render_document(&DocumentView {
            list_html: &list_html,
            details_html: &self.details_html,
            modal_title: &self.modal_title,
            form: &self.form,
            customer_modal_open: self.is_modal_open(Modal::Customer),
            details_modal_open: self.is_modal_open(Modal::Details),
        })
    }
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for HtmlPage {
    fn set_customer_list(&mut self, html: String) {
        // fresh nodes start visible
        self.hidden_cards.clear();
        self.list_html = html;
    }

    fn customer_cards(&self) -> Vec<RenderedCard> {
        self.card_spans()
            .into_iter()
            .map(|(customer_id, span)| RenderedCard {
                customer_id,
                text: text_content(&self.list_html[span]),
                visible: !self.hidden_cards.contains(&customer_id),
            })
            .collect()
    }

    fn set_card_visible(&mut self, customer_id: i64, visible: bool) {
        trace!(customer_id, visible, "Card visibility");
        if visible {
            self.hidden_cards.remove(&customer_id);
        } else {
            self.hidden_cards.insert(customer_id);
        }
    }

    fn set_customer_details(&mut self, customer_id: i64, html: String) {
        self.details_html = html;
        self.details_customer = Some(customer_id);
        self.note_input.clear();
    }

    fn details_customer(&self) -> Option<i64> {
        self.details_customer
    }

    fn set_modal_title(&mut self, title: &str) {
        self.modal_title = title.to_string();
    }

    fn read_form(&self) -> CustomerForm {
        self.form.clone()
    }

    fn write_form(&mut self, form: CustomerForm) {
        self.form = form;
    }

    fn note_input(&self) -> String {
        self.note_input.clone()
    }

    fn set_note_input(&mut self, text: &str) {
        self.note_input = text.to_string();
    }

    fn show_modal(&mut self, modal: Modal) {
        self.open_modals.insert(modal);
    }

    fn hide_modal(&mut self, modal: Modal) {
        self.open_modals.remove(&modal);
    }

    fn is_modal_open(&self, modal: Modal) -> bool {
        self.open_modals.contains(&modal)
    }
}
