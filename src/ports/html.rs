// src/ports/html.rs
use chrono::{DateTime, FixedOffset, Local, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

use crate::constants::{NOT_AVAILABLE, TIMESTAMP_FORMAT};
use crate::domain::{Customer, CustomerForm, Note};

/// Everything the standalone document shows, as painted by the page
#[derive(Debug)]
pub struct DocumentView<'a> {
    pub list_html: &'a str,
    pub details_html: &'a str,
    pub modal_title: &'a str,
    pub form: &'a CustomerForm,
    pub customer_modal_open: bool,
    pub details_modal_open: bool,
}

#[derive(Debug, Default)]
pub struct HtmlPresenter {
    /// Offset used for timestamps; `None` means the local timezone
    offset: Option<FixedOffset>,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self { offset: None }
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    pub fn format_timestamp(&self, timestamp: Option<&DateTime<Utc>>) -> String {
        match (timestamp, self.offset) {
            (None, _) => NOT_AVAILABLE.to_string(),
            (Some(ts), Some(offset)) => {
                ts.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string()
            }
            (Some(ts), None) => ts.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Content of the list container: one card per customer, or the empty state
    #[instrument(level = "trace", skip_all, fields(count = customers.len()))]
    pub fn render_customer_list(&self, customers: &[Customer]) -> String {
        if customers.is_empty() {
            return r#"
<div class="empty-state">
    <h2>No customers yet</h2>
    <p>Click "Add New Customer" to get started</p>
</div>
"#
            .to_string();
        }

        customers
            .iter()
            .map(|customer| self.render_customer_card(customer))
            .collect()
    }

    pub fn render_customer_card(&self, customer: &Customer) -> String {
        let mut info = format!(
            "<p><strong>Email:</strong> {}</p>",
            encode_text(&customer.email)
        );
        if let Some(phone) = customer.phone() {
            info.push_str(&format!("<p><strong>Phone:</strong> {}</p>", encode_text(phone)));
        }
        if let Some(company) = customer.company() {
            info.push_str(&format!(
                "<p><strong>Company:</strong> {}</p>",
                encode_text(company)
            ));
        }

        format!(
            r#"<div class="customer-card" data-id="{id}">
    <h3>{first} {last}</h3>
    <div class="customer-info">{info}</div>
    <div class="customer-actions">
        <button class="btn btn-info" data-action="view" data-customer-id="{id}">View Details</button>
        <button class="btn btn-success" data-action="edit" data-customer-id="{id}">Edit</button>
        <button class="btn btn-danger" data-action="delete" data-customer-id="{id}">Delete</button>
    </div>
</div>
"#,
            id = customer.id,
            first = encode_text(&customer.first_name),
            last = encode_text(&customer.last_name),
            info = info,
        )
    }

    /// Content of the details overlay, including the note form
    #[instrument(level = "trace", skip_all, fields(customer_id = customer.id))]
    pub fn render_customer_details(&self, customer: &Customer) -> String {
        let notes = if customer.notes.is_empty() {
            r#"<p class="no-notes">No notes yet</p>"#.to_string()
        } else {
            customer
                .notes
                .iter()
                .map(|note| self.render_note(note, customer.id))
                .collect()
        };

        format!(
            r#"<div class="details-header">
    <h2>{first} {last}</h2>
    <div class="details-actions">
        <button class="btn btn-success" data-action="edit" data-customer-id="{id}">Edit</button>
        <button class="btn btn-danger" data-action="delete" data-customer-id="{id}">Delete</button>
    </div>
</div>
<div class="details-info">
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Company:</strong> {company}</p>
    <p><strong>Created:</strong> {created}</p>
    <p><strong>Last Updated:</strong> {updated}</p>
</div>
<div class="notes-section">
    <h3>Notes &amp; Interactions</h3>
    <div class="notes-list" id="notesList">{notes}</div>
    <div class="note-form">
        <textarea id="noteContent" placeholder="Add a new note..."></textarea>
        <button class="btn btn-primary" data-action="add-note" data-customer-id="{id}">Add Note</button>
    </div>
</div>
"#,
            id = customer.id,
            first = encode_text(&customer.first_name),
            last = encode_text(&customer.last_name),
            email = encode_text(&customer.email),
            phone = encode_text(customer.phone().unwrap_or(NOT_AVAILABLE)),
            company = encode_text(customer.company().unwrap_or(NOT_AVAILABLE)),
            created = self.format_timestamp(customer.created_at.as_ref()),
            updated = self.format_timestamp(customer.updated_at.as_ref()),
            notes = notes,
        )
    }

    fn render_note(&self, note: &Note, customer_id: i64) -> String {
        format!(
            r#"<div class="note-item" data-note-id="{note_id}">
    <div class="note-header">
        <span class="note-date">{date}</span>
        <button class="btn btn-danger btn-small" data-action="delete-note" data-note-id="{note_id}" data-customer-id="{customer_id}">Delete</button>
    </div>
    <div class="note-content">{content}</div>
</div>
"#,
            note_id = note.id,
            customer_id = customer_id,
            date = self.format_timestamp(note.created_at.as_ref()),
            content = encode_text(&note.content),
        )
    }

    /// Standalone document with the list, the form overlay and the details overlay
    pub fn render_document(&self, view: &DocumentView<'_>) -> String {
        let display = |open: bool| if open { "block" } else { "none" };
        let field = |name: &str, label: &str, value: &str, required: bool| {
            format!(
                r#"<div class="form-group">
                <label for="{name}">{label}</label>
                <input type="text" id="{name}" name="{name}" value="{value}"{required}>
            </div>"#,
                name = name,
                label = label,
                value = encode_double_quoted_attribute(value),
                required = if required { " required" } else { "" },
            )
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Customers</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 1100px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .customer-list {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 1rem;
        }}
        .customer-card, .modal-content {{
            background: white;
            border-radius: 8px;
            padding: 1.5rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .empty-state {{
            text-align: center;
            color: #666;
            grid-column: 1 / -1;
        }}
        .modal {{
            position: fixed;
            inset: 0;
            background-color: rgba(0,0,0,0.4);
            overflow-y: auto;
        }}
        .modal-content {{
            max-width: 700px;
            margin: 5% auto;
        }}
        .note-item {{
            border-left: 3px solid #007bff;
            padding: 0.5rem 1rem;
            margin-bottom: 0.5rem;
            background: #f8f9fa;
        }}
        .note-header {{
            display: flex;
            justify-content: space-between;
            font-size: 0.85em;
            color: #666;
        }}
        .no-notes {{
            color: #999;
        }}
        .btn-small {{
            padding: 4px 8px;
            font-size: 12px;
        }}
        textarea {{
            width: 100%;
            min-height: 80px;
        }}
    </style>
</head>
<body>
    <header>
        <h1>Customers</h1>
        <input type="text" id="searchInput" placeholder="Search customers...">
        <button class="btn btn-primary" id="addCustomerBtn">Add New Customer</button>
    </header>
    <div class="customer-list" id="customerList">{list}</div>

    <div class="modal" id="customerModal" style="display: {customer_display};">
        <div class="modal-content">
            <span class="close">&times;</span>
            <h2 id="modalTitle">{title}</h2>
            <form id="customerForm">
            <input type="hidden" id="customerId" value="{id}">
            {first_name}
            {last_name}
            {email}
            {phone}
            {company}
            <button type="submit" class="btn btn-primary">Save</button>
            <button type="button" class="btn" id="cancelBtn">Cancel</button>
            </form>
        </div>
    </div>

    <div class="modal" id="detailsModal" style="display: {details_display};">
        <div class="modal-content">
            <span class="close">&times;</span>
            <div id="customerDetails">{details}</div>
        </div>
    </div>
</body>
</html>"#,
            list = view.list_html,
            customer_display = display(view.customer_modal_open),
            title = encode_text(view.modal_title),
            id = encode_double_quoted_attribute(&view.form.id),
            first_name = field("firstName", "First Name *", &view.form.first_name, true),
            last_name = field("lastName", "Last Name *", &view.form.last_name, true),
            email = field("email", "Email *", &view.form.email, true),
            phone = field("phone", "Phone", &view.form.phone, false),
            company = field("company", "Company", &view.form.company, false),
            details_display = display(view.details_modal_open),
            details = view.details_html,
        )
    }
}
