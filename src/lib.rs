// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{CrmController, Modal, Page};
use domain::CustomerForm;
use infrastructure::{
    Config, ContentRenderer, HtmlPage, HttpCustomerRepository, PromptConfirmer, TerminalNotifier,
};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};

use crate::cli::args::{Args, Command, NoteCommand};

type TerminalController =
    CrmController<HttpCustomerRepository, HtmlPage, TerminalNotifier, PromptConfirmer>;

pub fn run(args: Args) -> Result<ExitCode> {
    debug!(?args, "Starting crmview with arguments");

    // Initialize infrastructure
    let config = Config::resolve(args.config.as_deref())?
        .with_base_url_override(args.base_url.as_deref());
    debug!(?config, "Resolved configuration");

    let repository = HttpCustomerRepository::new(&config.api.base_url, config.api.timeout())
        .context("Failed to create HTTP client")?;
    info!(base_url = repository.base_url(), "Using CRM API");

    let assume_yes = match &args.command {
        Command::Delete { yes, .. } => *yes,
        Command::Note {
            command: NoteCommand::Delete { yes, .. },
        } => *yes,
        _ => false,
    };

    // Initialize application
    let mut crm = CrmController::new(
        repository,
        HtmlPage::new(),
        TerminalNotifier::new(),
        PromptConfirmer::new(assume_yes),
    );

    // Execute use case
    match args.command {
        Command::List { search, json } => {
            crm.load_customers();
            if let Some(term) = search {
                crm.filter_customers(&term);
            }
            if !crm.notifier().failed() {
                if json {
                    print_json(&crm.visible_customers())?;
                } else {
                    present(&crm, args.no_open)?;
                }
            }
        }
        Command::View { customer_id, json } => {
            crm.view_customer(customer_id);
            if let Some(customer) = crm.shown_customer() {
                if json {
                    print_json(customer)?;
                } else {
                    present(&crm, args.no_open)?;
                }
            }
        }
        Command::Add {
            first_name,
            last_name,
            email,
            phone,
            company,
        } => {
            crm.open_customer_modal(None);
            crm.page_mut().write_form(CustomerForm {
                id: String::new(),
                first_name,
                last_name,
                email,
                phone: phone.unwrap_or_default(),
                company: company.unwrap_or_default(),
            });
            crm.save_customer();
        }
        Command::Edit {
            customer_id,
            fields,
        } => {
            crm.edit_customer(customer_id);
            if crm.page().is_modal_open(Modal::Customer) {
                let mut form = crm.page().read_form();
                fields.apply_to(&mut form);
                crm.page_mut().write_form(form);
                crm.save_customer();
            }
        }
        Command::Delete { customer_id, .. } => crm.delete_customer(customer_id),
        Command::Note { command } => match command {
            NoteCommand::Add {
                customer_id,
                content,
            } => {
                crm.view_customer(customer_id);
                if crm.page().is_modal_open(Modal::Details) {
                    crm.page_mut().set_note_input(&content);
                    crm.add_note(customer_id);
                }
            }
            NoteCommand::Delete {
                note_id, customer, ..
            } => crm.delete_note(note_id, customer),
        },
    }

    Ok(if crm.notifier().failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("Failed to write JSON")?;
    writeln!(stdout)?;
    Ok(())
}

/// Open the page in the browser, or print it with `--no-open`
fn present(crm: &TerminalController, no_open: bool) -> Result<()> {
    let html = crm.page().render(crm.presenter());
    if no_open {
        println!("{html}");
        return Ok(());
    }
    let mut renderer = ContentRenderer::new();
    let path = renderer.present(&html)?;
    debug!(?path, "Opened page in browser");
    Ok(())
}
