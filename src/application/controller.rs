// src/application/controller.rs
use tracing::{debug, error, info, warn};

use crate::application::{Confirmer, CustomerRepository, Modal, Notifier, Page};
use crate::domain::{Customer, DomainError, NotifyKind};
use crate::ports::HtmlPresenter;

/// View-sync controller: turns user actions into requests and repaints the
/// page from the responses.
///
/// Operations never return errors. Every failure is logged and handed to the
/// [`Notifier`]; the page is left as it was before the action.
pub struct CrmController<R, P, N, C> {
    pub(crate) repository: R,
    pub(crate) page: P,
    pub(crate) notifier: N,
    pub(crate) confirmer: C,
    pub(crate) presenter: HtmlPresenter,
    /// Collection behind the painted list
    pub(crate) customers: Vec<Customer>,
    /// Customer behind the painted details
    pub(crate) details: Option<Customer>,
}

impl<R, P, N, C> CrmController<R, P, N, C>
where
    R: CustomerRepository,
    P: Page,
    N: Notifier,
    C: Confirmer,
{
    pub fn new(repository: R, page: P, notifier: N, confirmer: C) -> Self {
        Self {
            repository,
            page,
            notifier,
            confirmer,
            presenter: HtmlPresenter::new(),
            customers: Vec::new(),
            details: None,
        }
    }

    pub fn with_presenter(mut self, presenter: HtmlPresenter) -> Self {
        self.presenter = presenter;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// User input into the page (typing into fields) goes through here
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }

    pub fn presenter(&self) -> &HtmlPresenter {
        &self.presenter
    }

    /// Cancel button or a modal's own close icon
    pub fn close_modal(&mut self, modal: Modal) {
        self.page.hide_modal(modal);
    }

    /// A click on the overlay backdrop, outside the modal content
    pub fn click_outside(&mut self, modal: Modal) {
        self.close_modal(modal);
    }

    /// The close icon hides every overlay
    pub fn close_all_modals(&mut self) {
        for modal in Modal::ALL {
            self.page.hide_modal(modal);
        }
    }

    /// Overlays are mutually exclusive
    pub(crate) fn open_modal(&mut self, modal: Modal) {
        for other in Modal::ALL.into_iter().filter(|m| *m != modal) {
            self.page.hide_modal(other);
        }
        self.page.show_modal(modal);
    }

    pub(crate) fn notify(&mut self, kind: NotifyKind, message: &str) {
        debug!(%kind, message, "Notify");
        self.notifier.notify(kind, message);
    }

    pub(crate) fn succeed(&mut self, message: &str) {
        info!(outcome = message, "Action succeeded");
        self.notify(NotifyKind::Success, message);
    }

    pub(crate) fn fail(&mut self, err: &DomainError, fallback: &str) {
        error!(error = %err, "{}", fallback);
        let message = err.user_message(fallback).to_string();
        self.notify(NotifyKind::Error, &message);
    }

    pub(crate) fn reject(&mut self, message: &str) {
        warn!(reason = message, "Rejected locally");
        self.notify(NotifyKind::Error, message);
    }
}
