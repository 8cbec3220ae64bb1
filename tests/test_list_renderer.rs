mod helpers;

use crmview::application::{Modal, Page};
use crmview::domain::{Customer, DomainError, NotifyKind};
use crmview::util::testing::{MockCustomerRepository, Operation, RepositoryCall, ScriptedConfirmer};
use helpers::{controller, fixtures};

#[test]
fn given_empty_collection_when_loading_customers_then_shows_empty_state() {
    // Arrange
    let mut crm = controller(
        MockCustomerRepository::builder().build(),
        ScriptedConfirmer::accepting(),
    );

    // Act
    crm.load_customers();

    // Assert
    let list = crm.page().list_html();
    assert!(list.contains("No customers yet"));
    assert!(!list.contains("customer-card"));
    assert!(crm.page().customer_cards().is_empty());
}

#[test]
fn given_customers_when_loading_then_renders_one_card_per_customer() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::accepting());

    // Act
    crm.load_customers();

    // Assert
    let ids: Vec<i64> = crm
        .page()
        .customer_cards()
        .iter()
        .map(|card| card.customer_id)
        .collect();
    assert_eq!(ids, vec![fixtures::ADA, fixtures::CHARLES, fixtures::GRACE]);
    assert!(crm.notifier().notifications().is_empty());
}

#[test]
fn given_script_in_fields_when_loading_then_card_content_is_escaped() {
    // Arrange
    let hostile = Customer {
        first_name: "<script>alert('x')</script>".to_string(),
        email: "<img src=x onerror=alert(1)>".to_string(),
        phone: Some("<b>555</b>".to_string()),
        company: Some("Evil & Co".to_string()),
        ..fixtures::charles()
    };
    let mut crm = controller(
        MockCustomerRepository::builder().with_customer(hostile).build(),
        ScriptedConfirmer::accepting(),
    );

    // Act
    crm.load_customers();

    // Assert
    let list = crm.page().list_html();
    assert!(!list.contains("<script>"));
    assert!(!list.contains("<img"));
    assert!(!list.contains("<b>555"));
    assert!(list.contains("&lt;script&gt;alert('x')&lt;/script&gt;"));
    assert!(list.contains("Evil &amp; Co"));
    // text content still reads as the raw data
    assert!(crm.page().customer_cards()[0].text.contains("<script>alert('x')</script>"));
}

#[test]
fn given_list_failure_when_loading_then_keeps_previous_list_and_notifies() {
    // Arrange
    let mut crm = controller(
        MockCustomerRepository::builder()
            .with_failure(
                Operation::ListCustomers,
                DomainError::Transport("connection refused".to_string()),
            )
            .build(),
        ScriptedConfirmer::accepting(),
    );
    crm.page_mut().set_customer_list("<p>stale</p>".to_string());

    // Act
    crm.load_customers();

    // Assert
    assert_eq!(crm.page().list_html(), "<p>stale</p>");
    assert_eq!(
        crm.notifier().last(),
        Some(&(NotifyKind::Error, "Failed to load customers".to_string()))
    );
}

#[test]
fn given_loaded_cards_when_filtering_then_hides_non_matching_case_insensitively() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::accepting());
    crm.load_customers();

    // Act
    crm.filter_customers("LOVELACE");

    // Assert
    let visible: Vec<i64> = crm
        .page()
        .customer_cards()
        .iter()
        .filter(|card| card.visible)
        .map(|card| card.customer_id)
        .collect();
    assert_eq!(visible, vec![fixtures::ADA]);
}

#[test]
fn given_filtered_cards_when_filtering_with_empty_term_then_shows_all() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::accepting());
    crm.load_customers();
    crm.filter_customers("hopper");

    // Act
    crm.filter_customers("");

    // Assert
    assert!(crm.page().customer_cards().iter().all(|card| card.visible));
}

#[test]
fn given_loaded_cards_when_filtering_then_issues_no_request() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::accepting());
    crm.load_customers();

    // Act
    crm.filter_customers("analytical");
    crm.filter_customers("555-0100");
    crm.filter_customers("nobody");

    // Assert
    assert_eq!(crm.repository().calls(), &[RepositoryCall::ListCustomers]);
}

#[test]
fn given_declined_confirmation_when_deleting_customer_then_sends_nothing() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::declining());

    // Act
    crm.delete_customer(fixtures::ADA);

    // Assert
    assert!(crm.repository().calls().is_empty());
    assert!(crm.notifier().notifications().is_empty());
}

#[test]
fn given_confirmation_when_deleting_customer_then_deletes_and_reloads_list() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::accepting());

    // Act
    crm.delete_customer(fixtures::ADA);

    // Assert
    assert_eq!(
        crm.repository().calls(),
        &[
            RepositoryCall::DeleteCustomer(fixtures::ADA),
            RepositoryCall::ListCustomers
        ]
    );
    assert_eq!(crm.page().customer_cards().len(), 2);
    assert_eq!(
        crm.notifier().last(),
        Some(&(NotifyKind::Success, "Customer deleted successfully".to_string()))
    );
}

#[test]
fn given_details_open_when_deleting_that_customer_then_closes_details() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::accepting());
    crm.view_customer(fixtures::GRACE);
    assert!(crm.page().is_modal_open(Modal::Details));

    // Act
    crm.delete_customer(fixtures::GRACE);

    // Assert
    assert!(!crm.page().is_modal_open(Modal::Details));
}

#[test]
fn given_server_error_when_deleting_customer_then_notifies_without_reload() {
    // Arrange
    let mut crm = controller(
        MockCustomerRepository::builder()
            .with_customer(fixtures::ada())
            .with_failure(
                Operation::DeleteCustomer,
                DomainError::Api {
                    status: 500,
                    message: None,
                },
            )
            .build(),
        ScriptedConfirmer::accepting(),
    );

    // Act
    crm.delete_customer(fixtures::ADA);

    // Assert
    assert_eq!(crm.repository().count(Operation::ListCustomers), 0);
    assert_eq!(
        crm.notifier().last(),
        Some(&(NotifyKind::Error, "Failed to delete customer".to_string()))
    );
}

#[test]
fn given_filtered_cards_when_listing_visible_customers_then_returns_only_shown_records() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::accepting());
    crm.load_customers();

    // Act
    crm.filter_customers("hopper");

    // Assert
    let visible: Vec<i64> = crm.visible_customers().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![fixtures::GRACE]);
}

#[test]
fn given_failed_reload_when_listing_visible_customers_then_keeps_painted_records() {
    // Arrange
    let mut crm = controller(fixtures::populated(), ScriptedConfirmer::accepting());
    crm.load_customers();
    crm.repository_mut()
        .fail_on(Operation::ListCustomers, DomainError::Transport("down".to_string()));

    // Act
    crm.load_customers();

    // Assert
    assert_eq!(crm.visible_customers().len(), 3);
}
