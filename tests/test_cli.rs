use crmview::cli::args::{Args, Command, FieldArgs, NoteCommand};
use crmview::domain::CustomerForm;
use clap::Parser;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["crmview", "42"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_with_search_when_parsing_then_captures_term() {
    // Arrange
    let args = vec!["crmview", "list", "lovelace"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { search, json } => {
            assert_eq!(search.as_deref(), Some("lovelace"));
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
    assert!(!parsed.no_open);
}

#[test]
fn given_list_with_json_when_parsing_then_json_is_true() {
    // Arrange
    let args = vec!["crmview", "list", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { search, json } => {
            assert_eq!(search, None);
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_view_with_json_when_parsing_then_json_is_true() {
    // Arrange
    let args = vec!["crmview", "view", "--json", "5"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View { customer_id, json } => {
            assert_eq!(customer_id, 5);
            assert!(json);
        }
        _ => panic!("Expected View command"),
    }
}

#[test]
fn given_add_without_email_when_parsing_then_fails() {
    // Arrange
    let args = vec!["crmview", "add", "--first-name", "A", "--last-name", "B"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_add_with_required_fields_when_parsing_then_optionals_are_none() {
    // Arrange
    let args = vec![
        "crmview",
        "add",
        "--first-name",
        "A",
        "--last-name",
        "B",
        "--email",
        "a@b.com",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add {
            first_name,
            email,
            phone,
            company,
            ..
        } => {
            assert_eq!(first_name, "A");
            assert_eq!(email, "a@b.com");
            assert_eq!(phone, None);
            assert_eq!(company, None);
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_edit_with_some_fields_when_applying_then_only_those_change() {
    // Arrange
    let args = vec!["crmview", "edit", "7", "--company", "Acme"];
    let parsed = Args::try_parse_from(args).unwrap();
    let mut form = CustomerForm {
        id: "7".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555".to_string(),
        company: "Old".to_string(),
    };

    // Act
    let fields = match parsed.command {
        Command::Edit { customer_id, fields } => {
            assert_eq!(customer_id, 7);
            fields
        }
        _ => panic!("Expected Edit command"),
    };
    fields.apply_to(&mut form);

    // Assert
    assert_eq!(form.company, "Acme");
    assert_eq!(form.first_name, "Ada");
    assert_eq!(form.phone, "555");
}

#[test]
fn given_empty_field_args_when_applying_then_form_is_unchanged() {
    // Arrange
    let mut form = CustomerForm {
        first_name: "Ada".to_string(),
        ..CustomerForm::default()
    };

    // Act
    FieldArgs::default().apply_to(&mut form);

    // Assert
    assert_eq!(form.first_name, "Ada");
}

#[test]
fn given_delete_with_yes_when_parsing_then_skips_confirmation() {
    // Arrange
    let args = vec!["crmview", "delete", "--yes", "3"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { customer_id, yes } => {
            assert_eq!(customer_id, 3);
            assert!(yes);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_note_add_when_parsing_then_captures_customer_and_content() {
    // Arrange
    let args = vec!["crmview", "note", "add", "5", "called back"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Note {
            command: NoteCommand::Add {
                customer_id,
                content,
            },
        } => {
            assert_eq!(customer_id, 5);
            assert_eq!(content, "called back");
        }
        _ => panic!("Expected Note Add command"),
    }
}

#[test]
fn given_note_delete_without_customer_when_parsing_then_fails() {
    // Arrange
    let args = vec!["crmview", "note", "delete", "1"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec![
        "crmview",
        "list",
        "--base-url",
        "http://crm.local/api",
        "--no-open",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.base_url.as_deref(), Some("http://crm.local/api"));
    assert!(parsed.no_open);
    assert_eq!(parsed.verbose, 2);
}
