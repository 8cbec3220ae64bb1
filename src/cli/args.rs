// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::CustomerForm;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the CRM API (overrides the config file)
    #[arg(short, long, value_name = "URL", env = "CRMVIEW_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Print the rendered page to stdout instead of opening a browser
    #[arg(long, global = true)]
    pub no_open: bool,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the customer list, optionally filtered
    List {
        /// Only show cards containing this text (case-insensitive)
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output the shown customers as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Show one customer with its notes
    View {
        #[arg(value_name = "CUSTOMER_ID")]
        customer_id: i64,

        /// Output customer as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Create a customer
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
    },

    /// Update the given fields of a customer
    Edit {
        #[arg(value_name = "CUSTOMER_ID")]
        customer_id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a customer and all of its notes
    Delete {
        #[arg(value_name = "CUSTOMER_ID")]
        customer_id: i64,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Add or delete notes
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum NoteCommand {
    /// Attach a note to a customer
    Add {
        #[arg(value_name = "CUSTOMER_ID")]
        customer_id: i64,

        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Customer the note belongs to (its details are refreshed)
        #[arg(long, value_name = "CUSTOMER_ID")]
        customer: i64,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Field overrides for `edit`; unset flags keep the current value
#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
}

impl FieldArgs {
    /// Type the given values into the form, leaving the rest as they are
    pub fn apply_to(&self, form: &mut CustomerForm) {
        let overrides = [
            (&self.first_name, &mut form.first_name),
            (&self.last_name, &mut form.last_name),
            (&self.email, &mut form.email),
            (&self.phone, &mut form.phone),
            (&self.company, &mut form.company),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
    }
}
