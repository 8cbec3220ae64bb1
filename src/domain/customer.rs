// src/domain/customer.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{timestamp, DomainError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Only populated by the single-customer read
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }

    pub fn company(&self) -> Option<&str> {
        non_empty(self.company.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub customer_id: i64,
    pub content: String,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body of create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

/// Raw text of the customer form fields as the page holds them.
///
/// `id` is the hidden field: empty in create mode, the customer id in edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl CustomerForm {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            company: customer.company.clone().unwrap_or_default(),
        }
    }

    pub fn missing_required(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email]
            .iter()
            .any(|field| field.trim().is_empty())
    }

    /// `None` selects create, `Some(id)` selects update of that customer
    pub fn customer_id(&self) -> Result<Option<i64>, DomainError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Ok(None);
        }
        id.parse::<i64>()
            .map(Some)
            .map_err(|_| DomainError::Validation("Invalid customer id".to_string()))
    }

    pub fn payload(&self) -> CustomerPayload {
        CustomerPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
