// src/application/interaction.rs
use crate::domain::NotifyKind;

/// Surfaces the outcome of a user action
pub trait Notifier {
    fn notify(&mut self, kind: NotifyKind, message: &str);
}

/// Interactive yes/no step in front of destructive actions
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}
