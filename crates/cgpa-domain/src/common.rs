//! Shared traits for entities tracked by the course ledger.

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
