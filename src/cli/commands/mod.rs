pub mod config;
pub mod course;
pub mod prior;
pub mod scale;
pub mod system;
pub mod view;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command in help order.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        view::definitions(),
        course::definitions(),
        prior::definitions(),
        scale::definitions(),
        config::definitions(),
        system::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}
