use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use cgpa_domain::GradeSymbol;

use crate::cli::core::CommandError;
use crate::cli::output;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Offers `choices` in a picker and returns the chosen grade, or `None` when
/// the user cancels with Esc.
pub fn select_grade(
    theme: &ColorfulTheme,
    prompt: &str,
    choices: &[GradeSymbol],
    current: Option<GradeSymbol>,
) -> Result<Option<GradeSymbol>, CommandError> {
    let labels: Vec<&str> = choices.iter().map(|grade| grade.as_str()).collect();
    let default = current
        .and_then(|grade| choices.iter().position(|choice| *choice == grade))
        .unwrap_or(0);
    let picked = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact_opt()
        .map_err(CommandError::from)?;
    Ok(picked.and_then(|index| choices.get(index).copied()))
}
