//! Core CLI dispatch, error reporting and session rendering helpers.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;
use tracing::{info, warn};

use cgpa_config::{Config, ConfigError, ConfigManager};
use cgpa_core::{
    format::{format_cgpa, format_input, format_number, position_label},
    CoreError, LedgerService, Session,
};
use cgpa_domain::{CourseId, GradingScale};

pub use crate::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};
use super::table::{Alignment, Table, TableColumn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Widest course name shown in the listing before clipping.
const NAME_COLUMN_WIDTH: usize = 32;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    path = %config_manager.config_path().display(),
                    error = %err,
                    "failed to load config, using defaults"
                );
                Config::default()
            }
        };

        let session = Session::new(config.default_scale);
        let context = ShellContext {
            mode,
            registry,
            session,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        };
        context.apply_output_preferences();
        info!(mode = ?mode, scale = %context.session.scale(), "shell ready");
        Ok(context)
    }

    pub(crate) fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain_output: self.config.plain_output,
            color_enabled: self.config.ui_color_enabled && self.mode == CliMode::Interactive,
        });
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    pub(crate) fn default_scale(&self) -> GradingScale {
        self.config.default_scale
    }

    pub(crate) fn precision(&self) -> usize {
        self.config.precision()
    }

    pub(crate) fn prompt(&self) -> String {
        format!(
            "cgpa[{}] {}> ",
            self.session.scale(),
            format_cgpa(self.session.result(), self.precision())
        )
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit calculator?", true)
            .map_err(|err| CliError::Command(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(CoreError::CourseNotFound(reference)) => {
                self.print_warning(&format!("No course matches `{}`.", reference));
                self.print_hint("Use `show` to list courses with their # positions.");
                Ok(())
            }
            CommandError::Core(err @ CoreError::GradeNotInScale { .. }) => {
                self.print_warning(&err.to_string());
                let allowed: Vec<&str> = self
                    .session
                    .selectable_grades()
                    .into_iter()
                    .map(|grade| grade.as_str())
                    .collect();
                self.print_hint(&format!("Choose one of: {}", allowed.join(", ")));
                Ok(())
            }
            CommandError::Io(err) => Err(CliError::Io(err)),
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    /// Resolves a `#` position or id prefix against the current ledger.
    pub(crate) fn resolve_course(&self, reference: &str) -> Result<CourseId, CommandError> {
        LedgerService::resolve(self.session.ledger(), reference).map_err(CommandError::from)
    }

    /// Starts over with one blank course and the configured default scale.
    pub(crate) fn reset_session(&mut self) {
        self.session = Session::new(self.default_scale());
        info!(scale = %self.session.scale(), "session reset");
    }

    pub(crate) fn print_result_line(&self) {
        let result = self.session.result();
        let value = format_cgpa(result, self.precision());
        if result.is_no_result() {
            output::result(format!("CGPA: {} (no units entered yet)", value));
        } else {
            output::result(format!("CGPA: {}", value));
        }
    }

    pub(crate) fn render_session(&self) {
        let view = self.session.view();
        output::section(format!("Courses ({} scale)", view.scale));

        if view.courses.is_empty() {
            cli_io::print_info("No courses. Use `add` to create one.");
        } else {
            let mut table = Table::new(vec![
                TableColumn::new("#", Alignment::Right),
                TableColumn::new("Course", Alignment::Left).max_width(NAME_COLUMN_WIDTH),
                TableColumn::new("Grade", Alignment::Left),
                TableColumn::new("Units", Alignment::Right),
                TableColumn::new("Points", Alignment::Right),
                TableColumn::new("Id", Alignment::Left),
            ]);
            for row in &view.courses {
                let grade = if row.grade_in_scale {
                    row.grade.to_string()
                } else {
                    format!("{}*", row.grade)
                };
                table.push_row(vec![
                    position_label(row.position),
                    row.name.clone(),
                    grade,
                    format_input(row.units),
                    format_number(row.quality_points),
                    row.id.short(),
                ]);
            }
            output::raw(table.render());

            if view.courses.iter().any(|row| !row.grade_in_scale) {
                cli_io::print_hint(format!(
                    "* not part of the {} scale; counts as 0 points until edited.",
                    view.scale
                ));
            }
        }

        output::raw(format!(
            "Prior points: {}   Prior units (TNU): {}",
            format_input(view.prior.points),
            format_input(view.prior.units)
        ));
        output::raw(format!(
            "Total points: {}   Total units: {}",
            format_number(view.breakdown.total_points),
            format_number(view.breakdown.total_units)
        ));
        self.print_result_line();
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str], home: &std::path::Path) -> Result<ShellContext, CliError> {
    let manager = ConfigManager::with_base_dir(home.to_path_buf())?;
    let mut app = ShellContext::with_config_manager(CliMode::Script, manager)?;
    for line in lines {
        match app.process_line(line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(app)
}
