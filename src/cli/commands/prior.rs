use cgpa_core::format::format_input;
use cgpa_domain::NumericInput;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "prior [points <value>|units <value>|clear]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "prior",
        "Show or set previously earned points and units (TNU)",
        USAGE,
        cmd_prior,
    )]
}

fn cmd_prior(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        show_prior(context);
        return Ok(());
    };
    let raw = args.get(1).copied().unwrap_or("");

    match action.to_lowercase().as_str() {
        "points" | "tgp" => {
            let value = NumericInput::parse_lenient(raw);
            context.session.set_prior_points(value);
            report_value("Prior points", raw, value);
        }
        "units" | "tnu" => {
            let value = NumericInput::parse_lenient(raw);
            context.session.set_prior_units(value);
            report_value("Prior units", raw, value);
        }
        "clear" => {
            context.session.set_prior_points(NumericInput::Unset);
            context.session.set_prior_units(NumericInput::Unset);
            io::print_success("Prior totals cleared.");
        }
        "show" => {
            show_prior(context);
            return Ok(());
        }
        _ => return Err(CommandError::InvalidArguments(format!("usage: {}", USAGE))),
    }

    context.print_result_line();
    Ok(())
}

fn show_prior(context: &ShellContext) {
    let prior = context.session.prior();
    io::print_info(format!("Prior points: {}", format_input(prior.points)));
    io::print_info(format!("Prior units (TNU): {}", format_input(prior.units)));
}

fn report_value(label: &str, raw: &str, value: NumericInput) {
    if value.is_unset() && !raw.trim().is_empty() {
        io::print_warning(format!("`{}` is not a number; {} left blank.", raw, label.to_lowercase()));
    } else {
        io::print_success(format!("{} set to {}.", label, format_input(value)));
    }
}
