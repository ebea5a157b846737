use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "show",
            "List courses, prior totals and the CGPA",
            "show [--json]",
            cmd_show,
        )
        .with_aliases(&["ls"]),
        CommandEntry::new("cgpa", "Print the current CGPA", "cgpa", cmd_cgpa),
    ]
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None => {
            context.render_session();
            Ok(())
        }
        Some("--json") | Some("json") => {
            let json = serde_json::to_string_pretty(&context.session.view())?;
            output::raw(json);
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown option `{}`; usage: show [--json]",
            other
        ))),
    }
}

fn cmd_cgpa(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.print_result_line();
    Ok(())
}
