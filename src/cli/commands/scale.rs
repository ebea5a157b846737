use cgpa_domain::GradingScale;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "scale",
            "Show or switch the grading scale",
            "scale [five|four]",
            cmd_scale,
        ),
        CommandEntry::new(
            "reset",
            "Start over with one blank course and no prior totals",
            "reset",
            cmd_reset,
        ),
    ]
}

fn cmd_scale(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(label) = args.first() else {
        describe_scale(context.session.scale());
        return Ok(());
    };

    let scale = GradingScale::from_label(label).ok_or_else(|| {
        CommandError::InvalidArguments(format!(
            "unknown scale `{}`; use `five` or `four`",
            label
        ))
    })?;

    if context.session.set_grading_scale(scale) {
        io::print_success(format!("Switched to the {} scale.", scale));
        let stale = context
            .session
            .ledger()
            .iter()
            .filter(|entry| !scale.contains(entry.grade))
            .count();
        if stale > 0 {
            io::print_hint(format!(
                "{} course(s) hold a grade outside this scale and count as 0 points.",
                stale
            ));
        }
    } else {
        io::print_info(format!("Already using the {} scale.", scale));
    }
    context.print_result_line();
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.can_prompt()
        && !io::confirm_action(&context.theme, "Discard all courses and prior totals?", false)?
    {
        io::print_info("Operation cancelled.");
        return Ok(());
    }
    context.reset_session();
    io::print_success("Session reset.");
    context.print_result_line();
    Ok(())
}

fn describe_scale(scale: GradingScale) {
    let mapping: Vec<String> = scale
        .symbols()
        .into_iter()
        .filter_map(|grade| scale.points(grade).map(|points| format!("{}={}", grade, points)))
        .collect();
    io::print_info(format!("Active scale: {} ({})", scale, mapping.join(", ")));
}
