use cgpa_core::{
    format::{format_input, position_label},
    public_api::{api_remove_course, api_update_course},
};
use cgpa_domain::{CourseField, CourseId, CourseUpdate, Displayable, NumericInput};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Append a course with the top grade and no units",
            "add [name]",
            cmd_add,
        ),
        CommandEntry::new(
            "remove",
            "Remove a course",
            "remove <#|id>",
            cmd_remove,
        )
        .with_aliases(&["rm"]),
        CommandEntry::new(
            "name",
            "Rename a course (no name clears it)",
            "name <#|id> [text]",
            cmd_name,
        ),
        CommandEntry::new(
            "grade",
            "Set a course grade from the active scale",
            "grade <#|id> [A|B|C|D|E|F]",
            cmd_grade,
        ),
        CommandEntry::new(
            "units",
            "Set course credit units (blank or non-numeric clears them)",
            "units <#|id> [value]",
            cmd_units,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = context.session.add_course();
    if !args.is_empty() {
        context
            .session
            .update_course(id, CourseUpdate::Name(args.join(" ")));
    }
    io::print_success(format!(
        "Added course {} ({}).",
        course_label(context, id),
        id.short()
    ));
    context.print_result_line();
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = required_reference(args, "remove <#|id>")?;
    let label = context
        .resolve_course(reference)
        .ok()
        .and_then(|id| context.session.ledger().get(id))
        .map(|entry| entry.display_label());
    let id = api_remove_course(&mut context.session, reference)?;
    io::print_success(format!(
        "Removed course {} {}.",
        id.short(),
        label.unwrap_or_default()
    ));
    if context.session.ledger().is_empty() {
        io::print_hint("No courses left. Use `add` to start again.");
    }
    context.print_result_line();
    Ok(())
}

fn cmd_name(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = required_reference(args, "name <#|id> [text]")?;
    let name = args[1..].join(" ");
    let id = api_update_course(&mut context.session, reference, CourseField::Name, &name)?;
    if name.is_empty() {
        io::print_success(format!("Cleared name of course {}.", course_label(context, id)));
    } else {
        io::print_success(format!(
            "Course {} is now `{}`.",
            course_label(context, id),
            name
        ));
    }
    Ok(())
}

fn cmd_grade(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = required_reference(args, "grade <#|id> [A|B|C|D|E|F]")?;

    let id = match args.get(1) {
        Some(symbol) => {
            api_update_course(&mut context.session, reference, CourseField::Grade, symbol)?
        }
        None => {
            if !context.can_prompt() {
                return Err(CommandError::InvalidArguments(
                    "usage: grade <#|id> <symbol>".into(),
                ));
            }
            let id = context.resolve_course(reference)?;
            let current = context.session.ledger().get(id).map(|entry| entry.grade);
            let choices = context.session.selectable_grades();
            match io::select_grade(&context.theme, "Select grade", &choices, current)? {
                Some(grade) => {
                    context.session.update_course(id, CourseUpdate::Grade(grade));
                    id
                }
                None => {
                    io::print_info("Operation cancelled.");
                    return Ok(());
                }
            }
        }
    };

    if let Some(entry) = context.session.ledger().get(id) {
        io::print_success(format!(
            "Course {} graded {}.",
            course_label(context, id),
            entry.grade
        ));
    }
    context.print_result_line();
    Ok(())
}

fn cmd_units(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = required_reference(args, "units <#|id> [value]")?;
    let raw = args.get(1).copied().unwrap_or("");
    let id = api_update_course(&mut context.session, reference, CourseField::Units, raw)?;

    let units = context
        .session
        .ledger()
        .get(id)
        .map(|entry| entry.units)
        .unwrap_or_default();
    if units == NumericInput::Unset && !raw.trim().is_empty() {
        io::print_warning(format!("`{}` is not a number; units left blank.", raw));
    } else {
        io::print_success(format!(
            "Course {} carries {} unit(s).",
            course_label(context, id),
            format_input(units)
        ));
    }
    context.print_result_line();
    Ok(())
}

fn required_reference<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CommandError> {
    args.first()
        .copied()
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {}", usage)))
}

fn course_label(context: &ShellContext, id: CourseId) -> String {
    context
        .session
        .ledger()
        .position(id)
        .map(|index| format!("#{}", position_label(index + 1)))
        .unwrap_or_else(|| id.short())
}
