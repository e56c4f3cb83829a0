//! Console formatting for goals and the goal form

use colored::Colorize;
use inorbit_domain::{Goal, GoalField, GoalForm};

/// Formats goals and form state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One-line summary of a goal
    pub fn goal(goal: &Goal) -> String {
        format!(
            "{} {} ({}x na semana) [{}]",
            "•".cyan(),
            goal.title.as_str().bold(),
            goal.desired_weekly_frequency,
            goal.id
        )
    }

    /// Inline errors of the form, one per line, in field order
    pub fn form_errors(form: &GoalForm) -> String {
        [GoalField::Title, GoalField::DesiredWeeklyFrequency]
            .into_iter()
            .filter_map(|field| {
                form.error(field)
                    .map(|message| format!("  {}: {}", field, message.red()))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The weekly frequency selector with the current choice marked
    pub fn frequency_options(form: &GoalForm) -> String {
        let mut output = format!("{}\n", "Quantas vezes na semana?".cyan().bold());
        for option in form.frequency_options() {
            let marker = if option.selected { "(•)" } else { "( )" };
            output.push_str(&format!("  {} {}\n", marker, option.label));
        }
        output
    }
}
