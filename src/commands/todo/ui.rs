//! Embed builders for the `todo` command family.

use serenity::builder::CreateEmbed;
use serenity::model::user::User;

use crate::database::models::TodoEntry;
use crate::ui::style;

pub fn added_embed(task: &str, author: &User) -> CreateEmbed {
    style::stamp(
        CreateEmbed::new()
            .title("Added to your todo list")
            .description(task.to_string())
            .color(style::COLOR_SUCCESS),
        author,
    )
}

pub fn removed_embed(removed: &[&TodoEntry], author: &User) -> CreateEmbed {
    let lines: Vec<String> = removed
        .iter()
        .map(|todo| format!("`{}` - {}", todo.row_number, todo.task))
        .collect();
    let noun = if removed.len() == 1 { "task" } else { "tasks" };
    style::stamp(
        CreateEmbed::new()
            .title(format!("Removed {} {noun}:", removed.len()))
            .description(lines.join("\n"))
            .color(style::COLOR_SUCCESS),
        author,
    )
}
