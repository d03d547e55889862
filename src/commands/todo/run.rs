//! Implements the `todo` command family: add, list, remove.

use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::warn;

use super::ui;
use crate::constants::MENU_PAGE_SIZE;
use crate::ui::menu::{self, ListMenu};
use crate::{database, AppState};

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    match args.split_first() {
        Some((&"add", rest)) if !rest.is_empty() => {
            add(ctx, msg, &app_state, &rest.join(" ")).await
        }
        Some((&"list", _)) => list(ctx, msg, &app_state).await,
        Some((&"remove", rest)) if !rest.is_empty() => remove(ctx, msg, &app_state, rest).await,
        _ => {
            msg.reply(
                &ctx.http,
                "Usage: `todo add <task>` | `todo list` | `todo remove <n> [n ...]`",
            )
            .await
            .ok();
        }
    }
}

async fn add(ctx: &Context, msg: &Message, app_state: &AppState, task: &str) {
    if let Err(err) =
        database::todos::add_todo(&app_state.db, msg.author.id, task, &msg.link()).await
    {
        warn!(error = %err, "failed to insert todo");
        msg.reply(&ctx.http, "Could not save that task.").await.ok();
        return;
    }
    let builder = CreateMessage::new()
        .embed(ui::added_embed(task, &msg.author))
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}

async fn list(ctx: &Context, msg: &Message, app_state: &AppState) {
    let todos = match database::todos::list_todos(&app_state.db, msg.author.id).await {
        Ok(todos) => todos,
        Err(err) => {
            warn!(error = %err, "failed to fetch todos");
            return;
        }
    };
    // A menu may not be built over zero rows; short-circuit instead.
    if todos.is_empty() {
        msg.reply(&ctx.http, "You have nothing on your todo list.")
            .await
            .ok();
        return;
    }
    let items: Vec<String> = todos
        .iter()
        .map(|todo| format!("[{}]({})", todo.task, todo.jump_url))
        .collect();
    let Ok(list_menu) = ListMenu::new(items, MENU_PAGE_SIZE) else {
        return;
    };
    let title = format!("{}'s todo list", msg.author.name);
    menu::run(ctx, msg.channel_id, msg.author.id, list_menu, &title)
        .await
        .ok();
}

async fn remove(ctx: &Context, msg: &Message, app_state: &AppState, numbers: &[&str]) {
    let parsed: Result<Vec<i64>, _> = numbers.iter().map(|raw| raw.parse::<i64>()).collect();
    let Ok(numbers) = parsed else {
        msg.reply(&ctx.http, "Invalid task number provided.")
            .await
            .ok();
        return;
    };

    let todos = match database::todos::list_todos(&app_state.db, msg.author.id).await {
        Ok(todos) => todos,
        Err(err) => {
            warn!(error = %err, "failed to fetch todos");
            return;
        }
    };
    // Validate the whole batch before deleting anything.
    if numbers
        .iter()
        .any(|&n| n < 1 || n as usize > todos.len())
    {
        msg.reply(&ctx.http, "You can't remove a task you don't have.")
            .await
            .ok();
        return;
    }

    let doomed: Vec<&crate::database::models::TodoEntry> = numbers
        .iter()
        .map(|&n| &todos[n as usize - 1])
        .collect();
    let ids: Vec<i64> = doomed.iter().map(|todo| todo.todo_id).collect();
    if let Err(err) = database::todos::remove_todos(&app_state.db, msg.author.id, &ids).await {
        warn!(error = %err, "failed to delete todos");
        msg.reply(&ctx.http, "Could not remove those tasks.")
            .await
            .ok();
        return;
    }

    let builder = CreateMessage::new()
        .embed(ui::removed_embed(&doomed, &msg.author))
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
