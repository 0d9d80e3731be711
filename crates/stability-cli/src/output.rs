//! Output formatting utilities for the CLI

use colored::Colorize;
use comfy_table::Table;
use console::{style, Emoji};
use serde_json::Value;

use crate::api::{ApiReply, ReplyBody};

static INFO: Emoji = Emoji("ℹ️ ", "");
static SUCCESS: Emoji = Emoji("✅", "✓");
static WARNING: Emoji = Emoji("⚠️ ", "!");
static ERROR: Emoji = Emoji("❌", "x");

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style(INFO).blue(), message);
}

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style(SUCCESS).green(), message.green());
}

/// Print a warning message
pub fn warn(message: &str) {
    eprintln!("{} {}", style(WARNING).yellow(), message.yellow());
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style(ERROR).red(), message.red());
}

/// Print a header
pub fn header(title: &str) {
    println!("\n{}\n", title.bold().underline());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("{}: {}", key.bold(), value);
}

/// Print a step in a sequence
pub fn step(number: usize, total: usize, message: &str) {
    println!("[{}/{}] {}", number, total, message);
}

/// Print the raw status code and decoded body of an API reply.
pub fn reply(reply: &ApiReply) {
    let status = if reply.is_success() {
        reply.status.to_string().green().bold()
    } else {
        reply.status.to_string().red().bold()
    };
    println!("{}: {}", "status".bold(), status);

    match &reply.body {
        ReplyBody::Json(json) => match serde_json::to_string_pretty(json) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{json}"),
        },
        ReplyBody::Text(text) => println!("{text}"),
    }
}

/// Render a device-state JSON object as a field/value table.
///
/// Envelope fields come first, snapshot fields after, in wire order.
pub fn device_table(body: &Value) {
    let Some(obj) = body.as_object() else {
        println!("{body}");
        return;
    };

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);

    for (field, value) in obj {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        table.add_row(vec![field.clone(), rendered]);
    }

    println!("{table}");
}
