//! Interactive menu for the stability test console.
//!
//! Mirrors the workflow of the original test tool: a fixed numbered menu,
//! one entry per endpoint, plus the full suite and connection settings.

use colored::Colorize;
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::commands::{device, height, level, settings, status, suite, support};
use crate::config::ClientConfig;
use crate::{output, Result};

pub async fn run_shell() -> Result<()> {
    output::info("Stability API test console");
    output::info("Pick an operation by number, 0 to exit\n");

    let mut rl = DefaultEditor::new()?;
    let mut config = ClientConfig::load()?;

    loop {
        print_menu(&config);

        let Some(choice) = read_number(&mut rl, "option")? else {
            break;
        };

        let result = match choice {
            0 => break,
            1 => status::execute(status::StatusArgs { callback: false }).await,
            2 => device_action(&mut rl).await,
            3 => support_action(&mut rl).await,
            4 => height_action(&mut rl).await,
            5 => level_action(&mut rl).await,
            6 => status::execute(status::StatusArgs { callback: true }).await,
            7 => suite::execute(suite::SuiteArgs {}).await,
            8 => edit_settings(&mut rl, &mut config),
            _ => {
                output::warn("invalid option, pick a number from the menu");
                Ok(())
            }
        };

        if let Err(err) = result {
            output::error(&format!("Error: {err}"));
        }
    }

    output::info("Goodbye!");
    Ok(())
}

fn print_menu(config: &ClientConfig) {
    println!();
    println!("{}", "Stability API test console".bold());
    println!("{} {}", "server:".bold(), config.base_url());
    println!("1. System status          (/stability/system/status)");
    println!("2. Device state           (/stability/device/state)");
    println!("3. Support control        (/stability/support/control)");
    println!("4. Platform height        (/stability/platformHeight/control)");
    println!("5. Platform leveling      (/stability/platformHorizontal/control)");
    println!("6. Callback peer health   (/health)");
    println!("7. Run the full suite");
    println!("8. Edit connection settings");
    println!("0. Exit");
}

/// Read a menu choice. `Ok(None)` means end of input.
fn read_number(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<i64>> {
    loop {
        match rl.readline(&format!("{prompt}> ")) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match line.parse::<i64>() {
                    Ok(n) => return Ok(Some(n)),
                    Err(_) => output::warn("enter a number"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                output::info("Use 0 to exit");
            }
            Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Read one line; empty input yields `None`.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(&format!("{prompt}> ")) {
        Ok(line) => {
            let line = line.trim().to_string();
            if line.is_empty() {
                Ok(None)
            } else {
                Ok(Some(line))
            }
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

async fn device_action(rl: &mut DefaultEditor) -> Result<()> {
    println!("Available fields:");
    for chunk in device::AVAILABLE_FIELDS.chunks(4) {
        println!("  {}", chunk.join(", "));
    }
    println!("Comma-separate multiple fields; empty input requests all of them.");

    let fields = read_line(rl, "fields")?;

    device::execute(device::DeviceArgs {
        fields,
        format: device::OutputFormat::Json,
    })
    .await
}

async fn support_action(rl: &mut DefaultEditor) -> Result<()> {
    println!("1. rigid-support");
    println!("2. flexible-reset");
    println!("0. Back");

    let state = match read_number(rl, "support")? {
        Some(1) => support::SupportStateArg::RigidSupport,
        Some(2) => support::SupportStateArg::FlexibleReset,
        _ => return Ok(()),
    };

    support::execute(support::SupportArgs { state }).await
}

async fn height_action(rl: &mut DefaultEditor) -> Result<()> {
    println!("1. Platform 1 - raise");
    println!("2. Platform 1 - reset");
    println!("3. Platform 2 - raise");
    println!("4. Platform 2 - reset");
    println!("0. Back");

    let (platform, state) = match read_number(rl, "height")? {
        Some(1) => (1, height::HeightStateArg::Raise),
        Some(2) => (1, height::HeightStateArg::Reset),
        Some(3) => (2, height::HeightStateArg::Raise),
        Some(4) => (2, height::HeightStateArg::Reset),
        _ => return Ok(()),
    };

    height::execute(height::HeightArgs { platform, state }).await
}

async fn level_action(rl: &mut DefaultEditor) -> Result<()> {
    println!("1. Platform 1 - level");
    println!("2. Platform 1 - level-reset");
    println!("3. Platform 2 - level");
    println!("4. Platform 2 - level-reset");
    println!("0. Back");

    let (platform, state) = match read_number(rl, "level")? {
        Some(1) => (1, level::LevelStateArg::Level),
        Some(2) => (1, level::LevelStateArg::LevelReset),
        Some(3) => (2, level::LevelStateArg::Level),
        Some(4) => (2, level::LevelStateArg::LevelReset),
        _ => return Ok(()),
    };

    level::execute(level::LevelArgs { platform, state }).await
}

fn edit_settings(rl: &mut DefaultEditor, config: &mut ClientConfig) -> Result<()> {
    settings::show(config);
    println!("Enter new values; empty input keeps the current one.");

    if let Some(host) = read_line(rl, &format!("server host [{}]", config.server_host))? {
        config.server_host = host;
    }

    if let Some(value) = read_line(rl, &format!("server port [{}]", config.server_port))? {
        match value.parse() {
            Ok(port) => config.server_port = port,
            Err(_) => output::warn("not a valid port, keeping the current value"),
        }
    }

    if let Some(value) = read_line(rl, &format!("callback port [{}]", config.callback_port))? {
        match value.parse() {
            Ok(port) => config.callback_port = port,
            Err(_) => output::warn("not a valid port, keeping the current value"),
        }
    }

    if let Some(value) = read_line(rl, &format!("task id [{}]", config.task_id))? {
        match value.parse() {
            Ok(id) => config.task_id = id,
            Err(_) => output::warn("not a valid id, keeping the current value"),
        }
    }

    if let Some(value) = read_line(rl, &format!("defect id [{}]", config.defect_id))? {
        match value.parse() {
            Ok(id) => config.defect_id = id,
            Err(_) => output::warn("not a valid id, keeping the current value"),
        }
    }

    if let Some(value) = read_line(rl, &format!("timeout secs [{}]", config.timeout_secs))? {
        match value.parse() {
            Ok(secs) => config.timeout_secs = secs,
            Err(_) => output::warn("not a valid timeout, keeping the current value"),
        }
    }

    config.save()?;
    output::success("settings saved");

    Ok(())
}
