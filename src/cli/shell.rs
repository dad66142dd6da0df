use std::io::{self, BufRead, Write};

use serde_json::json;
use tracing::debug;

use crate::cli::{earn, save};
use crate::error::HardtimesError;
use crate::models::ReportDraft;
use crate::output;
use crate::session::{Session, Tab};

enum Outcome {
    Continue,
    Quit,
}

/// Interactive session loop. One process run is one session; every piece of
/// state dies when this returns.
pub async fn run(tab: Tab, json_output: bool) -> i32 {
    let mut session = Session::new(tab);
    debug!("session started on the {} tab", session.tab.as_str());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    if !json_output {
        println!("Hard Times Toolkit - your guide to earning more and spending less.");
        println!("Tabs: earn, save. `help` lists commands, `quit` leaves.");
    }

    loop {
        if !json_output {
            print!("({})> ", session.tab.as_str());
            let _ = io::stdout().flush();
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(_)) | None => break,
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        match dispatch(&mut session, &mut lines, &line, json_output).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Quit) => break,
            Err(e) => print_error(&e, json_output),
        }
    }

    if !json_output {
        println!("Stay resilient.");
    }
    0
}

async fn dispatch<I>(
    session: &mut Session,
    lines: &mut I,
    line: &str,
    json_output: bool,
) -> Result<Outcome, HardtimesError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let arg = words.next();

    match command {
        "earn" => {
            session.tab = Tab::Earn;
            print_tab(session, json_output);
        }
        "save" => {
            session.tab = Tab::Save;
            print_tab(session, json_output);
        }
        "help" => print_help(json_output),
        "quit" | "exit" => return Ok(Outcome::Quit),

        "generate" => {
            require_tab(session, Tab::Earn, "generate")?;
            session.earn.ensure_can_generate()?;
            let skills = read_field(lines, "Your skills", json_output)?;
            let time = read_field(lines, "Time available", json_output)?;
            let constraints = read_field(lines, "Constraints or resources (optional)", json_output)?;
            earn::shell_generate(session, &skills, &time, &constraints, json_output).await?;
        }
        "plan" => {
            require_tab(session, Tab::Earn, "plan")?;
            earn::shell_plan(session, json_output)?;
        }
        "toggle" => {
            require_tab(session, Tab::Earn, "toggle")?;
            let task_id = arg
                .ok_or_else(|| {
                    HardtimesError::validation("toggle needs a task id, e.g. `toggle 2`.")
                })?
                .parse()
                .map_err(|_| HardtimesError::validation("Task id must be a number."))?;
            earn::shell_toggle(session, task_id, json_output)?;
        }

        "board" => {
            require_tab(session, Tab::Save, "board")?;
            save::shell_board(session, json_output);
        }
        "report" => {
            require_tab(session, Tab::Save, "report")?;
            if session.save.remaining() == 0 {
                return Err(HardtimesError::report_limit());
            }
            let draft = read_report_form(lines, json_output)?;
            save::shell_report(session, draft, json_output)?;
        }
        "where" => {
            require_tab(session, Tab::Save, "where")?;
            save::shell_where(session, json_output);
        }

        other => return Err(HardtimesError::unknown_command(other)),
    }
    Ok(Outcome::Continue)
}

fn require_tab(session: &Session, tab: Tab, command: &str) -> Result<(), HardtimesError> {
    if session.tab == tab {
        Ok(())
    } else {
        Err(HardtimesError::tab_mismatch(command, tab.as_str()))
    }
}

fn read_field<I>(lines: &mut I, label: &str, json_output: bool) -> Result<String, HardtimesError>
where
    I: Iterator<Item = io::Result<String>>,
{
    if !json_output {
        print!("{label}: ");
        let _ = io::stdout().flush();
    }
    match lines.next() {
        Some(Ok(line)) => Ok(line.trim().to_string()),
        Some(Err(_)) | None => Err(HardtimesError::validation(
            "Input ended before the form was complete.",
        )),
    }
}

fn read_report_form<I>(lines: &mut I, json_output: bool) -> Result<ReportDraft, HardtimesError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let item = read_field(lines, "Item name", json_output)?;
    let price_text = read_field(lines, "Price ($)", json_output)?;
    let store = read_field(lines, "Store", json_output)?;
    let distance_text = read_field(lines, "Distance in km (blank = estimate)", json_output)?;
    let photo_text = read_field(lines, "Photo path (optional)", json_output)?;

    let price = price_text
        .parse()
        .map_err(|_| HardtimesError::validation("Price must be a number like 2.99."))?;
    let distance_km = if distance_text.is_empty() {
        None
    } else {
        Some(distance_text.parse().map_err(|_| {
            HardtimesError::validation("Distance must be a number of kilometers.")
        })?)
    };
    let photo = if photo_text.is_empty() {
        None
    } else {
        Some(photo_text)
    };

    Ok(ReportDraft {
        item,
        price,
        store,
        distance_km,
        photo,
    })
}

fn print_tab(session: &Session, json_output: bool) {
    if json_output {
        println!(
            "{}",
            output::json::success(json!({ "tab": session.tab.as_str() }))
        );
    } else {
        match session.tab {
            Tab::Earn => println!("Earn: tell the coach about yourself, get a plan."),
            Tab::Save => {
                println!("Save: community price watch. Current location: {}", session.location);
            }
        }
    }
}

fn print_help(json_output: bool) {
    const COMMANDS: [&str; 10] = [
        "earn", "save", "generate", "plan", "toggle", "board", "report", "where", "help", "quit",
    ];
    if json_output {
        println!(
            "{}",
            output::json::success(json!({ "commands": COMMANDS }))
        );
    } else {
        println!("Commands:");
        println!("  earn | save        switch tab");
        println!("  generate           (earn) answer three prompts, get a coached plan");
        println!("  plan               (earn) show the current plan and progress");
        println!("  toggle <task-id>   (earn) flip one task's completion");
        println!("  board              (save) ranked prices per item, cheapest first");
        println!("  report             (save) submit a price report");
        println!("  where              (save) show the location line");
        println!("  help, quit");
    }
}

fn print_error(err: &HardtimesError, json_output: bool) {
    if json_output {
        println!("{}", output::json::error(err));
    } else {
        eprintln!("Error: {}", err.message);
    }
}
