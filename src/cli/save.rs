use serde_json::json;

use crate::board::rank_by_item;
use crate::error::HardtimesError;
use crate::models::ReportDraft;
use crate::output;
use crate::session::{SaveState, Session};

/// One-shot `board`: render the seeded community board and exit.
pub fn run_board(json_output: bool) -> i32 {
    let save = SaveState::seeded();
    let groups = rank_by_item(save.reports());
    if json_output {
        let mut data = output::json::board_json(&groups);
        data["reports_remaining"] = json!(save.remaining());
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(data)).unwrap()
        );
    } else {
        output::text::print_board(&groups);
    }
    0
}

pub fn shell_board(session: &Session, json_output: bool) {
    let groups = rank_by_item(session.save.reports());
    if json_output {
        let mut data = output::json::board_json(&groups);
        data["reports_remaining"] = json!(session.save.remaining());
        println!("{}", output::json::success(data));
    } else {
        output::text::print_board(&groups);
        println!(
            "\nYou have {} reports left this month.",
            session.save.remaining()
        );
    }
}

pub fn shell_report(
    session: &mut Session,
    draft: ReportDraft,
    json_output: bool,
) -> Result<(), HardtimesError> {
    let report = session.save.submit(draft)?.clone();
    let remaining = session.save.remaining();
    if json_output {
        println!(
            "{}",
            output::json::success(json!({
                "report": output::json::report_json(&report),
                "reports_remaining": remaining
            }))
        );
    } else {
        println!(
            "Report submitted: {} at {} for ${:.2}.",
            report.item, report.store, report.price
        );
        println!("You have {remaining} reports left this month.");
    }
    Ok(())
}

pub fn shell_where(session: &Session, json_output: bool) {
    if json_output {
        println!(
            "{}",
            output::json::success(json!({ "location": session.location }))
        );
    } else {
        println!("Current location: {}", session.location);
    }
}
