use serde_json::json;

use crate::ai::PlanClient;
use crate::error::HardtimesError;
use crate::models::Plan;
use crate::output;
use crate::session::Session;

/// One-shot `generate`: a fresh session that requests a single plan.
pub async fn run_generate(skills: &str, time: &str, constraints: &str, json_output: bool) -> i32 {
    match generate_plan(skills, time, constraints).await {
        Ok(plan) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "plan": output::json::plan_json(&plan)
                    })))
                    .unwrap()
                );
            } else {
                output::text::print_plan(&plan);
            }
            0
        }
        Err(e) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::error(&e)).unwrap()
                );
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

pub async fn generate_plan(
    skills: &str,
    time: &str,
    constraints: &str,
) -> Result<Plan, HardtimesError> {
    if skills.trim().is_empty() || time.trim().is_empty() {
        return Err(HardtimesError::missing_inputs());
    }
    let client = PlanClient::from_env()?;
    client.generate_plan(skills, time, constraints).await
}

pub async fn shell_generate(
    session: &mut Session,
    skills: &str,
    time: &str,
    constraints: &str,
    json_output: bool,
) -> Result<(), HardtimesError> {
    let plan = generate_plan(skills, time, constraints).await?;
    session.earn.install_plan(plan);

    let plan = session.earn.current_plan()?;
    if json_output {
        println!(
            "{}",
            output::json::success(json!({ "plan": output::json::plan_json(plan) }))
        );
    } else {
        println!("Your plan is ready!\n");
        output::text::print_plan(plan);
        println!("\nFree users get one plan. Upgrade for unlimited ideas!");
    }
    Ok(())
}

pub fn shell_plan(session: &Session, json_output: bool) -> Result<(), HardtimesError> {
    let plan = session.earn.current_plan()?;
    if json_output {
        println!(
            "{}",
            output::json::success(json!({ "plan": output::json::plan_json(plan) }))
        );
    } else {
        output::text::print_plan(plan);
    }
    Ok(())
}

pub fn shell_toggle(
    session: &mut Session,
    task_id: usize,
    json_output: bool,
) -> Result<(), HardtimesError> {
    let matched = session.earn.toggle_task(task_id)?;
    let plan = session.earn.current_plan()?;
    if json_output {
        println!(
            "{}",
            output::json::success(json!({
                "plan": output::json::plan_json(plan),
                "matched": matched
            }))
        );
    } else {
        if !matched {
            println!("No task {task_id} in this plan.");
        }
        output::text::print_plan(plan);
    }
    Ok(())
}
