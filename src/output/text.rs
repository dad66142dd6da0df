use crate::board::ItemGroup;
use crate::models::Plan;

pub fn print_plan(plan: &Plan) {
    println!("Your side hustle idea: {}", plan.idea);
    if !plan.tasks.is_empty() {
        println!("\nStarter plan:");
        for task in &plan.tasks {
            let mark = if task.completed { "x" } else { " " };
            println!("  [{mark}] {} - {}", task.id, task.description);
        }
    }
    println!();
    print_progress(plan);
}

pub fn print_progress(plan: &Plan) {
    println!(
        "Progress: {:.0}% ({}/{})",
        plan.progress(),
        plan.completed_count(),
        plan.tasks.len()
    );
}

pub fn print_board(groups: &[ItemGroup]) {
    if groups.is_empty() {
        println!("No reports yet.");
        return;
    }
    println!("Cheapest essentials nearby:");
    for group in groups {
        println!("\n{}", group.item);
        for (rank, report) in group.visible().iter().enumerate() {
            let marker = if rank == 0 { "*" } else { " " };
            println!(
                "  {marker} {} - ${:.2} ({:.1} km away)",
                report.store, report.price, report.distance_km
            );
        }
        if group.locked_count() > 0 {
            println!(
                "    Upgrade to Pro to see all {} results",
                group.reports.len()
            );
        }
    }
}
