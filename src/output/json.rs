use serde_json::{json, Value};

use crate::board::ItemGroup;
use crate::error::HardtimesError;
use crate::models::{Plan, PriceReport, Task};

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &HardtimesError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_json(t: &Task) -> Value {
    json!({
        "id": t.id,
        "description": t.description,
        "completed": t.completed
    })
}

pub fn plan_json(p: &Plan) -> Value {
    json!({
        "idea": p.idea,
        "tasks": p.tasks.iter().map(task_json).collect::<Vec<_>>(),
        "progress": {
            "completed": p.completed_count(),
            "total": p.tasks.len(),
            "percentage": (p.progress() * 10.0).round() / 10.0
        }
    })
}

pub fn report_json(r: &PriceReport) -> Value {
    let mut v = json!({
        "id": r.id,
        "item": r.item,
        "price": r.price,
        "store": r.store,
        "distance_km": r.distance_km,
        "reported_at": r.reported_at
    });
    if let Some(ref photo) = r.photo {
        v["photo"] = json!(photo);
    }
    v
}

pub fn group_json(g: &ItemGroup) -> Value {
    json!({
        "item": g.item,
        "total": g.reports.len(),
        "visible": g.visible().iter().map(report_json).collect::<Vec<_>>(),
        "locked": g.locked_count()
    })
}

pub fn board_json(groups: &[ItemGroup]) -> Value {
    json!({
        "groups": groups.iter().map(group_json).collect::<Vec<_>>()
    })
}
