use crate::error::HardtimesError;
use crate::models::Plan;

/// State owned by the Earn tab: the live plan and the free-tier allowance.
#[derive(Debug, Default)]
pub struct EarnState {
    plan: Option<Plan>,
    plan_generated: bool,
}

impl EarnState {
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn current_plan(&self) -> Result<&Plan, HardtimesError> {
        self.plan.as_ref().ok_or_else(HardtimesError::no_plan)
    }

    /// Err once the one-plan-per-session allowance has been used.
    pub fn ensure_can_generate(&self) -> Result<(), HardtimesError> {
        if self.plan_generated {
            return Err(HardtimesError::plan_limit());
        }
        Ok(())
    }

    /// Install a freshly generated plan, consuming the allowance.
    pub fn install_plan(&mut self, plan: Plan) {
        self.plan = Some(plan);
        self.plan_generated = true;
    }

    /// Toggle one task. `Ok(true)` when a task matched, `Ok(false)` for the
    /// documented no-op on an unknown id, `Err` when no plan exists yet.
    pub fn toggle_task(&mut self, task_id: usize) -> Result<bool, HardtimesError> {
        let plan = self.plan.as_ref().ok_or_else(HardtimesError::no_plan)?;
        let matched = plan.task(task_id).is_some();
        self.plan = Some(plan.with_task_toggled(task_id));
        Ok(matched)
    }
}
