use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationError,
    PlanLimitReached,
    ReportLimitReached,
    PlanGenerationFailed,
    MissingApiKey,
    NoPlan,
    TabMismatch,
    UnknownCommand,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::PlanLimitReached => "PLAN_LIMIT_REACHED",
            Self::ReportLimitReached => "REPORT_LIMIT_REACHED",
            Self::PlanGenerationFailed => "PLAN_GENERATION_FAILED",
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::NoPlan => "NO_PLAN",
            Self::TabMismatch => "TAB_MISMATCH",
            Self::UnknownCommand => "UNKNOWN_COMMAND",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct HardtimesError {
    pub code: ErrorCode,
    pub message: String,
}

impl HardtimesError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn missing_inputs() -> Self {
        Self::new(
            ErrorCode::ValidationError,
            "Please fill in your skills and available time.",
        )
    }

    pub fn plan_limit() -> Self {
        Self::new(
            ErrorCode::PlanLimitReached,
            "Free users get one plan. Upgrade for unlimited ideas!",
        )
    }

    pub fn report_limit() -> Self {
        Self::new(
            ErrorCode::ReportLimitReached,
            "Free users can submit up to 10 reports per month.",
        )
    }

    pub fn plan_generation_failed() -> Self {
        Self::new(
            ErrorCode::PlanGenerationFailed,
            "Failed to generate a plan. The AI coach might be busy. Please try again later.",
        )
    }

    pub fn missing_api_key() -> Self {
        Self::new(
            ErrorCode::MissingApiKey,
            "GEMINI_API_KEY is not set. Add it to the environment or a .env file.",
        )
    }

    pub fn no_plan() -> Self {
        Self::new(ErrorCode::NoPlan, "No plan yet. Run `generate` first.")
    }

    pub fn tab_mismatch(command: &str, tab: &str) -> Self {
        Self::new(
            ErrorCode::TabMismatch,
            format!("`{command}` is a {tab} tab command. Switch with `{tab}`."),
        )
    }

    pub fn unknown_command(command: &str) -> Self {
        Self::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command: {command}. Try `help`."),
        )
    }
}
