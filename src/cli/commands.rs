use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "hardtimes",
    version = VERSION,
    about = "Earn more and spend less: an AI side hustle coach plus a community price watch",
    after_help = "\
NOTE:
  State lives for one session and is never written to disk. Plan generation
  calls the Gemini API and needs GEMINI_API_KEY (exported, or in a .env file
  in the working directory). HARDTIMES_LAT/HARDTIMES_LON feed the location
  line on the save tab; anything else shows as access denied.

FREE TIER:
  One generated plan per session. Ten price reports per month.

EXIT CODES:
  0  Success
  1  Error (validation, free-tier limit, plan generation failure)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session (the default when no command is given)
    #[command(after_help = "\
SHELL COMMANDS:
  earn | save        switch tab
  generate           (earn) answer three prompts, get a coached plan
  plan               (earn) show the current plan and progress
  toggle <task-id>   (earn) flip one task's completion
  board              (save) ranked prices per item, cheapest first
  report             (save) submit a price report
  where              (save) show the location line
  help, quit

NOTE:
  With --json, prompts are suppressed and the forms read one answer per
  stdin line; every command answers with a single JSON envelope line.")]
    Shell {
        /// Tab to open on: earn or save
        #[arg(long, default_value = "earn")]
        tab: String,
    },

    /// One-shot: print the ranked community price board
    Board,

    /// One-shot: generate a side hustle plan from your profile
    Generate {
        /// Your skills (e.g. "graphic design, writing")
        #[arg(long)]
        skills: String,

        /// Time available (e.g. "5-10 hours a week")
        #[arg(long)]
        time: String,

        /// Constraints or resources (optional)
        #[arg(long, default_value = "")]
        constraints: String,
    },
}
