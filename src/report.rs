//! Human-readable summary of a finished `ralph run`.

use crate::exit_codes;

const RULE_WIDTH: usize = 50;

/// Classification of a loop exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    Complete,
    Failed,
    LimitExceeded,
    Interrupted,
    Unknown(i32),
}

impl LoopOutcome {
    pub fn from_exit_code(code: i32) -> Self {
        match code {
            exit_codes::LOOP_COMPLETE => Self::Complete,
            exit_codes::LOOP_FAILURE => Self::Failed,
            exit_codes::LOOP_LIMIT => Self::LimitExceeded,
            exit_codes::LOOP_INTERRUPTED => Self::Interrupted,
            other => Self::Unknown(other),
        }
    }

    /// Headline plus follow-up hints.
    pub fn summary_lines(self) -> Vec<String> {
        let lines: &[&str] = match self {
            Self::Complete => &[
                "SUCCESS: LOOP_COMPLETE - All tasks finished",
                "Check git log for commits made during execution.",
            ],
            Self::Failed => &[
                "FAILURE: Execution failed",
                "Check .ralph/ directory for logs and diagnostics.",
                "You may resume with: ralph run --continue",
            ],
            Self::LimitExceeded => &[
                "LIMIT: Iteration or time limit exceeded",
                "Partial progress may have been made.",
                "Resume with: ralph run --continue",
            ],
            Self::Interrupted => &[
                "INTERRUPTED: User cancelled execution",
                "Resume with: ralph run --continue",
            ],
            Self::Unknown(code) => return vec![format!("UNKNOWN: Exit code {}", code)],
        };
        lines.iter().map(|line| line.to_string()).collect()
    }
}

/// Summary lines for an exit code.
pub fn summary_lines(code: i32) -> Vec<String> {
    LoopOutcome::from_exit_code(code).summary_lines()
}

/// Print the framed summary for a loop exit code.
pub fn report_results(code: i32) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{}", rule);
    for line in summary_lines(code) {
        println!("{}", line);
    }
    println!("{}", rule);
}
