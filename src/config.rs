/// Environment variable that switches the scheduler into strict mode.
pub const STRICT_ENV: &str = "CREWPLAN_STRICT";

/// Scheduler behaviour knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Report unknown ids as errors instead of ignoring them.
    pub strict: bool,
}

impl SchedulerConfig {
    pub fn strict() -> Self {
        SchedulerConfig { strict: true }
    }

    /// Reads `CREWPLAN_STRICT`. Accepts `1`, `true` or `yes` in any case.
    pub fn from_env() -> Self {
        let strict = std::env::var(STRICT_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        SchedulerConfig { strict }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
