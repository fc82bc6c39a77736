//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every fetch dispatched and every response applied.
    pub log_fetch: bool,

    /// Log responses dropped because a newer request superseded them.
    pub log_stale_responses: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Range selector clicks and shortcuts
    pub log_selection: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_stale_responses: true,
    log_selection: false,
    log_performance: false,
};
