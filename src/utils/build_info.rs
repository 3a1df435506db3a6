/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    pub fn is_dirty(&self) -> bool {
        self.git_status == "dirty"
    }

    /// One-line form used in the startup log, e.g. `0.1.0 (abc1234-dirty, release)`.
    pub fn summary(&self) -> String {
        let dirty = if self.is_dirty() { "-dirty" } else { "" };
        format!(
            "{} ({}{}, {})",
            self.version, self.git_hash, dirty, self.profile
        )
    }
}

const UNKNOWN: &str = "unknown";

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("PAYDAY_BUDGET_BUILD_HASH").unwrap_or(UNKNOWN),
        git_status: option_env!("PAYDAY_BUDGET_BUILD_STATUS").unwrap_or(UNKNOWN),
        timestamp: option_env!("PAYDAY_BUDGET_BUILD_TIMESTAMP").unwrap_or(UNKNOWN),
        target: option_env!("PAYDAY_BUDGET_BUILD_TARGET").unwrap_or(UNKNOWN),
        profile: option_env!("PAYDAY_BUDGET_BUILD_PROFILE").unwrap_or(UNKNOWN),
        rustc: option_env!("PAYDAY_BUDGET_BUILD_RUSTC").unwrap_or(UNKNOWN),
    }
}
