//! Central timing and sizing constants for the interaction core.

/// Default window for a yes/no confirmation prompt.
pub const CONFIRM_TIMEOUT_SECS: u64 = 15;
/// How long a dismissable message listens for its dismiss reaction.
pub const DISMISS_TIMEOUT_SECS: u64 = 120;
/// Lifetime of a paginated menu session.
pub const MENU_TIMEOUT_SECS: u64 = 180;
/// Rows per menu page.
pub const MENU_PAGE_SIZE: usize = 10;

/// Interval for sweeping stock positions that were sold down to zero.
pub const POSITION_SWEEP_INTERVAL_SECS: u64 = 12 * 60 * 60;
