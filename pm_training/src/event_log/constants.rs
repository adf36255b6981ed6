/// Symbol of the artificial start activity prepended to every trace before discovery.
///
/// Never appears in a raw log; see [`SimpleEventLog::augment`](super::simple_log::SimpleEventLog::augment).
pub const START_ACTIVITY: &str = "I";

/// Symbol of the artificial end activity appended to every trace before discovery.
///
/// Never appears in a raw log; see [`SimpleEventLog::augment`](super::simple_log::SimpleEventLog::augment).
pub const END_ACTIVITY: &str = "O";
