mod collector;
mod request;
mod streaks;
mod sweep;

pub use request::Hit;
pub use request::Op;
pub use request::Predicate;
pub use request::ScanOutcome;
pub use request::ScanRequest;
pub use request::ScanSummary;
pub use streaks::PickMode;
pub use streaks::Streak;
pub use streaks::StreakOutcome;
pub use streaks::StreakRequest;
pub use streaks::StreakScan;
pub use sweep::CancelToken;
pub use sweep::Sweep;
