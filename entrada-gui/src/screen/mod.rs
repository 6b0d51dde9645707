pub mod login;
pub mod register;

use std::time::Duration;

/// Fixed duration of the simulated network call. It cannot be
/// interrupted once started.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Period of the tick animating the loading indicator while a
/// submission is in flight.
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(50);
