use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

#[allow(unused_macros)]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub(crate) use current_location;

/// Returns true if the call site `loc` has not logged in the last `seconds`, and records
/// the current time for it if so.
pub fn should_log(loc: String, seconds: u64) -> bool {
    let mut last_log = LAST_LOG
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if last_log
        .get(&loc)
        .is_none_or(|then| then.elapsed().as_secs() >= seconds)
    {
        last_log.insert(loc, Instant::now());
        true
    } else {
        false
    }
}

#[macro_export]
macro_rules! info_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        if $crate::util::log::should_log($crate::util::log::current_location!(), $seconds) {
            $crate::core::prelude::info!($($args),+);
        }
    }
}
#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        if $crate::util::log::should_log($crate::util::log::current_location!(), $seconds) {
            $crate::core::prelude::warn!($($args),+);
        }
    }
}
