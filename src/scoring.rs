use std::time::Duration;

/// Words per minute, rounded to the nearest integer.
///
/// Zero elapsed time yields 0 rather than an infinite rate.
pub fn words_per_minute(words: u32, elapsed: Duration) -> u32 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if minutes <= 0.0 {
        return 0;
    }
    (words as f64 / minutes).round() as u32
}

/// Time left in a round, never negative.
pub fn remaining(duration: Duration, elapsed: Duration) -> Duration {
    duration.saturating_sub(elapsed)
}

/// Whole seconds while at least five remain, hundredths after that.
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.as_secs_f64();
    if secs < 5.0 {
        format!("{secs:.2}")
    } else {
        format!("{}", secs.floor() as u64)
    }
}

/// Below this the countdown is drawn as a warning.
pub const WARNING_THRESHOLD: Duration = Duration::from_secs(10);

pub fn is_warning(remaining: Duration) -> bool {
    remaining < WARNING_THRESHOLD
}
