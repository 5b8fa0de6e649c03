use std::time::Duration;

/// Value of the `Access-Control-Max-Age` response header.
///
/// Whole seconds are rendered as an integer (`86400`). Fractional seconds use the
/// `f64` `Display` output, which never depends on locale (`1.5`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxAge(Duration);

impl MaxAge {
    pub fn from_secs(seconds: u64) -> Self {
        Self(Duration::from_secs(seconds))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn header_value(&self) -> String {
        if self.0.subsec_nanos() == 0 {
            self.0.as_secs().to_string()
        } else {
            self.0.as_secs_f64().to_string()
        }
    }
}

impl From<Duration> for MaxAge {
    fn from(value: Duration) -> Self {
        Self(value)
    }
}

impl From<u64> for MaxAge {
    fn from(value: u64) -> Self {
        Self::from_secs(value)
    }
}

#[cfg(test)]
#[path = "max_age_test.rs"]
mod max_age_test;
