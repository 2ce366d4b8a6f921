//! Dismissable status banners.
//!
//! Each `show` returns a sequence number; a delayed `expire` only clears the
//! banner it was scheduled for, so a newer message survives an older timer.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    message: Option<String>,
    seq: u64,
}

impl Banner {
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.seq
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    /// Clear the banner if it still shows message `seq`.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.seq == seq && self.message.is_some() {
            self.message = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
