//! Refresh key.

/// Monotonic counter bumped to force a screen to refetch.
///
/// The key does not cancel requests already in flight: a late response
/// from before a bump still updates the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshKey(u64);

impl RefreshKey {
    /// Advances the key.
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Current value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_increments() {
        let mut key = RefreshKey::default();
        key.bump();
        key.bump();
        assert_eq!(key.value(), 2);
    }
}
