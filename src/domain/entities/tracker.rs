//! Tracker entity representing one tracked shipment.

use thiserror::Error;

/// Invariant violations reported by [`Tracker`] mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("memo index {index} out of range (len {len})")]
    MemoIndexOutOfRange { index: usize, len: usize },
}

/// A shipment the user is following.
///
/// The tracker owns its state transitions: every field change goes through
/// one of the `update_*` / memo methods, and memo index bounds are checked
/// here rather than by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    id: String,
    carrier_id: String,
    label: String,
    tracking_number: String,
    memos: Vec<String>,
}

impl Tracker {
    /// Creates a new Tracker instance.
    pub fn new(
        id: impl Into<String>,
        carrier_id: impl Into<String>,
        label: impl Into<String>,
        tracking_number: impl Into<String>,
        memos: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            carrier_id: carrier_id.into(),
            label: label.into(),
            tracking_number: tracking_number.into(),
            memos,
        }
    }

    /// Creates a tracker with only an id; every other field starts empty.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn carrier_id(&self) -> &str {
        &self.carrier_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    pub fn memos(&self) -> &[String] {
        &self.memos
    }

    pub fn update_carrier_id(&mut self, carrier_id: impl Into<String>) {
        self.carrier_id = carrier_id.into();
    }

    pub fn update_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn update_tracking_number(&mut self, tracking_number: impl Into<String>) {
        self.tracking_number = tracking_number.into();
    }

    /// Appends an empty memo for the user to fill in.
    pub fn add_memo(&mut self) {
        self.memos.push(String::new());
    }

    /// Replaces the memo at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MemoIndexOutOfRange`] if `index` does not
    /// address an existing memo. The tracker is left unchanged.
    pub fn update_memo(&mut self, index: usize, memo: impl Into<String>) -> Result<(), TrackerError> {
        let len = self.memos.len();
        let slot = self
            .memos
            .get_mut(index)
            .ok_or(TrackerError::MemoIndexOutOfRange { index, len })?;
        *slot = memo.into();
        Ok(())
    }

    /// Removes the memo at `index`, shifting later memos down.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MemoIndexOutOfRange`] if `index` does not
    /// address an existing memo. The tracker is left unchanged.
    pub fn delete_memo(&mut self, index: usize) -> Result<(), TrackerError> {
        if index >= self.memos.len() {
            return Err(TrackerError::MemoIndexOutOfRange {
                index,
                len: self.memos.len(),
            });
        }
        self.memos.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tracker() -> Tracker {
        Tracker::new(
            "1",
            "kr.cjlogistics",
            "Keyboard",
            "123456",
            vec!["m1".to_string(), "m2".to_string()],
        )
    }

    #[test]
    fn test_tracker_creation() {
        let tracker = sample_tracker();

        assert_eq!(tracker.id(), "1");
        assert_eq!(tracker.carrier_id(), "kr.cjlogistics");
        assert_eq!(tracker.label(), "Keyboard");
        assert_eq!(tracker.tracking_number(), "123456");
        assert_eq!(tracker.memos(), ["m1", "m2"]);
    }

    #[test]
    fn test_with_id_defaults() {
        let tracker = Tracker::with_id("abc");

        assert_eq!(tracker.id(), "abc");
        assert!(tracker.carrier_id().is_empty());
        assert!(tracker.label().is_empty());
        assert!(tracker.tracking_number().is_empty());
        assert!(tracker.memos().is_empty());
    }

    #[test]
    fn test_field_updates() {
        let mut tracker = sample_tracker();

        tracker.update_carrier_id("kr.epost");
        tracker.update_label("Monitor");
        tracker.update_tracking_number("654321");

        assert_eq!(tracker.carrier_id(), "kr.epost");
        assert_eq!(tracker.label(), "Monitor");
        assert_eq!(tracker.tracking_number(), "654321");
    }

    #[test]
    fn test_add_memo_appends_empty_entry() {
        let mut tracker = sample_tracker();

        tracker.add_memo();

        assert_eq!(tracker.memos(), ["m1", "m2", ""]);
    }

    #[test]
    fn test_update_memo() {
        let mut tracker = sample_tracker();

        tracker.update_memo(1, "left at door").unwrap();

        assert_eq!(tracker.memos(), ["m1", "left at door"]);
    }

    #[test]
    fn test_update_memo_out_of_range() {
        let mut tracker = sample_tracker();

        let err = tracker.update_memo(2, "nope").unwrap_err();

        assert_eq!(err, TrackerError::MemoIndexOutOfRange { index: 2, len: 2 });
        assert_eq!(tracker.memos(), ["m1", "m2"]);
    }

    #[test]
    fn test_delete_memo() {
        let mut tracker = sample_tracker();

        tracker.delete_memo(0).unwrap();

        assert_eq!(tracker.memos(), ["m2"]);
    }

    #[test]
    fn test_delete_memo_on_empty_tracker() {
        let mut tracker = Tracker::with_id("1");

        let err = tracker.delete_memo(0).unwrap_err();

        assert_eq!(err, TrackerError::MemoIndexOutOfRange { index: 0, len: 0 });
    }
}
