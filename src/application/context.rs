//! Execution context deciding which representation use cases emit.

use crate::domain::representation::Representation;
use crate::dto::Envelope;

/// Where a use case's output is headed.
///
/// - [`Server`](Self::Server): output is serialized and sent elsewhere, so
///   use cases emit transfer objects.
/// - [`Client`](Self::Client): output stays in-process and may be mutated,
///   so use cases emit live entities.
///
/// The context is passed in explicitly when a use case is built; nothing
/// probes the runtime to guess it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionContext {
    #[default]
    Server,
    Client,
}

impl ExecutionContext {
    /// The single query the transcoding step is driven by.
    pub fn emits_transfer_objects(self) -> bool {
        matches!(self, Self::Server)
    }

    /// Rebuilds every record of a successful list envelope in the shape this
    /// context demands.
    ///
    /// Order and length are preserved and every field is copied. Error
    /// envelopes are re-typed and returned with their message untouched. A
    /// success envelope without data yields an empty list.
    pub fn transcode<E, D>(
        self,
        envelope: Envelope<Vec<Representation<E, D>>>,
    ) -> Envelope<Vec<Representation<E, D>>>
    where
        E: From<D>,
        D: From<E>,
    {
        if envelope.is_error() {
            return envelope.propagate();
        }

        let as_transfer = self.emits_transfer_objects();
        let records = envelope
            .into_data()
            .unwrap_or_default()
            .into_iter()
            .map(|record| record.normalize(as_transfer))
            .collect();

        Envelope::success(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Tracker;
    use crate::domain::representation::TrackerRecord;
    use crate::dto::TrackerDto;

    fn mixed_records() -> Vec<TrackerRecord> {
        vec![
            TrackerRecord::Entity(Tracker::new("1", "c1", "first", "111", vec![])),
            TrackerRecord::Transfer(TrackerDto::new(
                "2",
                "c2",
                "second",
                "222",
                vec!["memo".to_string()],
            )),
        ]
    }

    #[test]
    fn test_default_is_server() {
        assert_eq!(ExecutionContext::default(), ExecutionContext::Server);
        assert!(ExecutionContext::Server.emits_transfer_objects());
        assert!(!ExecutionContext::Client.emits_transfer_objects());
    }

    #[test]
    fn test_server_emits_transfer_objects_in_order() {
        let result = ExecutionContext::Server.transcode(Envelope::success(mixed_records()));

        let records = result.into_data().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(TrackerRecord::is_transfer));
        let ids: Vec<String> = records
            .into_iter()
            .map(|r| r.into_transfer().id().to_string())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_client_emits_entities() {
        let result = ExecutionContext::Client.transcode(Envelope::success(mixed_records()));

        let records = result.into_data().unwrap();
        assert!(records.iter().all(|r| !r.is_transfer()));
        assert_eq!(records[1].clone().into_entity().memos(), ["memo"]);
    }

    #[test]
    fn test_error_passes_through() {
        let result = ExecutionContext::Server.transcode(Envelope::<Vec<TrackerRecord>>::failure("Error"));

        assert!(result.is_error());
        assert_eq!(result.message(), Some("Error"));
        assert!(result.data().is_none());
    }

    #[test]
    fn test_success_without_data_is_empty_list() {
        let result = ExecutionContext::Client.transcode(Envelope::<Vec<TrackerRecord>>::default());

        assert!(!result.is_error());
        assert_eq!(result.data(), Some(&vec![]));
    }
}
