//! Shared test utilities used across linkage crates.

pub mod tracing {
    //! Recording layer utilities for capturing spans and events in tests.
    use std::collections::BTreeMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Structured fields keyed by field name, with values rendered to strings.
    pub type Fields = BTreeMap<String, String>;

    /// Layer that captures closed spans and emitted events for assertions.
    ///
    /// Clones share storage, so a test can keep one handle while the other
    /// is installed in a subscriber.
    ///
    /// # Examples
    /// ```
    /// use linkage_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     let _span = tracing::info_span!("core.demo", points = 3).entered();
    ///     tracing::info!("inside");
    /// });
    /// assert_eq!(layer.span("core.demo").and_then(|s| s.field("points").map(str::to_owned)), Some("3".to_owned()));
    /// assert!(layer.has_message(tracing::Level::INFO, "inside"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns the closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            lock(&self.spans)
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Reports whether an event at `level` carried `message`.
        #[must_use]
        pub fn has_message(&self, level: Level, message: &str) -> bool {
            lock(&self.events)
                .iter()
                .any(|event| event.level == level && event.message() == Some(message))
        }
    }

    /// A closed span with its name and recorded fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name captured from the tracing metadata.
        pub name: String,
        /// Structured fields recorded against the span.
        pub fields: Fields,
    }

    impl SpanRecord {
        /// Returns the recorded value of `name`.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// An emitted event with its level, target and structured fields.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Log level associated with the recorded event.
        pub level: Level,
        /// Event target string extracted from the metadata.
        pub target: String,
        /// Structured fields attached to the event.
        pub fields: Fields,
    }

    impl EventRecord {
        /// Returns the event's formatted message, if any.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }

        /// Returns the recorded value of `name`.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    struct PendingSpan(SpanRecord);

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut record = SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields: Fields::new(),
            };
            attrs.record(&mut FieldRecorder(&mut record.fields));
            span.extensions_mut().insert(PendingSpan(record));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(PendingSpan(record)) = span.extensions_mut().get_mut::<PendingSpan>() {
                values.record(&mut FieldRecorder(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(PendingSpan(record)) = span.extensions_mut().remove::<PendingSpan>() {
                lock(&self.spans).push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldRecorder(&mut fields));
            lock(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a>(&'a mut Fields);

    impl FieldRecorder<'_> {
        fn put(&mut self, field: &Field, value: impl ToString) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value);
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value);
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value);
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value);
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value);
        }

        fn record_i128(&mut self, field: &Field, value: i128) {
            self.put(field, value);
        }

        fn record_u128(&mut self, field: &Field, value: u128) {
            self.put(field, value);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tracing_subscriber::layer::SubscriberExt;

        #[test]
        fn records_span_fields_including_late_values() {
            let layer = RecordingLayer::default();
            let subscriber = tracing_subscriber::registry().with(layer.clone());
            tracing::subscriber::with_default(subscriber, || {
                let span = tracing::info_span!("core.test", budget = 4_u64, edge = tracing::field::Empty);
                span.record("edge", "1-2");
            });
            let span = layer.span("core.test").expect("span must be recorded");
            assert_eq!(span.field("budget"), Some("4"));
            assert_eq!(span.field("edge"), Some("1-2"));
        }

        #[test]
        fn records_events_with_level_and_message() {
            let layer = RecordingLayer::default();
            let subscriber = tracing_subscriber::registry().with(layer.clone());
            tracing::subscriber::with_default(subscriber, || {
                tracing::warn!(points = 0_u64, "point source is empty");
            });
            assert!(layer.has_message(Level::WARN, "point source is empty"));
            assert!(!layer.has_message(Level::INFO, "point source is empty"));
            let events = layer.events();
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].field("points"), Some("0"));
        }
    }
}

pub mod ci;
