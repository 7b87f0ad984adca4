use varahi_core::DomainResult;
use varahi_dispatch::{DispatchConfig, Navigator, SubmissionController, SubmitOutcome};
use varahi_forms::{ContactField, ContactSnapshot, FieldStore};

/// Contact page form: one field store feeding the pipeline directly.
#[derive(Debug)]
pub struct ContactSurface<N> {
    store: FieldStore<ContactSnapshot>,
    controller: SubmissionController<N>,
}

impl<N: Navigator> ContactSurface<N> {
    pub fn new(config: &DispatchConfig, navigator: N) -> Self {
        Self {
            store: FieldStore::new(),
            controller: SubmissionController::new(config.encoder(), navigator),
        }
    }

    pub fn snapshot(&self) -> &ContactSnapshot {
        self.store.snapshot()
    }

    pub fn store(&self) -> &FieldStore<ContactSnapshot> {
        &self.store
    }

    pub fn controller(&self) -> &SubmissionController<N> {
        &self.controller
    }

    /// Input-change handler for a typed field.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.store.set_field(field, value);
    }

    /// Input-change handler keyed by the input's `name` attribute.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> DomainResult<()> {
        self.store.set_named(name, value)
    }

    /// Whether the host's required-field gate would allow submitting.
    pub fn can_submit(&self) -> bool {
        self.store.snapshot().is_complete()
    }

    /// "Send via WhatsApp".
    pub fn submit(&mut self) -> SubmitOutcome {
        self.controller.submit_contact(&mut self.store)
    }
}
