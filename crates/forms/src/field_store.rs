use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use varahi_core::{DomainError, DomainResult, StateMachine, ValueObject};
use varahi_events::{Event, execute};

/// A named input of one form.
///
/// `FromStr` maps the host's field name (the `name` attribute of the input
/// element) to the typed field; unknown names are `DomainError::UnknownField`.
pub trait FormField:
    Copy + Eq + core::fmt::Debug + FromStr<Err = DomainError> + Send + Sync + 'static
{
    /// Host-facing field name.
    fn name(self) -> &'static str;
}

/// The complete set of fields of one form (its snapshot type).
///
/// `Default` is the all-empty baseline the store starts from and resets to.
pub trait FormSchema: ValueObject + Default {
    type Field: FormField;

    /// Short form identifier used in logs ("contact", "order").
    const FORM: &'static str;

    /// Current value of one field.
    fn get(&self, field: Self::Field) -> &str;

    /// Replace exactly one field.
    fn set(&mut self, field: Self::Field, value: String);
}

/// Command: SetField / Reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand<F> {
    SetField {
        field: F,
        value: String,
        occurred_at: DateTime<Utc>,
    },
    Reset {
        occurred_at: DateTime<Utc>,
    },
}

/// Event: FieldChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChanged<F> {
    pub field: F,
    pub value: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: FormReset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReset {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormEvent<F> {
    FieldChanged(FieldChanged<F>),
    FormReset(FormReset),
}

impl<F: FormField> Event for FormEvent<F> {
    fn event_type(&self) -> &'static str {
        match self {
            FormEvent::FieldChanged(_) => "forms.field.changed",
            FormEvent::FormReset(_) => "forms.reset",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            FormEvent::FieldChanged(e) => e.occurred_at,
            FormEvent::FormReset(e) => e.occurred_at,
        }
    }
}

/// Field Store: the current snapshot of one active form.
///
/// Every accepted edit replaces exactly one field and bumps `revision()` by one;
/// hosts re-render bound inputs when the revision moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStore<S> {
    snapshot: S,
    revision: u64,
}

impl<S: FormSchema> Default for FieldStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> FieldStore<S> {
    /// A store holding the all-empty baseline.
    pub fn new() -> Self {
        Self {
            snapshot: S::default(),
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    pub fn get(&self, field: S::Field) -> &str {
        self.snapshot.get(field)
    }

    /// True when the snapshot equals the all-empty baseline.
    pub fn is_empty(&self) -> bool {
        self.snapshot == S::default()
    }

    /// Replace one field's value (input-change handler).
    pub fn set_field(&mut self, field: S::Field, value: impl Into<String>) {
        self.run(FormCommand::SetField {
            field,
            value: value.into(),
            occurred_at: Utc::now(),
        });
    }

    /// Replace one field addressed by its host-facing name.
    ///
    /// An unknown name leaves the store untouched.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> DomainResult<()> {
        let field = name.parse::<S::Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Replace the snapshot with the all-empty baseline.
    pub fn reset(&mut self) {
        self.run(FormCommand::Reset {
            occurred_at: Utc::now(),
        });
    }

    fn run(&mut self, command: FormCommand<S::Field>) {
        match execute(self, &command) {
            Ok(_) => {}
            Err(never) => match never {},
        }
    }
}

impl<S: FormSchema> StateMachine for FieldStore<S> {
    type Command = FormCommand<S::Field>;
    type Event = FormEvent<S::Field>;
    type Error = core::convert::Infallible;

    fn revision(&self) -> u64 {
        self.revision
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            FormEvent::FieldChanged(e) => {
                self.snapshot.set(e.field, e.value.clone());
                tracing::debug!(form = S::FORM, field = e.field.name(), "field updated");
            }
            FormEvent::FormReset(_) => {
                self.snapshot = S::default();
                tracing::debug!(form = S::FORM, "form reset");
            }
        }

        self.revision += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let event = match command {
            FormCommand::SetField {
                field,
                value,
                occurred_at,
            } => FormEvent::FieldChanged(FieldChanged {
                field: *field,
                value: value.clone(),
                occurred_at: *occurred_at,
            }),
            FormCommand::Reset { occurred_at } => FormEvent::FormReset(FormReset {
                occurred_at: *occurred_at,
            }),
        };
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContactField, ContactSnapshot, OrderField, OrderSnapshot};

    #[test]
    fn set_field_replaces_exactly_one_field() {
        let mut store = FieldStore::<ContactSnapshot>::new();
        store.set_field(ContactField::Name, "Asha");
        store.set_field(ContactField::Email, "a@x.com");

        store.set_field(ContactField::Name, "Ravi");

        let snap = store.snapshot();
        assert_eq!(snap.name, "Ravi");
        assert_eq!(snap.email, "a@x.com");
        assert_eq!(snap.phone, "");
        assert_eq!(snap.message, "");
    }

    #[test]
    fn revision_increments_once_per_edit() {
        let mut store = FieldStore::<OrderSnapshot>::new();
        assert_eq!(store.revision(), 0);

        store.set_field(OrderField::Name, "Asha");
        assert_eq!(store.revision(), 1);

        store.set_field(OrderField::Quantity, "10");
        assert_eq!(store.revision(), 2);

        store.reset();
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn reset_restores_the_empty_baseline() {
        let mut store = FieldStore::<ContactSnapshot>::new();
        store.set_field(ContactField::Phone, "555");
        store.set_field(ContactField::Message, "Hi");
        assert!(!store.is_empty());

        store.reset();

        assert!(store.is_empty());
        assert_eq!(store.snapshot(), &ContactSnapshot::default());
    }

    #[test]
    fn set_named_routes_host_field_names() {
        let mut store = FieldStore::<OrderSnapshot>::new();
        store.set_named("address", "Alampur X Road").unwrap();
        store.set_named("microns", "40").unwrap();

        assert_eq!(store.get(OrderField::Address), "Alampur X Road");
        assert_eq!(store.get(OrderField::Microns), "40");
    }

    #[test]
    fn unknown_field_name_leaves_store_untouched() {
        let mut store = FieldStore::<ContactSnapshot>::new();
        store.set_field(ContactField::Name, "Asha");
        let before = store.clone();

        let err = store.set_named("fax", "123").unwrap_err();

        assert_eq!(err, DomainError::unknown_field("fax"));
        assert_eq!(store, before);
    }

    #[test]
    fn handle_does_not_mutate_state() {
        let store = FieldStore::<ContactSnapshot>::new();
        let cmd = FormCommand::SetField {
            field: ContactField::Name,
            value: "Asha".to_string(),
            occurred_at: Utc::now(),
        };

        let events1 = store.handle(&cmd).unwrap();
        let events2 = store.handle(&cmd).unwrap();

        assert_eq!(events1, events2);
        assert_eq!(store.revision(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn event_types_are_stable() {
        let changed: FormEvent<ContactField> = FormEvent::FieldChanged(FieldChanged {
            field: ContactField::Email,
            value: "a@x.com".into(),
            occurred_at: Utc::now(),
        });
        let reset: FormEvent<ContactField> = FormEvent::FormReset(FormReset {
            occurred_at: Utc::now(),
        });
        assert_eq!(changed.event_type(), "forms.field.changed");
        assert_eq!(reset.event_type(), "forms.reset");
    }
}
