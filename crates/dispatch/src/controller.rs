//! Submission controller: format, encode, navigate, reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use varahi_catalog::SelectionGate;
use varahi_events::Event;
use varahi_forms::{ContactSnapshot, FieldStore, OrderSnapshot, contact_message, order_message};

use crate::deep_link::{DeepLink, DeepLinkEncoder};
use crate::navigator::Navigator;

/// Which pipeline produced a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Order,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Order => "order",
        }
    }
}

/// Controller lifecycle.
///
/// `Submitting` covers the synchronous body of a `submit_*` call: formatting,
/// encoding, the navigator hand-off and the reset. Both submits take
/// `&mut self` and finish before returning, so nothing outside the call can
/// observe `Submitting`; between calls the controller is always `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// Event: MessageDispatched.
///
/// Recorded once the deep link was handed to the host navigator. Delivery is
/// never confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDispatched {
    pub form: FormKind,
    pub link: DeepLink,
    /// Product title for order dispatches.
    pub product: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl Event for MessageDispatched {
    fn event_type(&self) -> &'static str {
        match self.form {
            FormKind::Contact => "dispatch.contact.sent",
            FormKind::Order => "dispatch.order.sent",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Result of a submit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was built and handed to the navigator.
    Dispatched(MessageDispatched),
    /// Nothing happened (order submit without a selected product).
    Skipped,
}

impl SubmitOutcome {
    pub fn link(&self) -> Option<&DeepLink> {
        match self {
            SubmitOutcome::Dispatched(e) => Some(&e.link),
            SubmitOutcome::Skipped => None,
        }
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, SubmitOutcome::Dispatched(_))
    }
}

/// Submission Controller shared by the contact and order pipelines.
///
/// Effects of a submit, in order:
/// 1. format the snapshot into the message text
/// 2. encode the deep link
/// 3. hand the link to the navigator (fire-and-forget)
/// 4. reset the field store
/// 5. (order only) close the selection gate
#[derive(Debug)]
pub struct SubmissionController<N> {
    encoder: DeepLinkEncoder,
    navigator: N,
    state: SubmissionState,
    dispatched: u64,
}

impl<N: Navigator> SubmissionController<N> {
    pub fn new(encoder: DeepLinkEncoder, navigator: N) -> Self {
        Self {
            encoder,
            navigator,
            state: SubmissionState::Idle,
            dispatched: 0,
        }
    }

    /// Always [`SubmissionState::Idle`] when called; see [`SubmissionState`].
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn encoder(&self) -> &DeepLinkEncoder {
        &self.encoder
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Number of messages handed to the navigator so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Submit the contact form.
    ///
    /// Required-field gating is the host form's job; the snapshot is sent as is.
    pub fn submit_contact(&mut self, store: &mut FieldStore<ContactSnapshot>) -> SubmitOutcome {
        if !store.snapshot().is_complete() {
            tracing::debug!("contact form submitted with empty fields");
        }

        self.state = SubmissionState::Submitting;
        let text = contact_message(store.snapshot());
        let event = self.dispatch(FormKind::Contact, &text, None);
        store.reset();
        self.state = SubmissionState::Idle;

        SubmitOutcome::Dispatched(event)
    }

    /// Submit the order form for the product selected in `gate`.
    ///
    /// Without a selected product this is a silent no-op.
    pub fn submit_order(
        &mut self,
        store: &mut FieldStore<OrderSnapshot>,
        gate: &mut SelectionGate,
    ) -> SubmitOutcome {
        let Some(product) = gate.context().map(|ctx| ctx.title().to_string()) else {
            tracing::debug!("order submit ignored: no product selected");
            return SubmitOutcome::Skipped;
        };

        self.state = SubmissionState::Submitting;
        let text = order_message(store.snapshot(), &product);
        let event = self.dispatch(FormKind::Order, &text, Some(product));
        store.reset();
        if let Err(err) = gate.submit_success() {
            tracing::warn!(error = %err, "selection gate did not close after order dispatch");
        }
        self.state = SubmissionState::Idle;

        SubmitOutcome::Dispatched(event)
    }

    fn dispatch(&mut self, form: FormKind, text: &str, product: Option<String>) -> MessageDispatched {
        let link = self.encoder.encode(text);
        self.navigator.open(&link);
        self.dispatched += 1;

        let event = MessageDispatched {
            form,
            link,
            product,
            occurred_at: Utc::now(),
        };
        tracing::info!(
            event_type = event.event_type(),
            form = form.as_str(),
            destination = %self.encoder.destination(),
            message_len = text.len(),
            "message handed to navigator"
        );
        event
    }
}
