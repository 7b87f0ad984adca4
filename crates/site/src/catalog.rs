use varahi_catalog::{CATALOG, CatalogEntry, SelectionGate, SelectionState};
use varahi_core::DomainResult;
use varahi_dispatch::{DispatchConfig, Navigator, SubmissionController, SubmitOutcome};
use varahi_forms::{FieldStore, OrderField, OrderSnapshot};

/// Product grid plus its order modal.
///
/// The order form's field store lives as long as the surface; cancelling the
/// modal keeps whatever the customer typed, a dispatched order clears it.
#[derive(Debug)]
pub struct CatalogSurface<N> {
    entries: &'static [CatalogEntry],
    gate: SelectionGate,
    store: FieldStore<OrderSnapshot>,
    controller: SubmissionController<N>,
}

impl<N: Navigator> CatalogSurface<N> {
    pub fn new(config: &DispatchConfig, navigator: N) -> Self {
        Self {
            entries: &CATALOG,
            gate: SelectionGate::new(),
            store: FieldStore::new(),
            controller: SubmissionController::new(config.encoder(), navigator),
        }
    }

    /// Products shown in the grid, in display order.
    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn gate(&self) -> &SelectionGate {
        &self.gate
    }

    pub fn state(&self) -> &SelectionState {
        self.gate.state()
    }

    pub fn is_modal_open(&self) -> bool {
        self.gate.is_open()
    }

    /// Heading of the open order modal ("Order Grocery Bags").
    pub fn modal_heading(&self) -> Option<String> {
        self.gate.context().map(|ctx| format!("Order {}", ctx.title()))
    }

    pub fn snapshot(&self) -> &OrderSnapshot {
        self.store.snapshot()
    }

    pub fn store(&self) -> &FieldStore<OrderSnapshot> {
        &self.store
    }

    pub fn controller(&self) -> &SubmissionController<N> {
        &self.controller
    }

    /// "Buy Now" on a product card.
    pub fn select(&mut self, title: impl Into<String>) {
        self.gate.select(title);
    }

    /// "Cancel" in the order modal.
    pub fn cancel(&mut self) {
        self.gate.cancel();
    }

    pub fn set_field(&mut self, field: OrderField, value: impl Into<String>) {
        self.store.set_field(field, value);
    }

    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> DomainResult<()> {
        self.store.set_named(name, value)
    }

    /// "Send to WhatsApp" in the order modal.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.controller.submit_order(&mut self.store, &mut self.gate)
    }
}
