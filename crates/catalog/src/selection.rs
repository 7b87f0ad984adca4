use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use varahi_core::{DomainError, DomainResult, StateMachine};
use varahi_events::{Event, execute};

use crate::product::ProductContext;

/// Selection Gate state.
///
/// The product context only exists inside `Open`, so a closed gate can never
/// carry one and an open gate always does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "product")]
pub enum SelectionState {
    #[default]
    Closed,
    Open(ProductContext),
}

/// Selection Gate: controls the order modal and which product it targets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionGate {
    state: SelectionState,
    revision: u64,
}

impl SelectionGate {
    /// A closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SelectionState::Open(_))
    }

    /// Product context of the open modal, if any.
    pub fn context(&self) -> Option<&ProductContext> {
        match &self.state {
            SelectionState::Open(ctx) => Some(ctx),
            SelectionState::Closed => None,
        }
    }

    /// Open the order modal for `title` ("Buy Now").
    ///
    /// Selecting while another product is open replaces it.
    pub fn select(&mut self, title: impl Into<String>) {
        let command = SelectionCommand::SelectProduct(SelectProduct {
            title: title.into(),
            occurred_at: Utc::now(),
        });
        if let Err(err) = execute(self, &command) {
            tracing::warn!(error = %err, "product selection rejected");
        }
    }

    /// Close the modal without dispatching. No-op when already closed.
    pub fn cancel(&mut self) {
        let command = SelectionCommand::CancelSelection(CancelSelection {
            occurred_at: Utc::now(),
        });
        if let Err(err) = execute(self, &command) {
            tracing::warn!(error = %err, "selection cancel rejected");
        }
    }

    /// Close the modal after the order was dispatched.
    ///
    /// Only the order submission path calls this; on a closed gate it is an
    /// invariant violation.
    pub fn submit_success(&mut self) -> DomainResult<()> {
        let command = SelectionCommand::CloseAfterSubmit(CloseAfterSubmit {
            occurred_at: Utc::now(),
        });
        execute(self, &command).map(|_| ())
    }
}

impl StateMachine for SelectionGate {
    type Command = SelectionCommand;
    type Event = SelectionEvent;
    type Error = DomainError;

    fn revision(&self) -> u64 {
        self.revision
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            SelectionEvent::ProductSelected(e) => {
                self.state = SelectionState::Open(ProductContext::new(e.title.clone()));
            }
            SelectionEvent::SelectionCancelled(_) | SelectionEvent::SelectionClosed(_) => {
                self.state = SelectionState::Closed;
            }
        }

        self.revision += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            SelectionCommand::SelectProduct(cmd) => self.handle_select(cmd),
            SelectionCommand::CancelSelection(cmd) => self.handle_cancel(cmd),
            SelectionCommand::CloseAfterSubmit(cmd) => self.handle_close_after_submit(cmd),
        }
    }
}

impl SelectionGate {
    fn handle_select(&self, cmd: &SelectProduct) -> Result<Vec<SelectionEvent>, DomainError> {
        if cmd.title.is_empty() {
            return Err(DomainError::validation("product title must not be empty"));
        }

        Ok(vec![SelectionEvent::ProductSelected(ProductSelected {
            title: cmd.title.clone(),
            replaced: self.context().map(|ctx| ctx.title().to_string()),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_cancel(&self, cmd: &CancelSelection) -> Result<Vec<SelectionEvent>, DomainError> {
        let Some(ctx) = self.context() else {
            return Ok(Vec::new());
        };

        Ok(vec![SelectionEvent::SelectionCancelled(SelectionCancelled {
            title: ctx.title().to_string(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_close_after_submit(
        &self,
        cmd: &CloseAfterSubmit,
    ) -> Result<Vec<SelectionEvent>, DomainError> {
        let Some(ctx) = self.context() else {
            return Err(DomainError::invariant(
                "cannot close after submit: no product is selected",
            ));
        };

        Ok(vec![SelectionEvent::SelectionClosed(SelectionClosed {
            title: ctx.title().to_string(),
            occurred_at: cmd.occurred_at,
        })])
    }
}

/// Command: SelectProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectProduct {
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: CancelSelection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSelection {
    pub occurred_at: DateTime<Utc>,
}

/// Command: CloseAfterSubmit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseAfterSubmit {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionCommand {
    SelectProduct(SelectProduct),
    CancelSelection(CancelSelection),
    CloseAfterSubmit(CloseAfterSubmit),
}

/// Event: ProductSelected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelected {
    pub title: String,
    /// Product whose modal was open before this selection, if any.
    pub replaced: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SelectionCancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCancelled {
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SelectionClosed (order dispatched).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionClosed {
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    ProductSelected(ProductSelected),
    SelectionCancelled(SelectionCancelled),
    SelectionClosed(SelectionClosed),
}

impl Event for SelectionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SelectionEvent::ProductSelected(_) => "catalog.selection.opened",
            SelectionEvent::SelectionCancelled(_) => "catalog.selection.cancelled",
            SelectionEvent::SelectionClosed(_) => "catalog.selection.closed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SelectionEvent::ProductSelected(e) => e.occurred_at,
            SelectionEvent::SelectionCancelled(e) => e.occurred_at,
            SelectionEvent::SelectionClosed(e) => e.occurred_at,
        }
    }
}
