//! Product catalog and the order-modal Selection Gate.
//!
//! The catalog is display data for the product grid; the Selection Gate decides
//! whether an order modal is open and for which product. Pure domain logic.

pub mod product;
pub mod selection;

pub use product::{CATALOG, CatalogEntry, ProductContext, find_entry};
pub use selection::{
    CancelSelection, CloseAfterSubmit, ProductSelected, SelectProduct, SelectionCancelled,
    SelectionClosed, SelectionCommand, SelectionEvent, SelectionGate, SelectionState,
};
