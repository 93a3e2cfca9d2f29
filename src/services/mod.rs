//! Service layer for the expense tracker
//!
//! The service layer provides the session and ledger logic on top of the
//! key-value storage port.

pub mod ledger;
pub mod session;
pub mod tracker;

pub use ledger::{ledger_key, Ledger, LedgerEvent, LedgerObserver, LedgerView};
pub use session::SessionService;
pub use tracker::Tracker;
