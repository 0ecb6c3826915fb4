//! Call recording: completed-call records and the per-fake store.

pub mod completed_call;
pub mod store;

pub use completed_call::CompletedCall;
pub use store::CallRecordStore;
