//! Service layer containing the rotation side effects.
//!
//! ## Service map
//! - `store.rs` — password file read/write.
//! - `wifi.rs` — wireless join through the OS network tool.
//! - `generator.rs` — fresh password fetch from the random-string service.
//! - `ap.rs` — access point admin UI automation.
//! - `notify.rs` — chat announcement delivery.
//! - `journal.rs` — session event sink: local log plus best-effort remote
//!   shipping.
//!
//! ## Conventions
//! - Each effectful component sits behind a small trait so the pipeline can
//!   run against fakes in tests.
//! - Side effects stay inside the component that owns them.
//! - Failures map onto `RekeyError` so callers can tell the classes apart.

pub mod ap;
pub mod generator;
pub mod journal;
pub mod notify;
pub mod store;
pub mod wifi;
