//! Resource-type specializations.
//!
//! Each type here wraps a generic [`Collection`](crate::rest::Collection)
//! and adds named convenience operations with fixed field sets — canceling
//! a call is an update that sets the status field to its canceled sentinel,
//! sending a message is a create with `From`/`To`/`Body`, and so on. No
//! specialization adds new fetching mechanics; everything goes through the
//! shared Resource/Collection primitives, and every wrapper dereferences to
//! its underlying collection for the generic operations.

mod caller_ids;
mod calls;
mod messages;
mod participants;
mod phone_numbers;

pub use caller_ids::CallerIds;
pub use calls::{Calls, STATUS_CANCELED, STATUS_COMPLETED};
pub use messages::Messages;
pub use participants::Participants;
pub use phone_numbers::PhoneNumbers;
