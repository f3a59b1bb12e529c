//! API endpoint modules.

mod domains;
mod records;
mod secondary;
mod transfer;
mod zone;

pub use domains::DomainApi;
pub use records::{RecordApi, RecordQueryBuilder};
pub use secondary::SecondaryApi;
pub use transfer::TransferApi;
