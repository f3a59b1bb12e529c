mod common;
mod domain;
mod export;
mod record;
mod secondary;

pub use common::*;
pub use domain::*;
pub use export::*;
pub use record::*;
pub use secondary::*;
