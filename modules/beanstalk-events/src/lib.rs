//! Decoded Beanstalk event vocabulary.
//!
//! Plain named-field records for the silo and field events a farmer's ledger
//! is folded from. Decoding raw logs happens upstream; this crate only defines
//! the shapes and their JSON form.

pub mod eventlike;
pub mod events;
pub mod types;

pub use eventlike::Eventlike;
pub use events::FarmerEvent;
pub use types::{format_units, scale_units, ChainEvent, LogPosition, Season, Token};
