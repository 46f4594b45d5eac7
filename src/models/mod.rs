//! Record types for SFT conversion.

mod record;
mod schema;

pub use record::{ChatMessage, ConversationTurn, QaRecord, SftRecord};
pub use schema::SftSchema;
