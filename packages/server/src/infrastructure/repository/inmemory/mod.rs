//! InMemory Repository 実装
//!
//! ドメインの集約（`Registry`, `MessageLog`）をそれぞれ独立した Mutex で保護し、
//! プロセス内のストアとして使用します。参加者とメッセージは別々のロックを持つため、
//! 互いの操作を待たせません。

mod message;
mod participant;

pub use message::InMemoryMessageRepository;
pub use participant::InMemoryParticipantRepository;
