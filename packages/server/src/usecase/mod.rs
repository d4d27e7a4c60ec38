//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層（HTTP ハンドラ、スイーパー）から呼び出され、Domain 層を操作します。

pub mod delete_message;
pub mod edit_message;
pub mod error;
pub mod heartbeat;
pub mod list_messages;
pub mod list_participants;
pub mod post_message;
pub mod register_participant;
pub mod sweep_stale_participants;

pub use delete_message::DeleteMessageUseCase;
pub use edit_message::EditMessageUseCase;
pub use error::{
    HeartbeatError, ListError, MessageMutationError, PostMessageError, RegisterError, SweepError,
};
pub use heartbeat::HeartbeatUseCase;
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::PostMessageUseCase;
pub use register_participant::RegisterParticipantUseCase;
pub use sweep_stale_participants::{SweepReport, SweepStaleParticipantsUseCase};
