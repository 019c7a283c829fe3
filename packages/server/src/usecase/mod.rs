//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層の SessionBroadcaster を操作します。

pub mod disconnect_subscriber;
pub mod join_session;
pub mod leave_session;
pub mod send_message;

pub use disconnect_subscriber::DisconnectSubscriberUseCase;
pub use join_session::JoinSessionUseCase;
pub use leave_session::LeaveSessionUseCase;
pub use send_message::SendMessageUseCase;
