//! Session Broadcaster の抽象化
//!
//! ドメイン層が定義する trait。UseCase 層はこの trait に依存し、
//! 具体的な実装（infrastructure 層）には依存しません（依存性の逆転）。
//!
//! 実装は全ての操作を単一の排他制御の下で実行しなければなりません。

use std::sync::Arc;

use async_trait::async_trait;

use super::{
    entity::SubscriptionHandle,
    error::{DuplicateName, NotFound},
    sink::EventSink,
    value_object::{ParticipantName, SubscriberId},
};

/// 参加者の入退室とイベント配信を担う Session Broadcaster
#[async_trait]
pub trait SessionBroadcaster: Send + Sync {
    /// 参加者を追加し、`Joined` を既存の購読者へ配信してから `sink` を登録する
    async fn join(
        &self,
        name: ParticipantName,
        sink: Arc<dyn EventSink>,
    ) -> Result<SubscriptionHandle, DuplicateName>;

    /// `Left` を退室者を含む全購読者へ配信し、参加者と購読を削除する
    async fn leave(&self, name: &ParticipantName) -> Result<(), NotFound>;

    /// `Said` を全購読者へ配信する
    async fn say(&self, name: &ParticipantName, text: String) -> Result<(), NotFound>;

    /// `leave` と同じだが、`handle` の購読者が現在もその名前を保持している場合のみ実行する
    async fn leave_as(&self, handle: &SubscriptionHandle) -> Result<(), NotFound>;

    /// `say` と同じだが、`handle` の購読者が現在もその名前を保持している場合のみ実行する
    async fn say_as(&self, handle: &SubscriptionHandle, text: String) -> Result<(), NotFound>;

    /// 切断を検知した購読者を削除する（冪等）
    ///
    /// 削除した場合は参加者名を返し、既に存在しない場合は `None` を返す
    async fn disconnect(&self, subscriber_id: SubscriberId) -> Option<ParticipantName>;

    /// 入室順の参加者一覧を取得
    async fn get_roster(&self) -> Vec<ParticipantName>;

    /// 参加者数を取得
    async fn count_participants(&self) -> usize;
}
