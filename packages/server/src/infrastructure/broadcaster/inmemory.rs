//! InMemory SessionBroadcaster 実装
//!
//! ドメイン層が定義する SessionBroadcaster trait の具体的な実装。
//! `Session` ドメインモデルを単一の `tokio::sync::Mutex` で保護し、
//! 名簿の確認・更新・配信を全て同じロックの中で行います。
//! これにより、同じ名前での同時入室は必ず一方だけが成功し、
//! 参加者ごとのイベント順序（Joined → Said → Left）が保たれます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    DuplicateName, EventSink, NotFound, ParticipantName, Session, SessionBroadcaster,
    SessionConfig, SubscriberId, SubscriptionHandle,
};

/// インメモリ SessionBroadcaster 実装
pub struct InMemorySessionBroadcaster {
    /// Session ドメインモデル
    session: Mutex<Session>,
}

impl InMemorySessionBroadcaster {
    /// 新しい InMemorySessionBroadcaster を作成
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: Mutex::new(Session::new(config)),
        }
    }
}

/// 配信失敗により削除された参加者を記録する
fn log_evictions(session: &mut Session) {
    for name in session.take_evicted() {
        tracing::warn!(
            "Subscriber for '{}' is unreachable; treated as implicit leave",
            name
        );
    }
}

#[async_trait]
impl SessionBroadcaster for InMemorySessionBroadcaster {
    async fn join(
        &self,
        name: ParticipantName,
        sink: Arc<dyn EventSink>,
    ) -> Result<SubscriptionHandle, DuplicateName> {
        let mut session = self.session.lock().await;
        let result = session.join(name, sink);
        log_evictions(&mut session);
        result
    }

    async fn leave(&self, name: &ParticipantName) -> Result<(), NotFound> {
        let mut session = self.session.lock().await;
        let result = session.leave(name);
        log_evictions(&mut session);
        result
    }

    async fn say(&self, name: &ParticipantName, text: String) -> Result<(), NotFound> {
        let mut session = self.session.lock().await;
        let result = session.say(name, text);
        log_evictions(&mut session);
        result
    }

    async fn leave_as(&self, handle: &SubscriptionHandle) -> Result<(), NotFound> {
        let mut session = self.session.lock().await;
        let result = session.leave_as(handle);
        log_evictions(&mut session);
        result
    }

    async fn say_as(&self, handle: &SubscriptionHandle, text: String) -> Result<(), NotFound> {
        let mut session = self.session.lock().await;
        let result = session.say_as(handle, text);
        log_evictions(&mut session);
        result
    }

    async fn disconnect(&self, subscriber_id: SubscriberId) -> Option<ParticipantName> {
        let mut session = self.session.lock().await;
        let removed = session.disconnect(subscriber_id);
        log_evictions(&mut session);
        removed
    }

    async fn get_roster(&self) -> Vec<ParticipantName> {
        let session = self.session.lock().await;
        session.roster()
    }

    async fn count_participants(&self) -> usize {
        let session = self.session.lock().await;
        session.len()
    }
}
