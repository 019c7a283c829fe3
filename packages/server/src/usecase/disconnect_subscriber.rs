//! UseCase: 購読者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSubscriberUseCase::execute() メソッド
//! - 接続断を検知した購読者の削除（暗黙の退室）
//!
//! ### なぜこのテストが必要か
//! - 切断時に残りの参加者へ Left が通知されることを保証
//! - 明示的な退室の後に切断が届いても二重に処理されないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：入室中の購読者の切断と通知
//! - エッジケース：最後の参加者の切断（通知対象なし）
//! - エッジケース：既に削除された購読者の切断（冪等）

use std::sync::Arc;

use crate::domain::{ParticipantName, SessionBroadcaster, SubscriberId};

/// 購読者切断のユースケース
pub struct DisconnectSubscriberUseCase {
    /// SessionBroadcaster（配信層の抽象化）
    broadcaster: Arc<dyn SessionBroadcaster>,
}

impl DisconnectSubscriberUseCase {
    /// 新しい DisconnectSubscriberUseCase を作成
    pub fn new(broadcaster: Arc<dyn SessionBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Some(ParticipantName)` - 削除した参加者の名前
    /// * `None` - 購読者は既に削除されていた（何もしない）
    pub async fn execute(&self, subscriber_id: SubscriberId) -> Option<ParticipantName> {
        let removed = self.broadcaster.disconnect(subscriber_id).await;
        match &removed {
            Some(name) => tracing::info!("Participant '{}' disconnected", name),
            None => tracing::debug!("Subscriber {} already removed", subscriber_id),
        }
        removed
    }
}
