//! UseCase: 参加者入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinSessionUseCase::execute() メソッド
//! - 入室処理（重複チェック、既存参加者への通知、購読の登録）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：同じ名前での二重入室を防ぐ
//! - 入室と購読の登録の間に取りこぼしがないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の入室
//! - 異常系：重複した名前での入室試行

use std::sync::Arc;

use crate::domain::{
    DuplicateName, EventSink, ParticipantName, SessionBroadcaster, SubscriptionHandle,
};

/// 参加者入室のユースケース
pub struct JoinSessionUseCase {
    /// SessionBroadcaster（配信層の抽象化）
    broadcaster: Arc<dyn SessionBroadcaster>,
}

impl JoinSessionUseCase {
    /// 新しい JoinSessionUseCase を作成
    pub fn new(broadcaster: Arc<dyn SessionBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// 入室を実行
    ///
    /// # Arguments
    ///
    /// * `name` - 入室する参加者の名前（Domain Model）
    /// * `sink` - この参加者宛てのイベント配信先
    ///
    /// # Returns
    ///
    /// * `Ok(SubscriptionHandle)` - 入室成功（切断通知に使う購読ハンドル）
    /// * `Err(DuplicateName)` - 同じ名前の参加者が既に入室している
    pub async fn execute(
        &self,
        name: ParticipantName,
        sink: Arc<dyn EventSink>,
    ) -> Result<SubscriptionHandle, DuplicateName> {
        let handle = self.broadcaster.join(name, sink).await?;
        tracing::info!(
            "Participant '{}' joined (subscriber {})",
            handle.name,
            handle.id
        );
        Ok(handle)
    }
}
