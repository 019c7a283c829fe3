//! UseCase: 参加者退室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveSessionUseCase::execute() メソッド
//! - 退室処理（退室者を含む全員への通知、名簿からの削除）
//!
//! ### なぜこのテストが必要か
//! - 退室の通知が本人にも届くことを保証
//! - 退室後の発言が拒否されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の退室と通知
//! - 異常系：入室していない参加者の退室試行
//! - 異常系：同じ名前で入室し直した別の購読者を、古いハンドルで退室させようとする

use std::sync::Arc;

use crate::domain::{NotFound, SessionBroadcaster, SubscriptionHandle};

/// 参加者退室のユースケース
pub struct LeaveSessionUseCase {
    /// SessionBroadcaster（配信層の抽象化）
    broadcaster: Arc<dyn SessionBroadcaster>,
}

impl LeaveSessionUseCase {
    /// 新しい LeaveSessionUseCase を作成
    pub fn new(broadcaster: Arc<dyn SessionBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// 退室を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 退室成功
    /// * `Err(NotFound)` - ハンドルの購読者は既に入室していない
    pub async fn execute(&self, handle: &SubscriptionHandle) -> Result<(), NotFound> {
        self.broadcaster.leave_as(handle).await?;
        tracing::info!("Participant '{}' left", handle.name);
        Ok(())
    }
}
