//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージ送信処理（入室確認、全購読者への配信）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：入室していない購読者からの発言を拒否する
//! - 受信者は送信者の Joined を受け取った後に Said を受け取ることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信と配信
//! - 異常系：退室済み・名前を奪われたハンドルでの送信
//! - エッジケース：空のメッセージ

use std::sync::Arc;

use crate::domain::{NotFound, SessionBroadcaster, SubscriptionHandle};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// SessionBroadcaster（配信層の抽象化）
    broadcaster: Arc<dyn SessionBroadcaster>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(broadcaster: Arc<dyn SessionBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者の購読ハンドル
    /// * `text` - メッセージ内容（空文字列も可）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 配信成功
    /// * `Err(NotFound)` - 送信者は既に入室していない
    pub async fn execute(&self, from: &SubscriptionHandle, text: String) -> Result<(), NotFound> {
        tracing::debug!(
            "Broadcasting message from '{}' ({} bytes)",
            from.name,
            text.len()
        );
        self.broadcaster.say_as(from, text).await
    }
}
