//! Domain factories for creating value objects.

use super::SubscriberId;

/// Factory for generating SubscriberId instances.
///
/// Keeps id generation out of the value object, which only wraps a UUID.
pub struct SubscriberIdFactory;

impl SubscriberIdFactory {
    /// Generate a new SubscriberId with a random UUID v4.
    pub fn generate() -> SubscriberId {
        SubscriberId::from_uuid(uuid::Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_id_factory_generate() {
        // テスト項目: SubscriberIdFactory::generate() で UUID v4 形式の ID を生成できる
        // when (操作):
        let subscriber_id = SubscriberIdFactory::generate();

        // then (期待する結果):
        assert_eq!(subscriber_id.as_uuid().get_version_num(), 4);
        assert_eq!(subscriber_id.to_string().len(), 36); // ハイフン含む
    }

    #[test]
    fn test_subscriber_id_factory_generate_uniqueness() {
        // テスト項目: SubscriberIdFactory::generate() は毎回異なる ID を生成する
        // when (操作):
        let id1 = SubscriberIdFactory::generate();
        let id2 = SubscriberIdFactory::generate();

        // then (期待する結果):
        assert_ne!(id1, id2);
    }
}
