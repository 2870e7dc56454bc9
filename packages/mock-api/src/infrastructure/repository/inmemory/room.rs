//! In-memory room repository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Room, RoomId, RoomRepository};

/// In-memory room repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoomRepository {
    rooms: Arc<Mutex<Vec<Room>>>,
}

impl InMemoryRoomRepository {
    /// Create with initial contents
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Arc::new(Mutex::new(rooms)),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn list(&self) -> Vec<Room> {
        let rooms = self.rooms.lock().await;
        rooms.clone()
    }

    async fn insert(&self, room: Room) {
        let mut rooms = self.rooms.lock().await;
        rooms.push(room);
    }

    async fn find_by_id(&self, room_id: &RoomId) -> Option<Room> {
        let rooms = self.rooms.lock().await;
        rooms.iter().find(|room| &room.id == room_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomDraft;
    use tagalong_shared::time::now_utc;

    fn room(id: &str, name: &str) -> Room {
        RoomDraft::named(name).into_room(RoomId::new(id), now_utc())
    }

    #[tokio::test]
    async fn test_insert_preserves_order() {
        // テスト項目: 追加した順に一覧が返される
        // given (前提条件):
        let repo = InMemoryRoomRepository::default();

        // when (操作):
        repo.insert(room("b", "Second")).await;
        repo.insert(room("a", "First")).await;

        // then (期待する結果):
        let ids: Vec<_> = repo
            .list()
            .await
            .into_iter()
            .map(|r| r.id.into_string())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_list_returns_snapshot() {
        // テスト項目: 一覧はスナップショットであり、後続の追加の影響を受けない
        // given (前提条件):
        let repo = InMemoryRoomRepository::new(vec![room("1", "Seed")]);
        let snapshot = repo.list().await;

        // when (操作):
        repo.insert(room("2", "Later")).await;

        // then (期待する結果):
        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        // テスト項目: ID でルームを検索でき、存在しなければ None
        // given (前提条件):
        let repo = InMemoryRoomRepository::new(vec![room("1", "Seed")]);

        // then (期待する結果):
        assert_eq!(
            repo.find_by_id(&RoomId::new("1")).await.map(|r| r.name),
            Some("Seed".to_string())
        );
        assert!(repo.find_by_id(&RoomId::new("404")).await.is_none());
    }
}
