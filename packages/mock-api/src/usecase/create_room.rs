//! UseCase: create room
//!
//! ## Test notes
//!
//! ### What is tested
//! - `CreateRoomUseCase::execute()`
//! - defaults for unset fields and id assignment
//!
//! ### Scenarios
//! - normal: a draft with only a name
//! - edge case: concurrent creations never share an id

use std::{sync::Arc, time::Duration};

use tagalong_shared::time::now_utc;

use crate::{
    domain::{IdFactory, Room, RoomDraft, RoomRepository},
    infrastructure::LatencySimulator,
};

/// Use case for creating a room
pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    latency: Duration,
}

impl CreateRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, latency: Duration) -> Self {
        Self {
            repository,
            latency,
        }
    }

    /// Create a room.
    ///
    /// Fills every unset field of `draft`, assigns a fresh id and the current
    /// time, appends the room to the store and returns it.
    pub async fn execute(&self, draft: RoomDraft) -> Room {
        LatencySimulator::new().delay(self.latency).await;

        let room = draft.into_room(IdFactory::room_id(), now_utc());
        self.repository.insert(room.clone()).await;

        tracing::debug!(room_id = %room.id, name = %room.name, "created room");
        room
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{RideType, RoomKind, RoomStatus, repository::MockRoomRepository},
        infrastructure::repository::InMemoryRoomRepository,
    };
    use futures_util::future::join_all;
    use std::collections::HashSet;

    #[tokio::test(start_paused = true)]
    async fn test_create_room_fills_defaults_and_inserts() {
        // テスト項目: 名前のみのドラフトからデフォルト値で補完されたルームが保存される
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository
            .expect_insert()
            .withf(|room| room.name == "Ride to Mall")
            .times(1)
            .return_const(());
        let usecase = CreateRoomUseCase::new(Arc::new(repository), Duration::from_millis(1500));

        // when (操作):
        let room = usecase.execute(RoomDraft::named("Ride to Mall")).await;

        // then (期待する結果):
        assert_eq!(room.name, "Ride to Mall");
        assert_eq!(room.kind, RoomKind::Group);
        assert!(room.participants.is_empty());
        assert_eq!(room.metadata.status, RoomStatus::Pending);
        assert_eq!(room.metadata.ride_type, RideType::Auto);
        assert_eq!(room.created_at, room.updated_at);
        assert_eq!(room.metadata.scheduled_time, room.created_at);
        assert_ne!(room.id.as_str(), "1");
        assert_ne!(room.id.as_str(), "2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_creates_get_distinct_ids() {
        // テスト項目: 同時刻に作成されたルームでも ID が重複しない
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::default());
        let usecase = CreateRoomUseCase::new(repository.clone(), Duration::from_millis(1500));

        // when (操作): 20 件を同時に作成する
        let rooms = join_all((0..20).map(|_| usecase.execute(RoomDraft::default()))).await;

        // then (期待する結果):
        let ids: HashSet<_> = rooms.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(repository.list().await.len(), 20);
    }
}
