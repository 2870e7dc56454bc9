//! Interactive session state: the current user, the open room and the
//! screen-like flows (ride list, tag a ride, matching, chat).

use std::{collections::HashMap, time::Duration};

use tagalong_mock_api::{
    MockApi,
    domain::{Message, NewMessage, RideRequest, Room, RoomId, User, UserId, departure_countdown},
};
use tagalong_shared::time::now_utc;

use crate::{
    command::{Command, JsonTarget},
    config::ClientConfig,
    error::ClientError,
    render,
};

const HELP: &str = "\
commands:
  rooms                                   list rides
  tag <pickup> -> <destination> [auto|cab|any] [now|+5|+10]
                                          create a ride and wait for matching
  open <room_id>                          open a ride's chat
  say <text> | here | late                send a message to the open chat
  messages                                reload the open chat
  countdown                               time until departure
  whois <user_id>                         look up a user
  json <rooms|messages>                   dump as JSON
  help | quit";

/// Chat the session currently has open
#[derive(Debug, Clone)]
struct OpenRoom {
    id: RoomId,
    /// Known when the room was in the ride list at open time
    room: Option<Room>,
}

/// Result of handling one command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Outcome {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }
}

pub struct Session {
    api: MockApi,
    current_user: UserId,
    matching_wait: Duration,
    open_room: Option<OpenRoom>,
    /// Display names already looked up, by user id
    names: HashMap<UserId, Option<String>>,
}

impl Session {
    pub fn new(api: MockApi, config: &ClientConfig) -> Self {
        Self {
            api,
            current_user: config.current_user.clone(),
            matching_wait: config.matching_wait,
            open_room: None,
            names: HashMap::new(),
        }
    }

    /// Room id of the open chat, if any
    pub fn open_room_id(&self) -> Option<&RoomId> {
        self.open_room.as_ref().map(|open| &open.id)
    }

    pub async fn handle(&mut self, command: Command) -> Result<Outcome, ClientError> {
        match command {
            Command::Rooms => Ok(Outcome::lines(self.ride_list().await)),
            Command::Tag(request) => Ok(Outcome::lines(self.tag_ride(request).await)),
            Command::Open(room_id) => Ok(Outcome::lines(self.open(room_id).await)),
            Command::Say(text) => self.say(text).await,
            Command::Messages => {
                let room_id = self.require_open_room()?.clone();
                Ok(Outcome::lines(self.chat_lines(&room_id).await))
            }
            Command::Whois(user_id) => Ok(Outcome::line(match self.api.get_user(&user_id).await {
                Some(user) => render::user_card(&user),
                None => format!("no user with id '{user_id}'"),
            })),
            Command::Countdown => {
                let open = self.open_room.as_ref().ok_or(ClientError::NoRoomOpen)?;
                let departure = open.room.as_ref().map(|r| r.metadata.scheduled_time);
                Ok(Outcome::line(departure_countdown(departure, now_utc())))
            }
            Command::Json(target) => self.json(target).await,
            Command::Help => Ok(Outcome::line(HELP)),
            Command::Quit => Ok(Outcome {
                lines: Vec::new(),
                quit: true,
            }),
        }
    }

    async fn ride_list(&self) -> Vec<String> {
        let rooms = self.api.list_rooms().await;
        if rooms.is_empty() {
            return vec!["no rides yet".to_string()];
        }
        let now = now_utc();
        rooms
            .iter()
            .map(|room| render::ride_card(room, now))
            .collect()
    }

    /// Create the ride, sit through the matching wait, then show the ride list
    async fn tag_ride(&self, request: RideRequest) -> Vec<String> {
        let room = self.api.create_room(request.into_draft(now_utc())).await;
        tracing::info!(room_id = %room.id, "ride created");

        let mut lines = vec![
            format!("created ride [{}] {}", room.id, room.name),
            "Finding ride buddies...".to_string(),
        ];
        // Matching is a fixed wait; no participants are added.
        tokio::time::sleep(self.matching_wait).await;
        lines.extend(self.ride_list().await);
        lines
    }

    async fn open(&mut self, room_id: RoomId) -> Vec<String> {
        let room = self
            .api
            .list_rooms()
            .await
            .into_iter()
            .find(|room| room.id == room_id);

        let header = match &room {
            Some(room) => format!(
                "-- {} ({}) --",
                room.metadata.destination.address, room.name
            ),
            None => "-- No destination set --".to_string(),
        };
        if let Some(room) = &room {
            for participant in &room.participants {
                self.names
                    .insert(participant.id.clone(), Some(participant.name.clone()));
            }
        }
        self.open_room = Some(OpenRoom {
            id: room_id.clone(),
            room,
        });

        let mut lines = vec![header];
        lines.extend(self.chat_lines(&room_id).await);
        lines
    }

    async fn say(&mut self, text: String) -> Result<Outcome, ClientError> {
        let room_id = self.require_open_room()?.clone();
        if text.trim().is_empty() {
            return Ok(Outcome::default());
        }

        let message = self
            .api
            .send_message(NewMessage::text(text, self.current_user.clone(), room_id))
            .await;
        Ok(Outcome::line(render::message_line(&message, None, true)))
    }

    async fn chat_lines(&mut self, room_id: &RoomId) -> Vec<String> {
        let messages = self.api.get_room_messages(room_id).await;
        if messages.is_empty() {
            return vec!["(no messages yet)".to_string()];
        }

        let mut lines = Vec::with_capacity(messages.len());
        for message in &messages {
            lines.push(self.render_message(message).await);
        }
        lines
    }

    async fn render_message(&mut self, message: &Message) -> String {
        if message.sender_id == self.current_user {
            return render::message_line(message, None, true);
        }
        let name = self.sender_name(&message.sender_id).await;
        render::message_line(message, name.as_deref(), false)
    }

    /// Participant names are known from the open room; anyone else is
    /// looked up once.
    async fn sender_name(&mut self, user_id: &UserId) -> Option<String> {
        if let Some(name) = self.names.get(user_id) {
            return name.clone();
        }
        let name = self.api.get_user(user_id).await.map(|user: User| user.name);
        self.names.insert(user_id.clone(), name.clone());
        name
    }

    async fn json(&self, target: JsonTarget) -> Result<Outcome, ClientError> {
        let json = match target {
            JsonTarget::Rooms => serde_json::to_string_pretty(&self.api.list_rooms().await)?,
            JsonTarget::Messages => {
                let room_id = self.require_open_room()?;
                serde_json::to_string_pretty(&self.api.get_room_messages(room_id).await)?
            }
        };
        Ok(Outcome::line(json))
    }

    fn require_open_room(&self) -> Result<&RoomId, ClientError> {
        self.open_room_id().ok_or(ClientError::NoRoomOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagalong_mock_api::{LatencyProfile, MockStore, domain::RideType};

    fn session() -> Session {
        let config = ClientConfig {
            latency: LatencyProfile::instant(),
            current_user: UserId::new("1"),
            matching_wait: Duration::from_millis(3000),
        };
        Session::new(MockApi::new(MockStore::seeded(), config.latency), &config)
    }

    #[tokio::test]
    async fn test_rooms_lists_seeded_rides() {
        // テスト項目: シードの 2 件のライドが一覧表示される
        // given (前提条件):
        let mut session = session();

        // when (操作):
        let outcome = session.handle(Command::Rooms).await.unwrap();

        // then (期待する結果):
        assert_eq!(outcome.lines.len(), 2);
        assert!(outcome.lines[0].starts_with("[1] Downtown San Francisco"));
        assert!(outcome.lines[1].contains("🚕 cab"));
        assert!(!outcome.quit);
    }

    #[tokio::test]
    async fn test_open_room_shows_named_messages() {
        // テスト項目: ルームを開くと参加者名付きでメッセージが表示され、自分の発言は "You" になる
        // given (前提条件):
        let mut session = session();

        // when (操作):
        let outcome = session
            .handle(Command::Open(RoomId::new("1")))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(
            outcome.lines,
            vec![
                "-- Downtown San Francisco (Let's go to the mall) --".to_string(),
                "[10:30] Jane Smith: Hey, I'm on my way!".to_string(),
                "[10:31] You: Great, I'll be there in 5 minutes".to_string(),
            ]
        );
        assert_eq!(session.open_room_id(), Some(&RoomId::new("1")));
    }

    #[tokio::test]
    async fn test_say_requires_open_room() {
        // テスト項目: ルームを開いていない状態での送信はエラーになる
        // given (前提条件):
        let mut session = session();

        // when (操作):
        let result = session.handle(Command::Say("hi".to_string())).await;

        // then (期待する結果):
        assert!(matches!(result, Err(ClientError::NoRoomOpen)));
    }

    #[tokio::test]
    async fn test_say_then_reload_shows_message() {
        // テスト項目: 送信したメッセージが再読み込みで表示される
        // given (前提条件):
        let mut session = session();
        session
            .handle(Command::Open(RoomId::new("2")))
            .await
            .unwrap();

        // when (操作):
        session
            .handle(Command::Say("Running late".to_string()))
            .await
            .unwrap();
        let blank = session.handle(Command::Say("   ".to_string())).await.unwrap();
        let outcome = session.handle(Command::Messages).await.unwrap();

        // then (期待する結果):
        assert!(blank.lines.is_empty());
        assert_eq!(outcome.lines.len(), 1);
        assert!(outcome.lines[0].ends_with("You: Running late"));
    }

    #[tokio::test]
    async fn test_unknown_sender_is_looked_up() {
        // テスト項目: 参加者以外の送信者は get user で名前を解決する
        // given (前提条件): Mike は room 1 の参加者ではない
        let mut session = session();
        let api = session.api.clone();
        api.send_message(NewMessage::text("mind if I join?", "3", "1"))
            .await;

        // when (操作):
        let outcome = session
            .handle(Command::Open(RoomId::new("1")))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(outcome.lines[3].ends_with("Mike Johnson: mind if I join?"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tag_creates_ride_and_waits_for_matching() {
        // テスト項目: ライド作成後にマッチング待機を経て一覧が表示される
        // given (前提条件):
        let mut session = session();
        let start = tokio::time::Instant::now();
        let request = RideRequest {
            pickup: "Financial District".to_string(),
            destination: "Mall".to_string(),
            ride_type: RideType::Auto,
            departure: Default::default(),
        };

        // when (操作):
        let outcome = session.handle(Command::Tag(request)).await.unwrap();

        // then (期待する結果):
        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert!(outcome.lines[0].ends_with("Ride to Mall"));
        assert_eq!(outcome.lines[1], "Finding ride buddies...");
        assert_eq!(outcome.lines.len(), 2 + 3);
        assert!(outcome.lines[4].contains("pending"));
    }

    #[tokio::test]
    async fn test_countdown_for_unlisted_room() {
        // テスト項目: 一覧に無いルームでは出発時刻未設定と表示される
        // given (前提条件):
        let mut session = session();
        session
            .handle(Command::Open(RoomId::new("ghost")))
            .await
            .unwrap();

        // when (操作):
        let outcome = session.handle(Command::Countdown).await.unwrap();

        // then (期待する結果):
        assert_eq!(outcome.lines, vec!["No departure time set".to_string()]);
    }

    #[tokio::test]
    async fn test_whois_and_json() {
        // テスト項目: ユーザー検索と JSON 出力ができる
        // given (前提条件):
        let mut session = session();

        // when (操作):
        let found = session
            .handle(Command::Whois(UserId::new("2")))
            .await
            .unwrap();
        let missing = session
            .handle(Command::Whois(UserId::new("404")))
            .await
            .unwrap();
        let json = session
            .handle(Command::Json(JsonTarget::Rooms))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(found.lines[0].contains("Jane Smith"));
        assert_eq!(missing.lines, vec!["no user with id '404'".to_string()]);
        let rooms: serde_json::Value = serde_json::from_str(&json.lines[0]).unwrap();
        assert_eq!(rooms.as_array().map(Vec::len), Some(2));
        assert_eq!(rooms[1]["metadata"]["ride_type"], "cab");
    }

    #[tokio::test]
    async fn test_quit() {
        // テスト項目: quit でセッション終了が通知される
        let mut session = session();
        let outcome = session.handle(Command::Quit).await.unwrap();
        assert!(outcome.quit);
    }
}
