//! REPL command parsing.

use tagalong_mock_api::domain::{DepartureSlot, RideRequest, RideType, RoomId, UserId};

use crate::error::CommandError;

const TAG_USAGE: &str = "tag <pickup> -> <destination> [auto|cab|any] [now|+5|+10]";

/// Quick action sent by `here`
pub const QUICK_HERE: &str = "I'm here";
/// Quick action sent by `late`
pub const QUICK_LATE: &str = "Running late";

/// What to dump with `json`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonTarget {
    Rooms,
    Messages,
}

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Rooms,
    Tag(RideRequest),
    Open(RoomId),
    Say(String),
    Messages,
    Whois(UserId),
    Countdown,
    Json(JsonTarget),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "rooms" | "ls" => Command::Rooms,
        "tag" => Command::Tag(parse_ride_request(rest)?),
        "open" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("open <room_id>"));
            }
            Command::Open(RoomId::new(rest))
        }
        "say" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("say <text>"));
            }
            Command::Say(rest.to_string())
        }
        "here" => Command::Say(QUICK_HERE.to_string()),
        "late" => Command::Say(QUICK_LATE.to_string()),
        "messages" | "msgs" => Command::Messages,
        "whois" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("whois <user_id>"));
            }
            Command::Whois(UserId::new(rest))
        }
        "countdown" => Command::Countdown,
        "json" => match rest {
            "rooms" => Command::Json(JsonTarget::Rooms),
            "messages" => Command::Json(JsonTarget::Messages),
            _ => return Err(CommandError::Usage("json <rooms|messages>")),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// `<pickup> -> <destination> [ride type] [slot]`
///
/// Ride type defaults to `any` and the slot to `now`. Trailing words that
/// parse as either are consumed from the end of the destination.
fn parse_ride_request(rest: &str) -> Result<RideRequest, CommandError> {
    let Some((pickup, tail)) = rest.split_once("->") else {
        return Err(CommandError::Usage(TAG_USAGE));
    };

    let mut words: Vec<&str> = tail.split_whitespace().collect();
    let mut ride_type: Option<RideType> = None;
    let mut departure: Option<DepartureSlot> = None;

    while let Some(&last) = words.last() {
        match (last.parse::<DepartureSlot>(), last.parse::<RideType>()) {
            (Ok(slot), _) if departure.is_none() => departure = Some(slot),
            (_, Ok(kind)) if ride_type.is_none() => ride_type = Some(kind),
            _ => break,
        }
        words.pop();
    }

    let pickup = pickup.trim();
    let destination = words.join(" ");
    if pickup.is_empty() || destination.is_empty() {
        return Err(CommandError::Usage(TAG_USAGE));
    }

    Ok(RideRequest {
        pickup: pickup.to_string(),
        destination,
        ride_type: ride_type.unwrap_or(RideType::Any),
        departure: departure.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_ignored() {
        // テスト項目: 空行はコマンドにならない
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_simple_commands() {
        // テスト項目: 引数なしのコマンドをパースできる
        // then (期待する結果):
        assert_eq!(parse_command("rooms"), Ok(Some(Command::Rooms)));
        assert_eq!(parse_command("messages"), Ok(Some(Command::Messages)));
        assert_eq!(parse_command("countdown"), Ok(Some(Command::Countdown)));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
        assert_eq!(
            parse_command("json rooms"),
            Ok(Some(Command::Json(JsonTarget::Rooms)))
        );
    }

    #[test]
    fn test_say_and_quick_actions() {
        // テスト項目: 本文付きの送信とクイックアクションをパースできる
        // then (期待する結果):
        assert_eq!(
            parse_command("say  see you at the gate "),
            Ok(Some(Command::Say("see you at the gate".to_string())))
        );
        assert_eq!(
            parse_command("here"),
            Ok(Some(Command::Say("I'm here".to_string())))
        );
        assert_eq!(
            parse_command("late"),
            Ok(Some(Command::Say("Running late".to_string())))
        );
        assert_eq!(parse_command("say"), Err(CommandError::Usage("say <text>")));
    }

    #[test]
    fn test_tag_with_all_options() {
        // テスト項目: 乗車場所・目的地・種別・出発枠を指定してパースできる
        // when (操作):
        let result = parse_command("tag Financial District -> Union Square cab +10");

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Some(Command::Tag(RideRequest {
                pickup: "Financial District".to_string(),
                destination: "Union Square".to_string(),
                ride_type: RideType::Cab,
                departure: DepartureSlot::InTenMinutes,
            })))
        );
    }

    #[test]
    fn test_tag_defaults() {
        // テスト項目: 種別と出発枠を省略すると any / now になる
        // when (操作):
        let result = parse_command("tag home -> Mall");

        // then (期待する結果):
        let Ok(Some(Command::Tag(request))) = result else {
            panic!("expected a tag command");
        };
        assert_eq!(request.destination, "Mall");
        assert_eq!(request.ride_type, RideType::Any);
        assert_eq!(request.departure, DepartureSlot::Now);
    }

    #[test]
    fn test_tag_without_destination_fails() {
        // テスト項目: 目的地や矢印が無い場合は使い方エラーになる
        // then (期待する結果):
        assert_eq!(
            parse_command("tag home -> auto"),
            Err(CommandError::Usage(TAG_USAGE))
        );
        assert_eq!(
            parse_command("tag home Mall"),
            Err(CommandError::Usage(TAG_USAGE))
        );
    }

    #[test]
    fn test_unknown_command() {
        // テスト項目: 未知のコマンドはエラーになる
        assert_eq!(
            parse_command("fly away"),
            Err(CommandError::Unknown("fly".to_string()))
        );
    }
}
