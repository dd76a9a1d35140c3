/// Integration tests for parsing chat logs end to end
mod common;

use std::fs::OpenOptions;
use std::io::Write;

use chatlog_explorer::{
    ParseError, ParseOptions, Timestamp, build_index, parse_chat_log, parse_chat_log_file,
};
use common::{ChatLogBuilder, LogDirBuilder, utf16};

fn sample_log() -> ChatLogBuilder {
    ChatLogBuilder::local_channel()
        .message("2020.01.02 03:04:06", "Alice", "hello")
        .message("2020.01.02 03:04:07", "Bob", "hi: there > x")
        .raw_line("not a message line")
        .message("2020.01.02 03:04:08", "EVE System", "Channel changed to Local : Jita")
}

#[test]
fn test_parse_complete_log() {
    let buffer = sample_log().build();
    let result = parse_chat_log(&buffer, &ParseOptions::default()).unwrap();

    assert_eq!(result.byte_length, buffer.len());
    assert_eq!(result.header.len(), 4);
    assert_eq!(result.header.get("channelId"), Some("local"));
    assert_eq!(result.header.get("channelName"), Some("Local"));
    assert_eq!(result.header.get("listener"), Some("Some Pilot"));
    assert_eq!(result.header.get("sessionStarted"), Some("2020-01-02T03:04:05Z"));

    let senders: Vec<&str> = result.messages.iter().map(|m| m.sender.as_str()).collect();
    assert_eq!(senders, vec!["Alice", "Bob", "EVE System"]);
    assert_eq!(result.messages[0].timestamp.to_string(), "2020-01-02T03:04:06Z");
    assert_eq!(result.messages[1].text, "hi: there > x");
    assert_eq!(result.messages[2].text, "Channel changed to Local : Jita");
}

#[test]
fn test_parse_result_json_shape() {
    let buffer = ChatLogBuilder::new()
        .header_line("Listener: Some Pilot")
        .message("2020.01.02 03:04:06", "Alice", "hello")
        .build();
    let result = parse_chat_log(&buffer, &ParseOptions::default()).unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["header"]["listener"], "Some Pilot");
    assert_eq!(value["messages"][0]["timestamp"], "2020-01-02T03:04:06Z");
    assert_eq!(value["messages"][0]["sender"], "Alice");
    assert_eq!(value["messages"][0]["text"], "hello");
    assert_eq!(value["byteLength"], buffer.len());
}

#[test]
fn test_resume_from_previous_byte_length() {
    let log = sample_log();
    let mut buffer = log.build();
    let first = parse_chat_log(&buffer, &ParseOptions::default()).unwrap();

    buffer.extend(utf16("[ 2020.01.02 03:05:00 ] Carol > late\r\n"));
    let resumed = parse_chat_log(&buffer, &ParseOptions::with_offset(first.byte_length)).unwrap();

    assert_eq!(resumed.header, first.header);
    assert_eq!(resumed.messages.len(), 1);
    assert_eq!(resumed.messages[0].sender, "Carol");
    assert_eq!(resumed.messages[0].text, "late");
    assert!(resumed.byte_length > first.byte_length);
}

#[test]
fn test_offset_inside_header_falls_back_to_default() {
    let buffer = sample_log().build();
    let full = parse_chat_log(&buffer, &ParseOptions::default()).unwrap();

    for offset in [0, 10, 200] {
        let result = parse_chat_log(&buffer, &ParseOptions::with_offset(offset)).unwrap();
        assert_eq!(result, full, "offset {offset}");
    }
}

#[test]
fn test_offset_past_end_yields_no_messages() {
    let buffer = sample_log().build();
    let result = parse_chat_log(&buffer, &ParseOptions::with_offset(buffer.len() + 100)).unwrap();

    assert!(result.messages.is_empty());
    assert_eq!(result.header.len(), 4);
    assert_eq!(result.byte_length, buffer.len());
}

#[test]
fn test_options_from_json_value() {
    let buffer = sample_log().build();
    let first = parse_chat_log(&buffer, &ParseOptions::default()).unwrap();

    let options = ParseOptions::from_value(&serde_json::json!({ "offset": 3.0 })).unwrap();
    assert_eq!(parse_chat_log(&buffer, &options).unwrap(), first);

    let err = ParseOptions::from_value(&serde_json::json!({ "offset": -1 })).unwrap_err();
    assert!(matches!(err, ParseError::InvalidArgument(_)));
}

#[test]
fn test_parse_file_picks_up_appended_messages() {
    let dir = LogDirBuilder::new().with_log("Local_20200102_030405_1.txt", &sample_log());
    let path = dir.file_path("Local_20200102_030405_1.txt");

    let first = parse_chat_log_file(&path, &ParseOptions::default()).unwrap();
    assert_eq!(first.messages.len(), 3);

    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(&utf16("[ 2020.01.02 03:05:00 ] Carol > late\r\n")).unwrap();
    file.flush().unwrap();

    let tail = parse_chat_log_file(&path, &ParseOptions::with_offset(first.byte_length)).unwrap();
    assert_eq!(tail.messages.len(), 1);
    assert_eq!(tail.messages[0].sender, "Carol");
}

#[test]
fn test_parse_file_error_keeps_format_cause() {
    let dir = LogDirBuilder::new().with_file("Local.txt", &utf16("just some text"));
    let err = parse_chat_log_file(&dir.file_path("Local.txt"), &ParseOptions::default())
        .unwrap_err();

    assert!(format!("{err:#}").contains("invalid file format"));
    assert!(matches!(err.downcast_ref::<ParseError>(), Some(ParseError::InvalidFormat(_))));
}

#[test]
fn test_build_index_merges_directory() {
    let corp = ChatLogBuilder::new()
        .header_line("Channel Name:    Corp")
        .message("2020.01.03 10:00:00", "Dave", "fleet up")
        .message("2020.01.01 09:00:00", "Erin", "morning");

    let dir = LogDirBuilder::new()
        .with_log("Local_20200102.txt", &sample_log())
        .with_log("nested/Corp_20200103.txt", &corp)
        .with_file("notes.md", b"not a log");

    let index = build_index(dir.path()).unwrap();

    assert_eq!(index.files_parsed, 2);
    assert_eq!(index.files_failed, 0);
    assert_eq!(index.len(), 5);

    // Newest first across files
    assert_eq!(index.messages[0].message.sender, "Dave");
    assert_eq!(index.messages[0].channel_name.as_deref(), Some("Corp"));
    assert_eq!(index.messages[4].message.sender, "Erin");
    assert!(index.messages.iter().all(|m| m.message.timestamp.is_valid()));
}

#[test]
fn test_build_index_places_unparseable_timestamps_last() {
    let log = ChatLogBuilder::local_channel()
        .raw_line("[ not a real time     ] Ghost > boo")
        .message("2020.01.02 03:04:06", "Alice", "hello");
    let dir = LogDirBuilder::new().with_log("Local.txt", &log);

    let index = build_index(dir.path()).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index.messages[0].message.sender, "Alice");
    assert_eq!(index.messages[1].message.sender, "Ghost");
    assert!(!index.messages[1].message.timestamp.is_valid());
    assert_eq!(index.messages[1].message.timestamp.to_string(), Timestamp::INVALID);
}
