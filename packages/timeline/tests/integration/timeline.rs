use matryx_timeline::loader::load_event_log;
use matryx_timeline::{BubbleBody, RenderInstruction, TimeZoneChoice, Timeline, TimelineConfig};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/room_events.json")
}

fn utc_config() -> TimelineConfig {
    TimelineConfig { timezone: TimeZoneChoice::Utc, ..TimelineConfig::default() }
}

fn load() -> Timeline {
    let raw = load_event_log(&fixture()).expect("fixture should load");
    Timeline::with_config(raw, utc_config())
}

#[test]
fn test_every_event_yields_one_instruction() {
    let timeline = load();
    assert_eq!(timeline.len(), 16);
    assert_eq!(timeline.instructions().count(), 16);
}

#[test]
fn test_state_narration() {
    let instructions: Vec<_> = load().instructions().collect();
    let text = |i: usize| match &instructions[i] {
        RenderInstruction::PlainText(text) => text.clone(),
        other => panic!("expected plain text at {i}, got {other:?}"),
    };

    assert_eq!(text(0), "@alice:example.org created this room");
    assert_eq!(text(1), "@alice:example.org joined");
    assert_eq!(text(2), "@alice:example.org updated the room name to 'Crabs'.");
    assert_eq!(text(3), "@alice:example.org updated the topic to 'All things Rust'.");
    assert_eq!(text(4), "@bob:example.org was invited");
    assert_eq!(text(5), "@bob:example.org joined");
}

#[test]
fn test_message_bubbles() {
    let instructions: Vec<_> = load().instructions().collect();
    let bubble = |i: usize| instructions[i].as_bubble().cloned().expect("bubble");

    let first = bubble(6);
    assert_eq!(first.author_label.as_deref(), Some("@alice:exa"));
    assert_eq!(first.timestamp_label.as_deref(), Some("12:26"));
    assert_eq!(first.body, BubbleBody::Text("welcome".into()));
    assert!(first.is_first && !first.is_last);

    let image = bubble(7);
    assert_eq!(image.author_label, None);
    assert!(matches!(
        image.body,
        BubbleBody::Image { ref body, aspect_ratio: Some(ratio) }
            if body == "crab.png" && (ratio - 16.0 / 9.0).abs() < 1e-9
    ));

    let redacted = bubble(8);
    assert_eq!(redacted.body, BubbleBody::Redacted);
    assert!(redacted.is_last);

    assert_eq!(bubble(9).body, BubbleBody::Notice("thanks".into()));
    assert!(bubble(9).is_first);
    assert_eq!(bubble(10).body, BubbleBody::DecodeFailed);
    assert_eq!(bubble(11).body, BubbleBody::Fallback { kind: "File".into() });
    assert!(bubble(11).is_last);

    let emote = bubble(15);
    assert_eq!(emote.body, BubbleBody::Emote("waves".into()));
    assert!(emote.is_first && emote.is_last);
}

#[test]
fn test_placeholders() {
    let instructions: Vec<_> = load().instructions().collect();

    assert_eq!(
        instructions[12],
        RenderInstruction::Unsupported { event_type: "m.room.custom.widget".into() }
    );
    assert!(matches!(instructions[13], RenderInstruction::DecodeFailed { event_type: None, .. }));
    assert!(matches!(
        &instructions[14],
        RenderInstruction::Inconsistent { event_type, .. } if event_type == "m.room.member"
    ));

    let placeholders: Vec<usize> = instructions
        .iter()
        .enumerate()
        .filter(|(_, i)| i.is_placeholder())
        .map(|(index, _)| index)
        .collect();
    assert_eq!(placeholders, vec![10, 12, 13, 14]);
}

#[test]
fn test_runs_never_span_other_events() {
    let timeline = load();
    let instructions: Vec<_> = timeline.instructions().collect();

    for window in instructions.windows(2) {
        if let (Some(a), Some(b)) = (window[0].as_bubble(), window[1].as_bubble()) {
            assert_eq!(a.is_last, a.sender != b.sender);
            assert_eq!(b.is_first, a.sender != b.sender);
        } else {
            if let Some(a) = window[0].as_bubble() {
                assert!(a.is_last);
            }
            if let Some(b) = window[1].as_bubble() {
                assert!(b.is_first);
            }
        }
    }
}

#[test]
fn test_newest_first_is_reverse_of_input_order() {
    let timeline = load();
    let mut reversed: Vec<_> = timeline.instructions().rev().collect();
    reversed.reverse();
    assert_eq!(reversed, timeline.instructions().collect::<Vec<_>>());
}
