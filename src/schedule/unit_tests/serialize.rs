use crate::schedule::entry::ScheduleEntry;

#[test]
fn entry_serializes_to_tagged_json() {
    let entry = ScheduleEntry::parse("5 * backup.sh --full").unwrap();
    let value = serde_json::to_value(&entry).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "minute": { "specific": 5 },
            "hour": "wildcard",
            "command": "backup.sh --full"
        })
    );
}

#[test]
fn entry_round_trips_through_json() {
    let entry = ScheduleEntry::parse("59 23 rotate logs").unwrap();
    let json = serde_json::to_string(&entry).unwrap();
    let back: ScheduleEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(entry, back);
}
