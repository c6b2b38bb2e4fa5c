use super::*;

#[test]
fn entity_segments_match_api_paths() {
    let segments: Vec<_> = EntityKind::ALL.iter().map(|k| k.segment()).collect();
    assert_eq!(segments, ["gang", "member", "incident", "case", "relationship"]);
}

#[test]
fn entity_from_segment_round_trips_every_kind() {
    for kind in EntityKind::ALL {
        assert_eq!(EntityKind::from_segment(kind.segment()), Some(kind));
    }
    assert_eq!(EntityKind::from_segment("Gang"), None);
    assert_eq!(EntityKind::from_segment(""), None);
}

#[test]
fn api_response_parses_create_success() {
    let body = serde_json::json!({ "success": true, "id": 42, "message": "Gang created successfully" });
    let parsed: ApiResponse = serde_json::from_value(body).unwrap();
    assert!(parsed.success);
    assert_eq!(parsed.id, Some(42));
    assert_eq!(parsed.error, None);
}

#[test]
fn api_response_parses_error_body_without_success_flag() {
    let parsed: ApiResponse = serde_json::from_value(serde_json::json!({ "error": "Edit mode not enabled" })).unwrap();
    assert!(!parsed.success);
    assert_eq!(parsed.error.as_deref(), Some("Edit mode not enabled"));
}

#[test]
fn member_serializes_missing_gang_as_null() {
    let member = Member { name: "Ray".to_owned(), ..Member::default() };
    let value = serde_json::to_value(&member).unwrap();
    assert_eq!(value["gang_id"], serde_json::Value::Null);
    assert_eq!(value["name"], "Ray");
}

#[test]
fn gang_deserializes_detail_body_with_extra_fields() {
    let body = serde_json::json!({
        "id": 3,
        "name": "Grape Street",
        "tag": "GS",
        "color": "#800080",
        "threat_level": "HIGH",
        "member_count": 12,
        "is_active": true,
        "created_at": "2024-01-01T00:00:00Z"
    });
    let gang: Gang = serde_json::from_value(body).unwrap();
    assert_eq!(gang.tag, "GS");
    assert_eq!(gang.member_count, 12);
    assert_eq!(gang.territory, "");
}

#[test]
fn choice_tables_have_unique_values() {
    for table in [
        THREAT_LEVELS,
        MEMBER_STATUSES,
        INCIDENT_TYPES,
        INCIDENT_STATUSES,
        CASE_PRIORITIES,
        CASE_STATUSES,
        RELATIONSHIP_TYPES,
    ] {
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert_ne!(a.value, b.value);
            }
        }
    }
}
