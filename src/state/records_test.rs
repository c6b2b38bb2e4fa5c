use super::*;
use serde_json::json;

fn payload<R: Record>(form: &FormValues) -> serde_json::Value {
    serde_json::to_value(R::from_form(form)).unwrap()
}

#[test]
fn gang_payload_coerces_count_and_flag() {
    let mut form = FormValues::defaults(Gang::FIELDS);
    form.set("name", "Grape Street");
    form.set("tag", "GS");
    form.set("color", "#800080");
    form.set("member_count", "not a number");
    form.set_flag("is_active", false);

    assert_eq!(
        payload::<Gang>(&form),
        json!({
            "name": "Grape Street",
            "tag": "GS",
            "color": "#800080",
            "threat_level": "MEDIUM",
            "member_count": 0,
            "territory": "",
            "description": "",
            "is_active": false
        })
    );
}

#[test]
fn member_payload_sends_null_gang_for_blank_reference() {
    let mut form = FormValues::defaults(Member::FIELDS);
    form.set("name", "Ray");
    let value = payload::<Member>(&form);
    assert_eq!(value["gang_id"], serde_json::Value::Null);
    assert_eq!(value["threat_level"], "LOW");
    assert_eq!(value["status"], "ACTIVE");

    form.set("gang_id", "4");
    assert_eq!(payload::<Member>(&form)["gang_id"], 4);
}

#[test]
fn incident_payload_has_exactly_form_fields() {
    let value = payload::<Incident>(&FormValues::defaults(Incident::FIELDS));
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        ["description", "evidence", "incident_type", "location", "severity", "status", "title"]
    );
    assert_eq!(value["incident_type"], "OTHER");
}

#[test]
fn case_payload_never_contains_image() {
    let value = payload::<CaseFile>(&FormValues::defaults(CaseFile::FIELDS));
    assert!(value.get("image").is_none());
    assert_eq!(value["priority"], "MEDIUM");
    assert_eq!(value["status"], "OPEN");
}

#[test]
fn relationship_payload_parses_both_gang_ids() {
    let mut form = FormValues::defaults(Relationship::FIELDS);
    form.set("gang_1_id", "1");
    form.set("gang_2_id", "2");
    form.set("relationship_type", "RIVAL");
    assert_eq!(
        payload::<Relationship>(&form),
        json!({ "gang_1_id": 1, "gang_2_id": 2, "relationship_type": "RIVAL", "notes": "" })
    );
}

#[test]
fn to_form_then_from_form_preserves_member() {
    let member = Member {
        name: "Ray".to_owned(),
        alias: "Smoke".to_owned(),
        gang_id: Some(3),
        rank: "OG".to_owned(),
        threat_level: "HIGH".to_owned(),
        status: "WANTED".to_owned(),
        criminal_record: "priors".to_owned(),
        notes: String::new(),
    };
    assert_eq!(Member::from_form(&member.to_form()), member);
}

#[test]
fn to_form_writes_gang_flag_and_count() {
    let gang = Gang { member_count: 12, is_active: false, ..Gang::default() };
    let form = gang.to_form();
    assert_eq!(form.get("member_count"), "12");
    assert!(!form.flag("is_active"));
}

#[test]
fn field_names_match_payload_keys() {
    fn check<R: Record>() {
        let value = payload::<R>(&FormValues::defaults(R::FIELDS));
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), R::FIELDS.len(), "{:?}", R::KIND);
        for field in R::FIELDS {
            assert!(object.contains_key(field.name), "{:?} missing {}", R::KIND, field.name);
        }
    }
    check::<Gang>();
    check::<Member>();
    check::<Incident>();
    check::<CaseFile>();
    check::<Relationship>();
}

#[test]
fn choice_defaults_are_valid_choices() {
    fn check<R: Record>() {
        for field in R::FIELDS {
            if let FieldKind::Choice(choices) = field.kind {
                assert!(choices.iter().any(|c| c.value == field.default), "{:?} {}", R::KIND, field.name);
            }
        }
    }
    check::<Gang>();
    check::<Member>();
    check::<Incident>();
    check::<CaseFile>();
    check::<Relationship>();
}
