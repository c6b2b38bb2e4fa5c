use super::*;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::text("member_count", "Members").with_kind(FieldKind::Number).with_default("0"),
    FieldSpec::text("is_active", "Active").with_kind(FieldKind::Flag).with_default(FLAG_ON),
];

#[test]
fn parse_leading_int_accepts_prefix_digits() {
    assert_eq!(parse_leading_int("42"), Some(42));
    assert_eq!(parse_leading_int("  7"), Some(7));
    assert_eq!(parse_leading_int("12 members"), Some(12));
    assert_eq!(parse_leading_int("-3"), Some(-3));
    assert_eq!(parse_leading_int("+5"), Some(5));
}

#[test]
fn parse_leading_int_rejects_non_numbers() {
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("x12"), None);
}

#[test]
fn parse_leading_int_rejects_overflow() {
    assert_eq!(parse_leading_int("99999999999999999999"), None);
}

#[test]
fn defaults_restore_each_field_default() {
    let form = FormValues::defaults(FIELDS);
    assert_eq!(form.get("name"), "");
    assert_eq!(form.get("member_count"), "0");
    assert!(form.flag("is_active"));
}

#[test]
fn missing_field_reads_empty() {
    let form = FormValues::default();
    assert_eq!(form.get("nope"), "");
    assert_eq!(form.reference("nope"), None);
    assert_eq!(form.number_or_zero("nope"), 0);
}

#[test]
fn number_or_zero_falls_back_on_garbage() {
    let mut form = FormValues::defaults(FIELDS);
    form.set("member_count", "lots");
    assert_eq!(form.number_or_zero("member_count"), 0);
    form.set("member_count", "25");
    assert_eq!(form.number_or_zero("member_count"), 25);
}

#[test]
fn flags_round_trip_through_strings() {
    let mut form = FormValues::defaults(FIELDS);
    form.set_flag("is_active", false);
    assert_eq!(form.get("is_active"), FLAG_OFF);
    assert!(!form.flag("is_active"));
}

#[test]
fn references_serialize_empty_when_absent() {
    let mut form = FormValues::default();
    form.set_reference("gang_id", None);
    assert_eq!(form.get("gang_id"), "");
    form.set_reference("gang_id", Some(9));
    assert_eq!(form.reference("gang_id"), Some(9));
}

#[test]
fn field_builders_compose() {
    let spec = FIELDS[1];
    assert_eq!(spec.kind, FieldKind::Number);
    assert_eq!(spec.default, "0");
    assert!(!spec.required);
    assert!(FIELDS[0].required);
}
