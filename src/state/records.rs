//! Per-entity form layouts and payload mapping.
//!
//! DESIGN
//! ======
//! One [`Record`] impl per entity is the only entity-specific code: the
//! generic editor, modal and controller are parameterized by it.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::form::{FLAG_ON, FieldKind, FieldSpec, FormValues};
use crate::net::types::{
    CASE_PRIORITIES, CASE_STATUSES, CaseFile, EntityKind, Gang, INCIDENT_STATUSES, INCIDENT_TYPES, Incident,
    MEMBER_STATUSES, Member, RELATIONSHIP_TYPES, Relationship, THREAT_LEVELS,
};

/// A record type editable through a modal form.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;
    const FIELDS: &'static [FieldSpec];

    /// Build the submit payload from current form values.
    fn from_form(form: &FormValues) -> Self;

    /// Form values showing this record, used to populate the edit modal.
    fn to_form(&self) -> FormValues;
}

impl Record for Gang {
    const KIND: EntityKind = EntityKind::Gang;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("tag", "Tag").required(),
        FieldSpec::text("color", "Color").with_kind(FieldKind::Color).with_default("#FF0000"),
        FieldSpec::choice("threat_level", "Threat Level", THREAT_LEVELS, "MEDIUM"),
        FieldSpec::text("member_count", "Member Count").with_kind(FieldKind::Number).with_default("0"),
        FieldSpec::long_text("territory", "Territory"),
        FieldSpec::long_text("description", "Description"),
        FieldSpec::text("is_active", "Active").with_kind(FieldKind::Flag).with_default(FLAG_ON),
    ];

    fn from_form(form: &FormValues) -> Self {
        Self {
            name: form.text("name"),
            tag: form.text("tag"),
            color: form.text("color"),
            threat_level: form.text("threat_level"),
            member_count: form.number_or_zero("member_count"),
            territory: form.text("territory"),
            description: form.text("description"),
            is_active: form.flag("is_active"),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut form = FormValues::defaults(Self::FIELDS);
        form.set("name", &self.name);
        form.set("tag", &self.tag);
        form.set("color", &self.color);
        form.set("threat_level", &self.threat_level);
        form.set("member_count", self.member_count.to_string());
        form.set("territory", &self.territory);
        form.set("description", &self.description);
        form.set_flag("is_active", self.is_active);
        form
    }
}

impl Record for Member {
    const KIND: EntityKind = EntityKind::Member;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("alias", "Alias"),
        FieldSpec::text("gang_id", "Gang ID").with_kind(FieldKind::Reference(EntityKind::Gang)).required(),
        FieldSpec::text("rank", "Rank"),
        FieldSpec::choice("threat_level", "Threat Level", THREAT_LEVELS, "LOW"),
        FieldSpec::choice("status", "Status", MEMBER_STATUSES, "ACTIVE"),
        FieldSpec::long_text("criminal_record", "Criminal Record"),
        FieldSpec::long_text("notes", "Notes"),
    ];

    fn from_form(form: &FormValues) -> Self {
        Self {
            name: form.text("name"),
            alias: form.text("alias"),
            gang_id: form.reference("gang_id"),
            rank: form.text("rank"),
            threat_level: form.text("threat_level"),
            status: form.text("status"),
            criminal_record: form.text("criminal_record"),
            notes: form.text("notes"),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut form = FormValues::defaults(Self::FIELDS);
        form.set("name", &self.name);
        form.set("alias", &self.alias);
        form.set_reference("gang_id", self.gang_id);
        form.set("rank", &self.rank);
        form.set("threat_level", &self.threat_level);
        form.set("status", &self.status);
        form.set("criminal_record", &self.criminal_record);
        form.set("notes", &self.notes);
        form
    }
}

impl Record for Incident {
    const KIND: EntityKind = EntityKind::Incident;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::choice("incident_type", "Type", INCIDENT_TYPES, "OTHER"),
        FieldSpec::text("location", "Location").required(),
        FieldSpec::long_text("description", "Description").required(),
        FieldSpec::choice("severity", "Severity", THREAT_LEVELS, "MEDIUM"),
        FieldSpec::choice("status", "Status", INCIDENT_STATUSES, "OPEN"),
        FieldSpec::long_text("evidence", "Evidence"),
    ];

    fn from_form(form: &FormValues) -> Self {
        Self {
            title: form.text("title"),
            incident_type: form.text("incident_type"),
            location: form.text("location"),
            description: form.text("description"),
            severity: form.text("severity"),
            status: form.text("status"),
            evidence: form.text("evidence"),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut form = FormValues::defaults(Self::FIELDS);
        form.set("title", &self.title);
        form.set("incident_type", &self.incident_type);
        form.set("location", &self.location);
        form.set("description", &self.description);
        form.set("severity", &self.severity);
        form.set("status", &self.status);
        form.set("evidence", &self.evidence);
        form
    }
}

impl Record for CaseFile {
    const KIND: EntityKind = EntityKind::Case;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("case_number", "Case Number").required(),
        FieldSpec::text("title", "Title").required(),
        FieldSpec::long_text("description", "Description").required(),
        FieldSpec::choice("priority", "Priority", CASE_PRIORITIES, "MEDIUM"),
        FieldSpec::choice("status", "Status", CASE_STATUSES, "OPEN"),
        FieldSpec::long_text("notes", "Notes"),
    ];

    fn from_form(form: &FormValues) -> Self {
        Self {
            case_number: form.text("case_number"),
            title: form.text("title"),
            description: form.text("description"),
            priority: form.text("priority"),
            status: form.text("status"),
            notes: form.text("notes"),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut form = FormValues::defaults(Self::FIELDS);
        form.set("case_number", &self.case_number);
        form.set("title", &self.title);
        form.set("description", &self.description);
        form.set("priority", &self.priority);
        form.set("status", &self.status);
        form.set("notes", &self.notes);
        form
    }
}

impl Record for Relationship {
    const KIND: EntityKind = EntityKind::Relationship;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("gang_1_id", "First Gang ID").with_kind(FieldKind::Reference(EntityKind::Gang)).required(),
        FieldSpec::text("gang_2_id", "Second Gang ID").with_kind(FieldKind::Reference(EntityKind::Gang)).required(),
        FieldSpec::choice("relationship_type", "Relationship", RELATIONSHIP_TYPES, "NEUTRAL"),
        FieldSpec::long_text("notes", "Notes"),
    ];

    fn from_form(form: &FormValues) -> Self {
        Self {
            gang_1_id: form.reference("gang_1_id"),
            gang_2_id: form.reference("gang_2_id"),
            relationship_type: form.text("relationship_type"),
            notes: form.text("notes"),
        }
    }

    fn to_form(&self) -> FormValues {
        let mut form = FormValues::defaults(Self::FIELDS);
        form.set_reference("gang_1_id", self.gang_1_id);
        form.set_reference("gang_2_id", self.gang_2_id);
        form.set("relationship_type", &self.relationship_type);
        form.set("notes", &self.notes);
        form
    }
}
