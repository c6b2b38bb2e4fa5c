//! Modal identities and page-level command routing.
//!
//! DESIGN
//! ======
//! Record pages are server-rendered; their buttons carry `data-intel-*`
//! attributes instead of inline handlers. One window click listener turns
//! those attributes into a [`PageCommand`] and maps backdrop clicks to a
//! [`ModalId`] by element id. Parsing is pure so it can be tested without a
//! DOM.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::net::types::EntityKind;

/// Action attribute on page buttons.
pub const ACTION_ATTR: &str = "data-intel-action";
pub const ENTITY_ATTR: &str = "data-entity";
pub const ID_ATTR: &str = "data-id";
pub const SRC_ATTR: &str = "data-src";

/// Selector matching any element that dispatches a page command.
pub const ACTION_SELECTOR: &str = "[data-intel-action]";

/// Every modal the page can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    Gang,
    Member,
    Incident,
    Case,
    Relationship,
    ImageViewer,
}

impl ModalId {
    /// The record modals, in entity order.
    pub const CRUD: [ModalId; 5] = [Self::Gang, Self::Member, Self::Incident, Self::Case, Self::Relationship];

    pub fn for_entity(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Gang => Self::Gang,
            EntityKind::Member => Self::Member,
            EntityKind::Incident => Self::Incident,
            EntityKind::Case => Self::Case,
            EntityKind::Relationship => Self::Relationship,
        }
    }

    /// Record type edited in this modal; `None` for the image viewer.
    pub fn entity(self) -> Option<EntityKind> {
        match self {
            Self::Gang => Some(EntityKind::Gang),
            Self::Member => Some(EntityKind::Member),
            Self::Incident => Some(EntityKind::Incident),
            Self::Case => Some(EntityKind::Case),
            Self::Relationship => Some(EntityKind::Relationship),
            Self::ImageViewer => None,
        }
    }

    /// DOM id of the modal's backdrop element.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Gang => "gangModal",
            Self::Member => "memberModal",
            Self::Incident => "incidentModal",
            Self::Case => "caseModal",
            Self::Relationship => "relationshipModal",
            Self::ImageViewer => "imageModal",
        }
    }

    /// Modal whose backdrop has exactly this id.
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::CRUD.into_iter().chain([Self::ImageViewer]).find(|m| m.element_id() == id)
    }
}

/// A request issued by a server-rendered page button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageCommand {
    Create(EntityKind),
    Edit(EntityKind, String),
    Delete(EntityKind, String),
    ViewImage(String),
}

impl PageCommand {
    /// Parse the `data-intel-*` attributes of a clicked element.
    ///
    /// Returns `None` for unknown actions, unknown entities, or a missing
    /// id/src the action needs.
    pub fn from_attributes(
        action: &str,
        entity: Option<&str>,
        id: Option<&str>,
        src: Option<&str>,
    ) -> Option<Self> {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        let kind = || entity.and_then(EntityKind::from_segment);
        match action {
            "create" => Some(Self::Create(kind()?)),
            "edit" => Some(Self::Edit(kind()?, non_empty(id)?)),
            "delete" => Some(Self::Delete(kind()?, non_empty(id)?)),
            "view-image" => Some(Self::ViewImage(non_empty(src)?)),
            _ => None,
        }
    }
}
