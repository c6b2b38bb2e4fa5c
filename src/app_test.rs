use super::*;

use crate::state::crop::{CropStage, SourceFile};

struct Page {
    router: Router,
    image: ImageExtension,
    notices: RwSignal<NoticeState>,
}

fn page() -> Page {
    let notices = RwSignal::new(NoticeState::default());
    let presenter = BrowserPresenter { notices, reload_delay_ms: 0 };
    let backend = HttpBackend::new(ClientConfig::default());
    let image = ImageExtension::new();
    let router = Router {
        controllers: build_controllers(&backend, presenter, image),
        pending_delete: RwSignal::new(None),
        viewer: RwSignal::new(None),
    };
    Page { router, image, notices }
}

fn photo() -> SourceFile<crate::util::browser::ImageBlob> {
    SourceFile { name: "scene.jpg".to_owned(), content_type: "image/jpeg".to_owned(), data: vec![0xff, 0xd8, 0xff] }
}

#[test]
fn backdrop_close_of_case_modal_releases_crop_session() {
    let page = page();
    page.router.dispatch(PageCommand::Create(EntityKind::Case));
    page.image.select(Some(photo()));

    assert!(page.router.controllers.case.editor.get_untracked().open);
    assert!(page.image.has_selection());
    assert!(matches!(page.image.upload(false), Upload::File(_)));

    let modal = ModalId::from_element_id("caseModal").expect("case backdrop id");
    page.router.close(modal);

    assert!(!page.router.controllers.case.editor.get_untracked().open);
    assert!(!page.image.has_selection());
    assert_eq!(page.image.stage(), CropStage::Empty);
    assert!(matches!(page.image.upload(false), Upload::None));
}

#[test]
fn backdrop_close_of_other_modal_keeps_case_selection() {
    let page = page();
    page.router.dispatch(PageCommand::Create(EntityKind::Case));
    page.image.select(Some(photo()));
    page.router.dispatch(PageCommand::Create(EntityKind::Gang));

    page.router.close(ModalId::from_element_id("gangModal").expect("gang backdrop id"));

    assert!(!page.router.controllers.gang.editor.get_untracked().open);
    assert!(page.router.controllers.case.editor.get_untracked().open);
    assert!(page.image.has_selection());
}

#[test]
fn reopening_case_modal_starts_without_previous_file() {
    let page = page();
    page.router.dispatch(PageCommand::Create(EntityKind::Case));
    page.image.select(Some(photo()));
    page.router.dispatch(PageCommand::Create(EntityKind::Case));

    assert!(!page.image.has_selection());
    assert!(page.router.controllers.case.editor.get_untracked().open);
}

#[test]
fn delete_command_waits_for_confirmation() {
    let page = page();
    page.router.dispatch(PageCommand::Delete(EntityKind::Member, "12".to_owned()));

    assert_eq!(
        page.router.pending_delete.get_untracked(),
        Some(PendingDelete { kind: EntityKind::Member, id: "12".to_owned() })
    );
    assert!(page.notices.get_untracked().items.is_empty());
}

#[test]
fn image_viewer_opens_and_closes_from_backdrop() {
    let page = page();
    page.router.dispatch(PageCommand::ViewImage("/media/cases/3.jpg".to_owned()));
    assert_eq!(page.router.viewer.get_untracked().as_deref(), Some("/media/cases/3.jpg"));

    page.router.close(ModalId::from_element_id("imageModal").expect("viewer backdrop id"));
    assert_eq!(page.router.viewer.get_untracked(), None);
}
