use super::*;

use crate::state::crop::{CASE_CROP_OPTIONS, CropSession, CropStage, SourceFile};
use crate::state::editor::Upload;

#[test]
fn attach_is_unavailable_outside_browser() {
    let result = CropperJs::attach(&(), &vec![1, 2, 3], &CASE_CROP_OPTIONS);
    assert!(matches!(result, Err(CropError::Unavailable)));
}

#[test]
fn session_falls_back_to_raw_upload_when_widget_is_missing() {
    let mut session = CropSession::<CropperJs>::new();
    let file = SourceFile { name: "scene.png".to_owned(), content_type: "image/png".to_owned(), data: vec![7u8; 4] };

    let attached = session.select_file(&(), Some(file));

    assert_eq!(attached, Err(CropError::Unavailable));
    assert_eq!(session.stage(), CropStage::Empty);
    let Upload::File(part) = session.upload(false) else { panic!("expected raw file upload") };
    assert_eq!(part.file_name, "scene.png");
    assert_eq!(part.content_type, "image/png");
    assert_eq!(part.data, vec![7u8; 4]);
}

#[test]
fn case_options_pan_image_instead_of_drawing_new_box() {
    let options = cropper_options(&CASE_CROP_OPTIONS);
    let get = |key: &str| options.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

    assert_eq!(get("dragMode"), Some(OptionValue::Text("move")));
    assert_eq!(get("highlight"), Some(OptionValue::Flag(false)));
    assert_eq!(get("restore"), Some(OptionValue::Flag(false)));
    assert_eq!(get("viewMode"), Some(OptionValue::Number(1.0)));
    assert_eq!(get("aspectRatio"), Some(OptionValue::Number(16.0 / 9.0)));
    assert_eq!(get("minCropBoxWidth"), Some(OptionValue::Number(100.0)));
}

#[test]
fn option_keys_are_unique() {
    let options = cropper_options(&CASE_CROP_OPTIONS);
    let mut keys: Vec<_> = options.iter().map(|(k, _)| *k).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), options.len());
}
