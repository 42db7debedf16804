use super::fixture::Fixture;
use crate::device_display::impl_console::DeviceDisplayConsole;
use crate::device_display::impl_fake::DisplayCall;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::Classification;
use crate::smart_camera::core::{CameraStatus, ClassifierStatus, Model};
use crate::smart_camera::render::{format_precision, format_recognition};
use image::DynamicImage;

#[test]
fn test_format_recognition_capitalizes_words() {
    assert_eq!(format_recognition("cat"), "Cat");
    assert_eq!(format_recognition("great dane"), "Great Dane");
    assert_eq!(format_recognition("tabby, tabby cat"), "Tabby, Tabby Cat");
}

#[test]
fn test_format_recognition_capitalizes_after_punctuation() {
    assert_eq!(format_recognition("jack-o'-lantern"), "Jack-O'-Lantern");
    assert_eq!(format_recognition("four-poster"), "Four-Poster");
    assert_eq!(format_recognition("black-and-tan coonhound"), "Black-And-Tan Coonhound");
}

#[test]
fn test_format_recognition_lowercases_the_rest() {
    assert_eq!(format_recognition("DOG"), "Dog");
    assert_eq!(format_recognition("gOLDEN rETRIEVER"), "Golden Retriever");
}

#[test]
fn test_format_recognition_empty() {
    assert_eq!(format_recognition(""), "");
}

#[test]
fn test_format_precision_two_decimals() {
    assert_eq!(format_precision(0.9732), "97.32%");
    assert_eq!(format_precision(0.5), "50.00%");
    assert_eq!(format_precision(0.875), "87.50%");
}

#[test]
fn test_format_precision_bounds() {
    assert_eq!(format_precision(0.0), "0.00%");
    assert_eq!(format_precision(1.0), "100.00%");
}

#[test]
fn test_render_writes_preview_and_both_fields() {
    let fixture = Fixture::new();

    let model = Model {
        camera: CameraStatus::Streaming,
        classifier: ClassifierStatus::Ready,
        preview: Some(DynamicImage::new_rgb8(2, 2)),
        recognition: Some(Classification {
            label: "tabby cat".to_string(),
            confidence: 0.8751,
        }),
    };

    fixture.smart_camera.render(&model).unwrap();

    let calls = fixture.display_calls.lock().unwrap();
    assert_eq!(
        calls.as_slice(),
        [
            DisplayCall::Preview,
            DisplayCall::Recognition("Tabby Cat".to_string()),
            DisplayCall::Precision("87.51%".to_string()),
        ]
    );
}

#[test]
fn test_render_before_first_result_writes_nothing() {
    let fixture = Fixture::new();

    fixture.smart_camera.render(&Model::default()).unwrap();

    assert!(fixture.display_calls.lock().unwrap().is_empty());
}

#[test]
fn test_console_display_accepts_every_operation() {
    let mut display = DeviceDisplayConsole::new();

    display.init().unwrap();
    display
        .render_preview(&DynamicImage::new_rgb8(2, 2))
        .unwrap();
    display.write_recognition("Cat").unwrap();
    display.write_recognition("Cat").unwrap();
    display.write_precision("97.32%").unwrap();
    display.show_alert("Camera input is broken.").unwrap();
}
