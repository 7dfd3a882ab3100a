use std::path::PathBuf;
use std::cell::RefCell;
use std::rc::Rc;

use sketchpad::export::{self, with_png_extension, write_png};
use sketchpad::panels::ToolbarAction;
use sketchpad::{
    CanvasState, Color, ExportError, InputHandler, Notifier, PaintApp, PaintError, Point,
    PointerEvent, RasterBuffer, SaveDialog, SaveOutcome,
};

/// Answers the save dialog with a fixed path, or cancels
struct FixedDialog(Option<PathBuf>);

impl SaveDialog for FixedDialog {
    fn choose_path(&mut self) -> Option<PathBuf> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Info(String),
    Error(String),
}

/// Records notices so tests can inspect them after the app takes ownership
#[derive(Default, Clone)]
struct RecordingNotifier(Rc<RefCell<Vec<Notice>>>);

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.0.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&mut self, _title: &str, message: &str) {
        self.0.borrow_mut().push(Notice::Info(message.to_owned()));
    }

    fn error(&mut self, _title: &str, message: &str) {
        self.0.borrow_mut().push(Notice::Error(message.to_owned()));
    }
}

fn scribble(canvas: &mut CanvasState) {
    let mut handler = InputHandler::new();
    canvas.set_color(Some(Color::rgb(20, 120, 220)));
    canvas.set_brush_size(5).unwrap();
    handler.drive(
        [
            PointerEvent::Drag(Point::new(30, 30)),
            PointerEvent::Drag(Point::new(300, 200)),
            PointerEvent::Drag(Point::new(550, 40)),
            PointerEvent::Release,
        ],
        canvas,
    );
}

#[test]
fn test_clear_then_save_matches_blank_image() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = CanvasState::new();
    scribble(&mut canvas);
    canvas.clear();

    let mut dialog = FixedDialog(Some(dir.path().join("cleared")));
    let mut notifier = RecordingNotifier::default();
    let outcome = export::save(&canvas, &mut dialog, &mut notifier).unwrap();

    let blank_path = dir.path().join("blank.png");
    write_png(&RasterBuffer::new(), &blank_path).unwrap();

    let saved_path = match outcome {
        SaveOutcome::Saved(path) => path,
        other => panic!("expected a saved file, got {other:?}"),
    };
    let saved = image::open(&saved_path).unwrap().to_rgb8();
    let blank = image::open(&blank_path).unwrap().to_rgb8();

    assert_eq!(saved.dimensions(), (600, 400));
    assert_eq!(saved, blank);
    assert!(saved.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn test_saved_png_matches_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = CanvasState::new();
    scribble(&mut canvas);

    let path = dir.path().join("scribble.png");
    write_png(canvas.raster(), &path).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    assert_eq!(&decoded.to_rgb8(), canvas.raster().image());
}

#[test]
fn test_missing_extension_is_added() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = CanvasState::new();
    let mut notifier = RecordingNotifier::default();

    let mut dialog = FixedDialog(Some(dir.path().join("drawing")));
    let outcome = export::save(&canvas, &mut dialog, &mut notifier).unwrap();

    assert_eq!(outcome, SaveOutcome::Saved(dir.path().join("drawing.png")));
    assert!(dir.path().join("drawing.png").is_file());
    assert!(!dir.path().join("drawing").exists());
}

#[test]
fn test_existing_extension_not_doubled() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = CanvasState::new();
    let mut notifier = RecordingNotifier::default();

    let mut dialog = FixedDialog(Some(dir.path().join("drawing.png")));
    export::save(&canvas, &mut dialog, &mut notifier).unwrap();

    assert!(dir.path().join("drawing.png").is_file());
    assert!(!dir.path().join("drawing.png.png").exists());
    assert_eq!(
        with_png_extension(PathBuf::from("drawing.png")),
        PathBuf::from("drawing.png")
    );
}

#[test]
fn test_cancel_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = CanvasState::new();
    let mut notifier = RecordingNotifier::default();

    let outcome = export::save(&canvas, &mut FixedDialog(None), &mut notifier).unwrap();

    assert_eq!(outcome, SaveOutcome::Canceled);
    assert!(notifier.notices().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_success_is_announced() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = CanvasState::new();
    let mut notifier = RecordingNotifier::default();

    export::save(&canvas, &mut FixedDialog(Some(dir.path().join("ok"))), &mut notifier).unwrap();

    assert_eq!(
        notifier.notices(),
        vec![Notice::Info("Image saved successfully!".to_owned())]
    );
}

#[test]
fn test_unwritable_path_reports_error_and_keeps_drawing() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = CanvasState::new();
    scribble(&mut canvas);
    let before = canvas.raster().image().clone();

    let target = dir.path().join("no-such-dir").join("drawing.png");
    let mut notifier = RecordingNotifier::default();
    let result = export::save(&canvas, &mut FixedDialog(Some(target.clone())), &mut notifier);

    match result {
        Err(ExportError::Encode { path, .. }) => assert_eq!(path, target),
        other => panic!("expected an encode error, got {other:?}"),
    }
    assert!(matches!(notifier.notices().as_slice(), [Notice::Error(_)]));
    assert_eq!(canvas.raster().image(), &before);
}

#[test]
fn test_toolbar_save_through_app() {
    let dir = tempfile::tempdir().unwrap();
    let notifier = RecordingNotifier::default();
    let mut app = PaintApp::with_dialogs(
        Box::new(FixedDialog(Some(dir.path().join("from-toolbar")))),
        Box::new(notifier.clone()),
    );

    app.apply(ToolbarAction::SetBrushSize(10)).unwrap();
    app.apply(ToolbarAction::Save).unwrap();

    assert!(dir.path().join("from-toolbar.png").is_file());
    assert_eq!(notifier.notices().len(), 1);
}

#[test]
fn test_toolbar_failed_save_surfaces_error() {
    let dir = tempfile::tempdir().unwrap();
    let notifier = RecordingNotifier::default();
    let mut app = PaintApp::with_dialogs(
        Box::new(FixedDialog(Some(dir.path().join("missing").join("x")))),
        Box::new(notifier.clone()),
    );

    let result = app.apply(ToolbarAction::Save);

    assert!(matches!(result, Err(PaintError::Export(_))));
    assert!(matches!(notifier.notices().as_slice(), [Notice::Error(_)]));
}
