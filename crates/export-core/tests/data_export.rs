// File: crates/export-core/tests/data_export.rs
// Purpose: Data export URL contract: format routing, context disposition, exact round-trip.

use std::rc::Rc;

use export_core::{
    Disposition, ExportController, ExportError, ExportOptions, MemorySink, RecordingNavigator,
    SurfaceRegistry,
};
use serde_json::{json, Value};
use url::Url;

fn fixture() -> (ExportController, Rc<RecordingNavigator>) {
    let navigator = Rc::new(RecordingNavigator::new());
    let controller = ExportController::new(
        Rc::new(SurfaceRegistry::new()),
        Rc::new(MemorySink::new()),
        navigator.clone(),
    );
    (controller, navigator)
}

/// Split a same-origin href into its path and the decoded `data` parameter.
fn path_and_data(href: &str) -> (String, String) {
    let url = Url::parse(&format!("http://page.local{href}")).expect("parseable href");
    let data = url
        .query_pairs()
        .find(|(key, _)| key == "data")
        .map(|(_, value)| value.into_owned())
        .expect("data parameter present");
    (url.path().to_string(), data)
}

fn sample_records() -> Value {
    json!([
        {"period": "2026 Q1", "revenue": 1250.5, "cost": 800.0, "profit": 450.5, "profitMargin": 36.0},
        {"period": "2026 Q2", "revenue": 1310.0, "cost": 815.25, "profit": 494.75, "profitMargin": 37.8}
    ])
}

#[test]
fn pdf_opens_a_new_context() {
    let (controller, navigator) = fixture();
    let records = sample_records();

    controller
        .export_data(&records, "pdf")
        .expect("export should succeed");

    let visits = navigator.visits();
    assert_eq!(visits.len(), 1);
    let (href, disposition) = &visits[0];
    assert_eq!(*disposition, Disposition::NewContext);

    let (path, data) = path_and_data(href);
    assert_eq!(path, "/export/projection/pdf");
    let decoded: Value = serde_json::from_str(&data).expect("data parses as JSON");
    assert_eq!(decoded, records);
}

#[test]
fn excel_and_csv_navigate_the_current_context() {
    for format in ["excel", "csv"] {
        let (controller, navigator) = fixture();

        controller
            .export_data(&sample_records(), format)
            .expect("export should succeed");

        let visits = navigator.visits();
        assert_eq!(visits.len(), 1);
        let (href, disposition) = &visits[0];
        assert_eq!(*disposition, Disposition::CurrentContext, "format {format}");
        let (path, _) = path_and_data(href);
        assert_eq!(path, format!("/export/projection/{format}"));
    }
}

#[test]
fn unknown_formats_are_forwarded_as_is() {
    let (controller, navigator) = fixture();

    controller
        .export_data(&sample_records(), "parquet")
        .expect("no local format validation");

    let visits = navigator.visits();
    let (href, disposition) = &visits[0];
    assert_eq!(*disposition, Disposition::CurrentContext);
    let (path, _) = path_and_data(href);
    assert_eq!(path, "/export/projection/parquet");
}

#[test]
fn query_round_trip_is_exact() {
    let (controller, navigator) = fixture();
    let records = json!([
        {"period": "FY 2026 plan", "note": "½ & ½ = 100%?", "values": [1.5, null, {"nested": true}]}
    ]);

    controller
        .export_data(&records, "csv")
        .expect("export should succeed");

    let (_, data) = path_and_data(&navigator.visits()[0].0);
    let expected = serde_json::to_string(&records).expect("serialize");
    assert_eq!(data, expected, "decode(encode(x)) must reproduce the serialization");
}

#[test]
fn oversized_payload_is_rejected_before_navigating() {
    let navigator = Rc::new(RecordingNavigator::new());
    let options = ExportOptions {
        max_url_bytes: Some(128),
        ..ExportOptions::default()
    };
    let controller = ExportController::new(
        Rc::new(SurfaceRegistry::new()),
        Rc::new(MemorySink::new()),
        navigator.clone(),
    )
    .with_options(options);

    let records = json!([{"period": "2026", "note": "x".repeat(512)}]);
    let err = controller
        .export_data(&records, "csv")
        .expect_err("payload above the limit must fail");

    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::PayloadTooLarge { .. })
    ));
    assert!(navigator.visits().is_empty(), "no navigation on failure");
}
