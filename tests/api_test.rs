use runlines::api::{
    export_script_file,
    import_pdf_text_file,
    import_script_file,
    parse_fountain_text,
    parse_script_text
};
use runlines::models::{Conf, Script};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("runlines_{}_{}", std::process::id(), name))
}

#[tokio::test]
async fn test_parse_script_text() {
    let script = parse_script_text("INT. HALL\n\nRUTH\nPlaces.".to_string(), None)
        .await
        .unwrap();
    assert_eq!(script.scenes().len(), 1);
    assert_eq!(script.line_count(), 1);
}

#[tokio::test]
async fn test_parse_fountain_text_returns_json() {
    let json = parse_fountain_text("Title: Big Fish\nAuthor: John August".to_string(), None).await;
    let script = Script::from_json(&json).unwrap();
    assert_eq!(script.name(), "Big Fish");
    assert_eq!(script.author.as_deref(), Some("John August"));
}

#[tokio::test]
async fn test_import_sample_file() {
    let result = import_script_file("tests/test_data/sample.fountain".to_string(), None).await;
    assert!(result.success, "{}", result.message);

    let script = result.script.unwrap();
    assert_eq!(script.name(), "The Long Table");
    assert_eq!(script.scenes().len(), 3);
}

#[tokio::test]
async fn test_import_missing_file() {
    let result = import_script_file("tests/test_data/missing.fountain".to_string(), None).await;
    assert!(!result.success);
    assert!(result.script.is_none());
    assert!(result.message.contains("读取文件失败"));
}

#[tokio::test]
async fn test_import_pdf_text() {
    let path = temp_path("pdf.txt");
    tokio::fs::write(&path, "EXT.\u{00A0}PIER - DAWN   \n\n\u{00A0}GULL\u{00A0}\nSkree.\n")
        .await
        .unwrap();

    let result = import_pdf_text_file(path.to_string_lossy().into_owned(), None).await;
    assert!(result.success, "{}", result.message);
    let script = result.script.unwrap();
    assert_eq!(script.scenes()[0].name(), "EXT. PIER - DAWN");
    assert_eq!(script.scenes()[0].lines()[0].actor().name(), "GULL");

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_export_then_import() {
    let original = import_script_file("tests/test_data/sample.fountain".to_string(), None)
        .await
        .script
        .unwrap();

    let path = temp_path("export.fountain");
    let output = path.to_string_lossy().into_owned();
    let exported = export_script_file(&original, output.clone(), Some(Conf::default())).await;
    assert!(exported.success, "{}", exported.message);
    assert_eq!(exported.file_path.as_deref(), Some(output.as_str()));

    let reimported = import_script_file(output, None).await.script.unwrap();
    assert_eq!(reimported.scenes().len(), original.scenes().len());
    assert_eq!(reimported.line_count(), original.line_count());

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_export_to_bad_path() {
    let script = Script::new("Nowhere");
    let result = export_script_file(&script, "/nonexistent_dir/x/y.fountain".to_string(), None).await;
    assert!(!result.success);
    assert!(result.file_path.is_none());
}
