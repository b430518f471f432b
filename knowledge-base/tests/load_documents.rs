use std::{fs, io::Write, path::Path};

use knowledge_base::{DocumentStore, KnowledgeBaseError};

fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

#[test]
fn loads_plain_text_with_filename_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nutrisi.txt");
    fs::write(&path, "Ibu hamil membutuhkan asam folat\nsetiap hari.").unwrap();

    let mut store = DocumentStore::default();
    let added = store.load(&path).unwrap();

    assert_eq!(added, 1);
    assert_eq!(store.chunks()[0].source(), "Document: nutrisi.txt");
    assert_eq!(
        store.chunks()[0].text(),
        "Ibu hamil membutuhkan asam folat setiap hari."
    );
}

#[test]
fn loads_docx_paragraphs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panduan.docx");
    write_docx(&path, &["Trimester pertama", "Hindari kafein berlebih"]);

    let mut store = DocumentStore::default();
    store.load(&path).unwrap();

    let ctx = store.find_relevant_context("kafein", 2);
    assert_eq!(ctx.context, "Trimester pertama Hindari kafein berlebih");
    assert_eq!(ctx.sources, vec!["Document: panduan.docx".to_string()]);
}

#[test]
fn load_dir_skips_unsupported_and_reports_failures() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "senam hamil aman").unwrap();
    fs::write(dir.path().join("b.csv"), "x,y").unwrap();
    fs::write(dir.path().join("c.pdf"), "this is not a pdf").unwrap();
    write_docx(&dir.path().join("d.docx"), &["pemeriksaan rutin"]);

    let mut store = DocumentStore::default();
    let report = store.load_dir(dir.path()).unwrap();

    assert_eq!(report.loaded, vec!["a.md".to_string(), "d.docx".to_string()]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "c.pdf");
    assert_eq!(report.chunks, 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn missing_directory_is_an_io_error() {
    let mut store = DocumentStore::default();
    let err = store
        .load_dir(Path::new("/definitely/not/here"))
        .unwrap_err();
    assert!(matches!(err, KnowledgeBaseError::Io(_)));
}

#[test]
fn corrupt_docx_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rusak.docx");
    fs::write(&path, "not a zip").unwrap();

    let mut store = DocumentStore::default();
    let err = store.load(&path).unwrap_err();
    assert!(matches!(err, KnowledgeBaseError::Docx { .. }));
    assert!(store.is_empty());
}
