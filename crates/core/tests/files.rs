use std::{fs, path::Path};

use forth_minify::{
    CArray, MinifyConfig, MinifyError, ModuleEntry, ModuleSource,
    emit::parse_declared_size, render_module_table,
};

/// Runs a file through the same steps as the `forth2c` tool.
fn generate(path: &Path) -> Result<String, MinifyError> {
    let bytes = ModuleSource::load(path)?.into_bytes(&MinifyConfig::default())?;
    Ok(CArray::for_module(path, bytes).render())
}

#[test]
fn precompiled_image_bypasses_minification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("core.zfa");
    // Bytes that minification would certainly change.
    let image: Vec<u8> = vec![b'(', b' ', b' ', b'\n', b':', 0, 255, b')', b'\t'];
    fs::write(&path, &image).unwrap();

    let source = ModuleSource::load(&path).unwrap();
    assert_eq!(source, ModuleSource::Precompiled(image.clone()));
    assert_eq!(
        source.into_bytes(&MinifyConfig::default()).unwrap(),
        image
    );

    let rendered = generate(&path).unwrap();
    assert_eq!(
        rendered,
        "const char core_gen_str[] = {\n    40, 32, 32, 10, 58, 0, 255, 41, 9};\n// 9 bytes\n"
    );
}

#[test]
fn text_module_is_minified_and_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.fs");
    fs::write(&path, ": A ( x ) 1 ;\n").unwrap();

    let rendered = generate(&path).unwrap();
    assert_eq!(
        rendered,
        "const char words_gen_str[] = {\n    58, 32, 65, 32, 49, 32, 59};\n// 7 bytes\n"
    );
    assert_eq!(parse_declared_size(&rendered), Some(7));
}

#[test]
fn unterminated_comment_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.fs");
    fs::write(&path, ": X ( never closed").unwrap();

    let err = generate(&path).unwrap_err();
    assert!(matches!(err, MinifyError::MalformedComment { offset: 4 }));
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.fs");

    let err = generate(&path).unwrap_err();
    assert!(matches!(err, MinifyError::FileNotFound { .. }));
    assert!(err.to_string().contains("absent.fs"));
}

#[test]
fn invalid_utf8_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.fs");
    fs::write(&path, [b':', 0xff, 0xfe, b';']).unwrap();

    let err = generate(&path).unwrap_err();
    assert!(matches!(err, MinifyError::InvalidUtf8 { .. }));
}

#[test]
fn empty_text_module() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.fs");
    fs::write(&path, "").unwrap();

    let rendered = generate(&path).unwrap();
    assert_eq!(rendered, "const char empty_gen_str[] = {\n    58};\n// 1 bytes\n");
}

#[test]
fn module_table_keeps_caller_order_with_sizes_from_headers() {
    let dir = tempfile::tempdir().unwrap();

    let mut entries = Vec::new();
    for (name, source) in [("b_gen.h", ": B 2 ;\n"), ("a_gen.h", ": AA 11 ;\n")] {
        let src_path = dir.path().join(name.replace("_gen.h", ".fs"));
        fs::write(&src_path, source).unwrap();

        let header_path = dir.path().join(name);
        let rendered = generate(&src_path).unwrap();
        fs::write(&header_path, &rendered).unwrap();

        let size = parse_declared_size(&fs::read_to_string(&header_path).unwrap()).unwrap();
        entries.push(ModuleEntry::from_header(Path::new(name)).with_size(size));
    }

    let table = render_module_table(&entries);
    let b = table.find("#include \"b_gen.h\"").unwrap();
    let a = table.find("#include \"a_gen.h\"").unwrap();
    assert!(b < a, "includes reordered:\n{table}");

    let rec_b = table.find("{\"b_gen\", b_gen_str, 7},").unwrap();
    let rec_a = table.find("{\"a_gen\", a_gen_str, 9},").unwrap();
    assert!(rec_b < rec_a, "records reordered:\n{table}");
}
