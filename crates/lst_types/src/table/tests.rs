use super::*;
use flate2::write::GzEncoder;
use flate2::Compression;
use pretty_assertions::assert_eq;
use std::io::Write;

fn row(columns: [&str; 14]) -> String {
    columns.join("\t")
}

fn sample_tsv() -> String {
    [
        // class-only row for demo.util.Strings
        row([
            "demo", "util", "1.0", "49", "demo/util/Strings", "", "java/lang/Object", "", "", "",
            "", "", "", "",
        ]),
        // static method: String join(String, String[])
        row([
            "demo",
            "util",
            "1.0",
            "49",
            "demo/util/Strings",
            "",
            "java/lang/Object",
            "",
            "9",
            "join",
            "(Ljava/lang/String;[Ljava/lang/String;)Ljava/lang/String;",
            "",
            "sep|parts",
            "",
        ]),
        // field: public static final int LIMIT
        row([
            "demo",
            "util",
            "1.0",
            "49",
            "demo/util/Strings",
            "",
            "java/lang/Object",
            "",
            "25",
            "LIMIT",
            "I",
            "",
            "",
            "",
        ]),
        // interface row
        row([
            "demo", "util", "1.0", "1537", "demo/util/Closer", "", "java/lang/Object",
            "java/io/Closeable", "", "", "", "", "", "",
        ]),
    ]
    .join("\n")
}

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .unwrap_or_else(|e| panic!("gzip write failed: {e}"));
    encoder
        .finish()
        .unwrap_or_else(|e| panic!("gzip finish failed: {e}"))
}

#[test]
fn reads_gzipped_table() {
    let table = TypeTable::read(gzip(&sample_tsv()).as_slice())
        .unwrap_or_else(|e| panic!("read failed: {e}"));
    assert_eq!(table.len(), 2);
    let strings = table.class("demo.util.Strings");
    assert!(strings.is_some_and(|c| c.members.len() == 2));
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let tsv = format!("{}\nnot\tenough\tcolumns\n", sample_tsv());
    let table = TypeTable::read_tsv(tsv.as_bytes())
        .unwrap_or_else(|e| panic!("read failed: {e}"));
    assert_eq!(table.len(), 2);
}

#[test]
fn resolve_name_builds_filled_descriptor() {
    let table = TypeTable::read_tsv(sample_tsv().as_bytes())
        .unwrap_or_else(|e| panic!("read failed: {e}"));
    let oracle = TableOracle::new(table, Arc::new(TypeCache::new()));
    let Ty::Class(strings) = oracle.resolve_name("demo.util.Strings") else {
        panic!("expected class descriptor");
    };
    assert!(strings.is_filled());
    assert_eq!(
        strings.supertype().and_then(|s| s.fully_qualified_name().map(String::from)),
        Some("java.lang.Object".to_string())
    );

    let methods = strings.methods();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].name, "join");
    assert_eq!(methods[0].parameter_names, vec!["sep", "parts"]);
    assert_eq!(
        methods[0].parameter_types[1].signature(),
        "java.lang.String[]"
    );
    assert!(methods[0].flags.contains(TypeFlags::STATIC));

    let members = strings.members();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "LIMIT");
    assert!(members[0].flags.contains(TypeFlags::FINAL));
}

#[test]
fn interface_kind_comes_from_access_flags() {
    let table = TypeTable::read_tsv(sample_tsv().as_bytes())
        .unwrap_or_else(|e| panic!("read failed: {e}"));
    let oracle = TableOracle::new(table, Arc::new(TypeCache::new()));
    let Ty::Class(closer) = oracle.resolve_name("demo.util.Closer") else {
        panic!("expected class descriptor");
    };
    assert_eq!(closer.kind, ClassTyKind::Interface);
    assert_eq!(closer.interfaces().len(), 1);
}

#[test]
fn repeated_resolution_is_identity_equal() {
    let table = TypeTable::read_tsv(sample_tsv().as_bytes())
        .unwrap_or_else(|e| panic!("read failed: {e}"));
    let oracle = TableOracle::new(table, Arc::new(TypeCache::new()));
    let (Ty::Class(a), Ty::Class(b)) = (
        oracle.resolve_name("demo.util.Strings"),
        oracle.resolve_name("demo.util.Strings"),
    ) else {
        panic!("expected class descriptors");
    };
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn unknown_names_get_shallow_descriptors() {
    let oracle = TableOracle::new(TypeTable::default(), Arc::new(TypeCache::new()));
    let Ty::Class(c) = oracle.resolve_name("com.missing.Dep") else {
        panic!("expected class descriptor");
    };
    assert!(!c.is_filled());
    assert!(c.flags.is_package_private());
}
