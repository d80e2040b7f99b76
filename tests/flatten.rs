use camino::Utf8PathBuf;
use idmanager::error::{LoadError, Result};
use idmanager::parser::{ContentSource, IdParser, parse_records_from_text};
use idmanager::table::TableModel;
use std::collections::HashMap;

struct MemSource {
    files: HashMap<String, String>,
}
impl ContentSource for MemSource {
    fn read_to_string(&mut self, path: &camino::Utf8Path) -> Result<String> {
        self.files
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| LoadError::Read {
                path: path.to_owned(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

fn parse_mem(name: &str, xml: &str) -> Result<Vec<idmanager::Record>> {
    let path = Utf8PathBuf::from(name);
    let mut files = HashMap::new();
    files.insert(path.as_str().to_string(), xml.to_string());
    let mut parser = IdParser::new(MemSource { files });
    parser.parse_file(&path)
}

#[test]
fn single_item_flattens_with_parent_and_params() {
    let xml = r#"<root><cat name="C"><item name="foo"><color>red</color></item></cat></root>"#;
    let records = parse_mem("mem://single.xml", xml).expect("parse");

    assert_eq!(records.len(), 1);
    let r = &records[0];
    let keys: Vec<&str> = r.header_names().collect();
    assert_eq!(keys, ["parent", "name", "color"]);
    assert_eq!(r.get("parent"), Some("C"));
    assert_eq!(r.get("name"), Some("foo"));
    assert_eq!(r.get("color"), Some("red"));
    assert!(r.children().is_empty());

    let mut table = TableModel::new();
    table.extend(records);
    assert_eq!(table.headers().collect::<Vec<_>>(), ["parent", "name", "color"]);
    assert_eq!(table.row_count(), 1);
}

#[test]
fn items_come_out_in_document_order() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<ids name="top">
  <group name="A">
    <item name="a1"><kind>x</kind></item>
    <item name="a2"/>
  </group>
  <group name="B">
    <sub name="B1">
      <item name="b1"><size>L</size><kind>y</kind></item>
    </sub>
    <item name="b2"/>
  </group>
</ids>
"#;
    let records = parse_mem("mem://order.xml", xml).expect("parse");
    let names: Vec<_> = records.iter().filter_map(|r| r.name()).collect();
    assert_eq!(names, ["a1", "a2", "b1", "b2"]);
    let parents: Vec<_> = records.iter().filter_map(|r| r.parent()).collect();
    assert_eq!(parents, ["A", "A", "B1", "B"]);

    let mut table = TableModel::new();
    table.extend(records);
    assert_eq!(
        table.headers().collect::<Vec<_>>(),
        ["parent", "name", "kind", "size"]
    );
    assert_eq!(table.value_at(1, "kind"), None);
    assert_eq!(table.value_at(2, "size"), Some("L"));
}

#[test]
fn nested_item_uses_enclosing_item_as_parent() {
    let xml = r#"<root name="R"><item name="outer"><item name="inner"/></item></root>"#;
    let records = parse_mem("mem://nested.xml", xml).expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("parent"), Some("R"));
    assert_eq!(records[0].get("item"), Some(""));
    assert_eq!(records[1].get("parent"), Some("outer"));
}

#[test]
fn unicode_values_survive() {
    let xml = r#"<root><カテゴリ name="機器"><item name="センサー"><色>赤</色></item></カテゴリ></root>"#;
    let records = parse_records_from_text(xml, None).expect("parse");
    assert_eq!(records[0].get("parent"), Some("機器"));
    assert_eq!(records[0].get("色"), Some("赤"));
}

#[test]
fn repeated_tag_keeps_last_value_in_first_position() {
    let xml = r#"<g name="G"><item name="x"><v>1</v><w>2</w><v>3</v></item></g>"#;
    let records = parse_records_from_text(xml, None).expect("parse");
    let keys: Vec<&str> = records[0].header_names().collect();
    assert_eq!(keys, ["parent", "name", "v", "w"]);
    assert_eq!(records[0].get("v"), Some("3"));
}

#[test]
fn missing_item_name_is_fatal() {
    let xml = "<root name=\"R\">\n  <item name=\"ok\"/>\n  <item/>\n</root>";
    let err = parse_records_from_text(xml, Some("ids.xml")).unwrap_err();
    match err {
        LoadError::MissingAttribute {
            origin,
            element,
            attribute,
            line,
            ..
        } => {
            assert_eq!(origin, "ids.xml");
            assert_eq!(element, "item");
            assert_eq!(attribute, "name");
            assert_eq!(line, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_parent_name_is_fatal() {
    let xml = r#"<root><item name="foo"/></root>"#;
    let err = parse_records_from_text(xml, None).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingAttribute { ref element, .. } if element == "root"
    ));
}

#[test]
fn malformed_xml_is_fatal() {
    let xml = r#"<root><cat name="C"><item name="foo"></cat></root>"#;
    let err = parse_records_from_text(xml, Some("bad.xml")).unwrap_err();
    assert!(matches!(err, LoadError::Xml { ref origin, .. } if origin == "bad.xml"));
}

#[test]
fn missing_file_is_a_read_error() {
    let mut parser = IdParser::new(MemSource {
        files: HashMap::new(),
    });
    let err = parser.parse_file("mem://absent.xml").unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
}

#[test]
fn document_without_items_yields_nothing() {
    let records = parse_records_from_text("<root><cat name=\"C\"/></root>", None).expect("parse");
    assert!(records.is_empty());
}

#[test]
fn comment_before_value_does_not_hide_text() {
    let xml = r#"<g name="G"><item name="x"><color><!-- note -->red</color></item></g>"#;
    let records = parse_records_from_text(xml, None).expect("parse");
    assert_eq!(records[0].get("color"), Some("red"));
}

#[test]
fn text_split_by_comment_is_joined() {
    let xml = r#"<g name="G"><item name="x"><size>X<!-- -->L</size></item></g>"#;
    let records = parse_records_from_text(xml, None).expect("parse");
    assert_eq!(records[0].get("size"), Some("XL"));
}

#[test]
fn surrounding_whitespace_is_preserved() {
    let xml = r#"<g name="G"><item name="x"><desc>  padded  </desc></item></g>"#;
    let records = parse_records_from_text(xml, None).expect("parse");
    assert_eq!(records[0].get("desc"), Some("  padded  "));
}

#[test]
fn namespaced_item_is_not_an_identifier() {
    let xml = r#"<root xmlns:ns="urn:other"><cat name="C">
  <item name="plain"/>
  <ns:item name="foreign"/>
</cat></root>"#;
    let records = parse_records_from_text(xml, None).expect("parse");
    let names: Vec<_> = records.iter().filter_map(|r| r.name()).collect();
    assert_eq!(names, ["plain"]);
}
