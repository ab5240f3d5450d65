//! Round trips through the code generated from `tests/schemas`.

use proptest::prelude::*;
use xsdbind::XmlDocument;
use xsdbind::core::Error;
use xsdbind::core::chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use xsdbind_tests::catalog::{
    Book, Catalog, Category, Item, Item_dimensions, Money, Price, Sample, Samples,
};
use xsdbind_tests::widget::Widget;

fn date_time(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn item() -> Item {
    Item {
        sku: "AB-100".to_string(),
        title: "Kettle".to_string(),
        price: Box::new(Money {
            content: 24.5,
            currency: Some("EUR".to_string()),
        }),
        discount: None,
        tag: vec!["kitchen".to_string(), "steel".to_string()],
        released: NaiveDate::from_ymd_opt(2024, 3, 1),
        dimensions: Some(Box::new(Item_dimensions {
            width: 20.0,
            height: 31.25,
        })),
        in_stock: true,
        quantity: Some(12),
    }
}

fn book() -> Book {
    Book {
        sku: "BK-7".to_string(),
        title: "Tides & Shores".to_string(),
        price: Box::new(Money {
            content: 9.99,
            currency: None,
        }),
        discount: Some(Box::new(Money {
            content: 1.5,
            currency: Some("USD".to_string()),
        })),
        tag: Vec::new(),
        released: None,
        dimensions: None,
        in_stock: false,
        quantity: None,
        author: vec!["A. Writer".to_string(), "B. Editor".to_string()],
        isbn: "978-0-00-000000-0".to_string(),
    }
}

fn catalog() -> Catalog {
    Catalog {
        updated: date_time("2025-01-31T08:30:00"),
        category: Some(Box::new(Category {
            name: "home".to_string(),
            sub: vec![
                Category {
                    name: "kitchen".to_string(),
                    sub: vec![Category {
                        name: "kettles".to_string(),
                        sub: Vec::new(),
                    }],
                },
                Category {
                    name: "garden".to_string(),
                    sub: Vec::new(),
                },
            ],
        })),
        book: None,
        item: Some(Box::new(item())),
        entry: vec![book(), book()],
        version: 3,
    }
}

#[test]
fn test_widget_serialization() {
    let widget = Widget {
        label: "gear".to_string(),
        count: 3,
    };

    let xml = widget.to_xml();
    assert_eq!(
        xml,
        r#"<Widget xmlns="urn:t"><label xmlns="">gear</label><count xmlns="">3</count></Widget>"#
    );
    assert_eq!(Widget::from_xml(&xml).unwrap(), widget);
}

#[test]
fn test_widget_from_instance_document() {
    let xml = r#"<?xml version="1.0"?>
        <w:Widget xmlns:w="urn:t">
            <label>bolt</label>
            <count>-4</count>
        </w:Widget>"#;

    let widget = Widget::from_xml(xml).unwrap();
    assert_eq!(widget.label, "bolt");
    assert_eq!(widget.count, -4);
}

#[test]
fn test_widget_missing_element() {
    let err = Widget::from_xml("<Widget><label>bolt</label></Widget>").unwrap_err();
    assert!(matches!(err, Error::MissingElement { ref child, .. } if child == "count"));
}

#[test]
fn test_widget_invalid_value() {
    let err = Widget::from_xml("<Widget><label>bolt</label><count>many</count></Widget>")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
}

#[test]
fn test_wrong_root() {
    let err = Widget::from_xml("<Gadget><label>x</label><count>1</count></Gadget>").unwrap_err();
    assert!(matches!(err, Error::UnexpectedRoot { ref actual, .. } if actual == "Gadget"));
}

#[test]
fn test_catalog_round_trip() {
    let catalog = catalog();
    let xml = catalog.to_xml();
    assert!(xml.starts_with(r#"<Catalog xmlns="urn:catalog" version="3">"#));
    assert!(xml.contains(r#"<entry xmlns="" inStock="false" isbn="978-0-00-000000-0">"#));
    assert!(xml.contains("<title>Tides &amp; Shores</title>"));

    let parsed = Catalog::from_xml(&xml).unwrap();
    assert_eq!(parsed, catalog);
}

#[test]
fn test_catalog_inherited_members() {
    let parsed = Catalog::from_xml(&catalog().to_xml()).unwrap();
    let entry = &parsed.entry[0];
    assert_eq!(entry.author.len(), 2);
    assert_eq!(entry.isbn, "978-0-00-000000-0");
    assert_eq!(entry.price.content, 9.99);
    assert_eq!(entry.discount.as_ref().unwrap().currency.as_deref(), Some("USD"));

    let category = parsed.category.unwrap();
    assert_eq!(category.sub[0].sub[0].name, "kettles");
}

#[test]
fn test_catalog_optional_members_absent() {
    let xml = r#"<Catalog xmlns="urn:catalog" version="1">
        <updated>2025-01-31T08:30:00</updated>
        <item inStock="1">
            <sku>X</sku>
            <title>Plain</title>
            <price>2</price>
        </item>
    </Catalog>"#;

    let catalog = Catalog::from_xml(xml).unwrap();
    assert!(catalog.category.is_none());
    assert!(catalog.book.is_none());
    assert!(catalog.entry.is_empty());

    let item = catalog.item.unwrap();
    assert!(item.in_stock);
    assert_eq!(item.quantity, None);
    assert_eq!(item.price.content, 2.0);
    assert_eq!(item.price.currency, None);
    assert!(item.tag.is_empty());
    assert_eq!(item.released, None);
    assert!(item.dimensions.is_none());
}

#[test]
fn test_catalog_tag_upper_bound() {
    let tags: String = (0..6).map(|i| format!("<tag>t{i}</tag>")).collect();
    let xml = format!(
        r#"<Catalog version="1"><updated>2025-01-31T08:30:00</updated>
            <item inStock="true"><sku>X</sku><title>T</title><price>1</price>{tags}</item>
        </Catalog>"#
    );

    let err = Catalog::from_xml(&xml).unwrap_err();
    assert!(matches!(
        err,
        Error::Occurrence { ref element, count: 6, min: 0, .. } if element == "tag"
    ));
}

#[test]
fn test_book_requires_an_author() {
    let xml = r#"<Catalog version="1"><updated>2025-01-31T08:30:00</updated>
        <book inStock="false" isbn="1"><sku>X</sku><title>T</title><price>1</price></book>
    </Catalog>"#;

    let err = Catalog::from_xml(xml).unwrap_err();
    assert!(matches!(
        err,
        Error::Occurrence { ref element, count: 0, min: 1, .. } if element == "author"
    ));
}

#[test]
fn test_required_attribute_missing() {
    let xml = r#"<Catalog><updated>2025-01-31T08:30:00</updated></Catalog>"#;
    let err = Catalog::from_xml(xml).unwrap_err();
    assert!(matches!(err, Error::MissingAttribute { ref attribute, .. } if attribute == "version"));
}

#[test]
fn test_simple_content_document() {
    let price = Price {
        content: 12.75,
        currency: Some("GBP".to_string()),
    };

    let xml = price.to_xml();
    assert_eq!(xml, r#"<Price xmlns="urn:catalog" currency="GBP">12.75</Price>"#);
    assert_eq!(Price::from_xml(&xml).unwrap(), price);
    assert_eq!(Price::from_xml("<Price>INF</Price>").unwrap().content, f64::INFINITY);
}

#[test]
fn test_every_builtin_kind() {
    let sample = Sample {
        byte: -8,
        unsigned_byte: 200,
        short: -300,
        unsigned_short: 60000,
        int: -70000,
        unsigned_int: 4_000_000_000,
        long: -9_000_000_000,
        unsigned_long: u64::MAX,
        integer: 42,
        float: 0.25,
        double: -1.0e-3,
        decimal: 1234.5678,
        string: "a < b".to_string(),
        any_uri: "https://example.com/?q=1&r=2".to_string(),
        type_: "en-GB".to_string(),
        boolean: true,
        date: NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
        time: NaiveTime::from_hms_milli_opt(23, 59, 58, 250).unwrap(),
        date_time: date_time("2000-02-29T12:00:00"),
    };
    let samples = Samples {
        sample: vec![sample, Sample::default()],
    };

    let xml = samples.to_xml();
    assert!(xml.contains(r#"<sample xmlns=""><byte>-8</byte>"#));
    assert!(xml.contains("<time>23:59:58.250</time>"));
    assert!(xml.contains("<unsignedLong>18446744073709551615</unsignedLong>"));
    assert!(xml.contains("<type>en-GB</type>"));
    assert_eq!(Samples::from_xml(&xml).unwrap(), samples);
}

#[test]
fn test_boolean_spellings() {
    for (text, expected) in [("true", true), ("1", true), ("false", false), ("0", false)] {
        let xml = format!(
            r#"<Catalog version="1"><updated>2025-01-31T08:30:00</updated>
                <item inStock="{text}"><sku>X</sku><title>T</title><price>1</price></item>
            </Catalog>"#
        );
        assert_eq!(Catalog::from_xml(&xml).unwrap().item.unwrap().in_stock, expected);
    }
}

proptest! {
    #[test]
    fn prop_widget_round_trip(label in "[a-zA-Z0-9<>&'\"]{1,24}", count in any::<i32>()) {
        let widget = Widget { label, count };
        prop_assert_eq!(Widget::from_xml(&widget.to_xml()).unwrap(), widget);
    }

    #[test]
    fn prop_item_round_trip(
        tags in prop::collection::vec("[a-z]{1,8}", 0..=5),
        content in -1.0e9f64..1.0e9,
        quantity in prop::option::of(any::<u32>()),
        width in any::<f32>().prop_filter("finite", |w| w.is_finite()),
    ) {
        let mut item = item();
        item.tag = tags;
        item.price.content = content;
        item.quantity = quantity;
        item.dimensions = Some(Box::new(Item_dimensions { width, height: 1.0 }));

        let catalog = Catalog { item: Some(Box::new(item)), ..catalog() };
        prop_assert_eq!(Catalog::from_xml(&catalog.to_xml()).unwrap(), catalog);
    }
}
