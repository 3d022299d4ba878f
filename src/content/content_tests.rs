use super::*;
use crate::ordering::Ordered;
use serde_json::json;

#[test]
fn test_order_from_value() {
    assert_eq!(order_from_value(&json!(3)), 3);
    assert_eq!(order_from_value(&json!(2.9)), 2);
    assert_eq!(order_from_value(&json!("4")), 4);
    assert_eq!(order_from_value(&json!(" 5 ")), 5);
    assert_eq!(order_from_value(&json!("1.5")), 1);
    assert_eq!(order_from_value(&json!(0)), 0);
    assert_eq!(order_from_value(&json!(-2)), 0);
    assert_eq!(order_from_value(&json!(0.5)), 1);
    assert_eq!(order_from_value(&json!("0.25")), 1);
    assert_eq!(order_from_value(&json!(-0.5)), 0);
    assert_eq!(order_from_value(&json!("first")), 0);
    assert_eq!(order_from_value(&json!(null)), 0);
    assert_eq!(order_from_value(&json!(true)), 0);
    assert_eq!(order_from_value(&json!(10_000_000_000_u64)), u32::MAX);
}

#[test]
fn test_record_keeps_unknown_fields() {
    let value = json!({
        "id": "p1",
        "order": 2,
        "archived": true,
        "name": "Widget",
        "images": ["a.png"],
        "nested": {"k": 1}
    });
    let record: Record = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(record.id(), "p1");
    assert_eq!(record.order(), 2);
    assert!(record.is_archived());
    assert_eq!(record.fields.get("name"), Some(&json!("Widget")));
    assert!(!record.fields.contains_key("id"));

    let back = serde_json::to_value(&record).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_record_defaults_and_lenient_order() {
    let record: Record = serde_json::from_value(json!({"id": "x", "order": "7"})).unwrap();
    assert_eq!(record.order(), 7);
    assert!(!record.is_archived());

    let record: Record = serde_json::from_value(json!({"name": "no id"})).unwrap();
    assert_eq!(record.id(), "");
    assert_eq!(record.order(), 0);
}

#[test]
fn test_record_builders() {
    let record = Record::new("r", 3).with_field("title", "T").archived();
    assert_eq!(record.core, OrderedCore { id: "r".into(), order: 3, archived: true });
    assert_eq!(record.fields.get("title"), Some(&json!("T")));
}

#[test]
fn test_record_set_order_and_archived() {
    let mut record = Record::new("r", 1);
    record.set_order(5);
    record.set_archived(true);
    assert_eq!(record.core.order, 5);
    assert!(record.core.archived);
}

#[test]
fn test_product_sanitize() {
    let mut product: Product = serde_json::from_value(json!({
        "id": " p1 ",
        "name": "  Sensor  ",
        "images": [" a.png ", "", "   "],
        "features": ["fast", " "],
        "price": "on request"
    }))
    .unwrap();
    product.sanitize();
    assert_eq!(product.core.id, "p1");
    assert_eq!(product.name, "Sensor");
    assert_eq!(product.images, vec!["a.png".to_string()]);
    assert_eq!(product.features, vec!["fast".to_string()]);
    assert_eq!(product.extra.get("price"), Some(&json!("on request")));
}

#[test]
fn test_research_sanitize_dedups_related_products() {
    let mut article = ResearchArticle {
        related_products: vec!["p1".into(), " p2".into(), "p1".into(), String::new()],
        authors: vec![" Ada ".into()],
        ..Default::default()
    };
    article.sanitize();
    assert_eq!(article.related_products, vec!["p1".to_string(), "p2".to_string()]);
    assert_eq!(article.authors, vec!["Ada".to_string()]);
}

#[test]
fn test_team_member_and_service_sanitize() {
    let mut member = TeamMember {
        name: " Grace ".into(),
        links: vec![String::new(), "https://example.com ".into()],
        ..Default::default()
    };
    member.sanitize();
    assert_eq!(member.name, "Grace");
    assert_eq!(member.links, vec!["https://example.com".to_string()]);

    let mut service = Service {
        title: "\tConsulting\n".into(),
        ..Default::default()
    };
    service.sanitize();
    assert_eq!(service.title, "Consulting");
}

#[test]
fn test_entity_camel_case_keys() {
    let article: ResearchArticle = serde_json::from_value(json!({
        "id": "r1",
        "publishedAt": "2024-05-01",
        "relatedProducts": ["p1"]
    }))
    .unwrap();
    assert_eq!(article.published_at, "2024-05-01");
    assert_eq!(article.related_products, vec!["p1".to_string()]);
    assert!(article.extra.is_empty());

    let json = serde_json::to_string(&article).unwrap();
    assert!(json.contains("publishedAt"));
    assert!(!json.contains("published_at"));
}

#[test]
fn test_sanitize_record_keeps_extra_fields() {
    let record = ContentKind::Products
        .sanitize_record(json!({
            "id": "p1",
            "order": "2",
            "name": " Gauge ",
            "datasheet": "gauge.pdf"
        }))
        .unwrap();
    assert_eq!(record.order(), 2);
    assert_eq!(record.fields.get("name"), Some(&json!("Gauge")));
    assert_eq!(record.fields.get("datasheet"), Some(&json!("gauge.pdf")));
}

#[test]
fn test_sanitize_record_adds_no_empty_fields() {
    let record = ContentKind::Research
        .sanitize_record(json!({"id": "r1", "order": 1, "title": " Notes "}))
        .unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({"id": "r1", "order": 1, "archived": false, "title": "Notes"})
    );
}

#[test]
fn test_sanitize_record_drops_fields_emptied_by_cleanup() {
    let record = ContentKind::Products
        .sanitize_record(json!({"id": "p1", "name": "Gauge", "images": ["  "]}))
        .unwrap();
    assert!(!record.fields.contains_key("images"));
    assert_eq!(record.fields.get("name"), Some(&json!("Gauge")));
}

#[test]
fn test_sanitize_record_rejects_wrong_shape() {
    let result = ContentKind::Team.sanitize_record(json!({"id": "t1", "links": "not a list"}));
    assert!(result.is_err());
}

#[test]
fn test_content_kind_parse_and_display() {
    for kind in ContentKind::ALL {
        let parsed: ContentKind = kind.to_string().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert_eq!("Product".parse::<ContentKind>(), Ok(ContentKind::Products));
    assert_eq!("articles".parse::<ContentKind>(), Ok(ContentKind::Research));
    assert!("blog".parse::<ContentKind>().is_err());
}

#[test]
fn test_content_kind_file_names() {
    assert_eq!(ContentKind::Products.file_name(), "products.json");
    assert_eq!(ContentKind::Team.file_name(), "team.json");
    assert_eq!(
        serde_json::to_string(&ContentKind::Research).unwrap(),
        "\"research\""
    );
}
