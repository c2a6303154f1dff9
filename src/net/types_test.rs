use super::*;

// =============================================================
// ItemSummary
// =============================================================

#[test]
fn summary_list_decodes_in_server_order() {
    let items: Vec<ItemSummary> =
        serde_json::from_str(r#"[{"id":2,"name":"Gadget"},{"id":1,"name":"Widget"}]"#).unwrap();
    assert_eq!(
        items,
        vec![
            ItemSummary { id: 2, name: "Gadget".to_owned() },
            ItemSummary { id: 1, name: "Widget".to_owned() },
        ]
    );
}

#[test]
fn summary_ignores_description_sent_by_list_endpoint() {
    let item: ItemSummary =
        serde_json::from_str(r#"{"id":7,"name":"Bolt","description":"Zinc plated"}"#).unwrap();
    assert_eq!(item, ItemSummary { id: 7, name: "Bolt".to_owned() });
}

#[test]
fn summary_requires_name() {
    assert!(serde_json::from_str::<ItemSummary>(r#"{"id":7}"#).is_err());
}

// =============================================================
// ItemDetail
// =============================================================

#[test]
fn detail_decodes_all_fields() {
    let item: ItemDetail =
        serde_json::from_str(r#"{"id":1,"name":"Widget","description":"A small widget"}"#).unwrap();
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "Widget");
    assert_eq!(item.description, "A small widget");
}

#[test]
fn detail_requires_description() {
    assert!(serde_json::from_str::<ItemDetail>(r#"{"id":1,"name":"Widget"}"#).is_err());
}
