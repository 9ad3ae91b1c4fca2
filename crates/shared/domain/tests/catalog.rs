use flexiforms_domain::catalog::{self, PRICING_DATA};
use flexiforms_domain::constants::ENTERPRISE_PLAN_ID;
use flexiforms_domain::Price;
use std::collections::HashSet;

#[test]
fn catalog_keeps_display_order() {
    let titles: Vec<_> = catalog::plans().iter().map(|plan| plan.title).collect();
    assert_eq!(titles, ["Basic", "Pro", "Enterprise"]);
}

#[test]
fn plan_ids_are_unique() {
    let ids: HashSet<_> = PRICING_DATA.iter().map(|plan| plan.id).collect();
    assert_eq!(ids.len(), PRICING_DATA.len());
}

#[test]
fn every_plan_lists_features() {
    assert!(PRICING_DATA.iter().all(|plan| !plan.features.is_empty()));
}

#[test]
fn find_by_id() {
    let enterprise = catalog::find(ENTERPRISE_PLAN_ID).expect("enterprise plan exists");
    assert_eq!(enterprise.title, "Enterprise");
    assert_eq!(enterprise.price, Price::Label("Custom"));
    assert!(catalog::find("plan_missing").is_none());
}

#[test]
fn only_pro_is_featured() {
    let featured: Vec<_> = catalog::featured().map(|plan| plan.id).collect();
    assert_eq!(featured, ["plan_pro"]);
}

#[test]
fn basic_plan_fixture() {
    let basic = catalog::find("plan_basic").expect("basic plan exists");
    assert_eq!(basic.price, Price::Monthly(12.0));
    assert_eq!(basic.features.len(), 4);
    assert_eq!(basic.features[0], "10 Form Submissions per Month");
    assert_eq!(basic.features[3], "Community Support");
}

#[test]
fn catalog_serializes_like_the_page_data() {
    let value = serde_json::to_value(PRICING_DATA).expect("catalog serializes");
    assert_eq!(value[0]["price"], serde_json::json!(12.0));
    assert_eq!(value[2]["price"], serde_json::json!("Custom"));
    assert_eq!(value[1]["isFeatured"], serde_json::json!(true));
}
