use chrono::{TimeZone, Utc};
use showcase_core::{
    CreatePortfolioRequest, CreatePropertyRequest, NewPortfolio, NewProperty, Portfolio,
    Property, PropertyType, ValidationError,
};

fn sample_property() -> Property {
    let at = Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap();
    Property::with_id(
        "p-1",
        at,
        NewProperty {
            name: "Corner unit".to_string(),
            kind: PropertyType::RetailStore,
            location: "Kolkata".to_string(),
            price: 180_000.0,
            description: "City center".to_string(),
            image: None,
            coordinates: None,
            features: None,
        },
    )
}

#[test]
fn property_serialization_uses_expected_wire_fields() {
    let json = serde_json::to_value(sample_property()).unwrap();

    assert_eq!(json["id"], "p-1");
    assert_eq!(json["type"], "Retail Store");
    assert_eq!(json["price"].as_f64(), Some(180_000.0));
    assert_eq!(json["createdAt"], "2026-02-13T10:00:00Z");
    assert_eq!(json["updatedAt"], json["createdAt"]);
    assert!(json.get("image").is_none());
    assert!(json.get("coordinates").is_none());
    assert!(json.get("features").is_none());

    let decoded: Property = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, sample_property());
}

#[test]
fn property_type_accepts_compact_spelling() {
    let kind: PropertyType = serde_json::from_str("\"PlotStore\"").unwrap();
    assert_eq!(kind, PropertyType::PlotStore);
    assert_eq!(PropertyType::from_label("Plot Store"), Some(PropertyType::PlotStore));
    assert_eq!(PropertyType::from_label("Castle"), None);
}

#[test]
fn create_property_request_rejects_unknown_type() {
    let value = serde_json::json!({
        "name": "Lot",
        "type": "Castle",
        "location": "Pune",
        "price": 5
    });
    let request: CreatePropertyRequest = serde_json::from_value(value).unwrap();
    let err = request.validate().unwrap_err();
    assert_eq!(err, ValidationError::UnknownPropertyType("Castle".to_string()));
    assert!(err.missing_fields().is_empty());
}

#[test]
fn empty_property_type_counts_as_missing() {
    let value = serde_json::json!({
        "name": "Lot",
        "type": "",
        "location": "Pune",
        "price": 5
    });
    let request: CreatePropertyRequest = serde_json::from_value(value).unwrap();
    let err = request.validate().unwrap_err();
    assert_eq!(err.missing_fields(), &["type"]);
    assert_eq!(
        err.to_string(),
        "Missing required fields: name, type, location, and price are required"
    );
}

#[test]
fn create_property_request_accepts_compact_type_label() {
    let value = serde_json::json!({
        "name": "Lot",
        "type": "RetailStore",
        "location": "Pune",
        "price": 5
    });
    let request: CreatePropertyRequest = serde_json::from_value(value).unwrap();
    assert_eq!(request.validate().unwrap().kind, PropertyType::RetailStore);
}

#[test]
fn whole_prices_serialize_as_integers() {
    let json = serde_json::to_value(sample_property()).unwrap();
    assert_eq!(json["price"], serde_json::json!(180000));

    let fractional = Property {
        price: 99.5,
        ..sample_property()
    };
    let json = serde_json::to_value(fractional).unwrap();
    assert_eq!(json["price"], serde_json::json!(99.5));
}

#[test]
fn socials_keep_platforms_beyond_the_common_four() {
    let value = serde_json::json!({
        "name": "Jane",
        "title": "Engineer",
        "email": "jane@x.com",
        "socials": {
            "instagram": "https://instagram.com/jane",
            "github": "https://github.com/jane",
            "twitter": null
        }
    });

    let request: CreatePortfolioRequest = serde_json::from_value(value).unwrap();
    let portfolio = Portfolio::create(request.validate().unwrap());
    assert_eq!(
        portfolio.socials.link("instagram"),
        Some("https://instagram.com/jane")
    );
    assert_eq!(portfolio.socials.link("twitter"), None);

    let json = serde_json::to_value(&portfolio).unwrap();
    assert_eq!(
        json["socials"],
        serde_json::json!({
            "github": "https://github.com/jane",
            "instagram": "https://instagram.com/jane",
            "twitter": null
        })
    );
}

#[test]
fn create_property_request_reports_all_missing_fields() {
    let err = CreatePropertyRequest::default().validate().unwrap_err();
    assert_eq!(err.missing_fields(), &["name", "type", "location", "price"]);
}

#[test]
fn portfolio_serialization_keeps_empty_lists() {
    let portfolio = Portfolio::create(NewPortfolio {
        name: "Jane".to_string(),
        title: "Engineer".to_string(),
        email: "jane@x.com".to_string(),
        ..NewPortfolio::default()
    });

    let json = serde_json::to_value(&portfolio).unwrap();
    assert_eq!(json["skills"], serde_json::json!([]));
    assert_eq!(json["portfolio"], serde_json::json!([]));
    assert_eq!(json["socials"], serde_json::json!({}));
    assert!(json.get("blog").is_none());
    assert!(json.get("contactMessage").is_some());
}

#[test]
fn create_portfolio_request_decodes_camel_case_payload() {
    let value = serde_json::json!({
        "templateId": "template-2",
        "name": "Jane",
        "title": "Engineer",
        "email": "jane@x.com",
        "profileImage": "me.png",
        "socials": { "github": "https://github.com/jane" },
        "skills": ["Rust", "Rust"],
        "portfolio": [{ "title": "Tool", "image": "t.png", "description": "cli" }],
        "contactMessage": "hi"
    });

    let request: CreatePortfolioRequest = serde_json::from_value(value).unwrap();
    let input = request.validate().unwrap();
    assert_eq!(input.template_id, "template-2");
    assert_eq!(input.profile_image, "me.png");
    assert_eq!(input.skills, vec!["Rust", "Rust"]);
    assert_eq!(input.portfolio_items.len(), 1);
    assert_eq!(input.socials.link("github"), Some("https://github.com/jane"));
}
