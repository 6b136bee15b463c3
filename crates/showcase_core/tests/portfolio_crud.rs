use showcase_core::store::seed::SEED_PORTFOLIO_COUNT;
use showcase_core::{
    open_store, Blog, CreatePortfolioRequest, InMemoryPortfolioRepository, PortfolioListQuery,
    PortfolioRepository, PortfolioService, ServiceError,
};

fn jane() -> CreatePortfolioRequest {
    CreatePortfolioRequest {
        name: Some("Jane".to_string()),
        title: Some("Engineer".to_string()),
        email: Some("jane@x.com".to_string()),
        skills: Some(Vec::new()),
        services: Some(Vec::new()),
        portfolio_items: Some(Vec::new()),
        testimonials: Some(Vec::new()),
        ..CreatePortfolioRequest::default()
    }
}

#[test]
fn create_with_empty_sections_keeps_empty_lists() {
    let store = open_store().unwrap();
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&store));

    let created = service.create_portfolio(jane()).unwrap();
    assert!(created.skills.is_empty());
    assert!(created.services.is_empty());
    assert!(created.blog.is_none());
    assert_eq!(created.template_id, "template-1");

    let loaded = service.get_portfolio(&created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn list_after_create_is_seed_plus_one() {
    let store = open_store().unwrap();
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&store));

    let created = service.create_portfolio(jane()).unwrap();
    let listed = service
        .list_portfolios(&PortfolioListQuery::default())
        .unwrap();
    assert_eq!(listed.len(), SEED_PORTFOLIO_COUNT + 1);
    assert_eq!(listed.last().unwrap().id, created.id);
    assert!(listed[..SEED_PORTFOLIO_COUNT]
        .iter()
        .all(|seeded| seeded.id != created.id));
}

#[test]
fn missing_email_is_rejected() {
    let store = open_store().unwrap();
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&store));

    let request = CreatePortfolioRequest {
        email: Some(String::new()),
        ..jane()
    };
    let err = service.create_portfolio(request).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required fields: name, title, and email are required"
    );
    assert_eq!(store.portfolios().len().unwrap(), SEED_PORTFOLIO_COUNT);
}

#[test]
fn blank_blog_is_treated_as_absent() {
    let store = open_store().unwrap();
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&store));

    let request = CreatePortfolioRequest {
        blog: Some(Blog::default()),
        ..jane()
    };
    let created = service.create_portfolio(request).unwrap();
    assert!(created.blog.is_none());
}

#[test]
fn unknown_template_id_is_stored_as_given() {
    let store = open_store().unwrap();
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&store));

    let request = CreatePortfolioRequest {
        template_id: Some("template-7".to_string()),
        ..jane()
    };
    let created = service.create_portfolio(request).unwrap();
    assert_eq!(created.template_id, "template-7");
}

#[test]
fn get_unknown_id_returns_not_found() {
    let store = open_store().unwrap();
    let service = PortfolioService::new(InMemoryPortfolioRepository::new(&store));

    let err = service.get_portfolio("42").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "Portfolio", .. }));
}

#[test]
fn list_filters_by_skill_and_location() {
    let store = open_store().unwrap();
    let repo = InMemoryPortfolioRepository::new(&store);

    let cloud = repo
        .list_portfolios(&PortfolioListQuery {
            skill: Some("cloud".to_string()),
            ..PortfolioListQuery::default()
        })
        .unwrap();
    assert_eq!(cloud.len(), 1);
    assert_eq!(cloud[0].name, "Kevin Brown");

    let miami = repo
        .list_portfolios(&PortfolioListQuery {
            location: Some("miami".to_string()),
            ..PortfolioListQuery::default()
        })
        .unwrap();
    assert_eq!(miami.len(), 1);
    assert_eq!(miami[0].name, "Emma Foster");
}
