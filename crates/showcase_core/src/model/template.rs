//! Read-only catalog of portfolio rendering templates.

use serde::{Deserialize, Serialize};

/// Template id used when a portfolio does not name one.
pub const DEFAULT_TEMPLATE_ID: &str = "template-1";

/// Descriptor for one portfolio rendering template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub features: Vec<String>,
    pub style: String,
}

/// Response body for `GET /api/templates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateListResponse {
    pub templates: Vec<Template>,
}

/// Returns the templates a portfolio may select via `templateId`.
pub fn template_catalog() -> Vec<Template> {
    vec![
        template(
            DEFAULT_TEMPLATE_ID,
            "Template 1",
            "Modern and clean design with yellow hero section and professional layout",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500&h=300&fit=crop",
            &[
                "Hero Section",
                "Professional Layout",
                "Clean Typography",
                "Service Cards",
            ],
            "Modern & Professional",
        ),
        template(
            "template-2",
            "Template 2",
            "Split-screen layout with timeline skills and masonry portfolio grid",
            "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=500&h=300&fit=crop",
            &[
                "Split-screen Layout",
                "Timeline Skills",
                "Masonry Portfolio",
                "Dark Mode Support",
            ],
            "Creative & Dynamic",
        ),
    ]
}

/// Looks up one template by id.
pub fn find_template(id: &str) -> Option<Template> {
    template_catalog().into_iter().find(|template| template.id == id)
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    image: &str,
    features: &[&str],
    style: &str,
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        features: features.iter().map(|feature| feature.to_string()).collect(),
        style: style.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{find_template, template_catalog, DEFAULT_TEMPLATE_ID};

    #[test]
    fn catalog_lists_both_templates_in_order() {
        let ids: Vec<_> = template_catalog().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["template-1", "template-2"]);
    }

    #[test]
    fn find_template_resolves_default_and_rejects_unknown() {
        assert!(find_template(DEFAULT_TEMPLATE_ID).is_some());
        assert!(find_template("template-9").is_none());
    }
}
