//! The root document: head links, meta tags, and the commerce context.
//!
//! Page templates extend `root.html` and fill `{% block outlet %}`; each page
//! struct carries a [`RootShell`] built from the request's [`RootData`].

use askama::Template;
use serde::Serialize;

use crate::config::ShopifyStorefrontConfig;
use crate::filters;
use crate::root::RootData;

/// Content hash of `static/css/app.css`, computed by the build script.
const CSS_HASH: &str = env!("CSS_HASH");

/// Preconnect targets for Shopify-hosted assets.
const PRECONNECT_ORIGINS: [&str; 2] = ["https://cdn.shopify.com", "https://shop.app"];

const FAVICON_PATH: &str = "/static/favicon.svg";

/// A `<link>` element in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
    pub mime_type: Option<&'static str>,
}

/// Document character encoding, rendered as `<meta charset>`.
pub const CHARSET: &str = "utf-8";

/// A named `<meta>` element in the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaTag {
    pub name: &'static str,
    pub content: &'static str,
}

/// URL of the app stylesheet, content-hashed when the build produced a hash.
#[must_use]
pub fn stylesheet_href() -> String {
    if CSS_HASH.is_empty() {
        "/static/css/app.css".to_string()
    } else {
        format!("/static/css/derived/app.{CSS_HASH}.css")
    }
}

/// Head links, identical for every request.
#[must_use]
pub fn links() -> Vec<Link> {
    let mut links = Vec::with_capacity(2 + PRECONNECT_ORIGINS.len());
    links.push(Link {
        rel: "stylesheet",
        href: stylesheet_href(),
        mime_type: None,
    });
    links.extend(PRECONNECT_ORIGINS.iter().map(|origin| Link {
        rel: "preconnect",
        href: (*origin).to_string(),
        mime_type: None,
    }));
    links.push(Link {
        rel: "icon",
        href: FAVICON_PATH.to_string(),
        mime_type: Some("image/svg+xml"),
    });
    links
}

/// Named head meta tags, identical for every request.
#[must_use]
pub const fn meta() -> [MetaTag; 1] {
    [MetaTag {
        name: "viewport",
        content: "width=device-width,initial-scale=1",
    }]
}

/// Storefront settings exposed to client-side scripts.
///
/// Serialized into a JSON data block in the document body. Only the public
/// token is included; the private token never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopifyContext {
    pub storefront_token: String,
    pub store_domain: String,
    pub storefront_api_version: String,
    pub country_iso_code: String,
    pub language_iso_code: String,
    pub locale: String,
}

impl ShopifyContext {
    /// Build the context from the Shopify configuration.
    #[must_use]
    pub fn from_config(config: &ShopifyStorefrontConfig) -> Self {
        Self {
            storefront_token: config.storefront_token.clone(),
            store_domain: config.store_domain.clone(),
            storefront_api_version: config.api_version.clone(),
            country_iso_code: config.i18n.country.to_string(),
            language_iso_code: config.i18n.language.to_string(),
            locale: config.i18n.html_lang(),
        }
    }

    /// JSON for a `<script type="application/json">` block.
    ///
    /// `</` is escaped so the payload cannot close the script element.
    #[must_use]
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", r"<\/")
    }
}

/// Everything `root.html` renders around a page.
#[derive(Debug, Clone)]
pub struct RootShell {
    /// `<html lang>` value.
    pub lang: String,
    /// Shop name, used as the page title.
    pub title: String,
    /// Shop description.
    pub description: Option<String>,
    pub charset: &'static str,
    pub links: Vec<Link>,
    pub meta: [MetaTag; 1],
    pub context: ShopifyContext,
    /// Items in the visitor's cart, for the header badge.
    pub cart_count: i64,
}

impl RootShell {
    /// Assemble the shell for one request.
    #[must_use]
    pub fn new(data: &RootData, context: &ShopifyContext) -> Self {
        Self {
            lang: context.locale.clone(),
            title: data.layout.shop.name.clone(),
            description: data.layout.shop.description.clone(),
            charset: CHARSET,
            links: links(),
            meta: meta(),
            context: context.clone(),
            cart_count: data.cart_count(),
        }
    }

    /// The serialized commerce context.
    #[must_use]
    pub fn context_json(&self) -> String {
        self.context.to_script_json()
    }
}

/// The root document with an empty outlet.
///
/// Used by the CLI `render` command; routes render their own templates that
/// extend `root.html`.
#[derive(Template)]
#[template(path = "root.html")]
pub struct RootDocument {
    pub shell: RootShell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hello_storefront_core::I18n;

    use super::*;
    use crate::shopify::types::{Layout, Shop};

    fn context() -> ShopifyContext {
        ShopifyContext::from_config(&ShopifyStorefrontConfig {
            store_domain: "https://hydrogen-preview.myshopify.com".to_string(),
            api_version: "2023-01".to_string(),
            storefront_token: "3b580e70970c4528da70c98e097c2fa0".to_string(),
            storefront_private_token: None,
            i18n: I18n::default(),
        })
    }

    fn shell(description: Option<&str>) -> RootShell {
        let data = RootData {
            cart: None,
            layout: Layout {
                shop: Shop {
                    name: "Hydrogen Preview".to_string(),
                    description: description.map(String::from),
                },
            },
        };
        RootShell::new(&data, &context())
    }

    fn render(description: Option<&str>) -> String {
        RootDocument {
            shell: shell(description),
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_links_order() {
        let links = links();
        let rels: Vec<_> = links.iter().map(|l| l.rel).collect();
        assert_eq!(rels, ["stylesheet", "preconnect", "preconnect", "icon"]);
        assert_eq!(links[1].href, "https://cdn.shopify.com");
        assert_eq!(links[2].href, "https://shop.app");
        assert_eq!(links[3].mime_type, Some("image/svg+xml"));
        assert!(links[0].href.starts_with("/static/css/"));
    }

    #[test]
    fn test_link_rendering() {
        let html = render(None);

        assert!(html.contains(r#"<link rel="icon" href="/static/favicon.svg" type="image/svg+xml">"#));
        assert!(html.contains(&format!(r#"<link rel="stylesheet" href="{}">"#, stylesheet_href())));
    }

    #[test]
    fn test_link_attributes_are_escaped() {
        let mut shell = shell(None);
        shell.links.push(Link {
            rel: "preload",
            href: r#"/static/a.css?v=1&x="><script>"#.to_string(),
            mime_type: None,
        });

        let html = RootDocument { shell }.render().unwrap();

        assert!(!html.contains(r#""><script>"#));
        assert!(html.contains("/static/a.css?v=1&amp;x="));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_head_output_is_fixed() {
        for description in [None, Some("A custom storefront")] {
            let html = render(description);

            assert_eq!(html.matches(r#"rel="stylesheet""#).count(), 1);
            assert_eq!(html.matches(r#"rel="preconnect""#).count(), 2);
            assert!(html.contains(r#"<link rel="preconnect" href="https://cdn.shopify.com">"#));
            assert!(html.contains(r#"<link rel="preconnect" href="https://shop.app">"#));
            assert_eq!(html.matches(r#"rel="icon""#).count(), 1);
            assert_eq!(html.matches(r#"<meta charset="utf-8">"#).count(), 1);
            assert_eq!(
                html.matches(r#"<meta name="viewport" content="width=device-width,initial-scale=1">"#)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_shell_renders_shop_and_context() {
        let html = render(Some("A custom storefront"));

        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Hydrogen Preview</title>"));
        assert!(html.contains("A custom storefront"));
        assert!(html.contains(r#"id="shopify-config""#));
        assert!(html.contains(r#""storeDomain":"https://hydrogen-preview.myshopify.com""#));
        assert!(html.contains(r#""storefrontApiVersion":"2023-01""#));
    }

    #[test]
    fn test_context_json_cannot_close_script() {
        let mut context = context();
        context.storefront_token = "</script><script>alert(1)".to_string();

        let json = context.to_script_json();
        assert!(!json.contains("</script>"));
        assert!(json.contains(r"<\/script>"));
    }
}
