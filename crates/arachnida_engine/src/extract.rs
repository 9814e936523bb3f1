use scraper::{Html, Selector};

/// Raw attribute values found in a page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRefs {
    /// `src` of every `<img>` that declares one.
    pub images: Vec<String>,
    /// `href` of every `<a>` that declares one.
    pub links: Vec<String>,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> PageRefs;
}

/// Extracts image sources and anchor targets with CSS selectors.
#[derive(Debug, Default)]
pub struct DomExtractor;

impl Extractor for DomExtractor {
    fn extract(&self, html: &str) -> PageRefs {
        let doc = Html::parse_document(html);
        let image_sel = Selector::parse("img[src]").ok();
        let link_sel = Selector::parse("a[href]").ok();

        PageRefs {
            images: attribute_values(&doc, image_sel.as_ref(), "src"),
            links: attribute_values(&doc, link_sel.as_ref(), "href"),
        }
    }
}

fn attribute_values(doc: &Html, selector: Option<&Selector>, attr: &str) -> Vec<String> {
    let Some(selector) = selector else {
        return Vec::new();
    };
    doc.select(selector)
        .filter_map(|element| element.value().attr(attr))
        .map(ToOwned::to_owned)
        .collect()
}
