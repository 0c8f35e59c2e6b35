use crate::scrapers::error::ScrapeError;
use scraper::{ElementRef, Selector};
use std::fmt;
use tracing::warn;

/// A compiled CSS selector that remembers its source text for diagnostics
#[derive(Debug, Clone)]
pub struct Locator {
    source: String,
    selector: Selector,
    /// Matches nested in an element matching this are skipped
    outside: Option<(String, Selector)>,
}

fn compile(source: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(source).map_err(|e| ScrapeError::Selector {
        selector: source.to_string(),
        reason: e.to_string(),
    })
}

impl Locator {
    pub fn new(source: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            source: source.to_string(),
            selector: compile(source)?,
            outside: None,
        })
    }

    /// Like `new`, but ignores matches that sit inside an `excluded` element
    /// below the searched node.
    pub fn outside(source: &str, excluded: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            outside: Some((excluded.to_string(), compile(excluded)?)),
            ..Self::new(source)?
        })
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// First match in document order, counting `node` itself before its descendants.
    pub fn find<'a>(&self, node: ElementRef<'a>) -> Option<ElementRef<'a>> {
        if self.selector.matches(&node) {
            return Some(node);
        }
        node.select(&self.selector).find(|found| !self.is_excluded(node, *found))
    }

    fn is_excluded(&self, root: ElementRef<'_>, found: ElementRef<'_>) -> bool {
        let Some((_, excluded)) = &self.outside else {
            return false;
        };
        found
            .ancestors()
            .take_while(|ancestor| ancestor.id() != root.id())
            .filter_map(ElementRef::wrap)
            .any(|ancestor| excluded.matches(&ancestor))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)?;
        if let Some((excluded, _)) = &self.outside {
            write!(f, " (outside {})", excluded)?;
        }
        Ok(())
    }
}

/// Locators for the fields of one listing container
#[derive(Debug, Clone)]
pub struct ListingLocators {
    pub title_link: Locator,
    pub image: Locator,
    pub engine_line: Locator,
    pub year: Locator,
    pub fuel: Locator,
    pub price: Locator,
    pub gearbox: Locator,
    pub mileage: Locator,
    pub location: Locator,
}

impl ListingLocators {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            title_link: Locator::new("h1 > a")?,
            image: Locator::new("img")?,
            engine_line: Locator::outside("p", "dl")?,
            year: Locator::new(r#"dd[data-parameter="year"]"#)?,
            fuel: Locator::new(r#"dd[data-parameter="fuel_type"]"#)?,
            price: Locator::new("h3")?,
            gearbox: Locator::new(r#"dd[data-parameter="gearbox"]"#)?,
            mileage: Locator::new(r#"dd[data-parameter="mileage"]"#)?,
            location: Locator::new("dl:nth-of-type(2) > dd:nth-of-type(1) > p")?,
        })
    }
}

/// Pulls a single field out of a listing node.
///
/// Returns the attribute value when `attribute` is given, otherwise the
/// node's trimmed text. A missing node or attribute is logged and
/// resolved to `default`; it is never an error.
pub fn extract(
    node: ElementRef<'_>,
    locator: &Locator,
    attribute: Option<&str>,
    default: Option<&str>,
) -> Option<String> {
    let fallback = || default.map(str::to_string);

    let Some(found) = locator.find(node) else {
        warn!(%locator, "No node found for locator");
        return fallback();
    };

    match attribute {
        Some(name) => match found.value().attr(name) {
            Some(value) => Some(value.to_string()),
            None => {
                warn!(%locator, attribute = name, "Attribute not found on node");
                fallback()
            }
        },
        None => Some(found.text().collect::<String>().trim().to_string()),
    }
}
