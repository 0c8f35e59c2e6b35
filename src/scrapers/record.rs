use crate::models::ListingRecord;
use crate::scrapers::description::DescriptionParser;
use crate::scrapers::error::{RecordError, ScrapeError};
use crate::scrapers::extract::{extract, ListingLocators};
use crate::scrapers::types::ScrapeConfig;
use scraper::ElementRef;
use tracing::{debug, error, warn};

/// Turns one listing container into a `ListingRecord`
pub struct RecordBuilder {
    locators: ListingLocators,
    parser: DescriptionParser,
    thumbnail_suffix: String,
    no_image: String,
}

impl RecordBuilder {
    pub fn with_params(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            locators: ListingLocators::new()?,
            parser: DescriptionParser::new(config.description_delimiter.as_str()),
            thumbnail_suffix: config.thumbnail_suffix.clone(),
            no_image: config.no_image.clone(),
        })
    }

    /// Returns `None` when the listing lacks a URL, name, year or price, or
    /// its year is not a number. Problems are logged, never raised.
    pub fn build(&self, node: ElementRef<'_>) -> Option<ListingRecord> {
        match self.try_build(node) {
            Ok(record) => Some(record),
            Err(e @ RecordError::MissingField(_)) => {
                warn!(error = %e, "Skipping listing with missing essential data");
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to extract listing data");
                None
            }
        }
    }

    fn try_build(&self, node: ElementRef<'_>) -> Result<ListingRecord, RecordError> {
        debug!("Starting to extract listing data");
        let loc = &self.locators;

        let product_url = extract(node, &loc.title_link, Some("href"), None);

        let image_url = extract(node, &loc.image, Some("src"), None)
            .map(|src| self.strip_thumbnail_suffix(src))
            .unwrap_or_else(|| self.no_image.clone());

        let name = extract(node, &loc.title_link, None, None);

        let engine_line = extract(node, &loc.engine_line, None, None);
        let facets = self.parser.parse(engine_line.as_deref());

        let year = extract(node, &loc.year, None, None);
        let fuel = extract(node, &loc.fuel, None, None);
        let price = extract(node, &loc.price, None, None);
        let gearbox = extract(node, &loc.gearbox, None, None);
        let mileage = extract(node, &loc.mileage, None, None);
        let location = extract(node, &loc.location, None, None);

        let product_url = required("product_url", product_url)?;
        let name = required("name", name)?;
        let year = required("year", year)?;
        let price = required("price", price)?;

        let year = year
            .parse::<i32>()
            .map_err(|_| RecordError::InvalidYear { raw: year.clone() })?;

        Ok(ListingRecord {
            name,
            engine: facets.engine,
            power: facets.power,
            description: facets.description,
            price,
            year,
            fuel,
            gearbox,
            mileage,
            location,
            image_url,
            product_url,
        })
    }

    fn strip_thumbnail_suffix(&self, src: String) -> String {
        if self.thumbnail_suffix.is_empty() {
            return src;
        }
        src.replace(self.thumbnail_suffix.as_str(), "")
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, RecordError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RecordError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::types::NO_IMAGE;
    use scraper::{Html, Selector};

    fn build_first(html: &str) -> Option<ListingRecord> {
        let document = Html::parse_document(html);
        let article = Selector::parse("article").unwrap();
        let node = document.select(&article).next().unwrap();
        RecordBuilder::with_params(&ScrapeConfig::default())
            .unwrap()
            .build(node)
    }

    const FULL: &str = r#"
        <article data-highlighted="true">
            <img src="https://ireland.apollo.olxcdn.com/v1/files/abc/image;s=320x240">
            <h1><a href="https://www.otomoto.pl/osobowe/oferta/vw-golf-ID6F.html">Volkswagen Golf 2.0 TDI</a></h1>
            <p>1 968 cm3 • 150 KM • Comfortline, salon PL</p>
            <dl>
                <dd data-parameter="mileage">120 000 km</dd>
                <dd data-parameter="fuel_type">Diesel</dd>
                <dd data-parameter="gearbox">Manualna</dd>
                <dd data-parameter="year">2019</dd>
            </dl>
            <dl><dd><p>Kraków (Małopolskie)</p></dd></dl>
            <h3>45 000 zł</h3>
        </article>
    "#;

    #[test]
    fn builds_complete_record() {
        let record = build_first(FULL).unwrap();
        assert_eq!(
            record,
            ListingRecord {
                name: "Volkswagen Golf 2.0 TDI".to_string(),
                engine: Some("1 968 cm3".to_string()),
                power: Some("150 KM".to_string()),
                description: Some("Comfortline, salon PL".to_string()),
                price: "45 000 zł".to_string(),
                year: 2019,
                fuel: Some("Diesel".to_string()),
                gearbox: Some("Manualna".to_string()),
                mileage: Some("120 000 km".to_string()),
                location: Some("Kraków (Małopolskie)".to_string()),
                image_url: "https://ireland.apollo.olxcdn.com/v1/files/abc/image".to_string(),
                product_url: "https://www.otomoto.pl/osobowe/oferta/vw-golf-ID6F.html"
                    .to_string(),
            }
        );
    }

    #[test]
    fn optional_fields_fall_back() {
        let html = r#"
            <article data-highlighted="true">
                <h1><a href="/ad/1">Test Car</a></h1>
                <dl><dd data-parameter="year">2019</dd></dl>
                <h3>45 000 zł</h3>
            </article>
        "#;
        let record = build_first(html).unwrap();
        assert_eq!(record.year, 2019);
        assert_eq!(record.price, "45 000 zł");
        assert_eq!(record.product_url, "/ad/1");
        assert_eq!(record.name, "Test Car");
        assert_eq!(record.image_url, NO_IMAGE);
        assert_eq!(record.engine, None);
        assert_eq!(record.power, None);
        assert_eq!(record.description, None);
        assert_eq!(record.fuel, None);
        assert_eq!(record.location, None);
    }

    #[test]
    fn each_required_field_gates_the_record() {
        for (field, html) in [
            (
                "url",
                FULL.replace(
                    r#" href="https://www.otomoto.pl/osobowe/oferta/vw-golf-ID6F.html""#,
                    "",
                ),
            ),
            ("name", FULL.replace("Volkswagen Golf 2.0 TDI", "  ")),
            ("year", FULL.replace(r#"<dd data-parameter="year">2019</dd>"#, "")),
            ("price", FULL.replace("<h3>45 000 zł</h3>", "")),
        ] {
            assert_eq!(build_first(&html), None, "record without {field} must be dropped");
        }
    }

    #[test]
    fn location_is_not_read_as_engine_line() {
        let html = FULL.replace("<p>1 968 cm3 • 150 KM • Comfortline, salon PL</p>", "");
        let record = build_first(&html).unwrap();
        assert_eq!(record.engine, None);
        assert_eq!(record.power, None);
        assert_eq!(record.description, None);
        assert_eq!(record.location.as_deref(), Some("Kraków (Małopolskie)"));
    }

    #[test]
    fn non_numeric_year_drops_record() {
        let html = FULL.replace(">2019<", ">brak<");
        assert_eq!(build_first(&html), None);
    }

    #[test]
    fn missing_optional_fields_keep_record() {
        let html = FULL
            .replace(r#"<dd data-parameter="fuel_type">Diesel</dd>"#, "")
            .replace(r#"<dd data-parameter="gearbox">Manualna</dd>"#, "")
            .replace(r#"<dd data-parameter="mileage">120 000 km</dd>"#, "");
        let record = build_first(&html).unwrap();
        assert_eq!(record.fuel, None);
        assert_eq!(record.gearbox, None);
        assert_eq!(record.mileage, None);
        assert_eq!(record.location.as_deref(), Some("Kraków (Małopolskie)"));
    }
}
