use anyhow::{bail, Result};

pub const MAX_PAGES: u32 = 5;

pub const USAGE: &str = "usage: otomoto-scout <brand|url> [pages 1-5] [--json]
brands: volkswagen, audi, bmw, mercedes-benz, nissan (or 1-5)";

/// Brands with a predefined listing index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Volkswagen,
    Audi,
    Bmw,
    MercedesBenz,
    Nissan,
}

impl Brand {
    pub const ALL: [Brand; 5] = [
        Brand::Volkswagen,
        Brand::Audi,
        Brand::Bmw,
        Brand::MercedesBenz,
        Brand::Nissan,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Brand::Volkswagen => "volkswagen",
            Brand::Audi => "audi",
            Brand::Bmw => "bmw",
            Brand::MercedesBenz => "mercedes-benz",
            Brand::Nissan => "nissan",
        }
    }

    pub fn base_url(self) -> String {
        format!("https://www.otomoto.pl/osobowe/{}", self.slug())
    }

    /// Accepts a slug or the 1-based menu number
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_ascii_lowercase();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL.into_iter().find(|b| b.slug() == input)
    }
}

/// True for a string of digits whose value is within 1..=5
pub fn valid_page_count(input: &str) -> bool {
    !input.is_empty()
        && input.bytes().all(|b| b.is_ascii_digit())
        && input
            .parse::<u32>()
            .map(|n| (1..=MAX_PAGES).contains(&n))
            .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub base_url: String,
    pub page_count: u32,
    pub json: bool,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut json = false;
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--json" {
                json = true;
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let Some(target) = positional.next() else {
            bail!("missing brand or URL");
        };

        let base_url = if target.starts_with("http://") || target.starts_with("https://") {
            target.trim_end_matches('/').to_string()
        } else {
            match Brand::parse(&target) {
                Some(brand) => brand.base_url(),
                None => bail!("unknown brand '{}'", target),
            }
        };

        let page_count = match positional.next() {
            Some(pages) if valid_page_count(&pages) => pages.parse()?,
            Some(pages) => bail!(
                "invalid page count '{}': expected a number from 1 to {}",
                pages,
                MAX_PAGES
            ),
            None => 1,
        };

        if let Some(extra) = positional.next() {
            bail!("unexpected argument '{}'", extra);
        }

        Ok(Self {
            base_url,
            page_count,
            json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn page_count_within_range_is_valid() {
        assert!(valid_page_count("3"));
        assert!(valid_page_count("1"));
        assert!(valid_page_count("5"));
    }

    #[test]
    fn page_count_must_be_numeric() {
        assert!(!valid_page_count("a"));
        assert!(!valid_page_count(""));
        assert!(!valid_page_count("-1"));
        assert!(!valid_page_count("2.5"));
    }

    #[test]
    fn page_count_below_one_is_invalid() {
        assert!(!valid_page_count("0"));
    }

    #[test]
    fn page_count_above_five_is_invalid() {
        assert!(!valid_page_count("6"));
    }

    #[test]
    fn brand_by_name_or_number() {
        assert_eq!(Brand::parse("bmw"), Some(Brand::Bmw));
        assert_eq!(Brand::parse("Mercedes-Benz"), Some(Brand::MercedesBenz));
        assert_eq!(Brand::parse("1"), Some(Brand::Volkswagen));
        assert_eq!(Brand::parse("5"), Some(Brand::Nissan));
        assert_eq!(Brand::parse("0"), None);
        assert_eq!(Brand::parse("6"), None);
        assert_eq!(Brand::parse("skoda"), None);
    }

    #[test]
    fn parses_brand_pages_and_json_flag() {
        let parsed = args(&["audi", "3", "--json"]).unwrap();
        assert_eq!(
            parsed,
            Args {
                base_url: "https://www.otomoto.pl/osobowe/audi".to_string(),
                page_count: 3,
                json: true,
            }
        );
    }

    #[test]
    fn accepts_raw_url_and_defaults_to_one_page() {
        let parsed = args(&["https://www.otomoto.pl/osobowe/toyota/"]).unwrap();
        assert_eq!(parsed.base_url, "https://www.otomoto.pl/osobowe/toyota");
        assert_eq!(parsed.page_count, 1);
        assert!(!parsed.json);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&[]).is_err());
        assert!(args(&["skoda"]).is_err());
        assert!(args(&["nissan", "9"]).is_err());
        assert!(args(&["nissan", "2", "extra"]).is_err());
    }
}
