//! Values the ad preview derives locally instead of taking from the backend.

use reqwest::Url;

pub const PLACEHOLDER_HOST: &str = "example.com";

/// Host shown above the headline. Anything that is not an http(s) URL with a
/// host falls back to [`PLACEHOLDER_HOST`].
pub fn hostname_label(product_image_url: &str) -> String {
    Url::parse(product_image_url.trim())
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| PLACEHOLDER_HOST.to_string())
}

/// Avatar fallback when no logo is given: first two characters, uppercased.
pub fn brand_initials(brand_name: &str) -> String {
    brand_name.chars().take(2).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hostname_comes_from_product_url() {
        assert_eq!(hostname_label("https://shop.acme.com/img/bottle.png"), "shop.acme.com");
        assert_eq!(hostname_label("http://127.0.0.1:9000/p.png"), "127.0.0.1");
    }

    #[test]
    fn schemeless_or_odd_urls_use_placeholder() {
        assert_eq!(hostname_label("not-a-url"), PLACEHOLDER_HOST);
        assert_eq!(hostname_label("shop.acme.com/bottle.png"), PLACEHOLDER_HOST);
        assert_eq!(hostname_label("httpfoo"), PLACEHOLDER_HOST);
        assert_eq!(hostname_label("data:image/png;base64,AAAA"), PLACEHOLDER_HOST);
        assert_eq!(hostname_label(""), PLACEHOLDER_HOST);
    }

    #[test]
    fn initials_are_first_two_chars_uppercased() {
        assert_eq!(brand_initials("Acme Corp"), "AC");
        assert_eq!(brand_initials("x"), "X");
        assert_eq!(brand_initials(" nike"), " N");
        assert_eq!(brand_initials("ürün"), "ÜR");
    }
}
