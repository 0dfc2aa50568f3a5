use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Advertising objective forwarded to the creative backend.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignGoal {
    Traffic,
    #[default]
    Conversion,
    Awareness,
}

impl CampaignGoal {
    pub const ALL: [CampaignGoal; 3] = [CampaignGoal::Traffic, CampaignGoal::Conversion, CampaignGoal::Awareness];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignGoal::Traffic => "traffic",
            CampaignGoal::Conversion => "conversion",
            CampaignGoal::Awareness => "awareness",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignGoal::Traffic => "Traffic",
            CampaignGoal::Conversion => "Conversion",
            CampaignGoal::Awareness => "Awareness",
        }
    }
}

impl fmt::Display for CampaignGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignGoal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| format!("unknown campaign goal '{s}'"))
    }
}

/// Body of `POST /api/generate-creative`, forwarded as-is to the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub reference_image_url: String,
    pub product_image_url: String,
    #[serde(default)]
    pub brand_logo_url: Option<String>,
    pub brand_name: String,
    #[serde(default)]
    pub campaign_goal: CampaignGoal,
}

impl GenerationRequest {
    /// Checks the required fields and normalizes a blank logo URL to `None`.
    pub fn validate(mut self) -> Result<Self, String> {
        let missing: Vec<&str> = [
            ("reference_image_url", &self.reference_image_url),
            ("product_image_url", &self.product_image_url),
            ("brand_name", &self.brand_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(format!("required fields are empty: {}", missing.join(", ")));
        }

        if self.brand_logo_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            self.brand_logo_url = None;
        }
        Ok(self)
    }
}

/// Generated ad copy and image, produced entirely by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreativeResult {
    pub headline: String,
    pub primary_text: String,
    pub cta: String,
    pub generated_image_url: String,
}

/// The only error body shape the proxy emits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: String,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn request() -> GenerationRequest {
        GenerationRequest {
            reference_image_url: "https://ads.example/winner.jpg".into(),
            product_image_url: "https://shop.example/bottle.png".into(),
            brand_logo_url: None,
            brand_name: "Acme Corp".into(),
            campaign_goal: CampaignGoal::Traffic,
        }
    }

    #[test]
    fn goal_defaults_to_conversion_when_omitted() {
        let parsed: GenerationRequest = serde_json::from_value(json!({
            "reference_image_url": "a",
            "product_image_url": "b",
            "brand_name": "c"
        }))
        .unwrap();
        assert_eq!(parsed.campaign_goal, CampaignGoal::Conversion);
        assert_eq!(parsed.brand_logo_url, None);
    }

    #[test]
    fn unknown_goal_is_rejected() {
        let parsed = serde_json::from_value::<GenerationRequest>(json!({
            "reference_image_url": "a",
            "product_image_url": "b",
            "brand_name": "c",
            "campaign_goal": "virality"
        }));
        assert!(parsed.is_err());
        assert!("virality".parse::<CampaignGoal>().is_err());
        assert_eq!("awareness".parse::<CampaignGoal>(), Ok(CampaignGoal::Awareness));
    }

    #[test]
    fn absent_logo_serializes_as_null() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(value["brand_logo_url"], serde_json::Value::Null);
        assert_eq!(value["campaign_goal"], "traffic");
    }

    #[test]
    fn validate_names_every_blank_required_field() {
        let mut req = request();
        req.reference_image_url = "   ".into();
        req.brand_name = String::new();
        let err = req.validate().unwrap_err();
        assert_eq!(err, "required fields are empty: reference_image_url, brand_name");
    }

    #[test]
    fn validate_drops_blank_logo() {
        let mut req = request();
        req.brand_logo_url = Some("  ".into());
        assert_eq!(req.validate().unwrap().brand_logo_url, None);

        let mut req = request();
        req.brand_logo_url = Some("https://cdn.example/logo.png".into());
        assert_eq!(
            req.validate().unwrap().brand_logo_url.as_deref(),
            Some("https://cdn.example/logo.png")
        );
    }
}
