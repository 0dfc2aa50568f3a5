use crate::models::{CampaignGoal, CreativeResult, GenerationRequest};

/// Inputs of the campaign form, addressable by their HTML `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ReferenceImageUrl,
    ProductImageUrl,
    BrandLogoUrl,
    BrandName,
    CampaignGoal,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::ReferenceImageUrl,
        FormField::ProductImageUrl,
        FormField::BrandLogoUrl,
        FormField::BrandName,
        FormField::CampaignGoal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::ReferenceImageUrl => "reference_image_url",
            FormField::ProductImageUrl => "product_image_url",
            FormField::BrandLogoUrl => "brand_logo_url",
            FormField::BrandName => "brand_name",
            FormField::CampaignGoal => "campaign_goal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignForm {
    pub reference_image_url: String,
    pub product_image_url: String,
    pub brand_logo_url: String,
    pub brand_name: String,
    pub campaign_goal: CampaignGoal,
}

impl CampaignForm {
    /// Applies one edit. An unrecognised goal leaves the current goal in place.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::ReferenceImageUrl => self.reference_image_url = value,
            FormField::ProductImageUrl => self.product_image_url = value,
            FormField::BrandLogoUrl => self.brand_logo_url = value,
            FormField::BrandName => self.brand_name = value,
            FormField::CampaignGoal => {
                if let Ok(goal) = value.parse() {
                    self.campaign_goal = goal;
                }
            }
        }
    }

    pub fn has_required_fields(&self) -> bool {
        [&self.reference_image_url, &self.product_image_url, &self.brand_name]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn logo_url(&self) -> Option<&str> {
        Some(self.brand_logo_url.as_str()).filter(|url| !url.trim().is_empty())
    }

    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            reference_image_url: self.reference_image_url.clone(),
            product_image_url: self.product_image_url.clone(),
            brand_logo_url: self.logo_url().map(str::to_string),
            brand_name: self.brand_name.clone(),
            campaign_goal: self.campaign_goal,
        }
    }
}

/// What the preview panel shows. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Result(CreativeResult),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn creative(&self) -> Option<&CreativeResult> {
        match self {
            ViewState::Result(creative) => Some(creative),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub form: CampaignForm,
    pub view: ViewState,
}
