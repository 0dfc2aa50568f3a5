use handlebars::Handlebars;
use include_dir::{include_dir, Dir};
use serde::Serialize;
use thiserror::Error;

use crate::models::CampaignGoal;
use crate::ui::preview::{brand_initials, hostname_label};
use crate::ui::state::{CampaignForm, FormState, ViewState};

static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

const TEMPLATES: [(&str, &str); 5] = [
    ("page", "templates/page.hbs"),
    ("form", "templates/form.hbs"),
    ("loading", "templates/loading.hbs"),
    ("idle", "templates/idle.hbs"),
    ("result", "templates/result.hbs"),
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("embedded asset '{0}' is missing or not UTF-8")]
    MissingAsset(&'static str),
    #[error("invalid template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
    #[error("rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Looks up a file under `assets/static/`, returning its content type and bytes.
pub fn static_asset(path: &str) -> Option<(&'static str, &'static [u8])> {
    let file = ASSETS.get_file(format!("static/{}", path.trim_start_matches('/')))?;
    let content_type = match file.path().extension().and_then(|ext| ext.to_str()) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };
    Some((content_type, file.contents()))
}

#[derive(Serialize)]
struct GoalOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct CreativeView<'a> {
    headline: &'a str,
    primary_text: &'a str,
    cta: &'a str,
    generated_image_url: &'a str,
    hostname: String,
    brand_name: &'a str,
    logo_url: Option<&'a str>,
    initials: String,
}

#[derive(Serialize)]
struct PageContext<'a> {
    form: &'a CampaignFormView<'a>,
    goals: Vec<GoalOption>,
    view: &'static str,
    loading: bool,
    error: Option<&'a str>,
    creative: Option<CreativeView<'a>>,
}

#[derive(Serialize)]
struct CampaignFormView<'a> {
    reference_image_url: &'a str,
    product_image_url: &'a str,
    brand_logo_url: &'a str,
    brand_name: &'a str,
}

impl<'a> From<&'a CampaignForm> for CampaignFormView<'a> {
    fn from(form: &'a CampaignForm) -> Self {
        Self {
            reference_image_url: &form.reference_image_url,
            product_image_url: &form.product_image_url,
            brand_logo_url: &form.brand_logo_url,
            brand_name: &form.brand_name,
        }
    }
}

fn view_kind(view: &ViewState) -> &'static str {
    match view {
        ViewState::Idle => "idle",
        ViewState::Loading => "loading",
        ViewState::Error(_) => "error",
        ViewState::Result(_) => "result",
    }
}

/// Renders the two-panel studio page from a [`FormState`].
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        for (name, path) in TEMPLATES {
            let source = ASSETS
                .get_file(path)
                .and_then(|file| file.contents_utf8())
                .ok_or(RenderError::MissingAsset(path))?;
            registry.register_template_string(name, source).map_err(Box::new)?;
        }
        Ok(Self { registry })
    }

    pub fn render(&self, state: &FormState) -> Result<String, RenderError> {
        let form = CampaignFormView::from(&state.form);
        let creative = state.view.creative().map(|creative| CreativeView {
            headline: &creative.headline,
            primary_text: &creative.primary_text,
            cta: &creative.cta,
            generated_image_url: &creative.generated_image_url,
            hostname: hostname_label(&state.form.product_image_url),
            brand_name: &state.form.brand_name,
            logo_url: state.form.logo_url(),
            initials: brand_initials(&state.form.brand_name),
        });
        let goals = CampaignGoal::ALL
            .into_iter()
            .map(|goal| GoalOption {
                value: goal.as_str(),
                label: goal.label(),
                selected: goal == state.form.campaign_goal,
            })
            .collect();

        let context = PageContext {
            form: &form,
            goals,
            view: view_kind(&state.view),
            loading: state.view.is_loading(),
            error: state.view.error(),
            creative,
        };
        Ok(self.registry.render("page", &context)?)
    }
}
