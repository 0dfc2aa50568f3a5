use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::{CreativeResult, GenerationRequest};
use crate::ui::intent::FormIntent;
use crate::ui::reducer::FormReducer;
use crate::ui::state::{FormField, FormState};

/// Endpoint the form submits to. Errors are the message shown in the banner.
#[async_trait]
pub trait CreativeApi: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<CreativeResult, String>;
}

pub struct FormController {
    api: Arc<dyn CreativeApi>,
    state: FormState,
}

impl FormController {
    pub fn new(api: Arc<dyn CreativeApi>) -> Self {
        Self { api, state: FormState::default() }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = FormReducer::reduce(state, intent);
    }

    /// Edits a field by its HTML name; unknown names are ignored.
    pub fn edit(&mut self, name: &str, value: impl Into<String>) {
        match FormField::from_name(name) {
            Some(field) => self.dispatch(FormIntent::Edit { field, value: value.into() }),
            None => debug!("Ignoring unknown form field '{}'", name),
        }
    }

    /// Validates and, when the form is complete, performs exactly one API call.
    pub async fn submit(&mut self) {
        self.dispatch(FormIntent::Submit);
        if !self.state.view.is_loading() {
            return;
        }

        let request = self.state.form.to_request();
        info!("🎯 Submitting campaign for brand '{}' ({})", request.brand_name, request.campaign_goal);
        let outcome = self.api.generate(&request).await;
        self.dispatch(FormIntent::Completed(outcome));
    }
}
