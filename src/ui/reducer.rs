use crate::ui::intent::FormIntent;
use crate::ui::state::{FormState, ViewState};

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill in all required fields (Reference Image, Product Image, Brand Name).";

pub struct FormReducer;

impl FormReducer {
    /// Pure state transition: (State, Intent) -> State.
    pub fn reduce(state: FormState, intent: FormIntent) -> FormState {
        match intent {
            FormIntent::Edit { field, value } => {
                let mut form = state.form;
                form.set(field, value);
                FormState { form, view: state.view }
            }
            // The submit control is disabled while a request is in flight
            FormIntent::Submit if state.view.is_loading() => state,
            FormIntent::Submit => {
                let view = if state.form.has_required_fields() {
                    ViewState::Loading
                } else {
                    ViewState::Error(REQUIRED_FIELDS_MESSAGE.to_string())
                };
                FormState { form: state.form, view }
            }
            FormIntent::Completed(outcome) => match state.view {
                ViewState::Loading => {
                    let view = match outcome {
                        Ok(creative) => ViewState::Result(creative),
                        Err(message) => ViewState::Error(message),
                    };
                    FormState { form: state.form, view }
                }
                // stale outcome
                _ => state,
            },
        }
    }
}
