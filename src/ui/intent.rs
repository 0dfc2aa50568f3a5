use crate::models::CreativeResult;
use crate::ui::state::FormField;

/// User actions and request outcomes the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    Edit { field: FormField, value: String },
    Submit,
    /// Outcome of the request started by the last accepted `Submit`.
    Completed(Result<CreativeResult, String>),
}
