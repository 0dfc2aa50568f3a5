//! Campaign form and ad preview.
//!
//! State only changes through [`FormReducer`]; [`FormController`] feeds it
//! intents and performs the single network call a valid submission needs.
//!
//! ```text
//! Edit / Submit ──→ FormReducer ──→ FormState ──→ PageRenderer
//!                        ↑                │
//!                        └── Completed ◄──┘ (CreativeApi)
//! ```

mod client;
mod controller;
mod intent;
pub mod preview;
mod reducer;
mod render;
mod state;

pub use client::{ClientError, HttpCreativeApi};
pub use controller::{CreativeApi, FormController};
pub use intent::FormIntent;
pub use reducer::{FormReducer, REQUIRED_FIELDS_MESSAGE};
pub use render::{static_asset, PageRenderer, RenderError};
pub use state::{CampaignForm, FormField, FormState, ViewState};
