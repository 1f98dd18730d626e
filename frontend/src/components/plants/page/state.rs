//! Runtime state of the plant page.
//!
//! The catalog itself (plants, query, error) lives in `CatalogState`; this
//! struct adds what only the browser side needs: the API client, the price
//! dialog's input buffer, target and pending open animation.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use common::catalog::CatalogState;
use common::model::plant::PlantId;

use crate::api::PlantApi;

/// Fields are `pub` because `update` and `view` read and write them directly.
pub struct PlantPage {
    /// Single owner of the cached plant list.
    pub catalog: CatalogState,

    pub api: PlantApi,

    /// Plant whose price is being edited in the dialog, if any.
    pub price_target: Option<PlantId>,

    /// Raw text of the price dialog's input.
    pub price_input: String,

    /// Reference to the price dialog's top-sheet container.
    pub price_dialog_ref: NodeRef,

    /// Delayed slide-in of the price dialog; cancelled if the dialog closes first.
    pub price_sheet_opening: Option<Timeout>,
}

impl PlantPage {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            catalog: CatalogState::new(),
            api: PlantApi::new(api_base_url),
            price_target: None,
            price_input: String::new(),
            price_dialog_ref: NodeRef::default(),
            price_sheet_opening: None,
        }
    }
}
