//! Properties of the `PlantPage` component.

use yew::prelude::*;

use crate::config::DEFAULT_API_BASE_URL;

/// Configuration handed down from `App`.
#[derive(Properties, PartialEq, Clone)]
pub struct PlantPageProps {
    /// Base URL of the plant API, without the `/plants` suffix.
    ///
    /// Read once when the page is created; changing it later has no effect.
    #[prop_or(AttrValue::Static(DEFAULT_API_BASE_URL))]
    pub api_base_url: AttrValue,
}
