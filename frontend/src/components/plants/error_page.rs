use yew::prelude::*;

use common::catalog::messages::{DEFAULT_ERROR, ERROR_HEADING};

#[derive(Properties, PartialEq)]
pub struct ErrorPageProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Terminal error surface. Replaces the whole page once a remote call fails.
pub struct ErrorPage;

impl Component for ErrorPage {
    type Message = ();
    type Properties = ErrorPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ErrorPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let message = ctx
            .props()
            .message
            .clone()
            .unwrap_or(AttrValue::Static(DEFAULT_ERROR));

        html! {
            <div class="error-page">
                <h2>{ ERROR_HEADING }</h2>
                <p>{ message.to_string() }</p>
            </div>
        }
    }
}
