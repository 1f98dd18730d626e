use crate::components::plants::page::PlantPage;
use crate::config::DEFAULT_API_BASE_URL;
use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or(AttrValue::Static(DEFAULT_API_BASE_URL))]
    pub api_base_url: AttrValue,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            api_base_url: AttrValue::Static(DEFAULT_API_BASE_URL),
        }
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                <header>
                    <h1>
                        { "Plantsy" }
                        <span class="logo" role="img">{ "🌱" }</span>
                    </h1>
                </header>
                <PlantPage api_base_url={ctx.props().api_base_url.clone()} />
            </div>
        }
    }
}
