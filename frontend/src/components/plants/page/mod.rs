//! Plant page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Own the catalog state (plants, search query, error) for the whole page.
//! - Delegate messages to `update::update` and rendering to `view::view`.
//! - On first render, fetch the plant collection once.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use helpers::format_price;
pub use messages::Msg;
pub use props::PlantPageProps;
pub use state::PlantPage;

impl Component for PlantPage {
    type Message = Msg;
    type Properties = PlantPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        PlantPage::new(&ctx.props().api_base_url)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::load(self, ctx);
        }
    }
}
