//! View rendering for the plant page.
//!
//! Three shapes, chosen by `CatalogState::render_state`:
//! - error: only the error page, nothing else is reachable;
//! - empty: search and creation form stay, the list is replaced by a notice;
//! - listing: search, creation form and the plant cards.

use yew::html::Scope;
use yew::prelude::*;

use common::catalog::{messages, RenderState};
use common::model::draft::PlantDraft;
use common::model::plant::{Plant, PlantId};

use crate::components::plants::error_page::ErrorPage;
use crate::components::plants::list::PlantList;
use crate::components::plants::new_plant_form::NewPlantForm;
use crate::components::plants::search::Search;

use super::dialogs::price::price_dialog;
use super::messages::Msg;
use super::state::PlantPage;

pub fn view(page: &PlantPage, ctx: &Context<PlantPage>) -> Html {
    let link = ctx.link();

    let body = match page.catalog.render_state() {
        RenderState::Error(message) => {
            return html! { <ErrorPage message={Some(AttrValue::from(message))} /> };
        }
        RenderState::Empty => html! {
            <div class="no-plants">
                <h2>{ messages::NO_RESULTS }</h2>
            </div>
        },
        RenderState::Listing => build_list(page.catalog.filtered_items(), link),
    };

    html! {
        <main>
            <Search
                query={AttrValue::from(page.catalog.query().to_string())}
                on_search_change={link.callback(Msg::SearchChanged)}
            />
            <NewPlantForm on_add={link.callback(|draft: PlantDraft| Msg::Add(draft))} />
            { body }
            { price_dialog(page, link) }
        </main>
    }
}

fn build_list(plants: Vec<&Plant>, link: &Scope<PlantPage>) -> Html {
    html! {
        <PlantList
            plants={plants.into_iter().cloned().collect::<Vec<Plant>>()}
            on_delete={link.callback(|id: PlantId| Msg::Delete(id))}
            on_toggle_stock={link.callback(|id: PlantId| Msg::ToggleStock(id))}
            on_update_price={link.callback(|id: PlantId| Msg::EditPrice(id))}
        />
    }
}
