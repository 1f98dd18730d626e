use yew::prelude::*;

use common::model::plant::{Plant, PlantId};

use super::card::PlantCard;

#[derive(Properties, PartialEq)]
pub struct PlantListProps {
    /// Already filtered by the page, in list order.
    pub plants: Vec<Plant>,
    pub on_delete: Callback<PlantId>,
    pub on_toggle_stock: Callback<PlantId>,
    pub on_update_price: Callback<PlantId>,
}

pub struct PlantList;

impl Component for PlantList {
    type Message = ();
    type Properties = PlantListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlantList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <ul class="cards">
                { for props.plants.iter().map(|plant| html! {
                    <PlantCard
                        key={plant.id.to_string()}
                        plant={plant.clone()}
                        on_delete={props.on_delete.clone()}
                        on_toggle_stock={props.on_toggle_stock.clone()}
                        on_update_price={props.on_update_price.clone()}
                    />
                }) }
            </ul>
        }
    }
}
