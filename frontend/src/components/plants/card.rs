use yew::prelude::*;

use common::model::plant::{Plant, PlantId};

use crate::components::plants::page::format_price;

#[derive(Properties, PartialEq)]
pub struct PlantCardProps {
    pub plant: Plant,
    pub on_delete: Callback<PlantId>,
    pub on_toggle_stock: Callback<PlantId>,
    pub on_update_price: Callback<PlantId>,
}

/// One plant: picture, name, price and its three actions.
pub struct PlantCard;

impl Component for PlantCard {
    type Message = ();
    type Properties = PlantCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlantCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let plant = &props.plant;

        let emit_with_id = |callback: &Callback<PlantId>| {
            let callback = callback.clone();
            let id = plant.id.clone();
            Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
        };

        let (stock_class, stock_label) = if plant.in_stock {
            ("primary", "In Stock")
        } else {
            ("", "Out of Stock")
        };

        html! {
            <li class="card" data-testid="plant-item">
                <img src={plant.image.clone()} alt={plant.name.clone()} />
                <h4>{ plant.name.clone() }</h4>
                <p>{ format!("Price: {}", format_price(plant.price)) }</p>
                <button class={stock_class} onclick={emit_with_id(&props.on_toggle_stock)}>
                    { stock_label }
                </button>
                <button onclick={emit_with_id(&props.on_update_price)}>{ "Edit Price" }</button>
                <button class="delete" onclick={emit_with_id(&props.on_delete)}>{ "Delete" }</button>
            </li>
        }
    }
}
