use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::plants::page::{Msg, PlantPage};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// Price editor shown in a top sheet. Replaces a blocking prompt: the page
/// keeps running while it is open, and Save goes through the same numeric
/// check as the creation form.
pub fn price_dialog(page: &PlantPage, link: &Scope<PlantPage>) -> Html {
    let title = page
        .price_target
        .as_ref()
        .and_then(|id| page.catalog.find(id))
        .map(|plant| format!("New price for {}", plant.name))
        .unwrap_or_else(|| "New price".to_string());

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitPrice
    });

    html! {
        <YwMaterialTopSheet node_ref={page.price_dialog_ref.clone()}>
            <form class="price-dialog" onsubmit={on_submit}>
                <h3>{ title }</h3>
                <input
                    type="number"
                    name="price"
                    step="0.01"
                    placeholder="Price"
                    value={page.price_input.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::PriceInput(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button type="submit">{ "Save" }</button>
                <button type="button" onclick={link.callback(|_| Msg::CancelPrice)}>
                    { "Cancel" }
                </button>
            </form>
        </YwMaterialTopSheet>
    }
}
