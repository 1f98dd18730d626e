//! Creation form for a new plant.
//!
//! Holds the in-progress draft as raw text, hands it to the parent on submit
//! and clears itself right after. It never talks to the network and does not
//! validate; the page decides whether the draft can be sent.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::draft::PlantDraft;

pub enum Msg {
    SetName(String),
    SetImage(String),
    SetPrice(String),
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct NewPlantFormProps {
    pub on_add: Callback<PlantDraft>,
}

pub struct NewPlantForm {
    draft: PlantDraft,
}

impl Component for NewPlantForm {
    type Message = Msg;
    type Properties = NewPlantFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: PlantDraft::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => self.draft.name = name,
            Msg::SetImage(image) => self.draft.image = image,
            Msg::SetPrice(price) => self.draft.price = price,
            Msg::Submit => {
                ctx.props().on_add.emit(std::mem::take(&mut self.draft));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="new-plant-form">
                <h2>{ "New Plant" }</h2>
                <form onsubmit={on_submit}>
                    <input
                        type="text"
                        name="name"
                        placeholder="Plant name"
                        value={self.draft.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                    />
                    <input
                        type="text"
                        name="image"
                        placeholder="Image URL"
                        value={self.draft.image.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetImage(input_value(&e)))}
                    />
                    <input
                        type="number"
                        name="price"
                        step="0.01"
                        placeholder="Price"
                        value={self.draft.price.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetPrice(input_value(&e)))}
                    />
                    <button type="submit">{ "Add Plant" }</button>
                </form>
            </div>
        }
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}
