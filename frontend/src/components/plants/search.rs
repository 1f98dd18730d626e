use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    pub query: AttrValue,
    pub on_search_change: Callback<String>,
}

/// Text box that reports every edit of the name filter upward.
pub struct Search;

impl Component for Search {
    type Message = ();
    type Properties = SearchProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Search
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_search_change = props.on_search_change.clone();

        html! {
            <div class="searchbar">
                <label for="search">{ "Search Plants:" }</label>
                <input
                    type="text"
                    id="search"
                    placeholder="Search by plant name"
                    value={props.query.clone()}
                    oninput={Callback::from(move |e: InputEvent| {
                        on_search_change.emit(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>
        }
    }
}
