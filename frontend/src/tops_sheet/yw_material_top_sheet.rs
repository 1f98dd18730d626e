use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// CSS class that slides the sheet into view.
const SHOW_CLASS: &str = "show";

/// Sheet that slides down from the top of the page. Visibility is driven by
/// the `show` class, toggled through `open_top_sheet` / `close_top_sheet`.
pub struct YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

/// Slides the sheet in after a short delay, so the transition runs once the
/// content has been rendered. Dropping or cancelling the returned handle
/// before it fires leaves the sheet closed.
#[must_use]
pub fn open_top_sheet(top_sheet_ref: NodeRef) -> Timeout {
    Timeout::new(50, move || set_shown(&top_sheet_ref, true))
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(&top_sheet_ref, false);
}

fn set_shown(top_sheet_ref: &NodeRef, shown: bool) {
    if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
        let classes = top_sheet.class_list();
        let _ = if shown {
            classes.add_1(SHOW_CLASS)
        } else {
            classes.remove_1(SHOW_CLASS)
        };
    }
}
