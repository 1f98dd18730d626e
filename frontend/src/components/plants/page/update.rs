//! Update function for the plant page.
//!
//! Elm-style: each `Msg` mutates the page and returns whether to re-render.
//! User actions start at most one remote call in a `spawn_local` task; the
//! task ends by sending `Msg::Reconcile` with the server's answer, and only
//! then does the catalog change. Nothing new is dispatched once the catalog
//! is in its error state.

use std::future::Future;

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::catalog::{messages, CatalogEvent};
use common::error::PriceEditError;

use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{format_price, show_toast};
use super::messages::Msg;
use super::state::PlantPage;

pub fn update(page: &mut PlantPage, ctx: &Context<PlantPage>, msg: Msg) -> bool {
    match msg {
        Msg::SearchChanged(query) => {
            page.catalog.set_query(query);
            true
        }
        Msg::Reconcile(event) => page.catalog.apply(event),
        _ if !page.catalog.accepts_actions() => false,
        Msg::Add(draft) => {
            match draft.to_new_plant() {
                Ok(body) => {
                    let api = page.api.clone();
                    reconcile_when_done(ctx, async move {
                        CatalogEvent::Added(api.create(&body).await)
                    });
                }
                Err(err) => {
                    log!(format!("plant not submitted: {}", err));
                    show_toast(messages::INVALID_PRICE);
                }
            }
            false
        }
        Msg::Delete(id) => {
            let api = page.api.clone();
            reconcile_when_done(ctx, async move {
                let result = api.delete(&id).await;
                CatalogEvent::Deleted(id, result)
            });
            false
        }
        Msg::ToggleStock(id) => {
            match page.catalog.stock_toggle_patch(&id) {
                Ok(patch) => {
                    let api = page.api.clone();
                    reconcile_when_done(ctx, async move {
                        let result = api.patch(&id, &patch).await;
                        CatalogEvent::StockToggled(id, result)
                    });
                }
                Err(err) => {
                    error!(format!("stock toggle skipped: {}", err));
                    show_toast(messages::PLANT_NOT_FOUND);
                }
            }
            false
        }
        Msg::EditPrice(id) => {
            let Some(plant) = page.catalog.find(&id) else {
                error!(format!("price edit skipped: plant {} not found", id));
                show_toast(messages::PLANT_NOT_FOUND);
                return false;
            };
            page.price_input = format_price(plant.price);
            page.price_target = Some(id);
            page.price_sheet_opening = Some(open_top_sheet(page.price_dialog_ref.clone()));
            true
        }
        Msg::PriceInput(text) => {
            page.price_input = text;
            true
        }
        Msg::SubmitPrice => {
            let Some(id) = page.price_target.clone() else {
                return false;
            };
            match page.catalog.price_patch(&id, &page.price_input) {
                Ok(patch) => {
                    close_price_dialog(page);
                    let api = page.api.clone();
                    reconcile_when_done(ctx, async move {
                        let result = api.patch(&id, &patch).await;
                        CatalogEvent::PriceUpdated(id, result)
                    });
                    true
                }
                Err(PriceEditError::Invalid(err)) => {
                    log!(format!("price not submitted: {}", err));
                    show_toast(messages::INVALID_PRICE);
                    false
                }
                Err(PriceEditError::Catalog(err)) => {
                    error!(format!("price edit dropped: {}", err));
                    show_toast(messages::PLANT_NOT_FOUND);
                    close_price_dialog(page);
                    true
                }
            }
        }
        Msg::CancelPrice => {
            close_price_dialog(page);
            true
        }
    }
}

/// Starts the initial `GET /plants`.
pub fn load(page: &PlantPage, ctx: &Context<PlantPage>) {
    let api = page.api.clone();
    reconcile_when_done(ctx, async move { CatalogEvent::Loaded(api.list().await) });
}

fn reconcile_when_done(
    ctx: &Context<PlantPage>,
    call: impl Future<Output = CatalogEvent> + 'static,
) {
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::Reconcile(call.await));
    });
}

fn close_price_dialog(page: &mut PlantPage) {
    if let Some(opening) = page.price_sheet_opening.take() {
        opening.cancel();
    }
    page.price_target = None;
    page.price_input.clear();
    close_top_sheet(page.price_dialog_ref.clone());
}
