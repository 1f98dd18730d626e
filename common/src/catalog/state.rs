//! The page-level catalog state and its reconciliation rules.
//!
//! `CatalogState` is the single owner of the cached plant list, the search
//! query and the error message. Remote calls happen elsewhere; their outcome
//! comes back as a `CatalogEvent` and `apply` folds it into the state. The
//! list is never touched before the server has confirmed a change.
//!
//! Once any remote call fails the state is `Error` for good: further events
//! are ignored and `accepts_actions` turns false so no new calls are issued.

use crate::error::{CatalogError, PriceEditError};
use crate::model::draft::parse_price;
use crate::model::plant::{Plant, PlantId};
use crate::requests::PlantPatch;

use super::messages;

/// Completion of one remote call, carrying what the server answered.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    Loaded(Result<Vec<Plant>, CatalogError>),
    Added(Result<Plant, CatalogError>),
    Deleted(PlantId, Result<(), CatalogError>),
    StockToggled(PlantId, Result<Plant, CatalogError>),
    PriceUpdated(PlantId, Result<Plant, CatalogError>),
}

/// What the page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    /// Terminal. Only the error surface is rendered.
    Error(String),
    /// No plant matches the query. Search stays usable.
    Empty,
    Listing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    items: Vec<Plant>,
    query: String,
    error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Plant] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// False once the catalog has failed; callers must not start new remote calls.
    pub fn accepts_actions(&self) -> bool {
        self.error.is_none()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Plants whose name contains the query, ignoring case, in list order.
    pub fn filtered_items(&self) -> Vec<&Plant> {
        self.items
            .iter()
            .filter(|plant| plant.matches(&self.query))
            .collect()
    }

    pub fn render_state(&self) -> RenderState {
        if let Some(message) = &self.error {
            RenderState::Error(message.clone())
        } else if self.filtered_items().is_empty() {
            RenderState::Empty
        } else {
            RenderState::Listing
        }
    }

    pub fn find(&self, id: &PlantId) -> Option<&Plant> {
        self.items.iter().find(|plant| &plant.id == id)
    }

    /// Builds the PATCH body that flips the stock flag of `id`.
    ///
    /// Fails with `NotFound` when the plant is not in the local list and with
    /// `Unavailable` once the catalog has failed; no request must be sent then.
    pub fn stock_toggle_patch(&self, id: &PlantId) -> Result<PlantPatch, CatalogError> {
        let plant = self.editable(id)?;
        Ok(PlantPatch::stock(!plant.in_stock))
    }

    /// Builds the PATCH body that sets the price of `id` from user text.
    ///
    /// Same lookup rules as `stock_toggle_patch`; the text must also pass the
    /// numeric check.
    pub fn price_patch(&self, id: &PlantId, input: &str) -> Result<PlantPatch, PriceEditError> {
        self.editable(id)?;
        Ok(PlantPatch::price(parse_price(input)?))
    }

    fn editable(&self, id: &PlantId) -> Result<&Plant, CatalogError> {
        if !self.accepts_actions() {
            return Err(CatalogError::Unavailable);
        }
        self.find(id).ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// Enters the terminal error state. The first message wins.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(message.into());
        }
    }

    /// Folds a confirmed server answer into the list.
    ///
    /// Returns `true` when the visible state changed.
    pub fn apply(&mut self, event: CatalogEvent) -> bool {
        if self.error.is_some() {
            return false;
        }

        match event {
            CatalogEvent::Loaded(Ok(plants)) => {
                self.items = plants;
                true
            }
            CatalogEvent::Added(Ok(plant)) => {
                self.items.push(plant);
                true
            }
            CatalogEvent::Deleted(id, Ok(())) => {
                let before = self.items.len();
                self.items.retain(|plant| plant.id != id);
                self.items.len() != before
            }
            CatalogEvent::StockToggled(id, Ok(updated)) => {
                // Whole record is taken from the server.
                match self.items.iter_mut().find(|plant| plant.id == id) {
                    Some(plant) => {
                        *plant = updated;
                        true
                    }
                    None => false,
                }
            }
            CatalogEvent::PriceUpdated(id, Ok(updated)) => {
                // Only the price is taken from the server.
                match self.items.iter_mut().find(|plant| plant.id == id) {
                    Some(plant) => {
                        plant.price = updated.price;
                        true
                    }
                    None => false,
                }
            }
            CatalogEvent::Loaded(Err(_)) => self.failed(messages::LOAD_FAILED),
            CatalogEvent::Added(Err(_)) => self.failed(messages::ADD_FAILED),
            CatalogEvent::Deleted(_, Err(_)) => self.failed(messages::DELETE_FAILED),
            CatalogEvent::StockToggled(_, Err(_)) => self.failed(messages::STOCK_FAILED),
            CatalogEvent::PriceUpdated(_, Err(_)) => self.failed(messages::PRICE_FAILED),
        }
    }

    fn failed(&mut self, message: &str) -> bool {
        self.fail(message);
        true
    }
}
