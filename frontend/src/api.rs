//! HTTP client for the remote plant collection.
//!
//! One async method per remote call. Every failure (transport error, non-2xx
//! status, or a body that is not the expected JSON) comes back as a
//! `CatalogError`; the caller decides what the user sees. Requests and causes
//! of failure are logged to the browser console.

use gloo_console::{error, log};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use common::error::CatalogError;
use common::model::plant::{Plant, PlantId};
use common::requests::{Endpoints, NewPlant, PlantPatch};

#[derive(Clone, Debug, PartialEq)]
pub struct PlantApi {
    endpoints: Endpoints,
}

impl PlantApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base_url),
        }
    }

    /// `GET /plants`
    pub async fn list(&self) -> Result<Vec<Plant>, CatalogError> {
        let url = self.endpoints.collection();
        log!("GET", &url);
        let response = Request::get(&url).send().await.map_err(transport)?;
        read_json(response).await
    }

    /// `POST /plants`
    pub async fn create(&self, plant: &NewPlant) -> Result<Plant, CatalogError> {
        let url = self.endpoints.collection();
        log!("POST", &url);
        let response = Request::post(&url)
            .json(plant)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    /// `DELETE /plants/{id}`; the body is ignored.
    pub async fn delete(&self, id: &PlantId) -> Result<(), CatalogError> {
        let url = self.endpoints.item(id);
        log!("DELETE", &url);
        let response = Request::delete(&url).send().await.map_err(transport)?;
        check_status(&response)
    }

    /// `PATCH /plants/{id}` with a partial record; returns the merged record.
    pub async fn patch(&self, id: &PlantId, patch: &PlantPatch) -> Result<Plant, CatalogError> {
        let url = self.endpoints.item(id);
        log!("PATCH", &url);
        let response = Request::patch(&url)
            .json(patch)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}

fn transport(err: gloo_net::Error) -> CatalogError {
    error!(format!("plant api request failed: {}", err));
    CatalogError::Network(err.to_string())
}

fn check_status(response: &Response) -> Result<(), CatalogError> {
    if response.ok() {
        Ok(())
    } else {
        error!(format!(
            "plant api answered {} for {}",
            response.status(),
            response.url()
        ));
        Err(CatalogError::Status(response.status()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    check_status(&response)?;
    let body = response.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|err| {
        error!(format!("plant api returned an unexpected body: {}", err));
        CatalogError::Decode(err.to_string())
    })
}
