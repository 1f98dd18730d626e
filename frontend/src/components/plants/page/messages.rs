use common::catalog::CatalogEvent;
use common::model::draft::PlantDraft;
use common::model::plant::PlantId;

pub enum Msg {
    SearchChanged(String),
    Add(PlantDraft),
    Delete(PlantId),
    ToggleStock(PlantId),
    EditPrice(PlantId),
    PriceInput(String),
    SubmitPrice,
    CancelPrice,
    /// A remote call finished; fold its answer into the catalog.
    Reconcile(CatalogEvent),
}
