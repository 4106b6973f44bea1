use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::client_dto::ClientResponse;
use crate::models::delivery_note::{DeliveryLocation, DeliveryNote, Product};

// Request para crear una nota de entrega; PUT usa el mismo shape
#[derive(Debug, Deserialize)]
pub struct CreateDeliveryNoteRequest {
    pub client_id: Uuid,
    pub delivery_location: DeliveryLocation,
    pub products: Vec<Product>,
    #[serde(default)]
    pub transport: String,
}

// Response de nota de entrega
#[derive(Debug, Serialize)]
pub struct DeliveryNoteResponse {
    pub id: Uuid,
    pub note_number: String,
    pub issue_date: DateTime<Utc>,
    pub client_id: Uuid,
    pub client_info: ClientResponse,
    pub delivery_location: DeliveryLocation,
    pub products: Vec<Product>,
    pub transport: String,
    pub received_by_name: String,
    pub received_by_cedula: String,
    pub received_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<DeliveryNote> for DeliveryNoteResponse {
    fn from(note: DeliveryNote) -> Self {
        Self {
            id: note.id,
            note_number: note.note_number,
            issue_date: note.issue_date,
            client_id: note.client_id,
            client_info: note.client_info.0.into(),
            delivery_location: note.delivery_location.0,
            products: note.products.0,
            transport: note.transport,
            received_by_name: note.received_by_name,
            received_by_cedula: note.received_by_cedula,
            received_date: note.received_date,
            created_at: note.created_at,
        }
    }
}

// Response de confirmación de borrado
#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_defaults_to_empty_string() {
        let body = json!({
            "client_id": "550e8400-e29b-41d4-a716-446655440000",
            "delivery_location": {
                "address": "Zona Industrial II",
                "contact_person": "María Pérez",
                "phone": "0251-5551234"
            },
            "products": []
        });

        let request: CreateDeliveryNoteRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.transport, "");
    }

    #[test]
    fn test_products_preserve_caller_order() {
        let body = json!({
            "client_id": "550e8400-e29b-41d4-a716-446655440000",
            "delivery_location": {
                "address": "Galpón 4",
                "contact_person": "José Rodríguez",
                "phone": "0414-5559876"
            },
            "products": [
                {"description": "Soda cáustica", "package_unit": "Tambor", "package_quantity": 2, "sale_unit": "Kg", "sale_quantity": 500},
                {"description": "Ácido cítrico", "package_unit": "Saco", "package_quantity": 10, "sale_unit": "Kg", "sale_quantity": 250}
            ],
            "transport": "Transporte propio"
        });

        let request: CreateDeliveryNoteRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.products.len(), 2);
        assert_eq!(request.products[0].description, "Soda cáustica");
        assert_eq!(request.products[1].description, "Ácido cítrico");
    }
}
