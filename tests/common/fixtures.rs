use serde_json::{Value, json};

/// A quote with two line items, a discount, tax, terms and notes.
pub fn sample_quote() -> Value {
    json!({
        "id": "quote-001",
        "tenantId": "tenant-001",
        "quoteNumber": "Q-2026-042",
        "title": "Implementacion de CRM",
        "description": "Alcance completo de la implementacion, incluyendo migracion de datos.",
        "status": "sent",
        "customerName": "Grupo Andrade",
        "contactEmail": "compras@andrade.mx",
        "billingAddress": {
            "street": "Av. Insurgentes Sur 1234",
            "city": "Ciudad de Mexico",
            "state": "CDMX",
            "postalCode": "03100",
            "country": "MX"
        },
        "issueDate": "2026-02-10",
        "expiryDate": "2026-03-10",
        "currency": "MXN",
        "subtotal": 15000.0,
        "discountAmount": 500.0,
        "taxRate": 16.0,
        "taxAmount": 2320.0,
        "total": 16820.0,
        "items": [
            {
                "id": "li-1",
                "name": "Licencias anuales",
                "description": "Incluye soporte estandar y actualizaciones durante el periodo.",
                "quantity": 10.0,
                "unitPrice": 1000.0,
                "subtotal": 10000.0,
                "total": 10000.0
            },
            {
                "id": "li-2",
                "name": "Servicios de implementacion",
                "quantity": 1.0,
                "unitPrice": 5000.0,
                "subtotal": 5000.0,
                "total": 5000.0
            }
        ],
        "terms": "Precios validos por 30 dias. Pago a 15 dias de la fecha de factura.",
        "notes": "Incluye dos sesiones de capacitacion remota.",
        "createdBy": "user-7",
        "createdByName": "Laura Mendez",
        "version": 2,
        "createdAt": "2026-02-10T09:00:00Z",
        "updatedAt": "2026-02-11T12:00:00Z"
    })
}

pub fn sample_tenant() -> Value {
    json!({
        "id": "tenant-001",
        "name": "Ventazo Consulting",
        "address": "Paseo de la Reforma 250, CDMX",
        "phone": "+52 55 5555 0100",
        "email": "hola@ventazo.mx",
        "website": "ventazo.mx"
    })
}

/// A full request using the default section list.
pub fn full_request() -> Value {
    json!({
        "quote": sample_quote(),
        "tenant": sample_tenant()
    })
}

/// A quote stripped down to the required fields.
pub fn minimal_quote() -> Value {
    json!({
        "id": "quote-min",
        "tenantId": "tenant-001",
        "quoteNumber": "Q-MIN-1",
        "title": "Propuesta",
        "issueDate": "2026-01-05",
        "subtotal": 100.0,
        "total": 100.0,
        "createdBy": "user-1",
        "createdAt": "2026-01-05T00:00:00Z",
        "updatedAt": "2026-01-05T00:00:00Z"
    })
}
