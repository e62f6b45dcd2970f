//! Protected `/patient` routes. All calls carry the bearer token and a 401
//! ends the session.

use crate::error::ClientError;
use crate::models::{
    Appointment, AppointmentRequest, PatientProfile, PatientProfileUpdate, PrescriptionRecord,
    Review, ReviewRequest,
};
use crate::transport::{ApiClient, HttpBackend, Method, RequestOptions};

impl<B: HttpBackend> ApiClient<B> {
    pub async fn profile(&self) -> Result<PatientProfile, ClientError> {
        self.fetch("/patient/profile", RequestOptions::get()).await
    }

    /// Save the editable profile fields. Blank optional fields are sent as `null`.
    pub async fn update_profile(
        &self,
        update: PatientProfileUpdate,
    ) -> Result<PatientProfile, ClientError> {
        let options = RequestOptions::method(Method::Put).with_json(&update.normalized())?;
        self.fetch("/patient/profile", options).await
    }

    /// Book `slot`, passed through exactly as the doctor listing returned it.
    pub async fn book_appointment(
        &self,
        doctor_id: &str,
        slot: &str,
    ) -> Result<Appointment, ClientError> {
        let request = AppointmentRequest {
            doctor_id: doctor_id.to_string(),
            slot: slot.to_string(),
        };
        let options = RequestOptions::method(Method::Post).with_json(&request)?;
        let appointment: Appointment = self.fetch("/patient/book-appointment", options).await?;
        tracing::info!("Booked appointment {} with doctor {}", appointment.id, doctor_id);
        Ok(appointment)
    }

    pub async fn my_appointments(&self) -> Result<Vec<Appointment>, ClientError> {
        Ok(self
            .call_as("/patient/my-appointments", RequestOptions::get())
            .await?
            .unwrap_or_default())
    }

    pub async fn cancel_appointment(&self, id: &str) -> Result<Option<Appointment>, ClientError> {
        let endpoint = format!("/patient/appointments/{}/cancel", urlencoding::encode(id));
        let cancelled = self
            .call_as(&endpoint, RequestOptions::method(Method::Put))
            .await?;
        tracing::info!("Cancelled appointment {}", id);
        Ok(cancelled)
    }

    pub async fn my_records(&self) -> Result<Vec<PrescriptionRecord>, ClientError> {
        Ok(self
            .call_as("/patient/my-records", RequestOptions::get())
            .await?
            .unwrap_or_default())
    }

    pub async fn submit_review(&self, review: &ReviewRequest) -> Result<Option<Review>, ClientError> {
        let options = RequestOptions::method(Method::Post).with_json(review)?;
        self.call_as("/patient/reviews", options).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};
    use store::MemoryStore;

    use crate::auth::token::unsigned_token;
    use crate::auth::{SessionStore, SESSION_TOKEN_KEY};
    use crate::models::AppointmentStatus;
    use crate::transport::mock::MockBackend;
    use crate::transport::{ApiClient, Method};
    use crate::{ClientError, PatientProfileUpdate, ReviewRequest};

    fn client(backend: MockBackend) -> ApiClient<MockBackend> {
        let slot = MemoryStore::with_value(
            SESSION_TOKEN_KEY,
            &unsigned_token(json!({ "sub": "alice@example.com", "full_name": "Alice" })),
        );
        let session = SessionStore::new(Arc::new(slot));
        session.initialize();
        ApiClient::with_backend("http://api.test", session, backend)
    }

    fn sent_json(api: &ApiClient<MockBackend>) -> Value {
        let sent = api.backend().last_request().unwrap();
        serde_json::from_str(sent.body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_profile_fetch() {
        let body = r#"{"id":"p1","full_name":"Alice Smith","email":"alice@example.com","phone_number":null,"date_of_birth":"1990-04-01","sex":"Female"}"#;
        let api = client(MockBackend::new().respond(200, body));

        let profile = api.profile().await.unwrap();
        assert_eq!(profile.full_name, "Alice Smith");
        assert_eq!(profile.date_of_birth.as_deref(), Some("1990-04-01"));
        assert!(profile.phone_number.is_none());
    }

    #[tokio::test]
    async fn test_update_profile_sends_nulls_for_blanks() {
        let body = r#"{"id":"p1","full_name":"Alice Smith"}"#;
        let api = client(MockBackend::new().respond(200, body));

        let update = PatientProfileUpdate {
            full_name: " Alice Smith ".to_string(),
            phone_number: Some(String::new()),
            date_of_birth: Some("1990-04-01".to_string()),
            sex: Some("Female".to_string()),
        };
        api.update_profile(update).await.unwrap();

        let sent = api.backend().last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/patient/profile");
        assert_eq!(
            sent_json(&api),
            json!({
                "full_name": "Alice Smith",
                "phone_number": null,
                "date_of_birth": "1990-04-01",
                "sex": "Female"
            })
        );
    }

    #[tokio::test]
    async fn test_book_appointment_passes_slot_through() {
        let body = r#"{"id":"a1","doctor_id":"d1","slot":"2030-01-02T10:00:00","status":"scheduled"}"#;
        let api = client(MockBackend::new().respond(200, body));

        let appointment = api
            .book_appointment("d1", "2030-01-02T10:00:00")
            .await
            .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(
            sent_json(&api),
            json!({ "doctor_id": "d1", "slot": "2030-01-02T10:00:00" })
        );
        assert_eq!(
            api.backend().last_request().unwrap().url,
            "http://api.test/patient/book-appointment"
        );
    }

    #[tokio::test]
    async fn test_book_appointment_failure_message() {
        let api = client(
            MockBackend::new().respond(500, r#"{"detail":"Could not book appointment."}"#),
        );
        let err = api.book_appointment("d1", "slot").await.unwrap_err();
        assert_eq!(err.to_string(), "Could not book appointment.");
    }

    #[tokio::test]
    async fn test_my_appointments_list() {
        let body = r#"[
            {"id":"a1","doctor_id":"d1","slot":"2030-01-02T10:00:00","status":"scheduled","doctor_name":"Dr. Rao"},
            {"id":"a2","doctor_id":"d2","slot":"2020-01-02T10:00:00","status":"completed"}
        ]"#;
        let api = client(MockBackend::new().respond(200, body));

        let appointments = api.my_appointments().await.unwrap();
        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].doctor_name.as_deref(), Some("Dr. Rao"));
        assert!(appointments[1].can_review());
    }

    #[tokio::test]
    async fn test_cancel_appointment_path() {
        let api = client(MockBackend::new().respond(204, ""));
        let result = api.cancel_appointment("a1").await.unwrap();
        assert!(result.is_none());

        let sent = api.backend().last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/patient/appointments/a1/cancel");
    }

    #[tokio::test]
    async fn test_cancel_expired_session() {
        let api = client(MockBackend::new().respond(401, ""));
        let err = api.cancel_appointment("a1").await.unwrap_err();
        assert_eq!(err, ClientError::SessionExpired);
        assert!(!api.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_my_records_null_lists() {
        let body = r#"[{"id":"r1","appointment_id":"a2","created_at":"2024-03-01T09:00:00","diagnosis":"Flu","medicines":null,"tests":["CBC"]}]"#;
        let api = client(MockBackend::new().respond(200, body));

        let records = api.my_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].medicines.is_empty());
        assert_eq!(records[0].tests, vec!["CBC".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_review_body() {
        let body = r#"{"id":"rv1","rating":4,"comment":"Kind"}"#;
        let api = client(MockBackend::new().respond(201, body));

        let review = ReviewRequest::new("d2", "a2", 4, "Kind").unwrap();
        let saved = api.submit_review(&review).await.unwrap().unwrap();
        assert_eq!(saved.rating, 4);
        assert_eq!(
            sent_json(&api),
            json!({ "doctor_id": "d2", "appointment_id": "a2", "rating": 4, "comment": "Kind" })
        );
    }
}
