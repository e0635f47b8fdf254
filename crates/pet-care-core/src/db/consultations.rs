//! Consultation outbox operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::form::{SinkResult, SubmissionSink};
use crate::models::{ConsultPetType, ConsultationRequest, Urgency};

const SELECT_COLUMNS: &str = r#"
    SELECT request_id, owner_name, email, phone, pet_type, pet_age,
           symptoms, urgency, submitted_at
    FROM consultations
"#;

/// Row as stored; select labels are decoded after the query.
struct ConsultationRow {
    request_id: String,
    owner_name: String,
    email: String,
    phone: String,
    pet_type: String,
    pet_age: String,
    symptoms: String,
    urgency: String,
    submitted_at: String,
}

impl ConsultationRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            request_id: row.get(0)?,
            owner_name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            pet_type: row.get(4)?,
            pet_age: row.get(5)?,
            symptoms: row.get(6)?,
            urgency: row.get(7)?,
            submitted_at: row.get(8)?,
        })
    }

    fn into_request(self) -> DbResult<ConsultationRequest> {
        let pet_type =
            ConsultPetType::from_label(&self.pet_type).ok_or_else(|| DbError::InvalidLabel {
                column: "pet_type",
                value: self.pet_type.clone(),
            })?;
        let urgency = Urgency::from_label(&self.urgency).ok_or_else(|| DbError::InvalidLabel {
            column: "urgency",
            value: self.urgency.clone(),
        })?;
        Ok(ConsultationRequest {
            request_id: self.request_id,
            owner_name: self.owner_name,
            email: self.email,
            phone: self.phone,
            pet_type,
            pet_age: self.pet_age,
            symptoms: self.symptoms,
            urgency,
            submitted_at: self.submitted_at,
        })
    }
}

impl Database {
    /// Store a submitted consultation request.
    pub fn insert_consultation(&self, request: &ConsultationRequest) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO consultations (
                request_id, owner_name, email, phone, pet_type, pet_age,
                symptoms, urgency, submitted_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                request.request_id,
                request.owner_name,
                request.email,
                request.phone,
                request.pet_type.label(),
                request.pet_age,
                request.symptoms,
                request.urgency.label(),
                request.submitted_at,
            ],
        )?;
        Ok(())
    }

    /// Get a consultation by request ID.
    pub fn get_consultation(&self, request_id: &str) -> DbResult<Option<ConsultationRequest>> {
        let row = self
            .conn
            .query_row(
                &format!("{} WHERE request_id = ?", SELECT_COLUMNS),
                [request_id],
                ConsultationRow::from_row,
            )
            .optional()?;
        row.map(ConsultationRow::into_request).transpose()
    }

    /// Most recent consultations first.
    pub fn list_consultations(&self, limit: usize) -> DbResult<Vec<ConsultationRequest>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} ORDER BY submitted_at DESC, rowid DESC LIMIT ?",
            SELECT_COLUMNS
        ))?;

        let rows = stmt
            .query_map([limit as i64], ConsultationRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(ConsultationRow::into_request).collect()
    }

    /// Number of stored consultations.
    pub fn count_consultations(&self) -> DbResult<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM consultations", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl SubmissionSink for Database {
    fn submit(&mut self, request: &ConsultationRequest) -> SinkResult<()> {
        self.insert_consultation(request)?;
        tracing::info!(
            request_id = %request.request_id,
            urgency = %request.urgency,
            "Consultation stored in outbox"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate;
    use crate::models::ConsultationForm;

    fn make_request(owner: &str) -> ConsultationRequest {
        let form = ConsultationForm {
            owner_name: owner.into(),
            email: "a@b.com".into(),
            phone: "555-1234".into(),
            pet_type: Some(ConsultPetType::Rabbit),
            pet_age: "6 months".into(),
            symptoms: "Not eating hay for a day".into(),
            urgency: Some(Urgency::Soon),
        };
        validate(&form).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let db = Database::open_in_memory().unwrap();
        let request = make_request("Sam Lee");
        db.insert_consultation(&request).unwrap();

        let loaded = db.get_consultation(&request.request_id).unwrap().unwrap();
        assert_eq!(loaded, request);
        assert_eq!(db.count_consultations().unwrap(), 1);
    }

    #[test]
    fn test_get_missing() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_consultation("nope").unwrap().is_none());
    }

    #[test]
    fn test_list_limit() {
        let db = Database::open_in_memory().unwrap();
        for owner in ["One", "Two", "Three"] {
            db.insert_consultation(&make_request(owner)).unwrap();
        }
        assert_eq!(db.list_consultations(2).unwrap().len(), 2);
        assert_eq!(db.list_consultations(10).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_stored_label_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        let request = make_request("Sam Lee");
        db.insert_consultation(&request).unwrap();
        db.conn
            .execute(
                "UPDATE consultations SET urgency = 'Whenever' WHERE request_id = ?",
                [&request.request_id],
            )
            .unwrap();

        match db.get_consultation(&request.request_id) {
            Err(DbError::InvalidLabel { column, value }) => {
                assert_eq!(column, "urgency");
                assert_eq!(value, "Whenever");
            }
            other => panic!("expected invalid label, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_request_rejected() {
        let mut db = Database::open_in_memory().unwrap();
        let request = make_request("Sam Lee");
        db.submit(&request).unwrap();
        assert!(db.submit(&request).is_err());
    }
}
