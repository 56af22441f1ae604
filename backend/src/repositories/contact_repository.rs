use diesel::prelude::*;

use crate::{
    error::ContactError,
    models::contact_models::{ContactSubmission, NewContactSubmission},
    schema::contact_submissions,
    DbPool,
};

pub struct ContactRepository {
    pool: DbPool,
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Insert a lead and read back the stored row
    pub fn create_submission(&self, new_submission: &NewContactSubmission) -> Result<ContactSubmission, ContactError> {
        let mut conn = self.pool.get()?;
        let stored = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(contact_submissions::table)
                .values(new_submission)
                .execute(conn)?;

            contact_submissions::table
                .order(contact_submissions::id.desc())
                .select(ContactSubmission::as_select())
                .first(conn)
        })?;
        Ok(stored)
    }

    pub fn count_by_email(&self, email: &str) -> Result<i64, ContactError> {
        let mut conn = self.pool.get()?;
        let count = contact_submissions::table
            .filter(contact_submissions::work_email.eq(email.to_lowercase()))
            .count()
            .get_result(&mut conn)?;
        Ok(count)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use diesel::r2d2::{ConnectionManager, Pool};
    use diesel::SqliteConnection;
    use diesel_migrations::MigrationHarness;

    pub(crate) fn memory_pool() -> DbPool {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder().max_size(1).build(manager).unwrap();
        pool.get().unwrap().run_pending_migrations(crate::MIGRATIONS).unwrap();
        pool
    }

    fn submission(email: &str) -> NewContactSubmission {
        NewContactSubmission {
            full_name: "Grace Hopper".into(),
            work_email: email.into(),
            company: "Navy".into(),
            challenge: "platform".into(),
            project: None,
            locale: Some("en".into()),
            user_agent: None,
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn create_returns_stored_row() {
        let repository = ContactRepository::new(memory_pool());
        let first = repository.create_submission(&submission("grace@navy.mil")).unwrap();
        let second = repository.create_submission(&submission("other@navy.mil")).unwrap();

        assert_eq!(first.work_email, "grace@navy.mil");
        assert!(second.id > first.id);
        assert_eq!(second.locale.as_deref(), Some("en"));
    }

    #[test]
    fn count_by_email_ignores_case() {
        let repository = ContactRepository::new(memory_pool());
        repository.create_submission(&submission("grace@navy.mil")).unwrap();
        repository.create_submission(&submission("grace@navy.mil")).unwrap();

        assert_eq!(repository.count_by_email("GRACE@navy.mil").unwrap(), 2);
        assert_eq!(repository.count_by_email("nobody@navy.mil").unwrap(), 0);
    }
}
