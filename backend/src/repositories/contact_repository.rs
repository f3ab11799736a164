use diesel::prelude::*;
use crate::{
    error::ContactError,
    models::contact_models::{ContactRecord, NewContact},
    schema::contacts,
    DbPool,
};

pub struct ContactRepository {
    pool: DbPool
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Insert a submission and hand back the stored row
    pub fn create_contact(&self, new_contact: NewContact) -> Result<ContactRecord, ContactError> {
        let mut conn = self.pool.get()?;
        let record = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(contacts::table)
                .values(&new_contact)
                .execute(conn)?;
            contacts::table
                .order(contacts::id.desc())
                .select(ContactRecord::as_select())
                .first(conn)
        })?;
        Ok(record)
    }

    pub fn count_contacts(&self) -> Result<i64, ContactError> {
        let mut conn = self.pool.get()?;
        let count = contacts::table.count().get_result(&mut conn)?;
        Ok(count)
    }
}
