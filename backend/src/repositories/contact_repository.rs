use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Unsigned};

use crate::{
    error::StoreError,
    models::contact_models::NewContactRequest,
    schema::contact_requests,
    DbPool,
};

/// Insert-only access to the contact request table. Handlers depend on the
/// trait rather than the concrete repository so tests can swap in a mock
/// store.
#[cfg_attr(test, mockall::automock)]
pub trait ContactStore: Send + Sync {
    /// Persists one submission and returns the id the store assigned to it.
    fn insert_contact(&self, new_contact: NewContactRequest) -> Result<u64, StoreError>;
}

pub struct ContactRepository {
    pool: DbPool,
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ContactStore for ContactRepository {
    fn insert_contact(&self, new_contact: NewContactRequest) -> Result<u64, StoreError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(contact_requests::table)
            .values(&new_contact)
            .execute(&mut conn)?;
        // MySQL reports the AUTO_INCREMENT id per connection, and the pooled
        // connection is held across both statements.
        let id = diesel::select(sql::<Unsigned<BigInt>>("last_insert_id()"))
            .get_result::<u64>(&mut conn)?;
        Ok(id)
    }
}
