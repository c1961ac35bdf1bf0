use diesel::prelude::*;
use crate::schema::contact_requests;

/// One row of the contact_requests table, minus the columns the store fills
/// in itself (id, created_at). Inserted exactly once per accepted submission.
#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = contact_requests)]
pub struct NewContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: Option<String>,
    pub source_page: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Request context the submitter never types in: inferred from transport
/// headers and the connection itself.
#[derive(Debug, PartialEq)]
pub struct RequestMetadata {
    pub source_page: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}
