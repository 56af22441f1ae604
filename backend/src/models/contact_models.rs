use diesel::prelude::*;
use shared::ValidatedContact;

use crate::schema::contact_submissions;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = contact_submissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactSubmission {
    pub id: i32,
    pub full_name: String,
    pub work_email: String, // stored lowercased
    pub company: String,
    pub challenge: String,
    pub project: Option<String>,
    pub locale: Option<String>, // language the visitor had active when submitting
    pub user_agent: Option<String>,
    pub created_at: i32, // int timestamp utc epoch
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = contact_submissions)]
pub struct NewContactSubmission {
    pub full_name: String,
    pub work_email: String,
    pub company: String,
    pub challenge: String,
    pub project: Option<String>,
    pub locale: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: i32,
}

impl NewContactSubmission {
    pub fn from_validated(contact: ValidatedContact, user_agent: Option<String>, created_at: i32) -> Self {
        Self {
            full_name: contact.full_name,
            work_email: contact.work_email,
            company: contact.company,
            challenge: contact.challenge,
            project: contact.project,
            locale: contact.locale,
            user_agent,
            created_at,
        }
    }
}
