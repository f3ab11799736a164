use diesel::prelude::*;
use serde::Serialize;
use crate::schema::contacts;

#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: i32, // int timestamp utc epoch
}

#[derive(Insertable)]
#[diesel(table_name = contacts)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: i32,
}
