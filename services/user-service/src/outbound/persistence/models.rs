//! Internal Diesel row structs for the users table.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{PasswordHash, User, UserId, UserProfile};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub display_name: String,
    pub email: String,
    pub tel: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow {
            id,
            name,
            surname,
            display_name,
            email,
            tel,
            password,
        } = row;
        Self::new(
            UserId::new(id),
            UserProfile {
                name,
                surname,
                display_name,
                email,
                tel,
            },
            PasswordHash::new(password),
        )
    }
}

/// Insertable struct for registering a new account.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub display_name: &'a str,
    pub email: &'a str,
    pub tel: &'a str,
    pub password: &'a str,
}

/// Changeset for profile updates. It has no password column, so profile
/// updates never touch the stored hash.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct ProfileChangeset<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub display_name: &'a str,
    pub email: &'a str,
    pub tel: &'a str,
}

impl<'a> From<&'a UserProfile> for ProfileChangeset<'a> {
    fn from(profile: &'a UserProfile) -> Self {
        Self {
            name: &profile.name,
            surname: &profile.surname,
            display_name: &profile.display_name,
            email: &profile.email,
            tel: &profile.tel,
        }
    }
}
