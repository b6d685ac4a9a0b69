use crate::schema::teams;
use diesel::prelude::*;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = teams)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TeamModel {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub city: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub is_favorited: bool,
    pub position: i32,
}

// For seeding the catalog
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = teams)]
pub struct NewTeam {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub city: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub is_favorited: bool,
    pub position: i32,
}
