//! # ORD Integration Model
//!
//! Mirror of an integration registered with the ORD (advertising data
//! operator). Rows are written by the export flow elsewhere in the backend;
//! the seeder only deletes them, and must do so before integrations.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ord_integrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub integration_id: i32,

    pub erid_token: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::integration::Entity",
        from = "Column::IntegrationId",
        to = "super::integration::Column::Id"
    )]
    Integration,
}

impl Related<super::integration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Integration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
