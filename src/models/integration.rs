//! # Integration Model
//!
//! A sponsored-placement deal linking a channel and a payment, with the
//! placement date, view count, release status and the regulatory ERID
//! marker attached to the creative.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "integrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub channel_id: i32,

    pub payment_id: i32,

    pub integration_date: DateTimeWithTimeZone,

    pub views: i32,

    pub status: IntegrationStatus,

    /// Advertising-marking identifier (ERID) for the placed creative.
    pub erid_token: String,

    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum IntegrationStatus {
    #[sea_orm(string_value = "RELEASE")]
    #[serde(rename = "RELEASE")]
    Release,

    #[sea_orm(string_value = "CANCEL")]
    #[serde(rename = "CANCEL")]
    Cancel,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::channel::Entity",
        from = "Column::ChannelId",
        to = "super::channel::Column::Id"
    )]
    Channel,

    #[sea_orm(
        belongs_to = "super::payment::Entity",
        from = "Column::PaymentId",
        to = "super::payment::Column::Id"
    )]
    Payment,
}

impl Related<super::channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Channel.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
