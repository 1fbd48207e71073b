//! # Channel Model
//!
//! A content channel (YouTube, Telegram, VK Video) that sponsored
//! integrations are placed on. Channels are immutable once seeded.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "channels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub channel_type: ChannelType,

    pub status: ChannelStatus,

    /// Public URL of the channel.
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ChannelType {
    #[sea_orm(string_value = "YOUTUBE")]
    #[serde(rename = "YOUTUBE")]
    Youtube,

    #[sea_orm(string_value = "TELEGRAM")]
    #[serde(rename = "TELEGRAM")]
    Telegram,

    #[sea_orm(string_value = "VK_VIDEO")]
    #[serde(rename = "VK_VIDEO")]
    VkVideo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ChannelStatus {
    #[sea_orm(string_value = "RELEASED")]
    #[serde(rename = "RELEASED")]
    Released,

    #[sea_orm(string_value = "TO_WORK")]
    #[serde(rename = "TO_WORK")]
    ToWork,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::integration::Entity")]
    Integration,
}

impl Related<super::integration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Integration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
