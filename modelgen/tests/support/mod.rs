//! Models shared by the integration tests.

use std::time::SystemTime;

use modelgen::Model;
use serde::Serialize;

/// Certificate record with the annotations a CRUD template set reads.
#[derive(Debug, Serialize, Model)]
#[serde(rename_all = "snake_case")]
pub struct CertModel {
    #[model(persist = "primaryKey")]
    pub id: i64,
    #[model(persist = "default:0;index")]
    pub default: bool,
    #[model(persist = "comment:证书名称", validate = "required,max=64", required)]
    pub name: String,
    #[model(persist = "comment:外部名称")]
    pub public_name: String,
    #[serde(skip)]
    pub cert_path: String,
    #[serde(skip)]
    pub mobileprovision: String,
    #[model(persist = "comment:备注", remark = "free text shown in lists")]
    pub remark: String,
    #[model(persist = "comment:状态;index", validate = "oneof=0 1 2")]
    pub status: i32,
    #[model(persist = "comment:最后检测")]
    pub check_time: SystemTime,
    pub issue_time: Option<SystemTime>,
    pub expire_time: Option<SystemTime>,
    #[model(persist = "comment:创建时间;autoCreateTime")]
    pub create_time: SystemTime,
    #[serde(skip)]
    #[model(persist = "index")]
    pub delete_time: Option<SystemTime>,
}

/// Soft-delete marker.
#[derive(Debug, Serialize)]
pub struct DeletedAt(pub SystemTime);

/// Columns shared by several records.
#[derive(Debug, Serialize, Model)]
pub struct Timestamps {
    pub create_time: SystemTime,
    pub update_time: SystemTime,
    pub delete_time: Option<DeletedAt>,
}

/// Review metadata, present only on some records.
#[derive(Debug, Serialize, Model)]
pub struct Audit {
    #[model(label = "审核人")]
    pub reviewer: String,
}

/// Record embedding two flattened members.
#[derive(Debug, Serialize, Model)]
pub struct Article {
    pub id: u64,
    #[serde(flatten)]
    pub stamps: Timestamps,
    pub title: String,
    #[model(flatten)]
    pub audit: Option<Audit>,
}
