//! The certificate record scaffolding is generated for.

use std::time::SystemTime;

use modelgen::Model;
use serde::Serialize;

/// Signing certificate tracked by the release tooling.
#[derive(Debug, Clone, Serialize, Model)]
#[serde(rename_all = "snake_case")]
pub struct CertModel {
    /// Primary key.
    #[model(persist = "primaryKey")]
    pub id: i64,
    /// Whether this is the default certificate.
    #[model(persist = "default:0;index")]
    pub default: bool,
    /// Internal name.
    #[model(persist = "comment:证书名称", validate = "required,max=64", required)]
    pub name: String,
    /// Name shown to external users.
    #[model(persist = "comment:外部名称", validate = "max=128")]
    pub public_name: String,
    /// Location of the certificate on disk.
    #[serde(skip)]
    pub cert_path: String,
    /// Location of the provisioning profile on disk.
    #[serde(skip)]
    pub mobileprovision: String,
    /// Free-form notes.
    #[model(persist = "comment:备注", remark = "shown in the list view")]
    pub remark: String,
    /// Lifecycle status.
    #[model(persist = "comment:状态;index", validate = "oneof=0 1 2")]
    pub status: i32,
    /// When the certificate was last checked.
    #[model(persist = "comment:最后检测")]
    pub check_time: Option<SystemTime>,
    /// When the certificate was issued.
    pub issue_time: Option<SystemTime>,
    /// When the certificate expires.
    pub expire_time: Option<SystemTime>,
    /// When the record was created.
    #[model(persist = "comment:创建时间;autoCreateTime")]
    pub create_time: SystemTime,
    /// Soft-delete marker.
    #[serde(skip)]
    #[model(persist = "index")]
    pub delete_time: Option<SystemTime>,
}
