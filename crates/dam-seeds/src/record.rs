//! Record types for the content-management fixture domain.
//!
//! Every record carries an immutable identifier, a kind discriminator, and
//! coarse-epoch timestamps. Relationships are stored as [`RecordRef`] stubs in
//! both directions: has-many fields hold `Vec<RecordRef>` and belongs-to
//! fields hold `Option<RecordRef>`. Full objects are never nested inside one
//! another, so serialized output stays linear in the number of records and
//! cycles cannot form.
//!
//! Belongs-to fields (including a project's root folder) are marked
//! `skip_serializing`: ownership back-references never appear in output. The
//! serializer's field selection is therefore explicit in these definitions
//! rather than implied by property enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminator naming each record kind.
///
/// Serialized as the plural bucket name (`"customers"`, `"assets"`, ...),
/// matching the keys of the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Top-level tenant owning projects, users, and groups.
    Customers,
    /// A body of work owned by a customer, rooted at one folder.
    Projects,
    /// A person belonging to a customer.
    Users,
    /// A named set of users within a customer.
    Groups,
    /// A node in a project's folder tree.
    Folders,
    /// A curated set of asset references.
    Collections,
    /// A stored file parented to a folder.
    Assets,
}

impl RecordKind {
    /// Every kind, in store-bucket order.
    pub const ALL: [Self; 7] = [
        Self::Customers,
        Self::Projects,
        Self::Users,
        Self::Groups,
        Self::Folders,
        Self::Collections,
        Self::Assets,
    ];

    /// The plural type tag used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Projects => "projects",
            Self::Users => "users",
            Self::Groups => "groups",
            Self::Folders => "folders",
            Self::Collections => "collections",
            Self::Assets => "assets",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal `{id, type}` stub standing in for a full record.
///
/// Returned by every constructor as the handle to the stored record, and
/// stored inside relationship fields so serialization never duplicates
/// nested objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RecordRef {
    /// Identifier of the referenced record.
    pub id: Uuid,
    /// Kind of the referenced record.
    #[serde(rename = "type")]
    pub kind: RecordKind,
}

/// Top-level tenant; owns projects, users, and groups.
///
/// A customer's asset set is derived, not stored: see
/// [`crate::RecordStore::customer_assets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier, assigned once.
    pub id: Uuid,
    /// Always [`RecordKind::Customers`].
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Human-readable label.
    pub name: String,
    /// Creation timestamp.
    pub created: String,
    /// Last-modification timestamp.
    pub modified: String,
    /// Groups belonging to this customer.
    pub groups: Vec<RecordRef>,
    /// Projects belonging to this customer.
    pub projects: Vec<RecordRef>,
    /// Users belonging to this customer.
    pub users: Vec<RecordRef>,
}

/// A body of work owned by a customer, rooted at exactly one folder.
///
/// A project's asset set is derived by walking the folder tree: see
/// [`crate::RecordStore::project_assets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, assigned once.
    pub id: Uuid,
    /// Always [`RecordKind::Projects`].
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Human-readable label.
    pub name: String,
    /// Creation timestamp.
    pub created: String,
    /// Last-modification timestamp.
    pub modified: String,
    /// Root of the project's folder tree. Never serialized.
    #[serde(skip_serializing)]
    pub root_folder: RecordRef,
    /// Owning customer. Never serialized.
    #[serde(skip_serializing)]
    pub customer: Option<RecordRef>,
}

/// A node in a project's folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique identifier, assigned once.
    pub id: Uuid,
    /// Always [`RecordKind::Folders`].
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Human-readable label.
    pub name: String,
    /// Creation timestamp.
    pub created: String,
    /// Last-modification timestamp.
    pub modified: String,
    /// Child folders.
    pub folders: Vec<RecordRef>,
    /// Collections parented to this folder.
    pub collections: Vec<RecordRef>,
    /// Assets stored directly in this folder.
    pub assets: Vec<RecordRef>,
    /// Parent folder; `None` for a project's root. Never serialized.
    #[serde(skip_serializing)]
    pub parent: Option<RecordRef>,
}

/// A stored file parented to a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier, assigned once.
    pub id: Uuid,
    /// Always [`RecordKind::Assets`].
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Filename, deterministically numbered by creation order.
    pub name: String,
    /// Creation timestamp.
    pub created: String,
    /// Last-modification timestamp.
    pub modified: String,
    /// File format tag.
    pub file_type: String,
    /// Storage location.
    pub location: String,
    /// Owning folder. Never serialized.
    #[serde(skip_serializing)]
    pub folder: Option<RecordRef>,
}

/// A curated set of asset references.
///
/// The `assets` field holds references, not ownership; the same asset may
/// appear in many collections. A collection belongs to a folder, a user, or a
/// customer context depending on where it was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Unique identifier, assigned once.
    pub id: Uuid,
    /// Always [`RecordKind::Collections`].
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Human-readable label.
    pub name: String,
    /// Creation timestamp.
    pub created: String,
    /// Last-modification timestamp.
    pub modified: String,
    /// Referenced assets.
    pub assets: Vec<RecordRef>,
    /// Owning folder, if folder-scoped. Never serialized.
    #[serde(skip_serializing)]
    pub folder: Option<RecordRef>,
    /// Owning user, if user-scoped. Never serialized.
    #[serde(skip_serializing)]
    pub user: Option<RecordRef>,
    /// Customer context, if group-scoped. Never serialized.
    #[serde(skip_serializing)]
    pub customer: Option<RecordRef>,
}

/// A person belonging to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned once.
    pub id: Uuid,
    /// Always [`RecordKind::Users`].
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Creation timestamp.
    pub created: String,
    /// Last-modification timestamp.
    pub modified: String,
    /// Email address, derived from the name fields.
    pub email: String,
    /// Login handle, derived from the first name.
    pub login: String,
    /// Fixture password.
    pub password: String,
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
    /// Collections owned by this user.
    pub collections: Vec<RecordRef>,
    /// Groups this user is a member of.
    pub groups: Vec<RecordRef>,
    /// Owning customer. Never serialized.
    #[serde(skip_serializing)]
    pub customer: Option<RecordRef>,
}

/// A named set of users within a customer.
///
/// Membership is mutually consistent with [`User::groups`]: a user appears in
/// `users` exactly when this group appears in that user's `groups` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique identifier, assigned once.
    pub id: Uuid,
    /// Always [`RecordKind::Groups`].
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Human-readable label.
    pub name: String,
    /// Creation timestamp.
    pub created: String,
    /// Last-modification timestamp.
    pub modified: String,
    /// Collections created in this group's context.
    pub collections: Vec<RecordRef>,
    /// Member users.
    pub users: Vec<RecordRef>,
    /// Owning customer. Never serialized.
    #[serde(skip_serializing)]
    pub customer: Option<RecordRef>,
}

/// Caller overrides for [`crate::Seeds::customer`]; set fields win over
/// generated defaults.
#[derive(Debug, Clone, Default)]
pub struct CustomerOverrides {
    /// Replaces the generated title.
    pub name: Option<String>,
    /// Replaces the generated creation timestamp.
    pub created: Option<String>,
    /// Replaces the generated modification timestamp.
    pub modified: Option<String>,
}

/// Caller overrides for [`crate::Seeds::project`].
#[derive(Debug, Clone, Default)]
pub struct ProjectOverrides {
    /// Replaces the generated title.
    pub name: Option<String>,
    /// Uses an existing folder as the root instead of creating one.
    pub root_folder: Option<RecordRef>,
    /// Owning customer back-reference.
    pub customer: Option<RecordRef>,
    /// Replaces the generated creation timestamp.
    pub created: Option<String>,
    /// Replaces the generated modification timestamp.
    pub modified: Option<String>,
}

/// Caller overrides for [`crate::Seeds::folder`].
#[derive(Debug, Clone, Default)]
pub struct FolderOverrides {
    /// Replaces the generated title.
    pub name: Option<String>,
    /// Parent folder back-reference; leave `None` for a root folder.
    pub parent: Option<RecordRef>,
    /// Replaces the generated creation timestamp.
    pub created: Option<String>,
    /// Replaces the generated modification timestamp.
    pub modified: Option<String>,
}

/// Caller overrides for [`crate::Seeds::asset`].
#[derive(Debug, Clone, Default)]
pub struct AssetOverrides {
    /// Replaces the generated filename.
    pub name: Option<String>,
    /// Replaces the default file format tag.
    pub file_type: Option<String>,
    /// Replaces the default storage location.
    pub location: Option<String>,
    /// Owning folder back-reference.
    pub folder: Option<RecordRef>,
    /// Replaces the generated creation timestamp.
    pub created: Option<String>,
    /// Replaces the generated modification timestamp.
    pub modified: Option<String>,
}

/// Caller overrides for [`crate::Seeds::collection`].
#[derive(Debug, Clone, Default)]
pub struct CollectionOverrides {
    /// Replaces the generated title.
    pub name: Option<String>,
    /// Asset references held by the collection.
    pub assets: Option<Vec<RecordRef>>,
    /// Owning folder back-reference.
    pub folder: Option<RecordRef>,
    /// Owning user back-reference.
    pub user: Option<RecordRef>,
    /// Customer-context back-reference.
    pub customer: Option<RecordRef>,
    /// Replaces the generated creation timestamp.
    pub created: Option<String>,
    /// Replaces the generated modification timestamp.
    pub modified: Option<String>,
}

/// Caller overrides for [`crate::Seeds::user`].
#[derive(Debug, Clone, Default)]
pub struct UserOverrides {
    /// Replaces the pooled or generated first name.
    pub firstname: Option<String>,
    /// Replaces the generated last name.
    pub lastname: Option<String>,
    /// Replaces the derived email address.
    pub email: Option<String>,
    /// Replaces the derived login handle.
    pub login: Option<String>,
    /// Replaces the fixture password.
    pub password: Option<String>,
    /// Owning customer back-reference.
    pub customer: Option<RecordRef>,
    /// Replaces the generated creation timestamp.
    pub created: Option<String>,
    /// Replaces the generated modification timestamp.
    pub modified: Option<String>,
}

/// Caller overrides for [`crate::Seeds::group`].
#[derive(Debug, Clone, Default)]
pub struct GroupOverrides {
    /// Replaces the generated title.
    pub name: Option<String>,
    /// Owning customer back-reference.
    pub customer: Option<RecordRef>,
    /// Replaces the generated creation timestamp.
    pub created: Option<String>,
    /// Replaces the generated modification timestamp.
    pub modified: Option<String>,
}
