//! Central store of created records.
//!
//! One ordered, append-only bucket per record kind; the single source of
//! truth for everything created during a session. Records are appended on
//! creation and never removed. Derived asset sets are computed fresh on every
//! call rather than cached, so they stay consistent with mutations made
//! through the `*_mut` accessors.

use uuid::Uuid;

use crate::record::{
    Asset, Collection, Customer, Folder, Group, Project, RecordKind, RecordRef, User,
};

/// Mapping from record kind to the ordered sequence of created records.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordStore {
    /// All customers, in creation order.
    pub customers: Vec<Customer>,
    /// All projects, in creation order.
    pub projects: Vec<Project>,
    /// All users, in creation order.
    pub users: Vec<User>,
    /// All groups, in creation order.
    pub groups: Vec<Group>,
    /// All folders, in creation order.
    pub folders: Vec<Folder>,
    /// All collections, in creation order.
    pub collections: Vec<Collection>,
    /// All assets, in creation order.
    pub assets: Vec<Asset>,
}

impl RecordStore {
    /// Creates an empty store for a new session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customers: Vec::new(),
            projects: Vec::new(),
            users: Vec::new(),
            groups: Vec::new(),
            folders: Vec::new(),
            collections: Vec::new(),
            assets: Vec::new(),
        }
    }

    /// Number of stored records of the given kind.
    #[must_use]
    pub fn len_of(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Customers => self.customers.len(),
            RecordKind::Projects => self.projects.len(),
            RecordKind::Users => self.users.len(),
            RecordKind::Groups => self.groups.len(),
            RecordKind::Folders => self.folders.len(),
            RecordKind::Collections => self.collections.len(),
            RecordKind::Assets => self.assets.len(),
        }
    }

    /// Total number of stored records across every kind.
    #[must_use]
    pub fn total(&self) -> usize {
        RecordKind::ALL
            .iter()
            .map(|kind| self.len_of(*kind))
            .sum()
    }

    /// Per-kind record counts, in bucket order.
    #[must_use]
    pub fn counts(&self) -> [(RecordKind, usize); 7] {
        RecordKind::ALL.map(|kind| (kind, self.len_of(kind)))
    }

    /// Looks up a customer by id.
    #[must_use]
    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|record| record.id == id)
    }

    /// Looks up a customer by id for mutation.
    pub fn customer_mut(&mut self, id: Uuid) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|record| record.id == id)
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|record| record.id == id)
    }

    /// Looks up a folder by id.
    #[must_use]
    pub fn folder(&self, id: Uuid) -> Option<&Folder> {
        self.folders.iter().find(|record| record.id == id)
    }

    /// Looks up a folder by id for mutation.
    pub fn folder_mut(&mut self, id: Uuid) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|record| record.id == id)
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|record| record.id == id)
    }

    /// Looks up a user by id for mutation.
    pub fn user_mut(&mut self, id: Uuid) -> Option<&mut User> {
        self.users.iter_mut().find(|record| record.id == id)
    }

    /// Looks up a group by id.
    #[must_use]
    pub fn group(&self, id: Uuid) -> Option<&Group> {
        self.groups.iter().find(|record| record.id == id)
    }

    /// Looks up a group by id for mutation.
    pub fn group_mut(&mut self, id: Uuid) -> Option<&mut Group> {
        self.groups.iter_mut().find(|record| record.id == id)
    }

    /// Looks up a collection by id.
    #[must_use]
    pub fn collection(&self, id: Uuid) -> Option<&Collection> {
        self.collections.iter().find(|record| record.id == id)
    }

    /// Looks up an asset by id.
    #[must_use]
    pub fn asset(&self, id: Uuid) -> Option<&Asset> {
        self.assets.iter().find(|record| record.id == id)
    }

    /// All assets reachable from the project's folder tree, in depth-first
    /// order: each folder's direct assets, then its child folders recursively.
    ///
    /// Recomputed fresh per call, never cached, so the result always matches
    /// the stored folder tree even though assets are physically stored only
    /// under folders.
    #[must_use]
    pub fn project_assets(&self, project: &Project) -> Vec<RecordRef> {
        let mut collected = Vec::new();
        self.collect_folder_assets(project.root_folder.id, &mut collected);
        collected
    }

    /// The flattened union of every owned project's derived asset set, in
    /// project order.
    #[must_use]
    pub fn customer_assets(&self, customer: &Customer) -> Vec<RecordRef> {
        customer
            .projects
            .iter()
            .filter_map(|reference| self.project(reference.id))
            .flat_map(|project| self.project_assets(project))
            .collect()
    }

    fn collect_folder_assets(&self, folder_id: Uuid, collected: &mut Vec<RecordRef>) {
        let Some(folder) = self.folder(folder_id) else {
            return;
        };
        collected.extend(folder.assets.iter().copied());
        for child in &folder.folders {
            self.collect_folder_assets(child.id, collected);
        }
    }

    pub(crate) fn insert_customer(&mut self, record: Customer) -> RecordRef {
        let handle = RecordRef {
            id: record.id,
            kind: record.kind,
        };
        self.customers.push(record);
        handle
    }

    pub(crate) fn insert_project(&mut self, record: Project) -> RecordRef {
        let handle = RecordRef {
            id: record.id,
            kind: record.kind,
        };
        self.projects.push(record);
        handle
    }

    pub(crate) fn insert_user(&mut self, record: User) -> RecordRef {
        let handle = RecordRef {
            id: record.id,
            kind: record.kind,
        };
        self.users.push(record);
        handle
    }

    pub(crate) fn insert_group(&mut self, record: Group) -> RecordRef {
        let handle = RecordRef {
            id: record.id,
            kind: record.kind,
        };
        self.groups.push(record);
        handle
    }

    pub(crate) fn insert_folder(&mut self, record: Folder) -> RecordRef {
        let handle = RecordRef {
            id: record.id,
            kind: record.kind,
        };
        self.folders.push(record);
        handle
    }

    pub(crate) fn insert_collection(&mut self, record: Collection) -> RecordRef {
        let handle = RecordRef {
            id: record.id,
            kind: record.kind,
        };
        self.collections.push(record);
        handle
    }

    pub(crate) fn insert_asset(&mut self, record: Asset) -> RecordRef {
        let handle = RecordRef {
            id: record.id,
            kind: record.kind,
        };
        self.assets.push(record);
        handle
    }
}
