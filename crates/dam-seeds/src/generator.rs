//! Seed graph generation.
//!
//! [`Seeds`] is one generation session: per-entity constructors that register
//! records into the store, and an [`init`](Seeds::init) lifecycle that builds
//! a fully connected graph rooted at customers. Construction flows top-down
//! (customer, project, folder, asset/collection, user/group) and
//! bidirectional links are wired after children exist.
//!
//! `init` runs exactly once per session; later invocations are no-ops. With a
//! fixed seed the whole tree is reproducible.

use serde_json::Value;

use crate::config::SeedOptions;
use crate::error::ExportError;
use crate::helpers::Helpers;
use crate::provider::RandomProvider;
use crate::record::{
    Asset, AssetOverrides, Collection, CollectionOverrides, Customer, CustomerOverrides, Folder,
    FolderOverrides, Group, GroupOverrides, Project, ProjectOverrides, RecordKind, RecordRef,
    User, UserOverrides,
};
use crate::serialize;
use crate::store::RecordStore;

/// File format tag stamped on generated assets.
const ASSET_FILE_TYPE: &str = "JPG";

/// Storage location stamped on generated assets.
const ASSET_LOCATION: &str = "s3.amazonaws.com/xdam-clique-qa-assets";

/// Fixture password shared by every generated user.
const USER_PASSWORD: &str = "test";

/// Upper bound of the per-parent child-count draw before caps apply.
const CHILD_COUNT_MAX: usize = 10;

/// One seed-data generation session.
///
/// Entities are created only through the constructor methods, which append
/// the record to the session store and return a [`RecordRef`] handle; callers
/// mutate stored records further through [`Seeds::store_mut`]. A session is
/// driven by exactly one caller sequence from construction through `init`;
/// `&mut self` on every generating method enforces that at the type level.
#[derive(Debug, Clone)]
pub struct Seeds {
    options: SeedOptions,
    helpers: Helpers,
    store: RecordStore,
    initialized: bool,
}

impl Seeds {
    /// Creates a session seeded from operating-system entropy.
    #[must_use]
    pub fn new(options: SeedOptions) -> Self {
        Self::with_provider(RandomProvider::from_entropy(), options)
    }

    /// Creates a reproducible session: the same seed and options always
    /// generate the same tree.
    #[must_use]
    pub fn with_seed(seed: u64, options: SeedOptions) -> Self {
        Self::with_provider(RandomProvider::from_seed(seed), options)
    }

    fn with_provider(provider: RandomProvider, options: SeedOptions) -> Self {
        Self {
            options,
            helpers: Helpers::new(provider),
            store: RecordStore::new(),
            initialized: false,
        }
    }

    /// The session configuration.
    #[must_use]
    pub const fn options(&self) -> &SeedOptions {
        &self.options
    }

    /// Read access to every record created so far.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Mutable access to the stored records, e.g. to push children onto a
    /// record returned by a constructor.
    pub const fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Whether `init` has already completed for this session.
    #[must_use]
    pub const fn initialized(&self) -> bool {
        self.initialized
    }

    /// Creates and stores a customer.
    pub fn customer(&mut self, overrides: CustomerOverrides) -> RecordRef {
        let record = Customer {
            id: self.helpers.guid(),
            kind: RecordKind::Customers,
            name: overrides.name.unwrap_or_else(|| self.helpers.title()),
            created: overrides.created.unwrap_or_else(|| self.helpers.created()),
            modified: overrides.modified.unwrap_or_else(|| self.helpers.modified()),
            groups: Vec::new(),
            projects: Vec::new(),
            users: Vec::new(),
        };
        self.store.insert_customer(record)
    }

    /// Creates and stores a project.
    ///
    /// When no root folder is supplied, a fresh root folder is created and
    /// registered first.
    pub fn project(&mut self, overrides: ProjectOverrides) -> RecordRef {
        let root_folder = overrides
            .root_folder
            .unwrap_or_else(|| self.folder(FolderOverrides::default()));
        let record = Project {
            id: self.helpers.guid(),
            kind: RecordKind::Projects,
            name: overrides.name.unwrap_or_else(|| self.helpers.title()),
            created: overrides.created.unwrap_or_else(|| self.helpers.created()),
            modified: overrides.modified.unwrap_or_else(|| self.helpers.modified()),
            root_folder,
            customer: overrides.customer,
        };
        self.store.insert_project(record)
    }

    /// Creates and stores a folder.
    pub fn folder(&mut self, overrides: FolderOverrides) -> RecordRef {
        let record = Folder {
            id: self.helpers.guid(),
            kind: RecordKind::Folders,
            name: overrides.name.unwrap_or_else(|| self.helpers.title()),
            created: overrides.created.unwrap_or_else(|| self.helpers.created()),
            modified: overrides.modified.unwrap_or_else(|| self.helpers.modified()),
            folders: Vec::new(),
            collections: Vec::new(),
            assets: Vec::new(),
            parent: overrides.parent,
        };
        self.store.insert_folder(record)
    }

    /// Creates and stores an asset.
    ///
    /// The default filename is numbered by creation order across the session.
    pub fn asset(&mut self, overrides: AssetOverrides) -> RecordRef {
        let sequence = self.store.assets.len() + 1;
        let record = Asset {
            id: self.helpers.guid(),
            kind: RecordKind::Assets,
            name: overrides
                .name
                .unwrap_or_else(|| format!("XDAM_{sequence:05}.jpg")),
            created: overrides.created.unwrap_or_else(|| self.helpers.created()),
            modified: overrides.modified.unwrap_or_else(|| self.helpers.modified()),
            file_type: overrides
                .file_type
                .unwrap_or_else(|| ASSET_FILE_TYPE.to_owned()),
            location: overrides
                .location
                .unwrap_or_else(|| ASSET_LOCATION.to_owned()),
            folder: overrides.folder,
        };
        self.store.insert_asset(record)
    }

    /// Creates and stores a collection.
    pub fn collection(&mut self, overrides: CollectionOverrides) -> RecordRef {
        let record = Collection {
            id: self.helpers.guid(),
            kind: RecordKind::Collections,
            name: overrides.name.unwrap_or_else(|| self.helpers.title()),
            created: overrides.created.unwrap_or_else(|| self.helpers.created()),
            modified: overrides.modified.unwrap_or_else(|| self.helpers.modified()),
            assets: overrides.assets.unwrap_or_default(),
            folder: overrides.folder,
            user: overrides.user,
            customer: overrides.customer,
        };
        self.store.insert_collection(record)
    }

    /// Creates and stores a user.
    ///
    /// Login and email derive from the name fields; first names come from a
    /// small curated pool until it is exhausted.
    pub fn user(&mut self, overrides: UserOverrides) -> RecordRef {
        let firstname = overrides
            .firstname
            .unwrap_or_else(|| self.helpers.take_first_name());
        let lastname = overrides
            .lastname
            .unwrap_or_else(|| self.helpers.last_name());
        let email = overrides
            .email
            .unwrap_or_else(|| format!("{firstname}_{lastname}@email.com").to_lowercase());
        let login = overrides.login.unwrap_or_else(|| firstname.to_lowercase());
        let record = User {
            id: self.helpers.guid(),
            kind: RecordKind::Users,
            created: overrides.created.unwrap_or_else(|| self.helpers.created()),
            modified: overrides.modified.unwrap_or_else(|| self.helpers.modified()),
            email,
            login,
            password: overrides
                .password
                .unwrap_or_else(|| USER_PASSWORD.to_owned()),
            firstname,
            lastname,
            collections: Vec::new(),
            groups: Vec::new(),
            customer: overrides.customer,
        };
        self.store.insert_user(record)
    }

    /// Creates and stores a group.
    pub fn group(&mut self, overrides: GroupOverrides) -> RecordRef {
        let record = Group {
            id: self.helpers.guid(),
            kind: RecordKind::Groups,
            name: overrides.name.unwrap_or_else(|| self.helpers.title()),
            created: overrides.created.unwrap_or_else(|| self.helpers.created()),
            modified: overrides.modified.unwrap_or_else(|| self.helpers.modified()),
            collections: Vec::new(),
            users: Vec::new(),
            customer: overrides.customer,
        };
        self.store.insert_group(record)
    }

    /// Builds the full seed graph: customers down to assets, then the
    /// user/group membership cross-links.
    ///
    /// Idempotent in the no-op sense: the first call populates the store, and
    /// every later call returns immediately without touching it. Emits a
    /// one-time per-kind count summary as a `tracing` event; the summary is
    /// diagnostic only.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let customer_refs: Vec<RecordRef> = (0..self.options.customer_count)
            .map(|_| self.customer(CustomerOverrides::default()))
            .collect();

        for customer_ref in customer_refs {
            self.populate_customer(customer_ref);
        }

        tracing::info!(
            customers = self.store.customers.len(),
            projects = self.store.projects.len(),
            users = self.store.users.len(),
            groups = self.store.groups.len(),
            folders = self.store.folders.len(),
            collections = self.store.collections.len(),
            assets = self.store.assets.len(),
            "generated seed records"
        );
    }

    /// Random child count in `[1, 10]`, capped by the configured maximum.
    /// A cap of 0 yields no children.
    fn child_count(&mut self, cap: usize) -> usize {
        if cap == 0 {
            return 0;
        }
        self.helpers
            .random_count_between(1, cap.min(CHILD_COUNT_MAX))
    }

    fn populate_customer(&mut self, customer_ref: RecordRef) {
        let project_count = self.child_count(self.options.max_projects);
        let project_refs: Vec<RecordRef> = (0..project_count)
            .map(|_| {
                self.project(ProjectOverrides {
                    customer: Some(customer_ref),
                    ..ProjectOverrides::default()
                })
            })
            .collect();
        if let Some(customer) = self.store.customer_mut(customer_ref.id) {
            customer.projects.extend(project_refs.iter().copied());
        }

        for project_ref in &project_refs {
            self.populate_project(*project_ref);
        }

        self.populate_members(customer_ref);
    }

    /// Fills a project's root folder with assets, collections over those
    /// assets, and one level of sibling folders.
    fn populate_project(&mut self, project_ref: RecordRef) {
        let Some(root_ref) = self
            .store
            .project(project_ref.id)
            .map(|project| project.root_folder)
        else {
            return;
        };

        let asset_count = self.child_count(self.options.max_assets);
        let asset_refs: Vec<RecordRef> = (0..asset_count)
            .map(|_| {
                self.asset(AssetOverrides {
                    folder: Some(root_ref),
                    ..AssetOverrides::default()
                })
            })
            .collect();
        if let Some(root) = self.store.folder_mut(root_ref.id) {
            root.assets.extend(asset_refs.iter().copied());
        }

        let collection_count = self.child_count(self.options.max_collections);
        let collection_refs: Vec<RecordRef> = (0..collection_count)
            .map(|_| {
                let sample_size = self.helpers.random_count();
                let sampled = self.helpers.pick_subset(&asset_refs, sample_size);
                self.collection(CollectionOverrides {
                    assets: Some(sampled),
                    folder: Some(root_ref),
                    ..CollectionOverrides::default()
                })
            })
            .collect();
        if let Some(root) = self.store.folder_mut(root_ref.id) {
            root.collections.extend(collection_refs.iter().copied());
        }

        let folder_count = self.child_count(self.options.max_folders);
        let folder_refs: Vec<RecordRef> = (0..folder_count)
            .map(|_| {
                self.folder(FolderOverrides {
                    parent: Some(root_ref),
                    ..FolderOverrides::default()
                })
            })
            .collect();
        if let Some(root) = self.store.folder_mut(root_ref.id) {
            root.folders.extend(folder_refs.iter().copied());
        }
    }

    /// Creates a customer's users and groups and wires the membership links:
    /// users pick a random subset of groups, and each group's member list is
    /// then derived from those picks, establishing mutual consistency.
    fn populate_members(&mut self, customer_ref: RecordRef) {
        let user_count = self.helpers.random_count();
        let user_refs: Vec<RecordRef> = (0..user_count)
            .map(|_| {
                self.user(UserOverrides {
                    customer: Some(customer_ref),
                    ..UserOverrides::default()
                })
            })
            .collect();

        let group_count = self.helpers.random_count();
        let group_refs: Vec<RecordRef> = (0..group_count)
            .map(|_| {
                self.group(GroupOverrides {
                    customer: Some(customer_ref),
                    ..GroupOverrides::default()
                })
            })
            .collect();

        // Projects are wired by now, so the derived set is complete.
        let customer_assets: Vec<RecordRef> = self
            .store
            .customer(customer_ref.id)
            .map(|customer| self.store.customer_assets(customer))
            .unwrap_or_default();

        for user_ref in &user_refs {
            let collection_count = self.child_count(self.options.max_collections);
            let collection_refs: Vec<RecordRef> = (0..collection_count)
                .map(|_| {
                    let sample_size = self.helpers.random_count();
                    let sampled = self.helpers.pick_subset(&customer_assets, sample_size);
                    self.collection(CollectionOverrides {
                        assets: Some(sampled),
                        user: Some(*user_ref),
                        ..CollectionOverrides::default()
                    })
                })
                .collect();

            let membership_size = self.helpers.random_count();
            let memberships = self.helpers.pick_subset(&group_refs, membership_size);

            if let Some(user) = self.store.user_mut(user_ref.id) {
                user.collections.extend(collection_refs.iter().copied());
                user.groups.extend(memberships.iter().copied());
            }
        }
        if let Some(customer) = self.store.customer_mut(customer_ref.id) {
            customer.users.extend(user_refs.iter().copied());
        }

        for group_ref in &group_refs {
            let collection_count = self.child_count(self.options.max_collections);
            let collection_refs: Vec<RecordRef> = (0..collection_count)
                .map(|_| {
                    let sample_size = self.helpers.random_count();
                    let sampled = self.helpers.pick_subset(&customer_assets, sample_size);
                    self.collection(CollectionOverrides {
                        assets: Some(sampled),
                        customer: Some(customer_ref),
                        ..CollectionOverrides::default()
                    })
                })
                .collect();

            let members: Vec<RecordRef> = user_refs
                .iter()
                .copied()
                .filter(|user_ref| {
                    self.store.user(user_ref.id).is_some_and(|user| {
                        user.groups.iter().any(|membership| membership.id == group_ref.id)
                    })
                })
                .collect();

            if let Some(group) = self.store.group_mut(group_ref.id) {
                group.collections.extend(collection_refs.iter().copied());
                group.users.extend(members);
            }
        }
        if let Some(customer) = self.store.customer_mut(customer_ref.id) {
            customer.groups.extend(group_refs.iter().copied());
        }
    }

    /// Projects every stored record of `kind` into its output-safe form.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if a record cannot be converted to
    /// JSON.
    pub fn serialize(&self, kind: RecordKind) -> Result<Vec<Value>, ExportError> {
        serialize::serialize_kind(&self.store, kind)
    }

    /// Alias for [`Seeds::serialize`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if a record cannot be converted to
    /// JSON.
    pub fn retrieve(&self, kind: RecordKind) -> Result<Vec<Value>, ExportError> {
        self.serialize(kind)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    fn seeds() -> Seeds {
        Seeds::with_seed(42, SeedOptions::default())
    }

    #[rstest]
    #[case(RecordKind::Customers)]
    #[case(RecordKind::Projects)]
    #[case(RecordKind::Users)]
    #[case(RecordKind::Groups)]
    #[case(RecordKind::Folders)]
    #[case(RecordKind::Collections)]
    #[case(RecordKind::Assets)]
    fn constructors_tag_and_register_their_records(#[case] kind: RecordKind) {
        let mut seeds = seeds();

        let reference = match kind {
            RecordKind::Customers => seeds.customer(CustomerOverrides::default()),
            RecordKind::Projects => seeds.project(ProjectOverrides::default()),
            RecordKind::Users => seeds.user(UserOverrides::default()),
            RecordKind::Groups => seeds.group(GroupOverrides::default()),
            RecordKind::Folders => seeds.folder(FolderOverrides::default()),
            RecordKind::Collections => seeds.collection(CollectionOverrides::default()),
            RecordKind::Assets => seeds.asset(AssetOverrides::default()),
        };

        assert_eq!(reference.kind, kind);
        assert_eq!(seeds.store().len_of(kind), 1);
    }

    #[test]
    fn creating_a_project_registers_its_root_folder() {
        let mut seeds = seeds();

        let project_ref = seeds.project(ProjectOverrides::default());
        let project = seeds.store().project(project_ref.id).expect("stored");

        assert_eq!(project.root_folder.kind, RecordKind::Folders);
        assert!(seeds.store().folder(project.root_folder.id).is_some());
    }

    #[test]
    fn overrides_win_over_generated_defaults() {
        let mut seeds = seeds();

        let customer_ref = seeds.customer(CustomerOverrides {
            name: Some("Acme".to_owned()),
            created: Some("2017-06-01T00:00:00Z".to_owned()),
            ..CustomerOverrides::default()
        });
        let customer = seeds.store().customer(customer_ref.id).expect("stored");

        assert_eq!(customer.name, "Acme");
        assert_eq!(customer.created, "2017-06-01T00:00:00Z");
    }

    #[test]
    fn asset_filenames_are_numbered_by_creation_order() {
        let mut seeds = seeds();

        let first = seeds.asset(AssetOverrides::default());
        let second = seeds.asset(AssetOverrides::default());

        let store = seeds.store();
        assert_eq!(
            store.asset(first.id).map(|a| a.name.as_str()),
            Some("XDAM_00001.jpg")
        );
        assert_eq!(
            store.asset(second.id).map(|a| a.name.as_str()),
            Some("XDAM_00002.jpg")
        );
    }

    #[test]
    fn user_login_and_email_derive_from_the_name() {
        let mut seeds = seeds();

        let user_ref = seeds.user(UserOverrides {
            firstname: Some("Ada".to_owned()),
            lastname: Some("Lovelace".to_owned()),
            ..UserOverrides::default()
        });
        let user = seeds.store().user(user_ref.id).expect("stored");

        assert_eq!(user.login, "ada");
        assert_eq!(user.email, "ada_lovelace@email.com");
        assert_eq!(user.password, "test");
    }

    #[test]
    fn ids_are_unique_across_every_bucket() {
        let mut seeds = seeds();
        seeds.init();

        let store = seeds.store();
        let mut ids: HashSet<Uuid> = HashSet::new();
        let mut total = 0;

        for id in store
            .customers
            .iter()
            .map(|r| r.id)
            .chain(store.projects.iter().map(|r| r.id))
            .chain(store.users.iter().map(|r| r.id))
            .chain(store.groups.iter().map(|r| r.id))
            .chain(store.folders.iter().map(|r| r.id))
            .chain(store.collections.iter().map(|r| r.id))
            .chain(store.assets.iter().map(|r| r.id))
        {
            ids.insert(id);
            total += 1;
        }

        assert_eq!(ids.len(), total);
    }

    #[test]
    fn init_respects_the_configured_customer_count() {
        let mut seeds = Seeds::with_seed(42, SeedOptions {
            customer_count: 5,
            ..SeedOptions::default()
        });
        seeds.init();

        assert_eq!(seeds.store().customers.len(), 5);
    }

    #[test]
    fn init_is_a_no_op_after_the_first_run() {
        let mut seeds = seeds();
        seeds.init();
        let before = seeds.store().clone();

        seeds.init();

        assert!(seeds.initialized());
        assert_eq!(*seeds.store(), before);
    }

    #[test]
    fn init_honours_hard_caps_on_child_counts() {
        let mut seeds = Seeds::with_seed(7, SeedOptions {
            customer_count: 1,
            max_projects: 1,
            max_assets: 2,
            max_folders: 1,
            max_collections: 1,
            ..SeedOptions::default()
        });
        seeds.init();

        let store = seeds.store();
        assert_eq!(store.projects.len(), 1);
        assert!(store.assets.len() <= 2);
        // One root folder plus at most one sibling level folder.
        assert!(store.folders.len() <= 2);
    }

    #[test]
    fn zero_caps_generate_no_children_of_that_kind() {
        let mut seeds = Seeds::with_seed(7, SeedOptions {
            customer_count: 1,
            max_assets: 0,
            max_collections: 0,
            ..SeedOptions::default()
        });
        seeds.init();

        assert!(seeds.store().assets.is_empty());
        assert!(seeds.store().collections.is_empty());
    }

    #[test]
    fn same_seed_and_options_generate_identical_stores() {
        let mut first = seeds();
        let mut second = seeds();

        first.init();
        second.init();

        assert_eq!(first.store(), second.store());
    }

    #[test]
    fn different_seeds_generate_different_stores() {
        let mut first = Seeds::with_seed(1, SeedOptions::default());
        let mut second = Seeds::with_seed(2, SeedOptions::default());

        first.init();
        second.init();

        assert_ne!(
            first.store().customers.first().map(|c| c.id),
            second.store().customers.first().map(|c| c.id)
        );
    }
}
