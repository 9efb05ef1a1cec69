//! Integration tests for full-graph generation.
//!
//! These tests validate the generated graph through the public API:
//! population, referential integrity, membership consistency, and
//! reproducibility.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use dam_seeds::{RecordKind, RecordRef, SeedOptions, Seeds};
use rstest::rstest;
use uuid::Uuid;

fn initialized(seed: u64, options: SeedOptions) -> Seeds {
    let mut seeds = Seeds::with_seed(seed, options);
    seeds.init();
    seeds
}

fn resolves(seeds: &Seeds, reference: RecordRef) -> bool {
    let store = seeds.store();
    match reference.kind {
        RecordKind::Customers => store.customer(reference.id).is_some(),
        RecordKind::Projects => store.project(reference.id).is_some(),
        RecordKind::Users => store.user(reference.id).is_some(),
        RecordKind::Groups => store.group(reference.id).is_some(),
        RecordKind::Folders => store.folder(reference.id).is_some(),
        RecordKind::Collections => store.collection(reference.id).is_some(),
        RecordKind::Assets => store.asset(reference.id).is_some(),
    }
}

#[rstest]
#[case(RecordKind::Customers)]
#[case(RecordKind::Projects)]
#[case(RecordKind::Users)]
#[case(RecordKind::Groups)]
#[case(RecordKind::Folders)]
#[case(RecordKind::Collections)]
#[case(RecordKind::Assets)]
fn init_populates_every_bucket(#[case] kind: RecordKind) {
    let seeds = initialized(42, SeedOptions::default());

    assert!(
        seeds.store().len_of(kind) > 0,
        "no {kind} records generated"
    );
}

#[test]
fn every_relationship_reference_resolves() {
    let seeds = initialized(42, SeedOptions::default());
    let store = seeds.store();

    let mut references: Vec<RecordRef> = Vec::new();
    for customer in &store.customers {
        references.extend(&customer.groups);
        references.extend(&customer.projects);
        references.extend(&customer.users);
    }
    for project in &store.projects {
        references.push(project.root_folder);
        references.extend(project.customer);
    }
    for folder in &store.folders {
        references.extend(&folder.folders);
        references.extend(&folder.collections);
        references.extend(&folder.assets);
        references.extend(folder.parent);
    }
    for user in &store.users {
        references.extend(&user.collections);
        references.extend(&user.groups);
        references.extend(user.customer);
    }
    for group in &store.groups {
        references.extend(&group.collections);
        references.extend(&group.users);
        references.extend(group.customer);
    }
    for collection in &store.collections {
        references.extend(&collection.assets);
        references.extend(collection.folder);
        references.extend(collection.user);
        references.extend(collection.customer);
    }
    for asset in &store.assets {
        references.extend(asset.folder);
    }

    assert!(!references.is_empty());
    for reference in references {
        assert!(
            resolves(&seeds, reference),
            "dangling {} reference: {}",
            reference.kind,
            reference.id
        );
    }
}

#[test]
fn group_membership_is_mutually_consistent() {
    let seeds = initialized(42, SeedOptions::default());
    let store = seeds.store();

    for group in &store.groups {
        for member in &group.users {
            let user = store.user(member.id).expect("member resolves");
            assert!(
                user.groups.iter().any(|reference| reference.id == group.id),
                "group {} lists user {} but not vice versa",
                group.id,
                user.id
            );
        }
    }
    for user in &store.users {
        for membership in &user.groups {
            let group = store.group(membership.id).expect("group resolves");
            assert!(
                group.users.iter().any(|reference| reference.id == user.id),
                "user {} lists group {} but not vice versa",
                user.id,
                group.id
            );
        }
    }
}

#[test]
fn collection_assets_stay_within_the_owning_customer() {
    let seeds = initialized(42, SeedOptions::default());
    let store = seeds.store();

    for customer in &store.customers {
        let owned: HashSet<Uuid> = store
            .customer_assets(customer)
            .into_iter()
            .map(|reference| reference.id)
            .collect();

        for user_ref in &customer.users {
            let user = store.user(user_ref.id).expect("user resolves");
            for collection_ref in &user.collections {
                let collection = store
                    .collection(collection_ref.id)
                    .expect("collection resolves");
                for asset in &collection.assets {
                    assert!(
                        owned.contains(&asset.id),
                        "user collection references an asset outside the customer"
                    );
                }
            }
        }
    }
}

#[test]
fn derived_project_assets_cover_every_generated_asset() {
    let seeds = initialized(42, SeedOptions::default());
    let store = seeds.store();

    let derived: HashSet<Uuid> = store
        .projects
        .iter()
        .flat_map(|project| store.project_assets(project))
        .map(|reference| reference.id)
        .collect();
    let stored: HashSet<Uuid> = store.assets.iter().map(|asset| asset.id).collect();

    assert_eq!(derived, stored);
}

#[test]
fn identifiers_are_unique_across_the_whole_graph() {
    let seeds = initialized(42, SeedOptions::default());
    let store = seeds.store();

    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut total = 0;
    let ids = store
        .customers
        .iter()
        .map(|r| r.id)
        .chain(store.projects.iter().map(|r| r.id))
        .chain(store.users.iter().map(|r| r.id))
        .chain(store.groups.iter().map(|r| r.id))
        .chain(store.folders.iter().map(|r| r.id))
        .chain(store.collections.iter().map(|r| r.id))
        .chain(store.assets.iter().map(|r| r.id));
    for id in ids {
        assert!(seen.insert(id), "duplicate identifier: {id}");
        total += 1;
    }

    assert_eq!(total, store.total());
}

#[test]
fn repeated_init_leaves_the_graph_untouched() {
    let mut seeds = initialized(42, SeedOptions::default());
    let before = seeds.store().clone();

    seeds.init();
    seeds.init();

    assert_eq!(*seeds.store(), before);
}

#[test]
fn generation_is_reproducible_for_a_fixed_seed() {
    let first = initialized(2026, SeedOptions::default());
    let second = initialized(2026, SeedOptions::default());

    assert_eq!(first.store(), second.store());
}

#[test]
fn single_customer_sessions_scope_everything_to_that_customer() {
    let options = SeedOptions {
        customer_count: 1,
        ..SeedOptions::default()
    };
    let seeds = initialized(7, options);
    let store = seeds.store();

    assert_eq!(store.customers.len(), 1);
    let customer = store.customers.first().expect("customer generated");

    for project in &store.projects {
        assert_eq!(project.customer.map(|r| r.id), Some(customer.id));
    }
    for user in &store.users {
        assert_eq!(user.customer.map(|r| r.id), Some(customer.id));
    }
    for group in &store.groups {
        assert_eq!(group.customer.map(|r| r.id), Some(customer.id));
    }
}
