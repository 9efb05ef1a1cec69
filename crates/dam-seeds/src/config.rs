//! Session configuration.

/// Default number of customers generated per session.
pub const DEFAULT_CUSTOMER_COUNT: usize = 2;

/// Default advisory folder-tree depth.
pub const DEFAULT_MAX_FOLDER_DEPTH: usize = 6;

/// Default cap on assets generated under one root folder.
pub const DEFAULT_MAX_ASSETS: usize = 30;

/// Default cap on projects generated per customer.
pub const DEFAULT_MAX_PROJECTS: usize = 10;

/// Default cap on sibling folders generated under one root folder.
pub const DEFAULT_MAX_FOLDERS: usize = 10;

/// Default cap on collections generated per parent record.
pub const DEFAULT_MAX_COLLECTIONS: usize = 10;

/// Configuration for one generation session.
///
/// The `max_*` counts cap the corresponding random per-parent draws during
/// [`crate::Seeds::init`]; a cap of 0 yields no children of that kind.
/// `max_folder_depth` is advisory: generation currently materializes exactly
/// one folder level below each project root, and the option is carried for a
/// future recursive extension.
///
/// The core does not re-validate configuration; callers are responsible for
/// supplying sensible values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    /// Number of customers to create during `init`.
    pub customer_count: usize,
    /// Advisory bound on folder-tree depth.
    pub max_folder_depth: usize,
    /// Cap on assets per root folder.
    pub max_assets: usize,
    /// Cap on projects per customer.
    pub max_projects: usize,
    /// Cap on sibling folders per root folder.
    pub max_folders: usize,
    /// Cap on collections per parent record.
    pub max_collections: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            customer_count: DEFAULT_CUSTOMER_COUNT,
            max_folder_depth: DEFAULT_MAX_FOLDER_DEPTH,
            max_assets: DEFAULT_MAX_ASSETS,
            max_projects: DEFAULT_MAX_PROJECTS,
            max_folders: DEFAULT_MAX_FOLDERS,
            max_collections: DEFAULT_MAX_COLLECTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let options = SeedOptions::default();

        assert_eq!(options.customer_count, 2);
        assert_eq!(options.max_folder_depth, 6);
        assert_eq!(options.max_assets, 30);
        assert_eq!(options.max_projects, 10);
        assert_eq!(options.max_folders, 10);
        assert_eq!(options.max_collections, 10);
    }
}
