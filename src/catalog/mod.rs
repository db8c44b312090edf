//! Translation catalogs: nested JSON objects of translation keys.
//!
//! Every nested object is a sub-catalog and every other value is a leaf.

/// Recursive key edits (removal and empty-object cleanup)
mod edit;
/// Flat key view of a catalog
mod flatten;
/// Loading, backup and saving of catalog files
mod io;

pub use edit::{
    clean_empty_objects,
    remove_key,
};
pub use flatten::{
    FlatCatalog,
    flatten_catalog,
    key_set,
    unflatten,
};
pub use io::{
    CatalogError,
    LoadedCatalog,
    backup_path,
    load_catalog,
    save_catalog,
    to_pretty_json,
    write_backup,
};

/// One locale's translation document (insertion ordered).
pub type Catalog = serde_json::Map<String, serde_json::Value>;
