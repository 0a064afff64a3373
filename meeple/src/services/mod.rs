mod collection;

pub use collection::CollectionService;
